//! Raw sales dataset
//!
//! The dataset is a tree of named nodes. Leaves carry a `category` (the
//! platform) and a `value` (sales in millions), which the published dataset
//! encodes as a string. Internal nodes only carry `name` and `children`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// One node of the dataset as it appears in the JSON document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SalesNode {
    /// Display name (game title, platform or dataset title)
    #[serde(default)]
    pub name: String,

    /// Platform the game belongs to (leaves only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Sales figure, kept in its raw JSON form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Child nodes; absent or empty means this node is a leaf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SalesNode>>,
}

impl SalesNode {
    /// Parse a dataset document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create a leaf with a numeric value
    pub fn leaf(name: &str, category: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            category: Some(category.to_string()),
            value: serde_json::Number::from_f64(value).map(Value::Number),
            children: None,
        }
    }

    /// Create an internal node
    pub fn branch(name: &str, children: Vec<SalesNode>) -> Self {
        Self {
            name: name.to_string(),
            category: None,
            value: None,
            children: Some(children),
        }
    }

    /// Copy of the node's own fields without its subtree
    pub fn without_children(&self) -> SalesNode {
        SalesNode {
            name: self.name.clone(),
            category: self.category.clone(),
            value: self.value.clone(),
            children: None,
        }
    }

    /// Children of this node, empty for leaves
    pub fn children(&self) -> &[SalesNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// True when the node has no children to lay out
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Numeric value used for sizing, with loose coercion
    ///
    /// Numbers are used as-is, numeric strings are parsed, booleans count as
    /// 1 or 0. Anything else, including non-finite results, counts as 0.
    pub fn numeric_value(&self) -> f64 {
        let value = match &self.value {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => parse_numeric_text(s),
            Some(Value::Bool(b)) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        };

        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Value as displayed in tooltips and `data-value` attributes
    pub fn value_text(&self) -> String {
        match &self.value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) => format_number(v),
                None => n.to_string(),
            },
            Some(other) => other.to_string(),
        }
    }

    /// Category as displayed, empty when absent
    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

/// Print a number the way a browser stringifies it: whole values without a
/// fraction, exponent form from 1e21 upwards
fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.abs() >= 1e21 {
        let text = format!("{:e}", v);
        return match text.find('e') {
            Some(i) if !text[i + 1..].starts_with('-') => {
                format!("{}e+{}", &text[..i], &text[i + 1..])
            }
            _ => text,
        };
    }
    format!("{}", v)
}

/// Parse text the way a loose numeric cast would; blank text is zero
fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // Rust accepts "inf"/"nan" spellings that should not count as numbers here
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return 0.0;
    }

    trimmed.parse::<f64>().unwrap_or(0.0)
}
