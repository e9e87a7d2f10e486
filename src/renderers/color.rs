//! Categorical color scale
//!
//! Categories are mapped to colors by their position in the domain, cycling
//! through the range. Keys that were never declared are appended to the
//! domain on first use, so every category gets a stable color.

use std::collections::HashMap;

/// Tableau 10 categorical palette
pub const SCHEME_TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f",
    "#edc949", "#af7aa1", "#ff9da7", "#9c755f", "#bab0ab",
];

/// ColorBrewer Set3 palette
pub const SCHEME_SET3: [&str; 12] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462",
    "#b3de69", "#fccde5", "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

/// Tableau 10 followed by Set3, 22 colors in total
pub fn default_range() -> Vec<String> {
    SCHEME_TABLEAU10
        .iter()
        .chain(SCHEME_SET3.iter())
        .map(|c| c.to_string())
        .collect()
}

/// Ordinal scale from category names to colors
#[derive(Clone, Debug)]
pub struct OrdinalScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: Vec<String>,
}

impl OrdinalScale {
    /// Create a scale; duplicate domain entries keep their first position
    pub fn new<I, S>(domain: I, range: Vec<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scale = Self {
            domain: Vec::new(),
            index: HashMap::new(),
            range,
        };
        for key in domain {
            scale.intern(key.into());
        }
        scale
    }

    fn intern(&mut self, key: String) -> usize {
        if let Some(&i) = self.index.get(&key) {
            return i;
        }
        let i = self.domain.len();
        self.index.insert(key.clone(), i);
        self.domain.push(key);
        i
    }

    /// Color for `key`, registering it if unseen; `None` when the range is empty
    pub fn color(&mut self, key: &str) -> Option<&str> {
        if self.range.is_empty() {
            return None;
        }
        let i = self.intern(key.to_string());
        Some(self.range[i % self.range.len()].as_str())
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}
