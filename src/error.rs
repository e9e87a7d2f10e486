//! Error types for chart loading and rendering
//!
//! Every failure on the way from the dataset URL to mounted SVG maps onto
//! `ChartError`. At the WASM boundary errors are logged and turned into
//! `JsValue` strings.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level chart error type
#[derive(Debug, Error)]
pub enum ChartError {
    /// The request could not be issued or the body could not be read
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    /// The server answered with a non-success status
    #[error("Dataset request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The dataset is not valid JSON or does not have the expected shape
    #[error("Invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required element is not present in the page
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// A DOM call failed
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Configuration values out of range
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),
}

impl ChartError {
    /// Wrap a JS exception thrown by a DOM call
    pub fn dom(context: &str, err: JsValue) -> Self {
        ChartError::Dom(format!("{}: {}", context, describe_js_value(&err)))
    }

    /// Wrap a JS exception thrown while fetching
    pub fn fetch(context: &str, err: JsValue) -> Self {
        ChartError::Fetch(format!("{}: {}", context, describe_js_value(&err)))
    }
}

impl From<ChartError> for JsValue {
    fn from(err: ChartError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value
fn describe_js_value(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type Result<T> = std::result::Result<T, ChartError>;
