//! Shared helpers for WASM API operations
//!
//! Conversions between JavaScript values and Rust types, with every failure
//! logged before it is handed back to the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::ChartConfig;
use crate::error::ChartError;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Read an optional, possibly partial, chart configuration object
///
/// Range checks happen where the configuration is used.
pub fn config_from_js(value: JsValue) -> Result<ChartConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(ChartConfig::default())
    } else {
        deserialize(value, "Invalid chart configuration")
    }
}

/// Log a chart error and convert it for JavaScript
pub fn to_js_error(err: ChartError) -> JsValue {
    log::error!("{}", err);
    err.into()
}
