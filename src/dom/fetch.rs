//! Dataset download through `window.fetch`

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{ChartError, Result};
use crate::models::SalesNode;

/// Fetch and parse the sales dataset
pub async fn fetch_dataset(url: &str) -> Result<SalesNode> {
    let window = web_sys::window().ok_or_else(|| ChartError::Fetch("No window".to_string()))?;

    log::info!("Fetching dataset from {}", url);
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ChartError::fetch("request failed", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ChartError::fetch("fetch did not return a Response", e))?;

    if !response.ok() {
        return Err(ChartError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response
        .text()
        .map_err(|e| ChartError::fetch("could not read body", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| ChartError::fetch("could not read body", e))?
        .as_string()
        .ok_or_else(|| ChartError::Fetch("response body is not text".to_string()))?;

    let data = SalesNode::from_json(&text)?;
    log::info!(
        "Loaded dataset '{}' with {} categories",
        data.name,
        data.children().len()
    );
    Ok(data)
}
