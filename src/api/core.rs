//! JavaScript-facing chart API

use wasm_bindgen::prelude::*;

use super::helpers::{config_from_js, serialize, to_js_error};
use crate::chart_layout::{ChartLayoutEngine, DisplayList, Viewport};
use crate::config::ChartConfig;
use crate::dom::{clear_active_chart, set_active_chart, TreemapChart};
use crate::error::Result;
use crate::models::SalesNode;
use crate::renderers::render_svg_markup;

/// Parse a dataset document and lay it out for a container of the given size
pub fn layout_from_json(json: &str, viewport: Viewport, config: &ChartConfig) -> Result<DisplayList> {
    config.validate()?;
    let data = SalesNode::from_json(json)?;
    Ok(ChartLayoutEngine::new(config).compute_layout(&data, viewport))
}

/// Fetch the dataset and draw the treemap, legend and tooltip handlers
#[wasm_bindgen(js_name = drawChart)]
pub async fn draw_chart(config: JsValue) -> std::result::Result<(), JsValue> {
    let config = config_from_js(config)?;
    let chart = TreemapChart::draw(&config).await.map_err(to_js_error)?;
    log::info!("Treemap drawn with {} tiles", chart.display_list().tiles.len());
    set_active_chart(chart);
    Ok(())
}

/// Remove the drawn chart and its listeners; returns whether one existed
#[wasm_bindgen(js_name = clearChart)]
pub fn clear_chart() -> bool {
    clear_active_chart()
}

/// Lay out a dataset without touching the DOM, returning the display list
#[wasm_bindgen(js_name = computeLayout)]
pub fn compute_layout(
    json: &str,
    width: f64,
    height: f64,
    config: JsValue,
) -> std::result::Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let list = layout_from_json(json, Viewport::new(width, height), &config).map_err(to_js_error)?;
    serialize(&list, "Failed to serialize display list")
}

/// Lay out a dataset and return the treemap and legend as SVG markup
#[wasm_bindgen(js_name = renderSvgMarkup)]
pub fn render_svg(
    json: &str,
    width: f64,
    height: f64,
    config: JsValue,
) -> std::result::Result<String, JsValue> {
    let config = config_from_js(config)?;
    let list = layout_from_json(json, Viewport::new(width, height), &config).map_err(to_js_error)?;
    Ok(render_svg_markup(&list))
}
