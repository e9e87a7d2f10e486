//! Browser tests for the mounted chart
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use treemap_wasm::chart_layout::{ChartLayoutEngine, Viewport};
use treemap_wasm::dom::{clear_active_chart, fetch_dataset, set_active_chart, TreemapChart};
use treemap_wasm::{ChartConfig, ChartError, SalesNode};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn container(document: &Document, id: &str) -> Element {
    let element = document.create_element("div").unwrap();
    element.set_attribute("id", id).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn mounted_chart(document: &Document, svg_container: &Element, tooltip_container: &Element) -> TreemapChart {
    let data = SalesNode::branch(
        "root",
        vec![SalesNode::branch(
            "Wii",
            vec![
                SalesNode::leaf("Wii Sports", "Wii", 82.53),
                SalesNode::leaf("Wii Fit", "Wii", 22.7),
            ],
        )],
    );
    let config = ChartConfig::default();
    let list = ChartLayoutEngine::new(&config).compute_layout(&data, Viewport::new(800.0, 600.0));
    TreemapChart::mount(document, svg_container, tooltip_container, list, &config).unwrap()
}

fn dispatch(target: &Element, kind: &str, x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn test_mount_creates_tiles_and_legend() {
    let document = document();
    let svg_container = container(&document, "svg-container-mount");
    let tooltip_container = container(&document, "tooltip-container-mount");

    let chart = mounted_chart(&document, &svg_container, &tooltip_container);

    assert_eq!(svg_container.child_element_count(), 2);
    assert_eq!(svg_container.query_selector_all(".tile").unwrap().length(), 2);
    assert_eq!(svg_container.query_selector_all(".legend-item").unwrap().length(), 1);
    assert!(svg_container.query_selector("#legend").unwrap().is_some());

    drop(chart);
    assert_eq!(svg_container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_tooltip_follows_pointer_and_clears() {
    let document = document();
    let svg_container = container(&document, "svg-container-tooltip");
    let tooltip_container = container(&document, "tooltip-container-tooltip");
    let _chart = mounted_chart(&document, &svg_container, &tooltip_container);

    let tile = svg_container
        .query_selector(".tile")
        .unwrap()
        .unwrap();

    dispatch(&tile, "mouseover", 10, 100);
    let tooltip = document.get_element_by_id("tooltip").unwrap();
    assert_eq!(tooltip.get_attribute("data-value").unwrap(), "82.53");
    assert!(tooltip.inner_html().starts_with("Name: Wii Sports<br>"));
    assert!(tooltip.get_attribute("style").unwrap().contains("top: 45px"));

    dispatch(&tile, "mousemove", 10, 200);
    let style = document.get_element_by_id("tooltip").unwrap().get_attribute("style").unwrap();
    assert!(style.contains("top: 145px"));

    dispatch(&tile, "mouseout", 10, 200);
    assert_eq!(tooltip_container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_mousemove_without_tooltip_is_ignored() {
    let document = document();
    let svg_container = container(&document, "svg-container-move");
    let tooltip_container = container(&document, "tooltip-container-move");
    let _chart = mounted_chart(&document, &svg_container, &tooltip_container);

    let tile = svg_container.query_selector(".tile").unwrap().unwrap();
    dispatch(&tile, "mousemove", 10, 100);

    assert!(document.get_element_by_id("tooltip").is_none());
    assert_eq!(tooltip_container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_dropped_chart_detaches_listeners() {
    let document = document();
    let svg_container = container(&document, "svg-container-detach");
    let tooltip_container = container(&document, "tooltip-container-detach");
    let chart = mounted_chart(&document, &svg_container, &tooltip_container);

    let tile = svg_container.query_selector(".tile").unwrap().unwrap();
    drop(chart);
    dispatch(&tile, "mouseover", 10, 100);

    assert!(document.get_element_by_id("tooltip").is_none());
    assert_eq!(tooltip_container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_active_chart_replaces_previous() {
    let document = document();
    let svg_container = container(&document, "svg-container-active");
    let tooltip_container = container(&document, "tooltip-container-active");

    set_active_chart(mounted_chart(&document, &svg_container, &tooltip_container));
    set_active_chart(mounted_chart(&document, &svg_container, &tooltip_container));
    assert_eq!(svg_container.child_element_count(), 2);

    assert!(clear_active_chart());
    assert_eq!(svg_container.child_element_count(), 0);
    assert!(!clear_active_chart());
}

#[wasm_bindgen_test]
async fn test_fetch_rejects_missing_dataset() {
    let err = fetch_dataset("/no-such-dataset.json").await.unwrap_err();
    assert!(matches!(err, ChartError::HttpStatus { status: 404, .. }));
}

#[wasm_bindgen_test]
async fn test_draw_rejects_invalid_config() {
    let mut config = ChartConfig::default();
    config.padding.top = -1.0;
    let err = TreemapChart::draw(&config).await.err().unwrap();
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
