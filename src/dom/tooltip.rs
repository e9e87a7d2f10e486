//! Pointer-driven tooltip handlers
//!
//! Three listeners are attached to the treemap SVG and act on events whose
//! target is a `.tile` rect: pointer over creates the tooltip, pointer move
//! follows the pointer, pointer out clears the tooltip container.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::chart_layout::tooltip::{format_tooltip_html, placement};
use crate::config::TooltipConfig;
use crate::error::{ChartError, Result};

pub const TOOLTIP_ID: &str = "tooltip";

type MouseHandler = Closure<dyn FnMut(MouseEvent)>;

/// Listeners attached to one treemap SVG; dropped listeners are detached
pub struct TooltipHandlers {
    target: Element,
    listeners: Vec<(&'static str, MouseHandler)>,
}

impl TooltipHandlers {
    /// Attach the over/move/out listeners to `target`
    pub fn attach(
        document: &Document,
        target: &Element,
        tooltip_container: &Element,
        config: TooltipConfig,
    ) -> Result<Self> {
        let over: MouseHandler = {
            let document = document.clone();
            let container = tooltip_container.clone();
            Closure::new(move |event: MouseEvent| {
                if let Err(e) = draw_tooltip(&document, &container, &config, &event) {
                    log::warn!("Could not draw tooltip: {:?}", e);
                }
            })
        };

        let moved: MouseHandler = {
            let document = document.clone();
            Closure::new(move |event: MouseEvent| {
                update_tooltip_location(&document, &config, &event);
            })
        };

        let out: MouseHandler = {
            let container = tooltip_container.clone();
            Closure::new(move |event: MouseEvent| {
                if event_tile(&event).is_some() {
                    remove_tooltip(&container);
                }
            })
        };

        let mut handlers = Self {
            target: target.clone(),
            listeners: Vec::with_capacity(3),
        };
        for (kind, handler) in [("mouseover", over), ("mousemove", moved), ("mouseout", out)] {
            handlers
                .target
                .add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())
                .map_err(|e| ChartError::dom(&format!("add {} listener", kind), e))?;
            handlers.listeners.push((kind, handler));
        }

        Ok(handlers)
    }
}

impl Drop for TooltipHandlers {
    fn drop(&mut self) {
        for (kind, handler) in &self.listeners {
            if let Err(e) = self
                .target
                .remove_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())
            {
                log::warn!("Could not detach {} listener: {:?}", kind, e);
            }
        }
    }
}

/// The `.tile` rect an event happened on, if any
fn event_tile(event: &MouseEvent) -> Option<Element> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    match element.matches(".tile") {
        Ok(true) => Some(element),
        _ => None,
    }
}

fn page_width(document: &Document) -> f64 {
    document
        .body()
        .map(|body| body.get_bounding_client_rect().width())
        .unwrap_or(0.0)
}

fn position_style(document: &Document, config: &TooltipConfig, event: &MouseEvent) -> String {
    let spot = placement(
        config,
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        page_width(document),
    );
    format!("top: {}; left: {}", spot.top_px(), spot.left_px())
}

fn draw_tooltip(
    document: &Document,
    container: &Element,
    config: &TooltipConfig,
    event: &MouseEvent,
) -> std::result::Result<(), JsValue> {
    let Some(tile) = event_tile(event) else {
        return Ok(());
    };

    let name = tile.get_attribute("data-name").unwrap_or_default();
    let category = tile.get_attribute("data-category").unwrap_or_default();
    let value = tile.get_attribute("data-value").unwrap_or_default();

    let tooltip = document.create_element("div")?;
    tooltip.set_attribute("id", TOOLTIP_ID)?;
    tooltip.set_attribute("data-value", &value)?;
    tooltip.set_attribute("style", &position_style(document, config, event))?;
    tooltip.set_inner_html(&format_tooltip_html(&name, &category, &value));
    container.append_child(&tooltip)?;

    Ok(())
}

fn update_tooltip_location(document: &Document, config: &TooltipConfig, event: &MouseEvent) {
    if let Some(tooltip) = document.get_element_by_id(TOOLTIP_ID) {
        if let Err(e) = tooltip.set_attribute("style", &position_style(document, config, event)) {
            log::warn!("Could not move tooltip: {:?}", e);
        }
    }
}

fn remove_tooltip(container: &Element) {
    container.set_inner_html("");
}
