//! Tooltip geometry and text
//!
//! The tooltip sits beside the pointer, vertically centred on it. It flips to
//! the left of the pointer when it would otherwise run past the right edge of
//! the page.

use serde::{Deserialize, Serialize};

use crate::config::TooltipConfig;

/// Absolute page position of a tooltip, in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

impl TooltipPlacement {
    /// CSS `left` value
    pub fn left_px(&self) -> String {
        format!("{}px", self.left)
    }

    /// CSS `top` value
    pub fn top_px(&self) -> String {
        format!("{}px", self.top)
    }
}

/// Horizontal offset from the pointer to the tooltip's left edge
pub fn horizontal_offset(config: &TooltipConfig, x: f64, page_width: f64) -> f64 {
    if x + config.distance + config.width + config.page_padding > page_width {
        -(config.width + config.distance)
    } else {
        config.distance
    }
}

/// Where to put the tooltip for a pointer at `(client_x, client_y)`
pub fn placement(
    config: &TooltipConfig,
    client_x: f64,
    client_y: f64,
    page_width: f64,
) -> TooltipPlacement {
    TooltipPlacement {
        left: client_x + horizontal_offset(config, client_x, page_width),
        top: client_y - config.height / 2.0,
    }
}

/// Tooltip body as HTML, one field per line
pub fn format_tooltip_html(name: &str, category: &str, value: &str) -> String {
    format!(
        "Name: {}<br />Category: {}<br />Value: {}",
        escape_html(name),
        escape_html(category),
        escape_html(value)
    )
}

fn escape_html(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_right_of_pointer() {
        let config = TooltipConfig::default();
        let p = placement(&config, 100.0, 300.0, 1280.0);
        assert_eq!(p.left, 120.0);
        assert_eq!(p.top, 245.0);
        assert_eq!(p.left_px(), "120px");
    }

    #[test]
    fn test_tooltip_flips_near_right_edge() {
        let config = TooltipConfig::default();
        // 941 + 20 + 300 + 20 = 1281 > 1280
        assert_eq!(horizontal_offset(&config, 941.0, 1280.0), -320.0);
        // 940 + 340 = 1280 fits exactly
        assert_eq!(horizontal_offset(&config, 940.0, 1280.0), 20.0);

        let p = placement(&config, 1000.0, 55.0, 1280.0);
        assert_eq!(p.left, 680.0);
        assert_eq!(p.top, 0.0);
    }

    #[test]
    fn test_format_tooltip_html() {
        assert_eq!(
            format_tooltip_html("Wii Sports", "Wii", "82.53"),
            "Name: Wii Sports<br />Category: Wii<br />Value: 82.53"
        );
    }

    #[test]
    fn test_format_tooltip_escapes_markup() {
        let html = format_tooltip_html("Tom & Jerry <Deluxe>", "PC", "1");
        assert!(html.starts_with("Name: Tom &amp; Jerry &lt;Deluxe&gt;<br />"));
    }
}
