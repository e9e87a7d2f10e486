//! Display List for Chart Rendering
//!
//! This module defines the output structure returned from the layout engine.
//! The DisplayList contains every position, size, color and text needed to
//! draw the treemap and its legend without any further layout calculations,
//! whether it is mounted into the DOM or written out as SVG markup.

use serde::{Deserialize, Serialize};

/// Top-level display list containing all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// Frame of the treemap SVG
    pub treemap: SvgFrame,

    /// Frame of the legend SVG
    pub legend_frame: SvgFrame,

    /// One tile per leaf, in layout order
    pub tiles: Vec<RenderTile>,

    /// Category legend
    pub legend: RenderLegend,
}

/// Size and offset of one SVG element
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SvgFrame {
    pub width: f64,
    pub height: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

/// A single leaf tile
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderTile {
    /// Game title
    pub name: String,

    /// Platform, keys the fill color
    pub category: String,

    /// Sales figure exactly as it appeared in the dataset
    pub value: String,

    /// X position of the tile's left edge
    pub x: f64,

    /// Y position of the tile's top edge
    pub y: f64,

    pub width: f64,
    pub height: f64,

    /// Fill color (hex string)
    pub fill: String,

    /// Title lines, positioned relative to the tile origin
    pub label_lines: Vec<LabelLine>,
}

/// One line of a tile title
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LabelLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Legend group
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderLegend {
    /// Offset of the whole legend inside its SVG
    pub translate_x: f64,
    pub translate_y: f64,

    /// One entry per top-level category, in dataset order
    pub items: Vec<LegendItem>,
}

/// A legend swatch with its caption
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub name: String,
    pub fill: String,

    /// Offset of this item inside the legend group
    pub translate_x: f64,
    pub translate_y: f64,

    /// Offset of the caption relative to the swatch
    pub label_x: f64,
    pub label_y: f64,
}

/// Format an SVG `translate(...)` transform
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({}, {})", x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_formats_like_css() {
        assert_eq!(translate(40.0, 50.0), "translate(40, 50)");
        assert_eq!(translate(12.5, -0.25), "translate(12.5, -0.25)");
    }
}
