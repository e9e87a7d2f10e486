//! Chart configuration
//!
//! Every field has a default matching the published chart, so JavaScript
//! callers can pass a partial object (or nothing at all).

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Location of the published video game sales dataset
pub const DEFAULT_DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

/// Top-level chart configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// URL the dataset is fetched from
    pub data_url: String,

    /// Element whose box sizes the chart and which receives both SVGs
    pub svg_container_id: String,

    /// Element tooltips are appended to
    pub tooltip_container_id: String,

    /// Space around the treemap; the bottom band holds the legend
    pub padding: ChartPadding,

    /// Gap between neighbouring tiles
    pub padding_inner: f64,

    /// Snap tile coordinates to whole pixels
    pub round: bool,

    pub tooltip: TooltipConfig,
    pub legend: LegendConfig,
    pub label: LabelConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            svg_container_id: "svg-container".to_string(),
            tooltip_container_id: "tooltip-container".to_string(),
            padding: ChartPadding::default(),
            padding_inner: 1.0,
            round: false,
            tooltip: TooltipConfig::default(),
            legend: LegendConfig::default(),
            label: LabelConfig::default(),
        }
    }
}

/// Padding around the treemap, in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct ChartPadding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for ChartPadding {
    fn default() -> Self {
        Self {
            top: 50.0,
            bottom: 150.0,
            left: 40.0,
            right: 40.0,
        }
    }
}

/// Tooltip box geometry
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct TooltipConfig {
    pub width: f64,
    pub height: f64,

    /// Horizontal gap between the pointer and the tooltip
    pub distance: f64,

    /// Minimum space kept between the tooltip and the page's right edge
    pub page_padding: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 110.0,
            distance: 20.0,
            page_padding: 20.0,
        }
    }
}

/// Legend grid: items fill columns top to bottom
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct LegendConfig {
    /// Items per column
    pub rows: usize,
    pub column_width: f64,
    pub row_height: f64,
    pub origin_x: f64,
    pub origin_y: f64,

    /// Offset of each item's label from its swatch
    pub label_offset_x: f64,
    pub label_offset_y: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            column_width: 120.0,
            row_height: 30.0,
            origin_x: 5.0,
            origin_y: 15.0,
            label_offset_x: 25.0,
            label_offset_y: 15.0,
        }
    }
}

/// Tile title placement: one line per word
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    pub x: f64,
    pub line_height: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            x: 5.0,
            line_height: 10.0,
        }
    }
}

impl ChartConfig {
    /// Reject values that cannot produce a sensible chart
    pub fn validate(&self) -> Result<()> {
        let p = &self.padding;
        for (name, value) in [
            ("padding.top", p.top),
            ("padding.bottom", p.bottom),
            ("padding.left", p.left),
            ("padding.right", p.right),
            ("padding_inner", self.padding_inner),
            ("tooltip.width", self.tooltip.width),
            ("tooltip.height", self.tooltip.height),
            ("legend.column_width", self.legend.column_width),
            ("legend.row_height", self.legend.row_height),
            ("label.line_height", self.label.line_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.legend.rows == 0 {
            return Err(ChartError::InvalidConfig(
                "legend.rows must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"padding": {"top": 10}, "round": true}"#).unwrap();
        assert_eq!(config.padding.top, 10.0);
        assert_eq!(config.padding.bottom, 150.0);
        assert!(config.round);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.legend.rows, 4);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ChartConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_padding_rejected() {
        let mut config = ChartConfig::default();
        config.padding.left = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("padding.left"));
    }

    #[test]
    fn test_zero_legend_rows_rejected() {
        let mut config = ChartConfig::default();
        config.legend.rows = 0;
        assert!(matches!(config.validate(), Err(ChartError::InvalidConfig(_))));
    }
}
