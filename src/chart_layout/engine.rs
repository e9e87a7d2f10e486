//! Chart-level layout computation
//!
//! This module contains the main entry point for layout calculations,
//! taking the dataset and the container size and producing a DisplayList.

use serde::{Deserialize, Serialize};

use super::display_list::*;
use crate::config::{ChartConfig, LabelConfig, LegendConfig};
use crate::layout::TreemapLayout;
use crate::models::{Hierarchy, SalesNode};
use crate::renderers::color::{default_range, OrdinalScale};

/// Size of the element the chart is drawn into
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Main layout engine for computing display lists
pub struct ChartLayoutEngine<'a> {
    config: &'a ChartConfig,
}

impl<'a> ChartLayoutEngine<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    /// Compute the complete layout for a dataset
    ///
    /// # Arguments
    /// * `data` - Dataset root; its children are the categories
    /// * `viewport` - Measured size of the SVG container
    ///
    /// # Returns
    /// DisplayList with every tile, label and legend item positioned
    pub fn compute_layout(&self, data: &SalesNode, viewport: Viewport) -> DisplayList {
        let padding = &self.config.padding;
        let chart_width = (viewport.width - (padding.left + padding.right)).max(0.0);
        let chart_height = (viewport.height - (padding.top + padding.bottom)).max(0.0);

        if chart_width == 0.0 || chart_height == 0.0 {
            log::warn!(
                "Container {}x{} leaves no room for the treemap after padding",
                viewport.width,
                viewport.height
            );
        }

        let mut hierarchy = Hierarchy::new(data);
        hierarchy.sum().sort_by_height_then_value();

        TreemapLayout::new(chart_width, chart_height)
            .with_padding_inner(self.config.padding_inner)
            .with_round(self.config.round)
            .apply(&mut hierarchy);

        let categories = hierarchy.top_level_names().to_vec();
        let mut colors = OrdinalScale::new(categories.iter().cloned(), default_range());

        // Tiles first: categories absent from the legend take the next colors
        let tiles: Vec<RenderTile> = hierarchy
            .leaves()
            .into_iter()
            .map(|id| {
                let node = hierarchy.node(id);
                let category = node.data.category_text().to_string();
                RenderTile {
                    name: node.data.name.clone(),
                    value: node.data.value_text(),
                    x: node.x0,
                    y: node.y0,
                    width: node.width(),
                    height: node.height_px(),
                    fill: colors.color(&category).unwrap_or_default().to_string(),
                    label_lines: label_lines(&node.data.name, &self.config.label),
                    category,
                }
            })
            .collect();

        let legend = legend_layout(&categories, &mut colors, &self.config.legend);

        log::debug!(
            "Laid out {} tiles and {} legend items in {}x{}",
            tiles.len(),
            legend.items.len(),
            chart_width,
            chart_height
        );

        let frame = |height| SvgFrame {
            width: chart_width,
            height,
            translate_x: padding.left,
            translate_y: padding.top,
        };

        DisplayList {
            treemap: frame(chart_height),
            legend_frame: frame(padding.bottom),
            tiles,
            legend,
        }
    }
}

/// Split a tile title into one line per word
///
/// Splits on single spaces, so runs of spaces produce empty lines.
pub fn label_lines(name: &str, config: &LabelConfig) -> Vec<LabelLine> {
    name.split(' ')
        .enumerate()
        .map(|(i, word)| LabelLine {
            text: word.to_string(),
            x: config.x,
            y: config.line_height * (i + 1) as f64,
        })
        .collect()
}

/// Place legend items in columns of `config.rows` entries
pub fn legend_layout(
    categories: &[String],
    colors: &mut OrdinalScale,
    config: &LegendConfig,
) -> RenderLegend {
    let rows = config.rows.max(1);
    let items = categories
        .iter()
        .enumerate()
        .map(|(i, name)| LegendItem {
            name: name.clone(),
            fill: colors.color(name).unwrap_or_default().to_string(),
            translate_x: (i / rows) as f64 * config.column_width,
            translate_y: (i % rows) as f64 * config.row_height,
            label_x: config.label_offset_x,
            label_y: config.label_offset_y,
        })
        .collect();

    RenderLegend {
        translate_x: config.origin_x,
        translate_y: config.origin_y,
        items,
    }
}
