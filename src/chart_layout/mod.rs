//! Chart Layout Engine
//!
//! This module computes the layout of the treemap, its tile titles and the
//! legend, generating a DisplayList with all positioning, colors and text
//! needed to render the chart.

pub mod display_list;
pub mod engine;
pub mod tooltip;

pub use display_list::{DisplayList, LabelLine, LegendItem, RenderLegend, RenderTile, SvgFrame};
pub use engine::{label_lines, legend_layout, ChartLayoutEngine, Viewport};
pub use tooltip::{format_tooltip_html, horizontal_offset, placement, TooltipPlacement};
