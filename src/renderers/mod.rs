//! Renderers for the chart
//!
//! - `color`: categorical color scale shared by tiles and legend
//! - `svg_markup`: static SVG text export of a display list

pub mod color;
pub mod svg_markup;

pub use color::{default_range, OrdinalScale, SCHEME_SET3, SCHEME_TABLEAU10};
pub use svg_markup::{render_svg_markup, SVG_NS};
