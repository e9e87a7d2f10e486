//! Treemap WASM API
//!
//! - `helpers`: conversions between JS values and Rust types, error logging
//! - `core`: the exported entry points (`drawChart`, `computeLayout`,
//!   `renderSvgMarkup`, `clearChart`)

pub mod helpers;
pub mod core;

pub use self::core::{clear_chart, compute_layout, draw_chart, layout_from_json, render_svg};
