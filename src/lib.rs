//! Video Game Sales Treemap WASM Module
//!
//! Fetches a hierarchical sales dataset, lays it out as a squarified
//! treemap, and draws it as SVG with a category legend and hover tooltips.

pub mod api;
pub mod chart_layout;
pub mod config;
pub mod dom;
pub mod error;
pub mod layout;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use chart_layout::{ChartLayoutEngine, DisplayList, Viewport};
pub use config::ChartConfig;
pub use error::ChartError;
pub use models::{Hierarchy, SalesNode};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Treemap WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("Logger was already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
