//! Space-filling layout for the sales hierarchy

pub mod treemap;

pub use treemap::{squarify, TreemapLayout, TreemapRow, PHI};
