//! Data models for the sales treemap
//!
//! - `sales`: the dataset exactly as fetched
//! - `hierarchy`: the dataset as a rooted tree with sums, heights and boxes

pub mod sales;
pub mod hierarchy;

pub use sales::SalesNode;
pub use hierarchy::{Hierarchy, HierarchyNode, NodeId};
