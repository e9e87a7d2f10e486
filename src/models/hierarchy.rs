//! Rooted hierarchy built from the sales dataset
//!
//! Nodes live in a flat arena indexed by `NodeId`; the root is always id 0
//! and ids are assigned in pre-order of the dataset. Each node carries its
//! depth, height, summed value and the box assigned by the treemap layout.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::sales::SalesNode;

/// Index of a node inside a `Hierarchy`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A single node with layout state
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HierarchyNode {
    /// Dataset fields of this node (its `children` are not kept here)
    pub data: SalesNode,

    /// Distance from the root
    pub depth: usize,

    /// Longest distance down to a leaf
    pub height: usize,

    /// Own value plus the values of all descendants, set by `sum()`
    pub value: f64,

    pub parent: Option<NodeId>,

    /// Child ids in layout order
    pub children: Vec<NodeId>,

    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl HierarchyNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height_px(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// The whole tree
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Hierarchy {
    nodes: Vec<HierarchyNode>,
    top_level_names: Vec<String>,
}

impl Hierarchy {
    /// Build the tree from a dataset root
    pub fn new(root: &SalesNode) -> Self {
        let top_level_names = root.children().iter().map(|c| c.name.clone()).collect();
        let mut hierarchy = Self {
            nodes: Vec::new(),
            top_level_names,
        };
        hierarchy.push_node(root, None, 0);
        hierarchy
    }

    fn push_node(&mut self, source: &SalesNode, parent: Option<NodeId>, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(HierarchyNode {
            data: source.without_children(),
            depth,
            height: 0,
            value: 0.0,
            parent,
            children: Vec::new(),
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: 0.0,
        });

        let mut height = 0;
        for child in source.children() {
            let child_id = self.push_node(child, Some(id), depth + 1);
            height = height.max(self.nodes[child_id.0].height + 1);
            self.nodes[id.0].children.push(child_id);
        }
        self.nodes[id.0].height = height;

        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &HierarchyNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut HierarchyNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Names of the root's children in dataset order
    pub fn top_level_names(&self) -> &[String] {
        &self.top_level_names
    }

    /// Compute `value` for every node, bottom-up
    pub fn sum(&mut self) -> &mut Self {
        // Children always have larger ids than their parent
        for index in (0..self.nodes.len()).rev() {
            let own = self.nodes[index].data.numeric_value();
            let from_children: f64 = self.nodes[index]
                .children
                .iter()
                .map(|child| self.nodes[child.0].value)
                .sum();
            self.nodes[index].value = own + from_children;
        }
        self
    }

    /// Order every node's children by height, then value, both descending
    ///
    /// The sort is stable, so equal children keep dataset order.
    pub fn sort_by_height_then_value(&mut self) -> &mut Self {
        for index in 0..self.nodes.len() {
            let mut children = std::mem::take(&mut self.nodes[index].children);
            children.sort_by(|a, b| {
                let (a, b) = (&self.nodes[a.0], &self.nodes[b.0]);
                b.height
                    .cmp(&a.height)
                    .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
            });
            self.nodes[index].children = children;
        }
        self
    }

    /// All node ids, parents before children, children in layout order
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return order;
        }

        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        order
    }

    /// Leaf ids in pre-order
    pub fn leaves(&self) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|id| self.nodes[id.0].is_leaf())
            .collect()
    }
}
