//! Squarified treemap layout
//!
//! Assigns every node of a summed `Hierarchy` a box so that leaf areas are
//! proportional to their values. Children are packed in rows whose aspect
//! ratios stay close to `ratio` (the golden ratio by default). Sibling boxes
//! are separated by `padding_inner`; the root's tiles span the full size.

use serde::{Deserialize, Serialize};

use crate::models::{Hierarchy, NodeId};

/// Golden ratio, the default target aspect ratio for squarified rows
pub const PHI: f64 = 1.618_033_988_749_895;

/// Treemap layout settings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TreemapLayout {
    /// Width and height of the area to fill
    pub size: (f64, f64),

    /// Gap between sibling boxes
    pub padding_inner: f64,

    /// Gap between a parent's box and its children
    pub padding_outer: f64,

    /// Target aspect ratio for squarified rows (at least 1)
    pub ratio: f64,

    /// Round coordinates to whole pixels after layout
    pub round: bool,
}

impl Default for TreemapLayout {
    fn default() -> Self {
        Self {
            size: (1.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            ratio: PHI,
            round: false,
        }
    }
}

/// One row produced by the squarify pass
#[derive(Clone, Debug, PartialEq)]
pub struct TreemapRow {
    /// Sum of the row's child values
    pub value: f64,

    /// True when the row was laid out left-to-right across a horizontal strip
    pub dice: bool,

    pub children: Vec<NodeId>,
}

impl TreemapLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }

    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding;
        self
    }

    pub fn with_padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding;
        self
    }

    /// Set the target aspect ratio; values below 1 are clamped to 1
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio > 1.0 { ratio } else { 1.0 };
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Lay out the hierarchy in place
    ///
    /// Expects `Hierarchy::sum` to have run; children are tiled in their
    /// current order.
    pub fn apply(&self, hierarchy: &mut Hierarchy) {
        if hierarchy.is_empty() {
            return;
        }

        let root = hierarchy.root();
        {
            let node = hierarchy.node_mut(root);
            node.x0 = 0.0;
            node.y0 = 0.0;
            node.x1 = self.size.0;
            node.y1 = self.size.1;
        }

        let mut padding_stack = vec![0.0];
        for id in hierarchy.descendants() {
            self.position_node(hierarchy, id, &mut padding_stack);
        }

        if self.round {
            for id in hierarchy.descendants() {
                let node = hierarchy.node_mut(id);
                node.x0 = round_half_up(node.x0);
                node.y0 = round_half_up(node.y0);
                node.x1 = round_half_up(node.x1);
                node.y1 = round_half_up(node.y1);
            }
        }
    }

    /// Apply the padding owed to this node, then tile its children
    fn position_node(&self, hierarchy: &mut Hierarchy, id: NodeId, padding_stack: &mut Vec<f64>) {
        let node = hierarchy.node_mut(id);
        let depth = node.depth;
        let p = padding_stack.get(depth).copied().unwrap_or(0.0);

        let (x0, x1) = collapse(node.x0 + p, node.x1 - p);
        let (y0, y1) = collapse(node.y0 + p, node.y1 - p);
        node.x0 = x0;
        node.y0 = y0;
        node.x1 = x1;
        node.y1 = y1;

        if node.is_leaf() {
            return;
        }

        let p = self.padding_inner / 2.0;
        if padding_stack.len() <= depth + 1 {
            padding_stack.resize(depth + 2, 0.0);
        }
        padding_stack[depth + 1] = p;

        let inset = self.padding_outer - p;
        let (x0, x1) = collapse(x0 + inset, x1 - inset);
        let (y0, y1) = collapse(y0 + inset, y1 - inset);

        squarify(hierarchy, id, self.ratio, x0, y0, x1, y1);
    }
}

/// Keep `lo <= hi`, meeting in the middle when they cross
fn collapse(lo: f64, hi: f64) -> (f64, f64) {
    if hi < lo {
        let mid = (lo + hi) / 2.0;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

/// Round with halves going up, matching browser pixel snapping
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Tile the children of `parent` into the given box, row by row
pub fn squarify(
    hierarchy: &mut Hierarchy,
    parent: NodeId,
    ratio: f64,
    mut x0: f64,
    mut y0: f64,
    x1: f64,
    y1: f64,
) -> Vec<TreemapRow> {
    let nodes = hierarchy.node(parent).children.clone();
    let n = nodes.len();
    let mut value = hierarchy.node(parent).value;
    let mut rows = Vec::new();
    let (mut i0, mut i1) = (0, 0);

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Seed the row with the next non-empty node
        let mut sum_value;
        loop {
            sum_value = hierarchy.node(nodes[i1]).value;
            i1 += 1;
            if sum_value != 0.0 || i1 >= n {
                break;
            }
        }

        let mut min_value = sum_value;
        let mut max_value = sum_value;
        let alpha = (dy / dx).max(dx / dy) / (value * ratio);
        let mut beta = sum_value * sum_value * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        // Keep adding nodes while the worst aspect ratio does not get worse
        while i1 < n {
            let node_value = hierarchy.node(nodes[i1]).value;
            sum_value += node_value;
            if node_value < min_value {
                min_value = node_value;
            }
            if node_value > max_value {
                max_value = node_value;
            }
            beta = sum_value * sum_value * alpha;
            let new_ratio = (max_value / beta).max(beta / min_value);
            if new_ratio > min_ratio {
                sum_value -= node_value;
                break;
            }
            min_ratio = new_ratio;
            i1 += 1;
        }

        let row = TreemapRow {
            value: sum_value,
            dice: dx < dy,
            children: nodes[i0..i1].to_vec(),
        };

        if row.dice {
            let y_split = if value != 0.0 {
                y0 + dy * sum_value / value
            } else {
                y1
            };
            dice(hierarchy, &row, x0, y0, x1, y_split);
            if value != 0.0 {
                y0 = y_split;
            }
        } else {
            let x_split = if value != 0.0 {
                x0 + dx * sum_value / value
            } else {
                x1
            };
            slice(hierarchy, &row, x0, y0, x_split, y1);
            if value != 0.0 {
                x0 = x_split;
            }
        }

        value -= sum_value;
        i0 = i1;
        rows.push(row);
    }

    rows
}

/// Place a row's children side by side along x
fn dice(hierarchy: &mut Hierarchy, row: &TreemapRow, x0: f64, y0: f64, x1: f64, y1: f64) {
    let k = if row.value != 0.0 {
        (x1 - x0) / row.value
    } else {
        0.0
    };

    let mut x = x0;
    for &id in &row.children {
        let node = hierarchy.node_mut(id);
        node.y0 = y0;
        node.y1 = y1;
        node.x0 = x;
        x += node.value * k;
        node.x1 = x;
    }
}

/// Place a row's children stacked along y
fn slice(hierarchy: &mut Hierarchy, row: &TreemapRow, x0: f64, y0: f64, x1: f64, y1: f64) {
    let k = if row.value != 0.0 {
        (y1 - y0) / row.value
    } else {
        0.0
    };

    let mut y = y0;
    for &id in &row.children {
        let node = hierarchy.node_mut(id);
        node.x0 = x0;
        node.x1 = x1;
        node.y0 = y;
        y += node.value * k;
        node.y1 = y;
    }
}
