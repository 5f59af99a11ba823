pub mod slice_dice;
pub mod squarify;

use std::collections::HashMap;

use thiserror::Error;

use crate::tree::arena::{NodeId, Tree};

/// Axis-aligned rectangle, `(x0, y0)` top-left and `(x1, y1)` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Half-open containment, so shared edges belong to exactly one tile.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = (self.x1.min(other.x1) - self.x0.max(other.x0)).max(0.0);
        let h = (self.y1.min(other.y1) - self.y0.max(other.y0)).max(0.0);
        w * h
    }

    /// Pull the right and bottom edges in by `padding`, never past the top-left corner.
    pub fn shrink_trailing(&self, padding: f64) -> Rect {
        Rect {
            x0: self.x0,
            y0: self.y0,
            x1: (self.x1 - padding).max(self.x0),
            y1: (self.y1 - padding).max(self.y0),
        }
    }
}

/// Direction along which siblings are laid out next to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Vertical slices, left to right
    X,
    /// Horizontal slices, top to bottom
    Y,
}

impl Axis {
    /// Slice-and-dice alternation: even depths cut vertically, odd depths horizontally.
    pub fn for_depth(depth: u16) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }
}

/// A positioned rectangle in the treemap layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub node: NodeId,
    pub rect: Rect,
    pub depth: u16,
    pub is_leaf: bool,
}

/// The full layout result (rects + fast lookup).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// One rectangle per node, in pre-order (root first)
    pub rects: Vec<LayoutRect>,
    /// node → index into `rects`
    pub node_to_rect: HashMap<NodeId, usize>,
}

impl Layout {
    pub fn rect(&self, node: NodeId) -> Option<&LayoutRect> {
        self.node_to_rect.get(&node).map(|&i| &self.rects[i])
    }

    /// Leaf rectangles in input order; this is what gets drawn.
    pub fn leaves(&self) -> impl Iterator<Item = &LayoutRect> + '_ {
        self.rects.iter().filter(|r| r.is_leaf)
    }
}

/// How a node's rectangle is divided among its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileMethod {
    /// Alternate the cut axis with depth.
    #[default]
    SliceDice,
    /// Rows of near-square tiles, children kept in input order.
    Squarify,
}

/// Configuration for treemap layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Gap carved from the trailing (right and bottom) edges of every non-root tile
    pub padding: f64,
    pub tile: TileMethod,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 1.0,
            tile: TileMethod::SliceDice,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    #[error("viewport must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("padding must be finite and non-negative, got {0}")]
    InvalidPadding(f64),
}

/// Slice-and-dice layout of the whole tree with the given padding.
pub fn layout(tree: &Tree, width: f64, height: f64, padding: f64) -> Result<Layout, LayoutError> {
    let config = LayoutConfig {
        padding,
        tile: TileMethod::SliceDice,
    };
    compute_layout(tree, width, height, &config)
}

/// Assign a rectangle to every node of the tree, root filling `width × height`.
pub fn compute_layout(
    tree: &Tree,
    width: f64,
    height: f64,
    config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(LayoutError::InvalidViewport { width, height });
    }
    if !(config.padding.is_finite() && config.padding >= 0.0) {
        return Err(LayoutError::InvalidPadding(config.padding));
    }

    let root = tree.get(tree.root);
    tracing::info!(
        "Laying out {} children of root '{}' (value={}) in {:.0}x{:.0} area ({:?}, padding {})",
        tree.children(tree.root).count(),
        root.name,
        root.value,
        width,
        height,
        config.tile,
        config.padding
    );

    // Indexed by NodeId. The pre-order walk visits a parent before its
    // children, so a parent's rect is final by the time it gets tiled.
    let mut assigned = vec![Rect::new(0.0, 0.0, 0.0, 0.0); tree.len()];
    assigned[tree.root.index()] = Rect::new(0.0, 0.0, width, height);

    let mut values: Vec<f64> = Vec::new();
    for parent in tree.descendants(tree.root) {
        let children: Vec<NodeId> = tree.children(parent).collect();
        if children.is_empty() {
            continue;
        }

        let parent_node = tree.get(parent);
        let parent_rect = assigned[parent.index()];
        if parent_node.value <= 0.0 {
            tracing::debug!(
                "Parent {:?} '{}' has zero value at depth {}, splitting evenly",
                parent,
                parent_node.name,
                parent_node.depth
            );
        }

        values.clear();
        values.extend(children.iter().map(|&id| tree.get(id).value));

        let tiles = match config.tile {
            TileMethod::SliceDice => {
                slice_dice::partition(&values, parent_rect, Axis::for_depth(parent_node.depth))
            }
            TileMethod::Squarify => squarify::squarify(&values, parent_rect),
        };

        for (&child, tile) in children.iter().zip(tiles) {
            assigned[child.index()] = tile.shrink_trailing(config.padding);
        }
    }

    let rects: Vec<LayoutRect> = tree
        .descendants(tree.root)
        .map(|id| LayoutRect {
            node: id,
            rect: assigned[id.index()],
            depth: tree.get(id).depth,
            is_leaf: tree.is_leaf(id),
        })
        .collect();
    let node_to_rect: HashMap<NodeId, usize> =
        rects.iter().enumerate().map(|(i, r)| (r.node, i)).collect();

    Ok(Layout { rects, node_to_rect })
}
