use std::fmt;

use compact_str::CompactString;

use crate::tree::arena::{NodeId, Tree};

/// Tooltip is anchored this far right of the pointer.
pub const OFFSET_X: f64 = 10.0;
/// Tooltip is anchored this far above the pointer (negative = up).
pub const OFFSET_Y: f64 = -28.0;
/// Opacity of a visible tooltip.
pub const VISIBLE_OPACITY: f32 = 0.9;

/// Information to display in the tooltip when hovering over a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub name: CompactString,
    pub category: CompactString,
    pub value: f64,
}

impl TooltipContent {
    /// Build tooltip content for a node. Groups have no category and show an empty one.
    pub fn for_node(tree: &Tree, node_id: NodeId) -> Self {
        let node = tree.get(node_id);
        Self {
            name: node.name.clone(),
            category: node.category.clone().unwrap_or_default(),
            value: node.value,
        }
    }

    /// The three parts, meant to be shown on separate lines.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Name: {}", self.name),
            format!("Category: {}", self.category),
            format!("Value: {}", self.value),
        ]
    }
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} Category: {} Value: {}",
            self.name, self.category, self.value
        )
    }
}

/// A tooltip as the presentation layer should show it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// None while hidden
    pub content: Option<TooltipContent>,
    /// Top-left anchor in viewport coordinates
    pub left: f64,
    pub top: f64,
    pub opacity: f32,
}

impl Tooltip {
    pub const fn hidden() -> Self {
        Self {
            content: None,
            left: 0.0,
            top: 0.0,
            opacity: 0.0,
        }
    }

    /// Visible tooltip anchored next to the pointer.
    pub fn at_pointer(content: TooltipContent, x: f64, y: f64) -> Self {
        Self {
            content: Some(content),
            left: x + OFFSET_X,
            top: y + OFFSET_Y,
            opacity: VISIBLE_OPACITY,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::hidden()
    }
}
