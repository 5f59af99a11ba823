use super::tooltip::{Tooltip, TooltipContent};
use crate::layout::Layout;
use crate::tree::arena::{NodeId, Tree};

/// Pointer position in viewport coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MouseState {
    pub x: f64,
    pub y: f64,
}

/// Hit-test: find which leaf tile contains the given point.
/// Zero-area tiles are never hit.
pub fn hit_test(layout: &Layout, x: f64, y: f64) -> Option<NodeId> {
    layout
        .leaves()
        .find(|r| r.rect.contains(x, y))
        .map(|r| r.node)
}

/// What a pointer move changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    /// Pointer entered a leaf (possibly leaving another one).
    Entered(NodeId),
    /// Pointer left the last hovered leaf for empty space.
    Left(NodeId),
    /// Still over the same leaf, or still over nothing.
    Unchanged,
}

/// Hover state machine behind the tooltip: `on_hover` / `on_unhover`.
#[derive(Debug, Default)]
pub struct HoverState {
    pub mouse: MouseState,
    hovered: Option<NodeId>,
    tooltip: Tooltip,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Pointer entered `leaf`: show its tooltip next to the current pointer.
    pub fn on_hover(&mut self, tree: &Tree, leaf: NodeId) -> &Tooltip {
        let content = TooltipContent::for_node(tree, leaf);
        self.hovered = Some(leaf);
        self.tooltip = Tooltip::at_pointer(content, self.mouse.x, self.mouse.y);
        &self.tooltip
    }

    /// Pointer left the hovered tile: hide the tooltip.
    pub fn on_unhover(&mut self) {
        self.hovered = None;
        self.tooltip = Tooltip::hidden();
    }

    /// Track the pointer and fire `on_hover` / `on_unhover` when the leaf under it changes.
    pub fn pointer_moved(&mut self, tree: &Tree, layout: &Layout, x: f64, y: f64) -> HoverChange {
        self.mouse = MouseState { x, y };
        let hit = hit_test(layout, x, y);
        if hit == self.hovered {
            // Tooltip follows the pointer within the same tile.
            if self.tooltip.is_visible() {
                self.tooltip.left = x + super::tooltip::OFFSET_X;
                self.tooltip.top = y + super::tooltip::OFFSET_Y;
            }
            return HoverChange::Unchanged;
        }

        match hit {
            Some(leaf) => {
                self.on_hover(tree, leaf);
                HoverChange::Entered(leaf)
            }
            None => {
                let previous = self.hovered;
                self.on_unhover();
                match previous {
                    Some(prev) => HoverChange::Left(prev),
                    None => HoverChange::Unchanged,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawNode;
    use crate::layout;
    use crate::tree::build_tree;

    fn fixture() -> (Tree, Layout) {
        let raw = RawNode::group(
            "Movies",
            vec![
                RawNode::leaf("Dredd", "Action", 10.0),
                RawNode::leaf("Ted", "Comedy", 30.0),
                RawNode::leaf("Nothing", "Comedy", 0.0),
            ],
        );
        let tree = build_tree(&raw).unwrap();
        let layout = layout::layout(&tree, 100.0, 100.0, 0.0).unwrap();
        (tree, layout)
    }

    #[test]
    fn hit_test_finds_leaf_under_pointer() {
        let (tree, layout) = fixture();
        let leaves: Vec<_> = tree.leaves().collect();
        assert_eq!(hit_test(&layout, 10.0, 50.0), Some(leaves[0]));
        assert_eq!(hit_test(&layout, 25.0, 50.0), Some(leaves[1]));
        assert_eq!(hit_test(&layout, 99.9, 99.9), Some(leaves[1]));
        assert_eq!(hit_test(&layout, 100.0, 50.0), None);
        assert_eq!(hit_test(&layout, -1.0, 50.0), None);
    }

    #[test]
    fn hover_then_unhover() {
        let (tree, layout) = fixture();
        let mut hover = HoverState::new();
        let first = tree.leaves().next().unwrap();

        assert_eq!(hover.pointer_moved(&tree, &layout, 5.0, 40.0), HoverChange::Entered(first));
        let tooltip = hover.tooltip();
        assert_eq!(
            tooltip.content.as_ref().map(ToString::to_string).as_deref(),
            Some("Name: Dredd Category: Action Value: 10")
        );
        assert_eq!((tooltip.left, tooltip.top), (15.0, 12.0));

        assert_eq!(hover.pointer_moved(&tree, &layout, 6.0, 41.0), HoverChange::Unchanged);
        assert_eq!(hover.tooltip().left, 16.0);

        assert_eq!(hover.pointer_moved(&tree, &layout, 150.0, 40.0), HoverChange::Left(first));
        assert!(!hover.tooltip().is_visible());
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn moving_between_tiles_switches_content() {
        let (tree, layout) = fixture();
        let mut hover = HoverState::new();
        hover.pointer_moved(&tree, &layout, 5.0, 5.0);
        let second = tree.leaves().nth(1).unwrap();
        assert_eq!(hover.pointer_moved(&tree, &layout, 50.0, 5.0), HoverChange::Entered(second));
        assert_eq!(hover.tooltip().content.as_ref().unwrap().name, "Ted");
    }

    #[test]
    fn explicit_on_hover_returns_tooltip() {
        let (tree, _) = fixture();
        let mut hover = HoverState::new();
        let zero = tree.leaves().nth(2).unwrap();
        let tooltip = hover.on_hover(&tree, zero);
        assert_eq!(tooltip.content.as_ref().unwrap().value, 0.0);
        hover.on_unhover();
        assert_eq!(*hover.tooltip(), Tooltip::hidden());
    }
}
