use compact_str::CompactString;

use super::colors::{AppColor, CategoryPalette};
use crate::layout::{Layout, Rect};
use crate::tree::arena::{NodeId, Tree};

/// Renderer-agnostic description of one shape or label.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// One treemap leaf.
    Tile {
        node: NodeId,
        rect: Rect,
        fill: AppColor,
        name: CompactString,
        category: CompactString,
        value: f64,
    },
    /// Colored square of a legend entry.
    LegendSwatch {
        rect: Rect,
        fill: AppColor,
        category: CompactString,
    },
    /// Text of a legend entry, vertically centered on `y`.
    LegendLabel { x: f64, y: f64, text: CompactString },
    /// Outline drawn over the hovered tile.
    Highlight { rect: Rect, stroke: AppColor },
}

/// Legend geometry. One row per category: a swatch followed by its label.
#[derive(Debug, Clone)]
pub struct LegendConfig {
    pub width: f64,
    /// Side of the colored square
    pub swatch_size: f64,
    /// Gap between rows, and between swatch and label
    pub spacing: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            swatch_size: 20.0,
            spacing: 5.0,
        }
    }
}

impl LegendConfig {
    pub fn row_height(&self) -> f64 {
        self.swatch_size + self.spacing
    }

    pub fn height(&self, rows: usize) -> f64 {
        rows as f64 * self.row_height()
    }
}

/// One `Tile` per leaf, in leaf order.
pub fn render_tiles(tree: &Tree, layout: &Layout, palette: &CategoryPalette) -> Vec<DrawCommand> {
    layout
        .leaves()
        .map(|leaf| {
            let node = tree.get(leaf.node);
            let category = node.category.clone().unwrap_or_default();
            DrawCommand::Tile {
                node: leaf.node,
                rect: leaf.rect,
                fill: palette.color(&category),
                name: node.name.clone(),
                category,
                value: node.value,
            }
        })
        .collect()
}

/// Swatch and label for every category, top to bottom in the given order.
pub fn render_legend(
    categories: &[CompactString],
    palette: &CategoryPalette,
    config: &LegendConfig,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(categories.len() * 2);
    for (i, category) in categories.iter().enumerate() {
        let top = i as f64 * config.row_height();
        commands.push(DrawCommand::LegendSwatch {
            rect: Rect::new(0.0, top, config.swatch_size, top + config.swatch_size),
            fill: palette.color(category),
            category: category.clone(),
        });
        commands.push(DrawCommand::LegendLabel {
            x: config.swatch_size + config.spacing,
            y: top + config.swatch_size / 2.0,
            text: category.clone(),
        });
    }
    commands
}

/// Outline for the hovered tile, if the node was laid out.
pub fn render_highlight(
    tree: &Tree,
    layout: &Layout,
    palette: &CategoryPalette,
    node: NodeId,
) -> Option<DrawCommand> {
    let rect = layout.rect(node)?.rect;
    let category = tree.get(node).category.as_deref().unwrap_or_default();
    Some(DrawCommand::Highlight {
        rect,
        stroke: palette.color(category).lighten(0.35),
    })
}
