use compact_str::CompactString;

use crate::layout::{self, Layout, LayoutConfig, LayoutError};
use crate::render::{
    render_highlight, render_legend, render_tiles, svg, CategoryPalette, DrawCommand, OutputFormat,
    RenderConfig,
};
use crate::tree::{self, arena::Tree};
use crate::ui::input::{HoverChange, HoverState};
use crate::ui::tooltip::Tooltip;

/// Top-level treemap state: data, layout, colors and hover.
pub struct TreemapView {
    pub tree: Tree,
    pub layout: Layout,
    pub layout_config: LayoutConfig,
    pub render_config: RenderConfig,
    pub palette: CategoryPalette,
    /// First-level group names in input order, one legend row each
    pub legend_categories: Vec<CompactString>,
    pub hover: HoverState,
}

impl TreemapView {
    /// Lay out a validated tree and assign category colors.
    pub fn new(
        tree: Tree,
        layout_config: LayoutConfig,
        render_config: RenderConfig,
    ) -> Result<Self, LayoutError> {
        let layout = layout::compute_layout(
            &tree,
            render_config.width,
            render_config.height,
            &layout_config,
        )?;
        let palette = CategoryPalette::with_default_colors(&tree::categories(&tree));
        let legend_categories = tree::top_level_categories(&tree);

        tracing::info!(
            "Layout computed: {} rectangles, {} leaves, {} legend entries",
            layout.rects.len(),
            layout.leaves().count(),
            legend_categories.len()
        );

        Ok(Self {
            tree,
            layout,
            layout_config,
            render_config,
            palette,
            legend_categories,
            hover: HoverState::new(),
        })
    }

    /// Leaf tiles, plus an outline over the hovered one.
    pub fn tile_commands(&self) -> Vec<DrawCommand> {
        let mut commands = render_tiles(&self.tree, &self.layout, &self.palette);
        if let Some(node) = self.hover.hovered() {
            commands.extend(render_highlight(&self.tree, &self.layout, &self.palette, node));
        }
        commands
    }

    pub fn legend_commands(&self) -> Vec<DrawCommand> {
        render_legend(&self.legend_categories, &self.palette, &self.render_config.legend)
    }

    /// Feed a pointer move into the hover state machine.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> HoverChange {
        let change = self.hover.pointer_moved(&self.tree, &self.layout, x, y);
        if let HoverChange::Entered(node) = change {
            tracing::trace!("Hover entered {:?} '{}'", node, self.tree.get(node).name);
        }
        change
    }

    pub fn tooltip(&self) -> &Tooltip {
        self.hover.tooltip()
    }

    /// Serialize the current view in the configured output format.
    pub fn render_document(&self) -> String {
        let treemap = svg::treemap_svg(
            &self.tile_commands(),
            self.render_config.width,
            self.render_config.height,
        );
        match self.render_config.format {
            OutputFormat::Svg => treemap,
            OutputFormat::Html => {
                let legend = svg::legend_svg(&self.legend_commands(), &self.render_config.legend);
                svg::html_page(&self.render_config.title, &treemap, &legend)
            }
        }
    }
}
