pub mod colors;
pub mod commands;
pub mod svg;

pub use colors::{AppColor, CategoryPalette};
pub use commands::{render_highlight, render_legend, render_tiles, DrawCommand, LegendConfig};

/// Output document flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Standalone page with the treemap and its legend.
    #[default]
    Html,
    /// Bare treemap `<svg>`.
    Svg,
}

/// Everything the renderer needs besides the data.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub legend: LegendConfig,
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
            title: "Movie Sales".to_string(),
            legend: LegendConfig::default(),
            format: OutputFormat::Html,
        }
    }
}
