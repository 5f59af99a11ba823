use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use reelmap::app::TreemapView;
use reelmap::dataset;
use reelmap::layout::{LayoutConfig, TileMethod};
use reelmap::render::{OutputFormat, RenderConfig};
use reelmap::tree;

/// Render a movie-revenue hierarchy as a treemap with a category legend
#[derive(Parser, Debug)]
#[command(name = "reelmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Hierarchy JSON document ("-" reads stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treemap width in pixels
    #[arg(long, default_value_t = 960.0)]
    width: f64,

    /// Treemap height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Gap left on the right and bottom edge of every tile
    #[arg(long, default_value_t = 1.0)]
    padding: f64,

    /// Tiling strategy
    #[arg(long, value_enum, default_value_t = Tile::SliceDice)]
    tile: Tile,

    /// Output document flavor
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Page title (html only)
    #[arg(long, default_value = "Movie Sales")]
    title: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tile {
    SliceDice,
    Squarify,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Svg,
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays a clean document)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reelmap=info".parse().context("invalid log directive")?),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("reelmap starting, input: {}", cli.input.display());

    let raw = dataset::load(&cli.input)?;
    let tree = tree::build_tree(&raw)
        .with_context(|| format!("dataset {} is malformed, nothing rendered", cli.input.display()))?;

    let layout_config = LayoutConfig {
        padding: cli.padding,
        tile: match cli.tile {
            Tile::SliceDice => TileMethod::SliceDice,
            Tile::Squarify => TileMethod::Squarify,
        },
    };
    let render_config = RenderConfig {
        width: cli.width,
        height: cli.height,
        title: cli.title,
        format: match cli.format {
            Format::Html => OutputFormat::Html,
            Format::Svg => OutputFormat::Svg,
        },
        ..RenderConfig::default()
    };

    let view = TreemapView::new(tree, layout_config, render_config).context("layout failed")?;
    let document = view.render_document();

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {}", document.len(), path.display());
        }
        None => print!("{document}"),
    }

    Ok(())
}
