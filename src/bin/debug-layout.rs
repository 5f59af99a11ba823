//! Diagnostic tool to verify dataset → tree → layout pipeline
use std::path::PathBuf;

use reelmap::dataset;
use reelmap::layout::{compute_layout, LayoutConfig, TileMethod};
use reelmap::tree;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reelmap=debug".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("-"));
    let width: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(960.0);
    let height: f64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(600.0);
    let tile = match args.next().as_deref() {
        Some("squarify") => TileMethod::Squarify,
        _ => TileMethod::SliceDice,
    };

    println!("=== DIAGNOSTIC: Dataset → Tree → Layout Pipeline ===");
    println!("Input: {}", input.display());

    // Load + validate
    let raw = dataset::load(&input)?;
    let tree = tree::build_tree(&raw)?;
    println!("\n[1] Tree built: {} nodes, {} leaves", tree.len(), tree.leaves().count());

    let root_node = tree.get(tree.root);
    println!("    Root: '{}' (value={})", root_node.name, root_node.value);

    // Top-level groups in input order
    println!("\n[2] Top-level groups:");
    for (i, child_id) in tree.children(tree.root).enumerate() {
        let child = tree.get(child_id);
        println!(
            "    [{}] '{}' - value {} ({} children)",
            i,
            child.name,
            child.value,
            tree.children(child_id).count()
        );
    }

    // Compute layout
    let config = LayoutConfig {
        tile,
        ..LayoutConfig::default()
    };
    let layout = compute_layout(&tree, width, height, &config)?;
    println!(
        "\n[3] Layout computed: {} rectangles ({:?}, padding {})",
        layout.rects.len(),
        config.tile,
        config.padding
    );

    // Largest leaves
    println!("\n[4] Top 10 largest leaf rectangles by area:");
    let mut sorted: Vec<_> = layout.leaves().copied().collect();
    sorted.sort_by(|a, b| b.rect.area().total_cmp(&a.rect.area()));
    for (i, r) in sorted.iter().take(10).enumerate() {
        let node = tree.get(r.node);
        println!(
            "    [{}] '{}' - {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1}) - value {}",
            i,
            node.name,
            r.rect.width(),
            r.rect.height(),
            r.rect.area(),
            r.rect.x0,
            r.rect.y0,
            node.value
        );
    }

    // Check for anomalies
    println!("\n[5] Checking for anomalies:");
    let leaf_area: f64 = layout.leaves().map(|r| r.rect.area()).sum();
    let viewport_area = width * height;
    println!("    Total leaf area: {:.0}px²", leaf_area);
    println!("    Viewport area:   {:.0}px²", viewport_area);
    println!("    Coverage: {:.1}%", (leaf_area / viewport_area) * 100.0);

    let mut overlaps = 0usize;
    for parent in tree.descendants(tree.root) {
        let children: Vec<_> = tree
            .children(parent)
            .filter_map(|id| layout.rect(id))
            .collect();
        for (i, a) in children.iter().enumerate() {
            for b in &children[i + 1..] {
                let shared = a.rect.intersection_area(&b.rect);
                if shared > 1e-9 {
                    overlaps += 1;
                    println!(
                        "    OVERLAP: '{}' and '{}' share {:.3}px²",
                        tree.get(a.node).name,
                        tree.get(b.node).name,
                        shared
                    );
                }
            }
        }
    }
    println!("    Sibling overlaps: {}", overlaps);

    let empty = layout.leaves().filter(|r| r.rect.area() <= 0.0).count();
    println!("    Zero-area leaves: {}", empty);

    Ok(())
}
