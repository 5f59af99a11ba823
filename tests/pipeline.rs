use std::path::Path;

use reelmap::app::TreemapView;
use reelmap::dataset;
use reelmap::layout::{LayoutConfig, TileMethod};
use reelmap::render::{DrawCommand, OutputFormat, RenderConfig};
use reelmap::tree::{self, TreeError};

fn fixture_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/movies.json"))
}

fn movies_view(tile: TileMethod) -> TreemapView {
    let raw = dataset::load(fixture_path()).unwrap();
    let tree = tree::build_tree(&raw).unwrap();
    TreemapView::new(
        tree,
        LayoutConfig { padding: 1.0, tile },
        RenderConfig::default(),
    )
    .unwrap()
}

#[test]
fn fixture_builds_with_string_values() {
    let raw = dataset::load(fixture_path()).unwrap();
    let tree = tree::build_tree(&raw).unwrap();
    assert_eq!(tree.leaves().count(), 13);
    assert_eq!(
        tree::top_level_categories(&tree),
        ["Action", "Drama", "Adventure", "Family", "Animation", "Comedy", "Biography"]
    );
    let first = tree.leaves().next().unwrap();
    assert_eq!(tree.get(first).value, 760505847.0);
}

#[test]
fn every_leaf_becomes_one_tile_inside_the_viewport() {
    for tile in [TileMethod::SliceDice, TileMethod::Squarify] {
        let view = movies_view(tile);
        let tiles = view.tile_commands();
        assert_eq!(tiles.len(), 13);
        for command in &tiles {
            let DrawCommand::Tile { rect, .. } = command else {
                panic!("unexpected command {command:?}");
            };
            assert!(rect.x0 >= 0.0 && rect.y0 >= 0.0);
            assert!(rect.x1 <= 960.0 && rect.y1 <= 600.0);
            assert!(rect.width() >= 0.0 && rect.height() >= 0.0);
        }
    }
}

#[test]
fn legend_follows_group_order_and_palette() {
    let view = movies_view(TileMethod::SliceDice);
    let legend = view.legend_commands();
    let swatches: Vec<(String, String)> = legend
        .iter()
        .filter_map(|c| match c {
            DrawCommand::LegendSwatch { category, fill, .. } => Some((category.to_string(), fill.to_hex())),
            _ => None,
        })
        .collect();
    assert_eq!(swatches.len(), 7);
    assert_eq!(swatches[0], ("Action".to_string(), "#FF5733".to_string()));
    assert_eq!(swatches[5], ("Comedy".to_string(), "#D1FF33".to_string()));
    assert_eq!(swatches[6], ("Biography".to_string(), "#FF5733".to_string()));
}

#[test]
fn tiles_and_legend_share_colors() {
    let view = movies_view(TileMethod::SliceDice);
    for command in view.tile_commands() {
        if let DrawCommand::Tile { category, fill, .. } = command {
            assert_eq!(fill, view.palette.color(&category));
        }
    }
}

#[test]
fn document_is_reproducible() {
    let a = movies_view(TileMethod::SliceDice).render_document();
    let b = movies_view(TileMethod::SliceDice).render_document();
    assert_eq!(a, b);
    assert!(a.contains("data-name=\"Avatar \""));
    assert!(a.contains("Name: Avatar \nCategory: Action\nValue: 760505847"));
}

#[test]
fn svg_format_skips_legend() {
    let raw = dataset::load(fixture_path()).unwrap();
    let view = TreemapView::new(
        tree::build_tree(&raw).unwrap(),
        LayoutConfig::default(),
        RenderConfig {
            format: OutputFormat::Svg,
            ..RenderConfig::default()
        },
    )
    .unwrap();
    let doc = view.render_document();
    assert!(!doc.contains("<!DOCTYPE html>"));
    assert!(!doc.contains("id=\"legend\""));
    assert_eq!(doc.matches("class=\"tile\"").count(), 13);
}

#[test]
fn malformed_dataset_is_rejected_before_layout() {
    let raw = dataset::parse_str(
        r#"{ "name": "Movies", "children": [
            { "name": "Action", "children": [
                { "name": "Broken", "category": "Action", "value": "-5" }
            ]}
        ]}"#,
    )
    .unwrap();
    assert!(matches!(
        tree::build_tree(&raw),
        Err(TreeError::NegativeValue { .. })
    ));
}
