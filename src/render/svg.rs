//! SVG/HTML serialization of draw commands.
//!
//! Tiles carry `data-name`, `data-category` and `data-value` attributes plus a
//! `<title>` child, which browsers show as the hover tooltip.

use svg::node::element::{Group, Rectangle, Text, Title};
use svg::node::Text as TextNode;
use svg::Document;

use super::commands::{DrawCommand, LegendConfig};
use crate::layout::Rect;
use crate::ui::tooltip::TooltipContent;

/// `<svg>` with one `<g class="cell">` per tile. Legend commands are ignored.
pub fn treemap_svg(commands: &[DrawCommand], width: f64, height: f64) -> String {
    let mut document = Document::new()
        .set("id", "treemap")
        .set("width", num(width))
        .set("height", num(height));

    for command in commands {
        match command {
            DrawCommand::Tile {
                rect,
                fill,
                name,
                category,
                value,
                ..
            } => {
                let tooltip = TooltipContent {
                    name: name.clone(),
                    category: category.clone(),
                    value: *value,
                };
                let tile = Rectangle::new()
                    .set("class", "tile")
                    .set("width", num(rect.width()))
                    .set("height", num(rect.height()))
                    .set("data-name", name.as_str())
                    .set("data-category", category.as_str())
                    .set("data-value", value.to_string())
                    .set("fill", fill.to_hex())
                    .add(Title::new(tooltip.lines().join("\n")));
                let cell = Group::new()
                    .set("class", "cell")
                    .set("transform", format!("translate({},{})", num(rect.x0), num(rect.y0)))
                    .add(tile);
                document = document.add(cell);
            }
            DrawCommand::Highlight { rect, stroke } => {
                let outline = positioned(Rectangle::new(), rect)
                    .set("class", "highlight")
                    .set("fill", "none")
                    .set("stroke", stroke.to_hex())
                    .set("stroke-width", 2);
                document = document.add(outline);
            }
            DrawCommand::LegendSwatch { .. } | DrawCommand::LegendLabel { .. } => {}
        }
    }

    document.to_string()
}

/// `<svg>` holding the legend rows. Tile commands are ignored.
pub fn legend_svg(commands: &[DrawCommand], config: &LegendConfig) -> String {
    let rows = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::LegendSwatch { .. }))
        .count();

    let mut document = Document::new()
        .set("id", "legend")
        .set("width", num(config.width))
        .set("height", num(config.height(rows)));

    for command in commands {
        match command {
            DrawCommand::LegendSwatch { rect, fill, category } => {
                let swatch = positioned(Rectangle::new(), rect)
                    .set("class", "legend-item")
                    .set("fill", fill.to_hex())
                    .set("data-category", category.as_str());
                document = document.add(swatch);
            }
            DrawCommand::LegendLabel { x, y, text } => {
                let label = Text::new(text.as_str())
                    .set("x", num(*x))
                    .set("y", num(*y))
                    .set("dy", "0.35em");
                document = document.add(label);
            }
            DrawCommand::Tile { .. } | DrawCommand::Highlight { .. } => {}
        }
    }

    document.to_string()
}

/// Standalone page: title, treemap, legend.
pub fn html_page(title: &str, treemap: &str, legend: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\nbody {{ font-family: sans-serif; }}\n.tile:hover {{ opacity: 0.8; }}\n</style>\n</head>\n<body>\n\
         <h1 id=\"title\">{title}</h1>\n{treemap}\n{legend}\n</body>\n</html>\n",
        title = TextNode::new(title),
    )
}

fn positioned(rect_element: Rectangle, rect: &Rect) -> Rectangle {
    rect_element
        .set("x", num(rect.x0))
        .set("y", num(rect.y0))
        .set("width", num(rect.width()))
        .set("height", num(rect.height()))
}

/// Coordinates with at most three decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors::AppColor;
    use crate::tree::arena::NodeId;

    fn tile(name: &str) -> DrawCommand {
        DrawCommand::Tile {
            node: NodeId(3),
            rect: Rect::new(25.0, 0.0, 100.0, 100.0 / 3.0),
            fill: AppColor::from_hex("#33FF57").unwrap(),
            name: name.into(),
            category: "Comedy".into(),
            value: 1234.0,
        }
    }

    #[test]
    fn tile_markup_carries_data_attributes() {
        let svg = treemap_svg(&[tile("Ted")], 960.0, 600.0);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("id=\"treemap\""));
        assert!(svg.contains("width=\"960\""));
        assert!(svg.contains("transform=\"translate(25,0)\""));
        assert!(svg.contains("width=\"75\""));
        assert!(svg.contains("height=\"33.333\""));
        assert!(svg.contains("data-name=\"Ted\""));
        assert!(svg.contains("data-category=\"Comedy\""));
        assert!(svg.contains("data-value=\"1234\""));
        assert!(svg.contains("fill=\"#33FF57\""));
        assert!(svg.contains("Name: Ted\nCategory: Comedy\nValue: 1234"));
        assert_eq!(svg.matches("<title>").count(), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn tooltip_text_is_escaped() {
        let svg = treemap_svg(&[tile("Tom & <Jerry>")], 960.0, 600.0);
        assert!(svg.contains("Name: Tom &amp; &lt;Jerry&gt;"));
        assert!(!svg.contains("<Jerry>"));
    }

    #[test]
    fn legend_markup_has_one_item_per_swatch() {
        let commands = vec![
            DrawCommand::LegendSwatch {
                rect: Rect::new(0.0, 0.0, 20.0, 20.0),
                fill: AppColor::from_hex("#FF5733").unwrap(),
                category: "Action".into(),
            },
            DrawCommand::LegendLabel {
                x: 25.0,
                y: 10.0,
                text: "Action".into(),
            },
            tile("Ted"),
        ];
        let svg = legend_svg(&commands, &LegendConfig::default());
        assert!(svg.contains("id=\"legend\""));
        assert!(svg.contains("width=\"300\""));
        assert!(svg.contains("height=\"25\""));
        assert_eq!(svg.matches("class=\"legend-item\"").count(), 1);
        assert!(svg.contains(">Action</text>"));
        assert!(svg.contains("dy=\"0.35em\""));
        assert!(!svg.contains("class=\"tile\""));
    }

    #[test]
    fn page_embeds_both_documents() {
        let page = html_page("Movie <Sales>", "<svg id=\"treemap\"></svg>", "<svg id=\"legend\"></svg>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Movie &lt;Sales&gt;"));
        assert!(!page.contains("<Sales>"));
        assert!(page.contains("<svg id=\"treemap\"></svg>\n<svg id=\"legend\"></svg>"));
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(25.0), "25");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(2.0 / 3.0), "0.667");
    }
}
