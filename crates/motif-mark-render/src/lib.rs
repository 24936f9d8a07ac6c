//! SVG export of a motif-mark [`LayoutDocument`].

use motif_mark_protocol::{LayoutDocument, LineSegment, Point, Rect, Rgba};
use std::path::Path;
use svg::Document;
use svg::node::element::{Line, Rectangle, Text};

const FONT_FAMILY: &str = "Purisa";
const FONT_SIZE: f64 = 16.0;
const BASELINE_WIDTH: f64 = 2.0;
const TICK_WIDTH: f64 = 2.0;

fn line(segment: &LineSegment, color: &Rgba, width: f64) -> Line {
    Line::new()
        .set("x1", segment.from.x)
        .set("y1", segment.from.y)
        .set("x2", segment.to.x)
        .set("y2", segment.to.y)
        .set("stroke", color.to_hex())
        .set("stroke-opacity", color.alpha)
        .set("stroke-width", width)
}

fn filled_rect(rect: &Rect, color: &Rgba) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x)
        .set("y", rect.y)
        .set("width", rect.width)
        .set("height", rect.height)
        .set("fill", color.to_hex())
        .set("fill-opacity", color.alpha)
}

fn text(content: &str, anchor: &Point, color: &Rgba) -> Text {
    Text::new(content)
        .set("x", anchor.x)
        .set("y", anchor.y)
        .set("font-family", FONT_FAMILY)
        .set("font-size", FONT_SIZE)
        .set("fill", color.to_hex())
        .set("fill-opacity", color.alpha)
}

fn document(layout: &LayoutDocument) -> Document {
    let canvas = layout.canvas;
    let mut doc = Document::new()
        .set("viewBox", (0, 0, canvas.width, canvas.height))
        .set("width", canvas.width)
        .set("height", canvas.height);

    for track in &layout.tracks {
        doc = doc
            .add(text(&track.id, &track.label, &Rgba::BLACK))
            .add(line(&track.baseline, &Rgba::BLACK, BASELINE_WIDTH));
        for exon in &track.exons {
            doc = doc.add(filled_rect(&exon.rect, &Rgba::BLACK));
        }
        for tick in &track.ticks {
            doc = doc.add(line(&tick.line, &tick.color, TICK_WIDTH));
        }
    }

    let legend = &layout.legend;
    let frame = &legend.frame;
    doc = doc
        .add(
            Rectangle::new()
                .set("x", frame.x)
                .set("y", frame.y)
                .set("width", frame.width)
                .set("height", frame.height)
                .set("fill", "none")
                .set("stroke", Rgba::BLACK.to_hex())
                .set("stroke-width", 1),
        )
        .add(text(&legend.title, &legend.title_anchor, &Rgba::BLACK));
    for entry in &legend.entries {
        doc = doc
            .add(text(&entry.text, &entry.text_anchor, &entry.color))
            .add(filled_rect(&entry.swatch, &entry.color));
    }
    doc
}

pub fn export_layout_svg(layout: &LayoutDocument) -> String {
    document(layout).to_string()
}

pub fn write_layout_svg<P: AsRef<Path>>(layout: &LayoutDocument, path: P) -> std::io::Result<()> {
    svg::save(path, &document(layout))
}
