//! Machine-readable layout contracts shared between the motif-mark engine and
//! its renderers.
//!
//! A [`LayoutDocument`] carries absolute canvas coordinates for every drawable
//! element. It is produced by `motif_mark::layout` and consumed by
//! `motif_mark_render`, or by any other renderer that reads the JSON form.

use serde::{Deserialize, Serialize};

pub const LAYOUT_SCHEMA: &str = "motif_mark.layout.v1";

/// Colour with `f32` channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// Uppercase run `[start, end)` of a sequence and where to draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExonRect {
    pub start: usize,
    pub end: usize,
    pub rect: Rect,
}

/// One motif occurrence drawn as a vertical tick at its start offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifTick {
    pub motif_index: usize,
    pub start: usize,
    pub length: usize,
    pub line: LineSegment,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceTrack {
    pub id: String,
    pub length: usize,
    pub label: Point,
    pub baseline: LineSegment,
    pub exons: Vec<ExonRect>,
    pub ticks: Vec<MotifTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub motif_index: usize,
    pub text: String,
    pub text_anchor: Point,
    pub swatch: Rect,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub title_anchor: Point,
    pub frame: Rect,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub schema: String,
    pub canvas: Canvas,
    pub sequence_count: usize,
    pub motif_count: usize,
    pub max_sequence_length: usize,
    pub tracks: Vec<SequenceTrack>,
    pub legend: Legend,
}

impl LayoutDocument {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn tick_count(&self) -> usize {
        self.tracks.iter().map(|t| t.ticks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_hex() {
        assert_eq!(Rgba::BLACK.to_hex(), "#000000");
        assert_eq!(Rgba::new(1.0, 0.0, 0.5, 1.0).to_hex(), "#ff0080");
        assert_eq!(Rgba::new(2.0, -1.0, 1.0, 0.3).to_hex(), "#ff00ff");
    }

    #[test]
    fn test_document_json() {
        let doc = LayoutDocument {
            schema: LAYOUT_SCHEMA.to_string(),
            canvas: Canvas {
                width: 312.0,
                height: 250.0,
            },
            sequence_count: 1,
            motif_count: 0,
            max_sequence_length: 12,
            tracks: vec![],
            legend: Legend {
                title: "MOTIF LEGEND".to_string(),
                title_anchor: Point { x: 50.0, y: 200.0 },
                frame: Rect {
                    x: 50.0,
                    y: 210.0,
                    width: 300.0,
                    height: 0.0,
                },
                entries: vec![],
            },
        };
        let text = doc.to_json_pretty().unwrap();
        assert!(text.contains("motif_mark.layout.v1"));
        assert_eq!(LayoutDocument::from_json(&text).unwrap(), doc);
        assert_eq!(doc.tick_count(), 0);
    }
}
