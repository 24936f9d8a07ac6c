//! Layout of sequence tracks, exon boxes, motif ticks and the legend.
//!
//! The vertical position of labels and tracks is carried in a
//! [`LayoutCursor`] folded over the sequences in input order. Motif colours
//! come from [`motif_color`] with the motif's own index, so ticks and legend
//! rows for one motif always agree.

use crate::{
    error::Result,
    exon_spans::ExonSpans,
    motif_colors::motif_color,
    motif_pattern::MotifSet,
    motif_scan::{MotifHit, scan_sequences},
    sequence_record::{SequenceRecord, sequence_stats},
    settings::LayoutSettings,
};
use motif_mark_protocol::{
    Canvas, ExonRect, LAYOUT_SCHEMA, LayoutDocument, Legend, LegendEntry, LineSegment, MotifTick,
    Point, Rect, SequenceTrack,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub label_y: f64,
    pub track_y: f64,
}

impl LayoutCursor {
    pub fn new(settings: &LayoutSettings) -> Self {
        Self {
            label_y: settings.label_start_y,
            track_y: settings.track_start_y,
        }
    }

    fn advance(self, settings: &LayoutSettings) -> Self {
        Self {
            label_y: self.label_y + settings.label_step,
            track_y: self.track_y + settings.track_step,
        }
    }
}

fn x_for_offset(settings: &LayoutSettings, offset: usize) -> f64 {
    settings.origin_x + offset as f64 * settings.pixels_per_base
}

fn layout_track(
    record: &SequenceRecord,
    hits: &[Vec<MotifHit>],
    motif_count: usize,
    cursor: LayoutCursor,
    settings: &LayoutSettings,
) -> SequenceTrack {
    let y = cursor.track_y;
    let exons = ExonSpans::new_from_sequence(record.as_bytes())
        .spans()
        .iter()
        .map(|span| ExonRect {
            start: span.from(),
            end: span.to(),
            rect: Rect {
                x: x_for_offset(settings, span.from()),
                y: y - settings.exon_half_height,
                width: span.len() as f64 * settings.pixels_per_base,
                height: 2.0 * settings.exon_half_height,
            },
        })
        .collect();
    let ticks = hits
        .iter()
        .flatten()
        .map(|hit| {
            let x = x_for_offset(settings, hit.start);
            MotifTick {
                motif_index: hit.motif_index,
                start: hit.start,
                length: hit.length,
                line: LineSegment {
                    from: Point {
                        x,
                        y: y - settings.tick_half_height,
                    },
                    to: Point {
                        x,
                        y: y + settings.tick_half_height,
                    },
                },
                color: motif_color(motif_count, hit.motif_index),
            }
        })
        .collect();
    SequenceTrack {
        id: record.id.clone(),
        length: record.len(),
        label: Point {
            x: settings.label_x,
            y: cursor.label_y,
        },
        baseline: LineSegment {
            from: Point {
                x: settings.origin_x,
                y,
            },
            to: Point {
                x: x_for_offset(settings, record.len()),
                y,
            },
        },
        exons,
        ticks,
    }
}

/// `cursor` is the state after the last track.
fn layout_legend(motifs: &MotifSet, cursor: LayoutCursor, settings: &LayoutSettings) -> Legend {
    let top = cursor.track_y - settings.legend_lift;
    let entries = motifs
        .motifs()
        .iter()
        .enumerate()
        .map(|(row, motif)| {
            let y = top + (row + 1) as f64 * settings.legend_row_step;
            LegendEntry {
                motif_index: motif.index,
                text: motif.text.clone(),
                text_anchor: Point {
                    x: settings.legend_text_x,
                    y,
                },
                swatch: Rect {
                    x: settings.legend_swatch_x,
                    y: y - 10.0,
                    width: settings.legend_swatch_size,
                    height: settings.legend_swatch_size,
                },
                color: motif_color(motifs.len(), motif.index),
            }
        })
        .collect();
    Legend {
        title: settings.legend_title.clone(),
        title_anchor: Point {
            x: settings.label_x,
            y: top - 10.0,
        },
        frame: Rect {
            x: settings.label_x,
            y: top,
            width: settings.legend_width,
            height: motifs.len() as f64 * settings.legend_frame_row,
        },
        entries,
    }
}

/// Tall enough for every track row and for the legend below the last track.
fn canvas_height(sequence_count: usize, legend: &Legend, settings: &LayoutSettings) -> f64 {
    let rows = sequence_count.max(1) as f64 * settings.canvas_row_height;
    let legend_bottom = legend
        .entries
        .iter()
        .map(|entry| (entry.swatch.y + entry.swatch.height).max(entry.text_anchor.y))
        .fold(legend.frame.y + legend.frame.height, f64::max);
    rows.max(legend_bottom + settings.canvas_margin_bottom)
}

/// Lays out already-compiled motifs over `records`. Total once `settings`
/// validate.
pub fn build_layout(
    records: &[SequenceRecord],
    motifs: &MotifSet,
    settings: &LayoutSettings,
) -> Result<LayoutDocument> {
    settings.validate()?;
    let all_hits = scan_sequences(motifs, records);
    let motif_count = motifs.len();

    let (cursor, tracks) = records.iter().zip(all_hits.iter()).fold(
        (LayoutCursor::new(settings), Vec::with_capacity(records.len())),
        |(cursor, mut tracks), (record, hits)| {
            let track = layout_track(record, hits, motif_count, cursor, settings);
            debug!(
                sequence = record.id.as_str(),
                exons = track.exons.len(),
                ticks = track.ticks.len(),
                "laid out track"
            );
            tracks.push(track);
            (cursor.advance(settings), tracks)
        },
    );

    let legend = layout_legend(motifs, cursor, settings);
    let (max_sequence_length, sequence_count) = sequence_stats(records);
    let canvas = Canvas {
        width: max_sequence_length as f64 * settings.pixels_per_base + settings.canvas_margin_x,
        height: canvas_height(sequence_count, &legend, settings),
    };
    let doc = LayoutDocument {
        schema: LAYOUT_SCHEMA.to_string(),
        canvas,
        sequence_count,
        motif_count,
        max_sequence_length,
        tracks,
        legend,
    };
    info!(
        sequences = sequence_count,
        motifs = motif_count,
        ticks = doc.tick_count(),
        "built motif layout"
    );
    Ok(doc)
}

/// Compiles `motifs` (rejecting empty ones) and lays them out.
pub fn annotate<S: AsRef<str>>(
    records: &[SequenceRecord],
    motifs: &[S],
    settings: &LayoutSettings,
) -> Result<LayoutDocument> {
    let motifs = MotifSet::compile(motifs)?;
    build_layout(records, &motifs, settings)
}
