//! Motif hits for whole sequences.
//!
//! Every `(sequence, motif)` pair is independent; [`scan_sequences`] fans the
//! sequences out over rayon and collects them back in input order.

use crate::{
    motif_pattern::{Motif, MotifSet},
    sequence_record::SequenceRecord,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotifHit {
    pub motif_index: usize,
    pub start: usize,
    pub length: usize,
}

impl MotifHit {
    #[inline(always)]
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// All hits of one motif, ascending by start.
pub fn find_motif_hits(motif: &Motif, sequence: &[u8]) -> Vec<MotifHit> {
    motif
        .pattern()
        .find_overlapping(sequence)
        .into_iter()
        .map(|start| MotifHit {
            motif_index: motif.index,
            start,
            length: motif.len(),
        })
        .collect()
}

/// One hit list per motif, in motif order.
pub fn scan_sequence(motifs: &MotifSet, record: &SequenceRecord) -> Vec<Vec<MotifHit>> {
    let ret: Vec<Vec<MotifHit>> = motifs
        .motifs()
        .iter()
        .map(|motif| find_motif_hits(motif, record.as_bytes()))
        .collect();
    debug!(
        sequence = record.id.as_str(),
        hits = ret.iter().map(Vec::len).sum::<usize>(),
        "scanned sequence"
    );
    ret
}

/// Per sequence (input order), per motif (motif order) hit lists.
pub fn scan_sequences(motifs: &MotifSet, records: &[SequenceRecord]) -> Vec<Vec<Vec<MotifHit>>> {
    records
        .par_iter()
        .map(|record| scan_sequence(motifs, record))
        .collect()
}
