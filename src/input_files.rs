//! Readers for the two input files: a FASTA of genes (exons uppercase,
//! introns lowercase) and a plain list of motifs, one per line.

use crate::{
    error::{ErrorCode, MotifMarkError, Result},
    sequence_record::SequenceRecord,
};
use bio::io::fasta;
use std::{fs::File, io::Read};
use tracing::{info, warn};

fn definition_line(record: &fasta::Record) -> String {
    match record.desc() {
        Some(desc) => format!(">{} {}", record.id(), desc),
        None => format!(">{}", record.id()),
    }
}

/// Multi-line records are joined; letter case is left untouched.
pub fn read_fasta_records_from<R: Read>(reader: R) -> Result<Vec<SequenceRecord>> {
    let mut ret = vec![];
    for record in fasta::Reader::new(reader).records() {
        let record = record.map_err(|e| {
            MotifMarkError::new(ErrorCode::InvalidInput, format!("Malformed FASTA record: {e}"))
        })?;
        let sequence = String::from_utf8(record.seq().to_vec()).map_err(|e| {
            MotifMarkError::new(
                ErrorCode::InvalidInput,
                format!("Sequence '{}' is not valid UTF-8: {e}", record.id()),
            )
        })?;
        ret.push(SequenceRecord {
            id: definition_line(&record),
            sequence,
        });
    }
    Ok(ret)
}

pub fn read_fasta_records(path: &str) -> Result<Vec<SequenceRecord>> {
    let file = File::open(path).map_err(|e| {
        MotifMarkError::new(ErrorCode::Io, format!("Could not open FASTA file '{path}': {e}"))
    })?;
    let records = read_fasta_records_from(file)?;
    if records.is_empty() {
        warn!(path, "FASTA file contains no records");
    }
    info!(path, count = records.len(), "read sequences");
    Ok(records)
}

/// 1-based numbers of blank lines followed by more motifs. Skipping them
/// shifts the index, and so the colour, of every later motif.
pub fn interior_blank_lines(text: &str) -> Vec<usize> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let Some(last) = lines.iter().rposition(|line| !line.is_empty()) else {
        return vec![];
    };
    lines[..last]
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_empty())
        .map(|(idx, _)| idx + 1)
        .collect()
}

/// Blank lines are skipped, every other line is trimmed and kept as-is,
/// duplicates included.
pub fn parse_motif_list(text: &str) -> Vec<String> {
    for line in interior_blank_lines(text) {
        warn!(line, "skipping blank line in motif list");
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

pub fn read_motif_list(path: &str) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        MotifMarkError::new(ErrorCode::Io, format!("Could not read motif file '{path}': {e}"))
    })?;
    let motifs = parse_motif_list(&text);
    info!(path, count = motifs.len(), "read motifs");
    Ok(motifs)
}
