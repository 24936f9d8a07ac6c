//! Compilation of IUPAC motif strings into fixed-length matchers.
//!
//! A compiled [`MotifPattern`] is one [`ByteClass`] per motif position, built
//! from [`expand_symbol`]. Matching is gap-free and tried at every offset, so
//! overlapping occurrences are all reported.

use crate::{
    error::{ErrorCode, MotifMarkError, Result},
    iupac_code::{LiteralSet, expand_symbol},
};
use tracing::debug;

/// 256-bit membership table over bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteClass([u64; 4]);

impl ByteClass {
    pub fn from_literals(literals: &LiteralSet) -> Self {
        let mut ret = Self::default();
        for &b in literals.as_slice() {
            ret.0[(b >> 6) as usize] |= 1u64 << (b & 63);
        }
        ret
    }

    #[inline(always)]
    pub fn matches(&self, letter: u8) -> bool {
        self.0[(letter >> 6) as usize] & (1u64 << (letter & 63)) != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifPattern {
    classes: Vec<ByteClass>,
}

impl MotifPattern {
    /// Never fails. An empty motif yields a zero-length pattern that matches
    /// at every offset; [`MotifSet::compile`] is where empty motifs are
    /// rejected.
    pub fn new(motif: &str) -> Self {
        let classes = motif
            .bytes()
            .map(|b| ByteClass::from_literals(&expand_symbol(b)))
            .collect();
        Self { classes }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn matches_at(&self, sequence: &[u8], offset: usize) -> bool {
        let Some(end) = offset.checked_add(self.len()) else {
            return false;
        };
        match sequence.get(offset..end) {
            Some(window) => window
                .iter()
                .zip(self.classes.iter())
                .all(|(b, class)| class.matches(*b)),
            None => false,
        }
    }

    /// Ascending start offsets of every occurrence, overlapping ones
    /// included. Each offset is tested independently of earlier hits.
    pub fn find_overlapping(&self, sequence: &[u8]) -> Vec<usize> {
        if sequence.len() < self.len() {
            return vec![];
        }
        (0..=sequence.len() - self.len())
            .filter(|&offset| self.matches_at(sequence, offset))
            .collect()
    }
}

/// A motif as typed by the user. `index` is its identity: two entries with
/// the same text are still two motifs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    pub index: usize,
    pub text: String,
    pattern: MotifPattern,
}

impl Motif {
    pub fn pattern(&self) -> &MotifPattern {
        &self.pattern
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Ordered, validated list of compiled motifs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MotifSet {
    motifs: Vec<Motif>,
}

impl MotifSet {
    pub fn compile<S: AsRef<str>>(motifs: &[S]) -> Result<Self> {
        let mut ret = Vec::with_capacity(motifs.len());
        for (index, text) in motifs.iter().enumerate() {
            let text = text.as_ref();
            if text.is_empty() {
                return Err(MotifMarkError::new(
                    ErrorCode::InvalidMotif,
                    format!("Motif #{index} is empty"),
                ));
            }
            let pattern = MotifPattern::new(text);
            debug!(index, motif = text, length = pattern.len(), "compiled motif");
            ret.push(Motif {
                index,
                text: text.to_string(),
                pattern,
            });
        }
        Ok(Self { motifs: ret })
    }

    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_hits() {
        let pattern = MotifPattern::new("AA");
        assert_eq!(pattern.find_overlapping(b"AAAA"), vec![0, 1, 2]);
        let pattern = MotifPattern::new("ATA");
        assert_eq!(pattern.find_overlapping(b"ATATATA"), vec![0, 2, 4]);
    }

    #[test]
    fn test_ambiguous_hits() {
        assert_eq!(MotifPattern::new("N").find_overlapping(b"ACGT"), vec![0, 1, 2, 3]);
        assert_eq!(MotifPattern::new("Y").find_overlapping(b"ACGT"), vec![1, 3]);
        assert_eq!(MotifPattern::new("YGCY").find_overlapping(b"aaTGCCaa"), vec![2]);
    }

    #[test]
    fn test_case_and_uracil() {
        let pattern = MotifPattern::new("t");
        assert_eq!(pattern.find_overlapping(b"aTcUgtxu"), vec![1, 3, 5, 7]);
        assert_eq!(MotifPattern::new("UA").find_overlapping(b"ttaTA"), vec![1, 3]);
    }

    #[test]
    fn test_sequence_letter_is_not_expanded() {
        // An N in the sequence is only matched by a motif symbol that lists N.
        assert!(MotifPattern::new("A").find_overlapping(b"N").is_empty());
        assert!(MotifPattern::new("N").find_overlapping(b"N").is_empty());
        assert_eq!(MotifPattern::new("X").find_overlapping(b"xXX"), vec![1, 2]);
    }

    #[test]
    fn test_short_sequence() {
        assert!(MotifPattern::new("ACGT").find_overlapping(b"ACG").is_empty());
        assert!(MotifPattern::new("A").find_overlapping(b"").is_empty());
        assert!(!MotifPattern::new("AC").matches_at(b"AC", 1));
        assert!(!MotifPattern::new("AC").matches_at(b"ACGT", usize::MAX));
        assert!(!MotifPattern::new("").matches_at(b"ACGT", usize::MAX));
    }

    #[test]
    fn test_empty_pattern_matches_everywhere() {
        let pattern = MotifPattern::new("");
        assert!(pattern.is_empty());
        assert_eq!(pattern.find_overlapping(b"ACG"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_motif_set_rejects_empty() {
        let err = MotifSet::compile(&["YGCY", ""]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidMotif);
        assert!(err.message.contains("#1"));
    }

    #[test]
    fn test_motif_set_keeps_duplicates() {
        let set = MotifSet::compile(&["GCAUG", "GCAUG", "catag"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.motifs()[1].index, 1);
        assert_eq!(set.motifs()[1].text, "GCAUG");
        assert_eq!(set.motifs()[0].pattern(), set.motifs()[1].pattern());
        assert_eq!(set.motifs()[2].len(), 5);
        assert!(MotifSet::compile::<&str>(&[]).unwrap().is_empty());
    }
}
