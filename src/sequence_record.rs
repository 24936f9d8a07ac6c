use serde::{Deserialize, Serialize};

/// One normalized input sequence. `id` is the full definition line and
/// `sequence` keeps its original letter case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.sequence.as_bytes()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// `(max_length, count)` over all records.
pub fn sequence_stats(records: &[SequenceRecord]) -> (usize, usize) {
    let max_length = records.iter().map(SequenceRecord::len).max().unwrap_or(0);
    (max_length, records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_stats() {
        let records = vec![
            SequenceRecord::new(">a", "acgtACGT"),
            SequenceRecord::new(">b", "ACGTacgtACGTacgt"),
            SequenceRecord::new(">c", ""),
        ];
        assert_eq!(sequence_stats(&records), (16, 3));
        assert_eq!(sequence_stats(&[]), (0, 0));
        assert!(records[2].is_empty());
    }
}
