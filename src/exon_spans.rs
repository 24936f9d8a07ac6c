use serde::{Deserialize, Serialize};

/// Half-open `[from, to)` run of uppercase letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExonSpan {
    from: usize,
    to: usize,
}

impl ExonSpan {
    #[inline(always)]
    pub fn from(&self) -> usize {
        self.from
    }

    #[inline(always)]
    pub fn to(&self) -> usize {
        self.to
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.to == self.from
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExonSpans {
    spans: Vec<ExonSpan>,
}

impl ExonSpans {
    /// Maximal ASCII-uppercase runs; anything else, digits and gaps
    /// included, is intron.
    pub fn new_from_sequence(sequence: &[u8]) -> Self {
        let mut ret = Self::default();
        let mut run_start: Option<usize> = None;
        for (pos, b) in sequence.iter().enumerate() {
            match (b.is_ascii_uppercase(), run_start) {
                (true, None) => run_start = Some(pos),
                (false, Some(from)) => {
                    ret.spans.push(ExonSpan { from, to: pos });
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(from) = run_start {
            ret.spans.push(ExonSpan {
                from,
                to: sequence.len(),
            });
        }
        ret
    }

    #[inline(always)]
    pub fn spans(&self) -> &[ExonSpan] {
        &self.spans
    }
}
