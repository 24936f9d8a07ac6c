const DNA_BITMASK_A: u8 = 1;
const DNA_BITMASK_C: u8 = 2;
const DNA_BITMASK_G: u8 = 4;
const DNA_BITMASK_T: u8 = 8;
const DNA_BITMASK_N: u8 = DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_G | DNA_BITMASK_T;

/// A bitmasked IUPAC code for DNA bases, eg DNA_BITMASK_A|DNA_BITMASK_C.
/// U shares the T bit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IupacCode(u8);

impl IupacCode {
    pub fn new(bitmask: u8) -> Self {
        Self(bitmask)
    }

    /// Empty for anything outside the IUPAC table.
    #[inline(always)]
    pub fn from_letter(letter: u8) -> Self {
        match letter.to_ascii_uppercase() {
            b'A' => Self(DNA_BITMASK_A),
            b'C' => Self(DNA_BITMASK_C),
            b'G' => Self(DNA_BITMASK_G),
            b'T' => Self(DNA_BITMASK_T),
            b'U' => Self(DNA_BITMASK_T),
            b'W' => Self(DNA_BITMASK_A | DNA_BITMASK_T),
            b'S' => Self(DNA_BITMASK_C | DNA_BITMASK_G),
            b'M' => Self(DNA_BITMASK_A | DNA_BITMASK_C),
            b'K' => Self(DNA_BITMASK_G | DNA_BITMASK_T),
            b'R' => Self(DNA_BITMASK_A | DNA_BITMASK_G),
            b'Y' => Self(DNA_BITMASK_C | DNA_BITMASK_T),
            b'B' => Self(DNA_BITMASK_C | DNA_BITMASK_G | DNA_BITMASK_T),
            b'D' => Self(DNA_BITMASK_A | DNA_BITMASK_G | DNA_BITMASK_T),
            b'H' => Self(DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_T),
            b'V' => Self(DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_G),
            b'N' => Self(DNA_BITMASK_N),
            _ => Self(0),
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Every literal this code stands for, in both cases; T brings U along.
    pub fn literals(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(8);
        if self.0 & DNA_BITMASK_A != 0 {
            ret.extend_from_slice(b"Aa");
        }
        if self.0 & DNA_BITMASK_C != 0 {
            ret.extend_from_slice(b"Cc");
        }
        if self.0 & DNA_BITMASK_G != 0 {
            ret.extend_from_slice(b"Gg");
        }
        if self.0 & DNA_BITMASK_T != 0 {
            ret.extend_from_slice(b"TtUu");
        }
        ret
    }
}

/// Sorted, deduplicated set of literal bytes a motif symbol may match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralSet(Vec<u8>);

impl LiteralSet {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.binary_search(&letter).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Characters outside the IUPAC table pass through as a literal match of
/// themselves.
pub fn expand_symbol(symbol: u8) -> LiteralSet {
    let code = IupacCode::from_letter(symbol);
    let mut literals = if code.is_empty() {
        vec![symbol]
    } else {
        code.literals()
    };
    literals.sort_unstable();
    literals.dedup();
    LiteralSet(literals)
}
