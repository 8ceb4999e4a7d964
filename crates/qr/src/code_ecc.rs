/// The error correction level used in a QR Code symbol.
///
/// These four constants are ordered from lowest to highest encoding strength
/// (and correspondingly lowest to highest overhead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeEcc {
    Low,
    Medium,
    Quartile,
    High,
}

impl CodeEcc {
    /// In the range 0 to 3 (unsigned 2-bit integer).
    pub fn ordinal(self) -> usize {
        match self {
            CodeEcc::Low => 0,
            CodeEcc::Medium => 1,
            CodeEcc::Quartile => 2,
            CodeEcc::High => 3,
        }
    }

    /// In the range 0 to 3 (unsigned 2-bit integer), but in a different
    /// numbering scheme than `ordinal()`. This is the value used directly in
    /// the format information bits.
    pub fn format_bits(self) -> u32 {
        match self {
            CodeEcc::Low => 1,
            CodeEcc::Medium => 0,
            CodeEcc::Quartile => 3,
            CodeEcc::High => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            CodeEcc::Low => 'L',
            CodeEcc::Medium => 'M',
            CodeEcc::Quartile => 'Q',
            CodeEcc::High => 'H',
        }
    }
}

impl std::fmt::Display for CodeEcc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
