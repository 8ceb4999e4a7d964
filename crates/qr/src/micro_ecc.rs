/// The error correction level used in a Micro QR Code symbol.
///
/// Micro QR has no `High` level; `Quartile` is legal only at version M4, and
/// M1 carries no error-level field at all (see `crate::designator::Designator`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MicroEcc {
    Low,
    Medium,
    Quartile,
}

impl MicroEcc {
    pub fn letter(self) -> char {
        match self {
            MicroEcc::Low => 'L',
            MicroEcc::Medium => 'M',
            MicroEcc::Quartile => 'Q',
        }
    }
}

impl std::fmt::Display for MicroEcc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
