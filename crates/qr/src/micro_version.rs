/// The version number of a Micro QR Code symbol: M1 through M4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MicroVersion {
    M1,
    M2,
    M3,
    M4,
}

impl MicroVersion {
    pub const ALL: [MicroVersion; 4] = [
        MicroVersion::M1,
        MicroVersion::M2,
        MicroVersion::M3,
        MicroVersion::M4,
    ];

    /// The zero-based ordinal used throughout the mode/count-width formulas:
    /// M1 -> 0, M2 -> 1, M3 -> 2, M4 -> 3.
    pub fn number(self) -> u8 {
        match self {
            MicroVersion::M1 => 0,
            MicroVersion::M2 => 1,
            MicroVersion::M3 => 2,
            MicroVersion::M4 => 3,
        }
    }

    /// The symbol's width and height in modules: 11 + 2*number(version).
    pub fn size(self) -> i32 {
        11 + 2 * i32::from(self.number())
    }
}

impl std::fmt::Display for MicroVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{}", self.number() + 1)
    }
}
