use crate::micro_version::MicroVersion;
use crate::version::Version;

/// The encoding mode of a data segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentMode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
    /// Extended Channel Interpretation header, see `crate::eci`.
    Eci,
}

impl SegmentMode {
    /// The 4-bit mode indicator value used by full-size QR symbols.
    pub fn qr_mode_bits(self) -> u32 {
        match self {
            SegmentMode::Numeric => 0x1,
            SegmentMode::Alphanumeric => 0x2,
            SegmentMode::Byte => 0x4,
            SegmentMode::Kanji => 0x8,
            SegmentMode::Eci => 0x7,
        }
    }

    /// The width, in bits, of this mode's character-count field at the given
    /// QR version.
    pub fn qr_num_char_count_bits(self, ver: Version) -> u8 {
        let band = usize::from((ver.value() + 7) / 17);
        match self {
            SegmentMode::Numeric => [10, 12, 14][band],
            SegmentMode::Alphanumeric => [9, 11, 13][band],
            SegmentMode::Byte => [8, 16, 16][band],
            SegmentMode::Kanji => [8, 10, 12][band],
            SegmentMode::Eci => 0,
        }
    }

    /// The 0..=3-bit mode indicator value used by Micro QR symbols, or `None`
    /// for `Eci` (Micro QR carries no ECI mode indicator).
    pub fn micro_mode_value(self) -> Option<u32> {
        match self {
            SegmentMode::Numeric => Some(0b000),
            SegmentMode::Alphanumeric => Some(0b001),
            SegmentMode::Byte => Some(0b010),
            SegmentMode::Kanji => Some(0b011),
            SegmentMode::Eci => None,
        }
    }

    /// Whether this mode has an available encoder at the given Micro QR
    /// version (M1 is numeric-only; M2 adds alphanumeric; M3/M4 add byte and
    /// kanji).
    pub fn available_at(self, version: MicroVersion) -> bool {
        match self {
            SegmentMode::Numeric => true,
            SegmentMode::Alphanumeric => version != MicroVersion::M1,
            SegmentMode::Byte | SegmentMode::Kanji => {
                matches!(version, MicroVersion::M3 | MicroVersion::M4)
            }
            SegmentMode::Eci => false,
        }
    }

    /// The width, in bits, of this mode's indicator field at the given Micro
    /// QR version: `number(version)`, so M1 has a 0-bit (absent) indicator.
    pub fn micro_mode_bits_width(self, version: MicroVersion) -> u8 {
        version.number()
    }

    /// The width, in bits, of this mode's character-count field at the given
    /// Micro QR version.
    pub fn micro_num_char_count_bits(self, version: MicroVersion) -> u8 {
        let n = version.number();
        match self {
            SegmentMode::Numeric => 3 + n,
            SegmentMode::Alphanumeric => 2 + n,
            SegmentMode::Byte => 2 + n,
            SegmentMode::Kanji => 1 + n,
            SegmentMode::Eci => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micro_availability_matches_standard_table() {
        assert!(SegmentMode::Numeric.available_at(MicroVersion::M1));
        assert!(!SegmentMode::Alphanumeric.available_at(MicroVersion::M1));
        assert!(SegmentMode::Alphanumeric.available_at(MicroVersion::M2));
        assert!(!SegmentMode::Byte.available_at(MicroVersion::M2));
        assert!(SegmentMode::Byte.available_at(MicroVersion::M3));
        assert!(SegmentMode::Kanji.available_at(MicroVersion::M4));
    }

    #[test]
    fn micro_count_widths_match_standard_table() {
        assert_eq!(SegmentMode::Numeric.micro_num_char_count_bits(MicroVersion::M1), 3);
        assert_eq!(SegmentMode::Alphanumeric.micro_num_char_count_bits(MicroVersion::M2), 3);
        assert_eq!(SegmentMode::Byte.micro_num_char_count_bits(MicroVersion::M3), 4);
        assert_eq!(SegmentMode::Kanji.micro_num_char_count_bits(MicroVersion::M4), 4);
    }
}
