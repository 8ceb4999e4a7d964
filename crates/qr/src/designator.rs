use crate::code_ecc::CodeEcc;
use crate::error::QrError;
use crate::micro_ecc::MicroEcc;
use crate::micro_version::MicroVersion;
use crate::version::Version;

/// Identifies the symbol family, version, and (where applicable) error
/// correction level of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Designator {
    Qr { version: Version, level: CodeEcc },
    Micro { version: MicroVersion, level: Option<MicroEcc> },
}

impl Designator {
    pub fn qr(version: Version, level: CodeEcc) -> Designator {
        Designator::Qr { version, level }
    }

    /// Builds a Micro QR designator, applying the standard's constraints:
    /// M1 carries no error-level field at all; `Quartile` is legal only at
    /// M4; an absent level defaults to `Low` for every version but M1.
    pub fn micro(version: MicroVersion, level: Option<MicroEcc>) -> Result<Designator, QrError> {
        match (version, level) {
            (MicroVersion::M1, Some(_)) => Err(QrError::VersionAndErrorLevelNotSupported),
            (MicroVersion::M1, None) => Ok(Designator::Micro { version, level: None }),
            (_, Some(MicroEcc::Quartile)) if version != MicroVersion::M4 => {
                Err(QrError::VersionAndErrorLevelNotSupported)
            }
            (_, level) => Ok(Designator::Micro {
                version,
                level: Some(level.unwrap_or(MicroEcc::Low)),
            }),
        }
    }

    /// The 3-bit "symbol number" used by Micro QR format information, or
    /// `None` for a full-size QR designator (which uses `level.format_bits()`
    /// plus a mask id directly instead).
    pub fn micro_symbol_number(self) -> Option<u8> {
        match self {
            Designator::Qr { .. } => None,
            Designator::Micro { version, level } => Some(match (version, level) {
                (MicroVersion::M1, None) => 0,
                (MicroVersion::M2, Some(MicroEcc::Low)) => 1,
                (MicroVersion::M2, Some(MicroEcc::Medium)) => 2,
                (MicroVersion::M3, Some(MicroEcc::Low)) => 3,
                (MicroVersion::M3, Some(MicroEcc::Medium)) => 4,
                (MicroVersion::M4, Some(MicroEcc::Low)) => 5,
                (MicroVersion::M4, Some(MicroEcc::Medium)) => 6,
                (MicroVersion::M4, Some(MicroEcc::Quartile)) => 7,
                _ => unreachable!("illegal micro designator escaped construction"),
            }),
        }
    }

    pub fn is_micro(self) -> bool {
        matches!(self, Designator::Micro { .. })
    }

    /// Width/height of the symbol in modules.
    pub fn size(self) -> i32 {
        match self {
            Designator::Qr { version, .. } => version.size(),
            Designator::Micro { version, .. } => version.size(),
        }
    }
}

impl std::fmt::Display for Designator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Designator::Qr { version, level } => write!(f, "{}-{}", version, level),
            Designator::Micro { version, level: None } => write!(f, "{}", version),
            Designator::Micro { version, level: Some(level) } => write!(f, "{}-{}", version, level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_designator_formatting() {
        let d = Designator::qr(Version::new(7), CodeEcc::Quartile);
        assert_eq!(d.to_string(), "7-Q");
    }

    #[test]
    fn micro_designator_formatting() {
        let d = Designator::micro(MicroVersion::M4, Some(MicroEcc::Quartile)).unwrap();
        assert_eq!(d.to_string(), "M4-Q");
        let d = Designator::micro(MicroVersion::M1, None).unwrap();
        assert_eq!(d.to_string(), "M1");
    }

    #[test]
    fn micro_designator_rejects_illegal_combinations() {
        assert!(Designator::micro(MicroVersion::M1, Some(MicroEcc::Low)).is_err());
        assert!(Designator::micro(MicroVersion::M2, Some(MicroEcc::Quartile)).is_err());
        assert!(Designator::micro(MicroVersion::M4, Some(MicroEcc::Quartile)).is_ok());
    }

    #[test]
    fn micro_designator_defaults_to_low() {
        let d = Designator::micro(MicroVersion::M3, None).unwrap();
        assert_eq!(d.to_string(), "M3-L");
    }

    #[test]
    fn micro_symbol_numbers_match_standard_table() {
        let cases = [
            (MicroVersion::M1, None, 0u8),
            (MicroVersion::M2, Some(MicroEcc::Low), 1),
            (MicroVersion::M2, Some(MicroEcc::Medium), 2),
            (MicroVersion::M3, Some(MicroEcc::Low), 3),
            (MicroVersion::M3, Some(MicroEcc::Medium), 4),
            (MicroVersion::M4, Some(MicroEcc::Low), 5),
            (MicroVersion::M4, Some(MicroEcc::Medium), 6),
            (MicroVersion::M4, Some(MicroEcc::Quartile), 7),
        ];
        for (version, level, expected) in cases {
            let d = Designator::micro(version, level).unwrap();
            assert_eq!(d.micro_symbol_number(), Some(expected));
        }
    }
}
