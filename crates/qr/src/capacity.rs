//! Code capacity: how many data bits, how many error-correction blocks, and
//! what per-block parity degree a given (version, error-level) pair offers.

use crate::code_ecc::CodeEcc;
use crate::designator::Designator;
use crate::micro_version::MicroVersion;
use crate::version::Version;

/// Summarizes a (version, error-level) pair's storage budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeCapacity {
    pub total_data_bits: usize,
    pub error_degree: usize,
    pub total_blocks: usize,
}

// Number of error correction codewords per block, indexed [level ordinal][version].
// Index 0 (version 0) is unused padding.
static ECC_CODEWORDS_PER_BLOCK: [[i16; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

static NUM_ERROR_CORRECTION_BLOCKS: [[i16; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12, 13,
        14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23,
        25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29,
        34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35,
        37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

/// Data bits available in a QR symbol of the given version, with all
/// function modules (finders, separators, timing, alignment, format,
/// version, dark module) excluded. Includes any trailing remainder bits.
fn qr_num_raw_data_modules(ver: Version) -> usize {
    let v = usize::from(ver.value());
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let numalign = v / 7 + 2;
        result -= (25 * numalign - 10) * numalign - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

pub fn qr_capacity(version: Version, level: CodeEcc) -> CodeCapacity {
    let v = usize::from(version.value());
    let blocks = NUM_ERROR_CORRECTION_BLOCKS[level.ordinal()][v] as usize;
    let ecc_per_block = ECC_CODEWORDS_PER_BLOCK[level.ordinal()][v] as usize;
    let raw_codewords = qr_num_raw_data_modules(version) / 8;
    CodeCapacity {
        total_data_bits: (raw_codewords - ecc_per_block * blocks) * 8,
        error_degree: ecc_per_block,
        total_blocks: blocks,
    }
}

/// Micro QR (version, error-level) capacity table, straight from the
/// standard: every Micro QR symbol is a single block.
fn micro_capacity_table(version: MicroVersion, level: Option<crate::micro_ecc::MicroEcc>) -> CodeCapacity {
    use crate::micro_ecc::MicroEcc::*;
    let (total_data_bits, error_degree) = match (version, level) {
        (MicroVersion::M1, None) => (20, 2),
        (MicroVersion::M2, Some(Low)) => (40, 5),
        (MicroVersion::M2, Some(Medium)) => (32, 6),
        (MicroVersion::M3, Some(Low)) => (84, 6),
        (MicroVersion::M3, Some(Medium)) => (68, 8),
        (MicroVersion::M4, Some(Low)) => (128, 8),
        (MicroVersion::M4, Some(Medium)) => (112, 10),
        (MicroVersion::M4, Some(Quartile)) => (80, 14),
        _ => unreachable!("illegal micro designator escaped construction"),
    };
    CodeCapacity { total_data_bits, error_degree, total_blocks: 1 }
}

pub fn capacity_of(designator: Designator) -> CodeCapacity {
    match designator {
        Designator::Qr { version, level } => qr_capacity(version, level),
        Designator::Micro { version, level } => micro_capacity_table(version, level),
    }
}

/// Every legal QR (version, level) pair, in ascending version order, for a
/// fixed level — used by auto-version search.
pub fn qr_versions_ascending() -> impl Iterator<Item = Version> {
    (Version::MIN.value()..=Version::MAX.value()).map(Version::new)
}

/// Every legal Micro QR designator, in ascending symbol-size order, for a
/// fixed error level request (the caller filters by whether the level is
/// achievable at each version).
pub fn micro_versions_ascending() -> impl Iterator<Item = MicroVersion> {
    MicroVersion::ALL.into_iter()
}
