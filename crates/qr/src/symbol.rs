//! Top-level QR symbol assembly: segment concatenation, version/ECL search,
//! the codeword pipeline, function patterns, data placement, and mask
//! selection.

use crate::bit_buffer::BitBuffer;
use crate::capacity::{self, CodeCapacity};
use crate::code_ecc::CodeEcc;
use crate::codewords::build_codeword_bits;
use crate::designator::Designator;
use crate::error::QrError;
use crate::format_info::{draw_qr_format_bits, draw_qr_version_info};
use crate::function_patterns::draw_qr_function_patterns;
use crate::mask::{apply_qr_mask, qr_penalty_score, QrMask};
use crate::matrix::Matrix;
use crate::optimizer;
use crate::placement::place_data;
use crate::segment::Segment;
use crate::version::Version;

/// An assembled symbol: its designator, the mask actually used, and its
/// module grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    pub designator: Designator,
    pub mask: u8,
    pub matrix: Matrix,
}

impl Symbol {
    pub fn size(&self) -> i32 {
        self.matrix.size()
    }
}

/// Encodes `text` at the given error level, picking the smallest version
/// that fits and boosting the error level when that's free.
pub fn make_qr_symbol(text: &str, level: CodeEcc) -> Result<Symbol, QrError> {
    let segs = optimizer::optimize(text.as_bytes());
    make_qr_symbol_advanced(&segs, level, Version::MIN, Version::MAX, None, true)
}

/// Encodes a pre-built segment list with full control over version range,
/// forced mask, and error-level boosting.
pub fn make_qr_symbol_advanced(
    segs: &[Segment],
    mut level: CodeEcc,
    min_version: Version,
    max_version: Version,
    mask: Option<QrMask>,
    boost_ecl: bool,
) -> Result<Symbol, QrError> {
    assert!(min_version <= max_version, "invalid version range");

    let mut version = min_version;
    let data_used_bits = loop {
        let data_capacity_bits = capacity::qr_capacity(version, level).total_data_bits;
        match Segment::total_qr_bits(segs, version) {
            Some(n) if n <= data_capacity_bits => break n,
            dataused => {
                if version >= max_version {
                    return Err(match dataused {
                        None => QrError::DataTooLarge { needed: usize::MAX, available: data_capacity_bits },
                        Some(n) => QrError::DataTooLarge { needed: n, available: data_capacity_bits },
                    });
                }
                version = Version::new(version.value() + 1);
            }
        }
    };

    if boost_ecl {
        for &candidate in &[CodeEcc::Medium, CodeEcc::Quartile, CodeEcc::High] {
            if data_used_bits <= capacity::qr_capacity(version, candidate).total_data_bits {
                level = candidate;
            }
        }
    }

    let mut bits = BitBuffer::new();
    for seg in segs {
        bits.append_bits(seg.mode().qr_mode_bits(), 4);
        bits.append_bits(seg.num_chars() as u32, seg.mode().qr_num_char_count_bits(version));
        bits.extend_from_bits(seg.data());
    }

    let capacity = capacity::qr_capacity(version, level);
    Ok(encode_qr_codewords(version, level, bits, capacity, mask))
}

fn encode_qr_codewords(version: Version, level: CodeEcc, bits: BitBuffer, capacity: CodeCapacity, mask: Option<QrMask>) -> Symbol {
    let codeword_bits = build_codeword_bits(bits, capacity, false);

    let mut matrix = Matrix::new(version.size());
    draw_qr_function_patterns(&mut matrix, version);
    draw_qr_format_bits(&mut matrix, level.format_bits() as u8, 0);
    draw_qr_version_info(&mut matrix, version);
    place_data(&mut matrix, &codeword_bits);

    let chosen_mask = mask.unwrap_or_else(|| {
        let mut best = QrMask::new(0);
        let mut best_penalty = i32::MAX;
        for i in 0..8 {
            let candidate = QrMask::new(i);
            apply_qr_mask(&mut matrix, candidate);
            draw_qr_format_bits(&mut matrix, level.format_bits() as u8, candidate.value());
            let penalty = qr_penalty_score(&matrix);
            if penalty < best_penalty {
                best_penalty = penalty;
                best = candidate;
            }
            apply_qr_mask(&mut matrix, candidate);
        }
        best
    });

    apply_qr_mask(&mut matrix, chosen_mask);
    draw_qr_format_bits(&mut matrix, level.format_bits() as u8, chosen_mask.value());

    Symbol { designator: Designator::qr(version, level), mask: chosen_mask.value(), matrix }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_numeric_text_at_version_one_mask_zero() {
        let symbol = make_qr_symbol("01234567", CodeEcc::Medium).unwrap();
        assert_eq!(symbol.size(), 21);
    }

    #[test]
    fn auto_boosts_error_level_when_free() {
        let symbol = make_qr_symbol("ABRACADABRA", CodeEcc::Medium).unwrap();
        assert!(matches!(symbol.designator, Designator::Qr { .. }));
    }

    #[test]
    fn rejects_data_too_large_for_any_version() {
        let huge = "A".repeat(10_000);
        let result = make_qr_symbol(&huge, CodeEcc::High);
        assert!(result.is_err());
    }
}
