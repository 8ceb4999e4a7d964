//! Top-level Micro QR symbol assembly. Mirrors `symbol`'s pipeline shape but
//! with Micro QR's own version/error-level search, function patterns, and
//! "high score" mask selection (maximized, not minimized).

use crate::bit_buffer::BitBuffer;
use crate::capacity::{self, CodeCapacity};
use crate::designator::Designator;
use crate::error::QrError;
use crate::codewords::build_codeword_bits;
use crate::format_info::draw_micro_format_bits;
use crate::function_patterns::draw_micro_function_patterns;
use crate::mask::{apply_micro_mask, micro_penalty_score, MicroMask};
use crate::matrix::Matrix;
use crate::micro_ecc::MicroEcc;
use crate::micro_version::MicroVersion;
use crate::optimizer;
use crate::placement::place_data;
use crate::segment::Segment;
use crate::symbol::Symbol;

/// Encodes `text` as a Micro QR symbol, searching versions M1..M4 for the
/// smallest one that fits at the requested error level (or any level, if
/// `level` is `None`), boosting to a stronger level when that's free.
pub fn make_micro_qr_symbol(text: &str, level: Option<MicroEcc>) -> Result<Symbol, QrError> {
    let segs = optimizer::optimize(text.as_bytes());
    make_micro_qr_symbol_advanced(&segs, level, MicroVersion::M1, MicroVersion::M4, None)
}

/// Encodes a pre-built segment list, searching `min_version..=max_version`.
/// `level` pins the error level; `None` tries every level legal at each
/// version, preferring the strongest one that fits.
pub fn make_micro_qr_symbol_advanced(
    segs: &[Segment],
    level: Option<MicroEcc>,
    min_version: MicroVersion,
    max_version: MicroVersion,
    mask: Option<MicroMask>,
) -> Result<Symbol, QrError> {
    let mut best: Option<(MicroVersion, Option<MicroEcc>, usize, CodeCapacity)> = None;

    for version in MicroVersion::ALL {
        if version.number() < min_version.number() || version.number() > max_version.number() {
            continue;
        }
        let levels: Vec<Option<MicroEcc>> = match (version, level) {
            (MicroVersion::M1, _) => vec![None],
            (_, Some(requested)) => vec![Some(requested)],
            (MicroVersion::M2, None) => vec![Some(MicroEcc::Medium), Some(MicroEcc::Low)],
            (MicroVersion::M3, None) => vec![Some(MicroEcc::Medium), Some(MicroEcc::Low)],
            (MicroVersion::M4, None) => {
                vec![Some(MicroEcc::Quartile), Some(MicroEcc::Medium), Some(MicroEcc::Low)]
            }
        };

        for candidate_level in levels {
            let designator = match Designator::micro(version, candidate_level) {
                Ok(d) => d,
                Err(_) => continue,
            };
            let cap = capacity::capacity_of(designator);
            if let Some(n) = Segment::total_micro_bits(segs, version) {
                if n <= cap.total_data_bits {
                    best = Some((version, candidate_level, n, cap));
                    break;
                }
            }
        }
        if best.is_some() {
            break;
        }
    }

    let (version, chosen_level, _used_bits, cap) = best.ok_or_else(|| {
        let fallback_cap = capacity::capacity_of(Designator::micro(max_version, Some(MicroEcc::Low)).unwrap_or(Designator::Micro { version: max_version, level: None }));
        QrError::DataTooLarge {
            needed: Segment::total_micro_bits(segs, max_version).unwrap_or(usize::MAX),
            available: fallback_cap.total_data_bits,
        }
    })?;

    let mut bits = BitBuffer::new();
    for seg in segs {
        let mode_bits = seg.mode().micro_mode_bits_width(version);
        if mode_bits > 0 {
            if let Some(value) = seg.mode().micro_mode_value() {
                bits.append_bits(value, mode_bits);
            }
        }
        bits.append_bits(seg.num_chars() as u32, seg.mode().micro_num_char_count_bits(version));
        bits.extend_from_bits(seg.data());
    }

    let designator = Designator::micro(version, chosen_level)?;
    Ok(encode_micro_codewords(designator, bits, cap, mask))
}

fn encode_micro_codewords(designator: Designator, bits: BitBuffer, capacity: CodeCapacity, mask: Option<MicroMask>) -> Symbol {
    let codeword_bits = build_codeword_bits(bits, capacity, true);
    let symbol_number = designator.micro_symbol_number().expect("micro designator always has a symbol number");

    let mut matrix = Matrix::new(designator.size());
    draw_micro_function_patterns(&mut matrix);
    draw_micro_format_bits(&mut matrix, symbol_number, 0);
    place_data(&mut matrix, &codeword_bits);

    let chosen_mask = mask.unwrap_or_else(|| {
        let mut best = MicroMask::new(0);
        let mut best_score = i32::MIN;
        for i in 0..4 {
            let candidate = MicroMask::new(i);
            apply_micro_mask(&mut matrix, candidate);
            let score = micro_penalty_score(&matrix);
            if score > best_score {
                best_score = score;
                best = candidate;
            }
            apply_micro_mask(&mut matrix, candidate);
        }
        best
    });

    apply_micro_mask(&mut matrix, chosen_mask);
    draw_micro_format_bits(&mut matrix, symbol_number, chosen_mask.value());

    Symbol { designator, mask: chosen_mask.value(), matrix }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_message_fits_in_m1() {
        let symbol = make_micro_qr_symbol("12345", None).unwrap();
        assert_eq!(symbol.designator, Designator::Micro { version: MicroVersion::M1, level: None });
        assert_eq!(symbol.size(), 11);
    }

    #[test]
    fn alphanumeric_message_needs_at_least_m2() {
        let symbol = make_micro_qr_symbol("01234567", Some(MicroEcc::Low)).unwrap();
        assert_eq!(symbol.size(), 13);
    }

    #[test]
    fn byte_message_escapes_to_m3_or_m4() {
        let symbol = make_micro_qr_symbol("Wikipedia", Some(MicroEcc::Low)).unwrap();
        assert!(matches!(symbol.designator, Designator::Micro { version: MicroVersion::M3, .. }));
    }

    #[test]
    fn rejects_data_too_large_for_m4() {
        let huge = "A".repeat(200);
        let result = make_micro_qr_symbol(&huge, Some(MicroEcc::Low));
        assert!(result.is_err());
    }
}
