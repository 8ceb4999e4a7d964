//! Format-information (and, for QR, version-information) encoding and
//! placement: BCH(15,5) protects the error level/symbol-number plus mask id,
//! Golay(18,6) protects the version number.

use crate::bit_buffer::get_bit;
use crate::matrix::{Matrix, Position};
use crate::version::Version;

const FORMAT_GENERATOR: u32 = 0b101_0011_0111;
const QR_FORMAT_MASK: u32 = 0b101_0100_0001_0010;
const MICRO_FORMAT_MASK: u32 = 0b100_0100_0100_0101;
const VERSION_GENERATOR: u32 = 0b1_1111_0010_0101;

/// Encodes a 5-bit payload (error level + mask for QR, symbol number + mask
/// for Micro QR) into its 15-bit BCH(15,5) codeword, masked per family.
fn encode_format(payload: u32, mask: u32) -> u32 {
    debug_assert_eq!(payload >> 5, 0);
    let mut remainder = payload;
    for _ in 0..10 {
        remainder = (remainder << 1) ^ ((remainder >> 9) * 0x537);
    }
    let codeword = payload << 10 | remainder;
    debug_assert_eq!(codeword >> 15, 0);
    codeword ^ mask
}

/// Encodes a 6-bit version number into its 18-bit Golay(18,6) codeword.
fn encode_version(version: u32) -> u32 {
    debug_assert_eq!(version >> 6, 0);
    let mut remainder = version;
    for _ in 0..12 {
        remainder = (remainder << 1) ^ ((remainder >> 11) * 0x1F25);
    }
    let codeword = version << 12 | remainder;
    debug_assert_eq!(codeword >> 18, 0);
    codeword
}

fn set_function(matrix: &mut Matrix, x: i32, y: i32, dark: bool) {
    matrix.get_mut(Position::new(x, y)).set_function(dark);
}

/// QR format information: 2-bit error level + 3-bit mask id.
pub fn draw_qr_format_bits(matrix: &mut Matrix, error_level_bits: u8, mask_id: u8) {
    let payload = u32::from(error_level_bits) << 3 | u32::from(mask_id);
    let bits = encode_format(payload, QR_FORMAT_MASK);
    let size = matrix.size();

    for i in 0..6 {
        set_function(matrix, 8, i, get_bit(bits, i));
    }
    set_function(matrix, 8, 7, get_bit(bits, 6));
    set_function(matrix, 8, 8, get_bit(bits, 7));
    set_function(matrix, 7, 8, get_bit(bits, 8));
    for i in 9..15 {
        set_function(matrix, 14 - i, 8, get_bit(bits, i));
    }

    for i in 0..8 {
        set_function(matrix, size - 1 - i, 8, get_bit(bits, i));
    }
    for i in 8..15 {
        set_function(matrix, 8, size - 15 + i, get_bit(bits, i));
    }
    set_function(matrix, 8, size - 8, true);
}

/// QR version information (versions 7-40 only): two copies of the
/// Golay(18,6)-protected version number.
pub fn draw_qr_version_info(matrix: &mut Matrix, version: Version) {
    if version.value() < 7 {
        return;
    }
    let bits = encode_version(u32::from(version.value()));
    let size = matrix.size();
    for i in 0..18 {
        let bit = get_bit(bits, i);
        let a = size - 11 + i % 3;
        let b = i / 3;
        set_function(matrix, a, b, bit);
        set_function(matrix, b, a, bit);
    }
}

/// The 15 Micro QR format-information positions, in the order bits 0..15 of
/// the masked codeword are assigned to them.
fn micro_format_positions() -> [Position; 15] {
    [
        Position::new(8, 1),
        Position::new(8, 2),
        Position::new(8, 3),
        Position::new(8, 4),
        Position::new(8, 5),
        Position::new(8, 6),
        Position::new(8, 7),
        Position::new(8, 8),
        Position::new(7, 8),
        Position::new(6, 8),
        Position::new(5, 8),
        Position::new(4, 8),
        Position::new(3, 8),
        Position::new(2, 8),
        Position::new(1, 8),
    ]
}

/// Micro QR format information: 3-bit symbol number + 2-bit mask id.
pub fn draw_micro_format_bits(matrix: &mut Matrix, symbol_number: u8, mask_id: u8) {
    let payload = u32::from(symbol_number) << 2 | u32::from(mask_id);
    let mut bits = encode_format(payload, MICRO_FORMAT_MASK);
    for pos in micro_format_positions() {
        matrix.get_mut(pos).set_function(bits & 1 != 0);
        bits >>= 1;
    }
}
