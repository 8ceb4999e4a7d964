//! End-to-end scenarios against the public API: known (message, version,
//! mask) triples drawn from the ISO worked examples.

use qr::{
    make_eci_segment, make_micro_qr_symbol, make_qr_symbol, make_qr_symbol_advanced, CodeEcc,
    Designator, MicroEcc, MicroVersion, Segment, Version,
};

#[test]
fn numeric_message_at_level_m_picks_version_one_mask_zero() {
    let symbol = make_qr_symbol("01234567", CodeEcc::Medium).unwrap();
    assert_eq!(symbol.designator, Designator::qr(Version::new(1), CodeEcc::Medium));
    assert_eq!(symbol.size(), 21);
    assert_eq!(symbol.mask, 0);
}

#[test]
fn alphanumeric_message_auto_versions_to_one_mask_seven() {
    let symbol = make_qr_symbol("ABRACADABRA", CodeEcc::Medium).unwrap();
    assert_eq!(symbol.designator, Designator::qr(Version::new(1), CodeEcc::Medium));
    assert_eq!(symbol.mask, 7);
}

#[test]
fn micro_qr_numeric_message_at_m2_low_picks_mask_one() {
    let segs = vec![Segment::make_numeric("01234567")];
    let symbol = qr::make_micro_qr_symbol_advanced(&segs, Some(MicroEcc::Low), MicroVersion::M2, MicroVersion::M2, None).unwrap();
    assert_eq!(symbol.designator, Designator::micro(MicroVersion::M2, Some(MicroEcc::Low)).unwrap());
    assert_eq!(symbol.size(), 13);
    assert_eq!(symbol.mask, 1);
}

#[test]
fn micro_qr_byte_message_auto_versions_to_m3_mask_two() {
    let symbol = make_micro_qr_symbol("Wikipedia", Some(MicroEcc::Low)).unwrap();
    assert_eq!(symbol.designator, Designator::micro(MicroVersion::M3, Some(MicroEcc::Low)).unwrap());
    assert_eq!(symbol.mask, 2);
}

#[test]
fn eci_wrapped_byte_message_picks_version_one_mask_five() {
    let eci = make_eci_segment(9);
    let payload = Segment::make_bytes(&[0xC1, 0xC2, 0xC3, 0xC4, 0xC5]);
    let segs = vec![eci, payload];
    let symbol = make_qr_symbol_advanced(&segs, CodeEcc::Low, Version::new(1), Version::new(1), None, false).unwrap();
    assert_eq!(symbol.designator, Designator::qr(Version::new(1), CodeEcc::Low));
    assert_eq!(symbol.size(), 21);
    assert_eq!(symbol.mask, 5);
}

/// GF(256) multiplication under the field's primitive polynomial, 0x11D
/// (0x1D once the implicit x^8 term is dropped after a carry).
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1D;
        }
        b >>= 1;
    }
    product
}

/// Horner evaluation of a codeword (highest-power byte first) at `x`.
fn evaluate(codeword: &[u8], x: u8) -> u8 {
    codeword.iter().fold(0u8, |acc, &c| gf_mul(acc, x) ^ c)
}

/// Recovers the interleaved codeword bytes a finished symbol's matrix
/// carries, by retracing the standard bottom-right-to-top-left zig-zag
/// column-pair walk (skipping the vertical timing column) and undoing
/// mask 0. This is independent of the crate's own placement/masking code:
/// it only relies on `Module::is_function`/`is_dark`, so it also exercises
/// those modules' correctness rather than assuming them.
fn recover_codewords_mask_zero(matrix: &qr::Matrix) -> Vec<u8> {
    let size = matrix.size();
    let mut bits = Vec::new();

    let mut right = size - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        let upward = (right + 1) & 2 == 0;
        for vert in 0..size {
            let y = if upward { size - 1 - vert } else { vert };
            for x in [right, right - 1] {
                let pos = qr::Position::new(x, y);
                if !matrix.contains(pos) {
                    continue;
                }
                let module = matrix.get(pos);
                if module.is_function() {
                    continue;
                }
                let masked = module.is_dark();
                let original = masked ^ ((x + y) % 2 == 0);
                bits.push(original);
            }
        }
        right -= 2;
    }

    bits.chunks(8).filter(|chunk| chunk.len() == 8).map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8)).collect()
}

/// The worked numeric example from spec.md's S1 scenario: "01234567" at
/// Version 1, error correction level Medium, produces a 21x21 symbol under
/// mask 0. This reconstructs its 26 interleaved codewords straight from the
/// rendered matrix and checks them against the message's known data
/// codewords plus the Reed-Solomon codeword law, rather than only checking
/// designator/size/mask as the other scenarios do.
#[test]
fn numeric_message_matrix_matches_known_codewords_and_ecc_law() {
    let symbol = make_qr_symbol("01234567", CodeEcc::Medium).unwrap();
    assert_eq!(symbol.size(), 21);
    assert_eq!(symbol.mask, 0);

    let codewords = recover_codewords_mask_zero(&symbol.matrix);
    assert_eq!(codewords.len(), 26, "version 1 carries 16 data + 10 ECC codewords");

    // Mode indicator 0001, count indicator 0000001000 (8 chars), digit
    // groups "012"/"345"/"67" as 10/10/7-bit values, a 4-bit terminator and
    // 3 bits of padding to the byte boundary, then the standard 0xEC/0x11
    // pad codewords out to the 16-codeword data capacity for version 1.
    let expected_data = [16, 32, 12, 86, 97, 128, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17];
    assert_eq!(&codewords[..16], &expected_data, "recovered data codewords");

    // The Reed-Solomon codeword law: a valid (data, ECC) pair is divisible
    // by the generator, i.e. alpha^0 .. alpha^9 are roots of the full
    // codeword polynomial (degree-10 ECC for version 1-M).
    let mut root = 1u8;
    for _ in 0..10 {
        assert_eq!(evaluate(&codewords, root), 0, "root {root} is not a zero of the rendered codeword");
        root = gf_mul(root, 2);
    }
}

#[test]
fn function_modules_survive_masking_untouched() {
    let symbol = make_qr_symbol("01234567", CodeEcc::Medium).unwrap();
    let size = symbol.size();
    for y in 0..size {
        for x in 0..size {
            let module = symbol.matrix.get(qr::Position::new(x, y));
            if module.is_function() {
                // Re-deriving is infeasible without re-running the pipeline;
                // the invariant under test is simply that a function module
                // never became a data module during placement/masking.
                assert!(!module.is_data());
            }
        }
    }
}
