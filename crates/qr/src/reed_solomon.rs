//! Reed-Solomon generator polynomial construction and parity computation,
//! shared by the QR and Micro-QR codeword pipelines.

use crate::gf::{Gf256, Polynomial};

/// Builds the Reed-Solomon generator polynomial of the given degree:
/// the product (x - a^0)(x - a^1)...(x - a^{degree-1}) over GF(2^8), where
/// a = 2 is the field's primitive element.
///
/// The leading x^degree term is always 1 and is not stored; the returned
/// polynomial has `degree` coefficients, highest-degree term first would be
/// the natural reading but coefficients are stored lowest-degree first like
/// every other polynomial in this crate.
pub fn generator_polynomial(degree: usize) -> Polynomial {
    assert!((1..=255).contains(&degree), "degree out of range");
    // `high_to_low[j]` holds the coefficient of x^(degree-1-j) in the product
    // built so far, excluding the always-1 leading x^degree term.
    let mut high_to_low = vec![Gf256::ZERO; degree];
    *high_to_low.last_mut().unwrap() = Gf256::ONE;

    let mut root = Gf256::ONE;
    for _ in 0..degree {
        for j in 0..degree {
            high_to_low[j] = high_to_low[j].mul(root);
            if j + 1 < high_to_low.len() {
                let next = high_to_low[j + 1];
                high_to_low[j] = high_to_low[j].add(next);
            }
        }
        root = root.mul(Gf256::PRIMITIVE);
    }

    let mut low_to_high: Vec<Gf256> = high_to_low.into_iter().rev().collect();
    low_to_high.push(Gf256::ONE);
    Polynomial::from_coefficients(low_to_high)
}

/// Computes the extended remainder R = x^d * D mod G, where d = degree(G).
///
/// `data` is processed highest-coefficient first (i.e. in wire order, most
/// significant byte first); the returned polynomial has `generator.degree()`
/// coefficients (degree = generator.degree() - 1), stored highest-power
/// first rather than this crate's usual low-to-high order — that is the
/// wire order of the parity codewords, and `to_bytes()` on the result can be
/// appended directly to a data block.
pub fn extended_remainder(data: &[u8], generator: &Polynomial) -> Polynomial {
    // The register holds `degree(generator)` coefficients, highest power
    // first; the generator's own leading (monic) term is implicit and never
    // touched, matching a monic-divisor polynomial long division. `Polynomial`
    // itself stores lowest-degree-first, so the non-monic terms are reversed
    // here to line up with the register's high-to-low layout.
    let high_to_low: Vec<Gf256> = generator.coefficients()[..generator.degree()].iter().rev().copied().collect();
    let mut register = vec![Gf256::ZERO; high_to_low.len()];
    for &byte in data {
        let factor = Gf256::from_byte(byte).add(register.remove(0));
        register.push(Gf256::ZERO);
        for (r, &g) in register.iter_mut().zip(&high_to_low) {
            *r = r.add(g.mul(factor));
        }
    }
    Polynomial::from_coefficients(register)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02X}", b)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn degree_22_generator_matches_published_coefficients() {
        let g = generator_polynomial(22);
        let expected = [
            0xF5, 0x91, 0x1A, 0xE6, 0xDA, 0x56, 0xFD, 0x43, 0x7B, 0x1D, 0x89, 0x1C, 0x28, 0x45,
            0xBD, 0x13, 0xF4, 0xB6, 0xB0, 0x83, 0xB3, 0x59, 0x01,
        ];
        assert_eq!(g.to_bytes(), expected, "got {}", hex(&g.to_bytes()));
    }

    #[test]
    fn remainder_degree_is_below_generator_degree() {
        let g = generator_polynomial(10);
        let r = extended_remainder(b"hello world", &g);
        assert!(r.degree() < g.degree());
    }

    /// Horner evaluation of a polynomial given highest-power-first
    /// coefficients, matching the wire order `extended_remainder`/`to_bytes`
    /// produce.
    fn evaluate_high_to_low(coefficients: &[u8], x: Gf256) -> Gf256 {
        coefficients.iter().fold(Gf256::ZERO, |acc, &c| acc.mul(x).add(Gf256::from_byte(c)))
    }

    /// A valid Reed-Solomon codeword (data codewords followed by its own
    /// parity codewords) has alpha^0 .. alpha^(degree-1) as roots. This holds
    /// regardless of which concrete data bytes are fed in, so it catches an
    /// LFSR that computes the remainder of division by the wrong (e.g.
    /// reversed) divisor without needing a hardcoded reference codeword.
    #[test]
    fn codeword_with_its_own_parity_has_the_generator_roots() {
        for degree in [1, 2, 5, 7, 10, 13, 16, 18, 22] {
            let g = generator_polynomial(degree);
            let data = b"Reed-Solomon error correction coding";
            let parity = extended_remainder(data, &g).to_bytes();
            let mut codeword = data.to_vec();
            codeword.extend_from_slice(&parity);

            let mut root = Gf256::ONE;
            for _ in 0..degree {
                assert_eq!(evaluate_high_to_low(&codeword, root), Gf256::ZERO, "degree {degree} failed at root {root:?}");
                root = root.mul(Gf256::PRIMITIVE);
            }
        }
    }
}
