use crate::bit_buffer::BitBuffer;
use crate::segment::Segment;
use crate::segment_mode::SegmentMode;

/// The 45-character alphanumeric alphabet; a character's index in this
/// string is its code value.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

pub fn is_alphanumeric(text: &str) -> bool {
    text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
}

/// Encodes a string in alphanumeric mode: consecutive pairs become 11 bits
/// of `45*first + second`, a trailing single character becomes 6 bits.
///
/// Panics if the string contains a character outside the alphanumeric set.
pub fn encode(text: &str) -> Segment {
    let mut bb = BitBuffer::with_capacity(text.len() * 5 + (text.len() + 1) / 2);
    let mut accum: u32 = 0;
    let mut count: u32 = 0;
    for c in text.chars() {
        let i = ALPHANUMERIC_CHARSET
            .find(c)
            .expect("alphanumeric segment contains an unencodable character");
        accum = accum * 45 + u32::try_from(i).unwrap();
        count += 1;
        if count == 2 {
            bb.append_bits(accum, 11);
            accum = 0;
            count = 0;
        }
    }
    if count > 0 {
        bb.append_bits(accum, 6);
    }
    Segment::new(SegmentMode::Alphanumeric, text.len(), bb.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_encode_as_eleven_bits() {
        let seg = encode("AB");
        assert_eq!(seg.data().len(), 11);
    }

    #[test]
    fn trailing_single_encodes_as_six_bits() {
        let seg = encode("A");
        assert_eq!(seg.data().len(), 6);
    }

    #[test]
    fn classifies_the_standard_alphabet() {
        assert!(is_alphanumeric("ABRACADABRA"));
        assert!(!is_alphanumeric("lowercase"));
    }
}
