use crate::bit_buffer::BitBuffer;
use crate::segment::Segment;
use crate::segment_mode::SegmentMode;

/// Encodes binary data in byte mode: each input byte emits 8 payload bits
/// most-significant-first.
pub fn encode(data: &[u8]) -> Segment {
    let mut bb = BitBuffer::with_capacity(data.len() * 8);
    for &b in data {
        bb.append_bits(u32::from(b), 8);
    }
    Segment::new(SegmentMode::Byte, data.len(), bb.0)
}
