//! Codeword pipeline: packs a bit stream into bytes, splits and protects it
//! as Reed-Solomon blocks, and interleaves the result into the final
//! sequence of bits that gets written into the matrix.

use crate::bit_buffer::BitBuffer;
use crate::capacity::CodeCapacity;
use crate::reed_solomon;

/// Appends a terminator (truncated so as not to exceed the data-bit budget),
/// zero-pads to a byte boundary, then pads with a family-specific filler
/// pattern up to the data capacity in bytes, and packs the result into
/// bytes.
fn build_data_codewords(mut bits: BitBuffer, total_data_bits: usize, pad_with_alternating_bytes: bool) -> Vec<u8> {
    let terminator_bits = total_data_bits.saturating_sub(bits.len()).min(4);
    bits.append_bits(0, terminator_bits as u8);

    let to_byte_boundary = ((8 - bits.len() % 8) % 8) as u8;
    bits.append_bits(0, to_byte_boundary);

    let data_bytes = (total_data_bits + 7) / 8;
    if pad_with_alternating_bytes {
        for &pad in [0xECu32, 0x11].iter().cycle() {
            if bits.len() / 8 >= data_bytes {
                break;
            }
            bits.append_bits(pad, 8);
        }
    } else {
        while bits.len() / 8 < data_bytes {
            bits.append_bits(0, 8);
        }
    }
    bits.to_bytes()
}

struct SequenceDescription {
    short_count: usize,
    normal_count: usize,
    short_data_size: usize,
    normal_data_size: usize,
}

fn describe_sequence(data_bytes: usize, capacity: CodeCapacity) -> SequenceDescription {
    let e = capacity.error_degree;
    let blocks = capacity.total_blocks;
    let total_codewords = data_bytes + e * blocks;
    let block_size = total_codewords / blocks;
    if blocks == 1 {
        SequenceDescription {
            short_count: 1,
            normal_count: 0,
            short_data_size: block_size - e,
            normal_data_size: 0,
        }
    } else {
        let normal_count = total_codewords % blocks;
        let short_count = blocks - normal_count;
        let short_data_size = block_size - e;
        SequenceDescription {
            short_count,
            normal_count,
            short_data_size,
            normal_data_size: short_data_size + 1,
        }
    }
}

/// Splits `data` into blocks per `describe_sequence`, computes each block's
/// Reed-Solomon parity, and interleaves data codewords column-major
/// followed by parity codewords column-major.
fn split_protect_interleave(data: &[u8], capacity: CodeCapacity) -> Vec<u8> {
    let seq = describe_sequence(data.len(), capacity);
    let e = capacity.error_degree;
    let generator = reed_solomon::generator_polynomial(e);

    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(capacity.total_blocks);
    let mut k = 0usize;
    for i in 0..capacity.total_blocks {
        let data_size = if i < seq.short_count { seq.short_data_size } else { seq.normal_data_size };
        let block_data = &data[k..k + data_size];
        k += data_size;
        let parity = reed_solomon::extended_remainder(block_data, &generator).to_bytes();
        let mut block = block_data.to_vec();
        block.extend_from_slice(&parity);
        blocks.push(block);
    }

    let max_data_size = seq.short_data_size.max(seq.normal_data_size);
    let mut result = Vec::with_capacity(data.len() + e * capacity.total_blocks);
    for col in 0..max_data_size {
        for (i, block) in blocks.iter().enumerate() {
            let data_size = if i < seq.short_count { seq.short_data_size } else { seq.normal_data_size };
            if col < data_size {
                result.push(block[col]);
            }
        }
    }
    for col in 0..e {
        for (i, block) in blocks.iter().enumerate() {
            let data_size = if i < seq.short_count { seq.short_data_size } else { seq.normal_data_size };
            result.push(block[data_size + col]);
        }
    }
    result
}

/// Runs the full codeword pipeline and returns the final bit sequence ready
/// for placement: terminator/padding, block split, Reed-Solomon parity, and
/// interleaving.
///
/// When `total_data_bits` is not a multiple of 8 (Micro QR's M1 and M3
/// symbols), the data portion was packed into a whole number of bytes with
/// zero-padding in the final byte; that padding is filler only and is
/// dropped here rather than placed, leaving the parity bytes that follow it
/// untouched.
pub fn build_codeword_bits(bits: BitBuffer, capacity: CodeCapacity, is_micro: bool) -> Vec<bool> {
    let data_codewords = build_data_codewords(bits, capacity.total_data_bits, !is_micro);
    let data_bytes = data_codewords.len();
    let interleaved = split_protect_interleave(&data_codewords, capacity);

    let mut bit_sequence = BitBuffer::with_capacity(interleaved.len() * 8);
    for byte in interleaved {
        bit_sequence.append_bits(u32::from(byte), 8);
    }

    let filler_start = capacity.total_data_bits;
    let filler_end = data_bytes * 8;
    bit_sequence.0.drain(filler_start..filler_end);
    bit_sequence.0
}
