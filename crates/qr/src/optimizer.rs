//! Segment-mode optimizer: partitions a byte message into segments whose
//! total encoded bit length is smaller than always using a single mode.
//!
//! This is a single linear scan driven by a small state machine (phase 1),
//! followed by a merge of adjacent same-mode runs (phase 2). The scan
//! operates over bytes rather than `char`s because kanji mode is defined in
//! terms of raw Shift-JIS byte pairs, and the numeric/alphanumeric alphabets
//! are pure ASCII subsets of that same byte space.

use std::ops::Range;

use crate::segment::{is_alphanumeric, is_kanji_pair, is_numeric, is_potential_kanji_lead, Segment};
use crate::segment_mode::SegmentMode;

/// Mode-switch runs shorter than this are absorbed into a byte (or less
/// specific) run rather than paying for a new mode/count header.
const CONSECUTIVE_RUN_THRESHOLD: usize = 10;

fn is_numeric_byte(b: u8) -> bool {
    b.is_ascii() && is_numeric(std::str::from_utf8(&[b]).unwrap())
}

fn is_alphanumeric_byte(b: u8) -> bool {
    b.is_ascii() && is_alphanumeric(std::str::from_utf8(&[b]).unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
}

impl From<Mode> for SegmentMode {
    fn from(m: Mode) -> SegmentMode {
        match m {
            Mode::Numeric => SegmentMode::Numeric,
            Mode::Alphanumeric => SegmentMode::Alphanumeric,
            Mode::Byte => SegmentMode::Byte,
            Mode::Kanji => SegmentMode::Kanji,
        }
    }
}

fn best_undefined_mode(b: u8) -> Mode {
    if is_numeric_byte(b) {
        Mode::Numeric
    } else if is_alphanumeric_byte(b) {
        Mode::Alphanumeric
    } else if is_potential_kanji_lead(b) {
        Mode::Kanji
    } else {
        Mode::Byte
    }
}

/// Partitions `message` into `(byte range, mode)` runs. Phase 1 of the
/// optimizer: emitted runs may still be adjacent and same-moded; phase 2
/// (`merge_runs`) folds those together.
fn scan(message: &[u8]) -> Vec<(Range<usize>, Mode)> {
    let mut runs = Vec::new();
    let mut mode: Option<Mode> = None;
    let mut run_start = 0usize;
    let mut i = 0usize;

    while i < message.len() {
        let b = message[i];
        match mode {
            None => {
                mode = Some(best_undefined_mode(b));
                run_start = i;
                i += 1;
            }
            Some(Mode::Numeric) => {
                if is_numeric_byte(b) {
                    i += 1;
                } else if i - run_start < CONSECUTIVE_RUN_THRESHOLD {
                    mode = Some(if is_alphanumeric_byte(b) { Mode::Alphanumeric } else { Mode::Byte });
                } else {
                    runs.push((run_start..i, Mode::Numeric));
                    mode = None;
                }
            }
            Some(Mode::Alphanumeric) => {
                if is_numeric_byte(b) || is_alphanumeric_byte(b) {
                    i += 1;
                } else if i - run_start < CONSECUTIVE_RUN_THRESHOLD {
                    mode = Some(Mode::Byte);
                } else {
                    runs.push((run_start..i, Mode::Alphanumeric));
                    mode = None;
                }
            }
            Some(Mode::Byte) => {
                let run_len = i - run_start;
                let more_specific =
                    is_numeric_byte(b) || is_alphanumeric_byte(b) || is_potential_kanji_lead(b);
                if run_len >= CONSECUTIVE_RUN_THRESHOLD && more_specific {
                    runs.push((run_start..i, Mode::Byte));
                    mode = None;
                } else {
                    i += 1;
                }
            }
            Some(Mode::Kanji) => {
                let offset = i - run_start;
                if offset % 2 == 0 {
                    if is_potential_kanji_lead(b) {
                        i += 1;
                    } else {
                        let chars_so_far = offset / 2;
                        if chars_so_far < CONSECUTIVE_RUN_THRESHOLD {
                            mode = Some(best_undefined_mode(b));
                            run_start = i;
                        } else {
                            runs.push((run_start..i, Mode::Kanji));
                            mode = None;
                        }
                    }
                } else if is_kanji_pair(message[i - 1], b) {
                    i += 1;
                } else {
                    // The tentative lead byte at i-1 never formed a valid
                    // pair; it cannot be numeric or alphanumeric either (the
                    // kanji lead ranges and those alphabets are disjoint), so
                    // it becomes the start of a byte run instead.
                    if i - 1 > run_start {
                        runs.push((run_start..i - 1, Mode::Kanji));
                    }
                    run_start = i - 1;
                    mode = Some(Mode::Byte);
                }
            }
        }
    }
    if let Some(m) = mode {
        runs.push((run_start..message.len(), m));
    }
    runs
}

fn merge_runs(runs: Vec<(Range<usize>, Mode)>) -> Vec<(Range<usize>, Mode)> {
    let mut merged: Vec<(Range<usize>, Mode)> = Vec::with_capacity(runs.len());
    for (range, mode) in runs {
        match merged.last_mut() {
            Some((last_range, last_mode)) if *last_mode == mode && last_range.end == range.start => {
                last_range.end = range.end;
            }
            _ => merged.push((range, mode)),
        }
    }
    merged
}

/// Partitions `message` into segments minimizing total encoded bits, using
/// the two-phase state-machine optimizer described for this crate.
pub fn optimize(message: &[u8]) -> Vec<Segment> {
    if message.is_empty() {
        return Vec::new();
    }
    merge_runs(scan(message))
        .into_iter()
        .map(|(range, mode)| build_segment(message, range, mode))
        .collect()
}

fn build_segment(message: &[u8], range: Range<usize>, mode: Mode) -> Segment {
    let slice = &message[range];
    match mode {
        Mode::Numeric | Mode::Alphanumeric => {
            let text = std::str::from_utf8(slice).expect("numeric/alphanumeric runs are pure ASCII");
            if mode == Mode::Numeric {
                Segment::make_numeric(text)
            } else {
                Segment::make_alphanumeric(text)
            }
        }
        Mode::Byte => Segment::make_bytes(slice),
        Mode::Kanji => {
            let pairs: Vec<(u8, u8)> = slice.chunks_exact(2).map(|p| (p[0], p[1])).collect();
            Segment::make_kanji(&pairs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_digits_become_one_numeric_segment() {
        let segs = optimize(b"0123456789");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].mode(), SegmentMode::Numeric);
    }

    #[test]
    fn short_alphabetic_run_inside_long_numeric_run_switches_to_alphanumeric() {
        // "A" breaks a numeric run that hasn't hit the threshold yet.
        let segs = optimize(b"123A456");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].mode(), SegmentMode::Alphanumeric);
    }

    #[test]
    fn long_numeric_run_before_a_byte_char_publishes_separately() {
        let mut msg = b"1234567890".to_vec(); // 10 digits = threshold
        msg.push(b'!');
        msg.extend_from_slice(b"more text!!");
        let segs = optimize(&msg);
        assert_eq!(segs[0].mode(), SegmentMode::Numeric);
        assert_eq!(segs[0].num_chars(), 10);
    }

    #[test]
    fn mixed_message_produces_multiple_segments() {
        let segs = optimize(b"HELLO12345\x01\x02WORLD");
        assert!(segs.len() >= 2);
    }

    #[test]
    fn empty_message_has_no_segments() {
        assert!(optimize(b"").is_empty());
    }
}
