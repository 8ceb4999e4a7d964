//! Data-masking and penalty scoring, for both QR and Micro QR lattices.

use crate::finder_penalty::FinderPenalty;
use crate::matrix::{Matrix, Position};

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

/// A QR mask pattern id, 0 to 7.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QrMask(u8);

impl QrMask {
    pub fn new(mask: u8) -> Self {
        assert!(mask <= 7, "QR mask value out of range");
        Self(mask)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    fn invert(self, x: i32, y: i32) -> bool {
        match self.0 {
            0 => (x + y) % 2 == 0,
            1 => y % 2 == 0,
            2 => x % 3 == 0,
            3 => (x + y) % 3 == 0,
            4 => (x / 3 + y / 2) % 2 == 0,
            5 => x * y % 2 + x * y % 3 == 0,
            6 => (x * y % 2 + x * y % 3) % 2 == 0,
            7 => ((x + y) % 2 + x * y % 3) % 2 == 0,
            _ => unreachable!(),
        }
    }
}

/// A Micro QR mask pattern id, 0 to 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MicroMask(u8);

impl MicroMask {
    pub fn new(mask: u8) -> Self {
        assert!(mask <= 3, "Micro QR mask value out of range");
        Self(mask)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    fn invert(self, x: i32, y: i32) -> bool {
        match self.0 {
            0 => y % 2 == 0,
            1 => (y / 2 + x / 3) % 2 == 0,
            2 => (x * y % 2 + x * y % 3) % 2 == 0,
            3 => ((x + y) % 2 + x * y % 3) % 2 == 0,
            _ => unreachable!(),
        }
    }
}

/// XORs `mask`'s lattice onto every data module of `matrix`. Applying the
/// same mask twice undoes it, because XOR is its own inverse.
pub fn apply_qr_mask(matrix: &mut Matrix, mask: QrMask) {
    let size = matrix.size();
    for y in 0..size {
        for x in 0..size {
            let invert = mask.invert(x, y);
            matrix.get_mut(Position::new(x, y)).apply_mask(invert);
        }
    }
}

pub fn apply_micro_mask(matrix: &mut Matrix, mask: MicroMask) {
    let size = matrix.size();
    for y in 0..size {
        for x in 0..size {
            let invert = mask.invert(x, y);
            matrix.get_mut(Position::new(x, y)).apply_mask(invert);
        }
    }
}

/// The QR penalty score: lower is better.
pub fn qr_penalty_score(matrix: &Matrix) -> i32 {
    let size = matrix.size();
    let mut result = 0;

    for y in 0..size {
        let mut run_color = false;
        let mut run_x = 0;
        let mut run_history = FinderPenalty::new(size);
        for x in 0..size {
            let dark = matrix.is_dark(Position::new(x, y));
            if dark == run_color {
                run_x += 1;
                if run_x == 5 {
                    result += PENALTY_N1;
                } else if run_x > 5 {
                    result += 1;
                }
            } else {
                run_history.add_history(run_x);
                if !run_color {
                    result += run_history.count_patterns() * PENALTY_N3;
                }
                run_color = dark;
                run_x = 1;
            }
        }
        result += run_history.terminate_and_count(run_color, run_x) * PENALTY_N3;
    }

    for x in 0..size {
        let mut run_color = false;
        let mut run_y = 0;
        let mut run_history = FinderPenalty::new(size);
        for y in 0..size {
            let dark = matrix.is_dark(Position::new(x, y));
            if dark == run_color {
                run_y += 1;
                if run_y == 5 {
                    result += PENALTY_N1;
                } else if run_y > 5 {
                    result += 1;
                }
            } else {
                run_history.add_history(run_y);
                if !run_color {
                    result += run_history.count_patterns() * PENALTY_N3;
                }
                run_color = dark;
                run_y = 1;
            }
        }
        result += run_history.terminate_and_count(run_color, run_y) * PENALTY_N3;
    }

    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = matrix.is_dark(Position::new(x, y));
            if color == matrix.is_dark(Position::new(x + 1, y))
                && color == matrix.is_dark(Position::new(x, y + 1))
                && color == matrix.is_dark(Position::new(x + 1, y + 1))
            {
                result += PENALTY_N2;
            }
        }
    }

    let dark = matrix.count_dark() as i32;
    let total = size * size;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    result += k * PENALTY_N4;
    result
}

/// Counts dark modules along the bottom row or right column of a Micro QR
/// symbol, excluding the corner shared by both.
fn micro_edge_score(matrix: &Matrix, along_bottom: bool) -> i32 {
    let size = matrix.size();
    (1..size)
        .filter(|&i| {
            let pos = if along_bottom { Position::new(i, size - 1) } else { Position::new(size - 1, i) };
            matrix.is_dark(pos)
        })
        .count() as i32
}

/// Micro QR's "high score": 16 times the smaller of the two edge counts plus
/// the larger. Larger is better; callers select the maximizing mask.
pub fn micro_penalty_score(matrix: &Matrix) -> i32 {
    let sum1 = micro_edge_score(matrix, true);
    let sum2 = micro_edge_score(matrix, false);
    let (a, b) = if sum1 <= sum2 { (sum1, sum2) } else { (sum2, sum1) };
    16 * a + b
}
