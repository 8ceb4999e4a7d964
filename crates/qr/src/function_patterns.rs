//! Placement of every function pattern (finder, separator, timing,
//! alignment, dark module) shared between QR and Micro QR symbols. Format-
//! and version-information placement live in `format_info`.

use crate::matrix::{Matrix, Position};
use crate::version::Version;

fn set_function(matrix: &mut Matrix, x: i32, y: i32, dark: bool) {
    matrix.get_mut(Position::new(x, y)).set_function(dark);
}

/// Draws a 9x9 finder pattern (including its separator ring) centered at
/// `(x, y)`. Used for the three QR finders; out-of-bounds cells are
/// skipped, which crops the separator at the matrix edge for nothing (QR
/// finders always have room).
fn draw_qr_finder_pattern(matrix: &mut Matrix, x: i32, y: i32) {
    let size = matrix.size();
    for dy in -4..=4 {
        for dx in -4..=4 {
            let xx = x + dx;
            let yy = y + dy;
            if (0..size).contains(&xx) && (0..size).contains(&yy) {
                let dist = dx.abs().max(dy.abs());
                set_function(matrix, xx, yy, dist != 2 && dist != 4);
            }
        }
    }
}

fn draw_qr_alignment_pattern(matrix: &mut Matrix, x: i32, y: i32) {
    for dy in -2..=2 {
        for dx in -2..=2 {
            set_function(matrix, x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
        }
    }
}

/// Ascending list of alignment-pattern center coordinates for a QR version,
/// empty for version 1.
pub fn qr_alignment_pattern_positions(version: Version, size: i32) -> Vec<i32> {
    let ver = i32::from(version.value());
    if ver == 1 {
        return Vec::new();
    }
    let num_align = ver / 7 + 2;
    let step = if ver == 32 { 26 } else { (ver * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2 };
    let mut result: Vec<i32> = (0..num_align - 1).map(|i| size - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}

/// Draws every QR function pattern except format/version information:
/// timing strips, the three finders (with separators), and alignment
/// patterns.
pub fn draw_qr_function_patterns(matrix: &mut Matrix, version: Version) {
    let size = matrix.size();

    for i in 0..size {
        set_function(matrix, 6, i, i % 2 == 0);
        set_function(matrix, i, 6, i % 2 == 0);
    }

    draw_qr_finder_pattern(matrix, 3, 3);
    draw_qr_finder_pattern(matrix, size - 4, 3);
    draw_qr_finder_pattern(matrix, 3, size - 4);

    let positions = qr_alignment_pattern_positions(version, size);
    let num_align = positions.len();
    for (i, &pi) in positions.iter().enumerate() {
        for (j, &pj) in positions.iter().enumerate() {
            let on_finder_corner = (i == 0 && j == 0) || (i == 0 && j == num_align - 1) || (i == num_align - 1 && j == 0);
            if !on_finder_corner {
                draw_qr_alignment_pattern(matrix, pi, pj);
            }
        }
    }

    set_function(matrix, 8, size - 8, true);
}

/// Draws the single Micro QR finder pattern (with separator) at the
/// top-left corner.
fn draw_micro_finder_pattern(matrix: &mut Matrix) {
    for dy in 0..7 {
        for dx in 0..7 {
            let dist = (dx - 3).abs().max((dy - 3).abs());
            set_function(matrix, dx, dy, dist != 2);
        }
    }
}

fn draw_micro_separator(matrix: &mut Matrix) {
    for y in 0..7 {
        set_function(matrix, 7, y, false);
    }
    for x in 0..8 {
        set_function(matrix, x, 7, false);
    }
}

fn draw_micro_timing(matrix: &mut Matrix) {
    let size = matrix.size();
    for x in 8..size {
        set_function(matrix, x, 0, (x - 8) % 2 == 0);
    }
    for y in 8..size {
        set_function(matrix, 0, y, (y - 8) % 2 == 0);
    }
}

/// Draws every Micro QR function pattern except format information: the
/// single finder, its separator, and the two timing strips.
pub fn draw_micro_function_patterns(matrix: &mut Matrix) {
    draw_micro_finder_pattern(matrix);
    draw_micro_separator(matrix);
    draw_micro_timing(matrix);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_one_has_no_alignment_patterns() {
        assert!(qr_alignment_pattern_positions(Version::new(1), 21).is_empty());
    }

    #[test]
    fn version_thirty_two_uses_the_special_step() {
        let positions = qr_alignment_pattern_positions(Version::new(32), 145);
        let mut diffs: Vec<i32> = positions.windows(2).map(|w| w[1] - w[0]).collect();
        diffs.sort_unstable();
        assert_eq!(*diffs.last().unwrap(), 26);
    }

    #[test]
    fn micro_finder_occupies_the_top_left_seven_by_seven_block() {
        let mut m = Matrix::new(11);
        draw_micro_finder_pattern(&mut m);
        assert!(m.get(Position::new(0, 0)).is_function());
        assert!(m.get(Position::new(6, 6)).is_function());
        assert!(!m.get(Position::new(7, 7)).is_function());
    }

    #[test]
    fn micro_timing_starts_right_after_the_separator() {
        let mut m = Matrix::new(11);
        draw_micro_timing(&mut m);
        assert!(m.get(Position::new(8, 0)).is_dark());
        assert!(!m.get(Position::new(9, 0)).is_dark());
    }
}
