//! Data placement: walks the zig-zag view (skipping any column made
//! entirely of function modules) and writes codeword bits into the free
//! cells it visits.

use crate::matrix::{Dimension, Matrix, Position};
use crate::views;

/// Columns that are function modules in every row, e.g. QR's vertical
/// timing strip at column 6. Computed dynamically rather than hardcoded so
/// it applies equally to symbols with no such column (Micro QR).
pub fn occupied_columns(matrix: &Matrix) -> Vec<i32> {
    let size = matrix.size();
    (0..size)
        .filter(|&x| (0..size).all(|y| matrix.get(Position::new(x, y)).is_function()))
        .collect()
}

/// Writes `bits` into the free cells of `matrix`'s zig-zag scan, padding
/// any remaining free cells with light data modules once `bits` runs out.
pub fn place_data(matrix: &mut Matrix, bits: &[bool]) {
    let size = matrix.size();
    let columns = occupied_columns(matrix);
    let reduced_width = size - columns.len() as i32;
    let scan = views::skip_columns(views::zigzag(Dimension { width: reduced_width, height: size }), columns);

    let mut i = 0usize;
    matrix.visit_mut(scan, |cell, _pos| {
        if cell.is_free() {
            let bit = bits.get(i).copied().unwrap_or(false);
            cell.set_data(bit);
            i += 1;
        }
    });
}
