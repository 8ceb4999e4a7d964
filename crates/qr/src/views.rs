//! Composable traversal views over `Position`s. Each view is a plain
//! iterator adaptor; they combine by ordinary iterator composition (`map`,
//! `flat_map`, chaining) rather than a custom pipeline operator.

use crate::matrix::{Dimension, Position};

/// Row-major positions over a `w`x`h` rectangle anchored at `top`.
pub fn horizontal(top: Position, dim: Dimension) -> impl Iterator<Item = Position> {
    (0..dim.height).flat_map(move |dy| (0..dim.width).map(move |dx| Position::new(top.x + dx, top.y + dy)))
}

/// Column-major positions over a `w`x`h` rectangle anchored at `top`.
pub fn vertical(top: Position, dim: Dimension) -> impl Iterator<Item = Position> {
    (0..dim.width).flat_map(move |dx| (0..dim.height).map(move |dy| Position::new(top.x + dx, top.y + dy)))
}

/// Positions over the Cartesian product of two ranges, x varying fastest.
pub fn cartesian_product(xs: std::ops::Range<i32>, ys: std::ops::Range<i32>) -> impl Iterator<Item = Position> + Clone {
    ys.flat_map(move |y| xs.clone().map(move |x| Position::new(x, y)))
}

/// The standard QR data-placement scan over an (even-width, h) region:
/// start at the bottom-right, step two columns at a time leftward, and
/// walk each two-column strip upward then downward alternately.
pub fn zigzag(dim: Dimension) -> impl Iterator<Item = Position> {
    let height = dim.height;
    let mut strips = Vec::new();
    let mut right = dim.width - 1;
    while right >= 1 {
        strips.push(right);
        right -= 2;
    }
    strips.into_iter().flat_map(move |right| {
        let upward = (right + 1) & 2 == 0;
        (0..height).flat_map(move |vert| {
            let y = if upward { height - 1 - vert } else { vert };
            (0..2).map(move |j| Position::new(right - j, y))
        })
    })
}

/// Remaps an inner view's x coordinates, incrementing x by one for every
/// element of `skip_columns` that is `<= x`, so that those column indices
/// are never produced. Used to route the zig-zag scan around the vertical
/// timing strip.
pub fn skip_columns(
    inner: impl Iterator<Item = Position>,
    skip_columns: Vec<i32>,
) -> impl Iterator<Item = Position> {
    inner.map(move |pos| {
        let shift = skip_columns.iter().filter(|&&c| c <= pos.x).count() as i32;
        Position::new(pos.x + shift, pos.y)
    })
}
