//! Index arithmetic of a packed lower-triangle matrix.
//!
//! A square matrix of `order` rows whose cells `(row, col)` and `(col, row)`
//! denote the same thing only needs the lower triangle (`row >= col`). The
//! triangle is laid out row by row, so row `r` starts at `r (r + 1) / 2`.

/// Returns the coordinates in the lower triangle, i.e., the larger of the two
/// as the row and the smaller as the column.
#[inline]
pub fn canonical(u: usize, v: usize) -> (usize, usize) {
    if u >= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Returns the number of cells in the lower triangle (diagonal included) of a
/// matrix of given order, or `None` if it does not fit into `usize`.
pub fn linear_len(order: usize) -> Option<usize> {
    order
        .checked_add(1)
        .and_then(|next| next.checked_mul(order))
        .map(|len| len / 2)
}

/// Returns the linear index of the cell. The coordinates can be given in any
/// order.
#[inline]
pub fn index(row: usize, col: usize) -> usize {
    let (row, col) = canonical(row, col);
    // The rows are 1 + 2 + 3 + ... + n = n (n + 1) / 2.
    row * (row + 1) / 2 + col
}

/// Inverse of [`index`]. The returned coordinates are canonical.
pub fn coords(index: usize) -> (usize, usize) {
    // index = row * (row + 1) / 2 + col => 2 * (index - col) = row^2 + row
    //
    // Quadratic equation for row. We don't know col so we use just index =>
    // discriminant is generally not an integer, we need to round down. The
    // difference between index and start of the row is the column.
    let d = (1. + 8. * index as f64).sqrt().floor() as usize;
    let mut row = d.saturating_sub(1) / 2;

    // Float rounding can be off by one for very large indices.
    while row * (row + 1) / 2 > index {
        row -= 1;
    }
    while (row + 1) * (row + 2) / 2 <= index {
        row += 1;
    }

    let col = index - row * (row + 1) / 2;
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_symmetric() {
        for u in 0..16 {
            for v in 0..16 {
                assert_eq!(index(u, v), index(v, u));
            }
        }
    }

    #[test]
    fn index_is_dense() {
        let order = 12;
        let mut indices = (0..order)
            .flat_map(|row| (0..=row).map(move |col| index(row, col)))
            .collect::<Vec<_>>();

        indices.sort_unstable();

        assert_eq!(indices, (0..linear_len(order).unwrap()).collect::<Vec<_>>());
    }

    #[test]
    fn coords_inverts_index() {
        for row in 0..64 {
            for col in 0..=row {
                assert_eq!(coords(index(row, col)), (row, col));
            }
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn coords_large_index() {
        let row = 3_000_000_000;
        let col = 1_234_567;
        assert_eq!(coords(index(row, col)), (row, col));
    }

    #[test]
    fn linear_len_overflow() {
        assert_eq!(linear_len(0), Some(0));
        assert_eq!(linear_len(1), Some(1));
        assert_eq!(linear_len(4), Some(10));
        assert_eq!(linear_len(usize::MAX), None);
    }
}
