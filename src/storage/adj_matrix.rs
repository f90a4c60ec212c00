use bitvec::prelude::*;

use crate::core::matrix::{coords, index, linear_len};

/// Edge presence of an undirected graph stored in a packed lower triangle.
///
/// Every edge `{u, v}` occupies exactly one bit, the one at the canonical
/// coordinates `(max(u, v), min(u, v))`. The diagonal is part of the layout
/// but never set, because the graph does not allow self-loops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjMatrix {
    bits: BitVec,
    order: usize,
}

impl AdjMatrix {
    /// Returns `None` if the triangle for this order does not fit into
    /// `usize` or cannot be allocated.
    pub fn with_order(order: usize) -> Option<Self> {
        let len = linear_len(order)?;

        if len > BitSlice::<usize, Lsb0>::MAX_BITS {
            return None;
        }

        let words = len.div_ceil(usize::BITS as usize);
        let mut data = Vec::<usize>::new();
        data.try_reserve_exact(words).ok()?;
        data.resize(words, 0);

        let mut bits = BitVec::from_vec(data);
        bits.truncate(len);

        Some(Self { bits, order })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.bits[index(u, v)]
    }

    /// Sets the cell and returns whether it was previously unset.
    pub fn insert(&mut self, u: usize, v: usize) -> bool {
        let i = index(u, v);
        let prev = self.bits.replace(i, true);
        !prev
    }

    /// Number of set cells, i.e., edges.
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Canonical coordinates of all set cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits.iter_ones().map(coords)
    }

    /// Degree of a vertex computed from the matrix alone. This is _O(V)_ and
    /// used only for cross-checking the cached degrees.
    pub fn degree(&self, v: usize) -> usize {
        (0..self.order)
            .filter(|&other| other != v && self.contains(v, other))
            .count()
    }

    pub fn clear(&mut self) {
        // Keep the allocation, the order does not change.
        self.bits.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_symmetric() {
        let mut matrix = AdjMatrix::with_order(4).unwrap();

        assert!(matrix.insert(1, 3));
        assert!(matrix.contains(1, 3));
        assert!(matrix.contains(3, 1));
        assert!(!matrix.insert(3, 1));
        assert_eq!(matrix.count(), 1);
    }

    #[test]
    fn iter_canonical() {
        let mut matrix = AdjMatrix::with_order(5).unwrap();

        matrix.insert(0, 4);
        matrix.insert(2, 1);
        matrix.insert(3, 0);

        assert_eq!(matrix.iter().collect::<Vec<_>>(), vec![(2, 1), (3, 0), (4, 0)]);
    }

    #[test]
    fn degree_from_matrix() {
        let mut matrix = AdjMatrix::with_order(4).unwrap();

        matrix.insert(0, 1);
        matrix.insert(2, 1);

        assert_eq!(matrix.degree(0), 1);
        assert_eq!(matrix.degree(1), 2);
        assert_eq!(matrix.degree(3), 0);
    }

    #[test]
    fn clear_keeps_order() {
        let mut matrix = AdjMatrix::with_order(3).unwrap();
        matrix.insert(0, 2);
        matrix.clear();

        assert_eq!(matrix.order(), 3);
        assert_eq!(matrix.count(), 0);
        assert!(!matrix.contains(2, 0));
    }

    #[test]
    fn empty() {
        let matrix = AdjMatrix::with_order(0).unwrap();
        assert_eq!(matrix.count(), 0);
        assert_eq!(matrix.iter().count(), 0);
    }

    #[test]
    fn overflow() {
        assert!(AdjMatrix::with_order(usize::MAX).is_none());
    }

    #[test]
    fn len_is_triangle() {
        for order in [1, 7, 8, 64, 65, 100] {
            let matrix = AdjMatrix::with_order(order).unwrap();
            assert_eq!(matrix.bits.len(), order * (order + 1) / 2);
            assert_eq!(matrix.count(), 0);
        }
    }
}
