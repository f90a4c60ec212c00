/// Square matrix of edge weights with both `[u][v]` and `[v][u]` written.
///
/// The matrix does not know which cells hold an edge. Cells without an edge
/// hold `0.0` and must not be read without consulting the adjacency matrix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightMatrix {
    data: Vec<f64>,
    order: usize,
}

impl WeightMatrix {
    /// Returns `None` if the matrix for this order does not fit into `usize`
    /// or cannot be allocated.
    pub fn with_order(order: usize) -> Option<Self> {
        let len = order.checked_mul(order)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).ok()?;
        data.resize(len, 0.0);

        Some(Self { data, order })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn get(&self, u: usize, v: usize) -> f64 {
        self.data[u * self.order + v]
    }

    pub fn set(&mut self, u: usize, v: usize, weight: f64) {
        self.data[u * self.order + v] = weight;
        self.data[v * self.order + u] = weight;
    }

    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_mirrors() {
        let mut weights = WeightMatrix::with_order(3).unwrap();
        weights.set(2, 0, -1.5);

        assert_eq!(weights.get(2, 0), -1.5);
        assert_eq!(weights.get(0, 2), -1.5);
        assert_eq!(weights.get(1, 2), 0.0);
    }

    #[test]
    fn clear() {
        let mut weights = WeightMatrix::with_order(2).unwrap();
        weights.set(0, 1, 3.0);
        weights.clear();

        assert_eq!(weights.get(0, 1), 0.0);
        assert_eq!(weights.get(1, 0), 0.0);
    }

    #[test]
    fn overflow() {
        assert!(WeightMatrix::with_order(usize::MAX).is_none());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn allocation_too_large() {
        // The cell count fits into `usize`, the byte size does not.
        assert!(WeightMatrix::with_order(1 << 31).is_none());
    }
}
