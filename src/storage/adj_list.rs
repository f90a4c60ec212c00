/// Per-vertex neighbor lists in insertion order.
///
/// The lists do not deduplicate on their own. Callers push a pair only after
/// checking that the edge is new.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjList {
    neighbors: Vec<Vec<usize>>,
}

impl AdjList {
    pub fn with_order(order: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); order],
        }
    }

    pub fn order(&self) -> usize {
        self.neighbors.len()
    }

    /// Appends `v` to the list of `u` and `u` to the list of `v`.
    pub fn push(&mut self, u: usize, v: usize) {
        self.neighbors[u].push(v);
        self.neighbors[v].push(u);
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    pub fn clear(&mut self) {
        for list in self.neighbors.iter_mut() {
            list.clear();
        }
    }
}
