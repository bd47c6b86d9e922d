/// Dense directed edge-cost matrix with a fixed capacity.
///
/// Cells hold `Option<u64>` where `None` means "no edge". This replaces the
/// reserved "infinity" integer of textbook formulations, so edge costs can
/// never be accidentally summed with a sentinel.
#[derive(Debug, Clone)]
pub(crate) struct CostMatrix {
    cells: Vec<Option<u64>>,
    capacity: usize,
}

impl CostMatrix {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: vec![None; capacity * capacity],
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.capacity && col < self.capacity);
        row * self.capacity + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        self.cells[self.index(row, col)]
    }

    /// Stores a cost and returns the previous value of the cell.
    pub fn set(&mut self, row: usize, col: usize, cost: u64) -> Option<u64> {
        let index = self.index(row, col);
        self.cells[index].replace(cost)
    }

    /// Clears a cell and returns the cost it held.
    pub fn take(&mut self, row: usize, col: usize) -> Option<u64> {
        let index = self.index(row, col);
        self.cells[index].take()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
