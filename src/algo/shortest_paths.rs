//! Compute [all-pairs shortest paths] and reconstruct optimal routes.
//!
//! Every node of the store is taken as a source for one pass of Dijkstra's
//! algorithm. Because the store is dense and its capacity is small and fixed,
//! each pass selects the next node by a linear minimum scan instead of a
//! priority queue; the O(n²) per-source work (O(n³) total) is acceptable at
//! this scale and simpler than a heap.
//!
//! [all-pairs shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#All-pairs_shortest_paths
//!
//! # Examples
//!
//! ```
//! use trasa::{algo::ShortestPaths, store::GraphStore};
//!
//! let mut store = GraphStore::with_capacity(8);
//! store
//!     .build("4 A B C D 1 2 1 2 3 2 1 3 10 3 4 1 0 0 0".split_whitespace())
//!     .unwrap();
//!
//! let paths = ShortestPaths::compute(&store);
//!
//! let a = store.node("A").unwrap();
//! let d = store.node("D").unwrap();
//!
//! let route = paths
//!     .path(a, d)
//!     .unwrap()
//!     .into_iter()
//!     .map(|id| store.label(id).unwrap())
//!     .collect::<Vec<_>>()
//!     .join(" - ");
//!
//! assert_eq!(paths.dist(a, d), Some(4));
//! assert_eq!(route, "A - B - C - D");
//! ```

mod dijkstra;

use fixedbitset::FixedBitSet;

use crate::{
    core::{error::NoPathError, id::NodeId},
    store::GraphStore,
};

/// Shortest distances and predecessors for every (source, destination) pair
/// of a [`GraphStore`].
///
/// The table is a snapshot: it is computed in full by [`compute`](Self::compute)
/// and does not observe later mutations of the store. Recompute after editing
/// edges.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    node_count: usize,
    dist: Vec<Option<u64>>,
    pred: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    /// Runs a full Dijkstra pass from every node of the store and returns the
    /// resulting distance/predecessor table.
    pub fn compute(store: &GraphStore) -> Self {
        let n = store.node_count();
        let mut table = Self {
            node_count: n,
            dist: vec![None; n * n],
            pred: vec![None; n * n],
        };

        if n == 0 {
            return table;
        }

        let mut visited = FixedBitSet::with_capacity(n);

        for (source, (dist, pred)) in table
            .dist
            .chunks_exact_mut(n)
            .zip(table.pred.chunks_exact_mut(n))
            .enumerate()
        {
            dijkstra::run(store, source, dist, pred, &mut visited);
        }

        table
    }

    /// Number of nodes the table was computed over.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the shortest distance between two nodes, or `None` if the
    /// destination is unreachable from the source (or either node does not
    /// exist in the table).
    ///
    /// The distance of a node to itself is 0. A reachable destination always
    /// reports `Some`, even when the path has total cost 0.
    pub fn dist(&self, source: NodeId, dest: NodeId) -> Option<u64> {
        self.entry(source, dest).and_then(|index| self.dist[index])
    }

    /// Returns an iterator over the predecessors of `dest` on its shortest
    /// path from `source`, walking backward from `dest` (exclusive) to
    /// `source` (inclusive).
    ///
    /// The iterator is empty when `dest` is the source itself or when no path
    /// exists.
    pub fn reconstruct(&self, source: NodeId, dest: NodeId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: dest.index(),
            pred: self.pred_row(source),
        }
    }

    /// Returns the ordered node sequence of a shortest path from `source` to
    /// `dest`, both endpoints included.
    ///
    /// Fails with [`NoPathError`] when `dest` is unreachable from `source`;
    /// check [`dist`](Self::dist) first to avoid the error.
    pub fn path(&self, source: NodeId, dest: NodeId) -> Result<Vec<NodeId>, NoPathError> {
        if self.dist(source, dest).is_none() {
            return Err(NoPathError {
                from: source,
                to: dest,
            });
        }

        let mut nodes = std::iter::once(dest)
            .chain(self.reconstruct(source, dest))
            .collect::<Vec<_>>();
        nodes.reverse();
        Ok(nodes)
    }

    fn entry(&self, source: NodeId, dest: NodeId) -> Option<usize> {
        if source.index() < self.node_count && dest.index() < self.node_count {
            Some(source.index() * self.node_count + dest.index())
        } else {
            None
        }
    }

    fn pred_row(&self, source: NodeId) -> &[Option<NodeId>] {
        if source.index() < self.node_count {
            let start = source.index() * self.node_count;
            &self.pred[start..start + self.node_count]
        } else {
            &[]
        }
    }
}

/// Iterator over the nodes on the path from a destination back to the source.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: usize,
    pred: &'a [Option<NodeId>],
}

impl Iterator for PathReconstruction<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let prev = (*self.pred.get(self.curr)?)?;
        self.curr = prev.index();
        Some(prev)
    }
}
