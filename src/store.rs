//! Bounded-capacity storage for a labeled, directed, weighted graph.
//!
//! [`GraphStore`] owns the node labels and the dense edge-cost matrix that the
//! [shortest path engine](crate::algo::shortest_paths) consumes. The capacity
//! is fixed at construction and the memory footprint never grows afterwards.
//!
//! # Examples
//!
//! ```
//! use trasa::store::GraphStore;
//!
//! let mut store = GraphStore::with_capacity(10);
//! store
//!     .build("3 Alpha Beta Gamma 1 2 5 2 3 7 0 0 0".split_whitespace())
//!     .unwrap();
//!
//! assert_eq!(store.node_count(), 3);
//! assert_eq!(store.label(2.into()), Some("Beta"));
//! assert_eq!(store.cost(1.into(), 2.into()), Some(5));
//! ```

mod matrix;

use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::core::{
    error::{BuildError, BuildErrorKind, CapacityError, OutOfRangeError},
    id::NodeId,
};

use matrix::CostMatrix;

/// A directed, weighted graph with labeled nodes and a fixed maximum capacity.
///
/// At most one cost is stored per ordered node pair and costs are unsigned,
/// so negative weights and multi-edges are unrepresentable. A missing edge is
/// reported as `None`, distinct from an edge of cost 0.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct GraphStore {
    labels: Vec<String>,
    by_label: FxHashMap<String, NodeId>,
    costs: CostMatrix,
}

impl GraphStore {
    /// Creates an empty store that can hold up to `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            by_label: FxHashMap::default(),
            costs: CostMatrix::with_capacity(capacity),
        }
    }

    /// Maximum number of nodes the store can hold.
    pub fn capacity(&self) -> usize {
        self.costs.capacity()
    }

    /// Number of nodes currently in the store.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges currently in the store.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.by_label.clear();
        self.costs.clear();
    }

    /// Adds a node with the given label and returns its ID.
    ///
    /// Fails when the store is full. Labels are not required to be unique;
    /// [`node`](Self::node) resolves a duplicated label to the first node
    /// that used it.
    pub fn add_node(&mut self, label: impl Into<String>) -> Result<NodeId, CapacityError> {
        if self.labels.len() == self.capacity() {
            return Err(CapacityError {
                capacity: self.capacity(),
            });
        }

        let label = label.into();
        let id = NodeId::from_index(self.labels.len());
        self.by_label.entry(label.clone()).or_insert(id);
        self.labels.push(label);
        Ok(id)
    }

    /// Returns the label of a node, or `None` if the node does not exist.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id.index()).map(String::as_str)
    }

    /// Returns the node that carries the given label, or `None` if no node
    /// does. If multiple nodes share the label, the first one wins.
    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    /// Returns the cost of the directed edge between two nodes, or `None` if
    /// there is no such edge.
    pub fn cost(&self, start: NodeId, end: NodeId) -> Option<u64> {
        if !self.contains(start) || !self.contains(end) {
            return None;
        }

        self.costs.get(start.index(), end.index())
    }

    /// Iterates over all node IDs in the store.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::from_index)
    }

    /// Iterates over all edges as `(start, end, cost)` triples, in row-major
    /// order of the cost matrix.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, u64)> + '_ {
        let n = self.node_count();
        (0..n).flat_map(move |row| {
            (0..n).filter_map(move |col| {
                self.costs
                    .get(row, col)
                    .map(|cost| (NodeId::from_index(row), NodeId::from_index(col), cost))
            })
        })
    }

    /// Sets the cost of the directed edge `start -> end`, overwriting any
    /// previous cost. Returns whether the stored cost changed; re-inserting
    /// an identical edge returns `false`.
    pub fn insert_edge(
        &mut self,
        start: NodeId,
        end: NodeId,
        cost: u64,
    ) -> Result<bool, OutOfRangeError> {
        self.check(start)?;
        self.check(end)?;

        let prev = self.costs.set(start.index(), end.index(), cost);
        Ok(prev != Some(cost))
    }

    /// Removes the directed edge `start -> end`, but only if its stored cost
    /// equals `cost` exactly. Returns whether an edge was removed.
    ///
    /// The exact-cost match guards against removing a different edge that
    /// happens to share endpoints with the one the caller had in mind.
    pub fn remove_edge(
        &mut self,
        start: NodeId,
        end: NodeId,
        cost: u64,
    ) -> Result<bool, OutOfRangeError> {
        self.check(start)?;
        self.check(end)?;

        if self.costs.get(start.index(), end.index()) != Some(cost) {
            return Ok(false);
        }

        self.costs.take(start.index(), end.index());
        Ok(true)
    }

    /// Replaces the contents of the store with a graph read from a token
    /// stream.
    ///
    /// The expected stream is: the node count `n`, then `n` label tokens (one
    /// per node, in order), then zero or more `start end cost` edge triples,
    /// terminated either by the end of the stream or by the literal triple
    /// `0 0 0`. Tokens after the terminator are ignored.
    ///
    /// A node count above the capacity aborts the build and leaves the store
    /// empty. A stream that ends early or contains an invalid token stops the
    /// build at the point of failure; nodes and edges applied up to that
    /// point remain in the store, so after an error the store must be treated
    /// as partial.
    pub fn build<I>(&mut self, tokens: I) -> Result<(), BuildError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();
        self.clear();

        let count = match tokens.next() {
            Some(token) => parse::<usize>(token.as_ref())?,
            None => return Err(BuildError::new(BuildErrorKind::MissingNodeCount)),
        };

        if count > self.capacity() {
            return Err(BuildError::new(BuildErrorKind::CapacityExceeded {
                requested: count,
                capacity: self.capacity(),
            }));
        }

        for node in 1..=count {
            let label = tokens
                .next()
                .ok_or_else(|| BuildError::new(BuildErrorKind::MissingLabel { node: node as u32 }))?;
            // Capacity was checked upfront, so this cannot fail.
            let _ = self.add_node(label.as_ref());
        }

        loop {
            // End of stream terminates the edge list just like `0 0 0` does.
            let start = match tokens.next() {
                Some(token) => parse::<u32>(token.as_ref())?,
                None => break,
            };
            let end: u32 = next_int(&mut tokens)?;
            let cost: u64 = next_int(&mut tokens)?;

            if start == 0 && end == 0 && cost == 0 {
                break;
            }

            // Node ids are 1-based; 0 is only valid as part of the terminator.
            for node in [start, end] {
                if node == 0 || node as usize > count {
                    return Err(BuildError::new(BuildErrorKind::EdgeOutOfRange {
                        node,
                        count,
                    }));
                }
            }

            // Endpoints were validated above, so this cannot fail.
            let _ = self.insert_edge(NodeId::new(start), NodeId::new(end), cost);
        }

        Ok(())
    }

    pub(crate) fn cost_between(&self, from: usize, to: usize) -> Option<u64> {
        self.costs.get(from, to)
    }

    fn contains(&self, id: NodeId) -> bool {
        id.index() < self.node_count()
    }

    fn check(&self, id: NodeId) -> Result<(), OutOfRangeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(OutOfRangeError {
                node: id,
                count: self.node_count(),
            })
        }
    }
}

fn parse<T: FromStr>(token: &str) -> Result<T, BuildError> {
    token.parse().map_err(|_| {
        BuildError::new(BuildErrorKind::InvalidToken {
            token: token.to_owned(),
        })
    })
}

fn next_int<T, I>(tokens: &mut I) -> Result<T, BuildError>
where
    T: FromStr,
    I: Iterator,
    I::Item: AsRef<str>,
{
    match tokens.next() {
        Some(token) => parse(token.as_ref()),
        None => Err(BuildError::new(BuildErrorKind::TruncatedEdge)),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn v(id: u32) -> NodeId {
        NodeId::new(id)
    }

    fn tokens(input: &str) -> impl Iterator<Item = &str> {
        input.split_whitespace()
    }

    #[test]
    fn build_basic() {
        let mut store = GraphStore::with_capacity(10);
        store
            .build(tokens("3 Alpha Beta Gamma 1 2 5 2 3 7 3 1 2 0 0 0"))
            .unwrap();

        assert_eq!(store.node_count(), 3);
        assert_eq!(store.edge_count(), 3);
        assert_eq!(store.label(v(1)), Some("Alpha"));
        assert_eq!(store.label(v(3)), Some("Gamma"));
        assert_eq!(store.node("Beta"), Some(v(2)));
        assert_eq!(store.cost(v(1), v(2)), Some(5));
        // Directed: the reverse edge was not inserted.
        assert_eq!(store.cost(v(2), v(1)), None);
    }

    #[test]
    fn build_terminated_by_end_of_stream() {
        let mut store = GraphStore::with_capacity(4);
        store.build(tokens("2 A B 1 2 3")).unwrap();

        assert_eq!(store.cost(v(1), v(2)), Some(3));
    }

    #[test]
    fn build_ignores_tokens_after_terminator() {
        let mut store = GraphStore::with_capacity(4);
        store.build(tokens("2 A B 1 2 3 0 0 0 2 1 9")).unwrap();

        assert_eq!(store.cost(v(2), v(1)), None);
    }

    #[test]
    fn build_replaces_previous_state() {
        let mut store = GraphStore::with_capacity(4);
        store.build(tokens("2 A B 1 2 3 0 0 0")).unwrap();
        store.build(tokens("1 C 0 0 0")).unwrap();

        assert_eq!(store.node_count(), 1);
        assert_eq!(store.label(v(1)), Some("C"));
        assert_eq!(store.node("A"), None);
        assert_eq!(store.cost(v(1), v(2)), None);
    }

    #[test]
    fn build_rejects_count_above_capacity() {
        let mut store = GraphStore::with_capacity(2);
        store.build(tokens("2 A B 0 0 0")).unwrap();

        let result = store.build(tokens("3 A B C 0 0 0"));

        assert_matches!(
            result,
            Err(BuildError {
                kind: BuildErrorKind::CapacityExceeded {
                    requested: 3,
                    capacity: 2
                }
            })
        );
        // The aborted build leaves the store empty, not in its previous state.
        assert_eq!(store.node_count(), 0);
    }

    #[test]
    fn build_missing_node_count() {
        let mut store = GraphStore::with_capacity(2);

        assert_matches!(
            store.build(tokens("")),
            Err(BuildError {
                kind: BuildErrorKind::MissingNodeCount
            })
        );
    }

    #[test]
    fn build_missing_label() {
        let mut store = GraphStore::with_capacity(4);

        assert_matches!(
            store.build(tokens("3 A B")),
            Err(BuildError {
                kind: BuildErrorKind::MissingLabel { node: 3 }
            })
        );
        // The labels read before the failure remain.
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn build_keeps_edges_applied_before_failure() {
        let mut store = GraphStore::with_capacity(4);

        assert_matches!(
            store.build(tokens("2 A B 1 2 3 2 1")),
            Err(BuildError {
                kind: BuildErrorKind::TruncatedEdge
            })
        );
        // Partial-build semantics: the first edge stays in place.
        assert_eq!(store.cost(v(1), v(2)), Some(3));
    }

    #[test]
    fn build_invalid_token() {
        let mut store = GraphStore::with_capacity(4);

        assert_matches!(
            store.build(tokens("2 A B 1 two 3")),
            Err(BuildError {
                kind: BuildErrorKind::InvalidToken { .. }
            })
        );
    }

    #[test]
    fn build_edge_out_of_range() {
        let mut store = GraphStore::with_capacity(4);

        assert_matches!(
            store.build(tokens("2 A B 1 3 5 0 0 0")),
            Err(BuildError {
                kind: BuildErrorKind::EdgeOutOfRange { node: 3, count: 2 }
            })
        );
    }

    #[test]
    fn build_zero_endpoint_is_not_a_terminator() {
        let mut store = GraphStore::with_capacity(4);

        // 0 is only valid as the all-zero terminator triple, not as an
        // endpoint of a real edge.
        assert_matches!(
            store.build(tokens("2 A B 0 2 3")),
            Err(BuildError {
                kind: BuildErrorKind::EdgeOutOfRange { node: 0, count: 2 }
            })
        );

        assert_matches!(
            store.build(tokens("2 A B 1 0 3")),
            Err(BuildError {
                kind: BuildErrorKind::EdgeOutOfRange { node: 0, count: 2 }
            })
        );
    }

    #[test]
    fn add_node_respects_capacity() {
        let mut store = GraphStore::with_capacity(1);

        assert_eq!(store.add_node("A"), Ok(v(1)));
        assert_matches!(store.add_node("B"), Err(CapacityError { capacity: 1 }));
    }

    #[test]
    fn duplicate_label_resolves_to_first_node() {
        let mut store = GraphStore::with_capacity(2);
        store.add_node("X").unwrap();
        store.add_node("X").unwrap();

        assert_eq!(store.node("X"), Some(v(1)));
        assert_eq!(store.label(v(2)), Some("X"));
    }

    #[test]
    fn insert_edge_reports_change() {
        let mut store = GraphStore::with_capacity(2);
        store.add_node("A").unwrap();
        store.add_node("B").unwrap();

        assert_eq!(store.insert_edge(v(1), v(2), 4), Ok(true));
        // Idempotent re-insert.
        assert_eq!(store.insert_edge(v(1), v(2), 4), Ok(false));
        // Overwrite with a different cost.
        assert_eq!(store.insert_edge(v(1), v(2), 9), Ok(true));
        assert_eq!(store.cost(v(1), v(2)), Some(9));
    }

    #[test]
    fn insert_edge_out_of_range() {
        let mut store = GraphStore::with_capacity(4);
        store.add_node("A").unwrap();

        assert_matches!(
            store.insert_edge(v(1), v(2), 1),
            Err(OutOfRangeError { count: 1, .. })
        );
    }

    #[test]
    fn remove_edge_requires_exact_cost() {
        let mut store = GraphStore::with_capacity(2);
        store.add_node("A").unwrap();
        store.add_node("B").unwrap();
        store.insert_edge(v(1), v(2), 4).unwrap();

        assert_eq!(store.remove_edge(v(1), v(2), 5), Ok(false));
        assert_eq!(store.cost(v(1), v(2)), Some(4));

        assert_eq!(store.remove_edge(v(1), v(2), 4), Ok(true));
        assert_eq!(store.cost(v(1), v(2)), None);

        // Removing an edge that is already gone changes nothing.
        assert_eq!(store.remove_edge(v(1), v(2), 4), Ok(false));
    }

    #[test]
    fn zero_cost_edge_is_distinct_from_absence() {
        let mut store = GraphStore::with_capacity(2);
        store.add_node("A").unwrap();
        store.add_node("B").unwrap();
        store.insert_edge(v(1), v(2), 0).unwrap();

        assert_eq!(store.cost(v(1), v(2)), Some(0));
        assert_eq!(store.cost(v(2), v(1)), None);
    }

    #[test]
    fn edges_iterates_in_row_major_order() {
        let mut store = GraphStore::with_capacity(3);
        store.build(tokens("3 A B C 2 1 4 1 3 2 0 0 0")).unwrap();

        let edges = store.edges().collect::<Vec<_>>();
        assert_eq!(edges, vec![(v(1), v(3), 2), (v(2), v(1), 4)]);
    }
}
