//! Node identification.
//!
//! Nodes are identified by 1-based integers, following the input format where
//! the first declared label belongs to node 1. The 0 value is not a valid
//! identifier; "no predecessor" is represented by `Option<NodeId>` instead of
//! a reserved integer.

use std::fmt;

/// A unique identification of a node in a [`GraphStore`](crate::store::GraphStore).
///
/// Node IDs are 1-based: the nodes of a graph with `n` nodes are
/// `NodeId::new(1)` through `NodeId::new(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a node ID from a 1-based integer.
    ///
    /// # Panics
    ///
    /// Panics if `id` is 0, which is not a valid identifier. An invalid id
    /// created here would otherwise surface much later as a wrapped table
    /// index.
    pub fn new(id: u32) -> Self {
        assert!(id > 0, "node ids are 1-based");
        Self(id)
    }

    /// Returns the 1-based integer value of the ID.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Converts the ID into a 0-based index usable for table addressing.
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }

    /// Converts a 0-based index into the corresponding ID.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl From<u32> for NodeId {
    /// Same contract as [`NodeId::new`]: the value is 1-based and must not
    /// be 0.
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
