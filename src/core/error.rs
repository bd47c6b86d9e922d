use std::fmt;

use thiserror::Error;

use crate::core::id::NodeId;

/// The error encountered while building a graph from a token stream.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("building the graph failed: {kind}")]
pub struct BuildError {
    pub kind: BuildErrorKind,
}

impl BuildError {
    pub fn new(kind: BuildErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuildErrorKind {
    /// The declared node count exceeds the capacity of the store.
    CapacityExceeded { requested: usize, capacity: usize },
    /// The stream ended before the node count.
    MissingNodeCount,
    /// The stream declared more nodes than it provided labels for.
    MissingLabel { node: u32 },
    /// The stream ended in the middle of an edge triple.
    TruncatedEdge,
    /// A token could not be parsed as the expected integer.
    InvalidToken { token: String },
    /// An edge triple references a node outside the declared range.
    EdgeOutOfRange { node: u32, count: usize },
}

impl fmt::Display for BuildErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildErrorKind::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "declared node count {requested} exceeds capacity {capacity}"
            ),
            BuildErrorKind::MissingNodeCount => f.write_str("stream ended before the node count"),
            BuildErrorKind::MissingLabel { node } => {
                write!(f, "stream ended before the label of node {node}")
            }
            BuildErrorKind::TruncatedEdge => f.write_str("stream ended in the middle of an edge"),
            BuildErrorKind::InvalidToken { token } => {
                write!(f, "expected an integer, got {token:?}")
            }
            BuildErrorKind::EdgeOutOfRange { node, count } => {
                write!(f, "edge endpoint {node} is outside the valid range 1..={count}")
            }
        }
    }
}

/// The error returned when adding a node to a store that is full.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("the graph has exhausted its capacity ({capacity})")]
pub struct CapacityError {
    pub capacity: usize,
}

/// The error returned when an edge operation references a node that does not
/// exist in the store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("node {node} out of range (the graph has {count} nodes)")]
pub struct OutOfRangeError {
    pub node: NodeId,
    pub count: usize,
}

/// The error returned when reconstructing a path between nodes that no path
/// connects.
///
/// This is an expected outcome for disconnected node pairs, not a failure of
/// the computation; check [`dist`](crate::algo::ShortestPaths::dist) first to
/// avoid it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no path from {from} to {to}")]
pub struct NoPathError {
    pub from: NodeId,
    pub to: NodeId,
}
