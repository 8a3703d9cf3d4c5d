//! Error types for graph construction and algorithm preconditions.
//!
//! Every fallible operation of the public surface reports failure through
//! [`Error`]; parsing of the treebank file formats has its own error type,
//! [`ParseError`](crate::io::ParseError). Failures never leave the input in
//! a partially modified state.

use thiserror::Error;

use crate::defs::Vertex;

/// Errors reported by graph mutations and algorithm entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex identifier is not smaller than the number of vertices.
    #[error("vertex {0} is out of range")]
    IndexOutOfRange(Vertex),

    /// An edge is a self-loop, already present, or absent where required.
    #[error("invalid edge ({0}, {1})")]
    InvalidEdge(Vertex, Vertex),

    /// A structural precondition failed: the input is not connected, not
    /// acyclic, or does not have exactly `n - 1` edges; or the requested
    /// mutation would break the tree invariant.
    #[error("the input graph is not a tree")]
    NotATree,

    /// An algorithm requiring normalized (strictly ascending) adjacency
    /// lists received a non-normalized input.
    #[error("the adjacency lists are not normalized")]
    NotNormalized,

    /// A rooted-tree algorithm was given an input lacking a required
    /// precomputation, e.g. the per-vertex subtree sizes.
    #[error("missing precomputation: {0}")]
    PrecomputationMissing(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
