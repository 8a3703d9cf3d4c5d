//! Treebank file formats: edge lists and head vectors.
//!
//! Two line-oriented ASCII formats are supported (LF or CRLF line endings):
//!
//! * **Edge list** — whitespace-separated unordered pairs of non-negative
//!   integers, one or more pairs per line, blank lines permitted. The
//!   vertex set is inferred as `[0, max_id]`.
//! * **Head vector** — whitespace-separated non-negative integers on a
//!   single line, each line one tree; see
//!   [`HeadVector`](crate::head_vector::HeadVector) for the semantics. An
//!   empty line is a recoverable signal
//!   ([`TreebankRecord::EmptyLine`](treebank::TreebankRecord)), not an
//!   error.

pub mod edge_list;
pub mod head_vector;
pub mod treebank;

pub use edge_list::{
    parse_edge_list_directed, parse_edge_list_free_tree, parse_edge_list_undirected,
    read_edge_list_directed, read_edge_list_free_tree, read_edge_list_undirected,
};
pub use head_vector::{parse_head_vector, read_head_vector_trees};
pub use treebank::{read_treebank, TreebankReader, TreebankRecord};

use thiserror::Error;

/// Errors produced while parsing the treebank formats.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A token is not a non-negative integer.
    #[error("malformed token {0:?}")]
    MalformedToken(String),

    /// An edge list has an odd number of vertex identifiers.
    #[error("edge list has an odd number of vertex identifiers")]
    UnpairedVertex,

    /// An edge list repeats an edge or contains a self-loop.
    #[error("invalid edge ({0}, {1})")]
    InvalidEdge(usize, usize),

    /// An edge list supposed to describe a tree does not.
    #[error("the input does not describe a tree")]
    NotATree,

    /// A head vector declares more than one root.
    #[error("head vector declares two roots (positions {0} and {1})")]
    TwoRoots(usize, usize),

    /// A head vector declares no root at all.
    #[error("head vector declares no root")]
    MissingRoot,

    /// A head vector makes a vertex its own parent.
    #[error("vertex {0} is its own parent")]
    SelfParent(usize),

    /// An identifier exceeds the number of vertices.
    #[error("identifier {0} is out of range")]
    OutOfRange(u64),

    /// The parent assignments of a head vector contain a cycle.
    #[error("head vector contains a cycle")]
    Cycle,
}
