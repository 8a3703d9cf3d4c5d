//! Basic type definitions shared across the crate.

/// A vertex of a graph, identified by its index in `[0, n)`.
///
/// The label is positional; there is no separate identity object.
pub type Vertex = usize;

/// A position of a linear arrangement, in `[0, n)`.
pub type Position = usize;

/// An edge of a graph.
///
/// In directed structures the pair is ordered `(tail, head)`; in undirected
/// structures the canonical form is `(min, max)`.
pub type Edge = (Vertex, Vertex);

/// A pair of edges. Used to denote elements of the set `Q` of pairs of
/// independent edges (edges that do not share any vertex).
pub type EdgePair = (Edge, Edge);
