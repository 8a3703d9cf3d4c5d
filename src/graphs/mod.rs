//! Graph and tree data model.
//!
//! # Representation
//! All structures store adjacency lists indexed by [`Vertex`]:
//!
//! | Type | Storage | Use case |
//! |------|---------|----------|
//! | [`UndirectedGraph`] | one neighbour list per vertex | general undirected graphs |
//! | [`DirectedGraph`] | out- and in-neighbour lists | general directed graphs |
//! | [`FreeTree`] | undirected graph + tree annotations | unrooted trees (and forests under construction) |
//! | [`RootedTree`] | directed graph + root + subtree sizes | rooted trees, arborescences |
//!
//! # Normalization
//! A graph is *normalized* when every adjacency list is strictly ascending.
//! Normalized adjacencies enable binary-search membership queries on
//! high-degree vertices and are required by several algorithms that iterate
//! neighbours in sorted order. Bulk insertions take a `normalize` flag; when
//! it is false a `check_normalized` flag controls whether the normalization
//! flag is recomputed by a linear scan.
//!
//! # Algorithms over graphs
//! Algorithms that do not care about the concrete kind consume the [`Graph`]
//! capability; those that require a root take [`RootedTree`].

pub mod directed_graph;
pub mod free_tree;
pub mod rooted_tree;
pub mod tree_type;
pub mod undirected_graph;

pub use directed_graph::DirectedGraph;
pub use free_tree::FreeTree;
pub use rooted_tree::RootedTree;
pub use tree_type::{TreeType, TreeTypeSet};
pub use undirected_graph::UndirectedGraph;

use crate::defs::Vertex;

/// Capability shared by every graph kind.
///
/// Undirected structures report their neighbour list as both the out- and
/// the in-neighbourhood.
pub trait Graph {
    /// Number of vertices.
    fn num_nodes(&self) -> usize;

    /// Number of edges.
    fn num_edges(&self) -> usize;

    /// Neighbours of `u`; out-neighbours on directed structures.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    fn out_neighbours(&self, u: Vertex) -> &[Vertex];

    /// In-neighbours of `u`; same as [`out_neighbours`](Graph::out_neighbours)
    /// on undirected structures.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    fn in_neighbours(&self, u: Vertex) -> &[Vertex];

    /// Whether edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Whether every adjacency list is strictly ascending.
    fn is_normalized(&self) -> bool;

    /// Whether `u` is a vertex of this graph.
    fn has_node(&self, u: Vertex) -> bool {
        u < self.num_nodes()
    }
}
