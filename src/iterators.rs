//! Iterators over edges and pairs of independent edges.
//!
//! [`Edges`] yields every edge of a graph exactly once: ordered pairs on
//! directed structures, `(min, max)` pairs on undirected ones. [`EdgePairs`]
//! yields every unordered pair of *independent* edges (edges sharing no
//! vertex), the set usually written `Q`; pairs are produced with the
//! lexicographically smaller edge first.

use crate::defs::{Edge, EdgePair, Vertex};
use crate::graphs::Graph;

/// Iterator over the edges of a graph.
///
/// Edges are produced in ascending order of the first endpoint, then in the
/// order of the adjacency list (ascending second endpoint on normalized
/// graphs).
pub struct Edges<'a, G: Graph> {
    graph: &'a G,
    u: Vertex,
    i: usize,
}

impl<'a, G: Graph> Edges<'a, G> {
    pub(crate) fn new(graph: &'a G) -> Self {
        Edges { graph, u: 0, i: 0 }
    }
}

impl<'a, G: Graph> Iterator for Edges<'a, G> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let n = self.graph.num_nodes();
        while self.u < n {
            let neighbours = self.graph.out_neighbours(self.u);
            while self.i < neighbours.len() {
                let v = neighbours[self.i];
                self.i += 1;
                // undirected edges are stored twice; report (min, max) once
                if self.graph.is_directed() || self.u < v {
                    return Some((self.u, v));
                }
            }
            self.u += 1;
            self.i = 0;
        }
        None
    }
}

/// Returns all edges of a graph as a vector.
pub fn edge_list<G: Graph>(graph: &G) -> Vec<Edge> {
    Edges::new(graph).collect()
}

/// Iterator over `Q`: unordered pairs of edges sharing no vertex.
///
/// The first edge of each pair precedes the second in the edge iteration
/// order, so each pair appears exactly once with the smaller edge first.
pub struct EdgePairs {
    edges: Vec<Edge>,
    i: usize,
    j: usize,
}

impl EdgePairs {
    pub(crate) fn new<G: Graph>(graph: &G) -> Self {
        let edges = edge_list(graph);
        EdgePairs { edges, i: 0, j: 1 }
    }
}

impl Iterator for EdgePairs {
    type Item = EdgePair;

    fn next(&mut self) -> Option<EdgePair> {
        let m = self.edges.len();
        while self.i + 1 < m {
            while self.j < m {
                let e1 = self.edges[self.i];
                let e2 = self.edges[self.j];
                self.j += 1;
                if independent(e1, e2) {
                    return Some((e1, e2));
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

/// Iterator over the pairs of independent edges of `graph`.
pub fn edge_pairs<G: Graph>(graph: &G) -> EdgePairs {
    EdgePairs::new(graph)
}

fn independent((s, t): Edge, (u, v): Edge) -> bool {
    s != u && s != v && t != u && t != v
}
