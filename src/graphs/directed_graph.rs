//! Directed graphs stored as out- and in-adjacency lists.

use crate::defs::{Edge, Vertex};
use crate::error::{Error, Result};
use crate::graphs::{Graph, UndirectedGraph};
use crate::iterators::Edges;
use crate::sorting;

/// A directed graph of `n` vertices without self-loops or parallel edges.
///
/// Each edge `(u, v)` is stored in `u`'s out-neighbour list and in `v`'s
/// in-neighbour list. Antiparallel edges `(u, v)` and `(v, u)` may coexist.
/// The graph is *normalized* when every out- and in-neighbour list is
/// strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph {
    out_adjacency: Vec<Vec<Vertex>>,
    in_adjacency: Vec<Vec<Vertex>>,
    num_edges: usize,
    normalized: bool,
}

impl DirectedGraph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        DirectedGraph {
            out_adjacency: vec![Vec::new(); n],
            in_adjacency: vec![Vec::new(); n],
            num_edges: 0,
            normalized: true,
        }
    }

    /// Out-neighbours of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn out_neighbours(&self, u: Vertex) -> &[Vertex] {
        &self.out_adjacency[u]
    }

    /// In-neighbours of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn in_neighbours(&self, u: Vertex) -> &[Vertex] {
        &self.in_adjacency[u]
    }

    /// Out-degree of `u`.
    pub fn out_degree(&self, u: Vertex) -> usize {
        self.out_adjacency[u].len()
    }

    /// In-degree of `u`.
    pub fn in_degree(&self, u: Vertex) -> usize {
        self.in_adjacency[u].len()
    }

    /// Total degree of `u` (in plus out).
    pub fn degree(&self, u: Vertex) -> usize {
        self.out_degree(u) + self.in_degree(u)
    }

    /// Whether the directed edge `(u, v)` is present.
    ///
    /// # Panics
    /// Panics if `u` or `v` is out of range.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        let out = &self.out_adjacency[u];
        let inn = &self.in_adjacency[v];
        let (smaller, target) = if out.len() <= inn.len() { (out, v) } else { (inn, u) };
        if self.normalized && smaller.len() >= 64 {
            smaller.binary_search(&target).is_ok()
        } else {
            smaller.contains(&target)
        }
    }

    /// Adds the directed edge `(u, v)`.
    ///
    /// # Arguments
    /// * `to_normalize` - Keep or restore the normalization invariant.
    /// * `check_normalized` - When not normalizing, update the normalization
    ///   flag by inspecting the tails of the modified lists.
    ///
    /// # Errors
    /// * [`Error::IndexOutOfRange`] if `u` or `v` is not a vertex.
    /// * [`Error::InvalidEdge`] on a self-loop or an existing edge.
    pub fn add_edge(
        &mut self,
        u: Vertex,
        v: Vertex,
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v || self.has_edge(u, v) {
            return Err(Error::InvalidEdge(u, v));
        }

        self.out_adjacency[u].push(v);
        self.in_adjacency[v].push(u);
        self.num_edges += 1;

        if self.normalized {
            if to_normalize {
                sorting::bit_sort(&mut self.out_adjacency[u]);
                sorting::bit_sort(&mut self.in_adjacency[v]);
            } else if check_normalized {
                self.normalized =
                    tail_sorted(&self.out_adjacency[u]) && tail_sorted(&self.in_adjacency[v]);
            } else {
                self.normalized = false;
            }
        } else if to_normalize {
            self.normalize();
        }
        Ok(())
    }

    /// Adds every edge in `edges`.
    ///
    /// The whole list is validated first; on error the graph is unmodified.
    ///
    /// # Errors
    /// See [`add_edge`](Self::add_edge); duplicates *within* `edges` are
    /// also [`Error::InvalidEdge`].
    pub fn add_edges(
        &mut self,
        edges: &[Edge],
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        self.validate_new_edges(edges)?;

        for &(u, v) in edges {
            self.out_adjacency[u].push(v);
            self.in_adjacency[v].push(u);
            self.num_edges += 1;
        }

        if to_normalize {
            self.normalize();
        } else if check_normalized {
            self.check_normalized();
        } else {
            self.normalized = false;
        }
        Ok(())
    }

    /// Replaces all edges of the graph with `edges`.
    ///
    /// # Errors
    /// See [`add_edges`](Self::add_edges); on error the graph is unmodified.
    pub fn set_edges(
        &mut self,
        edges: &[Edge],
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        let mut fresh = DirectedGraph::new(self.num_nodes());
        fresh.add_edges(edges, to_normalize, check_normalized)?;
        *self = fresh;
        Ok(())
    }

    /// Removes the directed edge `(u, v)`.
    ///
    /// # Errors
    /// * [`Error::IndexOutOfRange`] if `u` or `v` is not a vertex.
    /// * [`Error::InvalidEdge`] if the edge is absent.
    pub fn remove_edge(
        &mut self,
        u: Vertex,
        v: Vertex,
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v || !self.has_edge(u, v) {
            return Err(Error::InvalidEdge(u, v));
        }

        self.remove_edge_raw(u, v);

        if to_normalize {
            if !self.normalized {
                self.normalize();
            }
        } else if check_normalized && !self.normalized {
            self.check_normalized();
        }
        Ok(())
    }

    /// Removes vertex `u` together with its incident edges; vertices above
    /// `u` are relabelled to `id - 1`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `u` is not a vertex.
    pub fn remove_vertex(&mut self, u: Vertex) -> Result<()> {
        self.check_node(u)?;

        let incident = self.out_adjacency[u].len() + self.in_adjacency[u].len();
        self.out_adjacency.remove(u);
        self.in_adjacency.remove(u);
        for list in self.out_adjacency.iter_mut().chain(self.in_adjacency.iter_mut()) {
            list.retain(|&w| w != u);
            for w in list.iter_mut() {
                if *w > u {
                    *w -= 1;
                }
            }
        }
        self.num_edges -= incident;
        Ok(())
    }

    /// Sorts every adjacency list ascending and sets the normalization flag.
    pub fn normalize(&mut self) {
        for list in self.out_adjacency.iter_mut().chain(self.in_adjacency.iter_mut()) {
            sorting::bit_sort(list);
        }
        self.normalized = true;
    }

    /// Recomputes the normalization flag by a linear scan and returns it.
    pub fn check_normalized(&mut self) -> bool {
        self.normalized = self
            .out_adjacency
            .iter()
            .chain(self.in_adjacency.iter())
            .all(|list| is_strictly_ascending(list));
        self.normalized
    }

    /// Appends `other` as a disjoint component; its vertices are relabelled
    /// by adding `self.num_nodes()`.
    pub fn disjoint_union(&mut self, other: &DirectedGraph) {
        let shift = self.num_nodes();
        for list in &other.out_adjacency {
            self.out_adjacency.push(list.iter().map(|&w| w + shift).collect());
        }
        for list in &other.in_adjacency {
            self.in_adjacency.push(list.iter().map(|&w| w + shift).collect());
        }
        self.num_edges += other.num_edges;
        self.normalized = self.normalized && other.normalized;
    }

    /// Forgets edge orientations, merging antiparallel edges into one.
    pub fn to_undirected(&self) -> UndirectedGraph {
        let mut g = UndirectedGraph::new(self.num_nodes());
        for u in 0..self.num_nodes() {
            for &v in &self.out_adjacency[u] {
                if !g.has_edge(u, v) {
                    g.add_edge_raw(u, v);
                }
            }
        }
        g.normalize();
        g
    }

    /// Iterator over the edges as ordered `(tail, head)` pairs.
    pub fn edges(&self) -> Edges<'_, Self> {
        Edges::new(self)
    }

    pub(crate) fn add_edge_raw(&mut self, u: Vertex, v: Vertex) {
        debug_assert!(u != v && !self.has_edge(u, v));
        self.out_adjacency[u].push(v);
        self.in_adjacency[v].push(u);
        self.num_edges += 1;
    }

    pub(crate) fn remove_edge_raw(&mut self, u: Vertex, v: Vertex) {
        debug_assert!(self.has_edge(u, v));
        remove_single(&mut self.out_adjacency[u], v);
        remove_single(&mut self.in_adjacency[v], u);
        self.num_edges -= 1;
    }

    fn check_node(&self, u: Vertex) -> Result<()> {
        if u >= self.num_nodes() {
            return Err(Error::IndexOutOfRange(u));
        }
        Ok(())
    }

    fn validate_new_edges(&self, edges: &[Edge]) -> Result<()> {
        let mut batch = std::collections::HashSet::with_capacity(edges.len());
        for &(u, v) in edges {
            self.check_node(u)?;
            self.check_node(v)?;
            if u == v || self.has_edge(u, v) {
                return Err(Error::InvalidEdge(u, v));
            }
            if !batch.insert((u, v)) {
                return Err(Error::InvalidEdge(u, v));
            }
        }
        Ok(())
    }
}

impl Graph for DirectedGraph {
    fn num_nodes(&self) -> usize {
        self.out_adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn out_neighbours(&self, u: Vertex) -> &[Vertex] {
        &self.out_adjacency[u]
    }

    fn in_neighbours(&self, u: Vertex) -> &[Vertex] {
        &self.in_adjacency[u]
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn is_normalized(&self) -> bool {
        self.normalized
    }
}

fn tail_sorted(list: &[Vertex]) -> bool {
    let k = list.len();
    k < 2 || list[k - 2] < list[k - 1]
}

fn is_strictly_ascending(list: &[Vertex]) -> bool {
    list.windows(2).all(|w| w[0] < w[1])
}

fn remove_single(list: &mut Vec<Vertex>, value: Vertex) {
    let idx = list.iter().position(|&w| w == value).expect("edge endpoint present");
    list.remove(idx);
}
