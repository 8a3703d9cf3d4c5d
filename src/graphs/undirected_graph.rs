//! Undirected graphs stored as adjacency lists.

use crate::defs::{Edge, Vertex};
use crate::error::{Error, Result};
use crate::graphs::Graph;
use crate::iterators::Edges;
use crate::sorting;

/// An undirected graph of `n` vertices without self-loops or parallel edges.
///
/// Every edge `{u, v}` is stored twice, once in each endpoint's neighbour
/// list. The graph is *normalized* when every neighbour list is strictly
/// ascending; see the [module docs](crate::graphs) for the normalization
/// policy.
///
/// # Example
/// ```
/// use linarr::graphs::{Graph, UndirectedGraph};
///
/// let mut g = UndirectedGraph::new(4);
/// g.add_edges(&[(0, 1), (0, 2), (2, 3)], true, false).unwrap();
/// assert_eq!(g.num_edges(), 3);
/// assert_eq!(g.degree(0), 2);
/// assert!(g.has_edge(2, 3));
/// assert!(g.is_normalized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency: Vec<Vec<Vertex>>,
    num_edges: usize,
    normalized: bool,
}

impl UndirectedGraph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        UndirectedGraph {
            adjacency: vec![Vec::new(); n],
            num_edges: 0,
            normalized: true,
        }
    }

    /// Neighbours of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn neighbours(&self, u: Vertex) -> &[Vertex] {
        &self.adjacency[u]
    }

    /// Degree of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn degree(&self, u: Vertex) -> usize {
        self.adjacency[u].len()
    }

    /// Whether the edge `{u, v}` is present.
    ///
    /// On normalized graphs, membership on vertices of degree 64 or more is
    /// answered by binary search.
    ///
    /// # Panics
    /// Panics if `u` or `v` is out of range.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        let nu = &self.adjacency[u];
        let nv = &self.adjacency[v];

        let (smaller, target) = if nu.len() <= nv.len() { (nu, v) } else { (nv, u) };
        if self.normalized && smaller.len() >= 64 {
            smaller.binary_search(&target).is_ok()
        } else {
            smaller.contains(&target)
        }
    }

    /// Adds the edge `{u, v}`.
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

        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.num_edges += 1;

        if self.normalized {
            if to_normalize {
                // restore the invariant on the two touched lists only
                sorting::bit_sort(&mut self.adjacency[u]);
                sorting::bit_sort(&mut self.adjacency[v]);
            } else if check_normalized {
                self.normalized = tail_sorted(&self.adjacency[u]) && tail_sorted(&self.adjacency[v]);
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
    /// When `to_normalize` is false and `check_normalized` is true, the
    /// normalization flag is recomputed by a full scan at the end.
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
            self.adjacency[u].push(v);
            self.adjacency[v].push(u);
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
        let mut fresh = UndirectedGraph::new(self.num_nodes());
        fresh.add_edges(edges, to_normalize, check_normalized)?;
        *self = fresh;
        Ok(())
    }

    /// Removes the edge `{u, v}`.
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
            // removal keeps sorted lists sorted; only restore when unsorted
            if !self.normalized {
                self.normalize();
            }
        } else if check_normalized && !self.normalized {
            self.check_normalized();
        }
        Ok(())
    }

    /// Removes vertex `u` together with its incident edges.
    ///
    /// Vertices with an identifier greater than `u` are relabelled to
    /// `id - 1` so that the vertex set stays `[0, n - 1)`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `u` is not a vertex.
    pub fn remove_vertex(&mut self, u: Vertex) -> Result<()> {
        self.check_node(u)?;

        let incident = self.adjacency[u].len();
        self.adjacency.remove(u);
        for list in self.adjacency.iter_mut() {
            list.retain(|&w| w != u);
            for w in list.iter_mut() {
                if *w > u {
                    *w -= 1;
                }
            }
        }
        self.num_edges -= incident;
        // relabelling keeps relative order, so normalization is preserved
        Ok(())
    }

    /// Sorts every adjacency list ascending and sets the normalization flag.
    pub fn normalize(&mut self) {
        for list in self.adjacency.iter_mut() {
            sorting::bit_sort(list);
        }
        self.normalized = true;
    }

    /// Recomputes the normalization flag by a linear scan and returns it.
    pub fn check_normalized(&mut self) -> bool {
        self.normalized = self.adjacency.iter().all(|list| is_strictly_ascending(list));
        self.normalized
    }

    /// Appends `other` as a disjoint component; its vertices are relabelled
    /// by adding `self.num_nodes()`.
    pub fn disjoint_union(&mut self, other: &UndirectedGraph) {
        let shift = self.num_nodes();
        for list in &other.adjacency {
            self.adjacency.push(list.iter().map(|&w| w + shift).collect());
        }
        self.num_edges += other.num_edges;
        self.normalized = self.normalized && other.normalized;
    }

    /// Iterator over the edges, each reported once as `(min, max)`.
    pub fn edges(&self) -> Edges<'_, Self> {
        Edges::new(self)
    }

    // ------------------------------------------------------------------
    // crate-internal unchecked mutators, used by algorithms that restore
    // the graph before returning

    pub(crate) fn add_edge_raw(&mut self, u: Vertex, v: Vertex) {
        debug_assert!(u != v && !self.has_edge(u, v));
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.num_edges += 1;
    }

    pub(crate) fn remove_edge_raw(&mut self, u: Vertex, v: Vertex) {
        debug_assert!(self.has_edge(u, v));
        remove_single(&mut self.adjacency[u], v);
        remove_single(&mut self.adjacency[v], u);
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
            if !batch.insert((u.min(v), u.max(v))) {
                return Err(Error::InvalidEdge(u, v));
            }
        }
        Ok(())
    }
}

impl Graph for UndirectedGraph {
    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn out_neighbours(&self, u: Vertex) -> &[Vertex] {
        &self.adjacency[u]
    }

    fn in_neighbours(&self, u: Vertex) -> &[Vertex] {
        &self.adjacency[u]
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn is_normalized(&self) -> bool {
        self.normalized
    }
}

/// Whether the last element of `list` is strictly greater than the previous.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_rejects_self_loops_and_duplicates() {
        let mut g = UndirectedGraph::new(3);
        assert_eq!(g.add_edge(1, 1, true, false), Err(Error::InvalidEdge(1, 1)));
        g.add_edge(0, 1, true, false).unwrap();
        assert_eq!(g.add_edge(1, 0, true, false), Err(Error::InvalidEdge(1, 0)));
        assert_eq!(g.add_edge(0, 3, true, false), Err(Error::IndexOutOfRange(3)));
    }

    #[test]
    fn failed_bulk_add_leaves_graph_unmodified() {
        let mut g = UndirectedGraph::new(3);
        g.add_edge(0, 1, true, false).unwrap();
        let before = g.clone();
        assert!(g.add_edges(&[(1, 2), (2, 2)], true, false).is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn normalization_flag_tracks_insertions() {
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(0, 3), (0, 1), (0, 2)], false, false).unwrap();
        assert!(!g.is_normalized());
        g.normalize();
        assert!(g.is_normalized());
        assert_eq!(g.neighbours(0), &[1, 2, 3]);
        // normalize is idempotent
        g.normalize();
        assert!(g.check_normalized());
        assert_eq!(g.neighbours(0), &[1, 2, 3]);
    }

    #[test]
    fn remove_vertex_relabels() {
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(0, 1), (1, 2), (2, 3)], true, false).unwrap();
        g.remove_vertex(1).unwrap();
        // old vertices 2, 3 are now 1, 2; the surviving edge set is {1-2}
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 1);
        assert!(g.has_edge(1, 2));
        assert_eq!(g.degree(0), 0);
    }

    #[test]
    fn disjoint_union_shifts_labels() {
        let mut g = UndirectedGraph::new(2);
        g.add_edge(0, 1, true, false).unwrap();
        let mut h = UndirectedGraph::new(3);
        h.add_edges(&[(0, 1), (1, 2)], true, false).unwrap();

        g.disjoint_union(&h);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), 3);
        assert!(g.has_edge(2, 3) && g.has_edge(3, 4));
    }
}
