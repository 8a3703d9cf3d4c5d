//! Free (unrooted) trees.

use crate::defs::{Edge, Vertex};
use crate::error::{Error, Result};
use crate::graphs::tree_type::{self, TreeTypeSet};
use crate::graphs::{Graph, UndirectedGraph};
use crate::iterators::Edges;
use crate::properties;
use crate::traversal::Bfs;

/// A free tree: an undirected, acyclic graph.
///
/// The acyclicity invariant is maintained by every mutation, so a value of
/// this type is a *forest* at all times and a tree exactly when it has
/// `n - 1` edges (see [`is_tree`](Self::is_tree)). Algorithms that require a
/// tree state their precondition and fail with [`Error::NotATree`]
/// otherwise.
///
/// # Cached annotations
/// The shape classification (see [`TreeTypeSet`]) is computed on demand by
/// [`calculate_tree_type`](Self::calculate_tree_type) and cached; any
/// structural mutation invalidates the cache.
///
/// # Example
/// ```
/// use linarr::graphs::FreeTree;
///
/// let mut t = FreeTree::new(4);
/// t.add_edges(&[(0, 1), (1, 2), (1, 3)], true, false).unwrap();
/// assert!(t.is_tree());
/// // adding any further edge would close a cycle
/// assert!(t.add_edge(2, 3, true, false).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FreeTree {
    graph: UndirectedGraph,
    tree_type: Option<TreeTypeSet>,
}

impl FreeTree {
    /// Creates a forest of `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        FreeTree { graph: UndirectedGraph::new(n), tree_type: None }
    }

    /// Builds a free tree from an undirected graph.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the graph contains a cycle. A forest (fewer
    /// than `n - 1` edges) is accepted; use [`is_tree`](Self::is_tree) to
    /// check for connectedness.
    pub fn from_undirected(graph: UndirectedGraph) -> Result<Self> {
        if has_cycle(&graph) {
            return Err(Error::NotATree);
        }
        Ok(FreeTree { graph, tree_type: None })
    }

    /// Builds a free tree from a graph known to be acyclic.
    pub(crate) fn from_undirected_unchecked(graph: UndirectedGraph) -> Self {
        debug_assert!(!has_cycle(&graph));
        FreeTree { graph, tree_type: None }
    }

    /// Whether the forest is a single tree: `m = n - 1`.
    pub fn is_tree(&self) -> bool {
        self.num_edges() + 1 == self.num_nodes() || self.num_nodes() == 0
    }

    /// Neighbours of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn neighbours(&self, u: Vertex) -> &[Vertex] {
        self.graph.neighbours(u)
    }

    /// Degree of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn degree(&self, u: Vertex) -> usize {
        self.graph.degree(u)
    }

    /// Whether the edge `{u, v}` is present.
    ///
    /// # Panics
    /// Panics if `u` or `v` is out of range.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.graph.has_edge(u, v)
    }

    /// Number of vertices in the connected component of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn num_nodes_component(&self, u: Vertex) -> usize {
        let mut bfs = Bfs::new(self);
        bfs.start_at(u);
        bfs.state().num_visited()
    }

    /// Adds the edge `{u, v}`.
    ///
    /// # Errors
    /// As [`UndirectedGraph::add_edge`], plus [`Error::NotATree`] when both
    /// endpoints already belong to the same component (the edge would close
    /// a cycle).
    pub fn add_edge(
        &mut self,
        u: Vertex,
        v: Vertex,
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        if !self.has_node(u) {
            return Err(Error::IndexOutOfRange(u));
        }
        if !self.has_node(v) {
            return Err(Error::IndexOutOfRange(v));
        }
        if u == v || self.has_edge(u, v) {
            return Err(Error::InvalidEdge(u, v));
        }
        if self.same_component(u, v) {
            return Err(Error::NotATree);
        }
        self.graph.add_edge(u, v, to_normalize, check_normalized)?;
        self.invalidate();
        Ok(())
    }

    /// Adds every edge in `edges`.
    ///
    /// The whole batch is validated first (including acyclicity of the
    /// result); on error the tree is unmodified.
    pub fn add_edges(
        &mut self,
        edges: &[Edge],
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        let mut scratch = self.graph.clone();
        scratch.add_edges(edges, to_normalize, check_normalized)?;
        if has_cycle(&scratch) {
            return Err(Error::NotATree);
        }
        self.graph = scratch;
        self.invalidate();
        Ok(())
    }

    /// Replaces all edges of the forest with `edges`.
    ///
    /// # Errors
    /// See [`add_edges`](Self::add_edges); on error the tree is unmodified.
    pub fn set_edges(
        &mut self,
        edges: &[Edge],
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        let mut fresh = UndirectedGraph::new(self.num_nodes());
        fresh.add_edges(edges, to_normalize, check_normalized)?;
        if has_cycle(&fresh) {
            return Err(Error::NotATree);
        }
        self.graph = fresh;
        self.invalidate();
        Ok(())
    }

    /// Removes the edge `{u, v}`, splitting its component in two.
    ///
    /// # Errors
    /// As [`UndirectedGraph::remove_edge`].
    pub fn remove_edge(
        &mut self,
        u: Vertex,
        v: Vertex,
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        self.graph.remove_edge(u, v, to_normalize, check_normalized)?;
        self.invalidate();
        Ok(())
    }

    /// Removes vertex `u` and its incident edges; vertices above `u` are
    /// relabelled to `id - 1`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `u` is not a vertex.
    pub fn remove_vertex(&mut self, u: Vertex) -> Result<()> {
        self.graph.remove_vertex(u)?;
        self.invalidate();
        Ok(())
    }

    /// Sorts every adjacency list ascending.
    pub fn normalize(&mut self) {
        self.graph.normalize();
    }

    /// Recomputes the normalization flag and returns it.
    pub fn check_normalized(&mut self) -> bool {
        self.graph.check_normalized()
    }

    /// Appends `other` as a disjoint sub-forest; its vertices are
    /// relabelled by adding `self.num_nodes()`.
    pub fn disjoint_union(&mut self, other: &FreeTree) {
        self.graph.disjoint_union(&other.graph);
        self.invalidate();
    }

    /// Iterator over the edges as `(min, max)` pairs.
    pub fn edges(&self) -> Edges<'_, Self> {
        Edges::new(self)
    }

    /// Read access to the underlying undirected graph.
    pub fn as_undirected(&self) -> &UndirectedGraph {
        &self.graph
    }

    // ------------------------------------------------------------------
    // cached annotations

    /// Computes and caches the shape classification.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the forest is not a single tree.
    pub fn calculate_tree_type(&mut self) -> Result<&TreeTypeSet> {
        if !self.is_tree() {
            return Err(Error::NotATree);
        }
        if self.tree_type.is_none() {
            self.tree_type = Some(tree_type::classify(self));
        }
        Ok(self.tree_type.as_ref().unwrap())
    }

    /// The cached shape classification, if it has been computed since the
    /// last structural mutation.
    pub fn tree_type(&self) -> Option<&TreeTypeSet> {
        self.tree_type.as_ref()
    }

    /// The centre of the tree: one or two vertices of minimum eccentricity.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the forest is not a single tree.
    pub fn centre(&self) -> Result<(Vertex, Option<Vertex>)> {
        if !self.is_tree() || self.num_nodes() == 0 {
            return Err(Error::NotATree);
        }
        Ok(properties::centre_of_component(self, 0))
    }

    /// The centroid of the tree: one or two vertices whose heaviest subtree
    /// is smallest.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the forest is not a single tree.
    pub fn centroid(&self) -> Result<(Vertex, Option<Vertex>)> {
        if !self.is_tree() || self.num_nodes() == 0 {
            return Err(Error::NotATree);
        }
        Ok(properties::centroid_of_component(self, 0))
    }

    /// The diameter of the tree: the number of edges of a longest path.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the forest is not a single tree.
    pub fn diameter(&self) -> Result<u64> {
        if !self.is_tree() || self.num_nodes() == 0 {
            return Err(Error::NotATree);
        }
        Ok(properties::diameter_of_component(self, 0))
    }

    // ------------------------------------------------------------------
    // crate-internal raw mutators for algorithms that restore the tree
    // before returning; they skip validation but keep caches invalidated

    pub(crate) fn add_edge_raw(&mut self, u: Vertex, v: Vertex) {
        self.graph.add_edge_raw(u, v);
        self.invalidate();
    }

    pub(crate) fn remove_edge_raw(&mut self, u: Vertex, v: Vertex) {
        self.graph.remove_edge_raw(u, v);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.tree_type = None;
    }

    fn same_component(&self, u: Vertex, v: Vertex) -> bool {
        let mut bfs = Bfs::new(self);
        bfs.start_at(u);
        bfs.state().was_visited(v)
    }
}

impl Graph for FreeTree {
    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn out_neighbours(&self, u: Vertex) -> &[Vertex] {
        self.graph.neighbours(u)
    }

    fn in_neighbours(&self, u: Vertex) -> &[Vertex] {
        self.graph.neighbours(u)
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn is_normalized(&self) -> bool {
        self.graph.is_normalized()
    }
}

/// Whether an undirected graph contains a cycle.
fn has_cycle(graph: &UndirectedGraph) -> bool {
    // a connected component with as many edges as vertices has a cycle;
    // count both per component with one traversal
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut stack = Vec::new();

    for s in 0..n {
        if visited[s] {
            continue;
        }
        let mut nodes = 0usize;
        let mut degree_sum = 0usize;
        visited[s] = true;
        stack.push(s);
        while let Some(u) = stack.pop() {
            nodes += 1;
            degree_sum += graph.degree(u);
            for &v in graph.neighbours(u) {
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        if degree_sum / 2 >= nodes {
            return true;
        }
    }
    false
}
