//! Rooted trees.

use crate::defs::{Edge, Vertex};
use crate::error::{Error, Result};
use crate::graphs::{DirectedGraph, FreeTree, Graph};
use crate::head_vector::HeadVector;
use crate::iterators::Edges;

/// A rooted tree: a directed graph whose underlying undirected graph is a
/// tree (or forest, while under construction) plus a designated root.
///
/// The usual orientation is the *arborescence*: every edge points from
/// parent to child, away from the root. [`is_orientation_valid`]
/// (Self::is_orientation_valid) reports whether the current edges satisfy
/// it; the algorithms that walk from the root require it.
///
/// # Cached annotations
/// The per-vertex subtree sizes are computed by
/// [`calculate_size_subtrees`](Self::calculate_size_subtrees) and invalidated
/// by any structural mutation. Algorithms that need them and find them
/// missing fail with [`Error::PrecomputationMissing`].
///
/// # Example
/// ```
/// use linarr::graphs::{FreeTree, RootedTree};
///
/// let mut t = FreeTree::new(4);
/// t.add_edges(&[(0, 1), (1, 2), (1, 3)], true, false).unwrap();
///
/// let mut r = RootedTree::from_free_tree(&t, 1).unwrap();
/// assert_eq!(r.root(), Some(1));
/// r.calculate_size_subtrees().unwrap();
/// assert_eq!(r.size_subtree(1).unwrap(), 4);
/// assert_eq!(r.size_subtree(0).unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RootedTree {
    graph: DirectedGraph,
    root: Option<Vertex>,
    size_subtree: Vec<u64>,
    size_subtree_valid: bool,
}

impl RootedTree {
    /// Creates a rooted forest of `n` isolated vertices with no root set.
    pub fn new(n: usize) -> Self {
        RootedTree {
            graph: DirectedGraph::new(n),
            root: None,
            size_subtree: Vec::new(),
            size_subtree_valid: false,
        }
    }

    /// Orients a free tree from `root` outward (arborescence).
    ///
    /// # Errors
    /// * [`Error::IndexOutOfRange`] if `root` is not a vertex.
    /// * [`Error::NotATree`] if `tree` is not a single tree.
    pub fn from_free_tree(tree: &FreeTree, root: Vertex) -> Result<Self> {
        if !tree.has_node(root) && tree.num_nodes() > 0 {
            return Err(Error::IndexOutOfRange(root));
        }
        if !tree.is_tree() {
            return Err(Error::NotATree);
        }
        if tree.num_nodes() == 0 {
            return Ok(RootedTree::new(0));
        }

        let n = tree.num_nodes();
        let mut graph = DirectedGraph::new(n);
        let mut visited = vec![false; n];
        let mut queue = std::collections::VecDeque::new();
        visited[root] = true;
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            for &v in tree.neighbours(u) {
                if !visited[v] {
                    visited[v] = true;
                    graph.add_edge_raw(u, v);
                    queue.push_back(v);
                }
            }
        }
        graph.normalize();

        Ok(RootedTree {
            graph,
            root: Some(root),
            size_subtree: Vec::new(),
            size_subtree_valid: false,
        })
    }

    /// The designated root, if one has been set.
    pub fn root(&self) -> Option<Vertex> {
        self.root
    }

    /// Designates `r` as the root.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `r` is not a vertex.
    pub fn set_root(&mut self, r: Vertex) -> Result<()> {
        if !self.has_node(r) {
            return Err(Error::IndexOutOfRange(r));
        }
        self.root = Some(r);
        self.invalidate();
        Ok(())
    }

    /// Whether this value is a valid rooted tree: a root is set and the
    /// underlying undirected graph is a single tree.
    pub fn is_rooted_tree(&self) -> bool {
        self.root.is_some()
            && (self.num_edges() + 1 == self.num_nodes() || self.num_nodes() == 0)
            && !self.underlying_has_cycle()
    }

    /// Whether every edge points from parent to child (arborescence): the
    /// root has no incoming edge and every other vertex has exactly one.
    pub fn is_orientation_valid(&self) -> bool {
        match self.root {
            None => false,
            Some(r) => {
                self.graph.in_degree(r) == 0
                    && (0..self.num_nodes())
                        .all(|u| u == r || self.graph.in_degree(u) == 1)
            }
        }
    }

    /// Out-neighbours (children, under arborescence orientation) of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn out_neighbours(&self, u: Vertex) -> &[Vertex] {
        self.graph.out_neighbours(u)
    }

    /// In-neighbours of `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn in_neighbours(&self, u: Vertex) -> &[Vertex] {
        self.graph.in_neighbours(u)
    }

    /// Out-degree of `u`.
    pub fn out_degree(&self, u: Vertex) -> usize {
        self.graph.out_degree(u)
    }

    /// In-degree of `u`.
    pub fn in_degree(&self, u: Vertex) -> usize {
        self.graph.in_degree(u)
    }

    /// Total degree of `u`.
    pub fn degree(&self, u: Vertex) -> usize {
        self.graph.degree(u)
    }

    /// Whether the directed edge `(u, v)` is present.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.graph.has_edge(u, v)
    }

    /// Adds the directed edge `(u, v)`.
    ///
    /// # Errors
    /// As [`DirectedGraph::add_edge`], plus [`Error::NotATree`] when the
    /// endpoints already belong to the same component of the underlying
    /// undirected graph.
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
        if u == v || self.has_edge(u, v) || self.has_edge(v, u) {
            return Err(Error::InvalidEdge(u, v));
        }
        if self.same_undirected_component(u, v) {
            return Err(Error::NotATree);
        }
        self.graph.add_edge(u, v, to_normalize, check_normalized)?;
        self.invalidate();
        Ok(())
    }

    /// Adds every edge in `edges`; the batch is validated first and the
    /// tree is unmodified on error.
    pub fn add_edges(
        &mut self,
        edges: &[Edge],
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        let mut scratch = self.graph.clone();
        scratch.add_edges(edges, to_normalize, check_normalized)?;
        if directed_underlying_has_cycle(&scratch) {
            return Err(Error::NotATree);
        }
        self.graph = scratch;
        self.invalidate();
        Ok(())
    }

    /// Replaces all edges; the batch is validated first and the tree is
    /// unmodified on error.
    pub fn set_edges(
        &mut self,
        edges: &[Edge],
        to_normalize: bool,
        check_normalized: bool,
    ) -> Result<()> {
        let mut fresh = DirectedGraph::new(self.num_nodes());
        fresh.add_edges(edges, to_normalize, check_normalized)?;
        if directed_underlying_has_cycle(&fresh) {
            return Err(Error::NotATree);
        }
        self.graph = fresh;
        self.invalidate();
        Ok(())
    }

    /// Removes the directed edge `(u, v)`.
    ///
    /// # Errors
    /// As [`DirectedGraph::remove_edge`].
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

    /// Removes vertex `u`; vertices above `u` are relabelled to `id - 1`
    /// and the root is adjusted accordingly (unset when `u` was the root).
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `u` is not a vertex.
    pub fn remove_vertex(&mut self, u: Vertex) -> Result<()> {
        self.graph.remove_vertex(u)?;
        self.root = match self.root {
            Some(r) if r == u => None,
            Some(r) if r > u => Some(r - 1),
            other => other,
        };
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

    /// Forgets the orientation and the root.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the underlying undirected graph has a cycle.
    pub fn to_free_tree(&self) -> Result<FreeTree> {
        FreeTree::from_undirected(self.graph.to_undirected())
    }

    /// Iterator over the edges as `(parent, child)` pairs.
    pub fn edges(&self) -> Edges<'_, Self> {
        Edges::new(self)
    }

    /// Read access to the underlying directed graph.
    pub fn as_directed(&self) -> &DirectedGraph {
        &self.graph
    }

    // ------------------------------------------------------------------
    // subtree sizes

    /// Computes and caches `size_subtree[u]` for every vertex.
    ///
    /// # Errors
    /// [`Error::NotATree`] if this is not a valid rooted tree.
    pub fn calculate_size_subtrees(&mut self) -> Result<()> {
        if !self.is_rooted_tree() {
            return Err(Error::NotATree);
        }
        let root = self.root.unwrap();
        self.size_subtree = undirected_subtree_sizes(&self.graph, root);
        self.size_subtree_valid = true;
        Ok(())
    }

    /// Whether the subtree sizes are available.
    pub fn has_size_subtrees(&self) -> bool {
        self.size_subtree_valid
    }

    /// Number of vertices of the subtree rooted at `u`.
    ///
    /// # Errors
    /// [`Error::PrecomputationMissing`] if
    /// [`calculate_size_subtrees`](Self::calculate_size_subtrees) has not
    /// been called since the last mutation.
    ///
    /// # Panics
    /// Panics if `u` is out of range.
    pub fn size_subtree(&self, u: Vertex) -> Result<u64> {
        if !self.size_subtree_valid {
            return Err(Error::PrecomputationMissing("size_subtree"));
        }
        Ok(self.size_subtree[u])
    }

    /// All subtree sizes, indexed by vertex.
    ///
    /// # Errors
    /// [`Error::PrecomputationMissing`] if the sizes have not been computed.
    pub fn size_subtrees(&self) -> Result<&[u64]> {
        if !self.size_subtree_valid {
            return Err(Error::PrecomputationMissing("size_subtree"));
        }
        Ok(&self.size_subtree)
    }

    /// The head vector of this tree: `h[i]` is the 1-based parent of vertex
    /// `i`, 0 for the root.
    ///
    /// # Errors
    /// [`Error::NotATree`] if this is not a valid rooted tree in
    /// arborescence orientation.
    pub fn to_head_vector(&self) -> Result<HeadVector> {
        if !self.is_rooted_tree() || !self.is_orientation_valid() {
            return Err(Error::NotATree);
        }
        let n = self.num_nodes();
        let mut heads = vec![0u64; n];
        for u in 0..n {
            if Some(u) != self.root {
                heads[u] = (self.graph.in_neighbours(u)[0] + 1) as u64;
            }
        }
        Ok(HeadVector::from_values_unchecked(heads))
    }

    // ------------------------------------------------------------------

    pub(crate) fn add_edge_raw(&mut self, u: Vertex, v: Vertex) {
        self.graph.add_edge_raw(u, v);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.size_subtree_valid = false;
        self.size_subtree.clear();
    }

    fn same_undirected_component(&self, u: Vertex, v: Vertex) -> bool {
        let n = self.num_nodes();
        let mut visited = vec![false; n];
        let mut stack = vec![u];
        visited[u] = true;
        while let Some(w) = stack.pop() {
            for &x in self.graph.out_neighbours(w).iter().chain(self.graph.in_neighbours(w)) {
                if !visited[x] {
                    visited[x] = true;
                    stack.push(x);
                }
            }
        }
        visited[v]
    }

    fn underlying_has_cycle(&self) -> bool {
        directed_underlying_has_cycle(&self.graph)
    }
}

impl Graph for RootedTree {
    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn out_neighbours(&self, u: Vertex) -> &[Vertex] {
        self.graph.out_neighbours(u)
    }

    fn in_neighbours(&self, u: Vertex) -> &[Vertex] {
        self.graph.in_neighbours(u)
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn is_normalized(&self) -> bool {
        self.graph.is_normalized()
    }
}

/// Subtree sizes over the underlying undirected structure, rooted at `root`.
fn undirected_subtree_sizes(graph: &DirectedGraph, root: Vertex) -> Vec<u64> {
    let n = graph.num_nodes();
    let mut size = vec![0u64; n];
    let mut parent = vec![usize::MAX; n];
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    visited[root] = true;
    order.push(root);
    let mut head = 0;
    while head < order.len() {
        let u = order[head];
        head += 1;
        for &v in graph.out_neighbours(u).iter().chain(graph.in_neighbours(u)) {
            if !visited[v] {
                visited[v] = true;
                parent[v] = u;
                order.push(v);
            }
        }
    }

    for &u in order.iter().rev() {
        size[u] += 1;
        if parent[u] != usize::MAX {
            size[parent[u]] += size[u];
        }
    }
    size
}

/// Whether the underlying undirected graph of `graph` has a cycle,
/// counting an antiparallel pair `(u, v)`, `(v, u)` as a cycle.
fn directed_underlying_has_cycle(graph: &DirectedGraph) -> bool {
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut stack: Vec<Vertex> = Vec::new();

    for s in 0..n {
        if visited[s] {
            continue;
        }
        let mut nodes = 0usize;
        let mut edges = 0usize;
        visited[s] = true;
        stack.push(s);
        while let Some(u) = stack.pop() {
            nodes += 1;
            edges += graph.out_degree(u);
            for &v in graph.out_neighbours(u).iter().chain(graph.in_neighbours(u)) {
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        if edges >= nodes {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_from_free_tree() {
        let mut t = FreeTree::new(5);
        t.add_edges(&[(0, 1), (1, 2), (2, 3), (2, 4)], true, false).unwrap();

        let r = RootedTree::from_free_tree(&t, 2).unwrap();
        assert!(r.is_rooted_tree());
        assert!(r.is_orientation_valid());
        assert_eq!(r.out_neighbours(2), &[1, 3, 4]);
        assert_eq!(r.in_neighbours(1), &[2]);
    }

    #[test]
    fn subtree_sizes_require_precomputation() {
        let mut t = FreeTree::new(3);
        t.add_edges(&[(0, 1), (1, 2)], true, false).unwrap();
        let mut r = RootedTree::from_free_tree(&t, 0).unwrap();

        assert_eq!(r.size_subtree(0), Err(Error::PrecomputationMissing("size_subtree")));
        r.calculate_size_subtrees().unwrap();
        assert_eq!(r.size_subtree(0).unwrap(), 3);
        assert_eq!(r.size_subtree(1).unwrap(), 2);

        // mutation invalidates the cache
        r.remove_edge(1, 2, true, false).unwrap();
        assert!(r.size_subtree(0).is_err());
    }

    #[test]
    fn cycle_via_orientation_mix_is_rejected() {
        let mut r = RootedTree::new(3);
        r.add_edge(0, 1, true, false).unwrap();
        r.add_edge(2, 1, true, false).unwrap();
        assert_eq!(r.add_edge(2, 0, true, false), Err(Error::NotATree));
        assert_eq!(r.add_edge(0, 2, true, false), Err(Error::NotATree));
    }

    #[test]
    fn head_vector_round_trip() {
        let mut t = FreeTree::new(4);
        t.add_edges(&[(0, 1), (0, 2), (2, 3)], true, false).unwrap();
        let r = RootedTree::from_free_tree(&t, 0).unwrap();
        let hv = r.to_head_vector().unwrap();
        assert_eq!(hv.values(), &[0, 1, 1, 3]);
    }
}
