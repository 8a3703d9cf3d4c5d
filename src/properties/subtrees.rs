//! Subtree sizes of a rooted (or locally rooted) tree.

use crate::defs::Vertex;
use crate::graphs::Graph;

/// Computes `size[u]` = number of vertices of the subtree rooted at `u`,
/// for every `u` in the component of `root`, interpreting the tree as
/// rooted at `root`.
///
/// Works on a [`FreeTree`](crate::graphs::FreeTree) (or any acyclic
/// component reachable from `root`) and on an arborescence, where only the
/// out-edges are followed. Vertices outside the component keep size 0.
///
/// # Panics
/// Panics if `root` is out of range.
pub fn size_subtrees<G: Graph>(graph: &G, root: Vertex) -> Vec<u64> {
    let n = graph.num_nodes();
    let mut size = vec![0u64; n];
    let mut parent = vec![usize::MAX; n];
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    // collect the component in BFS order, remembering parents
    visited[root] = true;
    order.push(root);
    let mut head = 0;
    while head < order.len() {
        let u = order[head];
        head += 1;
        for &v in graph.out_neighbours(u) {
            if !visited[v] {
                visited[v] = true;
                parent[v] = u;
                order.push(v);
            }
        }
    }

    // accumulate sizes bottom-up
    for &u in order.iter().rev() {
        size[u] += 1;
        if parent[u] != usize::MAX {
            size[parent[u]] += size[u];
        }
    }
    size
}
