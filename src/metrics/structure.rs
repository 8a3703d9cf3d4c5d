//! Structural predicates of arrangements: planarity and projectivity.

use crate::graphs::{Graph, RootedTree};
use crate::linear_arrangement::LinearArrangement;
use crate::metrics::{direct_or_identity, num_crossings};

/// Whether the arrangement has no edge crossings.
pub fn is_planar<G: Graph>(graph: &G, arrangement: Option<&LinearArrangement>) -> bool {
    num_crossings(graph, arrangement) == 0
}

/// Whether some edge covers the root: an edge `(u, v)` with
/// `min(π(u), π(v)) < π(root) < max(π(u), π(v))`.
///
/// # Panics
/// Panics if the tree has no root.
pub fn is_root_covered(tree: &RootedTree, arrangement: Option<&LinearArrangement>) -> bool {
    let root = tree.root().expect("tree has a root");
    let pos = direct_or_identity(tree.num_nodes(), arrangement);
    let pr = pos[root];
    tree.edges().any(|(u, v)| {
        let (a, b) = (pos[u].min(pos[v]), pos[u].max(pos[v]));
        a < pr && pr < b
    })
}

/// Whether the arrangement is projective: planar and the root uncovered.
///
/// # Panics
/// Panics if the tree has no root.
pub fn is_projective(tree: &RootedTree, arrangement: Option<&LinearArrangement>) -> bool {
    !is_root_covered(tree, arrangement) && is_planar(tree, arrangement)
}
