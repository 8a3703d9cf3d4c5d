//! Minimum planar arrangement of a free tree (Hochberg–Stallmann with the
//! Alemany–Esteban–Ferrer correction).
//!
//! The optimal planar arrangement of a tree is a projective arrangement of
//! the tree rooted at a centroidal vertex: arranging around a centroid
//! never covers it, so the projective embedding applies unchanged.

use crate::graphs::{FreeTree, Graph};
use crate::linear_arrangement::LinearArrangement;
use crate::properties;

use super::projective::{embed_intervals, sorted_children_by_size, Place};

/// Entry point: `tree` must be a tree of at least 2 vertices.
pub(crate) fn minimum_arrangement(tree: &FreeTree) -> (u64, LinearArrangement) {
    let n = tree.num_nodes();

    // root the tree at a centroidal vertex and annotate subtree sizes
    let centroid = properties::centroid_of_component(tree, 0).0;
    let sizes = properties::size_subtrees(tree, centroid);

    // parent-to-child edges of the rooting at the centroid
    let mut parent = vec![usize::MAX; n];
    let mut order = vec![centroid];
    let mut visited = vec![false; n];
    visited[centroid] = true;
    let mut head = 0;
    while head < order.len() {
        let u = order[head];
        head += 1;
        for &v in tree.neighbours(u) {
            if !visited[v] {
                visited[v] = true;
                parent[v] = u;
                order.push(v);
            }
        }
    }

    let children = sorted_children_by_size(
        n,
        (0..n).filter(|&v| parent[v] != usize::MAX).map(|v| (parent[v], v)),
        &sizes,
    );

    let mut intervals = vec![Vec::new(); n];
    let cost = super::projective::optimal_interval_of(&children, centroid, Place::Root, &mut intervals);
    let arrangement = embed_intervals(&intervals, &sizes, centroid);
    (cost, arrangement)
}
