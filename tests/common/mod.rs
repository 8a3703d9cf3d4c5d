//! Helpers shared by the integration tests.
#![allow(dead_code)] // not every test binary uses every helper

use linarr::graphs::{FreeTree, Graph, RootedTree};
use linarr::Vertex;

/// AHU encoding of the subtree of `u`, children encodings sorted.
fn encode(neighbours: &dyn Fn(Vertex) -> Vec<Vertex>, u: Vertex, parent: Option<Vertex>) -> String {
    let mut parts: Vec<String> = neighbours(u)
        .into_iter()
        .filter(|&v| Some(v) != parent)
        .map(|v| encode(neighbours, v, Some(u)))
        .collect();
    parts.sort();
    format!("({})", parts.concat())
}

/// Canonical string of a rooted tree under rooted isomorphism.
pub fn canonical_rooted(tree: &RootedTree) -> String {
    let neighbours = |u: Vertex| tree.out_neighbours(u).to_vec();
    encode(&neighbours, tree.root().expect("rooted tree"), None)
}

/// Canonical string of a free tree under isomorphism (rooted at the
/// centre).
pub fn canonical_free(tree: &FreeTree) -> String {
    let neighbours = |u: Vertex| tree.neighbours(u).to_vec();
    let (c1, c2) = tree.centre().expect("tree");
    let e1 = encode(&neighbours, c1, None);
    match c2 {
        None => e1,
        Some(c2) => e1.min(encode(&neighbours, c2, None)),
    }
}

/// A path of `n` vertices.
pub fn path(n: usize) -> FreeTree {
    let mut tree = FreeTree::new(n);
    for u in 0..n.saturating_sub(1) {
        tree.add_edge(u, u + 1, true, false).unwrap();
    }
    tree
}

/// A star: vertex 0 adjacent to all others.
pub fn star(n: usize) -> FreeTree {
    let mut tree = FreeTree::new(n);
    for u in 1..n {
        tree.add_edge(0, u, true, false).unwrap();
    }
    tree
}
