//! Classification of arrangements of rooted trees into the classic
//! dependency-structure families.
//!
//! The families nest: projective ⊆ planar ⊆ well-nested of gap degree at
//! most 1 ⊆ one-endpoint-crossing. Each flag is computed from its
//! definition:
//!
//! * **projective** — no crossings and the root is not covered;
//! * **planar** — no crossings;
//! * **well-nested, gap degree ≤ 1** — the yields (position sets of the
//!   subtrees) of disjoint subtrees never interleave, and no yield has
//!   more than one discontinuity;
//! * **one-endpoint-crossing** — for every edge, the edges crossing it
//!   all share one common vertex.

use crate::defs::{Position, Vertex};
use crate::error::{Error, Result};
use crate::graphs::{Graph, RootedTree};
use crate::linear_arrangement::LinearArrangement;
use crate::metrics::{direct_or_identity, is_root_covered, num_crossings};
use crate::sorting::bit_sort;

/// Family membership of one arrangement of a rooted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntacticStructure {
    /// No crossings, root uncovered.
    pub projective: bool,
    /// No crossings.
    pub planar: bool,
    /// Yields of disjoint subtrees do not interleave; at most one
    /// discontinuity per yield.
    pub well_nested_1: bool,
    /// The edges crossing any fixed edge share a common vertex.
    pub one_endpoint_crossing: bool,
}

/// Classifies the arrangement of a rooted tree (identity when `None`).
///
/// # Errors
/// [`Error::NotATree`] if the input is not a valid rooted tree in
/// arborescence orientation.
pub fn syntactic_structure(
    tree: &RootedTree,
    arrangement: Option<&LinearArrangement>,
) -> Result<SyntacticStructure> {
    if !tree.is_rooted_tree() || !tree.is_orientation_valid() {
        return Err(Error::NotATree);
    }

    let crossings = num_crossings(tree, arrangement);
    if crossings == 0 {
        return Ok(SyntacticStructure {
            projective: !is_root_covered(tree, arrangement),
            planar: true,
            well_nested_1: true,
            one_endpoint_crossing: true,
        });
    }

    let pos = direct_or_identity(tree.num_nodes(), arrangement);
    let (yields, descendants) = subtree_yields(tree, &pos);

    let well_nested = !yields_interleave(&yields, &descendants);
    let max_discontinuities = yields
        .iter()
        .map(|y| y.windows(2).filter(|w| w[1] - w[0] > 1).count())
        .max()
        .unwrap_or(0);

    Ok(SyntacticStructure {
        projective: false,
        planar: false,
        well_nested_1: well_nested && max_discontinuities <= 1,
        one_endpoint_crossing: is_one_endpoint_crossing(tree, &pos),
    })
}

/// For every vertex, the sorted positions of its subtree (its *yield*)
/// and its descendant set.
fn subtree_yields(tree: &RootedTree, pos: &[Position]) -> (Vec<Vec<Position>>, Vec<Vec<bool>>) {
    let n = tree.num_nodes();
    let root = tree.root().expect("validated by the caller");

    // post-order over the arborescence
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![root];
    while let Some(u) = stack.pop() {
        order.push(u);
        stack.extend_from_slice(tree.out_neighbours(u));
    }

    let mut yields: Vec<Vec<Position>> = vec![Vec::new(); n];
    let mut descendants: Vec<Vec<bool>> = vec![vec![false; n]; n];
    for &u in order.iter().rev() {
        yields[u].push(pos[u]);
        descendants[u][u] = true;
        for &child in tree.out_neighbours(u) {
            let child_yield = std::mem::take(&mut yields[child]);
            yields[u].extend_from_slice(&child_yield);
            yields[child] = child_yield;
            for v in 0..n {
                if descendants[child][v] {
                    descendants[u][v] = true;
                }
            }
        }
        bit_sort(&mut yields[u]);
    }
    (yields, descendants)
}

/// Whether the yields of some pair of disjoint subtrees interleave: one
/// holds positions `a < c` and the other `b < d` with `a < b < c < d`.
fn yields_interleave(yields: &[Vec<Position>], descendants: &[Vec<bool>]) -> bool {
    let n = yields.len();
    for u in 0..n {
        for v in u + 1..n {
            if descendants[u][v] || descendants[v][u] {
                continue;
            }
            let (yu, yv) = (&yields[u], &yields[v]);
            for i in 0..yu.len() {
                for j in i + 1..yu.len() {
                    let (a, c) = (yu[i], yu[j]);
                    for k in 0..yv.len() {
                        for l in k + 1..yv.len() {
                            let (b, d) = (yv[k], yv[l]);
                            if (a < b && b < c && c < d) || (b < a && a < d && d < c) {
                                return true;
                            }
                        }
                    }
                }
            }
        }
    }
    false
}

/// Whether, for every edge, all the edges crossing it touch one common
/// vertex.
fn is_one_endpoint_crossing(tree: &RootedTree, pos: &[Position]) -> bool {
    let edges: Vec<(Vertex, Vertex)> = tree.edges().collect();

    for &(s, t) in &edges {
        let (a, b) = (pos[s].min(pos[t]), pos[s].max(pos[t]));

        let crossing: Vec<(Vertex, Vertex)> = edges
            .iter()
            .copied()
            .filter(|&(u, v)| {
                if u == s || u == t || v == s || v == t {
                    return false;
                }
                let (c, d) = (pos[u].min(pos[v]), pos[u].max(pos[v]));
                (a < c && c < b && b < d) || (c < a && a < d && d < b)
            })
            .collect();

        if crossing.len() < 2 {
            continue;
        }
        let (p, q) = crossing[0];
        let p_common = crossing.iter().all(|&(u, v)| u == p || v == p);
        let q_common = crossing.iter().all(|&(u, v)| u == q || v == q);
        if !p_common && !q_common {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::FreeTree;

    fn rooted_path(n: usize, root: usize) -> RootedTree {
        let mut t = FreeTree::new(n);
        for u in 0..n - 1 {
            t.add_edge(u, u + 1, true, false).unwrap();
        }
        RootedTree::from_free_tree(&t, root).unwrap()
    }

    #[test]
    fn identity_on_a_path_is_projective() {
        let tree = rooted_path(4, 0);
        let class = syntactic_structure(&tree, None).unwrap();
        assert!(class.projective && class.planar);
        assert!(class.well_nested_1 && class.one_endpoint_crossing);
    }

    #[test]
    fn covered_root_is_planar_but_not_projective() {
        // star rooted at a leaf under the identity: hub edges cover it
        let mut t = FreeTree::new(3);
        t.add_edges(&[(0, 1), (0, 2)], true, false).unwrap();
        let tree = RootedTree::from_free_tree(&t, 1).unwrap();
        let class = syntactic_structure(&tree, None).unwrap();
        assert!(!class.projective);
        assert!(class.planar);
    }

    #[test]
    fn single_crossing_on_a_path_is_well_nested() {
        // path 0-1-2-3 rooted at 0 arranged 0, 2, 1, 3: one crossing,
        // every yield has at most one gap, and all subtrees are nested
        let tree = rooted_path(4, 0);
        let arr = LinearArrangement::from_direct(vec![0, 2, 1, 3]).unwrap();
        let class = syntactic_structure(&tree, Some(&arr)).unwrap();
        assert!(!class.planar);
        assert!(class.well_nested_1);
        assert!(class.one_endpoint_crossing);
    }

    #[test]
    fn interleaving_siblings_are_not_well_nested() {
        // root 0 with two 2-chains; arrange the chains alternating so the
        // sibling yields interleave
        let mut t = FreeTree::new(5);
        t.add_edges(&[(0, 1), (1, 2), (0, 3), (3, 4)], true, false).unwrap();
        let tree = RootedTree::from_free_tree(&t, 0).unwrap();

        // positions: 0 first, then 1, 3, 2, 4 -> yields {1,2} at {1, 3}
        // and {3, 4} at {2, 4}
        let arr = LinearArrangement::from_direct(vec![0, 1, 3, 2, 4]).unwrap();
        let class = syntactic_structure(&tree, Some(&arr)).unwrap();
        assert!(!class.planar);
        assert!(!class.well_nested_1);
        // both edges crossing (1, 2) touch vertex 3
        assert!(class.one_endpoint_crossing);
    }
}
