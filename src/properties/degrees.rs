//! Exact moments of the degree distribution, and hubiness.

use crate::error::{Error, Result};
use crate::graphs::{FreeTree, Graph};
use crate::numeric::{Integer, Rational};

/// The `p`-th moment of the degree ⟨k^p⟩ as an exact rational:
/// `(Σ_u deg(u)^p) / n`.
///
/// On directed graphs the degree of a vertex is the sum of its in- and
/// out-degree.
///
/// # Panics
/// Panics if the graph has no vertices.
pub fn moment_degree_rational<G: Graph>(graph: &G, p: u32) -> Rational {
    let n = graph.num_nodes();
    assert!(n > 0, "degree moments need at least one vertex");

    let mut sum = Integer::zero();
    for u in 0..n {
        let degree = if graph.is_directed() {
            graph.out_neighbours(u).len() + graph.in_neighbours(u).len()
        } else {
            graph.out_neighbours(u).len()
        };
        sum += Integer::from(degree as u64).pow(p);
    }
    Rational::new(sum, Integer::from(n as u64))
}

/// The `p`-th moment of the degree as a floating point number.
///
/// # Panics
/// Panics if the graph has no vertices.
pub fn moment_degree<G: Graph>(graph: &G, p: u32) -> f64 {
    moment_degree_rational(graph, p).to_f64()
}

/// Mean degree ⟨k⟩ of the graph.
///
/// # Panics
/// Panics if the graph has no vertices.
pub fn mean_degree<G: Graph>(graph: &G) -> f64 {
    moment_degree(graph, 1)
}

/// The hubiness of a tree: the second moment of the degree, rescaled so
/// that a path scores 0 and a star scores 1:
/// `(⟨k²⟩ − ⟨k²⟩_path) / (⟨k²⟩_star − ⟨k²⟩_path)`.
///
/// # Errors
/// [`Error::NotATree`] if the input is not a single tree of at least 4
/// vertices (below that every tree is both a path and a star).
pub fn hubiness_rational(tree: &FreeTree) -> Result<Rational> {
    let n = tree.num_nodes() as u64;
    if !tree.is_tree() || n < 4 {
        return Err(Error::NotATree);
    }

    // n * <k^2> for the tree, a path and a star of n vertices
    let sum_squares = moment_degree_rational(tree, 2) * Rational::from(n);
    let path = Rational::from(4 * n - 6);
    let star = Rational::from(n * (n - 1));
    Ok((sum_squares - &path) / (star - &path))
}

/// The hubiness as a floating point number.
///
/// # Errors
/// See [`hubiness_rational`].
pub fn hubiness(tree: &FreeTree) -> Result<f64> {
    Ok(hubiness_rational(tree)?.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::UndirectedGraph;

    #[test]
    fn hubiness_spans_path_to_star() {
        let mut path = FreeTree::new(6);
        for u in 0..5 {
            path.add_edge(u, u + 1, true, false).unwrap();
        }
        assert!(hubiness_rational(&path).unwrap().is_zero());

        let mut star = FreeTree::new(6);
        for u in 1..6 {
            star.add_edge(0, u, true, false).unwrap();
        }
        assert_eq!(hubiness_rational(&star).unwrap(), Rational::from_u64s(1, 1));

        // a mixed shape lands strictly in between
        let mut broom = FreeTree::new(6);
        broom
            .add_edges(&[(0, 1), (1, 2), (2, 3), (3, 4), (3, 5)], true, false)
            .unwrap();
        let h = hubiness_rational(&broom).unwrap();
        assert!(h > 0u64 && h < 1u64);
    }

    #[test]
    fn moments_of_a_star() {
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(0, 1), (0, 2), (0, 3)], true, false).unwrap();

        // degrees 3, 1, 1, 1
        assert_eq!(moment_degree_rational(&g, 1), Rational::from_u64s(6, 4));
        assert_eq!(moment_degree_rational(&g, 2), Rational::from_u64s(12, 4));
        assert!((mean_degree(&g) - 1.5).abs() < 1e-12);
    }
}
