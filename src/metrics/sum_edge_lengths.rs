//! Sum of edge lengths and dependency-distance means.

use crate::graphs::Graph;
use crate::iterators::Edges;
use crate::linear_arrangement::LinearArrangement;
use crate::metrics::direct_or_identity;
use crate::numeric::{Integer, Rational};

/// The sum of edge lengths `D(π) = Σ |π(u) − π(v)|` over all edges, in
/// O(m).
///
/// `None` (or the empty arrangement) means the identity arrangement.
///
/// # Example
/// ```
/// use linarr::graphs::UndirectedGraph;
/// use linarr::metrics::sum_edge_lengths;
///
/// let mut g = UndirectedGraph::new(5);
/// g.add_edges(&[(0, 1), (1, 2), (2, 3), (3, 4)], true, false).unwrap();
/// assert_eq!(sum_edge_lengths(&g, None), 4);
/// ```
pub fn sum_edge_lengths<G: Graph>(graph: &G, arrangement: Option<&LinearArrangement>) -> u64 {
    let pos = direct_or_identity(graph.num_nodes(), arrangement);
    let mut total = 0u64;
    for (u, v) in Edges::new(graph) {
        let (pu, pv) = (pos[u], pos[v]);
        total += (pu.max(pv) - pu.min(pv)) as u64;
    }
    total
}

/// The mean dependency distance `D / m` as an exact rational.
///
/// # Panics
/// Panics if the graph has no edges.
pub fn mean_dependency_distance_rational<G: Graph>(
    graph: &G,
    arrangement: Option<&LinearArrangement>,
) -> Rational {
    let m = graph.num_edges() as u64;
    assert!(m > 0, "mean dependency distance needs at least one edge");
    Rational::from_u64s(sum_edge_lengths(graph, arrangement), m)
}

/// The mean dependency distance as a floating point number.
///
/// # Panics
/// Panics if the graph has no edges.
pub fn mean_dependency_distance<G: Graph>(
    graph: &G,
    arrangement: Option<&LinearArrangement>,
) -> f64 {
    mean_dependency_distance_rational(graph, arrangement).to_f64()
}

/// The 1-level aggregated mean dependency distance of a collection:
/// `Σ D_i / Σ m_i` as an exact rational.
///
/// # Panics
/// Panics if the collection has no edges in total.
pub fn mean_dependency_distance_1level<'a, G, I>(items: I) -> Rational
where
    G: Graph + 'a,
    I: IntoIterator<Item = (&'a G, Option<&'a LinearArrangement>)>,
{
    let mut sum_d = Integer::zero();
    let mut sum_m = Integer::zero();
    for (graph, arrangement) in items {
        sum_d += sum_edge_lengths(graph, arrangement);
        sum_m += graph.num_edges() as u64;
    }
    assert!(!sum_m.is_zero(), "1-level mean dependency distance needs at least one edge");
    Rational::new(sum_d, sum_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::UndirectedGraph;

    fn star6() -> UndirectedGraph {
        let mut g = UndirectedGraph::new(6);
        g.add_edges(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)], true, false).unwrap();
        g
    }

    #[test]
    fn star_under_identity() {
        // 1 + 2 + 3 + 4 + 5
        assert_eq!(sum_edge_lengths(&star6(), None), 15);
        assert_eq!(
            mean_dependency_distance_rational(&star6(), None),
            Rational::from_u64s(15, 5)
        );
    }

    #[test]
    fn arrangement_changes_d() {
        let g = star6();
        // hub in the middle: 0 -> position 2
        let arr = LinearArrangement::from_direct(vec![2, 0, 1, 3, 4, 5]).unwrap();
        assert_eq!(sum_edge_lengths(&g, Some(&arr)), 2 + 1 + 1 + 2 + 3);
    }

    #[test]
    fn one_level_aggregation() {
        let g = star6();
        let mut path = UndirectedGraph::new(3);
        path.add_edges(&[(0, 1), (1, 2)], true, false).unwrap();

        let mdd = mean_dependency_distance_1level([
            (&g, None::<&LinearArrangement>),
            (&path, None),
        ]);
        // (15 + 2) / (5 + 2)
        assert_eq!(mdd, Rational::from_u64s(17, 7));
    }
}
