//! Head-initial ratio of a directed graph under an arrangement.

use crate::graphs::{DirectedGraph, Graph};
use crate::linear_arrangement::LinearArrangement;
use crate::metrics::direct_or_identity;
use crate::numeric::Rational;

/// The fraction of edges `(u, v)` arranged head-initially, i.e. with
/// `π(u) < π(v)`, as an exact rational.
///
/// A value of 0 indicates perfect left branching and a value of 1 perfect
/// right branching.
///
/// # Panics
/// Panics if the graph has no edges.
pub fn head_initial_rational(
    graph: &DirectedGraph,
    arrangement: Option<&LinearArrangement>,
) -> Rational {
    let m = graph.num_edges() as u64;
    assert!(m > 0, "head-initial ratio needs at least one edge");

    let pos = direct_or_identity(graph.num_nodes(), arrangement);
    let right_branching = graph.edges().filter(|&(u, v)| pos[u] < pos[v]).count() as u64;
    Rational::from_u64s(right_branching, m)
}

/// The head-initial ratio as a floating point number.
///
/// # Panics
/// Panics if the graph has no edges.
pub fn head_initial(graph: &DirectedGraph, arrangement: Option<&LinearArrangement>) -> f64 {
    head_initial_rational(graph, arrangement).to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_under_identity_and_reversal() {
        let mut g = DirectedGraph::new(4);
        g.add_edges(&[(0, 1), (1, 2), (3, 2)], true, false).unwrap();

        // (0,1) and (1,2) point right, (3,2) points left
        assert_eq!(head_initial_rational(&g, None), Rational::from_u64s(2, 3));

        let reversed = LinearArrangement::identity(4).mirrored();
        assert_eq!(
            head_initial_rational(&g, Some(&reversed)),
            Rational::from_u64s(1, 3)
        );
    }
}
