//! Expected metric values over uniformly random arrangements.
//!
//! Two distinct endpoint positions of a uniformly random arrangement are a
//! uniform pair, so every edge has expected length `(n + 1) / 3`, and two
//! independent edges cross with probability `1/3`. The expectations of `D`
//! and `C` follow by linearity.

use crate::graphs::Graph;
use crate::iterators;
use crate::numeric::{Integer, Rational};

/// The number of unordered pairs of independent edges, `|Q|`, computed in
/// O(m + n) from the degree sequence (plus a correction for antiparallel
/// edge pairs on directed graphs, which share both endpoints).
pub fn num_pairs_independent_edges<G: Graph>(graph: &G) -> Integer {
    let m = graph.num_edges() as u64;
    let mut pairs = Integer::from(m * (m.saturating_sub(1)) / 2);

    for u in 0..graph.num_nodes() {
        let degree = if graph.is_directed() {
            graph.out_neighbours(u).len() + graph.in_neighbours(u).len()
        } else {
            graph.out_neighbours(u).len()
        } as u64;
        pairs -= degree * degree.saturating_sub(1) / 2;
    }

    if graph.is_directed() {
        // antiparallel pairs were subtracted at both endpoints
        for (u, v) in iterators::edge_list(graph) {
            if u < v && graph.out_neighbours(v).contains(&u) {
                pairs += 1u64;
            }
        }
    }
    pairs
}

/// The expectation of the sum of edge lengths over uniformly random
/// arrangements: `m (n + 1) / 3`, as an exact rational.
pub fn expected_sum_edge_lengths_rational<G: Graph>(graph: &G) -> Rational {
    let n = graph.num_nodes() as u64;
    let m = graph.num_edges() as u64;
    Rational::new(Integer::from(m * (n + 1)), Integer::from(3u64))
}

/// The expectation of the number of crossings over uniformly random
/// arrangements: `|Q| / 3`, as an exact rational.
pub fn expected_num_crossings_rational<G: Graph>(graph: &G) -> Rational {
    Rational::new(num_pairs_independent_edges(graph), Integer::from(3u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{DirectedGraph, UndirectedGraph};

    #[test]
    fn q_size_of_a_path() {
        // path of 5: pairs C(4,2) = 6, adjacent pairs 3, |Q| = 3
        let mut g = UndirectedGraph::new(5);
        g.add_edges(&[(0, 1), (1, 2), (2, 3), (3, 4)], true, false).unwrap();
        assert_eq!(num_pairs_independent_edges(&g), 3u64);
        assert_eq!(
            num_pairs_independent_edges(&g),
            crate::iterators::edge_pairs(&g).count() as u64
        );
        assert_eq!(expected_num_crossings_rational(&g), Rational::from_u64s(3, 3));
        assert_eq!(expected_sum_edge_lengths_rational(&g), Rational::from_u64s(24, 3));
    }

    #[test]
    fn q_size_of_a_star_is_zero() {
        let mut g = UndirectedGraph::new(5);
        g.add_edges(&[(0, 1), (0, 2), (0, 3), (0, 4)], true, false).unwrap();
        assert_eq!(num_pairs_independent_edges(&g), 0u64);
        assert!(expected_num_crossings_rational(&g).is_zero());
    }

    #[test]
    fn antiparallel_correction() {
        let mut g = DirectedGraph::new(4);
        g.add_edges(&[(0, 1), (1, 0), (2, 3)], true, false).unwrap();
        // the antiparallel pair shares both endpoints; each of (0,1), (1,0)
        // is independent of (2,3)
        assert_eq!(num_pairs_independent_edges(&g), 2u64);
        assert_eq!(
            num_pairs_independent_edges(&g),
            crate::iterators::edge_pairs(&g).count() as u64
        );
    }
}
