//! Closed-form approximation of the number of crossings.
//!
//! For two independent edges of lengths `d1 <= d2` in an arrangement of
//! `n` vertices, the ratio `alpha(n, d1, d2) / beta(n, d1, d2)` is the
//! probability that uniformly random placements of two disjoint edges with
//! those lengths interleave. Summing the ratio over the pairs of
//! independent edges approximates `C` from the length distribution alone,
//! in O(|Q|) big-integer operations and without inspecting positions
//! beyond the edge lengths.

use crate::graphs::Graph;
use crate::iterators;
use crate::linear_arrangement::LinearArrangement;
use crate::metrics::direct_or_identity;
use crate::numeric::{Integer, Rational};

/// Number of interleaving placements of two disjoint edges of lengths
/// `d1 <= d2` on `n` positions.
fn alpha(n: i64, d1: i64, d2: i64) -> i64 {
    let mut f = 0;

    // positions s1 < s2
    if 1 <= n - (d1 + d2) {
        // sum(d1 - 1, i, 1, n - d2 - d1)
        f += (d1 - 1) * (n - d2 - d1);
        // sum(n - d2 - i, i, n - (d1 + d2) + 1, n - d2 - 1)
        f += (d1 * (d1 - 1)) / 2;
    } else {
        // sum(n - i - d2, i, 1, n - d2 - 1)
        f += ((d2 - n) * (d2 - n + 1)) / 2;
    }

    // positions s2 < s1
    if d1 + d2 <= n {
        // sum(d1 - 1, i, 1 + d2, n - d1)
        f += (d1 - 1) * (n - d2 - d1);
    }
    if d1 <= d2 {
        if 1 + d2 <= n - d1 {
            // sum(i + d1 - d2 - 1, i, 1 + d2 - d1, d2)
            f += (d1 * (d1 - 1)) / 2;
        } else {
            // sum(i + d1 - d2 - 1, i, 1 + d2 - d1, n - d1)
            f += ((d2 - n) * (d2 - n + 1)) / 2;
        }
    } else if 1 + d2 <= n - d1 {
        // sum(i + d1 - d2 - 1, i, 1, d2)
        f += (d2 * (2 * d1 - d2 - 1)) / 2;
    } else {
        // sum(i + d1 - d2 - 1, i, 1, n - d1)
        f += ((d1 - n) * (2 * d2 - d1 - n + 1)) / 2;
    }
    f
}

/// Number of placements of two disjoint edges of lengths `d1 <= d2` on
/// `n` positions.
fn beta(n: i64, d1: i64, d2: i64) -> i64 {
    let mut f = 0;

    // positions s1 < s2
    if 1 <= n - (d1 + d2) {
        // sum(n - i - d2 - 1, i, 1, n - d1 - d2)
        f += (n - d2) * (n - d2) + 3 * (d1 + d2 - n) - d1 * d1;
        // sum(n - i - d2, i, n - (d1 + d2) + 1, n - d2 - 1)
        f += d1 * (d1 - 1);
    } else {
        // sum(n - i - d2, i, 1, n - d2 - 1)
        f += (d2 - n) * (d2 - n + 1);
    }

    // positions s2 < s1
    if d1 < d2 {
        if 1 + d2 <= n - d1 {
            // sum(i - 3, i, 1 + d2, n - d1)
            f += (n - d1) * (n - d1) - 5 * (n - d1 - d2) - d2 * d2;
        }

        if d2 <= n - d1 {
            // sum(i - 2, i, 1 + d2 - d1, d2)
            f += d1 * (2 * d2 - d1 - 3);
        } else {
            // sum(i - 2, i, 1 + d2 - d1, n - d1)
            f += (d2 - n) * (2 * d1 - d2 - n + 3);
        }
    } else {
        // the same sums, simplified for d1 = d2

        if 1 + 2 * d1 <= n {
            f += n * (n - 3) + d1 * (6 - 2 * n);
        }

        if 2 * d1 <= n {
            f += d1 * (d1 - 1);
        } else {
            f += (d1 - n) * (d1 - n + 1);
        }
    }

    f / 2
}

/// The approximation of the number of crossings under `arrangement`
/// (identity when `None`), as an exact rational.
pub fn approximate_num_crossings_rational<G: Graph>(
    graph: &G,
    arrangement: Option<&LinearArrangement>,
) -> Rational {
    let n = graph.num_nodes() as i64;
    let pos = direct_or_identity(graph.num_nodes(), arrangement);

    let mut total = Rational::zero();
    for ((s, t), (u, v)) in iterators::edge_pairs(graph) {
        let len_st = (pos[s] as i64 - pos[t] as i64).abs();
        let len_uv = (pos[u] as i64 - pos[v] as i64).abs();
        let (d1, d2) = if len_st <= len_uv { (len_st, len_uv) } else { (len_uv, len_st) };

        total += Rational::new(Integer::from(alpha(n, d1, d2)), Integer::from(beta(n, d1, d2)));
    }
    total
}

/// The approximation of the number of crossings as a floating point
/// number.
pub fn approximate_num_crossings<G: Graph>(
    graph: &G,
    arrangement: Option<&LinearArrangement>,
) -> f64 {
    approximate_num_crossings_rational(graph, arrangement).to_f64()
}
