//! Number of edge crossings `C` of a graph under a linear arrangement.
//!
//! Two independent edges cross when their endpoint positions interleave:
//! `π` places one endpoint of each edge strictly inside the other edge's
//! span. Edges sharing a vertex never cross.
//!
//! Four algorithms compute the same value with different trade-offs
//! (see [`CrossingsAlgorithm`]); the default is the sweep
//! ([`CrossingsAlgorithm::StackBased`]).

use crate::defs::{Position, Vertex};
use crate::graphs::Graph;
use crate::iterators;
use crate::linear_arrangement::LinearArrangement;
use crate::metrics::direct_or_identity;

/// Algorithm selector for [`num_crossings_algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossingsAlgorithm {
    /// O(m²): check every pair of independent edges. Correctness oracle for
    /// tiny graphs.
    BruteForce,
    /// O(n²) time and memory: per-vertex prefix counts of neighbour
    /// positions. Suited to dense graphs of moderate size.
    DynamicProgramming,
    /// O(n·m) time, O(n) memory: one prefix array ("ladder") per left
    /// endpoint. Suited to sparse graphs when memory is tight.
    Ladder,
    /// O(m·log n) time: sweep over the positions keeping the open edges in
    /// a binary indexed tree. The default, and the best choice for trees.
    #[default]
    StackBased,
}

/// The number of crossings under `arrangement` (identity when `None`),
/// computed with the default algorithm.
pub fn num_crossings<G: Graph>(graph: &G, arrangement: Option<&LinearArrangement>) -> u64 {
    num_crossings_algorithm(graph, arrangement, CrossingsAlgorithm::default())
}

/// The number of crossings under `arrangement` (identity when `None`),
/// computed with the chosen algorithm. All algorithms return the same
/// value.
pub fn num_crossings_algorithm<G: Graph>(
    graph: &G,
    arrangement: Option<&LinearArrangement>,
    algorithm: CrossingsAlgorithm,
) -> u64 {
    let pos = direct_or_identity(graph.num_nodes(), arrangement);
    match algorithm {
        CrossingsAlgorithm::BruteForce => brute_force(graph, &pos),
        CrossingsAlgorithm::DynamicProgramming => dynamic_programming(graph, &pos),
        CrossingsAlgorithm::Ladder => ladder(graph, &pos),
        CrossingsAlgorithm::StackBased => stack_based(graph, &pos),
    }
}

/// The number of crossings under every arrangement of `arrangements`,
/// with the chosen algorithm.
pub fn num_crossings_list<G: Graph>(
    graph: &G,
    arrangements: &[LinearArrangement],
    algorithm: CrossingsAlgorithm,
) -> Vec<u64> {
    arrangements
        .iter()
        .map(|arr| num_crossings_algorithm(graph, Some(arr), algorithm))
        .collect()
}

/// Incident edges of `u`, including both directions on directed graphs.
fn incident<'a, G: Graph>(graph: &'a G, u: Vertex) -> impl Iterator<Item = Vertex> + 'a {
    let reverse: &[Vertex] = if graph.is_directed() { graph.in_neighbours(u) } else { &[] };
    graph.out_neighbours(u).iter().copied().chain(reverse.iter().copied())
}

fn brute_force<G: Graph>(graph: &G, pos: &[Position]) -> u64 {
    let mut crossings = 0u64;
    for ((s, t), (u, v)) in iterators::edge_pairs(graph) {
        let (a, b) = ordered(pos[s], pos[t]);
        let (c, d) = ordered(pos[u], pos[v]);
        if (a < c && c < b && b < d) || (c < a && a < d && d < b) {
            crossings += 1;
        }
    }
    crossings
}

/// For every edge `(a, b)` with `π(a) < π(b)`, counts the endpoints `c`
/// strictly inside the span whose matching endpoint lies strictly beyond
/// `π(b)`. Each crossing is counted exactly once, from the edge whose span
/// starts first.
fn dynamic_programming<G: Graph>(graph: &G, pos: &[Position]) -> u64 {
    let n = graph.num_nodes();
    if n < 4 {
        return 0;
    }
    let inv = invert(pos);

    // prefix[v][q]: number of incident edges of v whose other endpoint sits
    // at a position <= q
    let mut prefix: Vec<Vec<u32>> = vec![Vec::new(); n];
    for v in 0..n {
        let mut row = vec![0u32; n];
        for w in incident(graph, v) {
            row[pos[w]] += 1;
        }
        for q in 1..n {
            row[q] += row[q - 1];
        }
        prefix[v] = row;
    }

    // beyond[q][p]: summed over the vertices at positions <= p, the number
    // of their incident edges reaching strictly beyond position q
    let mut beyond: Vec<Vec<u64>> = vec![vec![0u64; n]; n];
    for q in 0..n {
        let mut acc = 0u64;
        for p in 0..n {
            let c = inv[p];
            let deg = prefix[c][n - 1] as u64;
            acc += deg - prefix[c][q] as u64;
            beyond[q][p] = acc;
        }
    }

    let mut crossings = 0u64;
    for (u, v) in iterators::edge_list(graph) {
        let (a, b) = ordered(pos[u], pos[v]);
        if b - a >= 2 {
            crossings += beyond[b][b - 1] - beyond[b][a];
        }
    }
    crossings
}

/// For every position `pu` taken as a left endpoint, builds the prefix
/// array of the neighbour positions of the vertex there (the "ladder") and
/// charges every edge opening inside one of its spans.
fn ladder<G: Graph>(graph: &G, pos: &[Position]) -> u64 {
    let n = graph.num_nodes();
    if n < 4 {
        return 0;
    }
    let inv = invert(pos);

    let mut crossings = 0u64;
    let mut prefix = vec![0u64; n];
    for pu in 0..n {
        let u = inv[pu];

        // prefix[x]: number of neighbours of u at positions <= x
        prefix.iter_mut().for_each(|c| *c = 0);
        for w in incident(graph, u) {
            prefix[pos[w]] += 1;
        }
        for x in 1..n {
            prefix[x] += prefix[x - 1];
        }

        for p in pu + 1..n {
            let w = inv[p];
            for z in incident(graph, w) {
                let pz = pos[z];
                if pz > p {
                    // edges (u, q) with p < q < pz cross (w, z)
                    crossings += prefix[pz - 1] - prefix[p];
                }
            }
        }
    }
    crossings
}

/// Sweeps the positions left to right, keeping the multiset of open edges
/// (keyed by their left endpoint) in a binary indexed tree. When an edge
/// closes, the open edges that started strictly inside it are exactly the
/// ones crossing it.
fn stack_based<G: Graph>(graph: &G, pos: &[Position]) -> u64 {
    let n = graph.num_nodes();
    if n < 4 {
        return 0;
    }

    // for each position: the edges opening there and the left endpoints
    // of the edges closing there
    let mut opening: Vec<Vec<Position>> = vec![Vec::new(); n];
    let mut closing: Vec<Vec<Position>> = vec![Vec::new(); n];
    for (u, v) in iterators::edge_list(graph) {
        let (l, r) = ordered(pos[u], pos[v]);
        opening[l].push(l);
        closing[r].push(l);
    }

    let mut bit = FenwickTree::new(n);
    let mut crossings = 0u64;
    for p in 0..n {
        // edges closing here leave the tree first, so that edges sharing
        // this position are never charged against each other
        for &l in &closing[p] {
            bit.add(l, -1);
        }
        for &l in &closing[p] {
            crossings += bit.range_sum(l + 1, p) as u64;
        }
        for &l in &opening[p] {
            bit.add(l, 1);
        }
    }
    crossings
}

fn ordered(a: Position, b: Position) -> (Position, Position) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

fn invert(pos: &[Position]) -> Vec<Vertex> {
    let mut inv = vec![0; pos.len()];
    for (v, &p) in pos.iter().enumerate() {
        inv[p] = v;
    }
    inv
}

/// Binary indexed tree over positions, with signed counts.
struct FenwickTree {
    tree: Vec<i64>,
}

impl FenwickTree {
    fn new(n: usize) -> Self {
        FenwickTree { tree: vec![0; n + 1] }
    }

    fn add(&mut self, index: usize, delta: i64) {
        let mut i = index + 1;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += i & i.wrapping_neg();
        }
    }

    /// Sum of the counts at indices in `[0, index]` (1-based internal).
    fn prefix_sum(&self, index: usize) -> i64 {
        let mut i = index + 1;
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i -= i & i.wrapping_neg();
        }
        sum
    }

    /// Sum of the counts at indices in `[from, to)`; zero when empty.
    fn range_sum(&self, from: usize, to: usize) -> i64 {
        if from >= to {
            return 0;
        }
        let high = self.prefix_sum(to - 1);
        let low = if from == 0 { 0 } else { self.prefix_sum(from - 1) };
        high - low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::UndirectedGraph;

    const ALL: [CrossingsAlgorithm; 4] = [
        CrossingsAlgorithm::BruteForce,
        CrossingsAlgorithm::DynamicProgramming,
        CrossingsAlgorithm::Ladder,
        CrossingsAlgorithm::StackBased,
    ];

    fn all_agree(g: &UndirectedGraph, arr: Option<&LinearArrangement>) -> u64 {
        let reference = num_crossings_algorithm(g, arr, CrossingsAlgorithm::BruteForce);
        for algo in ALL {
            assert_eq!(num_crossings_algorithm(g, arr, algo), reference, "{algo:?}");
        }
        reference
    }

    #[test]
    fn path_under_identity_has_no_crossings() {
        let mut g = UndirectedGraph::new(5);
        g.add_edges(&[(0, 1), (1, 2), (2, 3), (3, 4)], true, false).unwrap();
        assert_eq!(all_agree(&g, None), 0);
    }

    #[test]
    fn interleaved_pairs_cross() {
        // edges (0,2) and (1,3) cross under the identity
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(0, 2), (1, 3)], true, false).unwrap();
        assert_eq!(all_agree(&g, None), 1);
    }

    #[test]
    fn nested_pairs_do_not_cross() {
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(0, 3), (1, 2)], true, false).unwrap();
        assert_eq!(all_agree(&g, None), 0);
    }

    #[test]
    fn shared_endpoints_never_cross() {
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(0, 2), (2, 3), (1, 2)], true, false).unwrap();
        assert_eq!(all_agree(&g, None), 0);
    }

    #[test]
    fn star_rearranged() {
        let mut g = UndirectedGraph::new(6);
        g.add_edges(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)], true, false).unwrap();
        // all edges share the hub: never any crossing
        let arr = LinearArrangement::from_direct(vec![3, 0, 5, 1, 4, 2]).unwrap();
        assert_eq!(all_agree(&g, Some(&arr)), 0);
    }

    #[test]
    fn a_tree_with_crossings() {
        // tree edges: (0,3), (1,3), (2,4), (3,4) under identity positions
        // (0,3) x (2,4) interleave; (1,3) x (2,4) interleave
        let mut g = UndirectedGraph::new(5);
        g.add_edges(&[(0, 3), (1, 3), (2, 4), (3, 4)], true, false).unwrap();
        assert_eq!(all_agree(&g, None), 2);
    }

    #[test]
    fn agreement_on_many_arrangements() {
        // K4: dense enough to exercise every code path
        let mut g = UndirectedGraph::new(4);
        g.add_edges(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)], true, false).unwrap();

        let mut direct = vec![0, 1, 2, 3];
        loop {
            let arr = LinearArrangement::from_direct(direct.clone()).unwrap();
            // K4 always has exactly one pair of interleaving independent edges
            assert_eq!(all_agree(&g, Some(&arr)), 1);
            if !crate::sorting::next_permutation(&mut direct) {
                break;
            }
        }
    }
}
