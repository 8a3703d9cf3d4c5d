//! Uniformly random unlabelled free trees (Wilf's procedure).

use std::collections::BTreeMap;

use rand::Rng;

use crate::graphs::{FreeTree, UndirectedGraph};
use crate::numeric::Integer;

use super::ranrut::RanrutCore;
use super::{GeneratorSettings, TreeGenerator};

/// Draws unlabelled free trees of `n` vertices uniformly at random, one
/// isomorphism class at a time, following Wilf's centroid decomposition.
///
/// A free tree either has a single centroid vertex — then it is a root
/// with a forest of subtrees of at most `⌊(n−1)/2⌋` vertices each — or,
/// for even `n`, a centroid edge joining two rooted halves of `n/2`
/// vertices. The sampler first decides between the two shapes with
/// probability proportional to their counts (`a(n−1, ⌊(n−1)/2⌋)` restricted
/// forests versus `t_{n/2}(t_{n/2}+1)/2` unordered pairs), then samples the
/// shape: the forest through the restricted `(j, d)` recursion, the
/// bicentroidal pair through *ranrut* with the equal-pair correction
/// (the second half duplicates the first with probability
/// `1/(t_{n/2}+1)`).
///
/// The count caches (`t_n` and the forest table `a(m, q)`) grow
/// monotonically across calls; [`clear`](Self::clear) releases them.
pub struct RandUlabFreeTrees {
    core: RanrutCore,
    /// Forest counts `a(m, q)`: rooted forests of `m` vertices whose
    /// components have at most `q` vertices each.
    alpha: BTreeMap<(usize, usize), Integer>,
    settings: GeneratorSettings,
}

impl RandUlabFreeTrees {
    /// Creates the sampler. Seed 0 draws entropy from the operating
    /// system.
    pub fn new(n: usize, seed: u64) -> Self {
        RandUlabFreeTrees {
            core: RanrutCore::new(n, seed),
            alpha: BTreeMap::new(),
            settings: GeneratorSettings::default(),
        }
    }

    /// Re-initializes the sampler; required after [`clear`](Self::clear).
    pub fn init(&mut self, n: usize, seed: u64) {
        self.core.init(n, seed);
    }

    /// Releases the cached count tables. Call [`init`](Self::init) before
    /// the next use.
    pub fn clear(&mut self) {
        self.core.clear();
        self.alpha.clear();
    }

    /// The postprocessing switches of this generator.
    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }

    /// `a(m, q)` with memoization:
    /// `m · a(m, q) = Σ_{d ≤ q} Σ_{j·d ≤ m} d · t_d · a(m − jd, q)`.
    fn alpha_mq(&mut self, m: usize, q: usize) -> Integer {
        if m == 0 {
            return Integer::from(1u64);
        }
        if q == 0 {
            return Integer::zero();
        }
        if let Some(cached) = self.alpha.get(&(m, q)) {
            return cached.clone();
        }

        self.core.ensure_rn(q.min(m));
        let mut sum = Integer::zero();
        for d in 1..=q.min(m) {
            let td_times_d = &self.core.rn[d] * (d as u64);
            let mut jd = d;
            while jd <= m {
                let rest = self.alpha_mq(m - jd, q);
                sum += &td_times_d * &rest;
                jd += d;
            }
        }
        sum /= m as u64;
        self.alpha.insert((m, q), sum.clone());
        sum
    }

    /// The number of free trees of `n` vertices (OEIS A000055).
    fn num_free_trees(&mut self, n: usize) -> Integer {
        if n <= 1 {
            return Integer::from(1u64);
        }
        let mut count = self.alpha_mq(n - 1, (n - 1) / 2);
        if n % 2 == 0 {
            self.core.ensure_rn(n / 2);
            let th = self.core.rn[n / 2].clone();
            count += &th * &(&th + 1u64) / 2u64;
        }
        count
    }

    /// Chooses `(j, d)` for the restricted forest recursion, with
    /// probability `d · t_d · a(m − jd, q) / (m · a(m, q))`. One uniform
    /// real.
    fn choose_jd_restricted(&mut self, m: usize, q: usize) -> (usize, usize) {
        let total = self.alpha_mq(m, q);
        let r: f64 = self.core.rng.gen();
        let mut weight = (total * (m as u64)).to_f64() * r;

        let mut j = 1usize;
        let mut d = 1usize;
        let mut last = (1, 1);
        loop {
            if d > q {
                // floating-point slack exhausted the pairs
                return last;
            }
            if m < j * d {
                d += 1;
                j = 1;
                continue;
            }
            let rest = self.alpha_mq(m - j * d, q);
            let w = (&self.core.rn[d] * (d as u64) * &rest).to_f64();
            weight -= w;
            if w > 0.0 {
                last = (j, d);
            }
            if weight <= 0.0 {
                return (j, d);
            }
            j += 1;
        }
    }

    /// Builds a restricted forest of `m` vertices hanging off position 0,
    /// starting at position `nt`. Returns the next free position.
    fn forest(&mut self, m: usize, q: usize, nt: usize) -> usize {
        if m == 0 {
            return nt;
        }
        let (j, d) = self.choose_jd_restricted(m, q);

        // the rest of the forest first, then j copies of a d-vertex tree
        let next = self.forest(m - j * d, q, nt);
        let (root_d, mut next) = self.core.ranrut(d, 0, next);

        for copy in 1..j {
            self.core.head[next] = 0;
            for v in next + 1..next + d {
                self.core.head[v] = next + self.core.head[v - copy * d] - root_d;
            }
            next += d;
        }
        next
    }

    /// Builds a bicentroidal tree: two rooted halves of `n/2` vertices
    /// joined at their roots. Consumes the draws of two *ranrut* calls
    /// plus one uniform real for the equal-pair decision.
    fn bicentroidal(&mut self) {
        let half = self.core.n / 2;
        let (root_first, next) = self.core.ranrut(half, 0, 0);
        debug_assert_eq!(root_first, 0);

        self.core.ensure_rn(half);
        let t_half = self.core.rn[half].clone();
        let r: f64 = self.core.rng.gen();

        if r * (&t_half + 1u64).to_f64() < 1.0 {
            // duplicate the first half; this exact probability makes the
            // unordered pair uniform
            for v in next..next + half {
                self.core.head[v] = self.core.head[v - half] + half;
            }
            self.core.head[next] = root_first;
        } else {
            let (root_second, _) = self.core.ranrut(half, root_first, next);
            debug_assert_eq!(root_second, next);
        }
    }
}

impl TreeGenerator for RandUlabFreeTrees {
    type Tree = FreeTree;

    fn end(&self) -> bool {
        false
    }

    fn next(&mut self) {}

    fn reset(&mut self) {}

    fn get_tree(&mut self) -> FreeTree {
        let n = self.core.n;

        let mut graph = UndirectedGraph::new(n);
        match n {
            0 | 1 => {}
            2 => graph.add_edge_raw(0, 1),
            3 => {
                graph.add_edge_raw(0, 1);
                graph.add_edge_raw(1, 2);
            }
            _ => {
                // decide the centroid shape: one uniform real
                let free_count = self.num_free_trees(n);
                let r: f64 = self.core.rng.gen();

                let bicentroidal = if n % 2 == 0 {
                    let th = self.core.rn[n / 2].clone();
                    let pairs = &th * &(&th + 1u64) / 2u64;
                    r * free_count.to_f64() < pairs.to_f64()
                } else {
                    false
                };

                if bicentroidal {
                    self.bicentroidal();
                } else {
                    self.core.head[0] = 0;
                    let q = (n - 1) / 2;
                    let filled = self.forest(n - 1, q, 1);
                    debug_assert_eq!(filled, n);
                }
                for u in 1..n {
                    graph.add_edge_raw(self.core.head[u], u);
                }
            }
        }

        let mut tree = FreeTree::from_undirected_unchecked(graph);
        super::postprocess_free(&mut tree, &self.settings);
        tree
    }

    fn yield_tree(&mut self) -> FreeTree {
        self.get_tree()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::test_util::canonical_free;
    use crate::generate::{AllUlabFreeTrees, TreeGenerator};
    use crate::graphs::Graph;
    use std::collections::HashMap;

    #[test]
    fn forest_counts_match_known_values() {
        let mut generator = RandUlabFreeTrees::new(8, 1);
        // partitions of m into parts of size <= q, weighted by rooted
        // shapes: a(4, 2) = 3, a(6, 3) = 11
        assert_eq!(generator.alpha_mq(4, 2), 3u64);
        assert_eq!(generator.alpha_mq(6, 3), 11u64);
        // free tree counts (A000055)
        for (n, f) in [(4usize, 2u64), (5, 3), (6, 6), (7, 11), (8, 23), (9, 47), (10, 106)] {
            assert_eq!(generator.num_free_trees(n), f, "f_{n}");
        }
    }

    #[test]
    fn samples_are_valid_free_trees() {
        let mut generator = RandUlabFreeTrees::new(11, 13);
        for _ in 0..100 {
            let tree = generator.get_tree();
            assert!(tree.is_tree());
            assert_eq!(tree.num_nodes(), 11);
        }
    }

    #[test]
    fn all_classes_of_seven_vertices_appear_roughly_uniformly() {
        let classes: Vec<String> = {
            let mut enumerator = AllUlabFreeTrees::new(7);
            let mut cs = Vec::new();
            while !enumerator.end() {
                cs.push(canonical_free(&enumerator.yield_tree()));
            }
            cs
        };
        assert_eq!(classes.len(), 11);

        let samples = 22_000u64;
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut generator = RandUlabFreeTrees::new(7, 42);
        for _ in 0..samples {
            *counts.entry(canonical_free(&generator.get_tree())).or_insert(0) += 1;
        }

        let expected = samples as f64 / 11.0; // 2000
        for class in &classes {
            let observed = *counts.get(class).unwrap_or(&0) as f64;
            // ~4.5 sigma of a binomial with p = 1/11
            assert!(
                (observed - expected).abs() < 200.0,
                "class frequency {observed} too far from {expected}"
            );
        }
    }
}
