//! Exhaustive enumeration of unlabelled free trees.

use crate::defs::Vertex;
use crate::graphs::{FreeTree, UndirectedGraph};

use super::{GeneratorSettings, TreeGenerator};

const INF: usize = usize::MAX;

/// Enumerates the unlabelled free trees of `n` vertices, one per
/// isomorphism class, via canonical level sequences (Wright, Richmond,
/// Odlyzko and McKay's refinement of the rooted enumeration).
///
/// The state is a level sequence `L` (depths in preorder, root depth 1)
/// together with the array `W` of predecessor positions and the
/// bookkeeping indices `p`, `q`, `h1`, `h2`, `r`, `c` of the successor
/// rule, which advances the sequence with a handful of fix-up branches.
/// The first sequence encodes the canonical free tree of `n` vertices (two
/// near-halves of a path hanging off the root); the last one is the star.
///
/// The number of trees produced is OEIS A000055.
pub struct AllUlabFreeTrees {
    n: usize,
    /// Level sequence, 1-based; entry 0 unused.
    levels: Vec<usize>,
    /// Predecessor positions, 1-based; entry 0 unused.
    pred: Vec<usize>,
    p: usize,
    q: usize,
    h1: usize,
    h2: usize,
    r: usize,
    c: usize,
    /// The current sequence is the final one.
    is_last: bool,
    reached_end: bool,
    settings: GeneratorSettings,
}

impl AllUlabFreeTrees {
    /// Creates the enumerator; the first tree is immediately available.
    pub fn new(n: usize) -> Self {
        let mut generator = AllUlabFreeTrees {
            n,
            levels: Vec::new(),
            pred: Vec::new(),
            p: 0,
            q: 0,
            h1: 0,
            h2: 0,
            r: 0,
            c: 0,
            is_last: false,
            reached_end: false,
            settings: GeneratorSettings::default(),
        };
        generator.reset();
        generator
    }

    /// The postprocessing switches of this generator.
    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }

    /// The successor rule, ported from the literature with its fix-up
    /// branches intact. Sets `is_last` when the new sequence is the final
    /// one.
    fn advance(&mut self) {
        let n = self.n;
        let levels = &mut self.levels;
        let pred = &mut self.pred;

        // the slack comparisons are over integers, possibly negative
        let tail = n as isize - self.h2 as isize;
        let gap = self.r as isize - self.h1 as isize;

        let mut fixit = false;
        if (self.c == n + 1)
            || (self.p == self.h2
                && ((levels[self.h1] == levels[self.h2] + 1 && tail > gap)
                    || (levels[self.h1] == levels[self.h2] && tail + 1 < gap)))
        {
            if levels[self.r] > 3 {
                self.p = self.r;
                self.q = pred[self.r];
                if self.h1 == self.r {
                    self.h1 -= 1;
                }
                fixit = true;
            } else {
                self.p = self.r;
                self.r -= 1;
                self.q = 2;
            }
        }

        let mut needr = false;
        let mut needc = false;
        let mut needh2 = false;

        if self.p <= self.h1 {
            self.h1 = self.p - 1;
        }
        if self.p <= self.r {
            needr = true;
        } else if self.p <= self.h2 {
            needh2 = true;
        } else if levels[self.h2] == levels[self.h1] - 1 && n as isize - self.h2 as isize == self.r as isize - self.h1 as isize {
            if self.p <= self.c {
                needc = true;
            }
        } else {
            self.c = INF;
        }

        let oldp = self.p;
        let delta = self.q as isize - self.p as isize;
        let old_lq = levels[self.q];
        let old_wq = pred[self.q];
        self.p = INF;

        for i in oldp..=n {
            let shifted = (i as isize + delta) as usize;
            levels[i] = levels[shifted];
            if levels[i] == 2 {
                pred[i] = 1;
            } else {
                self.p = i;
                if levels[i] == old_lq {
                    self.q = old_wq;
                } else {
                    self.q = (pred[shifted] as isize - delta) as usize;
                }
                pred[i] = self.q;
            }
            if needr && levels[i] == 2 {
                needr = false;
                needh2 = true;
                self.r = i - 1;
            }
            if needh2 && levels[i] <= levels[i - 1] && i > self.r + 1 {
                needh2 = false;
                self.h2 = i - 1;
                if levels[self.h2] == levels[self.h1] - 1 && n as isize - self.h2 as isize == self.r as isize - self.h1 as isize {
                    needc = true;
                } else {
                    self.c = INF;
                }
            }
            if needc {
                let mirror = (self.h1 as isize - self.h2 as isize + i as isize) as usize;
                if levels[i] != levels[mirror] - 1 {
                    needc = false;
                    self.c = i;
                } else {
                    self.c = i + 1;
                }
            }
        }

        if fixit {
            self.r = n - self.h1 + 1;
            for i in self.r + 1..=n {
                levels[i] = i - self.r + 1;
                pred[i] = i - 1;
            }
            pred[self.r + 1] = 1;
            self.h2 = n;
            self.p = n;
            self.q = self.p - 1;
            self.c = INF;
        } else {
            if self.p == INF {
                self.p = if levels[oldp - 1] != 2 { oldp - 1 } else { oldp - 2 };
                self.q = pred[self.p];
            }
            if needh2 {
                self.h2 = n;
                self.c = if levels[self.h2] == levels[self.h1] - 1 && self.h1 == self.r {
                    n + 1
                } else {
                    INF
                };
            }
        }

        self.is_last = self.q == 0;
    }
}

impl TreeGenerator for AllUlabFreeTrees {
    type Tree = FreeTree;

    fn end(&self) -> bool {
        self.reached_end
    }

    fn next(&mut self) {
        if self.reached_end {
            return;
        }
        if self.n <= 3 || self.is_last {
            // at most one tree exists up to n = 3; otherwise the current
            // sequence was flagged final by the previous advance
            self.reached_end = true;
            return;
        }
        self.advance();
    }

    fn reset(&mut self) {
        let n = self.n;
        self.reached_end = n == 0;
        self.is_last = false;
        self.levels = vec![0; n + 1];
        self.pred = vec![0; n + 1];

        if n <= 2 {
            return;
        }

        let k = n / 2 + 1;
        self.p = if n == 4 { 3 } else { n };
        self.q = n - 1;
        self.h1 = k;
        self.h2 = n;
        self.r = k;
        self.c = if n % 2 == 0 { n + 1 } else { INF };

        for i in 1..=k {
            self.pred[i] = i - 1;
            self.levels[i] = i;
        }
        self.pred[k + 1] = 1;
        self.levels[k + 1] = 2;
        for i in k + 2..=n {
            self.pred[i] = i - 1;
            self.levels[i] = i - k + 1;
        }
    }

    fn get_tree(&mut self) -> FreeTree {
        let mut tree = free_tree_from_level_sequence(&self.levels, self.n);
        super::postprocess_free(&mut tree, &self.settings);
        tree
    }

    fn yield_tree(&mut self) -> FreeTree {
        let tree = self.get_tree();
        self.next();
        tree
    }
}

/// Builds the free tree of a 1-based level sequence.
fn free_tree_from_level_sequence(levels: &[usize], n: usize) -> FreeTree {
    let mut graph = UndirectedGraph::new(n);
    match n {
        0 | 1 => {}
        2 => graph.add_edge_raw(0, 1),
        _ => {
            let mut last_at_level: Vec<Vertex> = vec![0; n + 2];
            for i in 1..=n {
                let level = levels[i];
                if level > 1 {
                    graph.add_edge_raw(last_at_level[level - 1], i - 1);
                }
                last_at_level[level] = i - 1;
            }
        }
    }
    FreeTree::from_undirected_unchecked(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::Graph;

    #[test]
    fn counts_match_oeis_a000055() {
        for (n, expected) in
            [(1usize, 1u64), (2, 1), (3, 1), (4, 2), (5, 3), (6, 6), (7, 11), (8, 23), (9, 47)]
        {
            let mut generator = AllUlabFreeTrees::new(n);
            let mut count = 0u64;
            while !generator.end() {
                let tree = generator.yield_tree();
                assert!(tree.is_tree(), "n = {n}, tree {count}");
                assert_eq!(tree.num_nodes(), n);
                count += 1;
            }
            assert_eq!(count, expected, "n = {n}");
        }
    }

    #[test]
    fn trees_are_pairwise_non_isomorphic() {
        for n in 4..=8 {
            let mut generator = AllUlabFreeTrees::new(n);
            let mut seen = std::collections::HashSet::new();
            while !generator.end() {
                let tree = generator.yield_tree();
                assert!(
                    seen.insert(crate::generate::test_util::canonical_free(&tree)),
                    "isomorphic duplicate at n = {n}"
                );
            }
        }
    }
}
