//! Uniformly random unlabelled rooted trees.

use crate::graphs::RootedTree;

use super::ranrut::RanrutCore;
use super::{GeneratorSettings, TreeGenerator};

/// Draws unlabelled rooted trees of `n` vertices uniformly at random, one
/// isomorphism class at a time, with the *ranrut* procedure of Nijenhuis
/// and Wilf.
///
/// The recursion picks a pair `(j, d)` with probability
/// `d · t_{n−jd} · t_d / ((n−1) · t_n)`, builds a tree `T'` of `n − jd`
/// vertices and a tree `T''` of `d` vertices, and attaches `j` copies of
/// `T''` to the root of `T'`. The big-integer table of `t_n` grows
/// monotonically across calls and is only released by
/// [`clear`](Self::clear).
///
/// Each sample consumes one uniform real per recursion level of more than
/// two vertices. The produced tree is rooted at vertex 0 in arborescence
/// orientation.
pub struct RandUlabRootedTrees {
    core: RanrutCore,
    settings: GeneratorSettings,
}

impl RandUlabRootedTrees {
    /// Creates the sampler. Seed 0 draws entropy from the operating
    /// system.
    pub fn new(n: usize, seed: u64) -> Self {
        RandUlabRootedTrees {
            core: RanrutCore::new(n, seed),
            settings: GeneratorSettings::default(),
        }
    }

    /// Re-initializes the sampler; required after [`clear`](Self::clear).
    pub fn init(&mut self, n: usize, seed: u64) {
        self.core.init(n, seed);
    }

    /// Releases the cached count table (back to its constant prefix).
    /// Call [`init`](Self::init) before the next use.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// The postprocessing switches of this generator.
    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }
}

impl TreeGenerator for RandUlabRootedTrees {
    type Tree = RootedTree;

    fn end(&self) -> bool {
        false
    }

    fn next(&mut self) {}

    fn reset(&mut self) {}

    fn get_tree(&mut self) -> RootedTree {
        let n = self.core.n;
        let mut tree = RootedTree::new(n);
        if n == 0 {
            return tree;
        }
        if n > 1 {
            self.core.ranrut(n, 0, 0);
            for u in 1..n {
                // orient edges away from the root at position 0
                tree.add_edge_raw(self.core.head[u], u);
            }
        }
        tree.set_root(0).expect("vertex 0 exists");
        super::postprocess_rooted(&mut tree, &self.settings);
        tree
    }

    fn yield_tree(&mut self) -> RootedTree {
        self.get_tree()
    }
}
