//! Uniformly random labelled rooted trees.

use rand::Rng;

use crate::graphs::RootedTree;

use super::{GeneratorSettings, RandLabFreeTrees, TreeGenerator};

/// Draws labelled rooted trees of `n` vertices uniformly at random: a
/// uniform labelled free tree plus a uniform root, in O(n) per tree.
///
/// Each sample consumes the `n − 2` draws of the free-tree sampler plus
/// one uniform draw in `[0, n)` for the root.
pub struct RandLabRootedTrees {
    free_trees: RandLabFreeTrees,
    n: usize,
    settings: GeneratorSettings,
}

impl RandLabRootedTrees {
    /// Creates the sampler. Seed 0 draws entropy from the operating
    /// system.
    pub fn new(n: usize, seed: u64) -> Self {
        let mut free_trees = RandLabFreeTrees::new(n, seed);
        *free_trees.settings_mut() = GeneratorSettings::none();
        RandLabRootedTrees { free_trees, n, settings: GeneratorSettings::default() }
    }

    /// Re-initializes the sampler with a new size and seed.
    pub fn init(&mut self, n: usize, seed: u64) {
        self.n = n;
        self.free_trees.init(n, seed);
    }

    /// The postprocessing switches of this generator.
    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }
}

impl TreeGenerator for RandLabRootedTrees {
    type Tree = RootedTree;

    fn end(&self) -> bool {
        false
    }

    fn next(&mut self) {}

    fn reset(&mut self) {}

    fn get_tree(&mut self) -> RootedTree {
        if self.n == 0 {
            return RootedTree::new(0);
        }
        let free = self.free_trees.draw_tree();
        let root = self.free_trees.rng_mut().gen_range(0..self.n);
        let mut tree = RootedTree::from_free_tree(&free, root).expect("sampled tree is valid");
        super::postprocess_rooted(&mut tree, &self.settings);
        tree
    }

    fn yield_tree(&mut self) -> RootedTree {
        self.get_tree()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn rooted_trees_of_three_vertices_are_uniform() {
        // 9 labelled rooted trees
        let samples = 18_000u64;
        let mut counts: HashMap<(usize, Vec<(usize, usize)>), u64> = HashMap::new();
        let mut generator = RandLabRootedTrees::new(3, 42);
        for _ in 0..samples {
            let tree = generator.get_tree();
            let mut edges: Vec<_> = tree.edges().collect();
            edges.sort_unstable();
            *counts.entry((tree.root().unwrap(), edges)).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 9);
        let expected = samples as f64 / 9.0; // 2000
        for (_, &observed) in counts.iter() {
            assert!((observed as f64 - expected).abs() < 200.0);
        }
    }
}
