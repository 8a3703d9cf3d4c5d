//! Exhaustive enumeration of labelled rooted trees.

use crate::defs::Vertex;
use crate::graphs::RootedTree;

use super::{AllLabFreeTrees, GeneratorSettings, TreeGenerator};

/// Enumerates all `n · n^(n-2)` labelled rooted trees of `n` vertices: the
/// Cartesian product of the labelled free trees with the choice of root.
///
/// The root varies fastest: every rooting of a free tree is produced
/// before the underlying enumeration advances.
pub struct AllLabRootedTrees {
    n: usize,
    free_trees: AllLabFreeTrees,
    root: Vertex,
    settings: GeneratorSettings,
}

impl AllLabRootedTrees {
    /// Creates the enumerator; the first tree is immediately available.
    pub fn new(n: usize) -> Self {
        let mut free_trees = AllLabFreeTrees::new(n);
        // postprocessing happens on the rooted result only
        *free_trees.settings_mut() = GeneratorSettings::none();
        AllLabRootedTrees {
            n,
            free_trees,
            root: 0,
            settings: GeneratorSettings::default(),
        }
    }

    /// The postprocessing switches of this generator.
    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }
}

impl TreeGenerator for AllLabRootedTrees {
    type Tree = RootedTree;

    fn end(&self) -> bool {
        self.free_trees.end()
    }

    fn next(&mut self) {
        if self.end() {
            return;
        }
        self.root += 1;
        if self.root >= self.n {
            self.root = 0;
            self.free_trees.next();
        }
    }

    fn reset(&mut self) {
        self.free_trees.reset();
        self.root = 0;
    }

    fn get_tree(&mut self) -> RootedTree {
        let free = self.free_trees.get_tree();
        let mut tree = RootedTree::from_free_tree(&free, self.root)
            .expect("enumerated free trees are valid");
        super::postprocess_rooted(&mut tree, &self.settings);
        tree
    }

    fn yield_tree(&mut self) -> RootedTree {
        let tree = self.get_tree();
        self.next();
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::Graph;

    #[test]
    fn counts_are_n_times_cayley() {
        for (n, expected) in [(1usize, 1u64), (2, 2), (3, 9), (4, 64)] {
            let mut generator = AllLabRootedTrees::new(n);
            let mut count = 0u64;
            while !generator.end() {
                let tree = generator.yield_tree();
                assert!(tree.is_rooted_tree());
                assert!(tree.is_orientation_valid());
                count += 1;
            }
            assert_eq!(count, expected, "n = {n}");
        }
    }

    #[test]
    fn every_rooting_appears() {
        let mut generator = AllLabRootedTrees::new(3);
        let mut seen = std::collections::HashSet::new();
        while !generator.end() {
            let tree = generator.yield_tree();
            let mut edges: Vec<_> = tree.edges().collect();
            edges.sort_unstable();
            assert!(seen.insert((tree.root().unwrap(), edges)));
        }
        assert_eq!(seen.len(), 9);
    }
}
