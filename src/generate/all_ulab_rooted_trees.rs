//! Exhaustive enumeration of unlabelled rooted trees.

use crate::defs::Vertex;
use crate::graphs::RootedTree;

use super::{GeneratorSettings, TreeGenerator};

/// Enumerates the unlabelled rooted trees of `n` vertices, one per
/// isomorphism class, through canonical level sequences.
///
/// A level sequence lists the depth (root depth 1) of every vertex in
/// preorder; the canonical representative of a class is the
/// lexicographically largest sequence. The enumeration starts at the path
/// `1, 2, ..., n` and repeatedly applies the successor rule: find the last
/// position `p` of depth greater than 2, its most recent ancestor-level
/// occurrence `q`, and repeat the block `q..p` until the sequence is
/// filled. It ends at the star `1, 2, 2, ..., 2`.
///
/// The number of trees produced is `t_n` (OEIS A000081).
pub struct AllUlabRootedTrees {
    n: usize,
    /// Level sequence, 1-based: `levels[i]` is the depth of the `i`-th
    /// vertex in preorder; entry 0 is unused.
    levels: Vec<usize>,
    reached_end: bool,
    settings: GeneratorSettings,
}

impl AllUlabRootedTrees {
    /// Creates the enumerator; the first tree is immediately available.
    pub fn new(n: usize) -> Self {
        let mut generator = AllUlabRootedTrees {
            n,
            levels: Vec::new(),
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
}

impl TreeGenerator for AllUlabRootedTrees {
    type Tree = RootedTree;

    fn end(&self) -> bool {
        self.reached_end
    }

    fn next(&mut self) {
        if self.reached_end {
            return;
        }
        if self.n <= 2 {
            self.reached_end = true;
            return;
        }

        // last position deeper than 2
        let p = match (1..=self.n).rev().find(|&i| self.levels[i] > 2) {
            Some(p) => p,
            None => {
                // current sequence is the star, the final tree
                self.reached_end = true;
                return;
            }
        };
        // previous occurrence of the parent depth
        let q = (1..p)
            .rev()
            .find(|&i| self.levels[i] == self.levels[p] - 1)
            .expect("a parent level precedes every deeper level");

        for i in p..=self.n {
            self.levels[i] = self.levels[i - (p - q)];
        }
    }

    fn reset(&mut self) {
        self.levels = (0..=self.n).collect();
        self.reached_end = self.n == 0;
    }

    fn get_tree(&mut self) -> RootedTree {
        let mut tree = rooted_tree_from_level_sequence(&self.levels, self.n);
        super::postprocess_rooted(&mut tree, &self.settings);
        tree
    }

    fn yield_tree(&mut self) -> RootedTree {
        let tree = self.get_tree();
        self.next();
        tree
    }
}

/// Builds the rooted tree of a 1-based level sequence: the parent of
/// vertex `i` is the most recent preceding vertex one level up.
pub(crate) fn rooted_tree_from_level_sequence(levels: &[usize], n: usize) -> RootedTree {
    let mut tree = RootedTree::new(n);
    if n == 0 {
        return tree;
    }

    let mut last_at_level: Vec<Vertex> = vec![0; n + 2];
    for i in 1..=n {
        let level = levels[i];
        if level > 1 {
            tree.add_edge_raw(last_at_level[level - 1], i - 1);
        }
        last_at_level[level] = i - 1;
    }
    tree.set_root(0).expect("vertex 0 exists");
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::Graph;

    #[test]
    fn counts_match_oeis_a000081() {
        for (n, expected) in [(1usize, 1u64), (2, 1), (3, 2), (4, 4), (5, 9), (6, 20), (7, 48)] {
            let mut generator = AllUlabRootedTrees::new(n);
            let mut count = 0u64;
            while !generator.end() {
                let tree = generator.yield_tree();
                assert!(tree.is_rooted_tree());
                assert!(tree.is_orientation_valid());
                assert_eq!(tree.num_nodes(), n);
                count += 1;
            }
            assert_eq!(count, expected, "n = {n}");
        }
    }

    #[test]
    fn enumeration_of_four_vertices() {
        // sequences 1234, 1233, 1232, 1222: path, fork at depth 2,
        // depth-3 chain with a second child of the root, star
        let mut generator = AllUlabRootedTrees::new(4);
        let mut degrees_of_root = Vec::new();
        while !generator.end() {
            let tree = generator.yield_tree();
            degrees_of_root.push(tree.out_degree(tree.root().unwrap()));
        }
        assert_eq!(degrees_of_root, vec![1, 1, 2, 3]);
    }
}
