//! Exhaustive enumeration and uniform random generation of trees, and of
//! planar/projective arrangements of a fixed tree.
//!
//! # Generators of trees
//! Every tree generator implements [`TreeGenerator`]: after construction
//! the first tree is already available from
//! [`get_tree`](TreeGenerator::get_tree); [`next`](TreeGenerator::next)
//! advances, [`end`](TreeGenerator::end) signals exhaustion,
//! [`reset`](TreeGenerator::reset) restarts, and
//! [`yield_tree`](TreeGenerator::yield_tree) combines retrieval with
//! advancement. Random generators never exhaust: `next` is a no-op and
//! every retrieval draws a fresh tree.
//!
//! ```
//! use linarr::generate::{AllLabFreeTrees, TreeGenerator};
//!
//! let mut count = 0;
//! let mut generator = AllLabFreeTrees::new(4);
//! while !generator.end() {
//!     let _tree = generator.yield_tree();
//!     count += 1;
//! }
//! assert_eq!(count, 16); // Cayley: 4^(4-2)
//! ```
//!
//! # Postprocessing
//! Each returned tree is adjusted according to the generator's
//! [`GeneratorSettings`]: normalization, subtree sizes (rooted trees), and
//! shape classification.
//!
//! # Determinism
//! Exhaustive generators produce the same sequence on every run. Random
//! generators are seeded (seed 0 draws entropy from the operating system)
//! and document exactly how many values they consume per tree.

mod all_lab_free_trees;
mod all_lab_rooted_trees;
mod all_ulab_free_trees;
mod all_ulab_rooted_trees;
mod arrangements;
mod rand_lab_free_trees;
mod rand_lab_rooted_trees;
mod rand_ulab_free_trees;
mod rand_ulab_rooted_trees;
mod ranrut;

pub use all_lab_free_trees::AllLabFreeTrees;
pub use all_lab_rooted_trees::AllLabRootedTrees;
pub use all_ulab_free_trees::AllUlabFreeTrees;
pub use all_ulab_rooted_trees::AllUlabRootedTrees;
pub use arrangements::{
    AllPlanarArrangements, AllProjectiveArrangements, RandPlanarArrangements,
    RandProjectiveArrangements,
};
pub use rand_lab_free_trees::RandLabFreeTrees;
pub use rand_lab_rooted_trees::RandLabRootedTrees;
pub use rand_ulab_free_trees::RandUlabFreeTrees;
pub use rand_ulab_rooted_trees::RandUlabRootedTrees;

use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::graphs::{FreeTree, RootedTree, UndirectedGraph};

/// Restartable generator of trees.
pub trait TreeGenerator {
    /// The kind of tree produced.
    type Tree;

    /// Whether the enumeration is exhausted. Always false for random
    /// generators.
    fn end(&self) -> bool;

    /// Advances to the next tree. No-op for random generators.
    fn next(&mut self);

    /// Returns to the first tree (exhaustive) or the initial state.
    fn reset(&mut self);

    /// Materializes the current tree (or draws one, for random
    /// generators) and applies the postprocessing actions.
    fn get_tree(&mut self) -> Self::Tree;

    /// Retrieves a tree and advances the generator.
    fn yield_tree(&mut self) -> Self::Tree;
}

/// Postprocessing switches applied by [`TreeGenerator::get_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Normalize the adjacency lists of the returned tree.
    pub normalize: bool,
    /// Compute the subtree sizes of returned rooted trees.
    pub calculate_size_subtrees: bool,
    /// Classify the shape of returned free trees.
    pub calculate_tree_type: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            normalize: true,
            calculate_size_subtrees: true,
            calculate_tree_type: true,
        }
    }
}

impl GeneratorSettings {
    /// All postprocessing actions disabled.
    pub fn none() -> Self {
        GeneratorSettings {
            normalize: false,
            calculate_size_subtrees: false,
            calculate_tree_type: false,
        }
    }
}

pub(crate) fn postprocess_free(tree: &mut FreeTree, settings: &GeneratorSettings) {
    if settings.normalize {
        tree.normalize();
    }
    if settings.calculate_tree_type && tree.is_tree() {
        let _ = tree.calculate_tree_type();
    }
}

pub(crate) fn postprocess_rooted(tree: &mut RootedTree, settings: &GeneratorSettings) {
    if settings.normalize {
        tree.normalize();
    }
    if settings.calculate_size_subtrees && tree.is_rooted_tree() {
        let _ = tree.calculate_size_subtrees();
    }
}

/// Seeds the PRNG; seed 0 draws entropy from the operating system.
pub(crate) fn seeded_rng(seed: u64) -> Pcg64 {
    if seed == 0 {
        Pcg64::from_rng(rand::rngs::OsRng).expect("operating system entropy")
    } else {
        Pcg64::seed_from_u64(seed)
    }
}

/// Decodes a Prüfer sequence of length `n - 2` into a labelled free tree
/// in O(n).
///
/// The decoder walks a pointer over the vertices in increasing order,
/// always connecting the smallest available leaf.
pub(crate) fn from_prufer_sequence(sequence: &[usize], n: usize) -> FreeTree {
    let mut graph = UndirectedGraph::new(n);
    if n >= 2 {
        debug_assert_eq!(sequence.len(), n - 2);

        let mut degree = vec![1u32; n];
        for &s in sequence {
            degree[s] += 1;
        }

        let mut ptr = 0;
        while degree[ptr] != 1 {
            ptr += 1;
        }
        let mut leaf = ptr;

        for &s in sequence {
            graph.add_edge_raw(leaf, s);
            degree[s] -= 1;
            if degree[s] == 1 && s < ptr {
                // s became the smallest leaf; reuse it immediately
                leaf = s;
            } else {
                ptr += 1;
                while degree[ptr] != 1 {
                    ptr += 1;
                }
                leaf = ptr;
            }
        }
        graph.add_edge_raw(leaf, n - 1);
    }
    FreeTree::from_undirected_unchecked(graph)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prufer_decoding_small_cases() {
        // sequence (3, 3) over 4 vertices: star at 3
        let t = from_prufer_sequence(&[3, 3], 4);
        assert_eq!(t.degree(3), 3);
        assert!(t.is_tree());

        // sequence (1, 2) over 4 vertices: path 0-1-2-3
        let t = from_prufer_sequence(&[1, 2], 4);
        assert!(t.has_edge(0, 1) && t.has_edge(1, 2) && t.has_edge(2, 3));

        let t = from_prufer_sequence(&[], 2);
        assert!(t.has_edge(0, 1));
    }
}
