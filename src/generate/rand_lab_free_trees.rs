//! Uniformly random labelled free trees.

use rand::Rng;
use rand_pcg::Pcg64;

use crate::graphs::FreeTree;

use super::{from_prufer_sequence, seeded_rng, GeneratorSettings, TreeGenerator};

/// Draws labelled free trees of `n` vertices uniformly at random by
/// decoding a uniform Prüfer sequence, in O(n) per tree.
///
/// Each sample consumes exactly `n − 2` uniform draws in `[0, n)`
/// (none for `n ≤ 2`).
pub struct RandLabFreeTrees {
    n: usize,
    rng: Pcg64,
    sequence: Vec<usize>,
    settings: GeneratorSettings,
}

impl RandLabFreeTrees {
    /// Creates the sampler. Seed 0 draws entropy from the operating
    /// system.
    pub fn new(n: usize, seed: u64) -> Self {
        RandLabFreeTrees {
            n,
            rng: seeded_rng(seed),
            sequence: vec![0; n.saturating_sub(2)],
            settings: GeneratorSettings::default(),
        }
    }

    /// Re-initializes the sampler with a new size and seed.
    pub fn init(&mut self, n: usize, seed: u64) {
        self.n = n;
        self.rng = seeded_rng(seed);
        self.sequence = vec![0; n.saturating_sub(2)];
    }

    /// The postprocessing switches of this generator.
    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg64 {
        &mut self.rng
    }

    pub(crate) fn draw_tree(&mut self) -> FreeTree {
        for slot in self.sequence.iter_mut() {
            *slot = self.rng.gen_range(0..self.n);
        }
        from_prufer_sequence(&self.sequence, self.n)
    }
}

impl TreeGenerator for RandLabFreeTrees {
    type Tree = FreeTree;

    fn end(&self) -> bool {
        false
    }

    fn next(&mut self) {}

    fn reset(&mut self) {}

    fn get_tree(&mut self) -> FreeTree {
        let mut tree = self.draw_tree();
        super::postprocess_free(&mut tree, &self.settings);
        tree
    }

    fn yield_tree(&mut self) -> FreeTree {
        self.get_tree()
    }
}
