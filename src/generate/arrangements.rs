//! Enumeration and uniform sampling of the planar and projective
//! arrangements of a fixed tree.
//!
//! A projective arrangement of a rooted tree is determined by choosing,
//! for every vertex, a permutation of its *interval*: the vertex itself
//! together with the blocks of its children. There are
//! `Π_v (out_degree(v) + 1)!` of them. A planar arrangement of a free tree
//! is a projective arrangement of the tree rooted at the vertex in the
//! first position, with that root pinned leftmost within its own interval;
//! every rooting contributes exactly `Π_v degree(v)!` arrangements, for
//! `n · Π_v degree(v)!` in total.
//!
//! Enumeration is lexicographic over the tuple of per-vertex permutations
//! (vertex 0 most significant); sampling shuffles every interval
//! independently, which is uniform over the corresponding family.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg64;

use crate::defs::Vertex;
use crate::dmin::embed_intervals;
use crate::error::{Error, Result};
use crate::graphs::{FreeTree, Graph, RootedTree};
use crate::linear_arrangement::LinearArrangement;
use crate::properties;
use crate::sorting::next_permutation;

use super::seeded_rng;

/// The per-vertex intervals of a rooting, plus the data needed to flatten
/// them.
struct Rooting {
    root: Vertex,
    sizes: Vec<u64>,
    intervals: Vec<Vec<Vertex>>,
}

impl Rooting {
    /// Rooting of a free tree: children via a traversal from `root`.
    fn of_free_tree(tree: &FreeTree, root: Vertex, pin_root: bool) -> Self {
        let n = tree.num_nodes();
        let sizes = properties::size_subtrees(tree, root);

        let mut intervals: Vec<Vec<Vertex>> = vec![Vec::new(); n];
        let mut visited = vec![false; n];
        let mut queue = std::collections::VecDeque::new();
        visited[root] = true;
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            intervals[u].push(u);
            for &v in tree.neighbours(u) {
                if !visited[v] {
                    visited[v] = true;
                    intervals[u].push(v);
                    queue.push_back(v);
                }
            }
        }
        let mut rooting = Rooting { root, sizes, intervals };
        rooting.first_permutations(pin_root);
        rooting
    }

    /// Rooting of an arborescence: children are the out-neighbours.
    fn of_rooted_tree(tree: &RootedTree) -> Self {
        let n = tree.num_nodes();
        let root = tree.root().expect("validated by the caller");
        let sizes = properties::size_subtrees(tree, root);

        let intervals: Vec<Vec<Vertex>> = (0..n)
            .map(|u| {
                let mut items = vec![u];
                items.extend_from_slice(tree.out_neighbours(u));
                items
            })
            .collect();
        let mut rooting = Rooting { root, sizes, intervals };
        rooting.first_permutations(false);
        rooting
    }

    /// Rewinds every interval to its lexicographically first permutation;
    /// with `pin_root` the root stays at the head of its interval.
    fn first_permutations(&mut self, pin_root: bool) {
        for v in 0..self.intervals.len() {
            if pin_root && v == self.root {
                self.intervals[v][1..].sort_unstable();
            } else {
                self.intervals[v].sort_unstable();
            }
        }
    }

    /// Advances the odometer of permutations; vertex 0 is the most
    /// significant digit. Returns false when the tuple wrapped around.
    fn advance(&mut self, pin_root: bool) -> bool {
        let n = self.intervals.len();
        let mut v = n;
        while v > 0 {
            v -= 1;
            let advanced = if pin_root && v == self.root {
                next_permutation(&mut self.intervals[v][1..])
            } else {
                next_permutation(&mut self.intervals[v])
            };
            if advanced {
                return true;
            }
            // this interval wrapped to its first permutation; carry on
        }
        false
    }

    fn arrangement(&self) -> LinearArrangement {
        if self.intervals.is_empty() {
            return LinearArrangement::new();
        }
        embed_intervals(&self.intervals, &self.sizes, self.root)
    }

    fn shuffle(&mut self, rng: &mut Pcg64, pin_root: bool) {
        for v in 0..self.intervals.len() {
            if pin_root && v == self.root {
                self.intervals[v][1..].shuffle(rng);
            } else {
                self.intervals[v].shuffle(rng);
            }
        }
    }
}

// =========================================================================
// exhaustive enumeration

/// Enumerates all projective arrangements of a rooted tree.
///
/// # Example
/// ```
/// use linarr::generate::AllProjectiveArrangements;
/// use linarr::graphs::{FreeTree, RootedTree};
///
/// let mut star = FreeTree::new(3);
/// star.add_edges(&[(0, 1), (0, 2)], true, false).unwrap();
/// let rooted = RootedTree::from_free_tree(&star, 0).unwrap();
///
/// let mut gen = AllProjectiveArrangements::new(&rooted).unwrap();
/// let mut count = 0;
/// while !gen.end() {
///     let _arr = gen.yield_arrangement();
///     count += 1;
/// }
/// assert_eq!(count, 6); // (2 + 1)! orderings of the root interval
/// ```
pub struct AllProjectiveArrangements {
    rooting: Rooting,
    reached_end: bool,
}

impl AllProjectiveArrangements {
    /// Creates the enumerator; the first arrangement is immediately
    /// available.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the input is not a valid rooted tree in
    /// arborescence orientation.
    pub fn new(tree: &RootedTree) -> Result<Self> {
        if tree.num_nodes() > 0 && (!tree.is_rooted_tree() || !tree.is_orientation_valid()) {
            return Err(Error::NotATree);
        }
        let rooting = if tree.num_nodes() == 0 {
            Rooting { root: 0, sizes: Vec::new(), intervals: Vec::new() }
        } else {
            Rooting::of_rooted_tree(tree)
        };
        Ok(AllProjectiveArrangements { rooting, reached_end: false })
    }

    /// Whether the enumeration is exhausted.
    pub fn end(&self) -> bool {
        self.reached_end
    }

    /// Advances to the next arrangement.
    pub fn next(&mut self) {
        if self.reached_end {
            return;
        }
        if !self.rooting.advance(false) {
            self.reached_end = true;
        }
    }

    /// Returns to the first arrangement.
    pub fn reset(&mut self) {
        self.rooting.first_permutations(false);
        self.reached_end = false;
    }

    /// The current arrangement.
    pub fn get_arrangement(&self) -> LinearArrangement {
        self.rooting.arrangement()
    }

    /// The current arrangement, advancing the enumeration.
    pub fn yield_arrangement(&mut self) -> LinearArrangement {
        let arrangement = self.get_arrangement();
        self.next();
        arrangement
    }
}

/// Enumerates all planar arrangements of a free tree: for every rooting,
/// the projective arrangements with the root pinned leftmost.
pub struct AllPlanarArrangements {
    tree: FreeTree,
    rooting: Rooting,
    reached_end: bool,
}

impl AllPlanarArrangements {
    /// Creates the enumerator; the first arrangement is immediately
    /// available.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the input is not a single tree.
    pub fn new(tree: &FreeTree) -> Result<Self> {
        if !tree.is_tree() {
            return Err(Error::NotATree);
        }
        let rooting = if tree.num_nodes() == 0 {
            Rooting { root: 0, sizes: Vec::new(), intervals: Vec::new() }
        } else {
            Rooting::of_free_tree(tree, 0, true)
        };
        Ok(AllPlanarArrangements { tree: tree.clone(), rooting, reached_end: false })
    }

    /// Whether the enumeration is exhausted.
    pub fn end(&self) -> bool {
        self.reached_end
    }

    /// Advances to the next arrangement.
    pub fn next(&mut self) {
        if self.reached_end {
            return;
        }
        if self.rooting.advance(true) {
            return;
        }
        // all permutations of this rooting seen; move to the next root
        let next_root = self.rooting.root + 1;
        if next_root >= self.tree.num_nodes() {
            self.reached_end = true;
        } else {
            self.rooting = Rooting::of_free_tree(&self.tree, next_root, true);
        }
    }

    /// Returns to the first arrangement.
    pub fn reset(&mut self) {
        if self.tree.num_nodes() > 0 {
            self.rooting = Rooting::of_free_tree(&self.tree, 0, true);
        }
        self.reached_end = false;
    }

    /// The current arrangement.
    pub fn get_arrangement(&self) -> LinearArrangement {
        self.rooting.arrangement()
    }

    /// The current arrangement, advancing the enumeration.
    pub fn yield_arrangement(&mut self) -> LinearArrangement {
        let arrangement = self.get_arrangement();
        self.next();
        arrangement
    }
}

// =========================================================================
// uniform sampling

/// Draws projective arrangements of a rooted tree uniformly at random:
/// one independent uniform permutation per vertex interval.
pub struct RandProjectiveArrangements {
    rooting: Rooting,
    rng: Pcg64,
}

impl RandProjectiveArrangements {
    /// Creates the sampler. Seed 0 draws entropy from the operating
    /// system.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the input is not a valid rooted tree in
    /// arborescence orientation.
    pub fn new(tree: &RootedTree, seed: u64) -> Result<Self> {
        if tree.num_nodes() > 0 && (!tree.is_rooted_tree() || !tree.is_orientation_valid()) {
            return Err(Error::NotATree);
        }
        let rooting = if tree.num_nodes() == 0 {
            Rooting { root: 0, sizes: Vec::new(), intervals: Vec::new() }
        } else {
            Rooting::of_rooted_tree(tree)
        };
        Ok(RandProjectiveArrangements { rooting, rng: seeded_rng(seed) })
    }

    /// Draws an arrangement. Consumes one shuffle per vertex.
    pub fn get_arrangement(&mut self) -> LinearArrangement {
        self.rooting.shuffle(&mut self.rng, false);
        self.rooting.arrangement()
    }

    /// Alias of [`get_arrangement`](Self::get_arrangement).
    pub fn yield_arrangement(&mut self) -> LinearArrangement {
        self.get_arrangement()
    }
}

/// Draws planar arrangements of a free tree uniformly at random: a
/// uniform root (pinned leftmost) plus independent uniform permutations,
/// which is uniform because every rooting contributes equally many planar
/// arrangements.
pub struct RandPlanarArrangements {
    tree: FreeTree,
    rng: Pcg64,
}

impl RandPlanarArrangements {
    /// Creates the sampler. Seed 0 draws entropy from the operating
    /// system.
    ///
    /// # Errors
    /// [`Error::NotATree`] if the input is not a single tree.
    pub fn new(tree: &FreeTree, seed: u64) -> Result<Self> {
        if !tree.is_tree() {
            return Err(Error::NotATree);
        }
        Ok(RandPlanarArrangements { tree: tree.clone(), rng: seeded_rng(seed) })
    }

    /// Draws an arrangement. Consumes one draw for the root and one
    /// shuffle per vertex.
    pub fn get_arrangement(&mut self) -> LinearArrangement {
        let n = self.tree.num_nodes();
        if n == 0 {
            return LinearArrangement::new();
        }
        let root = self.rng.gen_range(0..n);
        let mut rooting = Rooting::of_free_tree(&self.tree, root, true);
        rooting.shuffle(&mut self.rng, true);
        rooting.arrangement()
    }

    /// Alias of [`get_arrangement`](Self::get_arrangement).
    pub fn yield_arrangement(&mut self) -> LinearArrangement {
        self.get_arrangement()
    }
}
