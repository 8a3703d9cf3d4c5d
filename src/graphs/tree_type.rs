//! Shape classification of free trees.
//!
//! A free tree can belong to several of the classic shape families at once
//! (every star is a caterpillar, every path is a caterpillar, ...), so the
//! classification is a set of flags, [`TreeTypeSet`], not a single value.

use crate::defs::Vertex;
use crate::graphs::{FreeTree, Graph};

/// The shape families recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeType {
    /// No vertices.
    Empty,
    /// A single vertex.
    Singleton,
    /// A path: no vertex of degree 3 or more.
    Linear,
    /// One hub adjacent to every other vertex.
    Star,
    /// A star with one of its edges subdivided.
    QuasiStar,
    /// Two adjacent hubs; every other vertex is a leaf.
    Bistar,
    /// Removing all leaves yields a path (possibly empty).
    Caterpillar,
    /// Exactly one vertex of degree 3 or more; every other vertex has
    /// degree at most 2 (paths glued at a single center).
    Spider,
}

/// Set of [`TreeType`] flags a tree satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeTypeSet {
    empty: bool,
    singleton: bool,
    linear: bool,
    star: bool,
    quasistar: bool,
    bistar: bool,
    caterpillar: bool,
    spider: bool,
}

impl TreeTypeSet {
    /// Whether the tree belongs to the family `t`.
    pub fn contains(&self, t: TreeType) -> bool {
        match t {
            TreeType::Empty => self.empty,
            TreeType::Singleton => self.singleton,
            TreeType::Linear => self.linear,
            TreeType::Star => self.star,
            TreeType::QuasiStar => self.quasistar,
            TreeType::Bistar => self.bistar,
            TreeType::Caterpillar => self.caterpillar,
            TreeType::Spider => self.spider,
        }
    }

    /// All families the tree belongs to.
    pub fn types(&self) -> Vec<TreeType> {
        use TreeType::*;
        [Empty, Singleton, Linear, Star, QuasiStar, Bistar, Caterpillar, Spider]
            .into_iter()
            .filter(|&t| self.contains(t))
            .collect()
    }
}

/// Classifies a free tree into its shape families.
///
/// The input must be an actual tree (`m = n - 1`); the caller is expected to
/// have validated this.
pub(crate) fn classify(tree: &FreeTree) -> TreeTypeSet {
    let n = tree.num_nodes();
    let mut set = TreeTypeSet::default();

    if n == 0 {
        set.empty = true;
        return set;
    }
    if n == 1 {
        set.singleton = true;
        return set;
    }

    let degrees: Vec<usize> = (0..n).map(|u| tree.degree(u)).collect();
    let internal: Vec<Vertex> = (0..n).filter(|&u| degrees[u] >= 2).collect();
    let max_degree = *degrees.iter().max().unwrap();

    set.linear = max_degree <= 2;
    set.star = internal.len() <= 1;

    // quasi star: degree multiset {n - 2, 2, 1, ..., 1}. The degree-2 vertex
    // is forced to be adjacent to the hub, so the multiset test suffices.
    if n >= 4 {
        let hubs = degrees.iter().filter(|&&d| d == n - 2).count();
        let deg2 = degrees.iter().filter(|&&d| d == 2).count();
        let leaves = degrees.iter().filter(|&&d| d == 1).count();
        set.quasistar = leaves == n - 2
            && ((n == 4 && deg2 == 2) || (n > 4 && hubs == 1 && deg2 == 1));
    }

    // bistar: at most two non-leaves, and if there are two they are adjacent
    set.bistar = match internal.as_slice() {
        [] | [_] => true,
        [u, v] => tree.has_edge(*u, *v),
        _ => false,
    };

    // caterpillar: the subgraph induced by the internal vertices is a path.
    // In a tree that subgraph is connected, so a degree bound is enough.
    set.caterpillar = internal.iter().all(|&u| {
        tree.neighbours(u).iter().filter(|&&v| degrees[v] >= 2).count() <= 2
    });

    set.spider = degrees.iter().filter(|&&d| d >= 3).count() == 1;

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::FreeTree;

    fn tree_from(n: usize, edges: &[(usize, usize)]) -> FreeTree {
        let mut t = FreeTree::new(n);
        t.add_edges(edges, true, false).unwrap();
        t
    }

    #[test]
    fn classifies_path() {
        let t = tree_from(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let set = classify(&t);
        assert!(set.contains(TreeType::Linear));
        assert!(set.contains(TreeType::Caterpillar));
        assert!(!set.contains(TreeType::Star));
        assert!(!set.contains(TreeType::Spider));
    }

    #[test]
    fn classifies_star() {
        let t = tree_from(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let set = classify(&t);
        assert!(set.contains(TreeType::Star));
        assert!(set.contains(TreeType::Bistar));
        assert!(set.contains(TreeType::Caterpillar));
        assert!(set.contains(TreeType::Spider));
        assert!(!set.contains(TreeType::Linear));
    }

    #[test]
    fn classifies_quasistar() {
        // hub 0 with leaves 1, 2; 3 subdivides the edge to 4
        let t = tree_from(5, &[(0, 1), (0, 2), (0, 3), (3, 4)]);
        let set = classify(&t);
        assert!(set.contains(TreeType::QuasiStar));
        assert!(set.contains(TreeType::Caterpillar));
        assert!(set.contains(TreeType::Spider));
        assert!(!set.contains(TreeType::Star));
    }

    #[test]
    fn classifies_spider_that_is_no_caterpillar() {
        // center 0 with three legs of length 2
        let t = tree_from(7, &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]);
        let set = classify(&t);
        assert!(set.contains(TreeType::Spider));
        assert!(!set.contains(TreeType::Caterpillar));
        assert!(!set.contains(TreeType::Bistar));
    }

    #[test]
    fn classifies_bistar() {
        // hubs 0 and 1
        let t = tree_from(6, &[(0, 1), (0, 2), (0, 3), (1, 4), (1, 5)]);
        let set = classify(&t);
        assert!(set.contains(TreeType::Bistar));
        assert!(set.contains(TreeType::Caterpillar));
        assert!(!set.contains(TreeType::Star));
        assert!(!set.contains(TreeType::Spider));
    }
}
