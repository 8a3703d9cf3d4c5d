//! Mean hierarchical distance of a rooted tree.

use crate::error::{Error, Result};
use crate::graphs::{Graph, RootedTree};
use crate::numeric::Rational;
use crate::traversal::Bfs;

/// The mean hierarchical distance: the average, over all vertices except
/// the root, of the distance from the root, as an exact rational.
///
/// # Errors
/// [`Error::NotATree`] if the input is not a valid rooted tree in
/// arborescence orientation, or has no edges (the mean is undefined).
pub fn mean_hierarchical_distance_rational(tree: &RootedTree) -> Result<Rational> {
    if !tree.is_rooted_tree() || !tree.is_orientation_valid() || tree.num_edges() == 0 {
        return Err(Error::NotATree);
    }

    let n = tree.num_nodes();
    let mut levels = vec![0u64; n];
    let mut sum_distances = 0u64;

    let mut bfs = Bfs::new(tree);
    bfs.set_process_neighbour(|_, s, t, _| {
        levels[t] = levels[s] + 1;
        sum_distances += levels[t];
    });
    bfs.start_at(tree.root().unwrap());
    drop(bfs);

    Ok(Rational::from_u64s(sum_distances, tree.num_edges() as u64))
}

/// The mean hierarchical distance as a floating point number.
///
/// # Errors
/// See [`mean_hierarchical_distance_rational`].
pub fn mean_hierarchical_distance(tree: &RootedTree) -> Result<f64> {
    Ok(mean_hierarchical_distance_rational(tree)?.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::FreeTree;

    #[test]
    fn mhd_of_a_path_and_a_star() {
        let mut p = FreeTree::new(4);
        p.add_edges(&[(0, 1), (1, 2), (2, 3)], true, false).unwrap();
        let rooted = RootedTree::from_free_tree(&p, 0).unwrap();
        // levels 1, 2, 3 over 3 edges
        assert_eq!(mean_hierarchical_distance_rational(&rooted).unwrap(), Rational::from_u64s(6, 3));

        let mut s = FreeTree::new(4);
        s.add_edges(&[(0, 1), (0, 2), (0, 3)], true, false).unwrap();
        let rooted = RootedTree::from_free_tree(&s, 0).unwrap();
        assert_eq!(mean_hierarchical_distance_rational(&rooted).unwrap(), Rational::from_u64s(3, 3));
    }

    #[test]
    fn mhd_undefined_without_edges() {
        let mut t = RootedTree::new(1);
        t.set_root(0).unwrap();
        assert!(mean_hierarchical_distance_rational(&t).is_err());
    }
}
