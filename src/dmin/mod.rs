//! Minimum linear arrangements (MinLA) of trees.
//!
//! Three variants, all returning the minimum cost together with an
//! arrangement achieving it:
//!
//! * [`unconstrained`] — over all `n!` arrangements; Shiloach's corrected
//!   divide and conquer or Chung's algorithm, selected by
//!   [`UnconstrainedAlgorithm`].
//! * [`planar`] — over arrangements without edge crossings
//!   (Hochberg–Stallmann with the Alemany–Esteban–Ferrer correction).
//! * [`projective`] — over planar arrangements that do not cover the root
//!   (Gildea–Temperley, same correction).
//!
//! The returned arrangements are optimal but not canonically oriented: a
//! mirrored arrangement has the same cost and either may be produced.
//!
//! # Example
//! ```
//! use linarr::dmin;
//! use linarr::graphs::FreeTree;
//! use linarr::metrics::sum_edge_lengths;
//!
//! let mut star = FreeTree::new(4);
//! star.add_edges(&[(0, 1), (0, 2), (0, 3)], true, false).unwrap();
//!
//! let (cost, arr) = dmin::unconstrained(&star, Default::default()).unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(sum_edge_lengths(&star, Some(&arr)), cost);
//! ```

mod chung;
mod common;
mod planar_hs;
mod projective;
mod shiloach;

pub(crate) use projective::embed_intervals;

use crate::error::{Error, Result};
use crate::graphs::{FreeTree, Graph, RootedTree};
use crate::linear_arrangement::LinearArrangement;

/// Algorithm selector for [`unconstrained`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnconstrainedAlgorithm {
    /// Shiloach's divide and conquer with the corrections from the
    /// literature. The default.
    #[default]
    Shiloach,
    /// Fan Chung's algorithm (1984), likewise corrected.
    Chung,
}

/// The minimum sum of edge lengths over all arrangements of a tree.
///
/// # Errors
/// [`Error::NotATree`] if `tree` is not a single tree.
pub fn unconstrained(
    tree: &FreeTree,
    algorithm: UnconstrainedAlgorithm,
) -> Result<(u64, LinearArrangement)> {
    if !tree.is_tree() {
        return Err(Error::NotATree);
    }
    match tree.num_nodes() {
        0 => return Ok((0, LinearArrangement::new())),
        1 => return Ok((0, LinearArrangement::identity(1))),
        _ => {}
    }
    Ok(match algorithm {
        UnconstrainedAlgorithm::Shiloach => shiloach::minimum_arrangement(tree),
        UnconstrainedAlgorithm::Chung => chung::minimum_arrangement(tree),
    })
}

/// The minimum sum of edge lengths over all planar arrangements (no edge
/// crossings) of a free tree.
///
/// The embedding iterates adjacencies in sorted order, so the input must
/// be normalized.
///
/// # Errors
/// * [`Error::NotATree`] if `tree` is not a single tree.
/// * [`Error::NotNormalized`] if the adjacency lists are not normalized.
pub fn planar(tree: &FreeTree) -> Result<(u64, LinearArrangement)> {
    if !tree.is_tree() {
        return Err(Error::NotATree);
    }
    match tree.num_nodes() {
        0 => return Ok((0, LinearArrangement::new())),
        1 => return Ok((0, LinearArrangement::identity(1))),
        _ => {}
    }
    if !tree.is_normalized() {
        return Err(Error::NotNormalized);
    }
    Ok(planar_hs::minimum_arrangement(tree))
}

/// The minimum sum of edge lengths over all projective arrangements
/// (planar, root uncovered) of a rooted tree.
///
/// The embedding iterates adjacencies in sorted order, so the input must
/// be normalized.
///
/// # Errors
/// * [`Error::NotATree`] if `tree` is not a valid rooted tree in
///   arborescence orientation.
/// * [`Error::NotNormalized`] if the adjacency lists are not normalized.
/// * [`Error::PrecomputationMissing`] if the subtree sizes have not been
///   computed (see [`RootedTree::calculate_size_subtrees`]).
pub fn projective(tree: &RootedTree) -> Result<(u64, LinearArrangement)> {
    match tree.num_nodes() {
        0 => return Ok((0, LinearArrangement::new())),
        1 => return Ok((0, LinearArrangement::identity(1))),
        _ => {}
    }
    if !tree.is_rooted_tree() || !tree.is_orientation_valid() {
        return Err(Error::NotATree);
    }
    if !tree.is_normalized() {
        return Err(Error::NotNormalized);
    }
    projective::minimum_arrangement(tree)
}
