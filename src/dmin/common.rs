//! Machinery shared by the unconstrained MinLA solvers.
//!
//! Both solvers work on the tree rooted at a reference vertex, with the
//! child subtrees ordered non-increasingly by size, and search for the
//! split indices `q` (unanchored) and `p` (anchored) of the corrected
//! algorithms. The searches return `None` when no feasible split exists,
//! which is distinct from a split at index 0; the solvers then fall back to
//! detaching the largest subtree.

use crate::defs::Vertex;
use crate::graphs::FreeTree;
use crate::properties;
use crate::sorting::{counting_sort, SortOrder};

/// A subtree in an ordering: `(size, root of the subtree)`.
pub(crate) type SizeVertex = (u64, Vertex);

/// How a subtree is attached to the rest of the arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// Free on both sides.
    None,
    /// The anchoring edge leaves towards lower positions.
    Left,
    /// The anchoring edge leaves towards higher positions.
    Right,
}

/// The children of `u` in the component of `u`, ordered non-increasingly
/// by subtree size; ties are broken by ascending child identifier.
pub(crate) fn size_ordering(tree: &FreeTree, u: Vertex) -> Vec<SizeVertex> {
    let sizes = properties::size_subtrees(tree, u);

    let mut ordering: Vec<SizeVertex> =
        tree.neighbours(u).iter().map(|&v| (sizes[v], v)).collect();
    // fix the tie order before the stable sort by size
    ordering.sort_unstable_by_key(|&(_, v)| v);

    let max_size = ordering.iter().map(|&(s, _)| s).max().unwrap_or(0);
    counting_sort(&mut ordering, max_size as usize, SortOrder::Decreasing, |&(s, _)| {
        s as usize
    });
    ordering
}

/// The split index `q` for an unanchored tree of `n` vertices, or `None`
/// when every candidate fails the threshold.
pub(crate) fn calculate_q(n: u64, ordering: &[SizeVertex]) -> Option<u64> {
    debug_assert!(!ordering.is_empty());

    let k = ordering.len() as u64 - 1;
    let t_0 = ordering[0].0;

    let mut q = k / 2;
    let sum: u64 = ordering[..=(2 * q) as usize].iter().map(|&(s, _)| s).sum();

    let mut z = n - sum;
    let mut tricky_formula = (t_0 + 2) / 2 + (z + 2) / 2;
    // t_0 >= t_1 >= ... >= t_k
    let mut t_2q = ordering[(2 * q) as usize].0;

    while t_2q <= tricky_formula {
        z += ordering[(2 * q) as usize].0;
        if q > 0 {
            z += ordering[(2 * q - 1) as usize].0;
        }
        tricky_formula = (t_0 + 2) / 2 + (z + 2) / 2;

        if q == 0 {
            return None;
        }
        q -= 1;
        t_2q = ordering[(2 * q) as usize].0;
    }
    Some(q)
}

/// The split index `p` for an anchored tree of `n` vertices, or `None`
/// when every candidate fails the threshold.
pub(crate) fn calculate_p(n: u64, ordering: &[SizeVertex]) -> Option<u64> {
    if ordering.len() < 2 {
        return None;
    }

    // number of subtrees is k + 1
    let k = ordering.len() as u64 - 1;
    let t_0 = ordering[0].0;

    let mut p = (k - 1) / 2;
    let sum: u64 = ordering[..=(2 * p + 1) as usize].iter().map(|&(s, _)| s).sum();

    let mut y = n - sum;
    let mut tricky_formula = (t_0 + 2) / 2 + (y + 2) / 2;
    let mut t_2p_plus_1 = ordering[(2 * p + 1) as usize].0;

    while t_2p_plus_1 <= tricky_formula {
        y += ordering[(2 * p + 1) as usize].0 + ordering[(2 * p) as usize].0;
        tricky_formula = (t_0 + 2) / 2 + (y + 2) / 2;

        if p == 0 {
            return None;
        }
        p -= 1;
        t_2p_plus_1 = ordering[(2 * p + 1) as usize].0;
    }
    Some(p)
}

/// The placement schedule over `2q + 1` subtrees when the `i`-th one takes
/// the central slot. Entry `j` (for `j >= 1`) is the ordering index placed
/// `j`-th; the schedule bounces between the outermost free slots.
pub(crate) fn schedule_q(q: u64, i: u64) -> Vec<usize> {
    fill_schedule((2 * q + 1) as usize, i)
}

/// The placement schedule over `2p + 2` subtrees when the `i`-th one takes
/// the central slot.
pub(crate) fn schedule_p(p: u64, i: u64) -> Vec<usize> {
    fill_schedule((2 * p + 2) as usize, i)
}

fn fill_schedule(len: usize, skip: u64) -> Vec<usize> {
    let mut v = vec![0usize; len];
    let mut pos = len - 1;
    let mut right_pos = pos;
    let mut left_pos = 1;

    let mut j = 0u64;
    while (j as usize) < len {
        if j == skip {
            j += 1;
        } else {
            v[pos] = j as usize;
            if pos > left_pos {
                right_pos -= 1;
                pos = left_pos;
            } else {
                left_pos += 1;
                pos = right_pos;
            }
            j += 1;
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::FreeTree;

    #[test]
    fn ordering_is_non_increasing_with_ascending_ties() {
        // star with one longer arm: subtree sizes 2, 1, 1
        let mut t = FreeTree::new(5);
        t.add_edges(&[(0, 1), (0, 2), (0, 3), (3, 4)], true, false).unwrap();
        let ord = size_ordering(&t, 0);
        assert_eq!(ord, vec![(2, 3), (1, 1), (1, 2)]);
    }

    #[test]
    fn q_search_fails_on_balanced_stars() {
        // all subtrees of size 1: no feasible split
        let mut t = FreeTree::new(4);
        t.add_edges(&[(0, 1), (0, 2), (0, 3)], true, false).unwrap();
        let ord = size_ordering(&t, 0);
        assert_eq!(calculate_q(4, &ord), None);
    }

    #[test]
    fn p_search_needs_two_subtrees() {
        assert_eq!(calculate_p(3, &[(2, 1)]), None);
    }

    #[test]
    fn schedules_bounce_outside_in() {
        // q = 1: slot 1 is placed first (left side), slot 2 second (right);
        // entry 0 is never read
        assert_eq!(schedule_q(1, 0), vec![0, 2, 1]);
        assert_eq!(schedule_q(1, 1), vec![0, 2, 0]);
        assert_eq!(schedule_q(1, 2), vec![0, 1, 0]);
        assert_eq!(schedule_p(1, 0), vec![0, 2, 3, 1]);
    }
}
