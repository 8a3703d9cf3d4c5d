//! Minimum projective arrangement of a rooted tree (Gildea–Temperley with
//! the Alemany–Esteban–Ferrer correction).
//!
//! A tree-DP builds, for each vertex in post-order, an *interval*: the
//! relative order of the vertex and the blocks of its children. Children
//! are taken smallest subtree first and placed alternately to the left and
//! right of the vertex, inside-out, so the largest blocks end up
//! outermost. Where the vertex sits within its own interval, and on which
//! side the first child goes, depends on how the interval attaches to the
//! parent (its [`Place`]). The arrangement is obtained by flattening the
//! intervals from the root.

use crate::defs::{Position, Vertex};
use crate::error::Result;
use crate::graphs::{Graph, RootedTree};
use crate::linear_arrangement::LinearArrangement;
use crate::sorting::{counting_sort, SortOrder};

/// A child entry: `(child vertex, size of its subtree)`.
pub(crate) type ChildSize = (Vertex, u64);

/// Where an interval attaches to its parent's interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Place {
    /// The interval sits to the left of the parent.
    Left,
    /// The interval sits to the right of the parent.
    Right,
    /// The interval is the whole arrangement (top-level call only).
    Root,
}

/// Position of a vertex within its own interval of `size` slots.
fn pos_in_interval(size: usize, place: Place) -> usize {
    if size == 1 {
        return 0;
    }
    match place {
        Place::Left | Place::Root => size / 2,
        Place::Right => {
            if size % 2 == 1 {
                size / 2
            } else {
                size / 2 - 1
            }
        }
    }
}

/// Whether the first child is placed to the left of the vertex.
fn start_left(size: usize, place: Place) -> bool {
    match place {
        Place::Left => size % 2 == 0,
        Place::Right => size % 2 == 1,
        Place::Root => true,
    }
}

/// Per-vertex child lists annotated with subtree sizes, ordered
/// non-increasingly by size (ties by child identifier), built with one
/// global counting sort.
pub(crate) fn sorted_children_by_size(
    n: usize,
    edges: impl Iterator<Item = (Vertex, Vertex)>,
    sizes: &[u64],
) -> Vec<Vec<ChildSize>> {
    let mut annotated: Vec<(Vertex, Vertex, u64)> =
        edges.map(|(u, v)| (u, v, sizes[v])).collect();
    annotated.sort_unstable_by_key(|&(_, v, _)| v);
    counting_sort(&mut annotated, n, SortOrder::Decreasing, |&(_, _, s)| s as usize);

    let mut children: Vec<Vec<ChildSize>> = vec![Vec::new(); n];
    for (u, v, s) in annotated {
        children[u].push((v, s));
    }
    children
}

/// Builds the interval of `r` and returns the sum of the lengths of its
/// outgoing edges plus the length of the anchor towards its parent.
pub(crate) fn optimal_interval_of(
    children: &[Vec<ChildSize>],
    r: Vertex,
    place: Place,
    intervals: &mut [Vec<Vertex>],
) -> u64 {
    let interval_size = children[r].len() + 1;

    if interval_size == 1 {
        intervals[r] = vec![r];
        return 0;
    }

    if interval_size == 2 {
        let (child, _) = children[r][0];
        let (order, child_place) = if place == Place::Left {
            (vec![child, r], Place::Left)
        } else {
            (vec![r, child], Place::Right)
        };
        intervals[r] = order;
        return optimal_interval_of(children, child, child_place, intervals) + 1;
    }

    let root_pos = pos_in_interval(interval_size, place);
    let mut interval = vec![0; interval_size];
    interval[root_pos] = r;

    let mut left_pos = root_pos as isize - 1;
    let mut right_pos = root_pos + 1;
    let mut to_left = start_left(interval_size, place);

    // accumulated block sizes on each side of r
    let mut acc_left = 0u64;
    let mut acc_right = 0u64;

    // edge lengths from r to its children, and the recursive costs
    let mut d = 0u64;
    let mut cost = 0u64;

    // smallest child first, filling inside-out
    for &(child, child_size) in children[r].iter().rev() {
        let child_place = if to_left { Place::Left } else { Place::Right };
        cost += optimal_interval_of(children, child, child_place, intervals);

        d += if to_left { acc_left } else { acc_right } + 1;

        if to_left {
            interval[left_pos as usize] = child;
            left_pos -= 1;
            acc_left += child_size;
        } else {
            interval[right_pos] = child;
            right_pos += 1;
            acc_right += child_size;
        }
        to_left = !to_left;
    }
    intervals[r] = interval;

    // the anchor to the parent spans the blocks on the parent's side
    cost += match place {
        Place::Root => 0,
        Place::Left => acc_right,
        Place::Right => acc_left,
    };
    cost + d
}

/// Flattens the intervals into an arrangement, expanding each child block
/// recursively; the block of a vertex occupies `sizes[vertex]` contiguous
/// positions.
pub(crate) fn embed_intervals(
    intervals: &[Vec<Vertex>],
    sizes: &[u64],
    root: Vertex,
) -> LinearArrangement {
    let mut arrangement = LinearArrangement::zeroed(sizes.len());
    fill(intervals, sizes, root, 0, &mut arrangement);
    arrangement
}

fn fill(
    intervals: &[Vec<Vertex>],
    sizes: &[u64],
    r: Vertex,
    start: Position,
    arrangement: &mut LinearArrangement,
) {
    let mut cursor = start;
    for &item in &intervals[r] {
        if item == r {
            arrangement.assign(r, cursor);
            cursor += 1;
        } else {
            fill(intervals, sizes, item, cursor, arrangement);
            cursor += sizes[item] as usize;
        }
    }
}

/// Entry point for rooted trees of at least 2 vertices with precomputed
/// subtree sizes.
pub(crate) fn minimum_arrangement(tree: &RootedTree) -> Result<(u64, LinearArrangement)> {
    let n = tree.num_nodes();
    let root = tree.root().expect("validated by the caller");
    let sizes = tree.size_subtrees()?.to_vec();

    let children = sorted_children_by_size(
        n,
        (0..n).flat_map(|u| tree.out_neighbours(u).iter().map(move |&v| (u, v))),
        &sizes,
    );

    let mut intervals = vec![Vec::new(); n];
    let cost = optimal_interval_of(&children, root, Place::Root, &mut intervals);
    let arrangement = embed_intervals(&intervals, &sizes, root);
    Ok((cost, arrangement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::FreeTree;
    use crate::metrics::{is_projective, sum_edge_lengths};

    fn rooted(n: usize, edges: &[(usize, usize)], root: usize) -> RootedTree {
        let mut t = FreeTree::new(n);
        t.add_edges(edges, true, false).unwrap();
        let mut r = RootedTree::from_free_tree(&t, root).unwrap();
        r.calculate_size_subtrees().unwrap();
        r
    }

    #[test]
    fn star_of_six_costs_nine() {
        let t = rooted(6, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)], 0);
        let (cost, arr) = minimum_arrangement(&t).unwrap();
        assert_eq!(cost, 9);
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), 9);
        assert!(is_projective(&t, Some(&arr)));
    }

    #[test]
    fn path_rooted_at_an_end() {
        let t = rooted(5, &[(0, 1), (1, 2), (2, 3), (3, 4)], 0);
        let (cost, arr) = minimum_arrangement(&t).unwrap();
        assert_eq!(cost, 4);
        assert!(is_projective(&t, Some(&arr)));
    }

    #[test]
    fn path_rooted_in_the_middle() {
        let t = rooted(5, &[(0, 1), (1, 2), (2, 3), (3, 4)], 2);
        let (cost, arr) = minimum_arrangement(&t).unwrap();
        assert_eq!(cost, 4);
        assert!(is_projective(&t, Some(&arr)));
    }

    #[test]
    fn balanced_binary_tree_of_height_three() {
        // root 0, internal 1-6, leaves 7-14
        let edges: Vec<(usize, usize)> = (1..15).map(|v| ((v - 1) / 2, v)).collect();
        let t = rooted(15, &edges, 0);
        let (cost, arr) = minimum_arrangement(&t).unwrap();
        assert_eq!(cost, 24);
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), 24);
        assert!(is_projective(&t, Some(&arr)));
    }

    #[test]
    fn mixed_fan_prefers_small_children_near_the_root() {
        // root with a leaf child and two chains
        let t = rooted(6, &[(0, 1), (0, 2), (2, 3), (0, 4), (4, 5)], 0);
        let (cost, arr) = minimum_arrangement(&t).unwrap();
        assert_eq!(sum_edge_lengths(&t, Some(&arr)), cost);
        assert!(is_projective(&t, Some(&arr)));
        // optimum 3 2 1 0 4 5: the leaf sits next to the root, the chains
        // outside; degree 3 at the root forces one edge of length 2
        assert_eq!(cost, 6);
    }
}
