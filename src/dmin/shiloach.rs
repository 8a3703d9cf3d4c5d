//! Shiloach's algorithm for the unconstrained minimum linear arrangement
//! of a tree (1979), in the corrected formulation.
//!
//! The structure mirrors the corrected divide and conquer: every call
//! first evaluates the *straight* recursion — detach the largest subtree
//! of the reference vertex and solve the two parts side by side — and
//! then, when the split-index search succeeds, the *balanced* recursion,
//! which surrounds the central tree with the largest subtrees placed
//! outside-in, trying every choice of central subtree. The minimum of the
//! evaluated recursions is optimal.
//!
//! The split searches return `None` when no feasible index exists; that
//! outcome must not be conflated with a split at index 0 (the historical
//! bug the corrections fix), which is why they yield an `Option`.

use crate::defs::{Position, Vertex};
use crate::graphs::{FreeTree, Graph};
use crate::linear_arrangement::LinearArrangement;
use crate::properties;

use super::common::{
    calculate_p, calculate_q, schedule_p, schedule_q, size_ordering, Anchor, SizeVertex,
};

/// Minimum cost and an optimal arrangement. `tree` must be a tree of at
/// least 2 vertices.
pub(crate) fn minimum_arrangement(tree: &FreeTree) -> (u64, LinearArrangement) {
    let n = tree.num_nodes();
    let mut scratch = tree.clone();
    scratch.normalize();

    let mut arrangement = LinearArrangement::zeroed(n);
    let cost = solve(&mut scratch, Anchor::None, 0, 0, n - 1, &mut arrangement);
    (cost, arrangement)
}

/// Solves the component of `root_or_anchor` into positions `start..=end`
/// and returns its minimum cost. The tree is restored before returning.
fn solve(
    t: &mut FreeTree,
    anchor: Anchor,
    root_or_anchor: Vertex,
    start: Position,
    end: Position,
    mla: &mut LinearArrangement,
) -> u64 {
    let size_tree = t.num_nodes_component(root_or_anchor) as u64;
    debug_assert!(size_tree > 0);

    if size_tree == 1 {
        mla.assign(root_or_anchor, start);
        return 0;
    }

    // reference vertex: the centroid when free, the anchor itself otherwise
    let v_star = if anchor == Anchor::None {
        properties::centroid_of_component(t, root_or_anchor).0
    } else {
        root_or_anchor
    };
    let ord = size_ordering(t, v_star);

    // straight recursion: T_0 to one side, the rest to the other
    let mut best = straight(t, anchor, v_star, &ord, start, end, size_tree, mla);

    // balanced recursion, when a feasible split index exists
    let split = if anchor == Anchor::None {
        calculate_q(size_tree, &ord)
    } else {
        calculate_p(size_tree, &ord)
    };
    if let Some(index) = split {
        let balanced_cost = balanced(t, anchor, v_star, &ord, index, start, end, size_tree, best, mla);
        best = best.min(balanced_cost);
    }
    best
}

/// Detaches the largest subtree `T_0` and solves both parts, anchored
/// towards each other.
#[allow(clippy::too_many_arguments)]
fn straight(
    t: &mut FreeTree,
    anchor: Anchor,
    v_star: Vertex,
    ord: &[SizeVertex],
    start: Position,
    end: Position,
    size_tree: u64,
    mla: &mut LinearArrangement,
) -> u64 {
    let (n_0, t_0) = ord[0];
    debug_assert!(v_star != t_0);

    t.remove_edge_raw(v_star, t_0);
    let cost = match anchor {
        Anchor::None => {
            let c1 = solve(t, Anchor::Right, t_0, start, start + n_0 as usize - 1, mla);
            let c2 = solve(t, Anchor::Left, v_star, start + n_0 as usize, end, mla);
            c1 + c2 + 1
        }
        Anchor::Left => {
            let c1 = solve(t, Anchor::None, v_star, start, end - n_0 as usize, mla);
            let c2 = solve(t, Anchor::Left, t_0, end - n_0 as usize + 1, end, mla);
            c1 + c2 + size_tree - n_0
        }
        Anchor::Right => {
            let c1 = solve(t, Anchor::Right, t_0, start, start + n_0 as usize - 1, mla);
            let c2 = solve(t, Anchor::None, v_star, start + n_0 as usize, end, mla);
            c1 + c2 + size_tree - n_0
        }
    };
    t.add_edge_raw(v_star, t_0);
    cost
}

/// Surrounds the central tree with the `2q + 1` (unanchored) or `2p + 2`
/// (anchored) largest subtrees, trying every choice of central subtree and
/// keeping the best layout found so far in `mla` when it beats
/// `best_so_far`.
#[allow(clippy::too_many_arguments)]
fn balanced(
    t: &mut FreeTree,
    anchor: Anchor,
    v_star: Vertex,
    ord: &[SizeVertex],
    split: u64,
    start: Position,
    end: Position,
    size_tree: u64,
    best_so_far: u64,
    mla: &mut LinearArrangement,
) -> u64 {
    let unanchored = anchor == Anchor::None;
    let detached = if unanchored { 2 * split + 1 } else { 2 * split + 2 } as usize;

    for &(_, r) in &ord[..detached] {
        t.remove_edge_raw(v_star, r);
    }
    let size_rest: u64 = ord[detached..].iter().map(|&(s, _)| s).sum();

    let mut best = u64::MAX;
    for i in 0..detached as u64 {
        let sched = if unanchored { schedule_q(split, i) } else { schedule_p(split, i) };
        let central_len = ord[i as usize].0 as usize + 1 + size_rest as usize;

        t.add_edge_raw(v_star, ord[i as usize].1);

        let mut arr_aux = mla.clone();
        let mut c_i = 0u64;

        // the anchored case mirrors the layout when the anchor points
        // right, filling the positions from the far end inward
        let fill_left_to_right = anchor != Anchor::Right;
        let mut cursor = if fill_left_to_right { start } else { end };

        for j in 1..=split {
            let (n_j, r) = ord[sched[j as usize]];
            c_i += if fill_left_to_right {
                let c = solve(t, Anchor::Right, r, cursor, cursor + n_j as usize - 1, &mut arr_aux);
                cursor += n_j as usize;
                c
            } else {
                let c = solve(t, Anchor::Left, r, cursor - n_j as usize + 1, cursor, &mut arr_aux);
                cursor -= n_j as usize;
                c
            };
        }

        c_i += if fill_left_to_right {
            let c = solve(t, Anchor::None, v_star, cursor, cursor + central_len - 1, &mut arr_aux);
            cursor += central_len;
            c
        } else {
            let c = solve(t, Anchor::None, v_star, cursor + 1 - central_len, cursor, &mut arr_aux);
            cursor -= central_len;
            c
        };

        for j in split + 1..detached as u64 {
            let (n_j, r) = ord[sched[j as usize]];
            c_i += if fill_left_to_right {
                let c = solve(t, Anchor::Left, r, cursor, cursor + n_j as usize - 1, &mut arr_aux);
                cursor += n_j as usize;
                c
            } else {
                let c = solve(t, Anchor::Right, r, cursor - n_j as usize + 1, cursor, &mut arr_aux);
                cursor -= n_j as usize;
                c
            };
        }

        // anchor spans over the inner subtrees
        if unanchored {
            c_i += size_tree * split;
        } else {
            c_i += size_tree * (split + 1);
            c_i -= (split + 1) * ord[*sched.last().unwrap()].0;
        }
        let mut subs = 0u64;
        for j in 1..=split {
            subs += (split - j + 1)
                * (ord[sched[j as usize]].0 + ord[sched[(2 * split - j + 1) as usize]].0);
        }
        c_i -= subs;
        c_i += split; // correction over the original paper

        if c_i < best {
            best = c_i;
            if c_i < best_so_far {
                *mla = arr_aux;
            }
        }

        t.remove_edge_raw(v_star, ord[i as usize].1);
    }

    for &(_, r) in &ord[..detached] {
        t.add_edge_raw(v_star, r);
    }
    best
}
