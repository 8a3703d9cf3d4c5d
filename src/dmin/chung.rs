//! Fan Chung's algorithm for the unconstrained minimum linear arrangement
//! of a tree (1984), with the corrections from the later literature.
//!
//! The recursion keeps an anchoring tag: an anchored tree pays, on top of
//! its internal cost, the stretch of the edge that will connect it to the
//! rest of the arrangement. At every call the children of the reference
//! vertex are ordered non-increasingly by subtree size; the split index is
//! searched for (`q` unanchored, `p` anchored) and, if none exists, the
//! largest subtree is detached and both parts are solved recursively.
//! Otherwise every choice of central subtree among the `2q + 1` (or
//! `2p + 2`) largest is tried, the others being placed outside-in by the
//! bouncing schedules.
//!
//! The `MAKE` parameter controls whether the arrangement is materialized;
//! with `false` the costly buffer copies are skipped and only the cost is
//! computed. The final arrangement is *not* canonically oriented (no
//! flipping pass): anchored sub-arrangements may come out mirrored, with
//! equal cost.

use crate::defs::{Position, Vertex};
use crate::graphs::{FreeTree, Graph};
use crate::linear_arrangement::LinearArrangement;
use crate::properties;

use super::common::{
    calculate_p, calculate_q, schedule_p, schedule_q, size_ordering, Anchor,
};

/// Minimum cost and an optimal arrangement. `tree` must be a tree of at
/// least 2 vertices.
pub(crate) fn minimum_arrangement(tree: &FreeTree) -> (u64, LinearArrangement) {
    let n = tree.num_nodes();
    let mut scratch = tree.clone();
    scratch.normalize();

    let mut arrangement = LinearArrangement::zeroed(n);
    let mut cost = 0u64;
    calculate_mla::<true>(&mut scratch, Anchor::None, 0, 0, n - 1, &mut arrangement, &mut cost);
    (cost, arrangement)
}

/// Minimum cost only, skipping arrangement materialization.
pub(crate) fn minimum_cost(tree: &FreeTree) -> u64 {
    let n = tree.num_nodes();
    let mut scratch = tree.clone();
    scratch.normalize();

    let mut unused = LinearArrangement::new();
    let mut cost = 0u64;
    calculate_mla::<false>(&mut scratch, Anchor::None, 0, 0, n - 1, &mut unused, &mut cost);
    cost
}

/// The recursion. `one_node` identifies the component to arrange into the
/// positions `start..=end`; `cost` receives its minimum cost. The tree is
/// restored to its entry state before returning.
fn calculate_mla<const MAKE: bool>(
    t: &mut FreeTree,
    anchor: Anchor,
    one_node: Vertex,
    start: Position,
    end: Position,
    mla: &mut LinearArrangement,
    cost: &mut u64,
) {
    let size_tree = t.num_nodes_component(one_node) as u64;
    debug_assert!(size_tree > 0);
    debug_assert!(end + 1 - start == size_tree as usize);

    if size_tree == 1 {
        if MAKE {
            mla.assign(one_node, start);
        }
        *cost = 0;
        return;
    }

    if anchor == Anchor::None {
        let u = properties::centroid_of_component(t, one_node).0;
        let ord = size_ordering(t, u);

        match calculate_q(size_tree, &ord) {
            None => {
                let (n_0, t_0) = ord[0];

                t.remove_edge_raw(u, t_0);

                let mut c1 = 0u64;
                let mut c2 = 0u64;
                calculate_mla::<MAKE>(t, Anchor::Right, t_0, start, start + n_0 as usize - 1, mla, &mut c1);
                calculate_mla::<MAKE>(t, Anchor::Left, u, start + n_0 as usize, end, mla, &mut c2);
                *cost = c1 + c2 + 1;

                t.add_edge_raw(u, t_0);
            }
            Some(q) => {
                *cost = u64::MAX;

                // detach the 2q + 1 largest subtrees
                for i in 0..=2 * q as usize {
                    t.remove_edge_raw(u, ord[i].1);
                }

                // what remains around u once the replacement is chosen
                let size_rest_of_trees: u64 =
                    ord[2 * q as usize + 1..].iter().map(|&(s, _)| s).sum();

                for i in 0..=2 * q {
                    let sched = schedule_q(q, i);

                    t.add_edge_raw(u, ord[i as usize].1);

                    let mut c_i = 0u64;
                    let mut arr_aux = if MAKE { mla.clone() } else { LinearArrangement::new() };
                    let mut start_aux = start;

                    // left part of the arrangement
                    for j in 1..=q {
                        let (n_j, r) = ord[sched[j as usize]];
                        let mut c = 0u64;
                        calculate_mla::<MAKE>(
                            t,
                            Anchor::Right,
                            r,
                            start_aux,
                            start_aux + n_j as usize - 1,
                            &mut arr_aux,
                            &mut c,
                        );
                        start_aux += n_j as usize;
                        c_i += c;
                    }

                    // central part
                    let end_central =
                        start_aux + ord[i as usize].0 as usize + size_rest_of_trees as usize;
                    let mut c = 0u64;
                    calculate_mla::<MAKE>(t, Anchor::None, u, start_aux, end_central, &mut arr_aux, &mut c);
                    c_i += c;
                    start_aux = end_central + 1;

                    // right part
                    for j in q + 1..=2 * q {
                        let (n_j, r) = ord[sched[j as usize]];
                        let mut c = 0u64;
                        calculate_mla::<MAKE>(
                            t,
                            Anchor::Left,
                            r,
                            start_aux,
                            start_aux + n_j as usize - 1,
                            &mut arr_aux,
                            &mut c,
                        );
                        start_aux += n_j as usize;
                        c_i += c;
                    }

                    // anchors of the side trees stretch over everything
                    // nearer to the centre
                    c_i += size_tree * q;
                    let mut subs = 0u64;
                    for j in 1..=q {
                        subs += (q - j + 1)
                            * (ord[sched[j as usize]].0 + ord[sched[(2 * q - j + 1) as usize]].0);
                    }
                    c_i -= subs;
                    c_i += q; // correction over Chung's paper

                    if c_i < *cost {
                        *cost = c_i;
                        if MAKE {
                            *mla = arr_aux;
                        }
                    }

                    debug_assert!(u != ord[i as usize].1);
                    t.remove_edge_raw(u, ord[i as usize].1);
                }

                // restore the detached subtrees
                for i in 0..=2 * q as usize {
                    t.add_edge_raw(u, ord[i].1);
                }
            }
        }
    } else {
        let ord = size_ordering(t, one_node);

        match calculate_p(size_tree, &ord) {
            None => {
                let (n_0, t_0) = ord[0];
                debug_assert!(one_node != t_0);

                t.remove_edge_raw(one_node, t_0);

                let mut c1 = 0u64;
                let mut c2 = 0u64;
                if anchor == Anchor::Left {
                    calculate_mla::<MAKE>(t, Anchor::None, one_node, start, end - n_0 as usize, mla, &mut c1);
                    calculate_mla::<MAKE>(t, Anchor::Left, t_0, end - n_0 as usize + 1, end, mla, &mut c2);
                } else {
                    calculate_mla::<MAKE>(t, Anchor::Right, t_0, start, start + n_0 as usize - 1, mla, &mut c1);
                    calculate_mla::<MAKE>(t, Anchor::None, one_node, start + n_0 as usize, end, mla, &mut c2);
                }
                *cost = c1 + c2 + size_tree - n_0;

                t.add_edge_raw(one_node, t_0);
            }
            Some(p) => {
                *cost = u64::MAX;

                for i in 0..=2 * p as usize + 1 {
                    t.remove_edge_raw(one_node, ord[i].1);
                }

                let size_rest_of_trees: u64 =
                    ord[2 * p as usize + 2..].iter().map(|&(s, _)| s).sum();

                for i in 0..=2 * p + 1 {
                    let sched = schedule_p(p, i);
                    let central_len = ord[i as usize].0 as usize + 1 + size_rest_of_trees as usize;

                    t.add_edge_raw(one_node, ord[i as usize].1);

                    let mut c_i = 0u64;
                    let mut arr_aux = if MAKE { mla.clone() } else { LinearArrangement::new() };

                    if anchor == Anchor::Left {
                        let mut start_aux = start;

                        for j in 1..=p {
                            let (n_j, r) = ord[sched[j as usize]];
                            let mut c = 0u64;
                            calculate_mla::<MAKE>(
                                t,
                                Anchor::Right,
                                r,
                                start_aux,
                                start_aux + n_j as usize - 1,
                                &mut arr_aux,
                                &mut c,
                            );
                            start_aux += n_j as usize;
                            c_i += c;
                        }

                        let mut c = 0u64;
                        calculate_mla::<MAKE>(
                            t,
                            Anchor::None,
                            one_node,
                            start_aux,
                            start_aux + central_len - 1,
                            &mut arr_aux,
                            &mut c,
                        );
                        start_aux += central_len;
                        c_i += c;

                        for j in p + 1..=2 * p + 1 {
                            let (n_j, r) = ord[sched[j as usize]];
                            let mut c = 0u64;
                            calculate_mla::<MAKE>(
                                t,
                                Anchor::Left,
                                r,
                                start_aux,
                                start_aux + n_j as usize - 1,
                                &mut arr_aux,
                                &mut c,
                            );
                            start_aux += n_j as usize;
                            c_i += c;
                        }
                    } else {
                        // mirrored: fill from the right end inward
                        let mut end_aux = end;

                        for j in 1..=p {
                            let (n_j, r) = ord[sched[j as usize]];
                            let mut c = 0u64;
                            calculate_mla::<MAKE>(
                                t,
                                Anchor::Left,
                                r,
                                end_aux - n_j as usize + 1,
                                end_aux,
                                &mut arr_aux,
                                &mut c,
                            );
                            end_aux -= n_j as usize;
                            c_i += c;
                        }

                        let mut c = 0u64;
                        calculate_mla::<MAKE>(
                            t,
                            Anchor::None,
                            one_node,
                            end_aux + 1 - central_len,
                            end_aux,
                            &mut arr_aux,
                            &mut c,
                        );
                        end_aux -= central_len;
                        c_i += c;

                        for j in p + 1..=2 * p + 1 {
                            let (n_j, r) = ord[sched[j as usize]];
                            let mut c = 0u64;
                            calculate_mla::<MAKE>(
                                t,
                                Anchor::Right,
                                r,
                                end_aux - n_j as usize + 1,
                                end_aux,
                                &mut arr_aux,
                                &mut c,
                            );
                            end_aux -= n_j as usize;
                            c_i += c;
                        }
                    }

                    c_i += size_tree * (p + 1);
                    c_i -= (p + 1) * ord[*sched.last().unwrap()].0;

                    let mut subs = 0u64;
                    for j in 1..=p {
                        subs += (p - j + 1)
                            * (ord[sched[j as usize]].0 + ord[sched[(2 * p - j + 1) as usize]].0);
                    }
                    c_i -= subs;
                    c_i += p; // correction over Chung's paper

                    if c_i < *cost {
                        *cost = c_i;
                        if MAKE {
                            *mla = arr_aux;
                        }
                    }

                    debug_assert!(one_node != ord[i as usize].1);
                    t.remove_edge_raw(one_node, ord[i as usize].1);
                }

                for i in 0..=2 * p as usize + 1 {
                    t.add_edge_raw(one_node, ord[i].1);
                }
            }
        }
    }
}
