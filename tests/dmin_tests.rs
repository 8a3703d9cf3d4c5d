//! Minimum linear arrangement properties: optimality, cost chains, and
//! agreement between the two unconstrained solvers.

mod common;

use common::{path, star};
use linarr::dmin::{self, UnconstrainedAlgorithm};
use linarr::generate::{AllUlabFreeTrees, RandUlabFreeTrees, TreeGenerator};
use linarr::graphs::{FreeTree, Graph, RootedTree};
use linarr::metrics::{is_planar, is_projective, is_root_covered, sum_edge_lengths};
use linarr::sorting::next_permutation;
use linarr::LinearArrangement;

/// Exhaustive minimum of D over every arrangement; usable up to n ~ 7.
fn brute_force_minimum(tree: &FreeTree) -> u64 {
    let n = tree.num_nodes();
    let mut direct: Vec<usize> = (0..n).collect();
    let mut best = u64::MAX;
    loop {
        let arr = LinearArrangement::from_direct(direct.clone()).unwrap();
        best = best.min(sum_edge_lengths(tree, Some(&arr)));
        if !next_permutation(&mut direct) {
            break;
        }
    }
    best
}

#[test]
fn unconstrained_matches_brute_force_on_all_small_trees() {
    for n in 2..=6 {
        let mut generator = AllUlabFreeTrees::new(n);
        while !generator.end() {
            let tree = generator.yield_tree();
            let reference = brute_force_minimum(&tree);

            for algorithm in [UnconstrainedAlgorithm::Shiloach, UnconstrainedAlgorithm::Chung] {
                let (cost, arr) = dmin::unconstrained(&tree, algorithm).unwrap();
                assert_eq!(cost, reference, "{algorithm:?} on a tree of {n} vertices");
                assert_eq!(sum_edge_lengths(&tree, Some(&arr)), cost);
            }
        }
    }
}

#[test]
fn shiloach_and_chung_agree_up_to_nine_vertices() {
    for n in 2..=9 {
        let mut generator = AllUlabFreeTrees::new(n);
        while !generator.end() {
            let tree = generator.yield_tree();
            let (shiloach, _) = dmin::unconstrained(&tree, UnconstrainedAlgorithm::Shiloach).unwrap();
            let (chung, _) = dmin::unconstrained(&tree, UnconstrainedAlgorithm::Chung).unwrap();
            assert_eq!(shiloach, chung, "n = {n}");
        }
    }
}

#[test]
fn cost_chain_unconstrained_planar_projective() {
    // Dmin <= planar Dmin <= projective Dmin, for every rooting
    let mut sampler = RandUlabFreeTrees::new(9, 1234);
    for _ in 0..25 {
        let tree = sampler.get_tree();
        let (unconstrained, _) = dmin::unconstrained(&tree, Default::default()).unwrap();
        let (planar, planar_arr) = dmin::planar(&tree).unwrap();
        assert!(unconstrained <= planar);
        assert!(is_planar(&tree, Some(&planar_arr)));

        for root in 0..tree.num_nodes() {
            let mut rooted = RootedTree::from_free_tree(&tree, root).unwrap();
            rooted.calculate_size_subtrees().unwrap();
            let (projective, projective_arr) = dmin::projective(&rooted).unwrap();
            assert!(planar <= projective, "rooting at {root}");
            assert_eq!(sum_edge_lengths(&rooted, Some(&projective_arr)), projective);
            assert!(is_projective(&rooted, Some(&projective_arr)));
            assert!(!is_root_covered(&rooted, Some(&projective_arr)));
        }
    }
}

#[test]
fn planar_solution_is_optimal_among_planar_arrangements() {
    use linarr::generate::AllPlanarArrangements;

    for n in 2..=6 {
        let mut generator = AllUlabFreeTrees::new(n);
        while !generator.end() {
            let tree = generator.yield_tree();
            let (cost, _) = dmin::planar(&tree).unwrap();

            let mut best = u64::MAX;
            let mut arrangements = AllPlanarArrangements::new(&tree).unwrap();
            while !arrangements.end() {
                let arr = arrangements.yield_arrangement();
                best = best.min(sum_edge_lengths(&tree, Some(&arr)));
            }
            assert_eq!(cost, best, "planar optimum at n = {n}");
        }
    }
}

#[test]
fn projective_solution_is_optimal_among_projective_arrangements() {
    use linarr::generate::AllProjectiveArrangements;

    for n in 2..=6 {
        let mut generator = AllUlabFreeTrees::new(n);
        while !generator.end() {
            let tree = generator.yield_tree();
            for root in 0..n {
                let mut rooted = RootedTree::from_free_tree(&tree, root).unwrap();
                rooted.calculate_size_subtrees().unwrap();
                let (cost, _) = dmin::projective(&rooted).unwrap();

                let mut best = u64::MAX;
                let mut arrangements = AllProjectiveArrangements::new(&rooted).unwrap();
                while !arrangements.end() {
                    let arr = arrangements.yield_arrangement();
                    best = best.min(sum_edge_lengths(&rooted, Some(&arr)));
                }
                assert_eq!(cost, best, "projective optimum at n = {n}, root {root}");
            }
        }
    }
}

#[test]
fn balanced_placement_branch_on_long_spiders() {
    // a hub with three chains of 5 is the smallest shape whose subtree
    // sizes pass the split-index threshold, so this exercises the
    // balanced recursion of both solvers (the straight fallback handles
    // everything below roughly a dozen vertices)
    let mut spider = FreeTree::new(16);
    for leg in 0..3usize {
        let first = 1 + 5 * leg;
        spider.add_edge(0, first, true, false).unwrap();
        for v in first..first + 4 {
            spider.add_edge(v, v + 1, true, false).unwrap();
        }
    }

    for algorithm in [UnconstrainedAlgorithm::Shiloach, UnconstrainedAlgorithm::Chung] {
        let (cost, arr) = dmin::unconstrained(&spider, algorithm).unwrap();
        assert_eq!(cost, 20, "{algorithm:?}");
        assert_eq!(sum_edge_lengths(&spider, Some(&arr)), cost);
    }
    // here the planar optimum coincides with the unconstrained one
    let (planar_cost, _) = dmin::planar(&spider).unwrap();
    assert_eq!(planar_cost, 20);

    // an asymmetric variant: only agreement and feasibility are asserted
    let mut spider = FreeTree::new(15);
    for (leg, len) in [5usize, 5, 4].iter().enumerate() {
        let first = 1 + 5 * leg;
        spider.add_edge(0, first, true, false).unwrap();
        for v in first..first + len - 1 {
            spider.add_edge(v, v + 1, true, false).unwrap();
        }
    }
    let (shiloach, arr) = dmin::unconstrained(&spider, UnconstrainedAlgorithm::Shiloach).unwrap();
    let (chung, _) = dmin::unconstrained(&spider, UnconstrainedAlgorithm::Chung).unwrap();
    assert_eq!(shiloach, chung);
    assert_eq!(sum_edge_lengths(&spider, Some(&arr)), shiloach);
    assert!(shiloach <= dmin::planar(&spider).unwrap().0);
}

#[test]
fn path_of_five_scenario() {
    let tree = path(5);
    let (cost, arr) = dmin::unconstrained(&tree, Default::default()).unwrap();
    assert_eq!(cost, 4);
    // the optimal arrangement of a path is the path itself, up to
    // reflection
    assert!(arr.is_identity() || arr.mirrored().is_identity());
}

#[test]
fn star_of_six_projective_scenario() {
    let mut rooted = RootedTree::from_free_tree(&star(6), 0).unwrap();
    rooted.calculate_size_subtrees().unwrap();
    let (cost, arr) = dmin::projective(&rooted).unwrap();
    assert_eq!(cost, 9);
    assert!(is_projective(&rooted, Some(&arr)));
}

#[test]
fn balanced_binary_tree_scenario() {
    // height 3, 15 vertices, rooted at 0
    let mut tree = FreeTree::new(15);
    for v in 1..15 {
        tree.add_edge((v - 1) / 2, v, true, false).unwrap();
    }
    let mut rooted = RootedTree::from_free_tree(&tree, 0).unwrap();
    rooted.calculate_size_subtrees().unwrap();

    let (projective, arr) = dmin::projective(&rooted).unwrap();
    assert_eq!(projective, 24);
    assert_eq!(sum_edge_lengths(&rooted, Some(&arr)), 24);

    let (unconstrained, _) = dmin::unconstrained(&tree, Default::default()).unwrap();
    assert!(unconstrained <= projective);
}

#[test]
fn degenerate_inputs() {
    use linarr::Error;

    // not a tree
    let forest = FreeTree::new(3);
    assert_eq!(
        dmin::unconstrained(&forest, Default::default()),
        Err(Error::NotATree)
    );
    assert_eq!(dmin::planar(&forest), Err(Error::NotATree));

    // empty and singleton trees
    let empty = FreeTree::new(0);
    assert_eq!(dmin::planar(&empty).unwrap(), (0, LinearArrangement::new()));
    let single = FreeTree::new(1);
    let (cost, arr) = dmin::unconstrained(&single, Default::default()).unwrap();
    assert_eq!((cost, arr.len()), (0, 1));

    // projective requires the subtree sizes
    let rooted = RootedTree::from_free_tree(&path(4), 1).unwrap();
    assert_eq!(
        dmin::projective(&rooted),
        Err(Error::PrecomputationMissing("size_subtree"))
    );

    // the planar embedding requires normalized adjacencies
    let mut unnormalized = FreeTree::new(3);
    unnormalized.add_edges(&[(1, 2), (1, 0)], false, false).unwrap();
    assert_eq!(dmin::planar(&unnormalized), Err(Error::NotNormalized));
}
