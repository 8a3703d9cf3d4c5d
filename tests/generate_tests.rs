//! Enumerator counts, sampler uniformity, and round trips.

mod common;

use std::collections::{HashMap, HashSet};

use common::{canonical_free, canonical_rooted};
use linarr::generate::{
    AllLabFreeTrees, AllLabRootedTrees, AllPlanarArrangements, AllProjectiveArrangements,
    AllUlabFreeTrees, AllUlabRootedTrees, RandUlabRootedTrees, TreeGenerator,
};
use linarr::graphs::{Graph, RootedTree};
use linarr::head_vector::HeadVector;
use linarr::metrics::is_planar;
use linarr::sorting::next_permutation;
use linarr::LinearArrangement;

/// OEIS A000081 prefix: unlabelled rooted trees of n vertices.
const A000081: [u64; 10] = [0, 1, 1, 2, 4, 9, 20, 48, 115, 286];
/// OEIS A000055 prefix: unlabelled free trees of n vertices.
const A000055: [u64; 10] = [1, 1, 1, 1, 2, 3, 6, 11, 23, 47];

fn count<G: TreeGenerator>(mut generator: G) -> u64 {
    let mut count = 0;
    while !generator.end() {
        let _ = generator.yield_tree();
        count += 1;
    }
    count
}

#[test]
fn enumerator_counts_match_closed_forms() {
    for n in 1..=6usize {
        let cayley = (n as u64).pow(n.saturating_sub(2) as u32);
        assert_eq!(count(AllLabFreeTrees::new(n)), cayley, "labelled free, n = {n}");
        assert_eq!(
            count(AllLabRootedTrees::new(n)),
            n as u64 * cayley,
            "labelled rooted, n = {n}"
        );
    }
    for n in 1..10usize {
        assert_eq!(count(AllUlabRootedTrees::new(n)), A000081[n], "unlabelled rooted, n = {n}");
        assert_eq!(count(AllUlabFreeTrees::new(n)), A000055[n], "unlabelled free, n = {n}");
    }
}

#[test]
fn sixteen_distinct_labelled_trees_of_four_vertices() {
    // Cayley's formula: 4^(4-2) = 16, no duplicates
    let mut generator = AllLabFreeTrees::new(4);
    let mut seen = HashSet::new();
    while !generator.end() {
        let tree = generator.yield_tree();
        let mut edges: Vec<_> = tree.edges().collect();
        edges.sort_unstable();
        assert!(seen.insert(edges), "duplicate labelled tree");
    }
    assert_eq!(seen.len(), 16);
}

#[test]
fn unlabelled_enumerations_have_no_isomorphic_duplicates() {
    for n in 1..=8usize {
        let mut generator = AllUlabRootedTrees::new(n);
        let mut seen = HashSet::new();
        while !generator.end() {
            assert!(seen.insert(canonical_rooted(&generator.yield_tree())));
        }
        assert_eq!(seen.len() as u64, A000081[n]);
    }
}

#[test]
fn uniform_unlabelled_rooted_sampling_of_five_vertices() {
    // 100 000 samples at n = 5, seed 42: all t_5 = 9 classes appear and
    // the chi-square statistic stays under the 0.001-level critical value
    // for 8 degrees of freedom
    let samples = 100_000u64;
    let mut generator = RandUlabRootedTrees::new(5, 42);
    let mut counts: HashMap<String, u64> = HashMap::new();
    for _ in 0..samples {
        *counts.entry(canonical_rooted(&generator.get_tree())).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 9, "every isomorphism class appears");

    let expected = samples as f64 / 9.0;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    assert!(chi_square < 26.12, "chi-square {chi_square} too large");
}

#[test]
fn head_vector_round_trip_over_all_rooted_trees() {
    // tree -> head vector -> tree preserves the rooted isomorphism class
    let mut generator = AllUlabRootedTrees::new(7);
    while !generator.end() {
        let tree = generator.yield_tree();
        let hv = tree.to_head_vector().unwrap();
        let back = hv.to_rooted_tree();
        assert_eq!(canonical_rooted(&tree), canonical_rooted(&back));
    }
}

#[test]
fn head_vector_parse_round_trip() {
    let hv: HeadVector = "0 1 2 2 1".parse().unwrap();
    let tree = hv.to_rooted_tree();
    assert_eq!(tree.to_head_vector().unwrap(), hv);
}

#[test]
fn projective_arrangement_count_formula() {
    // prod over vertices of (out_degree + 1)!
    let factorial = |k: usize| -> u64 { (1..=k as u64).product::<u64>().max(1) };

    let mut generator = AllUlabFreeTrees::new(6);
    while !generator.end() {
        let tree = generator.yield_tree();
        let rooted = RootedTree::from_free_tree(&tree, 0).unwrap();

        let expected: u64 = (0..6).map(|u| factorial(rooted.out_degree(u) + 1)).product();
        let mut arrangements = AllProjectiveArrangements::new(&rooted).unwrap();
        let mut observed = 0u64;
        while !arrangements.end() {
            let _ = arrangements.yield_arrangement();
            observed += 1;
        }
        assert_eq!(observed, expected);
    }
}

#[test]
fn planar_enumeration_matches_brute_force() {
    // count planar arrangements by filtering all n! permutations
    for n in 2..=5usize {
        let mut generator = AllUlabFreeTrees::new(n);
        while !generator.end() {
            let tree = generator.yield_tree();

            let mut brute = HashSet::new();
            let mut direct: Vec<usize> = (0..n).collect();
            loop {
                let arr = LinearArrangement::from_direct(direct.clone()).unwrap();
                if is_planar(&tree, Some(&arr)) {
                    brute.insert(arr.direct().to_vec());
                }
                if !next_permutation(&mut direct) {
                    break;
                }
            }

            let mut enumerated = HashSet::new();
            let mut arrangements = AllPlanarArrangements::new(&tree).unwrap();
            while !arrangements.end() {
                let arr = arrangements.yield_arrangement();
                assert!(is_planar(&tree, Some(&arr)));
                assert!(enumerated.insert(arr.direct().to_vec()), "duplicate arrangement");
            }
            assert_eq!(enumerated, brute, "planar family at n = {n}");
        }
    }
}

#[test]
fn generators_produce_annotated_trees_by_default() {
    let mut generator = AllUlabRootedTrees::new(5);
    let tree = generator.get_tree();
    // postprocessing computed the subtree sizes
    assert!(tree.has_size_subtrees());
    assert_eq!(tree.size_subtree(tree.root().unwrap()).unwrap(), 5);

    let mut generator = AllUlabFreeTrees::new(5);
    let tree = generator.get_tree();
    assert!(tree.tree_type().is_some());
    assert!(tree.as_undirected().is_normalized());
}

#[test]
fn free_sampler_round_trips_with_free_enumeration() {
    use linarr::generate::RandUlabFreeTrees;

    // every drawn class is one the enumerator knows
    let classes: HashSet<String> = {
        let mut enumerator = AllUlabFreeTrees::new(8);
        let mut cs = HashSet::new();
        while !enumerator.end() {
            cs.insert(canonical_free(&enumerator.yield_tree()));
        }
        cs
    };
    assert_eq!(classes.len(), 23);

    let mut sampler = RandUlabFreeTrees::new(8, 31);
    let mut seen = HashSet::new();
    for _ in 0..2000 {
        let class = canonical_free(&sampler.get_tree());
        assert!(classes.contains(&class));
        seen.insert(class);
    }
    // 2000 draws over 23 classes: seeing every class is overwhelmingly
    // likely under uniformity
    assert_eq!(seen.len(), 23);
}
