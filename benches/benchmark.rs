use criterion::{criterion_group, criterion_main, Criterion};

use linarr::dmin::{self, UnconstrainedAlgorithm};
use linarr::generate::{RandLabFreeTrees, RandUlabRootedTrees, TreeGenerator};
use linarr::graphs::FreeTree;
use linarr::metrics::{num_crossings_algorithm, CrossingsAlgorithm};

const SIZES: &[usize] = &[50, 200, 500];

fn random_tree(n: usize) -> FreeTree {
    let mut generator = RandLabFreeTrees::new(n, 0xbe9c4);
    generator.get_tree()
}

fn crossings_algorithms(c: &mut Criterion) {
    for &n in SIZES {
        let tree = random_tree(n);
        for (name, algorithm) in [
            ("ladder", CrossingsAlgorithm::Ladder),
            ("stack_based", CrossingsAlgorithm::StackBased),
        ] {
            c.bench_function(&format!("crossings/{name}/n{n}"), |b| {
                b.iter(|| num_crossings_algorithm(&tree, None, algorithm));
            });
        }
    }
}

fn minla_solvers(c: &mut Criterion) {
    for &n in &[20usize, 60] {
        let tree = random_tree(n);
        for (name, algorithm) in [
            ("shiloach", UnconstrainedAlgorithm::Shiloach),
            ("chung", UnconstrainedAlgorithm::Chung),
        ] {
            c.bench_function(&format!("dmin/{name}/n{n}"), |b| {
                b.iter(|| dmin::unconstrained(&tree, algorithm).unwrap());
            });
        }
        c.bench_function(&format!("dmin/planar/n{n}"), |b| {
            b.iter(|| dmin::planar(&tree).unwrap());
        });
    }
}

fn tree_sampling(c: &mut Criterion) {
    for &n in SIZES {
        c.bench_function(&format!("generate/rand_ulab_rooted/n{n}"), |b| {
            let mut generator = RandUlabRootedTrees::new(n, 7);
            b.iter(|| generator.get_tree());
        });
    }
}

criterion_group!(metrics, crossings_algorithms);
criterion_group! {
    name = solvers;
    config = Criterion::default().sample_size(10);
    targets = minla_solvers
}
criterion_group!(generation, tree_sampling);
criterion_main!(metrics, solvers, generation);
