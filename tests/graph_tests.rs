//! Data-model invariants: normalization, disjoint union, arrangements,
//! conversions.

mod common;

use common::{path, star};
use linarr::graphs::{DirectedGraph, FreeTree, Graph, RootedTree, TreeType, UndirectedGraph};
use linarr::{Error, LinearArrangement};

#[test]
fn normalization_is_idempotent() {
    let mut graph = UndirectedGraph::new(5);
    graph
        .add_edges(&[(4, 0), (3, 0), (2, 0), (1, 0)], false, false)
        .unwrap();
    assert!(!graph.is_normalized());

    graph.normalize();
    let once: Vec<_> = graph.neighbours(0).to_vec();
    assert!(graph.is_normalized());

    graph.normalize();
    assert_eq!(graph.neighbours(0), once.as_slice());
    assert!(graph.check_normalized());
}

#[test]
fn check_normalized_recomputes_the_flag() {
    let mut graph = UndirectedGraph::new(3);
    graph.add_edges(&[(0, 1), (1, 2)], false, true).unwrap();
    // insertion in ascending order happens to be normalized
    assert!(graph.is_normalized());
}

#[test]
fn disjoint_union_shifts_and_adds() {
    let mut g = UndirectedGraph::new(3);
    g.add_edges(&[(0, 1), (1, 2)], true, false).unwrap();
    let mut h = UndirectedGraph::new(4);
    h.add_edges(&[(0, 3), (1, 2)], true, false).unwrap();

    let (gm, hm) = (g.num_edges(), h.num_edges());
    g.disjoint_union(&h);
    assert_eq!(g.num_nodes(), 7);
    assert_eq!(g.num_edges(), gm + hm);
    // vertices of h are shifted by |V(g)| = 3
    assert!(g.has_edge(3, 6));
    assert!(g.has_edge(4, 5));
}

#[test]
fn arrangement_round_trip() {
    // arrangement -> inverse -> direct reproduces the original
    let arr = LinearArrangement::from_direct(vec![4, 2, 0, 1, 3]).unwrap();
    let back = LinearArrangement::from_inverse(arr.inverse().to_vec()).unwrap();
    assert_eq!(back, arr);
    for u in 0..5 {
        assert_eq!(arr.vertex_at(arr.position_of(u)), u);
    }
}

#[test]
fn free_tree_protects_its_invariants() {
    let mut tree = path(4);
    assert_eq!(tree.add_edge(0, 3, true, false), Err(Error::NotATree));
    assert_eq!(tree.add_edge(0, 1, true, false), Err(Error::InvalidEdge(0, 1)));
    assert_eq!(tree.add_edge(0, 9, true, false), Err(Error::IndexOutOfRange(9)));
    // failures left the tree untouched
    assert!(tree.is_tree());
    assert_eq!(tree.num_edges(), 3);
}

#[test]
fn tree_classification_of_common_shapes() {
    let mut p = path(6);
    let types = p.calculate_tree_type().unwrap();
    assert!(types.contains(TreeType::Linear));
    assert!(types.contains(TreeType::Caterpillar));

    let mut s = star(6);
    let types = s.calculate_tree_type().unwrap();
    assert!(types.contains(TreeType::Star));
    assert!(types.contains(TreeType::Spider));
    assert!(!types.contains(TreeType::Linear));
}

#[test]
fn rooted_tree_conversions() {
    let free = path(5);
    let rooted = RootedTree::from_free_tree(&free, 2).unwrap();
    assert!(rooted.is_orientation_valid());

    let back = rooted.to_free_tree().unwrap();
    assert_eq!(back.num_edges(), free.num_edges());
    for (u, v) in free.edges() {
        assert!(back.has_edge(u, v));
    }
}

#[test]
fn directed_graph_merges_antiparallel_edges_on_conversion() {
    let mut g = DirectedGraph::new(3);
    g.add_edges(&[(0, 1), (1, 0), (2, 1)], true, false).unwrap();
    let undirected = g.to_undirected();
    assert_eq!(undirected.num_edges(), 2);
}

#[test]
fn centre_centroid_diameter_of_known_trees() {
    let tree = path(7);
    assert_eq!(tree.centre().unwrap(), (3, None));
    assert_eq!(tree.centroid().unwrap(), (3, None));
    assert_eq!(tree.diameter().unwrap(), 6);

    let tree = star(9);
    assert_eq!(tree.centre().unwrap(), (0, None));
    assert_eq!(tree.diameter().unwrap(), 2);

    // a spider with legs 2, 2, 3: centre and centroid both at the hub,
    // diameter spans the two longest legs
    let mut tree = FreeTree::new(8);
    tree.add_edges(
        &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6), (6, 7)],
        true,
        false,
    )
    .unwrap();
    assert_eq!(tree.diameter().unwrap(), 5);
    assert_eq!(tree.centroid().unwrap(), (0, None));
}

#[test]
fn remove_vertex_keeps_the_model_consistent() {
    let mut g = DirectedGraph::new(5);
    g.add_edges(&[(0, 1), (1, 2), (2, 3), (3, 4)], true, false).unwrap();
    g.remove_vertex(2).unwrap();
    assert_eq!(g.num_nodes(), 4);
    assert_eq!(g.num_edges(), 2);
    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(2, 3)); // old (3, 4), relabelled
}
