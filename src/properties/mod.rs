//! Structural properties of graphs and trees.
//!
//! All tree queries run in O(n): centre and diameter by a double
//! breadth-first search, centroid by a subtree-size DP plus a descent
//! towards the heavy side. The component-wise variants accept forests and
//! operate on the component of the given start vertex, which is what the
//! minimum-linear-arrangement solvers need while they temporarily detach
//! subtrees.

mod centres;
mod degrees;
mod expected;
mod hierarchical_distance;
mod subtrees;

pub use centres::{centre_of_component, centroid_of_component, diameter_of_component};
pub use degrees::{hubiness, hubiness_rational, mean_degree, moment_degree, moment_degree_rational};
pub use expected::{
    expected_num_crossings_rational, expected_sum_edge_lengths_rational,
    num_pairs_independent_edges,
};
pub use hierarchical_distance::{mean_hierarchical_distance, mean_hierarchical_distance_rational};
pub use subtrees::size_subtrees;
