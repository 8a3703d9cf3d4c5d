//! Metrics of linear arrangements: sum of edge lengths `D`, number of edge
//! crossings `C`, dependency-distance means, and head-initial ratio.
//!
//! Every metric takes the arrangement as `Option<&LinearArrangement>`;
//! `None` (or the empty arrangement) means the identity arrangement.

mod approximate_crossings;
mod crossings;
mod headedness;
mod structure;
mod sum_edge_lengths;
mod syntactic_structure;

pub use approximate_crossings::{approximate_num_crossings, approximate_num_crossings_rational};
pub use crossings::{
    num_crossings, num_crossings_algorithm, num_crossings_list, CrossingsAlgorithm,
};
pub use headedness::{head_initial, head_initial_rational};
pub use structure::{is_planar, is_projective, is_root_covered};
pub use sum_edge_lengths::{
    mean_dependency_distance, mean_dependency_distance_1level, mean_dependency_distance_rational,
    sum_edge_lengths,
};
pub use syntactic_structure::{syntactic_structure, SyntacticStructure};

use std::borrow::Cow;

use crate::defs::Position;
use crate::linear_arrangement::LinearArrangement;

/// Resolves an optional arrangement into a direct position array, treating
/// absence and the empty arrangement as the identity.
///
/// # Panics
/// Panics if a non-empty arrangement does not cover exactly `n` vertices.
pub(crate) fn direct_or_identity<'a>(
    n: usize,
    arrangement: Option<&'a LinearArrangement>,
) -> Cow<'a, [Position]> {
    match arrangement {
        Some(arr) if !arr.is_empty() => {
            assert_eq!(arr.len(), n, "arrangement covers {} vertices, graph has {}", arr.len(), n);
            Cow::Borrowed(arr.direct())
        }
        _ => Cow::Owned((0..n).collect()),
    }
}
