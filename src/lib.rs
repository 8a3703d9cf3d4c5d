//! Linear arrangements of trees and graphs.
//!
//! A *linear arrangement* is a bijection between the vertices of a graph
//! and the positions `0..n` on a line. This crate computes the structural
//! metrics of arrangements — the sum of edge lengths `D`, the number of
//! edge crossings `C`, dependency-distance means — and, at its core,
//! arrangements *minimizing* `D` under three regimes:
//!
//! * **unconstrained** — over all arrangements ([`dmin::unconstrained`],
//!   Shiloach's or Chung's algorithm);
//! * **planar** — no two edges cross ([`dmin::planar`],
//!   Hochberg–Stallmann);
//! * **projective** — planar and the root uncovered
//!   ([`dmin::projective`], Gildea–Temperley).
//!
//! It also enumerates and uniformly samples labelled/unlabelled
//! free/rooted trees ([`generate`]): Prüfer sequences, canonical level
//! sequences, and the Nijenhuis–Wilf *ranrut* and Wilf procedures backed
//! by big-integer count tables ([`numeric`]).
//!
//! # Data model
//! Graphs are adjacency-list structures over vertices `0..n`
//! ([`graphs::UndirectedGraph`], [`graphs::DirectedGraph`]); trees refine
//! them ([`graphs::FreeTree`], [`graphs::RootedTree`]) and maintain their
//! invariants under every mutation. Arrangements keep both direction
//! arrays in sync ([`LinearArrangement`]); rooted trees interchange with
//! the textual head-vector encoding ([`head_vector::HeadVector`], [`io`]).
//!
//! # Example
//! ```
//! use linarr::dmin;
//! use linarr::generate::{RandUlabFreeTrees, TreeGenerator};
//! use linarr::metrics::{num_crossings, sum_edge_lengths};
//!
//! // a uniformly random unlabelled free tree of 12 vertices
//! let mut gen = RandUlabFreeTrees::new(12, 42);
//! let tree = gen.get_tree();
//!
//! let (cost, arrangement) = dmin::planar(&tree).unwrap();
//! assert_eq!(sum_edge_lengths(&tree, Some(&arrangement)), cost);
//! assert_eq!(num_crossings(&tree, Some(&arrangement)), 0);
//! ```
//!
//! # Concurrency
//! Every algorithm is a synchronous, single-threaded function over owned
//! inputs; independent instances are freely used from parallel threads.
//! Enumeration order and seeded sampling are deterministic across runs.

pub mod defs;
pub mod dmin;
pub mod error;
pub mod generate;
pub mod graphs;
pub mod head_vector;
pub mod io;
pub mod iterators;
pub mod linear_arrangement;
pub mod metrics;
pub mod numeric;
pub mod properties;
pub mod sorting;
pub mod traversal;

pub use defs::{Edge, EdgePair, Position, Vertex};
pub use error::{Error, Result};
pub use linear_arrangement::LinearArrangement;
