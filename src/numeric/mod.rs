//! Arbitrary-precision arithmetic.
//!
//! The tree-counting caches and the exact metrics need integers far beyond
//! `u64` (the number of labelled free trees alone is `n^(n-2)`), and exact
//! ratios of such integers. [`Integer`] and [`Rational`] provide them as
//! thin newtypes over the `num` crates; the rest of the crate depends only
//! on the operations re-exported here, not on the backing library.

pub mod integer;
pub mod rational;

pub use integer::Integer;
pub use rational::Rational;
