//! Head vectors: the parent-array encoding of rooted trees.
//!
//! A head vector of a tree of `n` vertices is a length-`n` array `h` with
//! `h[i]` in `[0, n]`, using **1-based** vertex numbering on the values:
//!
//! * `h[i] = 0` — vertex `i + 1` is the root;
//! * `h[i] = j > 0` — vertex `j` is the parent of vertex `i + 1`.
//!
//! Exactly one entry is zero, no vertex is its own parent, and the parent
//! assignments must be acyclic (which, with `n - 1` parent links, also
//! makes them connected). Internally the crate is 0-based throughout; the
//! 1-based convention exists only in this encoding and its file format, and
//! the translation happens here.

use std::str::FromStr;

use crate::defs::Vertex;
use crate::graphs::{FreeTree, RootedTree, UndirectedGraph};
use crate::io::ParseError;

/// A validated head vector. See the [module docs](self) for the encoding.
///
/// # Example
/// ```
/// use linarr::head_vector::HeadVector;
///
/// let hv: HeadVector = "0 3 4 1 6 3".parse().unwrap();
/// let tree = hv.to_rooted_tree();
/// assert_eq!(tree.root(), Some(0)); // vertex "1" of the file, remapped
/// assert_eq!(tree.num_nodes(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadVector(Vec<u64>);

impl HeadVector {
    /// Validates `values` as a head vector.
    ///
    /// # Errors
    /// * [`ParseError::OutOfRange`] if a value exceeds `n`.
    /// * [`ParseError::SelfParent`] if `h[i] = i + 1`.
    /// * [`ParseError::TwoRoots`] / [`ParseError::MissingRoot`] if the
    ///   number of zero entries is not one.
    /// * [`ParseError::Cycle`] if the parent assignments are cyclic.
    pub fn from_values(values: Vec<u64>) -> Result<Self, ParseError> {
        let n = values.len();
        if n == 0 {
            return Ok(HeadVector(values));
        }

        let mut root: Option<usize> = None;
        for (i, &h) in values.iter().enumerate() {
            if h > n as u64 {
                return Err(ParseError::OutOfRange(h));
            }
            if h == 0 {
                if let Some(first) = root {
                    return Err(ParseError::TwoRoots(first, i));
                }
                root = Some(i);
            } else if h as usize == i + 1 {
                return Err(ParseError::SelfParent(i + 1));
            }
        }
        let root = root.ok_or(ParseError::MissingRoot)?;

        // n - 1 parent links are a tree iff they are acyclic, checked by
        // walking each vertex up to the root once
        let mut state = vec![0u8; n]; // 0 unseen, 1 on current walk, 2 done
        state[root] = 2;
        for start in 0..n {
            let mut u = start;
            while state[u] == 0 {
                state[u] = 1;
                u = values[u] as usize - 1;
            }
            if state[u] == 1 {
                return Err(ParseError::Cycle);
            }
            let mut u = start;
            while state[u] == 1 {
                state[u] = 2;
                u = values[u] as usize - 1;
            }
        }

        Ok(HeadVector(values))
    }

    /// Wraps values already known to satisfy the invariants.
    pub(crate) fn from_values_unchecked(values: Vec<u64>) -> Self {
        debug_assert!(HeadVector::from_values(values.clone()).is_ok());
        HeadVector(values)
    }

    /// The raw values, 1-based with 0 marking the root.
    pub fn values(&self) -> &[u64] {
        &self.0
    }

    /// Number of vertices encoded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this encodes the empty tree.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index (0-based) of the root vertex.
    ///
    /// # Panics
    /// Panics on the empty head vector.
    pub fn root(&self) -> Vertex {
        self.0.iter().position(|&h| h == 0).expect("validated head vector has a root")
    }

    /// Builds the rooted tree this vector encodes, in arborescence
    /// orientation with normalized adjacency lists. File vertex `k` becomes
    /// vertex `k - 1`.
    pub fn to_rooted_tree(&self) -> RootedTree {
        let n = self.len();
        let mut tree = RootedTree::new(n);
        if n == 0 {
            return tree;
        }
        for (i, &h) in self.0.iter().enumerate() {
            if h > 0 {
                tree.add_edge_raw(h as usize - 1, i);
            }
        }
        tree.normalize();
        tree.set_root(self.root()).expect("root index is in range");
        tree
    }

    /// Builds the free tree this vector encodes (orientation forgotten),
    /// with normalized adjacency lists.
    pub fn to_free_tree(&self) -> FreeTree {
        let n = self.len();
        let mut graph = UndirectedGraph::new(n);
        for (i, &h) in self.0.iter().enumerate() {
            if h > 0 {
                graph.add_edge_raw(h as usize - 1, i);
            }
        }
        graph.normalize();
        FreeTree::from_undirected_unchecked(graph)
    }
}

impl std::fmt::Display for HeadVector {
    /// Formats the values space-separated, the file representation of one
    /// tree.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for value in &self.0 {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for HeadVector {
    type Err = ParseError;

    /// Parses whitespace-separated non-negative integers.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut values = Vec::new();
        for token in s.split_whitespace() {
            let value: u64 = token
                .parse()
                .map_err(|_| ParseError::MalformedToken(token.to_string()))?;
            values.push(value);
        }
        HeadVector::from_values(values)
    }
}
