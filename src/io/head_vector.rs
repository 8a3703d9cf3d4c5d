//! Reading head-vector files.

use std::path::Path;

use crate::graphs::RootedTree;
use crate::head_vector::HeadVector;
use crate::io::ParseError;

/// Parses a single head-vector line.
///
/// # Errors
/// See [`HeadVector::from_values`]; non-integer tokens are
/// [`ParseError::MalformedToken`].
pub fn parse_head_vector(line: &str) -> Result<HeadVector, ParseError> {
    line.parse()
}

/// Reads a head-vector file: one tree per line, empty lines skipped.
///
/// # Errors
/// Fails on the first malformed line; use
/// [`TreebankReader`](crate::io::TreebankReader) for record-by-record
/// error handling.
pub fn read_head_vector_trees<P: AsRef<Path>>(path: P) -> Result<Vec<RootedTree>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let mut trees = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        trees.push(parse_head_vector(line)?.to_rooted_tree());
    }
    Ok(trees)
}
