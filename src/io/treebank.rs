//! Line-oriented treebank reading.
//!
//! A treebank is a text file with one head vector per line. The reader
//! yields one record per line: a tree, or the recoverable
//! [`TreebankRecord::EmptyLine`] signal for blank lines (which commonly
//! separate sentences in treebank exports).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::graphs::RootedTree;
use crate::head_vector::HeadVector;
use crate::io::ParseError;

/// One record of a treebank file.
#[derive(Debug)]
pub enum TreebankRecord {
    /// A successfully parsed tree.
    Tree(RootedTree),
    /// The line was empty. Recoverable; not an error.
    EmptyLine,
}

/// Reads a treebank line by line.
///
/// # Example
/// ```
/// use linarr::io::{TreebankReader, TreebankRecord};
///
/// let data = "0 1 1\n\n0 2\n";
/// let mut trees = 0;
/// for record in TreebankReader::new(data.as_bytes()) {
///     if let TreebankRecord::Tree(_) = record.unwrap() {
///         trees += 1;
///     }
/// }
/// assert_eq!(trees, 2);
/// ```
pub struct TreebankReader<R: BufRead> {
    reader: R,
    line: String,
    num_trees: usize,
}

impl TreebankReader<BufReader<File>> {
    /// Opens a treebank file.
    ///
    /// # Errors
    /// [`ParseError::Io`] if the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        Ok(TreebankReader::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> TreebankReader<R> {
    /// Wraps any buffered reader.
    pub fn new(reader: R) -> Self {
        TreebankReader { reader, line: String::new(), num_trees: 0 }
    }

    /// Number of trees successfully produced so far.
    pub fn num_trees(&self) -> usize {
        self.num_trees
    }

    /// Reads the next record, or `None` at end of input.
    pub fn next_record(&mut self) -> Option<Result<TreebankRecord, ParseError>> {
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => None,
            Ok(_) => {
                let line = self.line.trim_end_matches(&['\n', '\r'][..]);
                if line.trim().is_empty() {
                    return Some(Ok(TreebankRecord::EmptyLine));
                }
                match line.parse::<HeadVector>() {
                    Ok(hv) => {
                        self.num_trees += 1;
                        Some(Ok(TreebankRecord::Tree(hv.to_rooted_tree())))
                    }
                    Err(e) => Some(Err(e)),
                }
            }
            Err(e) => Some(Err(ParseError::Io(e))),
        }
    }
}

impl<R: BufRead> Iterator for TreebankReader<R> {
    type Item = Result<TreebankRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// Reads every tree of a treebank, skipping empty lines and warning on
/// malformed records instead of failing.
pub fn read_treebank<R: BufRead>(reader: R) -> Vec<RootedTree> {
    let mut trees = Vec::new();
    for (line_no, record) in TreebankReader::new(reader).enumerate() {
        match record {
            Ok(TreebankRecord::Tree(t)) => trees.push(t),
            Ok(TreebankRecord::EmptyLine) => {}
            Err(e) => warn!(line = line_no + 1, error = %e, "skipping malformed treebank record"),
        }
    }
    trees
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::Graph;

    #[test]
    fn reads_records_and_signals_empty_lines() {
        let data = "0 1 1\n\r\n2 0\n";
        let mut reader = TreebankReader::new(data.as_bytes());

        assert!(matches!(reader.next_record(), Some(Ok(TreebankRecord::Tree(_)))));
        assert!(matches!(reader.next_record(), Some(Ok(TreebankRecord::EmptyLine))));
        match reader.next_record() {
            Some(Ok(TreebankRecord::Tree(t))) => {
                assert_eq!(t.root(), Some(1));
                assert_eq!(t.num_nodes(), 2);
            }
            other => panic!("expected a tree, got {:?}", other.map(|r| r.is_ok())),
        }
        assert!(reader.next_record().is_none());
        assert_eq!(reader.num_trees(), 2);
    }

    #[test]
    fn read_treebank_skips_bad_lines() {
        let data = "0 1\nnot a tree\n0 1 1\n";
        let trees = read_treebank(data.as_bytes());
        assert_eq!(trees.len(), 2);
    }
}
