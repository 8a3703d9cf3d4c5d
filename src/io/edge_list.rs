//! Reading graphs from edge-list text.

use std::path::Path;

use crate::defs::Edge;
use crate::graphs::{DirectedGraph, FreeTree, UndirectedGraph};
use crate::io::ParseError;

/// Parses whitespace-separated pairs of vertex identifiers.
///
/// Returns the edges and the inferred number of vertices `max_id + 1`
/// (zero for empty input).
fn parse_pairs(input: &str) -> Result<(Vec<Edge>, usize), ParseError> {
    let mut ids = Vec::new();
    for token in input.split_whitespace() {
        let id: u64 = token
            .parse()
            .map_err(|_| ParseError::MalformedToken(token.to_string()))?;
        ids.push(id as usize);
    }
    if ids.len() % 2 != 0 {
        return Err(ParseError::UnpairedVertex);
    }

    let n = ids.iter().max().map_or(0, |&m| m + 1);
    let edges = ids.chunks_exact(2).map(|c| (c[0], c[1])).collect();
    Ok((edges, n))
}

/// Parses an edge list into an undirected graph.
///
/// The vertex set is inferred as `[0, max_id]`.
///
/// # Errors
/// [`ParseError::MalformedToken`], [`ParseError::UnpairedVertex`], or
/// [`ParseError::InvalidEdge`] on self-loops and repeated edges.
pub fn parse_edge_list_undirected(input: &str) -> Result<UndirectedGraph, ParseError> {
    let (edges, n) = parse_pairs(input)?;
    let mut graph = UndirectedGraph::new(n);
    graph
        .add_edges(&edges, true, false)
        .map_err(|_| first_invalid_undirected(&edges))?;
    Ok(graph)
}

/// Parses an edge list into a directed graph; each pair is `(tail, head)`.
///
/// # Errors
/// See [`parse_edge_list_undirected`].
pub fn parse_edge_list_directed(input: &str) -> Result<DirectedGraph, ParseError> {
    let (edges, n) = parse_pairs(input)?;
    let mut graph = DirectedGraph::new(n);
    graph
        .add_edges(&edges, true, false)
        .map_err(|_| first_invalid_directed(&edges))?;
    Ok(graph)
}

/// Parses an edge list into a free tree.
///
/// # Errors
/// See [`parse_edge_list_undirected`], plus [`ParseError::NotATree`] when
/// the edges contain a cycle or do not connect all inferred vertices.
pub fn parse_edge_list_free_tree(input: &str) -> Result<FreeTree, ParseError> {
    let graph = parse_edge_list_undirected(input)?;
    let tree = FreeTree::from_undirected(graph).map_err(|_| ParseError::NotATree)?;
    if !tree.is_tree() {
        return Err(ParseError::NotATree);
    }
    Ok(tree)
}

/// Reads an undirected graph from an edge-list file.
pub fn read_edge_list_undirected<P: AsRef<Path>>(path: P) -> Result<UndirectedGraph, ParseError> {
    parse_edge_list_undirected(&std::fs::read_to_string(path)?)
}

/// Reads a directed graph from an edge-list file.
pub fn read_edge_list_directed<P: AsRef<Path>>(path: P) -> Result<DirectedGraph, ParseError> {
    parse_edge_list_directed(&std::fs::read_to_string(path)?)
}

/// Reads a free tree from an edge-list file.
pub fn read_edge_list_free_tree<P: AsRef<Path>>(path: P) -> Result<FreeTree, ParseError> {
    parse_edge_list_free_tree(&std::fs::read_to_string(path)?)
}

fn first_invalid_undirected(edges: &[Edge]) -> ParseError {
    let mut seen = std::collections::HashSet::new();
    for &(u, v) in edges {
        if u == v || !seen.insert((u.min(v), u.max(v))) {
            return ParseError::InvalidEdge(u, v);
        }
    }
    ParseError::UnpairedVertex
}

fn first_invalid_directed(edges: &[Edge]) -> ParseError {
    let mut seen = std::collections::HashSet::new();
    for &(u, v) in edges {
        if u == v || !seen.insert((u, v)) {
            return ParseError::InvalidEdge(u, v);
        }
    }
    ParseError::UnpairedVertex
}
