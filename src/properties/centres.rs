//! Centre, centroid and diameter of tree components.

use crate::defs::Vertex;
use crate::graphs::{FreeTree, Graph};
use crate::properties::size_subtrees;

/// Breadth-first distances from `source` within its component, plus the
/// parent of each reached vertex and the farthest vertex (smallest
/// identifier on ties).
fn bfs_distances(tree: &FreeTree, source: Vertex) -> (Vec<u64>, Vec<usize>, Vertex) {
    let n = tree.num_nodes();
    let mut dist = vec![u64::MAX; n];
    let mut parent = vec![usize::MAX; n];
    let mut queue = std::collections::VecDeque::new();

    dist[source] = 0;
    queue.push_back(source);
    let mut farthest = source;
    while let Some(u) = queue.pop_front() {
        if dist[u] > dist[farthest] {
            farthest = u;
        }
        for &v in tree.neighbours(u) {
            if dist[v] == u64::MAX {
                dist[v] = dist[u] + 1;
                parent[v] = u;
                queue.push_back(v);
            }
        }
    }
    (dist, parent, farthest)
}

/// The centre of the component of `start`: the one or two vertices of
/// minimum eccentricity, smallest identifier first.
///
/// Found with two breadth-first searches: the midpoint (or middle pair) of
/// a longest path is the centre of a tree.
///
/// # Panics
/// Panics if `start` is out of range.
pub fn centre_of_component(tree: &FreeTree, start: Vertex) -> (Vertex, Option<Vertex>) {
    let (_, _, a) = bfs_distances(tree, start);
    let (dist, parent, b) = bfs_distances(tree, a);

    // walk the diameter path from b back to a
    let length = dist[b] as usize;
    let mut path = Vec::with_capacity(length + 1);
    let mut u = b;
    while u != usize::MAX {
        path.push(u);
        u = parent[u];
    }
    debug_assert_eq!(path.len(), length + 1);

    if length % 2 == 0 {
        (path[length / 2], None)
    } else {
        let c1 = path[length / 2];
        let c2 = path[length / 2 + 1];
        (c1.min(c2), Some(c1.max(c2)))
    }
}

/// The diameter of the component of `start`: the number of edges of a
/// longest path, found by a double breadth-first search.
///
/// # Panics
/// Panics if `start` is out of range.
pub fn diameter_of_component(tree: &FreeTree, start: Vertex) -> u64 {
    let (_, _, a) = bfs_distances(tree, start);
    let (dist, _, b) = bfs_distances(tree, a);
    dist[b]
}

/// The centroid of the component of `start`: the one or two vertices whose
/// heaviest adjacent subtree is smallest, smallest identifier first.
///
/// Computed by rooting the component at `start`, computing subtree sizes,
/// and descending towards the heavy side while one exists.
///
/// # Panics
/// Panics if `start` is out of range.
pub fn centroid_of_component(tree: &FreeTree, start: Vertex) -> (Vertex, Option<Vertex>) {
    let size = size_subtrees(tree, start);
    let total = size[start];

    // descend from the root into the unique subtree of more than half the
    // component, if any
    let mut v = start;
    let mut from = usize::MAX;
    'descend: loop {
        for &w in tree.neighbours(v) {
            // w is a child of v in the rooting at 'start' iff its subtree
            // is smaller; the edge back to the parent is 'from'
            if w != from && size[w] < size[v] && 2 * size[w] > total {
                from = v;
                v = w;
                continue 'descend;
            }
        }
        break;
    }

    // a second centroid exists when some adjacent side weighs exactly half
    let mut second = None;
    for &w in tree.neighbours(v) {
        let side = if size[w] < size[v] { size[w] } else { total - size[v] };
        if 2 * side == total {
            second = Some(w);
            break;
        }
    }

    match second {
        Some(w) => (v.min(w), Some(v.max(w))),
        None => (v, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_from(n: usize, edges: &[(usize, usize)]) -> FreeTree {
        let mut t = FreeTree::new(n);
        t.add_edges(edges, true, false).unwrap();
        t
    }

    #[test]
    fn even_path_has_two_centres() {
        let t = tree_from(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(centre_of_component(&t, 0), (1, Some(2)));
        assert_eq!(centroid_of_component(&t, 3), (1, Some(2)));
        assert_eq!(diameter_of_component(&t, 2), 3);
    }

    #[test]
    fn star_centre_is_the_hub() {
        let t = tree_from(6, &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        assert_eq!(centre_of_component(&t, 4), (0, None));
        assert_eq!(centroid_of_component(&t, 4), (0, None));
        assert_eq!(diameter_of_component(&t, 0), 2);
    }

    #[test]
    fn centre_and_centroid_may_differ() {
        // a "broom": path 0-1-2-3 with extra leaves 4, 5 on vertex 3
        let t = tree_from(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (3, 5)]);
        // longest path has 4 edges (e.g. 0..4): centre is vertex 2
        assert_eq!(centre_of_component(&t, 0), (2, None));
        // removing edge {2, 3} splits the tree 3/3, so both ends are centroids
        assert_eq!(centroid_of_component(&t, 0), (2, Some(3)));
        // a heavier broom head pulls the centroid to vertex 3 alone
        let t = tree_from(7, &[(0, 1), (1, 2), (2, 3), (3, 4), (3, 5), (3, 6)]);
        assert_eq!(centroid_of_component(&t, 0), (3, None));
    }

    #[test]
    fn centroid_of_component_with_detached_edge() {
        let mut t = tree_from(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        t.remove_edge(1, 2, true, false).unwrap();
        assert_eq!(centroid_of_component(&t, 0), (0, Some(1)));
        assert_eq!(centroid_of_component(&t, 4), (3, None));
    }
}
