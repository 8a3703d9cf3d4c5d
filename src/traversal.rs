//! Graph traversals with pluggable callbacks.
//!
//! A single engine, [`Traversal`], is parametric over the frontier
//! container — a queue yields breadth-first search ([`Bfs`]), a stack yields
//! depth-first search ([`Dfs`]) — and over the graph kind through the
//! [`Graph`] capability.
//!
//! The traversal can be steered by four optional callbacks:
//!
//! * `terminate(state, u)` — stop the whole traversal; checked *after* the
//!   current node has been processed;
//! * `process_current(state, u)` — invoked when `u` is popped;
//! * `process_neighbour(state, u, v, natural)` — invoked for every
//!   neighbour `v` of `u`; `natural` is false when the edge was followed
//!   against its direction (reverse edges on directed graphs);
//! * `should_add(state, u, v)` — veto pushing `v` onto the frontier.
//!
//! Options: process already-visited neighbours (off by default) and use of
//! reverse edges on directed graphs (off by default). The start can be a
//! single source or a set of sources.
//!
//! # Example
//! ```
//! use linarr::graphs::UndirectedGraph;
//! use linarr::traversal::Bfs;
//!
//! let mut g = UndirectedGraph::new(4);
//! g.add_edges(&[(0, 1), (1, 2), (2, 3)], true, false).unwrap();
//!
//! let mut order = Vec::new();
//! let mut bfs = Bfs::new(&g);
//! bfs.set_process_current(|_, u| order.push(u));
//! bfs.start_at(0);
//! drop(bfs);
//! assert_eq!(order, vec![0, 1, 2, 3]);
//! ```

use std::collections::VecDeque;

use crate::defs::Vertex;
use crate::graphs::Graph;

/// Frontier container abstraction: queue for BFS, stack for DFS.
pub trait Container: Default {
    fn push(&mut self, v: Vertex);
    fn pop(&mut self) -> Option<Vertex>;
    fn clear(&mut self);
}

/// FIFO frontier; makes the traversal breadth-first.
#[derive(Debug, Default)]
pub struct QueueContainer(VecDeque<Vertex>);

impl Container for QueueContainer {
    fn push(&mut self, v: Vertex) {
        self.0.push_back(v);
    }
    fn pop(&mut self) -> Option<Vertex> {
        self.0.pop_front()
    }
    fn clear(&mut self) {
        self.0.clear();
    }
}

/// LIFO frontier; makes the traversal depth-first.
#[derive(Debug, Default)]
pub struct StackContainer(Vec<Vertex>);

impl Container for StackContainer {
    fn push(&mut self, v: Vertex) {
        self.0.push(v);
    }
    fn pop(&mut self) -> Option<Vertex> {
        self.0.pop()
    }
    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Visited bookkeeping exposed to the callbacks.
#[derive(Debug)]
pub struct TraversalState {
    visited: Vec<bool>,
}

impl TraversalState {
    fn new(n: usize) -> Self {
        TraversalState { visited: vec![false; n] }
    }

    /// Whether `u` has been visited.
    pub fn was_visited(&self, u: Vertex) -> bool {
        self.visited[u]
    }

    /// Whether every vertex has been visited.
    pub fn all_visited(&self) -> bool {
        self.visited.iter().all(|&v| v)
    }

    /// Number of visited vertices.
    pub fn num_visited(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}

type Bool1<'a> = Box<dyn FnMut(&TraversalState, Vertex) -> bool + 'a>;
type Proc1<'a> = Box<dyn FnMut(&TraversalState, Vertex) + 'a>;
type Proc2<'a> = Box<dyn FnMut(&TraversalState, Vertex, Vertex, bool) + 'a>;
type Bool2<'a> = Box<dyn FnMut(&TraversalState, Vertex, Vertex) -> bool + 'a>;

/// The traversal engine. See the [module docs](self) for usage.
pub struct Traversal<'a, G: Graph, C: Container> {
    graph: &'a G,
    state: TraversalState,
    frontier: C,
    use_rev_edges: bool,
    process_visited_neighbours: bool,
    terminate: Option<Bool1<'a>>,
    process_current: Option<Proc1<'a>>,
    process_neighbour: Option<Proc2<'a>>,
    should_add: Option<Bool2<'a>>,
}

/// Breadth-first traversal.
pub type Bfs<'a, G> = Traversal<'a, G, QueueContainer>;
/// Depth-first traversal.
pub type Dfs<'a, G> = Traversal<'a, G, StackContainer>;

impl<'a, G: Graph, C: Container> Traversal<'a, G, C> {
    /// Creates a traversal over `graph` with default settings and no
    /// callbacks.
    pub fn new(graph: &'a G) -> Self {
        Traversal {
            graph,
            state: TraversalState::new(graph.num_nodes()),
            frontier: C::default(),
            use_rev_edges: false,
            process_visited_neighbours: false,
            terminate: None,
            process_current: None,
            process_neighbour: None,
            should_add: None,
        }
    }

    /// Resets visited marks and clears the frontier; callbacks and options
    /// are kept.
    pub fn reset(&mut self) {
        self.state.visited.iter_mut().for_each(|v| *v = false);
        self.frontier.clear();
    }

    /// Follow reverse edges on directed graphs.
    pub fn set_use_rev_edges(&mut self, use_rev: bool) {
        self.use_rev_edges = use_rev;
    }

    /// Invoke the neighbour callback for already-visited neighbours too.
    pub fn set_process_visited_neighbours(&mut self, process: bool) {
        self.process_visited_neighbours = process;
    }

    /// Sets the early-termination predicate.
    pub fn set_terminate(&mut self, f: impl FnMut(&TraversalState, Vertex) -> bool + 'a) {
        self.terminate = Some(Box::new(f));
    }

    /// Sets the callback invoked when a node is popped from the frontier.
    pub fn set_process_current(&mut self, f: impl FnMut(&TraversalState, Vertex) + 'a) {
        self.process_current = Some(Box::new(f));
    }

    /// Sets the callback invoked for every traversed edge `(u, v)`.
    pub fn set_process_neighbour(&mut self, f: impl FnMut(&TraversalState, Vertex, Vertex, bool) + 'a) {
        self.process_neighbour = Some(Box::new(f));
    }

    /// Sets the predicate deciding whether a yet-unvisited neighbour joins
    /// the frontier.
    pub fn set_should_add(&mut self, f: impl FnMut(&TraversalState, Vertex, Vertex) -> bool + 'a) {
        self.should_add = Some(Box::new(f));
    }

    /// Marks `u` visited without traversing it.
    pub fn set_visited(&mut self, u: Vertex, visited: bool) {
        self.state.visited[u] = visited;
    }

    /// Read access to the visited bookkeeping.
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Starts the traversal at a single source.
    ///
    /// # Panics
    /// Panics if `source` is out of range.
    pub fn start_at(&mut self, source: Vertex) {
        self.frontier.push(source);
        self.state.visited[source] = true;
        self.run();
    }

    /// Starts the traversal at every vertex of `sources`.
    ///
    /// # Panics
    /// Panics if any source is out of range.
    pub fn start_at_sources(&mut self, sources: &[Vertex]) {
        for &s in sources {
            self.frontier.push(s);
            self.state.visited[s] = true;
        }
        self.run();
    }

    fn run(&mut self) {
        while let Some(u) = self.frontier.pop() {
            if let Some(f) = self.process_current.as_mut() {
                f(&self.state, u);
            }
            // termination is checked after the current node is processed
            if let Some(f) = self.terminate.as_mut() {
                if f(&self.state, u) {
                    break;
                }
            }

            let graph = self.graph;
            for &v in graph.out_neighbours(u) {
                self.deal_with_neighbour(u, v, true);
            }
            if graph.is_directed() && self.use_rev_edges {
                for &v in graph.in_neighbours(u) {
                    self.deal_with_neighbour(u, v, false);
                }
            }
        }
    }

    fn deal_with_neighbour(&mut self, u: Vertex, v: Vertex, natural: bool) {
        let visited = self.state.visited[v];
        if !visited || self.process_visited_neighbours {
            if let Some(f) = self.process_neighbour.as_mut() {
                f(&self.state, u, v, natural);
            }
        }
        if !visited {
            let add = match self.should_add.as_mut() {
                Some(f) => f(&self.state, u, v),
                None => true,
            };
            if add {
                self.frontier.push(v);
                self.state.visited[v] = true;
            }
        }
    }
}
