/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- A generic traversal iterator ([`TraversalSearch`]) that yields nodes in breadth-first or
  depth-first order depending on the frontier it is parameterized with.
- Topological ordering of directed graphs via Kahn's algorithm, both lazily ([`TopoSearch`])
  and as a checked list ([`Traversal::topological_sort`]).
- A high-level [`Traversal`] trait that exposes these algorithms directly as methods on graph
  data structures.

Traversals starting at a node that does not exist yield nothing.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// If *true*, nodes are marked visited when they are popped and neighbors are pushed in
    /// reverse adjacency order. Otherwise nodes are marked visited when they are pushed.
    const DEPTH_FIRST: bool;

    /// Creates an empty sequencer
    fn empty() -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns a reference to the next node without removing it.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;

    /// Removes all items from the frontier
    fn clear(&mut self);
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    const DEPTH_FIRST: bool = false;

    fn empty() -> Self {
        Self::new()
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn peek(&self) -> Option<&T> {
        self.front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    const DEPTH_FIRST: bool = true;

    fn empty() -> Self {
        Self::new()
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<&T> {
        self.last()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        Vec::clear(self)
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit and a set of visited
/// nodes. Every node reachable from the start is yielded exactly once.
///
/// - BFS marks nodes on enqueue and expands neighbors in adjacency order, so the one-hop
///   neighbors of the start are yielded in insertion order.
/// - DFS marks nodes on pop and pushes neighbors in reverse adjacency order, so the first
///   neighbor is explored first.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<G::Id>,
{
    graph: &'a G,
    start: Option<G::Id>,
    visited: IdSet<G::Id>,
    sequencer: S,
    stop_at: Option<G::Id>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<<G as GraphType>::Id>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<<G as GraphType>::Id>>;

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<G::Id>,
{
    type Item = G::Id;

    fn next(&mut self) -> Option<Self::Item> {
        let u = loop {
            let u = self.sequencer.pop()?;
            if !S::DEPTH_FIRST {
                break u;
            }
            if self.visited.insert(u.clone()) {
                break u;
            }
        };

        if self.stop_at.as_ref() == Some(&u) {
            self.sequencer.clear();
            return Some(u);
        }

        let unvisited: Vec<G::Id> = self
            .graph
            .neighbors_of(&u)
            .filter(|(v, _)| !self.visited.contains(*v))
            .map(|(v, _)| v.clone())
            .collect();

        if S::DEPTH_FIRST {
            for v in unvisited.into_iter().rev() {
                self.sequencer.push(v);
            }
        } else {
            for v in unvisited {
                if self.visited.insert(v.clone()) {
                    self.sequencer.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A depth-first stack may only hold already visited nodes
        let pending = !S::DEPTH_FIRST && self.sequencer.cardinality() > 0;
        (usize::from(pending), Some(self.graph.len()))
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<G::Id>,
{
    /// Creates a new traversal iterator starting from `start`.
    /// If `start` does not exist, the iterator is empty.
    ///
    /// - `graph`: The graph to traverse.
    /// - `start`: The starting node.
    pub fn new(graph: &'a G, start: G::Id) -> Self {
        let mut visited = IdSet::from_capacity(graph.len());
        let mut sequencer = S::empty();

        let start = graph.has_node(&start).then_some(start);
        if let Some(s) = &start {
            if !S::DEPTH_FIRST {
                visited.insert(s.clone());
            }
            sequencer.push(s.clone());
        }

        Self {
            graph,
            start,
            visited,
            sequencer,
            stop_at: None,
        }
    }

    /// Returns a reference to the graph being traversed
    pub fn graph_ref(&self) -> &G {
        self.graph
    }

    /// Returns *true* if `u` was already visited (or excluded)
    pub fn did_visit_node(&self, u: &G::Id) -> bool {
        self.visited.contains(u)
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: G::Id) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: G::Id) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken. Excluding the start node has no effect.
    ///
    /// # Warning
    /// Calling this method has no effect on a BFS if the node is already queued. It is therefore
    /// highly recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: G::Id) {
        if self.start.as_ref() != Some(&u) {
            self.visited.insert(u);
        }
    }

    /// Builder variant of [`TraversalSearch::exclude_node`]
    pub fn with_node_excluded(mut self, u: G::Id) -> Self {
        self.exclude_node(u);
        self
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = G::Id>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::with_node_excluded`].
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = G::Id>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Consumes the traversal search and returns true iff the requested node is visited, i.e.
    /// if there exists a path from the start node to u.
    pub fn is_node_reachable(mut self, u: &G::Id) -> bool {
        self.any(|v| v == *u)
    }
}

/// Iterator implementing topological ordering over a directed graph.
///
/// Uses Kahn's algorithm:
/// - Initializes a FIFO queue with all nodes of in-degree 0 (in increasing id order).
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - Stops once all nodes are output or only nodes on or behind cycles remain.
///
/// In-degrees count adjacency entries, so parallel edges are counted once per entry and
/// decremented the same way.
pub struct TopoSearch<Id> {
    index: IdIndex<Id>,
    out_nbs: Vec<Vec<usize>>,
    in_degs: Vec<usize>,
    queue: VecDeque<usize>,
    emitted: usize,
}

impl<Id: NodeId> Iterator for TopoSearch<Id> {
    type Item = Id;

    /// Returns the next node in topological order, if available.
    ///
    /// - Each returned node is guaranteed to appear after all its predecessors.
    /// - If the graph has a cycle, iteration will terminate early without
    ///   covering all nodes.
    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &v in &self.out_nbs[u] {
            self.in_degs[v] -= 1;
            if self.in_degs[v] == 0 {
                self.queue.push_back(v);
            }
        }

        self.emitted += 1;
        Some(self.index.id_of(u).clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.index.len() - self.emitted))
    }
}

impl<Id: NodeId> TopoSearch<Id> {
    /// Constructs a new topological search on the given directed graph,
    /// initializing in-degree counts and collecting the initial set of
    /// zero in-degree nodes.
    pub fn new<G>(graph: &G) -> GraphResult<Self>
    where
        G: AdjacencyList<Id = Id>,
    {
        if graph.is_undirected() {
            return Err(GraphError::requires_directed("topological sort"));
        }

        let index = IdIndex::new(graph.ordered_vertices().iter());
        let out_nbs = index.adjacency(graph);

        let mut in_degs = vec![0usize; index.len()];
        for &v in out_nbs.iter().flatten() {
            in_degs[v] += 1;
        }

        let queue = (0..index.len()).filter(|&u| in_degs[u] == 0).collect();

        Ok(Self {
            index,
            out_nbs,
            in_degs,
            queue,
            emitted: 0,
        })
    }

    /// Returns the number of nodes yielded so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns *true* if every node of the graph was yielded.
    /// Only meaningful once the iterator is exhausted.
    pub fn is_complete(&self) -> bool {
        self.emitted == self.index.len()
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order, reachability)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let g: PlainGraph<u32> = Graph::from_edges(false, [(0, 1), (1, 2), (0, 3)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// assert_eq!(g.bfs(7).count(), 0);
    /// ```
    fn bfs(&self, start: Self::Id) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let g: PlainGraph<u32> = Graph::from_edges(false, [(0, 1), (1, 2), (0, 3)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// ```
    fn dfs(&self, start: Self::Id) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns *true* if there exists a path from `u` to `v`.
    /// Every existing node reaches itself.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let g: PlainGraph<u32> = Graph::from_edges(true, [(0, 1), (1, 2)]);
    /// assert!(g.is_reachable(&0, &2));
    /// assert!(!g.is_reachable(&2, &0));
    /// ```
    fn is_reachable(&self, u: &Self::Id, v: &Self::Id) -> bool {
        self.bfs(u.clone()).is_node_reachable(v)
    }

    /// Returns an iterator yielding nodes in a **topological order**.
    /// Terminates early if the graph contains a cycle.
    ///
    /// # Errors
    /// Returns [`GraphError::RequiresDirected`] if the graph is undirected.
    fn topo_search(&self) -> GraphResult<TopoSearch<Self::Id>> {
        TopoSearch::new(self)
    }

    /// Computes a topological order of all nodes of a directed graph with Kahn's algorithm.
    ///
    /// # Errors
    /// - [`GraphError::RequiresDirected`] if the graph is undirected,
    /// - [`GraphError::CycleDetected`] if the graph has a cycle.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let mut g: PlainGraph<u32> = Graph::from_edges(true, [(1, 2), (2, 3), (3, 4), (4, 1)]);
    /// assert_eq!(g.topological_sort(), Err(GraphError::CycleDetected));
    ///
    /// g.remove_edge(&4, &1);
    /// assert_eq!(g.topological_sort(), Ok(vec![1, 2, 3, 4]));
    /// ```
    fn topological_sort(&self) -> GraphResult<Vec<Self::Id>> {
        let mut search = self.topo_search()?;
        let order: Vec<_> = search.by_ref().collect();

        if !search.is_complete() {
            debug!(
                nodes = self.number_of_nodes(),
                emitted = order.len(),
                "topological sort found a cycle"
            );
            return Err(GraphError::CycleDetected);
        }

        Ok(order)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
