/*!
# Single-Source Shortest Paths

Weighted shortest paths over an extractor `Fn(&EdgeProp) -> W`:
- [`PathFinding::dijkstra`] for non-negative weights,
- [`PathFinding::bellman_ford`] for arbitrary weights, additionally reporting whether a negative
  cycle is reachable from the start,
- [`PathFinding::has_negative_cycle`] to check the whole graph for negative cycles.

Both searches return distances and predecessors for *every* node of the graph. Unreachable
nodes keep the distance [`Weight::INFINITY`] and no predecessor.

Note that an undirected edge is stored in both directions, so a single undirected edge with
negative weight already forms a negative cycle.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::{debug, trace};

use super::*;

/// Walks the predecessor chain back from `target` and returns the path `start, ..., target`.
///
/// The path is empty if `target` has no predecessor, i.e. if `target` is the start node itself
/// or unreachable; consult the distance map to tell both apart. It is also empty if the chain
/// does not end in a node without predecessor (which only happens if a negative cycle was
/// reached).
///
/// # Examples
/// ```
/// use propgraph::{prelude::*, algo::*, utils::IdMap};
///
/// let predecessors: IdMap<u32, Option<u32>> =
///     [(1, None), (2, Some(1)), (3, Some(2)), (4, None)].into_iter().collect();
///
/// assert_eq!(reconstruct_path(&predecessors, &3), vec![1, 2, 3]);
/// assert!(reconstruct_path(&predecessors, &1).is_empty());
/// assert!(reconstruct_path(&predecessors, &4).is_empty());
/// ```
pub fn reconstruct_path<Id: NodeId>(predecessors: &IdMap<Id, Option<Id>>, target: &Id) -> Vec<Id> {
    let mut path = vec![target.clone()];
    let mut current = target;

    while let Some(Some(pred)) = predecessors.get(current) {
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        path.push(pred.clone());
        current = pred;
    }

    if path.len() == 1 {
        return Vec::new();
    }

    path.reverse();
    path
}

/// Result of a single-source shortest path search
#[derive(Debug, Clone)]
pub struct ShortestPaths<Id, W> {
    /// Distance from the start to every node; [`Weight::INFINITY`] if unreachable
    pub distances: IdMap<Id, W>,
    /// Predecessor of every node on a shortest path; `None` for the start and unreachable nodes
    pub predecessors: IdMap<Id, Option<Id>>,
}

impl<Id: NodeId, W: PartialEq> PartialEq for ShortestPaths<Id, W> {
    fn eq(&self, other: &Self) -> bool {
        self.distances == other.distances && self.predecessors == other.predecessors
    }
}

impl<Id: NodeId, W: Weight> ShortestPaths<Id, W> {
    /// Returns the distance to `target` or `None` if `target` is unknown or unreachable
    pub fn distance_to(&self, target: &Id) -> Option<W> {
        self.distances.get(target).copied().filter(|d| !d.is_infinite())
    }

    /// Returns the path `start, ..., target` as described in [`reconstruct_path`]
    pub fn path_to(&self, target: &Id) -> Vec<Id> {
        reconstruct_path(&self.predecessors, target)
    }
}

/// Result of a Bellman-Ford search
#[derive(Debug, Clone)]
pub struct BellmanFordPaths<Id, W> {
    /// Distance from the start to every node; [`Weight::INFINITY`] if unreachable.
    /// Meaningless for nodes on or behind a negative cycle.
    pub distances: IdMap<Id, W>,
    /// Predecessor of every node on a shortest path; `None` for the start and unreachable nodes
    pub predecessors: IdMap<Id, Option<Id>>,
    /// *true* if a negative cycle is reachable from the start
    pub has_negative_cycle: bool,
}

impl<Id: NodeId, W: PartialEq> PartialEq for BellmanFordPaths<Id, W> {
    fn eq(&self, other: &Self) -> bool {
        self.has_negative_cycle == other.has_negative_cycle
            && self.distances == other.distances
            && self.predecessors == other.predecessors
    }
}

impl<Id: NodeId, W: Weight> BellmanFordPaths<Id, W> {
    /// Returns the distance to `target` or `None` if `target` is unknown or unreachable
    pub fn distance_to(&self, target: &Id) -> Option<W> {
        self.distances.get(target).copied().filter(|d| !d.is_infinite())
    }

    /// Returns the path `start, ..., target` as described in [`reconstruct_path`]
    pub fn path_to(&self, target: &Id) -> Vec<Id> {
        reconstruct_path(&self.predecessors, target)
    }
}

/// Entry of the Dijkstra priority queue; the smallest distance is popped first
#[derive(Debug, Clone, Copy)]
struct MinScored<W> {
    distance: W,
    node: usize,
}

impl<W: Weight> PartialEq for MinScored<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for MinScored<W> {}

impl<W: Weight> Ord for MinScored<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smaller distance first, then smaller index
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<W: Weight> PartialOrd for MinScored<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dense Bellman-Ford state shared by single-source runs
struct RelaxationNetwork<W> {
    n: usize,
    edges: Vec<(usize, usize, W)>,
}

/// Outcome of a dense Bellman-Ford run
struct Relaxed<W> {
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    has_negative_cycle: bool,
    passes: usize,
}

impl<W: Weight> RelaxationNetwork<W> {
    fn new(adjacency: Vec<Vec<(usize, W)>>) -> Self {
        let n = adjacency.len();
        let edges = adjacency
            .into_iter()
            .enumerate()
            .flat_map(|(u, nbs)| nbs.into_iter().map(move |(v, w)| (u, v, w)))
            .collect();
        Self { n, edges }
    }

    /// Relaxes all edges once and returns *true* if any distance improved
    fn relax_all(&self, distances: &mut [W], predecessors: &mut [Option<usize>]) -> bool {
        let mut improved = false;
        for &(u, v, w) in &self.edges {
            if distances[u].is_infinite() {
                continue;
            }
            let candidate = distances[u].add_or_infinity(w);
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                improved = true;
            }
        }
        improved
    }

    fn run(&self, start: usize) -> Relaxed<W> {
        let mut distances = vec![W::INFINITY; self.n];
        let mut predecessors = vec![None; self.n];
        distances[start] = W::zero();

        let mut passes = 0;
        let mut converged = false;
        while passes + 1 < self.n {
            passes += 1;
            if !self.relax_all(&mut distances, &mut predecessors) {
                converged = true;
                break;
            }
            trace!(pass = passes, "bellman-ford pass improved distances");
        }

        // Integer distances clamp at their minimum, so a cycle may stop improving. It still
        // shows up as a cycle among the predecessors.
        let has_negative_cycle = !converged
            && (self.edges.iter().any(|&(u, v, w)| {
                !distances[u].is_infinite() && distances[u].add_or_infinity(w) < distances[v]
            }) || has_predecessor_cycle(&predecessors));

        Relaxed {
            distances,
            predecessors,
            has_negative_cycle,
            passes,
        }
    }
}

/// Returns *true* if following predecessors from some node leads into a cycle
fn has_predecessor_cycle(predecessors: &[Option<usize>]) -> bool {
    // 0: unseen, 1: on the current chain, 2: done
    let mut state = vec![0u8; predecessors.len()];

    for start in 0..predecessors.len() {
        let mut u = start;
        while state[u] == 0 {
            state[u] = 1;
            match predecessors[u] {
                Some(p) => u = p,
                None => break,
            }
        }
        if state[u] == 1 && predecessors[u].is_some() {
            return true;
        }

        let mut u = start;
        while state[u] == 1 {
            state[u] = 2;
            match predecessors[u] {
                Some(p) => u = p,
                None => break,
            }
        }
    }

    false
}

/// Maps dense distances and predecessors back to identifiers
fn into_maps<Id: NodeId, W: Weight>(
    index: &IdIndex<Id>,
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
) -> (IdMap<Id, W>, IdMap<Id, Option<Id>>) {
    let distances = index.ids().iter().cloned().zip(distances).collect();
    let predecessors = index
        .ids()
        .iter()
        .cloned()
        .zip(
            predecessors
                .into_iter()
                .map(|p| p.map(|i| index.id_of(i).clone())),
        )
        .collect();
    (distances, predecessors)
}

/// Provides weighted single-source shortest path searches
pub trait PathFinding: AdjacencyList + Sized {
    /// Computes shortest paths from `start` with Dijkstra's algorithm.
    ///
    /// Weights returned by `extractor` must be non-negative. This is not verified: negative
    /// weights produce silently incorrect results.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `start` does not exist.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let g: Graph<(), char, u32> =
    ///     Graph::from_edges(true, [('a', 'b', 4), ('a', 'c', 1), ('c', 'b', 2), ('b', 'd', 5)]);
    ///
    /// let paths = g.dijkstra(&'a', |w| *w).unwrap();
    /// assert_eq!(paths.distance_to(&'d'), Some(8));
    /// assert_eq!(paths.path_to(&'d'), vec!['a', 'c', 'b', 'd']);
    /// ```
    fn dijkstra<W, F>(&self, start: &Self::Id, extractor: F) -> GraphResult<ShortestPaths<Self::Id, W>>
    where
        W: Weight,
        F: FnMut(&Self::EdgeProp) -> W,
    {
        let index = IdIndex::from_graph(self);
        let s = index
            .index_of(start)
            .ok_or_else(|| GraphError::node_not_found("start", start))?;
        let adjacency = index.weighted_adjacency(self, extractor);

        let n = index.len();
        let mut distances = vec![W::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut heap = BinaryHeap::with_capacity(n);

        distances[s] = W::zero();
        heap.push(MinScored {
            distance: W::zero(),
            node: s,
        });

        let mut settled = 0usize;
        while let Some(MinScored { distance, node: u }) = heap.pop() {
            if distance > distances[u] {
                continue;
            }
            settled += 1;

            for &(v, w) in &adjacency[u] {
                let candidate = distance.add_or_infinity(w);
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    heap.push(MinScored {
                        distance: candidate,
                        node: v,
                    });
                }
            }
        }

        debug!(nodes = n, settled, "dijkstra finished");

        let (distances, predecessors) = into_maps(&index, distances, predecessors);
        Ok(ShortestPaths {
            distances,
            predecessors,
        })
    }

    /// Computes shortest paths from `start` with the Bellman-Ford algorithm.
    ///
    /// Performs at most `n - 1` relaxation passes (stopping early once nothing improves) and a
    /// final detection pass. Edges leaving unreachable nodes are never relaxed.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `start` does not exist.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let g: Graph<(), u32, i64> = Graph::from_edges(true, [(1, 2, 4), (1, 3, 5), (3, 2, -3)]);
    ///
    /// let paths = g.bellman_ford(&1, |w| *w).unwrap();
    /// assert!(!paths.has_negative_cycle);
    /// assert_eq!(paths.distance_to(&2), Some(2));
    /// assert_eq!(paths.path_to(&2), vec![1, 3, 2]);
    /// ```
    fn bellman_ford<W, F>(
        &self,
        start: &Self::Id,
        extractor: F,
    ) -> GraphResult<BellmanFordPaths<Self::Id, W>>
    where
        W: Weight,
        F: FnMut(&Self::EdgeProp) -> W,
    {
        let index = IdIndex::from_graph(self);
        let s = index
            .index_of(start)
            .ok_or_else(|| GraphError::node_not_found("start", start))?;

        let network = RelaxationNetwork::new(index.weighted_adjacency(self, extractor));
        let relaxed = network.run(s);

        if relaxed.has_negative_cycle {
            debug!(start = ?start, "bellman-ford reached a negative cycle");
        }
        debug!(
            nodes = network.n,
            edges = network.edges.len(),
            passes = relaxed.passes,
            "bellman-ford finished"
        );

        let (distances, predecessors) = into_maps(&index, relaxed.distances, relaxed.predecessors);
        Ok(BellmanFordPaths {
            distances,
            predecessors,
            has_negative_cycle: relaxed.has_negative_cycle,
        })
    }

    /// Returns *true* if the graph contains a negative cycle anywhere, by running Bellman-Ford
    /// from every node.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let mut g: Graph<(), u32, i32> = Graph::from_edges(true, [(1, 2, 1), (2, 3, -2)]);
    /// assert!(!g.has_negative_cycle(|w| *w));
    ///
    /// g.add_edge(3, 1, -1);
    /// assert!(g.has_negative_cycle(|w| *w));
    /// ```
    fn has_negative_cycle<W, F>(&self, extractor: F) -> bool
    where
        W: Weight,
        F: FnMut(&Self::EdgeProp) -> W,
    {
        let index = IdIndex::new(self.ordered_vertices().iter());
        let network = RelaxationNetwork::new(index.weighted_adjacency(self, extractor));

        let found = (0..network.n).find(|&s| network.run(s).has_negative_cycle);
        if let Some(s) = found {
            debug!(start = ?index.id_of(s), "negative cycle detected");
        }
        found.is_some()
    }
}

impl<G> PathFinding for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn classic() -> Graph<(), u32, u32> {
        Graph::from_edges(
            true,
            [
                (0, 1, 7),
                (0, 2, 9),
                (0, 5, 14),
                (1, 2, 10),
                (1, 3, 15),
                (2, 3, 11),
                (2, 5, 2),
                (3, 4, 6),
                (5, 4, 9),
            ],
        )
    }

    #[test]
    fn dijkstra_distances() {
        let mut graph = classic();
        graph.add_node(6);

        let paths = graph.dijkstra(&0, |w| *w).unwrap();
        assert_eq!(paths.distances[&0], 0);
        assert_eq!(paths.distances[&3], 20);
        assert_eq!(paths.distances[&4], 20);
        assert_eq!(paths.distances[&5], 11);
        assert_eq!(paths.distances[&6], u32::MAX);
        assert_eq!(paths.distance_to(&6), None);
        assert_eq!(paths.predecessors[&6], None);
        assert_eq!(paths.predecessors[&0], None);

        assert_eq!(paths.path_to(&4), vec![0, 2, 5, 4]);
        assert!(paths.path_to(&0).is_empty());
        assert!(paths.path_to(&6).is_empty());
        assert_eq!(paths.distances.len(), 7);
    }

    #[test]
    fn dijkstra_missing_start() {
        let err = classic().dijkstra(&42, |w| *w).unwrap_err();
        assert_eq!(err, GraphError::node_not_found("start", &42u32));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn dijkstra_float_and_parallel_edges() {
        let graph: Graph<(), &str, f64> =
            Graph::from_edges(false, [("a", "b", 2.5), ("a", "b", 1.0), ("b", "c", 0.5)]);

        let paths = graph.dijkstra(&"c", |w| *w).unwrap();
        assert_eq!(paths.distance_to(&"a"), Some(1.5));
        assert_eq!(paths.path_to(&"a"), vec!["c", "b", "a"]);
    }

    #[test]
    fn bellman_ford_negative_cycle() {
        let graph: Graph<(), u32, i32> = Graph::from_edges(true, [(1, 2, 1), (2, 3, -2), (3, 1, -1)]);

        assert!(graph.bellman_ford(&1, |w| *w).unwrap().has_negative_cycle);
        assert!(graph.has_negative_cycle(|w| *w));
    }

    #[test]
    fn negative_cycle_near_integer_bounds() {
        let graph: Graph<(), u32, i32> = Graph::from_edges(
            true,
            [(1, 2, -1_000_000_000), (2, 3, -1_000_000_000), (3, 1, -1_000_000_000)],
        );

        let paths = graph.bellman_ford(&1, |w| *w).unwrap();
        assert!(paths.has_negative_cycle);
        assert!(graph.has_negative_cycle(|w| *w));

        // a long acyclic chain clamps but is no cycle
        let chain: Graph<(), u32, i32> =
            Graph::from_edges(true, [(1, 2, i32::MIN + 1), (2, 3, -5), (3, 4, -5)]);
        assert!(!chain.bellman_ford(&1, |w| *w).unwrap().has_negative_cycle);
        assert!(!chain.has_negative_cycle(|w| *w));
    }

    #[test]
    fn bellman_ford_unreachable_cycle() {
        // negative cycle 3 <-> 4 not reachable from 1
        let graph: Graph<(), u32, i32> =
            Graph::from_edges(true, [(1, 2, 3), (3, 4, -2), (4, 3, 1)]);

        let paths = graph.bellman_ford(&1, |w| *w).unwrap();
        assert!(!paths.has_negative_cycle);
        assert_eq!(paths.distance_to(&2), Some(3));
        assert_eq!(paths.distances[&3], i32::MAX);
        assert!(graph.has_negative_cycle(|w| *w));

        assert_eq!(
            graph.bellman_ford(&9, |w| *w).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn undirected_negative_edge_is_cycle() {
        let graph: Graph<(), u32, i32> = Graph::from_edges(false, [(1, 2, -1)]);
        assert!(graph.has_negative_cycle(|w| *w));
    }

    #[test]
    fn dijkstra_agrees_with_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for n in [5u32, 20, 40] {
                for _ in 0..5 {
                    let mut graph: Graph<(), u32, u64> = Graph::new(directed);
                    for u in 0..n {
                        graph.add_node(u);
                    }
                    for _ in 0..3 * n {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        graph.add_edge(u, v, rng.random_range(0..100));
                    }

                    let dijkstra = graph.dijkstra(&0, |w| *w).unwrap();
                    let bellman_ford = graph.bellman_ford(&0, |w| *w).unwrap();

                    assert!(!bellman_ford.has_negative_cycle);
                    assert_eq!(dijkstra.distances, bellman_ford.distances);
                    assert_eq!(dijkstra, graph.dijkstra(&0, |w| *w).unwrap());
                }
            }
        }
    }
}
