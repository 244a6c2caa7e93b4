/*!
# Maximum Flow (Edmonds–Karp)

Computes a maximum `s-t` flow where the capacity of every adjacency entry is read from its edge
property by a caller supplied extractor.

The residual network is keyed by ordered node pairs:
- every adjacency entry `u -> v` adds its capacity to the pair `(u, v)`, so parallel edges are
  summed and an undirected edge (stored in both directions) has capacity in both directions,
- every pair has a reverse pair `(v, u)` (of capacity `0` unless given by the graph) that
  allows pushed flow to be cancelled,
- self-loops never carry flow and are ignored.

[`EdmondsKarp`] is an iterator over the augmenting paths: each call to `next` searches a path
with the fewest edges by BFS, pushes its bottleneck and returns it. Once exhausted, the pushed
flow is maximum and [`EdmondsKarp::source_side`] describes a minimum cut.

Infinite capacities ([`Weight::INFINITY`]) are supported. If an augmenting path consists of
infinite capacities only, the flow is unbounded and reported as [`Weight::INFINITY`].
*/

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::*;

/// A path from source to sink along which flow was pushed
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentingPath<Id, W> {
    /// Nodes of the path, starting with the source and ending with the sink
    pub nodes: Vec<Id>,
    /// Amount of flow pushed along the path
    pub bottleneck: W,
}

/// Implementation of the Edmonds–Karp algorithm as an iterator over augmenting paths.
///
/// # Examples
/// ```
/// use propgraph::{prelude::*, algo::*};
///
/// let g: Graph<(), u32, u32> =
///     Graph::from_edges(true, [(1, 2, 3), (1, 3, 2), (2, 3, 1), (2, 4, 2), (3, 4, 4)]);
///
/// let mut ek = EdmondsKarp::new(&g, &1, &4, |c| *c).unwrap();
/// let first = ek.next().unwrap();
/// assert_eq!(first.nodes, vec![1, 2, 4]);
/// assert_eq!(first.bottleneck, 2);
///
/// assert_eq!(ek.max_flow(), 5);
/// assert_eq!(ek.source_side(), vec![1]);
/// ```
pub struct EdmondsKarp<Id, W> {
    index: IdIndex<Id>,
    source: usize,
    sink: usize,

    neighbors: Vec<Vec<usize>>,
    residual: IdMap<(usize, usize), W>,
    predecessor: Vec<Option<usize>>,

    flow: W,
    exhausted: bool,
}

impl<Id: NodeId, W: Weight> EdmondsKarp<Id, W> {
    /// Builds the residual network of `graph`.
    ///
    /// Returns [`GraphError::NodeNotFound`] if `source` or `sink` does not exist,
    /// [`GraphError::SourceIsSink`] if both are equal and [`GraphError::NegativeCapacity`]
    /// if the extractor yields a negative capacity for any adjacency entry.
    pub fn new<G, F>(graph: &G, source: &Id, sink: &Id, extractor: F) -> GraphResult<Self>
    where
        G: AdjacencyList<Id = Id>,
        F: FnMut(&G::EdgeProp) -> W,
    {
        let index = IdIndex::new(graph.ordered_vertices().iter());
        let s = index
            .index_of(source)
            .ok_or_else(|| GraphError::node_not_found("source", source))?;
        let t = index
            .index_of(sink)
            .ok_or_else(|| GraphError::node_not_found("sink", sink))?;
        if s == t {
            return Err(GraphError::source_is_sink(source));
        }

        let n = index.len();
        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut residual: IdMap<(usize, usize), W> = IdMap::default();

        for (u, entries) in index.weighted_adjacency(graph, extractor).into_iter().enumerate() {
            for (v, capacity) in entries {
                if capacity.is_negative() {
                    return Err(GraphError::negative_capacity(index.id_of(u), index.id_of(v)));
                }
                if u == v {
                    continue;
                }

                let forward = residual.entry((u, v)).or_insert_with(W::zero);
                *forward = forward.add_or_infinity(capacity);
                residual.entry((v, u)).or_insert_with(W::zero);

                neighbors[u].push(v);
                neighbors[v].push(u);
            }
        }

        for nbs in &mut neighbors {
            nbs.sort_unstable();
            nbs.dedup();
        }

        Ok(Self {
            index,
            source: s,
            sink: t,
            neighbors,
            residual,
            predecessor: vec![None; n],
            flow: W::zero(),
            exhausted: false,
        })
    }

    /// Returns the flow pushed so far
    pub fn flow(&self) -> W {
        self.flow
    }

    /// Pushes flow until no augmenting path remains and returns the value of the maximum flow
    pub fn max_flow(&mut self) -> W {
        let paths = self.by_ref().count();
        debug!(paths, flow = ?self.flow, "maximum flow computed");
        self.flow
    }

    /// Pushes the maximum flow and returns all nodes reachable from the source in the residual
    /// network, sorted by identifier. Together with the remaining nodes they form a minimum cut
    /// whose capacity equals the maximum flow.
    pub fn source_side(&mut self) -> Vec<Id> {
        self.max_flow();

        let mut reached = vec![false; self.index.len()];
        reached[self.source] = true;
        let mut stack = vec![self.source];

        while let Some(u) = stack.pop() {
            for &v in &self.neighbors[u] {
                if !reached[v] && self.residual_of(u, v) > W::zero() {
                    reached[v] = true;
                    stack.push(v);
                }
            }
        }

        self.index.ids_of(
            reached
                .into_iter()
                .enumerate()
                .filter_map(|(u, r)| r.then_some(u)),
        )
    }

    fn residual_of(&self, u: usize, v: usize) -> W {
        self.residual.get(&(u, v)).copied().unwrap_or_else(W::zero)
    }

    /// Searches a shortest augmenting path and stores it in `predecessor`.
    /// Returns *true* if the sink was reached.
    fn bfs(&mut self) -> bool {
        self.predecessor.iter_mut().for_each(|p| *p = None);

        let mut queue = VecDeque::from([self.source]);
        while let Some(u) = queue.pop_front() {
            for &v in &self.neighbors[u] {
                if v == self.source
                    || self.predecessor[v].is_some()
                    || self.residual_of(u, v) <= W::zero()
                {
                    continue;
                }

                self.predecessor[v] = Some(u);
                if v == self.sink {
                    return true;
                }
                queue.push_back(v);
            }
        }

        false
    }

    /// Returns the path stored in `predecessor` from source to sink
    fn stored_path(&self) -> Vec<usize> {
        let mut path = vec![self.sink];
        let mut v = self.sink;
        while let Some(u) = self.predecessor[v] {
            path.push(u);
            v = u;
        }
        path.reverse();
        path
    }
}

impl<Id: NodeId, W: Weight> Iterator for EdmondsKarp<Id, W> {
    type Item = AugmentingPath<Id, W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.bfs() {
            self.exhausted = true;
            return None;
        }

        let path = self.stored_path();
        let bottleneck = path
            .windows(2)
            .map(|e| self.residual_of(e[0], e[1]))
            .fold(W::INFINITY, W::min_weight);

        if bottleneck.is_infinite() {
            debug!("augmenting path of unbounded capacity");
            self.flow = W::INFINITY;
            self.exhausted = true;
        } else {
            for e in path.windows(2) {
                let (u, v) = (e[0], e[1]);
                if let Some(forward) = self.residual.get_mut(&(u, v)) {
                    if !forward.is_infinite() {
                        *forward = *forward - bottleneck;
                    }
                }
                if let Some(backward) = self.residual.get_mut(&(v, u)) {
                    *backward = backward.add_or_infinity(bottleneck);
                }
            }
            self.flow = self.flow.add_or_infinity(bottleneck);
        }

        trace!(length = path.len() - 1, ?bottleneck, "augmenting path");

        Some(AugmentingPath {
            nodes: self.index.ids_of(path),
            bottleneck,
        })
    }
}

/// Provides maximum flow and minimum cut computations
pub trait NetworkFlow: AdjacencyList + Sized {
    /// Returns an [`EdmondsKarp`] iterator over the augmenting paths from `source` to `sink`
    fn edmonds_karp<W, F>(
        &self,
        source: &Self::Id,
        sink: &Self::Id,
        extractor: F,
    ) -> GraphResult<EdmondsKarp<Self::Id, W>>
    where
        W: Weight,
        F: FnMut(&Self::EdgeProp) -> W,
    {
        EdmondsKarp::new(self, source, sink, extractor)
    }

    /// Computes the value of a maximum flow from `source` to `sink`.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let g: Graph<(), &str, f64> = Graph::from_edges(
    ///     false,
    ///     [("s", "a", 1.5), ("a", "t", 1.0), ("s", "t", 0.25)],
    /// );
    /// assert_eq!(g.max_flow(&"s", &"t", |c| *c).unwrap(), 1.25);
    /// assert!(g.max_flow(&"s", &"x", |c| *c).is_err());
    /// ```
    fn max_flow<W, F>(&self, source: &Self::Id, sink: &Self::Id, extractor: F) -> GraphResult<W>
    where
        W: Weight,
        F: FnMut(&Self::EdgeProp) -> W,
    {
        Ok(self.edmonds_karp(source, sink, extractor)?.max_flow())
    }

    /// Computes the value of a maximum flow together with the source side of a minimum cut
    fn min_st_cut<W, F>(
        &self,
        source: &Self::Id,
        sink: &Self::Id,
        extractor: F,
    ) -> GraphResult<(W, Vec<Self::Id>)>
    where
        W: Weight,
        F: FnMut(&Self::EdgeProp) -> W,
    {
        let mut ek = self.edmonds_karp(source, sink, extractor)?;
        let side = ek.source_side();
        Ok((ek.flow(), side))
    }
}

impl<G> NetworkFlow for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::RandomGraph;

    fn small_network() -> Graph<(), u32, u32> {
        Graph::from_edges(
            true,
            [(1, 2, 3), (1, 3, 2), (2, 3, 1), (2, 4, 2), (3, 4, 4)],
        )
    }

    #[test]
    fn small_network_saturates_source() {
        let graph = small_network();
        assert_eq!(graph.max_flow(&1, &4, |c| *c), Ok(5));

        let (flow, side) = graph.min_st_cut(&1, &4, |c| *c).unwrap();
        assert_eq!(flow, 5);
        assert_eq!(side, vec![1]);
    }

    #[test]
    fn textbook_network() {
        let graph: Graph<(), u32, u64> = Graph::from_edges(
            true,
            [
                (0, 1, 16),
                (0, 2, 13),
                (1, 2, 10),
                (2, 1, 4),
                (1, 3, 12),
                (3, 2, 9),
                (2, 4, 14),
                (4, 3, 7),
                (3, 5, 20),
                (4, 5, 4),
            ],
        );

        let mut ek = graph.edmonds_karp(&0, &5, |c| *c).unwrap();
        let paths = ek.by_ref().collect_vec();
        assert!(paths.iter().all(|p| p.nodes[0] == 0 && p.nodes.last() == Some(&5)));
        assert_eq!(paths.iter().map(|p| p.bottleneck).sum::<u64>(), 23);
        assert_eq!(ek.flow(), 23);

        // the cut ({0, 1, 2, 4}, {3, 5}) has capacity 12 + 7 + 4 = 23
        assert_eq!(ek.source_side(), vec![0, 1, 2, 4]);
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph: Graph<(), u32, u32> =
            Graph::from_edges(true, [(1, 2, 2), (1, 2, 3), (2, 2, 100), (2, 3, 10)]);
        assert_eq!(graph.max_flow(&1, &3, |c| *c), Ok(5));
        assert_eq!(graph.max_flow(&3, &1, |c| *c), Ok(0));
    }

    #[test]
    fn undirected_edges_carry_flow_both_ways() {
        let graph: Graph<(), u32, i32> = Graph::from_edges(false, [(1, 2, 4), (2, 3, 3)]);
        assert_eq!(graph.max_flow(&1, &3, |c| *c), Ok(3));
        assert_eq!(graph.max_flow(&3, &1, |c| *c), Ok(3));
    }

    #[test]
    fn infinite_capacities() {
        let graph: Graph<(), u32, f64> =
            Graph::from_edges(true, [(1, 2, f64::INFINITY), (2, 3, 2.5)]);
        assert_eq!(graph.max_flow(&1, &3, |c| *c), Ok(2.5));

        let graph: Graph<(), u32, f64> = Graph::from_edges(true, [(1, 2, f64::INFINITY)]);
        assert_eq!(graph.max_flow(&1, &2, |c| *c), Ok(f64::INFINITY));
    }

    #[test]
    fn errors() {
        let graph = small_network();
        assert_eq!(
            graph.max_flow(&9, &4, |c| *c),
            Err(GraphError::node_not_found("source", &9u32))
        );
        assert_eq!(
            graph.max_flow(&1, &9, |c| *c),
            Err(GraphError::node_not_found("sink", &9u32))
        );
        assert_eq!(
            graph.max_flow(&1, &1, |c| *c),
            Err(GraphError::source_is_sink(&1u32))
        );

        let err = graph
            .max_flow(&1, &4, |c| if *c == 1 { -1i64 } else { *c as i64 })
            .unwrap_err();
        assert_eq!(err, GraphError::negative_capacity(&2u32, &3u32));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn flow_bounded_by_cut() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..20 {
            let graph: Graph<(), usize, u32> =
                Graph::gnp_with(rng, true, 30, 0.15, |r| r.random_range(0..20));
            let (s, t) = (0, 29);

            let (flow, side) = graph.min_st_cut(&s, &t, |c| *c).unwrap();
            assert!(side.contains(&s));
            assert!(!side.contains(&t));

            let side: IdSet<usize> = side.into_iter().collect();
            let cut: u32 = graph
                .edges()
                .filter(|Edge(u, v, _)| side.contains(*u) && !side.contains(*v))
                .map(|Edge(_, _, c)| *c)
                .sum();
            assert_eq!(flow, cut);

            let egress: u32 = graph.neighbors_of(&s).map(|(_, c)| *c).sum();
            assert!(flow <= egress);
        }
    }
}
