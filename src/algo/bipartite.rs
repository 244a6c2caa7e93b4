/*!
# Bipartite Graph Algorithms

This module provides traits and algorithms for working with **bipartite graphs**.

Functionality includes:
- Defining and handling bipartitions of a graph
- Testing whether a graph is bipartite
- Computing a valid bipartition if one exists

Bipartiteness is a property of the *undirected* structure: directed graphs are tested on the
view that ignores edge orientation. A self-loop always prevents a bipartition.
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// A trait for representing a bipartition of the node set.
///
/// - Nodes in the set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
///
/// Provides convenience methods to check the side of a node.
pub trait Bipartition<Id> {
    /// Returns `true` if the node is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: &Id) -> bool {
        !self.is_on_right_side(u)
    }

    /// Returns `true` if the node is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: &Id) -> bool;
}

impl<Id: NodeId> Bipartition<Id> for IdSet<Id> {
    #[inline]
    fn is_on_right_side(&self, u: &Id) -> bool {
        self.contains(u)
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: AdjacencyList {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. whether every edge connects both sides.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*, gens::*, utils::IdSet};
    ///
    /// let mut g: PlainGraph<u32> = Graph::undirected();
    /// g.connect_path(0..10, ());
    ///
    /// let even: IdSet<u32> = [0, 2, 4, 6, 8].into_iter().collect();
    /// assert!(g.is_bipartition(&even));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition<Self::Id>,
    {
        self.edges()
            .all(|Edge(u, v, _)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }

    /// Computes a valid bipartition of the graph, if one exists, and returns its right side.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g: PlainGraph<u32> = Graph::undirected();
    /// g.connect_path(0..10, ());
    ///
    /// let right = g.compute_bipartition().unwrap();
    /// assert_eq!(right.len(), 5);
    /// ```
    fn compute_bipartition(&self) -> Option<IdSet<Self::Id>> {
        let (index, colors) = two_coloring(self)?;
        Some(
            colors
                .into_iter()
                .enumerate()
                .filter(|&(_, right)| right)
                .map(|(u, _)| index.id_of(u).clone())
                .collect(),
        )
    }

    /// Computes both color classes `(left, right)` of a bipartition, each sorted by identifier.
    /// Returns `None` if the graph is not bipartite.
    fn compute_bipartition_classes(&self) -> Option<(Vec<Self::Id>, Vec<Self::Id>)> {
        let (index, colors) = two_coloring(self)?;
        let (right, left): (Vec<_>, Vec<_>) = index
            .ids()
            .iter()
            .cloned()
            .zip(colors)
            .partition(|(_, right)| *right);
        Some((
            left.into_iter().map(|(u, _)| u).collect(),
            right.into_iter().map(|(u, _)| u).collect(),
        ))
    }

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let mut g: PlainGraph<u32> = Graph::from_edges(false, [(1, 2), (2, 3), (3, 4), (4, 1)]);
    /// assert!(g.is_bipartite());
    ///
    /// g.add_edge(1, 3, ());
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        two_coloring(self).is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList {}

/// Colors the undirected view of the graph with BFS, starting a new search at every uncolored
/// node in increasing identifier order. Returns `None` on the first edge whose endpoints receive
/// the same color; otherwise `colors[i]` is *true* iff node `i` of the index is on the right side.
fn two_coloring<G>(graph: &G) -> Option<(IdIndex<G::Id>, Vec<bool>)>
where
    G: AdjacencyList,
{
    let index = IdIndex::new(graph.ordered_vertices().iter());

    let mut nbs: Vec<Vec<usize>> = vec![Vec::new(); index.len()];
    for Edge(u, v, _) in graph.edges() {
        if let (Some(u), Some(v)) = (index.index_of(u), index.index_of(v)) {
            nbs[u].push(v);
            nbs[v].push(u);
        }
    }

    let mut colors: Vec<Option<bool>> = vec![None; index.len()];
    let mut queue = VecDeque::new();
    let mut components = 0usize;

    for seed in 0..index.len() {
        if colors[seed].is_some() {
            continue;
        }
        components += 1;
        colors[seed] = Some(false);
        queue.push_back(seed);

        while let Some(u) = queue.pop_front() {
            let color = colors[u] == Some(true);
            for &v in &nbs[u] {
                match colors[v] {
                    None => {
                        colors[v] = Some(!color);
                        queue.push_back(v);
                    }
                    Some(c) if c == color => {
                        debug!(
                            node = ?index.id_of(u),
                            neighbor = ?index.id_of(v),
                            "graph is not bipartite"
                        );
                        return None;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    debug!(nodes = index.len(), components, "graph is bipartite");
    let colors = colors.into_iter().map(|c| c == Some(true)).collect();
    Some((index, colors))
}
