/*!
# Strongly Connected Components

Kosaraju's two-pass algorithm over dense forward and reverse views of the graph:

1. a DFS over the forward view records every node in post-order (finish order),
2. nodes are taken in reverse finish order and every still unassigned node roots a DFS over the
   reverse view; the nodes reached form one component.

Undirected graphs store every edge in both directions, so both views contain both directions
and the components of an undirected graph are its connected components. Both passes keep an
explicit stack.

Components are emitted in a topological order of the condensation: if an edge leads from
component `A` to component `B`, then `A` is emitted before `B`.
*/

use std::iter::FusedIterator;

use tracing::debug;

use super::*;

/// Iterator over the strongly connected components of a graph.
///
/// Each item holds the members of one component sorted increasingly. Every node of the graph
/// is part of exactly one emitted component unless singletons are skipped
/// (see [`StronglyConnectedComponents::include_singletons`]).
pub struct StronglyConnectedComponents<Id> {
    index: IdIndex<Id>,
    reverse: Vec<Vec<usize>>,
    has_loop: Vec<bool>,

    finish_order: Vec<usize>,
    assigned: Vec<bool>,
    stack: Vec<usize>,

    include_singletons: bool,
}

impl<Id: NodeId> StronglyConnectedComponents<Id> {
    /// Builds both views of the graph and runs the first pass
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList<Id = Id>,
    {
        let index = IdIndex::new(graph.ordered_vertices().iter());
        let n = index.len();

        let forward = index.adjacency(graph);
        let mut reverse: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut has_loop = vec![false; n];

        for (u, nbs) in forward.iter().enumerate() {
            for &v in nbs {
                has_loop[u] |= u == v;
                reverse[v].push(u);
            }
        }

        let finish_order = finish_order(&forward);

        Self {
            index,
            reverse,
            has_loop,
            finish_order,
            assigned: vec![false; n],
            stack: Vec::with_capacity(32),
            include_singletons: true,
        }
    }

    /// Each node that is not part of a cycle is returned as its own SCC.
    /// By setting `include = false`, those nodes are not returned; a node with a self-loop
    /// is still returned.
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    /// Builder variant of [`StronglyConnectedComponents::set_include_singletons`]
    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }

    /// Collects the unassigned nodes reachable from `root` in the reverse view
    fn collect_component(&mut self, root: usize) -> Vec<usize> {
        let mut component = vec![root];
        self.assigned[root] = true;
        self.stack.push(root);

        while let Some(u) = self.stack.pop() {
            for &v in &self.reverse[u] {
                if !self.assigned[v] {
                    self.assigned[v] = true;
                    component.push(v);
                    self.stack.push(v);
                }
            }
        }

        component
    }
}

impl<Id: NodeId> Iterator for StronglyConnectedComponents<Id> {
    type Item = Vec<Id>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let root = self.finish_order.pop()?;
            if self.assigned[root] {
                continue;
            }

            let mut component = self.collect_component(root);
            if !self.include_singletons && component.len() == 1 && !self.has_loop[root] {
                continue;
            }

            component.sort_unstable();
            return Some(self.index.ids_of(component));
        }
    }
}

impl<Id: NodeId> FusedIterator for StronglyConnectedComponents<Id> {}

/// Returns all indices of `nbs` in post-order of a DFS that starts a new tree at every unvisited
/// index in increasing order
fn finish_order(nbs: &[Vec<usize>]) -> Vec<usize> {
    let n = nbs.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    // (node, position of the next neighbor to inspect)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some((u, cursor)) = stack.last_mut() {
            let u = *u;
            if let Some(&v) = nbs[u].get(*cursor) {
                *cursor += 1;
                if !visited[v] {
                    visited[v] = true;
                    stack.push((v, 0));
                }
            } else {
                order.push(u);
                stack.pop();
            }
        }
    }

    order
}

/// Provides strongly connected components and the condensation of a graph
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the strongly connected components of the graph
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<Self::Id> {
        StronglyConnectedComponents::new(self)
    }

    /// Returns the strongly connected components of the graph.
    /// In contrast to [`Connectivity::strongly_connected_components`], this methods includes SCCs of size 1
    /// if and only if the node has a self-loop
    fn strongly_connected_components_no_singletons(&self) -> StronglyConnectedComponents<Self::Id> {
        StronglyConnectedComponents::new(self).include_singletons(false)
    }

    /// Partitions the nodes into strongly connected components.
    ///
    /// Members of a component are sorted; components are ordered topologically with respect to
    /// the edges between them.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let g: PlainGraph<u32> = Graph::from_edges(true, [(1, 2), (2, 1), (3, 4), (4, 3), (2, 3)]);
    /// assert_eq!(g.kosaraju_scc(), vec![vec![1, 2], vec![3, 4]]);
    /// ```
    fn kosaraju_scc(&self) -> Vec<Vec<Self::Id>> {
        let components: Vec<_> = self.strongly_connected_components().collect();
        debug!(
            nodes = self.number_of_nodes(),
            components = components.len(),
            "strongly connected components computed"
        );
        components
    }

    /// Contracts every strongly connected component into a single node.
    ///
    /// The result is a directed graph whose node `i` carries the members of the `i`-th component
    /// of [`Connectivity::kosaraju_scc`]. For every ordered pair of distinct components joined by
    /// at least one edge, it holds exactly one edge whose weight is the sum of the extracted
    /// weights of all original edges between them. Edges inside a component are dropped.
    ///
    /// # Examples
    /// ```
    /// use propgraph::{prelude::*, algo::*};
    ///
    /// let g: Graph<(), u32, u32> =
    ///     Graph::from_edges(true, [(1, 2, 1), (2, 1, 1), (2, 3, 4), (1, 3, 5)]);
    /// let dag = g.condensation(|w| *w);
    ///
    /// assert_eq!(dag.node(&0).unwrap().value(), &vec![1, 2]);
    /// assert_eq!(dag.list_edges(), vec![Edge(0, 1, 9)]);
    /// ```
    fn condensation<W, F>(&self, mut extractor: F) -> Graph<Vec<Self::Id>, usize, W>
    where
        W: Weight,
        F: FnMut(&Self::EdgeProp) -> W,
    {
        let components = self.kosaraju_scc();

        let mut component_of: IdMap<Self::Id, usize> = IdMap::default();
        for (i, members) in components.iter().enumerate() {
            for u in members {
                component_of.insert(u.clone(), i);
            }
        }

        let mut weights: IdMap<(usize, usize), W> = IdMap::default();
        for Edge(u, v, p) in self.edges() {
            let (Some(&cu), Some(&cv)) = (component_of.get(u), component_of.get(v)) else {
                continue;
            };
            if cu != cv {
                let w = extractor(p);
                weights
                    .entry((cu, cv))
                    .and_modify(|sum| *sum = *sum + w)
                    .or_insert(w);
            }
        }

        let mut dag = Graph::with_capacity(true, components.len());
        for (i, members) in components.into_iter().enumerate() {
            dag.add_node_with(i, members);
        }

        let mut weights: Vec<_> = weights.into_iter().collect();
        weights.sort_unstable_by_key(|&(key, _)| key);
        for ((cu, cv), w) in weights {
            dag.add_edge(cu, cv, w);
        }

        debug!(
            components = dag.number_of_nodes(),
            edges = dag.number_of_edges(),
            "condensation built"
        );
        dag
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components<Id: Ord>(mut components: Vec<Vec<Id>>) -> Vec<Vec<Id>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_unstable();
    components
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::gens::{GeneratorSubstructures, RandomGraph};

    #[test]
    pub fn scc() {
        let graph: PlainGraph<u32> = Graph::from_edges(
            true,
            [
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        );

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 3);
        assert!(sccs.iter().all(|c| !c.is_empty()));

        // topological order of the condensation
        assert_eq!(sccs[0], [0, 1, 4]);
        assert_eq!(sccs[1], [2, 3, 7]);
        assert_eq!(sccs[2], [5, 6]);
    }

    #[test]
    pub fn scc_singletons() {
        // {0,1} and {4,5} are scc pairs, 2 is a loop, 3 is a singleton
        let mut graph: PlainGraph<u32> =
            Graph::from_edges(true, [(0, 1), (1, 0), (2, 2), (4, 5), (5, 4)]);
        graph.add_node(3);

        {
            let sccs = graph.strongly_connected_components().collect_vec();
            assert_eq!(sccs.len(), 4);

            let sccs = sort_components(sccs);
            assert_eq!(sccs[0], [0, 1]);
            assert_eq!(sccs[1], [2]);
            assert_eq!(sccs[2], [3]); // 3 is included
            assert_eq!(sccs[3], [4, 5]);
        }

        {
            let sccs = graph
                .strongly_connected_components_no_singletons()
                .collect_vec();
            assert_eq!(sccs.len(), 3);
            let sccs = sort_components(sccs);

            assert_eq!(sccs[0], [0, 1]);
            assert_eq!(sccs[1], [2]);
            assert_eq!(sccs[2], [4, 5]);
        }
    }

    #[test]
    pub fn scc_tree() {
        let graph: PlainGraph<u32> =
            Graph::from_edges(true, [(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);

        let sccs = graph.kosaraju_scc();
        // in a directed tree each vertex is a strongly connected component
        assert_eq!(sccs.len(), 7);

        let sccs = sort_components(sccs);
        for (i, scc) in sccs.iter().enumerate() {
            assert_eq!(scc, &[i as u32]);
        }
    }

    #[test]
    fn scc_pairs() {
        let graph: PlainGraph<u32> = Graph::from_edges(true, [(1, 2), (2, 1), (3, 4), (4, 3)]);
        let sccs = sort_components(graph.kosaraju_scc());
        assert_eq!(sccs, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn undirected_components() {
        let mut graph: PlainGraph<&str> =
            Graph::from_edges(false, [("a", "b"), ("b", "c"), ("x", "y")]);
        graph.add_node("z");

        let sccs = sort_components(graph.kosaraju_scc());
        assert_eq!(
            sccs,
            vec![vec!["a", "b", "c"], vec!["x", "y"], vec!["z"]]
        );
    }

    #[test]
    fn scc_gnp() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for i in 0..10 {
            let n = 10000;
            let graph: PlainGraph = Graph::gnp(rng, true, n, 0.5 / (n as f64) * (i as f64));
            assert_eq!(
                StronglyConnectedComponents::new(&graph)
                    .map(|x| x.len())
                    .sum::<usize>(),
                n
            );
        }
    }

    #[test]
    fn scc_long_cycle() {
        // assert that we can deal with very deep stacks
        let n: u32 = 10_000;
        let mut graph: PlainGraph<u32> = Graph::directed();
        graph.connect_cycle(0..n, ());
        let sccs = graph.kosaraju_scc();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), n as usize);
    }

    #[test]
    fn condensation() {
        // {1,2} -> {3,4} twice, {3,4} -> {5}, {1,2} -> {5}
        let graph: Graph<(), u32, u32> = Graph::from_edges(
            true,
            [
                (1, 2, 1),
                (2, 1, 1),
                (3, 4, 1),
                (4, 3, 1),
                (1, 3, 2),
                (2, 4, 3),
                (4, 5, 7),
                (2, 5, 1),
            ],
        );

        let dag = graph.condensation(|w| *w);
        assert_eq!(dag.number_of_nodes(), 3);
        assert!(dag.is_directed());

        assert_eq!(dag.node(&0).unwrap().value(), &vec![1, 2]);
        assert_eq!(dag.node(&1).unwrap().value(), &vec![3, 4]);
        assert_eq!(dag.node(&2).unwrap().value(), &vec![5]);

        let mut edges = dag.list_edges();
        edges.sort();
        assert_eq!(edges, vec![Edge(0, 1, 5), Edge(0, 2, 1), Edge(1, 2, 7)]);
        assert!(dag.topological_sort().is_ok());
    }

    #[test]
    fn condensation_of_undirected_graph_has_no_edges() {
        let graph: Graph<(), u32, f64> =
            Graph::from_edges(false, [(1, 2, 1.0), (2, 3, 1.0), (4, 5, 2.0)]);
        let dag = graph.condensation(|w| *w);
        assert_eq!(dag.number_of_nodes(), 2);
        assert_eq!(dag.number_of_edges(), 0);
    }
}
