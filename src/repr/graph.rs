use std::fmt::Display;

use fxhash::FxHashMap;

use crate::{io::MermaidWriter, ops::*, utils::FromCapacity, *};

/// A graph with payload `T` on every node and an opaque property `P` on every edge.
///
/// - Nodes are created on first reference, either explicitly via
///   [`add_node`](GraphNodeEditing::add_node) or implicitly by [`add_edge`](GraphEdgeEditing::add_edge).
/// - Parallel edges and self-loops are stored as given.
/// - An undirected edge `{u, v}` is stored as two independent entries `u -> v` and `v -> u`,
///   each with its own clone of the property.
///
/// ```
/// use propgraph::prelude::*;
///
/// let mut graph: Graph<&str, u32, f64> = Graph::undirected();
/// graph.add_node_with(1, "one");
/// graph.add_edge(1, 2, 0.5);
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.neighbors(&2), vec![(1, 0.5)]);
/// assert_eq!(graph.value_of(&2), Some(&""));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T, Id = usize, P = ()> {
    directed: bool,
    nodes: FxHashMap<Id, Node<T, Id>>,
    adjacency: FxHashMap<Id, Vec<(Id, P)>>,
}

/// Graph without node payloads and edge properties
pub type PlainGraph<Id = usize> = Graph<(), Id, ()>;

impl<T, Id: NodeId, P> Graph<T, Id, P> {
    /// Creates an empty graph
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    /// Creates an empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph with room for `n` nodes
    pub fn with_capacity(directed: bool, n: usize) -> Self {
        Self {
            directed,
            nodes: FxHashMap::from_capacity(n),
            adjacency: FxHashMap::from_capacity(n),
        }
    }

    /// Creates a graph from a list of edges. Endpoints carry the default payload.
    pub fn from_edges<I, E>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Id, P>>,
        T: Default,
        P: Clone,
    {
        let mut graph = Self::new(directed);
        graph.add_edges(edges);
        graph
    }

    /// Returns the node `u` or `None` if it does not exist
    pub fn node(&self, u: &Id) -> Option<&Node<T, Id>> {
        self.nodes.get(u)
    }

    /// Returns a mutable reference to node `u` or `None` if it does not exist
    pub fn node_mut(&mut self, u: &Id) -> Option<&mut Node<T, Id>> {
        self.nodes.get_mut(u)
    }

    /// Returns an iterator over all nodes (order unspecified)
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T, Id>> + '_ {
        self.nodes.values()
    }

    /// Shorthand for [`GraphNodeOrder::number_of_nodes`]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Shorthand for [`GraphEdgeOrder::number_of_edges`]
    pub fn edge_count(&self) -> usize {
        self.number_of_edges()
    }

    /// Renders the graph as a Mermaid flowchart using the default [`MermaidWriter`]
    pub fn to_mermaid(&self) -> String
    where
        Id: Display,
        T: Display,
        P: Display,
    {
        MermaidWriter::default().render(self)
    }

    /// Creates `u` with the default payload if it does not exist yet
    fn touch(&mut self, u: &Id)
    where
        T: Default,
    {
        if !self.nodes.contains_key(u) {
            self.nodes.insert(u.clone(), Node::with_default(u.clone()));
            self.adjacency.insert(u.clone(), Vec::new());
        }
    }

    fn push_entry(&mut self, u: &Id, v: Id, prop: P) {
        if let Some(list) = self.adjacency.get_mut(u) {
            list.push((v, prop));
        }
    }

    /// Removes all entries `u -> v` and returns how many were removed
    fn purge_entries(&mut self, u: &Id, v: &Id) -> usize {
        self.adjacency.get_mut(u).map_or(0, |list| {
            let before = list.len();
            list.retain(|(w, _)| w != v);
            before - list.len()
        })
    }
}

impl<T, Id: NodeId, P> GraphType for Graph<T, Id, P> {
    type Id = Id;
    type Value = T;
    type EdgeProp = P;

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<T, Id: NodeId, P> GraphNodeOrder for Graph<T, Id, P> {
    fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &Id> + '_ {
        self.nodes.keys()
    }

    fn has_node(&self, u: &Id) -> bool {
        self.nodes.contains_key(u)
    }

    fn value_of(&self, u: &Id) -> Option<&T> {
        self.nodes.get(u).map(|node| node.value())
    }
}

impl<T, Id: NodeId, P> GraphEdgeOrder for Graph<T, Id, P> {
    fn number_of_edges(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|list| list.len()).sum();
        if self.directed { entries } else { entries / 2 }
    }
}

impl<T, Id: NodeId, P> AdjacencyList for Graph<T, Id, P> {
    fn neighbors_of(&self, u: &Id) -> impl Iterator<Item = (&Id, &P)> + '_ {
        self.adjacency
            .get(u)
            .into_iter()
            .flatten()
            .map(|(v, p)| (v, p))
    }

    fn degree_of(&self, u: &Id) -> usize {
        self.adjacency.get(u).map_or(0, |list| list.len())
    }
}

impl<T, Id: NodeId, P> GraphNodeEditing for Graph<T, Id, P> {
    fn add_node_with(&mut self, u: Id, value: T) {
        if let Some(node) = self.nodes.get_mut(&u) {
            node.set_value(value);
        } else {
            self.adjacency.insert(u.clone(), Vec::new());
            self.nodes.insert(u.clone(), Node::new(u, value));
        }
    }

    fn insert_node(&mut self, node: Node<T, Id>) -> Option<Node<T, Id>> {
        let id = node.id().clone();
        self.adjacency.entry(id.clone()).or_default();
        self.nodes.insert(id, node)
    }

    fn remove_node(&mut self, u: &Id) -> bool {
        if self.nodes.remove(u).is_none() {
            return false;
        }

        self.adjacency.remove(u);
        for list in self.adjacency.values_mut() {
            list.retain(|(v, _)| v != u);
        }
        true
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.adjacency.clear();
    }
}

impl<T, Id: NodeId, P> GraphEdgeEditing for Graph<T, Id, P> {
    fn add_edge(&mut self, u: Id, v: Id, prop: P)
    where
        T: Default,
        P: Clone,
    {
        self.touch(&u);
        self.touch(&v);

        if self.directed {
            self.push_entry(&u, v, prop);
        } else {
            self.push_entry(&u, v.clone(), prop.clone());
            self.push_entry(&v, u, prop);
        }
    }

    fn remove_edge(&mut self, u: &Id, v: &Id) -> bool {
        if !self.has_node(u) || !self.has_node(v) {
            return false;
        }

        let mut removed = self.purge_entries(u, v);
        if !self.directed && u != v {
            removed += self.purge_entries(v, u);
        }
        removed > 0
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn directed_basics() {
        let mut graph: Graph<String, u32, i32> = Graph::directed();
        graph.add_node_with(1, "a".into());
        graph.add_edge(1, 2, 5);
        graph.add_edge(1, 2, 7);
        graph.add_edge(2, 3, 1);

        assert!(graph.is_directed());
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(&1), vec![(2, 5), (2, 7)]);
        assert!(graph.neighbors(&3).is_empty());
        assert!(graph.neighbors(&42).is_empty());
        assert_eq!(graph.find_edge_props(&1, &2), vec![5, 7]);
        assert!(graph.has_edge(&2, &3));
        assert!(!graph.has_edge(&3, &2));
        assert_eq!(graph.value_of(&1).map(String::as_str), Some("a"));
        assert_eq!(graph.value_of(&2).map(String::as_str), Some(""));
        assert!(graph.node(&4).is_none());
    }

    #[test]
    fn undirected_entries_are_symmetric() {
        let mut graph: Graph<(), char, &str> = Graph::undirected();
        graph.add_edge('a', 'b', "x");
        graph.add_edge('c', 'b', "y");

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(&'b'), vec![('a', "x"), ('c', "y")]);
        assert_eq!(graph.find_edge_props(&'a', &'b'), graph.find_edge_props(&'b', &'a'));

        let edges = graph.list_edges().into_iter().sorted().collect_vec();
        assert_eq!(edges, vec![Edge('a', 'b', "x"), Edge('b', 'c', "y")]);
    }

    #[test]
    fn undirected_self_loop_is_listed_once() {
        let mut graph: PlainGraph<u8> = Graph::undirected();
        graph.add_edge(1, 1, ());
        graph.add_edge(1, 2, ());
        graph.add_edge(1, 2, ());

        assert_eq!(graph.degree_of(&1), 4);
        assert_eq!(graph.edge_count(), 3);

        let edges = graph.list_edges().into_iter().sorted().collect_vec();
        assert_eq!(edges, vec![Edge(1, 1, ()), Edge(1, 2, ()), Edge(1, 2, ())]);
    }

    #[test]
    fn add_node_overwrites_value_and_keeps_edges() {
        let mut graph: Graph<i32, u32> = Graph::directed();
        graph.add_node_with(1, 10);
        graph.add_edge(1, 2, ());
        graph.add_node(1);

        assert_eq!(graph.value_of(&1), Some(&0));
        assert!(graph.has_edge(&1, &2));

        let old = graph.insert_node(Node::new(2, 20));
        assert_eq!(old, Some(Node::new(2, 0)));
        assert_eq!(graph.value_of(&2), Some(&20));
        assert!(graph.has_edge(&1, &2));

        if let Some(node) = graph.node_mut(&2) {
            *node.value_mut() += 1;
        }
        assert_eq!(graph.value_of(&2), Some(&21));
    }

    #[test]
    fn remove_node_purges_entries() {
        let mut graph: PlainGraph<u32> = Graph::from_edges(true, [(1, 2), (2, 3), (3, 1), (3, 2)]);

        assert!(graph.remove_node(&2));
        assert!(!graph.remove_node(&2));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.list_edges(), vec![Edge(3, 1, ())]);
        assert!(graph.neighbors(&1).is_empty());
    }

    #[test]
    fn remove_node_purges_mirrored_entries() {
        let mut graph: Graph<(), u32, char> = Graph::from_edges(
            false,
            [(1, 2, 'a'), (2, 3, 'b'), (2, 2, 'c'), (1, 3, 'd'), (3, 2, 'e')],
        );
        assert_eq!(graph.edge_count(), 5);

        assert!(graph.remove_node(&2));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&1), vec![(3, 'd')]);
        assert_eq!(graph.neighbors(&3), vec![(1, 'd')]);
        assert!(!graph.has_edge(&3, &2));
        assert_eq!(graph.list_edges(), vec![Edge(1, 3, 'd')]);
    }

    #[test]
    fn remove_edge() {
        let mut graph: PlainGraph<u32> = Graph::from_edges(false, [(1, 2), (1, 2), (2, 3)]);

        assert!(!graph.remove_edge(&1, &9));
        assert!(!graph.remove_edge(&1, &3));
        assert!(graph.remove_edge(&2, &1));
        assert!(!graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_count(), 3);

        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.is_undirected());
    }

    #[test]
    fn mermaid() {
        let mut graph: Graph<&str, u32, i32> = Graph::directed();
        graph.add_node_with(1, "A");
        graph.add_node_with(2, "B");
        graph.add_edge(1, 2, 3);
        graph.add_edge(1, 2, 4);

        assert_eq!(
            graph.to_mermaid(),
            "graph LR\n  N1[\"A\"]\n  N2[\"B\"]\n\n  N1 -->|3| N2\n"
        );
    }

    #[test]
    fn random_counts() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for n in [5u32, 20, 50] {
                let mut graph: PlainGraph<u32> = Graph::new(directed);
                let mut added = 0;
                for _ in 0..3 * n {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    graph.add_edge(u, v, ());
                    added += 1;
                }

                assert_eq!(graph.edge_count(), added);
                assert_eq!(graph.list_edges().len(), added);
                assert!(graph.list_nodes().iter().all(|(u, _)| graph.has_node(u)));

                if !directed {
                    for Edge(u, v, _) in graph.list_edges() {
                        assert!(graph.has_edge(&v, &u));
                    }
                }
            }
        }
    }
}
