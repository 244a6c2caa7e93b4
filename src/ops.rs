/*!
# Graph Operations

The traits in this module form the *capability surface* algorithms depend on. Every algorithm in
[`algo`](crate::algo) is blanket-implemented for any type providing [`AdjacencyList`], so the
algorithms never reach into the internals of [`Graph`](crate::repr::Graph).

- [`GraphType`] fixes the identifier, payload and edge-property types and the directedness,
- [`GraphNodeOrder`] enumerates nodes (`has_node`, `list_nodes`),
- [`GraphEdgeOrder`] counts edges,
- [`AdjacencyList`] exposes outgoing adjacency entries (`neighbors`, `list_edges`),
- [`GraphNodeEditing`] and [`GraphEdgeEditing`] mutate the graph.

No read operation fails for unknown nodes: absence is reported as `false`, `None` or an empty
result.
*/

use itertools::Itertools;

use crate::*;

/// Fixes the types a graph is parameterized over and whether it is directed
pub trait GraphType {
    /// Identifier of a node
    type Id: NodeId;

    /// Payload stored in every node
    type Value;

    /// Opaque property stored with every edge
    type EdgeProp;

    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge is stored in both directions
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the nodes of a graph
pub trait GraphNodeOrder: GraphType {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> usize;

    /// Returns an iterator over all node identifiers (order unspecified)
    fn vertices(&self) -> impl Iterator<Item = &Self::Id> + '_;

    /// Returns *true* if a node with identifier `u` exists
    fn has_node(&self, u: &Self::Id) -> bool;

    /// Returns the payload of `u` or `None` if `u` does not exist
    fn value_of(&self, u: &Self::Id) -> Option<&Self::Value>;

    /// Returns the number of nodes as `usize`
    fn len(&self) -> usize {
        self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }

    /// Returns a list of all `(id, value)` pairs
    fn list_nodes(&self) -> Vec<(Self::Id, Self::Value)>
    where
        Self::Value: Clone,
    {
        self.vertices()
            .filter_map(|u| Some((u.clone(), self.value_of(u)?.clone())))
            .collect()
    }

    /// Returns all node identifiers in increasing order
    fn ordered_vertices(&self) -> Vec<Self::Id> {
        self.vertices().cloned().sorted().collect()
    }
}

/// Provides getters pertaining to the edges of a graph
pub trait GraphEdgeOrder: GraphType {
    /// Returns the number of edges of the graph.
    /// An undirected edge is counted once although it is stored twice.
    fn number_of_edges(&self) -> usize;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the outgoing adjacency entries `(neighbor, property)` of `u`.
    /// Parallel edges appear once per entry. Empty if `u` does not exist.
    ///
    /// For undirected graphs, this contains every incident edge.
    fn neighbors_of(&self, u: &Self::Id) -> impl Iterator<Item = (&Self::Id, &Self::EdgeProp)> + '_;

    /// Returns the number of adjacency entries of `u` (0 if `u` does not exist)
    fn degree_of(&self, u: &Self::Id) -> usize {
        self.neighbors_of(u).count()
    }

    /// Returns a copy of the adjacency list of `u`. Empty if `u` does not exist.
    fn neighbors(&self, u: &Self::Id) -> Vec<(Self::Id, Self::EdgeProp)>
    where
        Self::EdgeProp: Clone,
    {
        self.neighbors_of(u)
            .map(|(v, p)| (v.clone(), p.clone()))
            .collect()
    }

    /// Returns the maximum number of adjacency entries of any node
    fn max_degree(&self) -> usize {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an iterator over all edges in the graph.
    ///
    /// Directed graphs report every adjacency entry. Undirected graphs store each edge twice
    /// and report only the entry with `from <= to`; a self-loop (stored twice in the same list)
    /// is reported once.
    fn edges(&self) -> impl Iterator<Item = Edge<&Self::Id, &Self::EdgeProp>> + '_ {
        let directed = self.is_directed();
        self.vertices().flat_map(move |u| {
            let mut loops = 0usize;
            self.neighbors_of(u).filter_map(move |(v, p)| {
                if directed || u < v {
                    Some(Edge(u, v, p))
                } else if u == v {
                    loops += 1;
                    (loops % 2 == 1).then_some(Edge(u, v, p))
                } else {
                    None
                }
            })
        })
    }

    /// Returns a list of all edges `(from, to, property)` as described in [`AdjacencyList::edges`]
    fn list_edges(&self) -> Vec<Edge<Self::Id, Self::EdgeProp>>
    where
        Self::EdgeProp: Clone,
    {
        self.edges()
            .map(|Edge(u, v, p)| Edge(u.clone(), v.clone(), p.clone()))
            .collect()
    }

    /// Returns *true* if at least one entry `u -> v` exists
    fn has_edge(&self, u: &Self::Id, v: &Self::Id) -> bool {
        self.neighbors_of(u).any(|(w, _)| w == v)
    }

    /// Returns the properties of all (parallel) entries `u -> v`
    fn find_edge_props(&self, u: &Self::Id, v: &Self::Id) -> Vec<Self::EdgeProp>
    where
        Self::EdgeProp: Clone,
    {
        self.neighbors_of(u)
            .filter(|(w, _)| *w == v)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

/// Provides functions to insert/delete nodes
pub trait GraphNodeEditing: GraphNodeOrder {
    /// Adds node `u` with the default payload.
    /// If `u` exists, its payload is overwritten with the default and its edges are kept.
    fn add_node(&mut self, u: Self::Id)
    where
        Self::Value: Default,
    {
        self.add_node_with(u, Self::Value::default());
    }

    /// Adds node `u` carrying `value`.
    /// If `u` exists, its payload is overwritten and its edges are kept.
    fn add_node_with(&mut self, u: Self::Id, value: Self::Value);

    /// Installs a caller-owned node. Returns the node that was replaced, if any.
    /// Edges of a replaced node are kept.
    fn insert_node(&mut self, node: Node<Self::Value, Self::Id>) -> Option<Node<Self::Value, Self::Id>>;

    /// Removes `u` together with every adjacency entry pointing to it.
    /// Returns *true* if `u` existed.
    fn remove_node(&mut self, u: &Self::Id) -> bool;

    /// Removes all nodes in the collection and returns how many existed
    fn remove_nodes<'a, I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = &'a Self::Id>,
        Self::Id: 'a,
    {
        nodes.into_iter().filter(|u| self.remove_node(u)).count()
    }

    /// Removes all nodes and edges
    fn clear(&mut self);
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeEditing {
    /// Adds the edge `(u, v)` carrying `prop`. Missing endpoints are created with the default
    /// payload. Parallel edges and self-loops are stored as given.
    fn add_edge(&mut self, u: Self::Id, v: Self::Id, prop: Self::EdgeProp)
    where
        Self::Value: Default,
        Self::EdgeProp: Clone;

    /// Adds all edges in the collection
    fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Id, Self::EdgeProp>>,
        Self::Value: Default,
        Self::EdgeProp: Clone,
    {
        for Edge(u, v, p) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, p);
        }
    }

    /// Removes every (parallel) entry `u -> v`, and for undirected graphs also `v -> u`.
    /// Returns *true* if at least one entry was removed.
    fn remove_edge(&mut self, u: &Self::Id, v: &Self::Id) -> bool;
}
