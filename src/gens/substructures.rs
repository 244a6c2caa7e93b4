/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**

Every added edge carries a clone of the given property, and missing endpoints are created with
the default payload.

# Example

```rust
use propgraph::{prelude::*, gens::*};

let mut g: PlainGraph<u32> = Graph::directed();
g.connect_path([0, 1, 2], ());
g.connect_cycle([2, 3, 4], ());
g.connect_clique(&[0, 2, 4], (), false);

assert_eq!(g.number_of_nodes(), 5);
assert_eq!(g.number_of_edges(), 11);
assert!(g.has_edge(&4, &2) && g.has_edge(&2, &4));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures: GraphEdgeEditing {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    ///
    /// # Example
    /// ```rust
    /// use propgraph::{prelude::*, gens::*};
    ///
    /// let mut g: Graph<(), u32, f64> = Graph::undirected();
    /// g.connect_path([0, 1, 2, 3], 0.5);
    ///
    /// assert!(g.has_edge(&0, &1));
    /// assert!(g.has_edge(&2, &1));
    /// assert_eq!(g.find_edge_props(&2, &3), vec![0.5]);
    /// ```
    fn connect_path<I>(&mut self, nodes_on_path: I, prop: Self::EdgeProp)
    where
        I: IntoIterator<Item = Self::Id>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// A single node therefore receives a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, prop: Self::EdgeProp)
    where
        C: IntoIterator<Item = Self::Id>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    ///
    /// - Duplicate nodes in `nodes` are ignored.
    /// - If `with_loops` is `true`, each node also gets a self-loop.
    /// - Undirected graphs receive one edge per pair, directed graphs one edge per orientation.
    fn connect_clique<'a, C>(&mut self, nodes: C, prop: Self::EdgeProp, with_loops: bool)
    where
        C: IntoIterator<Item = &'a Self::Id>,
        Self::Id: 'a;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
    G::Value: Default,
    G::EdgeProp: Clone,
{
    fn connect_path<I>(&mut self, nodes_on_path: I, prop: Self::EdgeProp)
    where
        I: IntoIterator<Item = Self::Id>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, prop.clone());
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, prop: Self::EdgeProp)
    where
        C: IntoIterator<Item = Self::Id>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.add_edge(prev, cur.clone(), prop.clone());
                prev = cur;
            }

            self.add_edge(prev, first, prop);
        }
    }

    fn connect_clique<'a, C>(&mut self, nodes: C, prop: Self::EdgeProp, with_loops: bool)
    where
        C: IntoIterator<Item = &'a Self::Id>,
        Self::Id: 'a,
    {
        let nodes: Vec<&Self::Id> = nodes.into_iter().sorted().dedup().collect();
        let directed = self.is_directed();

        for (i, &u) in nodes.iter().enumerate() {
            for (j, &v) in nodes.iter().enumerate() {
                if (i == j && !with_loops) || (!directed && j < i) {
                    continue;
                }
                self.add_edge(u.clone(), v.clone(), prop.clone());
            }
        }
    }
}
