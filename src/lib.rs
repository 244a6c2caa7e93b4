/*!
`propgraph` is a graph data structure & algorithms library for graphs whose nodes and edges carry
caller-defined data:
- **nodes** are identified by any ordered, hashable identifier `Id` and carry a payload `T`,
- **edges** carry an opaque property `P` that the graph never interprets.

# Representation

A single generic [`Graph<T, Id, P>`](crate::repr::Graph) stores a node table and an adjacency
table, both keyed by node identifier. For edges, we use a simple tuple-struct
`Edge(from, to, property)`.

### Directed vs Undirected

Whether a graph is directed is decided at construction time:

- In an **undirected** graph, every edge `Edge(u, v, p)` is stored as the two adjacency entries
  `u -> v` and `v -> u`, both carrying `p`. Listing edges reports each of them once.
- In a **directed** graph, the edge has orientation, so `Edge(u, v, p)` and `Edge(v, u, p)` are
  considered distinct.

Parallel edges and self-loops are stored as given.

# Weights

Algorithms that need numbers (shortest paths, flows, condensation) never read them from the graph
directly. Instead, the caller passes an *extractor* `Fn(&P) -> W` where `W` implements
[`Weight`](crate::utils::Weight). This way one graph can be searched by distance, by time or by
capacity without being rebuilt.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph
  representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS
  (`graph.bfs(start)`), Dijkstra, Bellman-Ford, topological sorting, bipartiteness, cycle
  detection, strongly connected components and maximum flow,
- [`gens`] includes random graph generators and deterministic substructures such as
  paths/cycles/cliques,
- [`io`] includes writers for Mermaid flowcharts and GraphViz DOT files,
- [`utils`] includes the [`Weight`](crate::utils::Weight) trait and helpers for dense indexing.

In most use-cases, `use propgraph::{prelude::*, algo::*};` suffices for your needs.

```
use propgraph::{prelude::*, algo::*};

let mut g: Graph<&str, u32, f64> = Graph::directed();
g.add_node_with(1, "home");
g.add_node_with(2, "work");
g.add_edge(1, 2, 7.5);
g.add_edge(2, 3, 1.0);

let paths = g.dijkstra(&1, |km| *km).unwrap();
assert_eq!(paths.distance_to(&3), Some(8.5));
assert_eq!(paths.path_to(&3), vec![1, 2, 3]);
assert_eq!(g.topological_sort().unwrap(), vec![1, 2, 3]);
```

# Logging

Algorithms report their progress through [`tracing`](https://docs.rs/tracing): a `debug` event
when a result (or a failure such as a detected cycle) is determined and `trace` events for
individual rounds. Without an installed subscriber, nothing is recorded.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `propgraph::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
