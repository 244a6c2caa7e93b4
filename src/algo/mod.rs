/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the capability traits in
[`ops`](crate::ops). All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use propgraph::algo::*;
```
and gain access to traversal, shortest paths, cycle detection, connectivity, bipartiteness and
flow routines. If possible, algorithms are provided as **iterators**, making it easy to consume
results lazily.

Algorithms never interpret edge properties themselves. Wherever a number is needed, the caller
passes an *extractor* `Fn(&EdgeProp) -> W` with `W: Weight`.
*/

mod bipartite;
mod connectivity;
mod cycles;
mod network_flow;
mod shortest_path;
mod traversal;

use crate::{prelude::*, utils::*};

pub use bipartite::*;
pub use connectivity::*;
pub use cycles::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use traversal::*;
