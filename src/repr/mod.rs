/*!
# Graph Representation

The graph store of this crate is [`IncidenceGraph`]: a vertex list plus an [`IncidenceMatrix`]
with one row per vertex and one column per directed weighted edge.

```rust
use incigraph::prelude::*;

let mut graph = IncidenceGraph::new();
graph.add_vertex("A", "1").unwrap();
graph.add_vertex("B", "2").unwrap();
graph.add_weighted_edge("A", "B", 3).unwrap();

assert_eq!(graph.incidence_matrix().column(0), &[3, -3]);
assert!(graph.are_adjacent("A", "B"));
assert!(!graph.are_adjacent("B", "A"));
```
*/

use crate::{GraphError, error::Result, ops::*, *};

mod incidence;
mod matrix;

pub use incidence::*;
pub use matrix::*;
