/*!
`incigraph` is a small library for **directed, weighted graphs stored as an incidence matrix**
with named vertices, together with an exhaustive search for all simple cycles of a given length.

# Representation

Vertices carry a unique **name** and a free-form **mark**. Internally they are numbered
`0..n` in insertion order, represented as `u32`; this index is the row of the vertex in the
incidence matrix.

Every directed edge `u -> v` with weight `w > 0` is one **column** of the matrix holding `+w`
at the row of `u`, `-w` at the row of `v`, and zero everywhere else. A self-loop is a lone
`+w`. Parallel edges are allowed and occupy separate columns.

See the [`repr`] module for [`IncidenceGraph`](crate::repr::IncidenceGraph) and
[`IncidenceMatrix`](crate::repr::IncidenceMatrix).

# Design

The graph is mutated through name-based operations that return a [`GraphError`] on invalid
input, while read-only queries are tolerant and simply report nothing for unknown vertices.

Algorithms are provided as configurable structs that one can alter using either the *Builder* /
*Setter* pattern before running them, and as traits implemented on the graph itself for the
common case.

# Usage

- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations and the graph representation,
- [`algo`] includes the cycle search (`graph.cycles_of_length(3)`),
- [`gens`] includes generators for deterministic substructures such as paths/cycles/cliques,
- [`io`] includes writers rendering a graph as incidence table, edge diagram or DOT.

In most use-cases, `use incigraph::{prelude::*, algo::*};` suffices for your needs.

```rust
use incigraph::{prelude::*, algo::*};

let graph = IncidenceGraph::from_adjacency_matrix(
    &[[0, 2, 0], [0, 0, 5], [1, 0, 0]],
    &["x", "y", "z"],
).unwrap();

let cycles = graph.cycles_of_length(3);
assert_eq!(cycles.len(), 1);
assert_eq!(cycles[0].format(&graph), "A -> B -> C");
```

Diagnostics are emitted through [`tracing`]; install any subscriber to see them.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `incigraph::prelude` includes definitions for vertices and edges, the error type, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
