/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
between already existing, named vertices of a graph:

- **Paths**
- **Cycles**
- **Cliques**

These methods are useful when building graphs with known cycles for testing the cycle search.

# Example

```rust
use incigraph::{prelude::*, gens::*};

let mut g = IncidenceGraph::new();
g.add_vertices([("A", ""), ("B", ""), ("C", ""), ("D", "")]).unwrap();
g.connect_path(["A", "B"]).unwrap();
g.connect_cycle(["B", "C", "D"]).unwrap();

assert_eq!(
    g.all_edges().iter().map(|e| e.edge()).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 1)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// between the vertices of an already existing graph.
///
/// All added edges have weight `1`. Every method stops at the first unknown vertex name and
/// returns its error; edges added before that remain in the graph.
pub trait GeneratorSubstructures {
    /// Connects the given vertices in order with a **simple path**.
    fn connect_path<'n, P>(&mut self, names_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = &'n str>;

    /// Connects the given vertices with a **cycle**: consecutive vertices are connected and the
    /// last vertex is connected back to the first. A single vertex receives a self-loop.
    fn connect_cycle<'n, C>(&mut self, names_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = &'n str>;

    /// Connects all given vertices into a **clique** (an edge in both directions between every
    /// pair). If `with_loops` is `true`, each vertex also gets a self-loop.
    fn connect_clique<'n, C>(&mut self, names: C, with_loops: bool) -> Result<()>
    where
        C: IntoIterator<Item = &'n str>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<'n, P>(&mut self, names_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = &'n str>,
    {
        for (u, v) in names_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<'n, C>(&mut self, names_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = &'n str>,
    {
        let mut iter = names_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }

    fn connect_clique<'n, C>(&mut self, names: C, with_loops: bool) -> Result<()>
    where
        C: IntoIterator<Item = &'n str>,
    {
        let names = names.into_iter().collect_vec();
        for &u in &names {
            for &v in &names {
                if !with_loops && u == v {
                    continue;
                }

                self.add_edge(u, v)?;
            }
        }
        Ok(())
    }
}
