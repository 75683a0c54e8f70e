/*!
# Fixed-Length Cycles

Enumerates all simple directed cycles with exactly `length` vertices by exhaustive depth-first
backtracking from every vertex.

Cycles that are rotations of each other are reported once. By default the duplicate check uses
the sorted vertex names of a cycle as key ([`Deduplication::VertexSet`]), which additionally
merges different cycles over the same vertex set (e.g. a cycle and its reversal). Use
[`Deduplication::Rotation`] to only merge true rotations.

The search is exponential in `length` and meant for small graphs.

## Example
```rust
use incigraph::{prelude::*, algo::*};

let mut graph = IncidenceGraph::new();
graph.add_vertices([("A", ""), ("B", ""), ("C", ""), ("D", "")]).unwrap();
graph.add_edges([("A", "B"), ("B", "C"), ("C", "A"), ("A", "D"), ("D", "C")]).unwrap();

let cycles = graph.cycles_of_length(3);
assert_eq!(cycles.len(), 2);
assert_eq!(cycles[0].format(&graph), "A -> B -> C");
assert_eq!(cycles[1].format(&graph), "A -> D -> C");
```
*/

use std::sync::atomic::{AtomicBool, Ordering};

use fxhash::FxHashSet;
use itertools::Itertools;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::*;

/// A simple directed cycle, stored as its vertices in traversal order.
/// The closing edge from the last back to the first vertex is implicit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle(Vec<Node>);

impl Cycle {
    /// Returns the vertices of the cycle in traversal order
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    /// Returns the number of vertices on the cycle
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the edges of the cycle in traversal order, ending with the closing edge
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| Edge(self.0[i], self.0[(i + 1) % n]))
    }

    /// Resolves the vertices of the cycle in `graph`.
    /// ** Panics if the cycle was not computed on `graph` **
    pub fn vertices<'g, G: NamedVertices>(&self, graph: &'g G) -> Vec<&'g Vertex> {
        self.0.iter().map(|&u| graph.vertex(u)).collect()
    }

    /// Resolves the names of the vertices of the cycle in `graph`.
    /// ** Panics if the cycle was not computed on `graph` **
    pub fn names<'g, G: NamedVertices>(&self, graph: &'g G) -> Vec<&'g str> {
        self.0.iter().map(|&u| graph.name_of(u)).collect()
    }

    /// Returns the key under which `deduplication` considers this cycle
    pub fn key<'g, G: NamedVertices>(
        &self,
        graph: &'g G,
        deduplication: Deduplication,
    ) -> Vec<&'g str> {
        deduplication.key(graph, &self.0)
    }

    /// Formats the cycle as `A -> B -> C`
    pub fn format<G: NamedVertices>(&self, graph: &G) -> String {
        self.names(graph).join(" -> ")
    }
}

impl AsRef<[Node]> for Cycle {
    fn as_ref(&self) -> &[Node] {
        &self.0
    }
}

impl From<Cycle> for Vec<Node> {
    fn from(value: Cycle) -> Self {
        value.0
    }
}

/// Strategy to decide whether two found cycles are the same
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deduplication {
    /// Key is the sorted list of vertex names. Rotation-invariant, but also merges all cycles
    /// sharing a vertex set (including reversals).
    #[default]
    VertexSet,
    /// Key is the lexicographically smallest rotation of the name sequence. Merges exactly the
    /// rotations of a cycle.
    Rotation,
}

impl Deduplication {
    /// Computes the key of the cycle given by `nodes` in `graph`
    pub fn key<'g, G: NamedVertices>(&self, graph: &'g G, nodes: &[Node]) -> Vec<&'g str> {
        let names = nodes.iter().map(|&u| graph.name_of(u)).collect_vec();
        match self {
            Deduplication::VertexSet => names.into_iter().sorted_unstable().collect(),
            Deduplication::Rotation => {
                let rotation = |start: usize| names[start..].iter().chain(names[..start].iter());
                let best = (0..names.len())
                    .min_by(|&a, &b| rotation(a).cmp(rotation(b)))
                    .unwrap_or(0);
                rotation(best).copied().collect()
            }
        }
    }
}

/// Provides the enumeration of fixed-length cycles directly on a graph
pub trait FixedLengthCycles: NamedVertices + WeightedAdjacencyList + AdjacencyTest + Sized {
    /// Returns all simple cycles with exactly `length` vertices, deduplicated by vertex set.
    ///
    /// Cycles are reported in discovery order: start vertices by index, then outgoing edges
    /// in edge order.
    fn cycles_of_length(&self, length: usize) -> Vec<Cycle>;

    /// Returns a configurable search for cycles with exactly `length` vertices
    fn cycle_search(&self, length: usize) -> CycleSearch<'_, Self>;
}

impl<G> FixedLengthCycles for G
where
    G: NamedVertices + WeightedAdjacencyList + AdjacencyTest,
{
    fn cycles_of_length(&self, length: usize) -> Vec<Cycle> {
        CycleSearch::new(self, length).search().0
    }

    fn cycle_search(&self, length: usize) -> CycleSearch<'_, Self> {
        CycleSearch::new(self, length)
    }
}

/// Shorthand for [`FixedLengthCycles::cycles_of_length`]
pub fn enumerate_cycles_of_length<G>(graph: &G, length: usize) -> Vec<Cycle>
where
    G: FixedLengthCycles,
{
    graph.cycles_of_length(length)
}

/// Configurable backtracking search for cycles of a fixed length.
///
/// Defaults match [`FixedLengthCycles::cycles_of_length`]: vertex-set deduplication, no
/// cancellation and no limit on the number of cycles.
#[derive(Debug, Clone)]
pub struct CycleSearch<'a, G> {
    graph: &'a G,
    length: usize,
    deduplication: Deduplication,
    cancel_flag: Option<&'a AtomicBool>,
    max_cycles: Option<usize>,
}

/// Reasons to abandon the search early
enum Interrupt {
    Cancelled,
    Limit,
}

struct SearchState<'a> {
    path: SmallVec<[Node; 16]>,
    seen: FxHashSet<Vec<&'a str>>,
    cycles: Vec<Cycle>,
}

impl<'a, G> CycleSearch<'a, G>
where
    G: NamedVertices + WeightedAdjacencyList + AdjacencyTest,
{
    pub fn new(graph: &'a G, length: usize) -> Self {
        Self {
            graph,
            length,
            deduplication: Deduplication::default(),
            cancel_flag: None,
            max_cycles: None,
        }
    }

    /// Sets the strategy used to detect duplicate cycles
    pub fn set_deduplication(&mut self, deduplication: Deduplication) {
        self.deduplication = deduplication;
    }

    /// Builder-style variant of [`Self::set_deduplication`]
    pub fn deduplication(mut self, deduplication: Deduplication) -> Self {
        self.set_deduplication(deduplication);
        self
    }

    /// Sets a flag that is polled once per search step; raising it aborts the search
    /// with [`GraphError::Cancelled`]
    pub fn set_cancel_flag(&mut self, flag: &'a AtomicBool) {
        self.cancel_flag = Some(flag);
    }

    /// Builder-style variant of [`Self::set_cancel_flag`]
    pub fn cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.set_cancel_flag(flag);
        self
    }

    /// Stops the search successfully once `max_cycles` cycles were found
    pub fn set_max_cycles(&mut self, max_cycles: usize) {
        self.max_cycles = Some(max_cycles);
    }

    /// Builder-style variant of [`Self::set_max_cycles`]
    pub fn max_cycles(mut self, max_cycles: usize) -> Self {
        self.set_max_cycles(max_cycles);
        self
    }

    /// Runs the search.
    ///
    /// Fails only if the cancel flag was raised; the error reports how many cycles had been
    /// found until then.
    pub fn run(&self) -> Result<Vec<Cycle>> {
        match self.search() {
            (cycles, Some(Interrupt::Cancelled)) => Err(GraphError::Cancelled {
                found: cycles.len(),
            }),
            (cycles, _) => Ok(cycles),
        }
    }

    fn search(&self) -> (Vec<Cycle>, Option<Interrupt>) {
        let mut state = SearchState {
            path: SmallVec::new(),
            seen: FxHashSet::default(),
            cycles: Vec::new(),
        };

        // a simple cycle cannot have more vertices than the graph
        if self.length == 0 || self.length > self.graph.len() || self.max_cycles == Some(0) {
            debug!(length = self.length, "no cycles possible");
            return (state.cycles, None);
        }

        for start in self.graph.vertices_range() {
            state.path.push(start);
            let flow = self.extend(&mut state);
            state.path.pop();

            if let Err(interrupt) = flow {
                match interrupt {
                    Interrupt::Cancelled => warn!(
                        length = self.length,
                        found = state.cycles.len(),
                        "cycle search cancelled"
                    ),
                    Interrupt::Limit => debug!(
                        length = self.length,
                        found = state.cycles.len(),
                        "cycle search reached its limit"
                    ),
                }
                return (state.cycles, Some(interrupt));
            }
        }

        debug!(
            length = self.length,
            found = state.cycles.len(),
            "cycle search finished"
        );
        (state.cycles, None)
    }

    fn extend(&self, state: &mut SearchState<'a>) -> std::result::Result<(), Interrupt> {
        if self
            .cancel_flag
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Err(Interrupt::Cancelled);
        }

        let depth = state.path.len();
        let first = state.path[0];
        let last = state.path[depth - 1];

        if depth == self.length {
            // closing onto the start early yields a closed walk, not a simple cycle
            if (depth == 1 || first != last) && self.graph.has_edge(last, first) {
                self.record(state)?;
            }
            return Ok(());
        }

        for next in self.graph.out_neighbors_of(last) {
            let closes = next == first && depth + 1 == self.length;
            if closes || !state.path.contains(&next) {
                state.path.push(next);
                let flow = self.extend(state);
                state.path.pop();
                flow?;
            }
        }

        Ok(())
    }

    fn record(&self, state: &mut SearchState<'a>) -> std::result::Result<(), Interrupt> {
        let key = self.deduplication.key(self.graph, &state.path);
        if !state.seen.insert(key) {
            return Ok(());
        }

        trace!(cycle = ?state.path.as_slice(), "found cycle");
        state.cycles.push(Cycle(state.path.to_vec()));

        if self
            .max_cycles
            .is_some_and(|max| state.cycles.len() >= max)
        {
            return Err(Interrupt::Limit);
        }
        Ok(())
    }
}
