//! Helpers shared by the unit tests of this crate.

use fxhash::FxHashSet;
use itertools::Itertools;
use rand::Rng;

use crate::{algo::Cycle, prelude::*};

/// Creates a graph with `n` vertices named by position and `m` random edges (loops and
/// duplicates included) with weights in `1..10`
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: usize, m: usize) -> IncidenceGraph {
    let mut graph = IncidenceGraph::new();
    for i in 0..n {
        graph.add_vertex(positional_name(i), i.to_string()).unwrap();
    }

    for _ in 0..m {
        let u = positional_name(rng.random_range(0..n));
        let v = positional_name(rng.random_range(0..n));
        graph
            .add_weighted_edge(&u, &v, rng.random_range(1..10))
            .unwrap();
    }

    graph
}

/// Brute force: tries every sequence of `length` distinct vertices and returns the sorted
/// name lists of all sequences that form a closed directed walk
pub(crate) fn cycle_vertex_sets<G>(graph: &G, length: usize) -> FxHashSet<Vec<String>>
where
    G: NamedVertices + AdjacencyTest,
{
    if length == 0 {
        return FxHashSet::default();
    }

    graph
        .vertices_range()
        .permutations(length)
        .filter(|seq| (0..length).all(|i| graph.has_edge(seq[i], seq[(i + 1) % length])))
        .map(|seq| sorted_names(graph, &seq))
        .collect()
}

/// Returns the names of the nodes in lexicographic order
pub(crate) fn sorted_names<G: NamedVertices>(graph: &G, nodes: &[Node]) -> Vec<String> {
    nodes
        .iter()
        .map(|&u| graph.name_of(u).to_string())
        .sorted()
        .collect()
}

/// Asserts that every consecutive pair (including last -> first) of the cycle is an edge and
/// that no vertex repeats
pub(crate) fn assert_is_simple_cycle<G>(graph: &G, cycle: &Cycle)
where
    G: AdjacencyTest,
{
    let nodes = cycle.nodes();
    assert!(nodes.iter().all_unique(), "{nodes:?} repeats a vertex");
    for i in 0..nodes.len() {
        let (u, v) = (nodes[i], nodes[(i + 1) % nodes.len()]);
        assert!(graph.has_edge(u, v), "{nodes:?} misses edge ({u},{v})");
    }
}
