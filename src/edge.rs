use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// Edges in this crate are always directed: `Edge(u, v)` points from `u` to `v`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Edges are columns of the incidence matrix, so they are counted with `usize`.
pub type NumEdges = usize;

/// Weight of an edge. Stored weights are always strictly positive.
pub type Weight = i32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// A directed edge carrying a weight, materialized from a column of the incidence matrix.
///
/// Identity (`Eq`/`Hash`) is the ordered pair `(source, destination)` only: two weighted edges
/// between the same endpoints compare equal even if their weights differ.
/// The weight can be changed on the materialized value; this does not write back to the graph
/// (use [`IncidenceGraph::set_edge_weight`](crate::repr::IncidenceGraph::set_edge_weight) for that).
#[derive(Debug, Clone, Copy)]
pub struct WeightedEdge {
    pub source: Node,
    pub destination: Node,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: Node, destination: Node, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the unweighted identity of this edge
    pub fn edge(&self) -> Edge {
        Edge(self.source, self.destination)
    }

    /// Overwrites the weight of this materialized edge
    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.edge() == other.edge()
    }
}

impl Eq for WeightedEdge {}

impl Hash for WeightedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edge().hash(state);
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.destination, self.weight)
    }
}

impl From<WeightedEdge> for Edge {
    fn from(value: WeightedEdge) -> Self {
        value.edge()
    }
}
