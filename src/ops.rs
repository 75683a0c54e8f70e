use std::ops::Range;

use crate::{error::Result, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all nodes in insertion order
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges (columns) of the graph, including duplicates
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the named vertices of a graph
pub trait NamedVertices: GraphNodeOrder {
    /// Returns the vertex stored at index `u`.
    /// ** Panics if `u >= n` **
    fn vertex(&self, u: Node) -> &Vertex;

    /// Returns the index of the vertex with the given name, if present
    fn node_of(&self, name: &str) -> Option<Node>;

    /// Returns the name of the vertex stored at index `u`.
    /// ** Panics if `u >= n` **
    fn name_of(&self, u: Node) -> &str {
        self.vertex(u).name()
    }

    /// Returns *true* if a vertex with this name exists
    fn contains_vertex(&self, name: &str) -> bool {
        self.node_of(name).is_some()
    }
}

/// Getters for outgoing weighted edges.
///
/// All methods are tolerant: an unknown node `u >= n` has no edges.
pub trait WeightedAdjacencyList: GraphNodeOrder {
    /// Returns an iterator over all edges leaving `u`, including duplicates
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_;

    /// Returns an iterator over all edges of the graph
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_;

    /// Returns an iterator over the destinations of all edges leaving `u`
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_edges_of(u).map(|e| e.destination)
    }

    /// Returns the number of edges leaving `u`
    fn out_degree_of(&self, u: Node) -> NumEdges {
        self.out_edges_of(u).count()
    }

    /// Returns the maximum out-degree in the graph
    fn max_out_degree(&self) -> NumEdges {
        self.vertices_range()
            .map(|u| self.out_degree_of(u))
            .max()
            .unwrap_or(0)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// Returns *false* if `u >= n || v >= n`.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Allows multiple edge-queries for a single node
    fn has_neighbors<const N: usize>(&self, u: Node, neighbors: [Node; N]) -> [bool; N] {
        neighbors.map(|v| self.has_edge(u, v))
    }

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Provides functions to insert vertices
pub trait GraphVertexEditing {
    /// Appends a new vertex and returns its index.
    /// Fails if a vertex with the same name already exists; the graph is unchanged then.
    fn add_vertex<N, M>(&mut self, name: N, mark: M) -> Result<Node>
    where
        N: Into<String>,
        M: Into<String>;

    /// Adds all `(name, mark)` pairs in the collection, stopping at the first failure
    fn add_vertices<N, M>(&mut self, vertices: impl IntoIterator<Item = (N, M)>) -> Result<()>
    where
        N: Into<String>,
        M: Into<String>,
    {
        for (name, mark) in vertices {
            self.add_vertex(name, mark)?;
        }
        Ok(())
    }
}

/// Provides functions to insert edges between named vertices
pub trait GraphEdgeEditing {
    /// Adds the edge `source -> destination` with the given weight and returns the index of
    /// the new edge. Duplicates are allowed and get their own index.
    fn add_weighted_edge(&mut self, source: &str, destination: &str, weight: Weight)
    -> Result<usize>;

    /// Adds the edge `source -> destination` with weight `1`
    fn add_edge(&mut self, source: &str, destination: &str) -> Result<usize> {
        self.add_weighted_edge(source, destination, 1)
    }

    /// Adds all `(source, destination, weight)` triples in the collection, stopping at the
    /// first failure
    fn add_weighted_edges<'a>(
        &mut self,
        edges: impl IntoIterator<Item = (&'a str, &'a str, Weight)>,
    ) -> Result<()> {
        for (u, v, w) in edges {
            self.add_weighted_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Adds all `(source, destination)` pairs in the collection with weight `1`
    fn add_edges<'a>(&mut self, edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<()> {
        for (u, v) in edges {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}
