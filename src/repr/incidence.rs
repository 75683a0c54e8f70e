use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// A directed weighted graph stored as an incidence matrix.
///
/// - Vertices are kept in insertion order; the index of a vertex is its row in the matrix.
/// - Every added edge occupies one column (see [`IncidenceMatrix`]).
/// - Vertices are looked up by name through an additional index.
///
/// Structural mutations (`add_vertex`, `add_weighted_edge`) rebuild the matrix with the new
/// dimensions and copy all existing entries forward.
#[derive(Debug, Clone, Default)]
pub struct IncidenceGraph {
    vertices: Vec<Vertex>,
    index: FxHashMap<String, Node>,
    matrix: IncidenceMatrix,
}

impl IncidenceGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a square adjacency matrix and one mark per vertex.
    ///
    /// Vertices are named by position (`A`, `B`, ..., `Z`, `AA`, ...). Every cell
    /// `matrix[i][j] > 0` becomes an edge from vertex `i` to vertex `j` carrying the cell value
    /// as weight; edges are numbered in row-major order. Cells `<= 0` are not edges.
    ///
    /// Fails with [`GraphError::DimensionMismatch`] if the matrix is not square or the number
    /// of marks differs from its dimension.
    pub fn from_adjacency_matrix<R, M>(matrix: &[R], marks: &[M]) -> Result<Self>
    where
        R: AsRef<[Weight]>,
        M: AsRef<str>,
    {
        let n = matrix.len();
        if let Some(row) = matrix.iter().find(|row| row.as_ref().len() != n) {
            return Err(GraphError::DimensionMismatch {
                rows: n,
                columns: row.as_ref().len(),
                marks: marks.len(),
            });
        }
        if marks.len() != n {
            return Err(GraphError::DimensionMismatch {
                rows: n,
                columns: n,
                marks: marks.len(),
            });
        }

        let vertices = marks
            .iter()
            .enumerate()
            .map(|(i, mark)| Vertex::new(positional_name(i), mark.as_ref()))
            .collect_vec();
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.name().to_string(), i as Node))
            .collect();

        let cells = matrix
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.as_ref()
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| **w > 0)
                    .map(move |(j, &w)| (i, j, w))
            })
            .collect_vec();

        let mut incidence = IncidenceMatrix::new(n, cells.len());
        for (column, &(u, v, w)) in cells.iter().enumerate() {
            write_column(&mut incidence, column, u, v, w);
        }

        debug!(
            vertices = n,
            edges = cells.len(),
            "built incidence graph from adjacency matrix"
        );

        Ok(Self {
            vertices,
            index,
            matrix: incidence,
        })
    }

    /// Returns all vertices in insertion order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns a read-only view of the incidence matrix
    pub fn incidence_matrix(&self) -> &IncidenceMatrix {
        &self.matrix
    }

    /// Returns *true* if there is an edge from the vertex named `source` to the vertex named
    /// `destination`. Unknown names yield *false*.
    pub fn are_adjacent(&self, source: &str, destination: &str) -> bool {
        match (self.node_of(source), self.node_of(destination)) {
            (Some(u), Some(v)) => self.has_edge(u, v),
            _ => false,
        }
    }

    /// Returns all edges leaving the vertex named `name` in column order.
    /// An unknown name yields no edges.
    pub fn outgoing_edges(&self, name: &str) -> Vec<WeightedEdge> {
        self.node_of(name)
            .map(|u| self.out_edges_of(u).collect())
            .unwrap_or_default()
    }

    /// Reconstructs all edges in column order. Columns that do not encode an edge are skipped.
    pub fn all_edges(&self) -> Vec<WeightedEdge> {
        self.weighted_edges().collect()
    }

    /// Returns the weight of the first edge from `source` to `destination`, if any
    pub fn edge_weight(&self, source: &str, destination: &str) -> Option<Weight> {
        let u = self.node_of(source)?;
        let v = self.node_of(destination)?;
        self.first_column_between(u, v)
            .map(|column| self.matrix.get(u as usize, column))
    }

    /// Overwrites the weight of the first edge from `source` to `destination`
    pub fn set_edge_weight(&mut self, source: &str, destination: &str, weight: Weight) -> Result<()> {
        if weight <= 0 {
            return Err(GraphError::NonPositiveWeight { weight });
        }
        let u = self.require_node(source)?;
        let v = self.require_node(destination)?;
        let column = self
            .first_column_between(u, v)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: source.to_string(),
                to: destination.to_string(),
            })?;

        write_column(&mut self.matrix, column, u as usize, v as usize, weight);
        trace!(source, destination, weight, column, "updated edge weight");
        Ok(())
    }

    /// Returns the number of edges entering `v`
    pub fn in_degree_of(&self, v: Node) -> NumEdges {
        self.weighted_edges()
            .filter(|e| e.destination == v)
            .count()
    }

    fn require_node(&self, name: &str) -> Result<Node> {
        self.node_of(name).ok_or_else(|| GraphError::VertexNotFound {
            name: name.to_string(),
        })
    }

    fn first_column_between(&self, u: Node, v: Node) -> Option<usize> {
        if u >= self.number_of_nodes() || v >= self.number_of_nodes() {
            return None;
        }
        let (u, v) = (u as usize, v as usize);
        (0..self.matrix.columns()).find(|&column| self.column_connects(column, u, v))
    }

    fn column_connects(&self, column: usize, u: usize, v: usize) -> bool {
        if self.matrix.get(u, column) <= 0 {
            return false;
        }
        if u == v {
            self.matrix.negative_row(column).is_none()
        } else {
            self.matrix.get(v, column) < 0
        }
    }
}

/// Writes the encoding of the edge `u -> v` into an all-zero (or previously identical) column
fn write_column(matrix: &mut IncidenceMatrix, column: usize, u: usize, v: usize, weight: Weight) {
    if u == v {
        matrix.set(u, column, weight);
    } else {
        matrix.set(u, column, weight);
        matrix.set(v, column, -weight);
    }
}

impl GraphNodeOrder for IncidenceGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl GraphEdgeOrder for IncidenceGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.matrix.columns()
    }
}

impl NamedVertices for IncidenceGraph {
    fn vertex(&self, u: Node) -> &Vertex {
        &self.vertices[u as usize]
    }

    fn node_of(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }
}

impl WeightedAdjacencyList for IncidenceGraph {
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        let row = (u < self.number_of_nodes()).then_some(u as usize);
        row.into_iter().flat_map(move |row| {
            (0..self.matrix.columns()).filter_map(move |column| {
                let weight = self.matrix.get(row, column);
                (weight > 0).then(|| {
                    let destination = self.matrix.negative_row(column).unwrap_or(row);
                    WeightedEdge::new(u, destination as Node, weight)
                })
            })
        })
    }

    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.matrix.columns()).filter_map(|column| {
            self.matrix
                .decode_column(column)
                .map(|(u, v, w)| WeightedEdge::new(u as Node, v as Node, w))
        })
    }
}

impl AdjacencyTest for IncidenceGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.first_column_between(u, v).is_some()
    }
}

impl GraphVertexEditing for IncidenceGraph {
    fn add_vertex<N, M>(&mut self, name: N, mark: M) -> Result<Node>
    where
        N: Into<String>,
        M: Into<String>,
    {
        let vertex = Vertex::new(name, mark);
        if self.index.contains_key(vertex.name()) {
            return Err(GraphError::DuplicateName {
                name: vertex.name().to_string(),
            });
        }

        let u = self.number_of_nodes();
        self.matrix = self
            .matrix
            .resized(self.matrix.rows() + 1, self.matrix.columns());
        self.index.insert(vertex.name().to_string(), u);
        trace!(name = vertex.name(), mark = vertex.mark(), node = u, "added vertex");
        self.vertices.push(vertex);

        Ok(u)
    }
}

impl GraphEdgeEditing for IncidenceGraph {
    fn add_weighted_edge(
        &mut self,
        source: &str,
        destination: &str,
        weight: Weight,
    ) -> Result<usize> {
        let u = self.require_node(source)?;
        let v = self.require_node(destination)?;
        if weight <= 0 {
            return Err(GraphError::NonPositiveWeight { weight });
        }

        let column = self.matrix.columns();
        self.matrix = self.matrix.resized(self.matrix.rows(), column + 1);
        write_column(&mut self.matrix, column, u as usize, v as usize, weight);
        trace!(source, destination, weight, column, "added edge");

        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_graph;

    fn abcde() -> IncidenceGraph {
        let mut graph = IncidenceGraph::new();
        graph
            .add_vertices([("A", "1"), ("B", "2"), ("C", "3"), ("D", "4"), ("E", "5")])
            .unwrap();
        graph
            .add_edges([("A", "B"), ("B", "C"), ("C", "A"), ("A", "D"), ("D", "C")])
            .unwrap();
        graph
    }

    fn assert_well_formed(graph: &IncidenceGraph) {
        let matrix = graph.incidence_matrix();
        assert_eq!(matrix.rows(), graph.len());
        assert_eq!(matrix.columns(), graph.number_of_edges());
        for column in 0..matrix.columns() {
            assert!(matrix.is_well_formed_column(column), "column {column}");
        }
    }

    #[test]
    fn empty_graph() {
        let graph = IncidenceGraph::new();
        assert!(graph.is_empty());
        assert!(graph.is_edgeless());
        assert_eq!(graph.incidence_matrix().rows(), 0);
        assert!(graph.all_edges().is_empty());
        assert!(!graph.are_adjacent("A", "B"));
        assert!(graph.outgoing_edges("A").is_empty());
    }

    #[test]
    fn add_vertex_grows_rows() {
        let mut graph = IncidenceGraph::new();
        assert_eq!(graph.add_vertex("A", "1").unwrap(), 0);
        assert_eq!(graph.add_vertex("B", "2").unwrap(), 1);
        graph.add_weighted_edge("A", "B", 3).unwrap();
        assert_eq!(graph.add_vertex("C", "3").unwrap(), 2);

        let matrix = graph.incidence_matrix();
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.columns(), 1);
        assert_eq!(matrix.column(0), &[3, -3, 0]);
        assert_eq!(graph.vertex(2).mark(), "3");
        assert_eq!(graph.node_of("C"), Some(2));
    }

    #[test]
    fn duplicate_vertex_leaves_graph_unchanged() {
        let mut graph = abcde();
        let before = graph.incidence_matrix().clone();

        assert_eq!(
            graph.add_vertex("C", "other"),
            Err(GraphError::DuplicateName {
                name: "C".to_string()
            })
        );

        assert_eq!(graph.len(), 5);
        assert_eq!(graph.vertex(2).mark(), "3");
        assert_eq!(graph.incidence_matrix(), &before);
    }

    #[test]
    fn add_edge_requires_known_vertices() {
        let mut graph = abcde();
        assert_eq!(
            graph.add_edge("A", "Z"),
            Err(GraphError::VertexNotFound {
                name: "Z".to_string()
            })
        );
        assert_eq!(
            graph.add_edge("Y", "A"),
            Err(GraphError::VertexNotFound {
                name: "Y".to_string()
            })
        );
        assert_eq!(
            graph.add_weighted_edge("A", "B", 0),
            Err(GraphError::NonPositiveWeight { weight: 0 })
        );
        assert_eq!(graph.number_of_edges(), 5);
    }

    #[test]
    fn add_edge_appends_column() {
        let mut graph = abcde();
        let before = graph.incidence_matrix().clone();

        assert_eq!(graph.add_weighted_edge("E", "B", 6).unwrap(), 5);

        let matrix = graph.incidence_matrix();
        assert_eq!(matrix.columns(), 6);
        for column in 0..5 {
            assert_eq!(matrix.column(column), before.column(column));
        }
        assert_eq!(matrix.column(5), &[0, -6, 0, 0, 6]);
        assert_well_formed(&graph);
    }

    #[test]
    fn adjacency_queries() {
        let graph = abcde();
        assert!(graph.are_adjacent("A", "B"));
        assert!(graph.are_adjacent("C", "A"));
        assert!(!graph.are_adjacent("B", "A"));
        assert!(!graph.are_adjacent("A", "E"));
        assert!(!graph.are_adjacent("A", "unknown"));
        assert!(!graph.has_edge(0, 17));
        assert_eq!(graph.has_neighbors(0, [1, 2, 3]), [true, false, true]);

        let outgoing = graph.outgoing_edges("A");
        assert_eq!(
            outgoing.iter().map(|e| e.edge()).collect_vec(),
            vec![Edge(0, 1), Edge(0, 3)]
        );
        assert!(graph.outgoing_edges("E").is_empty());
        assert!(graph.outgoing_edges("unknown").is_empty());
        assert_eq!(graph.out_degree_of(0), 2);
        assert_eq!(graph.in_degree_of(2), 2);
        assert_eq!(graph.max_out_degree(), 2);
    }

    #[test]
    fn all_edges_in_column_order() {
        let graph = abcde();
        let edges = graph.all_edges();
        assert_eq!(
            edges.iter().map(|e| e.edge()).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 0), Edge(0, 3), Edge(3, 2)]
        );
        assert!(edges.iter().all(|e| e.weight == 1));
        assert_eq!(edges, graph.all_edges());
    }

    #[test]
    fn from_adjacency_matrix() {
        let adjacency = [
            [0, 1, 0, 1, 1],
            [0, 0, 1, 0, 0],
            [1, 0, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 1, 0],
        ];
        let graph = IncidenceGraph::from_adjacency_matrix(&adjacency, &["1", "2", "3", "4", "5"])
            .unwrap();

        assert_eq!(
            graph.vertices().iter().map(|v| v.name()).collect_vec(),
            vec!["A", "B", "C", "D", "E"]
        );
        assert_eq!(graph.vertex(4).mark(), "5");
        assert_eq!(
            graph.all_edges().iter().map(|e| e.edge()).collect_vec(),
            vec![
                Edge(0, 1),
                Edge(0, 3),
                Edge(0, 4),
                Edge(1, 2),
                Edge(2, 0),
                Edge(3, 2),
                Edge(4, 3)
            ]
        );
        assert_well_formed(&graph);
    }

    #[test]
    fn from_adjacency_matrix_reproduces_positive_cells() {
        let adjacency = vec![
            vec![0, 3, 0, 0, 0, 0, 7, 0],
            vec![0, 0, 2, 0, 0, 0, 0, 1],
            vec![0, 0, 0, 3, 0, 1, 0, 0],
            vec![0, 21, 0, 0, 2, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 3, 0],
            vec![0, 0, 0, 0, 74, 0, 0, 2],
            vec![9, 0, 1, 0, -4, 0, 0, 0],
            vec![1, 0, 0, 0, 0, 0, 6, 0],
        ];
        let marks = (1..=8).map(|i| i.to_string()).collect_vec();
        let graph = IncidenceGraph::from_adjacency_matrix(&adjacency, &marks).unwrap();

        let expected = adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, w)| **w > 0)
                    .map(move |(j, &w)| (i as Node, j as Node, w))
            })
            .collect_vec();
        let actual = graph
            .all_edges()
            .into_iter()
            .map(|e| (e.source, e.destination, e.weight))
            .collect_vec();

        assert_eq!(actual, expected);
        assert_eq!(graph.edge_weight("D", "B"), Some(21));
        assert_eq!(graph.edge_weight("G", "E"), None);
        assert_well_formed(&graph);
    }

    #[test]
    fn from_adjacency_matrix_dimension_mismatch() {
        let not_square = vec![vec![0, 1], vec![1]];
        assert_eq!(
            IncidenceGraph::from_adjacency_matrix(&not_square, &["1", "2"]).unwrap_err(),
            GraphError::DimensionMismatch {
                rows: 2,
                columns: 1,
                marks: 2
            }
        );

        let wide = [[0, 1, 0], [1, 0, 0]];
        assert!(matches!(
            IncidenceGraph::from_adjacency_matrix(&wide, &["1", "2"]),
            Err(GraphError::DimensionMismatch { .. })
        ));

        let square = [[0, 1], [1, 0]];
        assert_eq!(
            IncidenceGraph::from_adjacency_matrix(&square, &["1"]).unwrap_err(),
            GraphError::DimensionMismatch {
                rows: 2,
                columns: 2,
                marks: 1
            }
        );

        let empty: [[Weight; 0]; 0] = [];
        let graph = IncidenceGraph::from_adjacency_matrix(&empty, &[] as &[&str]).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn incremental_after_bulk() {
        let mut graph = IncidenceGraph::from_adjacency_matrix(&[[0, 2], [0, 0]], &["x", "y"])
            .unwrap();
        graph.add_vertex("C", "z").unwrap();
        graph.add_edge("B", "C").unwrap();
        assert!(graph.add_vertex("A", "again").is_err());

        assert_eq!(
            graph.all_edges().iter().map(|e| e.edge()).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2)]
        );
        assert_well_formed(&graph);
    }

    #[test]
    fn self_loops() {
        let mut graph = IncidenceGraph::new();
        graph.add_vertices([("A", ""), ("B", "")]).unwrap();
        graph.add_weighted_edge("A", "A", 4).unwrap();
        graph.add_edge("A", "B").unwrap();

        assert_eq!(graph.incidence_matrix().column(0), &[4, 0]);
        assert!(graph.has_self_loop(0));
        assert!(!graph.has_self_loop(1));
        assert!(graph.are_adjacent("A", "A"));
        assert_eq!(
            graph.all_edges().iter().map(|e| e.edge()).collect_vec(),
            vec![Edge(0, 0), Edge(0, 1)]
        );
        assert_eq!(graph.outgoing_edges("A")[0].weight, 4);
        assert_well_formed(&graph);

        let bulk = IncidenceGraph::from_adjacency_matrix(&[[5]], &["m"]).unwrap();
        assert!(bulk.has_self_loop(0));
        assert_eq!(bulk.edge_weight("A", "A"), Some(5));
    }

    #[test]
    fn duplicate_edges_keep_their_own_columns() {
        let mut graph = IncidenceGraph::new();
        graph.add_vertices([("A", ""), ("B", "")]).unwrap();
        graph.add_weighted_edge("A", "B", 2).unwrap();
        graph.add_weighted_edge("A", "B", 9).unwrap();

        let edges = graph.all_edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], edges[1]);
        assert_eq!((edges[0].weight, edges[1].weight), (2, 9));
        assert_eq!(graph.outgoing_edges("A").len(), 2);
        assert_eq!(graph.edge_weight("A", "B"), Some(2));
    }

    #[test]
    fn set_edge_weight() {
        let mut graph = abcde();
        graph.set_edge_weight("A", "D", 8).unwrap();
        assert_eq!(graph.edge_weight("A", "D"), Some(8));
        assert_eq!(graph.incidence_matrix().column(3), &[8, 0, 0, -8, 0]);

        assert_eq!(
            graph.set_edge_weight("D", "A", 2),
            Err(GraphError::EdgeNotFound {
                from: "D".to_string(),
                to: "A".to_string()
            })
        );
        assert_eq!(
            graph.set_edge_weight("A", "D", -1),
            Err(GraphError::NonPositiveWeight { weight: -1 })
        );
        assert!(matches!(
            graph.set_edge_weight("A", "Q", 1),
            Err(GraphError::VertexNotFound { .. })
        ));
        assert_well_formed(&graph);
    }

    #[test]
    fn randomized_invariants() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [1, 5, 12] {
            for m in [0, n, 4 * n] {
                let graph = random_graph(rng, n, m);
                assert_eq!(graph.len(), n);
                assert_eq!(graph.number_of_edges(), m);
                assert_well_formed(&graph);

                let edges = graph.all_edges();
                assert_eq!(edges.len(), m);
                assert_eq!(edges, graph.all_edges());

                for u in graph.vertices_range() {
                    let out = graph.out_edges_of(u).collect_vec();
                    assert_eq!(
                        out.iter().map(|e| e.edge()).collect_vec(),
                        edges
                            .iter()
                            .filter(|e| e.source == u)
                            .map(|e| e.edge())
                            .collect_vec()
                    );
                    for v in graph.vertices_range() {
                        assert_eq!(
                            graph.has_edge(u, v),
                            edges.iter().any(|e| e.edge() == Edge(u, v))
                        );
                    }
                }
            }
        }
    }
}
