//! # Table & Diagram
//!
//! Plain-text renderings of a graph.
//!
//! The [`TableWriter`] prints the incidence matrix: a header with one label `e1, e2, ...` per
//! edge column followed by one line per vertex holding its row of the matrix, right-aligned.
//! ```text
//!   e1 e2
//! A  3  0
//! B -3  1
//! C  0 -1
//! ```
//!
//! The [`DiagramWriter`] prints one line per edge in column order, e.g. `A --(3)--> B`.
use std::io::Write;

use itertools::Itertools;

use super::*;

/// A writer for the incidence table
#[derive(Debug, Clone, Default)]
pub struct TableWriter {
    /// Append the mark to the vertex name in each row
    marks: bool,
}

impl TableWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, rows are labelled `name(mark)` instead of `name`
    pub fn marks(mut self, marks: bool) -> Self {
        self.marks = marks;
        self
    }

    fn row_label(&self, vertex: &Vertex) -> String {
        if self.marks && !vertex.mark().is_empty() {
            format!("{}({})", vertex.name(), vertex.mark())
        } else {
            vertex.name().to_string()
        }
    }
}

impl GraphWriter<IncidenceGraph> for TableWriter {
    fn try_write_graph<W>(&self, graph: &IncidenceGraph, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        if graph.is_empty() {
            return writeln!(writer, "{EMPTY_GRAPH}");
        }

        let matrix = graph.incidence_matrix();
        let labels = graph.vertices().iter().map(|v| self.row_label(v)).collect_vec();
        let headers = (1..=matrix.columns()).map(|j| format!("e{j}")).collect_vec();

        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let cell_width = headers
            .iter()
            .map(|h| h.len())
            .chain((0..matrix.rows()).flat_map(|i| matrix.row(i).map(|w| w.to_string().len())))
            .max()
            .unwrap_or(0);

        let mut line = format!("{:label_width$}", "");
        for header in &headers {
            line.push_str(&format!(" {header:>cell_width$}"));
        }
        writeln!(writer, "{}", line.trim_end())?;

        for (i, label) in labels.iter().enumerate() {
            let mut line = format!("{label:<label_width$}");
            for weight in matrix.row(i) {
                line.push_str(&format!(" {weight:>cell_width$}"));
            }
            writeln!(writer, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// A writer for the edge diagram
#[derive(Debug, Clone)]
pub struct DiagramWriter {
    /// Print the weight on each arrow
    weights: bool,
}

impl Default for DiagramWriter {
    fn default() -> Self {
        Self { weights: true }
    }
}

impl DiagramWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, edges are written as `A --> B`
    pub fn weights(mut self, weights: bool) -> Self {
        self.weights = weights;
        self
    }
}

impl<G> GraphWriter<G> for DiagramWriter
where
    G: NamedVertices + WeightedAdjacencyList,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        if graph.is_empty() {
            return writeln!(writer, "{EMPTY_GRAPH}");
        }

        for edge in graph.weighted_edges() {
            let (u, v) = (graph.name_of(edge.source), graph.name_of(edge.destination));
            if self.weights {
                writeln!(writer, "{u} --({})--> {v}", edge.weight)?;
            } else {
                writeln!(writer, "{u} --> {v}")?;
            }
        }
        Ok(())
    }
}
