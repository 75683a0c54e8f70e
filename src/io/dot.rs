//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw labelled vertices and
//! weighted edges, and to color the edges of selected cycles.
//!
//! Drawing a graph with its triangles highlighted in red can be achieved via
//! ```rust
//! use incigraph::{prelude::*, algo::*, io::*};
//!
//! let mut graph = IncidenceGraph::new();
//! graph.add_vertices([("A", "1"), ("B", "2"), ("C", "3")]).unwrap();
//! graph.add_edges([("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
//!
//! let mut out = Vec::new();
//! DotWriter::new()
//!     .highlight_cycles(&graph.cycles_of_length(3), DotColor::Red)
//!     .try_write_graph(&graph, &mut out)
//!     .unwrap();
//!
//! let dot = String::from_utf8(out).unwrap();
//! assert!(dot.contains("\"C\" -> \"A\" [label=\"1\", color=red, penwidth=2];"));
//! ```
use std::{fmt::Display, io::Write};

use fxhash::FxHashSet;
use tracing::debug;

use super::*;
use crate::algo::Cycle;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Append the mark of a vertex to its label
    marks: bool,
    /// Label edges with their weight
    weights: bool,
    /// Edges drawn in `highlight_color`
    highlighted: FxHashSet<Edge>,
    highlight_color: DotColor,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            marks: true,
            weights: true,
            highlighted: FxHashSet::default(),
            highlight_color: DotColor::Red,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, vertices are labelled by their name only
    pub fn marks(mut self, marks: bool) -> Self {
        self.marks = marks;
        self
    }

    /// If *false*, edges are drawn without weight labels
    pub fn weights(mut self, weights: bool) -> Self {
        self.weights = weights;
        self
    }

    /// Draws every edge lying on one of `cycles` in `color`.
    /// Calling this again adds further edges but replaces the color.
    pub fn highlight_cycles<'c, I>(mut self, cycles: I, color: DotColor) -> Self
    where
        I: IntoIterator<Item = &'c Cycle>,
    {
        self.highlighted
            .extend(cycles.into_iter().flat_map(|c| c.edges()));
        self.highlight_color = color;
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")
    }

    /// Writes one statement per vertex carrying its label
    pub fn write_vertices<W, G>(&self, writer: &mut W, graph: &G) -> Result<()>
    where
        W: Write,
        G: NamedVertices,
    {
        for u in graph.vertices_range() {
            let vertex = graph.vertex(u);
            let label = if self.marks && !vertex.mark().is_empty() {
                format!("{} ({})", vertex.name(), vertex.mark())
            } else {
                vertex.name().to_string()
            };
            writeln!(writer, "  {} [label={}];", quoted(vertex.name()), quoted(&label))?;
        }
        Ok(())
    }

    /// Writes an iterator of weighted edges to `writer`; highlighted edges get colored
    pub fn write_edges<W, G, I>(&self, writer: &mut W, graph: &G, edges: I) -> Result<()>
    where
        W: Write,
        G: NamedVertices,
        I: IntoIterator<Item = WeightedEdge>,
    {
        for edge in edges {
            let mut attributes = Vec::new();
            if self.weights {
                attributes.push(format!("label={}", quoted(&edge.weight.to_string())));
            }
            if self.highlighted.contains(&edge.edge()) {
                attributes.push(format!("color={}, penwidth=2", self.highlight_color));
            }

            let attributes = if attributes.is_empty() {
                String::new()
            } else {
                format!(" [{}]", attributes.join(", "))
            };

            writeln!(
                writer,
                "  {} -> {}{attributes};",
                quoted(graph.name_of(edge.source)),
                quoted(graph.name_of(edge.destination))
            )?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: NamedVertices + WeightedAdjacencyList,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let n = graph.number_of_nodes();
        raise_error_unless!(
            self.highlighted.iter().all(|e| e.0 < n && e.1 < n),
            ErrorKind::InvalidInput,
            "highlighted cycle contains a vertex not in the graph"
        );

        debug!(
            vertices = n,
            highlighted = self.highlighted.len(),
            "writing dot graph"
        );

        self.start_graph(&mut writer)?;
        self.write_vertices(&mut writer, graph)?;
        self.write_edges(&mut writer, graph, graph.weighted_edges())?;
        self.finish_graph(&mut writer)
    }
}

/// Wraps `s` in double quotes, escaping quotes and backslashes
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Colors for highlighting, a subset of the SVG color scheme of
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Crimson,
    DarkGreen,
    DarkOrange,
    ForestGreen,
    Gold,
    Gray,
    Green,
    Magenta,
    Navy,
    Orange,
    Purple,
    Red,
    RoyalBlue,
    Teal,
}
