/*!
# IO

Utilities for writing graphs as text.

## Output Formats

- **Table**: the incidence matrix with a header row `e1 e2 ...` and one row per vertex.
- **Diagram**: one line `A --(w)--> B` per edge in column order.
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/),
  optionally highlighting cycles found by [`crate::algo`].

Writing an empty graph (no vertices) with the table or diagram writer yields the single line
`Graph is empty.`.

## Traits

- [`GraphWriter`] is implemented by the writer of each format.
- [`GraphWrite`] abstracts over writing using a given [`FileFormat`].

```rust
use incigraph::{prelude::*, io::*};

let mut graph = IncidenceGraph::new();
graph.add_vertices([("A", ""), ("B", "")]).unwrap();
graph.add_weighted_edge("A", "B", 4).unwrap();

let mut out = Vec::new();
graph.try_write_to_writer(&mut out, FileFormat::Diagram).unwrap();
assert_eq!(String::from_utf8(out).unwrap(), "A --(4)--> B\n");
```
*/

pub mod dot;
pub mod table;

use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use dot::*;
pub use table::*;

/// Line written by the text writers for a graph without vertices
pub const EMPTY_GRAPH: &str = "Graph is empty.";

/// Identifier for an output format.
///
/// Used in [`GraphWrite`] to determine the correct writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Incidence table
    Table,
    /// One line per edge
    Diagram,
    /// DOT language of GraphViz
    Dot,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(FileFormat::Table),
            "diagram" => Ok(FileFormat::Diagram),
            "dot" => Ok(FileFormat::Dot),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
///
/// Uses the default settings of each writer.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    TableWriter: GraphWriter<G>,
    DiagramWriter: GraphWriter<G>,
    DotWriter: GraphWriter<G>,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Table => TableWriter::default().try_write_graph(self, writer),
            FileFormat::Diagram => DiagramWriter::default().try_write_graph(self, writer),
            FileFormat::Dot => DotWriter::default().try_write_graph(self, writer),
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
