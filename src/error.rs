//! Errors raised by graph construction, mutation and interruptible searches.
//!
//! Queries never fail: unknown vertices simply yield `false` or empty results.

use thiserror::Error;

use crate::edge::Weight;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex with name '{name}' already exists")]
    DuplicateName { name: String },

    #[error("vertex '{name}' not found")]
    VertexNotFound { name: String },

    #[error(
        "invalid adjacency matrix: {rows} rows, a row of length {columns}, and {marks} vertex marks"
    )]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        marks: usize,
    },

    #[error("edge weight must be positive, got {weight}")]
    NonPositiveWeight { weight: Weight },

    #[error("no edge from '{from}' to '{to}'")]
    EdgeNotFound { from: String, to: String },

    #[error("cycle search cancelled after {found} cycles")]
    Cancelled { found: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
