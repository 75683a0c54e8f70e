/*!
# Node Representation

Vertices are addressed by a `Node = u32` index: the position of the vertex in insertion order.
The index is also the row of the vertex in the incidence matrix, so it is stable for the lifetime
of a graph (vertices are never removed).

The user-facing identity of a vertex is its [`Vertex::name`]; the [`Vertex::mark`] is an opaque
label that is only carried along for display purposes.
*/

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

/// Nodes are indices from `0` to `n - 1` in insertion order
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// A named vertex.
///
/// Equality and hashing only consider the name; two vertices with the same name but
/// different marks are the same vertex.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    mark: String,
}

impl Vertex {
    /// Creates a new vertex
    pub fn new<N, M>(name: N, mark: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Self {
            name: name.into(),
            mark: mark.into(),
        }
    }

    /// The unique name of the vertex
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display label of the vertex
    pub fn mark(&self) -> &str {
        &self.mark
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.name, self.mark)
    }
}

/// Returns the positional name used by bulk construction: `A, B, ..., Z, AA, AB, ...`
pub fn positional_name(mut index: usize) -> String {
    let mut letters = Vec::with_capacity(2);
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
