/*!
# Graph Generators

Deterministic generators that add well-known substructures (paths, cycles, cliques) between
named vertices of an existing graph. They work on every graph implementing
[`GraphEdgeEditing`] and are mostly used to set up graphs with a known number of cycles.
*/

use crate::{error::Result, prelude::*};

mod substructures;

pub use substructures::*;
