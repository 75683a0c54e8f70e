/*!
# Graph Algorithms

Algorithms on the graphs of this crate. They are provided as traits blanket-implemented on every
graph exposing the required operations, plus configurable structs for finer control.
```rust
use incigraph::algo::*;
```
*/

mod cycles;

use crate::{error::Result, prelude::*};

pub use cycles::*;
