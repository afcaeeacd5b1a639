/*!
# Flow Algorithms

This module provides Dinic's maximum-flow algorithm and its building blocks on top of
[`FlowNetwork`](crate::repr::FlowNetwork).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use capflow::algo::*;
```
and gain access to [`MaxFlow`], the level builder, the blocking-flow search, minimum cuts and
residual traversals.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily:
[`Dinic`] yields the value of every blocking flow it pushes.
*/

mod blocking_flow;
mod dinic;
mod levels;
mod min_cut;
mod traversal;

use crate::prelude::*;

pub use blocking_flow::*;
pub use dinic::*;
pub use levels::*;
pub use min_cut::*;
pub use traversal::*;
