/*!
`capflow` computes maximum flows and minimum cuts in capacitated, directed networks using
**Dinic's algorithm**.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the network.
As most networks do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
Input **edges** are tuple-structs `CapacitatedEdge(u, v, capacity)`; the capacity is signed so that
negative values can be rejected with a proper error.

Inside a [`FlowNetwork`](crate::repr::FlowNetwork), the `k`-th inserted edge is stored as a pair
of arcs: the forward arc at index `2k` and its reverse arc at index `2k + 1`. Flow is never stored
explicitly; it is the residual capacity of the reverse arc. Parallel and antiparallel edges as well
as self-loops are allowed and stored independently.

# Algorithm

Dinic's algorithm repeats two steps until the sink becomes unreachable:
1. label every vertex with its BFS distance from the source in the residual graph,
2. push a blocking flow along arcs that go exactly one level deeper.

The algorithm runs in `O(n^2 * m)` time and `O(n + m)` extra space. The blocking-flow search is
iterative, so long augmenting paths do not exhaust the call stack.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic network operations, and the [`FlowNetwork`](crate::repr::FlowNetwork),
- [`algo`] includes the [`MaxFlow`](crate::algo::MaxFlow) trait (`network.max_flow(s, t)`), the phase-wise [`Dinic`](crate::algo::Dinic) iterator, minimum cuts and residual traversals,
- [`gens`] includes random network generators,
- [`io`] includes readers and writers for a plain edge-list format and DIMACS max-flow files.

In most use-cases, `use capflow::{prelude::*, algo::*};` suffices for your needs.

```
use capflow::{prelude::*, algo::*};

let mut network = FlowNetwork::try_from_edges(
    4,
    [(0, 1, 3), (1, 2, 2), (0, 2, 2), (2, 3, 3), (1, 3, 2)],
)?;

let (flow, cut) = network.max_flow_min_cut(0, 3)?;
assert_eq!(flow, 5);
assert_eq!(cut.capacity(), 5);
# Ok::<(), FlowError>(())
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `capflow::prelude` includes definitions for nodes and edges, errors, all basic network operation traits as well as the network representation.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{FlowError, InvalidEdgeReason, Terminal},
        node::*,
        ops::*,
        repr::*,
    };
}
