/*!
# Network Generators

This module provides builder-style generators for random capacitated networks.

Each generator allows parameterized control over structural properties of the network (number of
nodes, edge probability, capacity range), and can produce either a complete collection of edges or
a stream of them through iterators. The typical usage workflow is:

1. Create a generator instance (e.g., `CapacitatedGnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).max_capacity(c)`).
3. Generate edges via `generate()` or `stream()`, or directly a network via `build()`.

Supported models include:
- [`CapacitatedGnp`]: every ordered pair `(u, v)` is an edge with probability `p`
- [`Layered`]: a source, `k` layers of equal width and a sink; edges only go one layer deeper
- [`path`]: a deterministic path `0 -> 1 -> ... -> n - 1`

Capacities are drawn uniformly from `0..=max_capacity`.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod layered;

pub use gnp::*;
pub use layered::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the network generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the capacity range.
pub trait CapacityGen {
    /// Capacities are drawn uniformly from `0..=max_capacity`.
    /// ** Panics if `max_capacity < 0` **
    fn max_capacity(self, max_capacity: i64) -> Self;
}

/// General trait for a configurable random network generator.
///
/// Types implementing this trait can produce a complete edge list, a lazily-evaluated stream
/// (iterator) of edges or a ready-to-use [`FlowNetwork`].
pub trait GraphGenerator {
    /// Number of nodes of the generated networks
    fn num_nodes(&self) -> NumNodes;

    /// Creates a lazy iterator (stream) over generated edges.
    ///
    /// Depending on the underlying model, this might also be just an iterator over an already
    /// generated list of edges if a direct iterator is not feasible in the model.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge>
    where
        R: Rng;

    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<CapacitatedEdge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<CapacitatedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Generates a network with [`Self::num_nodes`] nodes.
    ///
    /// # Errors
    /// Fails if the capacities leaving a single node overflow (see [`FlowNetwork::add_edge`]).
    fn build<R>(&self, rng: &mut R) -> Result<FlowNetwork, FlowError>
    where
        R: Rng,
    {
        FlowNetwork::try_from_edges(self.num_nodes(), self.stream(rng))
    }
}

/// Returns the edges of the path `0 -> 1 -> ... -> n - 1`, all with the same capacity.
///
/// # Example
/// ```rust
/// use capflow::{prelude::*, gens::*, algo::*};
///
/// let mut network = FlowNetwork::try_from_edges(5, path(5, 3)).unwrap();
/// assert_eq!(network.number_of_edges(), 4);
/// assert_eq!(network.max_flow(0, 4).unwrap(), 3);
/// ```
pub fn path(n: NumNodes, capacity: i64) -> impl Iterator<Item = CapacitatedEdge> {
    (1..n).map(move |v| CapacitatedEdge(v - 1, v, capacity))
}

/// Draws a capacity uniformly from `0..=max_capacity`.
fn random_capacity<R: Rng>(rng: &mut R, max_capacity: i64) -> i64 {
    rng.random_range(0..=max_capacity)
}
