use std::ops::Range;

use super::*;

/// Layered networks: a source `0`, `layers` layers of `width` nodes each and a sink `n - 1`.
///
/// The source is connected to every node of the first layer and every node of the last layer is
/// connected to the sink. Between two consecutive layers, each pair is an edge with probability
/// `p`. All edges point one layer deeper, so every augmenting path in the initial residual network
/// has length `layers + 1`; cancelling flow creates the longer paths of later phases.
///
/// # Example
/// ```rust
/// use capflow::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
/// let network = Layered::new().layers(3).width(4).prob(1.0).build(rng).unwrap();
///
/// assert_eq!(network.number_of_nodes(), 14);
/// assert_eq!(network.number_of_edges(), 4 + 2 * 16 + 4);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Layered {
    layers: NumNodes,
    width: NumNodes,
    p: f64,
    max_capacity: i64,
}

impl Default for Layered {
    fn default() -> Self {
        Self {
            layers: 1,
            width: 1,
            p: 0.5,
            max_capacity: 1,
        }
    }
}

impl Layered {
    /// Creates a generator with a single layer of width one
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of layers between source and sink
    pub fn layers(mut self, layers: NumNodes) -> Self {
        self.layers = layers;
        self
    }

    /// Sets the number of nodes per layer
    pub fn width(mut self, width: NumNodes) -> Self {
        self.width = width;
        self
    }

    /// Sets the probability of an edge between two nodes of consecutive layers
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "Invalid probability {prob}");
        self.p = prob;
        self
    }

    /// Returns the source of the generated networks
    pub fn source(&self) -> Node {
        0
    }

    /// Returns the sink of the generated networks
    pub fn sink(&self) -> Node {
        self.num_nodes() - 1
    }

    fn layer(&self, i: NumNodes) -> Range<Node> {
        let first = 1 + i * self.width;
        first..first + self.width
    }
}

impl CapacityGen for Layered {
    fn max_capacity(mut self, max_capacity: i64) -> Self {
        assert!(max_capacity >= 0, "Capacities must be non-negative");
        self.max_capacity = max_capacity;
        self
    }
}

impl GraphGenerator for Layered {
    fn num_nodes(&self) -> NumNodes {
        self.layers * self.width + 2
    }

    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge>
    where
        R: Rng,
    {
        let mut edges = Vec::new();
        if self.layers > 0 {
            for v in self.layer(0) {
                edges.push(CapacitatedEdge(
                    self.source(),
                    v,
                    random_capacity(rng, self.max_capacity),
                ));
            }

            for i in 1..self.layers {
                for u in self.layer(i - 1) {
                    for v in self.layer(i) {
                        if rng.random_bool(self.p) {
                            edges.push(CapacitatedEdge(
                                u,
                                v,
                                random_capacity(rng, self.max_capacity),
                            ));
                        }
                    }
                }
            }

            for u in self.layer(self.layers - 1) {
                edges.push(CapacitatedEdge(
                    u,
                    self.sink(),
                    random_capacity(rng, self.max_capacity),
                ));
            }
        }
        edges.into_iter()
    }
}
