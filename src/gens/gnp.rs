use rand_distr::{Distribution, Geometric};

use super::*;

/// A G(n, p) network can be defined by either a probability or the average out-degree which is
/// more common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average out-degree of a node
    AvgDeg(f64),
}

/// Directed `G(n,p)` networks contain every ordered pair `(u, v)` as an edge with probability `p`
/// independent from each other. Capacities are drawn uniformly from `0..=max_capacity`.
///
/// Self-loops are skipped unless enabled with [`CapacitatedGnp::loops`]; they never carry flow,
/// but exercise the edge store.
///
/// # Example
/// ```rust
/// use capflow::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand::rngs::StdRng::seed_from_u64(3);
/// let network = CapacitatedGnp::new()
///     .nodes(10)
///     .prob(0.3)
///     .max_capacity(100)
///     .build(rng)
///     .unwrap();
///
/// assert_eq!(network.number_of_nodes(), 10);
/// assert!(network.edges().all(|(u, v, c)| u != v && c <= 100));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct CapacitatedGnp {
    n: NumNodes,
    p: GnpType,
    max_capacity: i64,
    loops: bool,
}

impl Default for CapacitatedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            max_capacity: 1,
            loops: false,
        }
    }
}

impl CapacitatedGnp {
    /// Creates a new empty `G(n,p)` generator with capacities in `0..=1`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "Invalid probability {prob}");
        self.p = GnpType::Prob(prob);
        self
    }

    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }

    /// Allows self-loops to be generated
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    fn probability(&self) -> f64 {
        let p = match self.p {
            GnpType::NotSet => panic!("Probability of CapacitatedGnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => d / self.n as f64,
        };
        assert!(
            (0.0..=1.0).contains(&p),
            "The average degree is invalid for the given n!"
        );
        p
    }
}

impl NumNodesGen for CapacitatedGnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl CapacityGen for CapacitatedGnp {
    fn max_capacity(mut self, max_capacity: i64) -> Self {
        assert!(max_capacity >= 0, "Capacities must be non-negative");
        self.max_capacity = max_capacity;
        self
    }
}

impl GraphGenerator for CapacitatedGnp {
    fn num_nodes(&self) -> NumNodes {
        self.n
    }

    /// Creates a streaming generator over random `G(n,p)` edges in lexicographic order
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = CapacitatedEdge>
    where
        R: Rng,
    {
        let p = self.probability();
        let n = self.n as u64;

        // p = 0 yields nothing and p = 1 takes every pair; otherwise skip geometrically
        let jumps = if p > 0.0 && p < 1.0 {
            Geometric::new(p).ok()
        } else {
            None
        };

        PairJumper {
            rng,
            jumps,
            next: if p > 0.0 { 0 } else { n * n },
            stop: n * n,
            n,
            max_capacity: self.max_capacity,
            loops: self.loops,
        }
    }
}

/// Walks over all `n^2` ordered pairs, skipping a geometrically distributed number of pairs
/// between two selected ones.
struct PairJumper<'a, R: Rng> {
    rng: &'a mut R,
    jumps: Option<Geometric>,
    next: u64,
    stop: u64,
    n: u64,
    max_capacity: i64,
    loops: bool,
}

impl<R: Rng> Iterator for PairJumper<'_, R> {
    type Item = CapacitatedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let skip = match &self.jumps {
                Some(distr) => distr.sample(&mut *self.rng),
                None => 0,
            };

            let x = self.next.saturating_add(skip);
            if x >= self.stop {
                self.next = self.stop;
                return None;
            }
            self.next = x + 1;

            let (u, v) = ((x / self.n) as Node, (x % self.n) as Node);
            if u == v && !self.loops {
                continue;
            }

            return Some(CapacitatedEdge(
                u,
                v,
                random_capacity(&mut *self.rng, self.max_capacity),
            ));
        }
    }
}
