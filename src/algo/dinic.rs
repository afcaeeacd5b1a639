/*!
# Dinic's Algorithm

The driver alternates two steps until the sink becomes unreachable:

1. **Leveling**: [`LevelGraph::build`] labels every vertex with its BFS distance from the
   source in the residual graph. If the sink is not labeled, the computation terminates.
2. **Blocking flow**: all arc cursors are reset and [`BlockingFlow::augment`] is called with
   an unbounded limit until it returns `0`. The pushed amounts are summed up.

Each phase strictly increases the level of the sink, so there are at most `n - 1` phases.
If `source == sink` the computation terminates immediately with flow `0`.

[`Dinic`] exposes the phases as an iterator over the flow of each blocking flow; the
[`MaxFlow`] trait provides the usual one-call interface on [`FlowNetwork`].

[`Dinic`] continues from whatever flow the network already carries. [`MaxFlow::max_flow`]
always starts from the inserted capacities.
*/

use super::*;
use crate::error::FlowError;
use log::debug;

/// Where the driver currently stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Leveling,
    Terminated,
}

/// Dinic's blocking-flow algorithm for a fixed `(source, sink)` pair.
///
/// The network is borrowed mutably for the whole computation: flow is written directly into
/// its residual capacities and nothing else may observe or modify it meanwhile. Levels and
/// arc cursors are owned by this struct.
///
/// Flow already stored in the network is kept and augmented. If it was routed between other
/// terminals, the reverse arcs may offer more than the inserted capacities; sums then
/// saturate at [`Flow::MAX`].
pub struct Dinic<'a> {
    network: &'a mut FlowNetwork,
    source: Node,
    sink: Node,
    levels: LevelGraph,
    search: BlockingFlow,
    phase: Phase,
    total_flow: Flow,
    phases: usize,
    max_phases: Option<usize>,
}

impl<'a> Dinic<'a> {
    /// Creates a new computation on `network`.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] if `source` or `sink` is not a vertex of the
    /// network. No work is done in that case.
    pub fn new(
        network: &'a mut FlowNetwork,
        source: Node,
        sink: Node,
    ) -> Result<Self, FlowError> {
        network.check_terminals(source, sink)?;

        let n = network.number_of_nodes();
        Ok(Self {
            network,
            source,
            sink,
            levels: LevelGraph::new(n),
            search: BlockingFlow::new(n),
            phase: if source == sink {
                Phase::Terminated
            } else {
                Phase::Leveling
            },
            total_flow: 0,
            phases: 0,
            max_phases: None,
        })
    }

    /// Stops the computation after at most `max_phases` blocking flows.
    /// The result is then a valid, but possibly not maximum, flow.
    pub fn set_max_phases(&mut self, max_phases: usize) {
        self.max_phases = Some(max_phases);
    }

    /// Builder-style version of [`Self::set_max_phases`].
    pub fn max_phases(mut self, max_phases: usize) -> Self {
        self.set_max_phases(max_phases);
        self
    }

    /// Runs all remaining phases and returns the total flow pushed by this computation.
    pub fn run(&mut self) -> Flow {
        while self.next().is_some() {}
        self.total_flow
    }

    /// Returns the flow pushed so far.
    pub fn total_flow(&self) -> Flow {
        self.total_flow
    }

    /// Returns the number of completed phases.
    pub fn phases(&self) -> usize {
        self.phases
    }

    /// Returns *true* once the sink is no longer reachable, i.e. the flow is maximum.
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Returns the labels of the most recent leveling step.
    pub fn levels(&self) -> &LevelGraph {
        &self.levels
    }

    /// Returns the network the flow is written into.
    pub fn network(&self) -> &FlowNetwork {
        &*self.network
    }

    /// Pushes a blocking flow through the current level graph and returns its value.
    fn blocking_flow(&mut self) -> Flow {
        self.search.reset();

        let mut phase_flow: Flow = 0;
        loop {
            let pushed = self.search.augment(
                self.network,
                &self.levels,
                self.source,
                self.sink,
                Flow::MAX,
            );
            if pushed == 0 {
                break;
            }
            phase_flow = phase_flow.saturating_add(pushed);
        }
        phase_flow
    }
}

/// Yields the value of each blocking flow until the flow is maximum.
impl Iterator for Dinic<'_> {
    type Item = Flow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.phase == Phase::Terminated
            || self.max_phases.is_some_and(|max| self.phases >= max)
        {
            return None;
        }

        if !self.levels.build(self.network, self.source, self.sink) {
            self.phase = Phase::Terminated;
            debug!(
                "Max flow {} found after {} phases",
                self.total_flow, self.phases
            );
            return None;
        }

        let sink_level = self.levels.level(self.sink);
        let phase_flow = self.blocking_flow();
        debug_assert!(phase_flow > 0);

        self.total_flow = self.total_flow.saturating_add(phase_flow);
        self.phases += 1;

        debug!(
            "Phase {}: sink at level {sink_level}, pushed {phase_flow} (total {})",
            self.phases, self.total_flow
        );

        Some(phase_flow)
    }
}

/// Maximum `(s, t)`-flow computations directly on a network.
pub trait MaxFlow {
    /// Creates a [`Dinic`] computation without running it. It resumes from the flow already
    /// stored in the network.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] if `source` or `sink` is out of range.
    fn dinic(&mut self, source: Node, sink: Node) -> Result<Dinic<'_>, FlowError>;

    /// Routes a maximum flow from `source` to `sink` and returns its value.
    ///
    /// Flow left over from earlier runs is discarded first, so the result only depends on the
    /// inserted capacities. The new flow is kept in the network (see [`FlowNetwork::flow_of`]).
    ///
    /// Returns `0` if `source == sink` or if the sink cannot be reached.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] if `source` or `sink` is out of range.
    ///
    /// # Examples
    /// ```
    /// use capflow::{prelude::*, algo::*};
    ///
    /// let mut network = FlowNetwork::new(2);
    /// network.add_edge(0, 1, 7).unwrap();
    ///
    /// assert_eq!(network.max_flow(0, 1).unwrap(), 7);
    /// assert_eq!(network.max_flow(1, 0).unwrap(), 0);
    /// assert!(network.max_flow(0, 2).is_err());
    /// ```
    fn max_flow(&mut self, source: Node, sink: Node) -> Result<Flow, FlowError>;

    /// Routes a maximum flow and returns its value together with a minimum cut.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] if `source` or `sink` is out of range.
    fn max_flow_min_cut(&mut self, source: Node, sink: Node)
    -> Result<(Flow, MinCut), FlowError>;
}

impl MaxFlow for FlowNetwork {
    fn dinic(&mut self, source: Node, sink: Node) -> Result<Dinic<'_>, FlowError> {
        Dinic::new(self, source, sink)
    }

    fn max_flow(&mut self, source: Node, sink: Node) -> Result<Flow, FlowError> {
        self.check_terminals(source, sink)?;
        if !self.is_flow_free() {
            self.reset_flow();
        }
        Ok(self.dinic(source, sink)?.run())
    }

    fn max_flow_min_cut(
        &mut self,
        source: Node,
        sink: Node,
    ) -> Result<(Flow, MinCut), FlowError> {
        let flow = self.max_flow(source, sink)?;
        Ok((flow, MinCut::from_residual(self, source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Terminal,
        gens::{CapacitatedGnp, CapacityGen, GraphGenerator, Layered, NumNodesGen},
        testing::{assert_valid_flow, brute_force_min_cut},
    };
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    const WORKED_EXAMPLE: [(Node, Node, i64); 5] =
        [(0, 1, 3), (1, 2, 2), (0, 2, 2), (2, 3, 3), (1, 3, 2)];

    #[test]
    fn worked_example() {
        let mut network = FlowNetwork::try_from_edges(4, WORKED_EXAMPLE).unwrap();
        assert_eq!(network.max_flow(0, 3), Ok(5));
        assert_valid_flow(&network, 0, 3, 5);
        assert_eq!(
            network.edge_flows().collect_vec(),
            vec![(0, 1, 3), (1, 2, 1), (0, 2, 2), (2, 3, 3), (1, 3, 2)]
        );
    }

    #[test]
    fn phases() {
        let mut network = FlowNetwork::try_from_edges(4, WORKED_EXAMPLE).unwrap();
        let mut dinic = network.dinic(0, 3).unwrap();

        assert_eq!(dinic.next(), Some(4));
        assert_eq!(dinic.levels().level(3), 2);
        assert_eq!(dinic.next(), Some(1));
        assert_eq!(dinic.levels().level(3), 3);
        assert!(!dinic.is_terminated());
        assert_eq!(dinic.next(), None);
        assert!(dinic.is_terminated());
        assert_eq!(dinic.next(), None);

        assert_eq!(dinic.phases(), 2);
        assert_eq!(dinic.total_flow(), 5);
    }

    #[test]
    fn max_phases() {
        let mut network = FlowNetwork::try_from_edges(4, WORKED_EXAMPLE).unwrap();
        let flow = network.dinic(0, 3).unwrap().max_phases(1).run();
        assert_eq!(flow, 4);
        assert_valid_flow(&network, 0, 3, 4);

        // resuming on the same network finds the rest
        assert_eq!(network.dinic(0, 3).unwrap().run(), 1);
        assert_valid_flow(&network, 0, 3, 5);

        // while max_flow starts over
        assert_eq!(network.max_flow(0, 3), Ok(5));
        assert_valid_flow(&network, 0, 3, 5);
    }

    #[test]
    fn terminals_change_between_runs() {
        let mut network = FlowNetwork::try_from_edges(4, WORKED_EXAMPLE).unwrap();
        assert_eq!(network.max_flow(0, 3), Ok(5));
        assert_eq!(network.max_flow(3, 0), Ok(0));
        assert!(network.is_flow_free());
        assert_eq!(network.max_flow(1, 3), Ok(4));
        assert_valid_flow(&network, 1, 3, 4);

        // invalid terminals leave the previous flow untouched
        assert!(network.max_flow(1, 4).is_err());
        assert_valid_flow(&network, 1, 3, 4);
    }

    #[test]
    fn huge_capacities_between_runs() {
        const MAX: i64 = i64::MAX;
        let edges = [(0, 2, MAX), (0, 1, MAX), (1, 2, MAX), (2, 0, MAX)];

        let mut network = FlowNetwork::try_from_edges(3, edges).unwrap();
        assert_eq!(network.max_flow(0, 2), Ok(2 * MAX as Flow));
        assert_eq!(network.max_flow(2, 0), Ok(MAX as Flow));
        assert_valid_flow(&network, 2, 0, MAX as Flow);

        // resuming with swapped terminals can exceed the inserted capacities
        let mut network = FlowNetwork::try_from_edges(3, edges).unwrap();
        assert_eq!(network.max_flow(0, 2), Ok(2 * MAX as Flow));
        assert_eq!(network.dinic(2, 0).unwrap().run(), Flow::MAX);
    }

    #[test]
    fn degenerate_cases() {
        // source == sink
        let mut network = FlowNetwork::try_from_edges(4, WORKED_EXAMPLE).unwrap();
        assert_eq!(network.max_flow(1, 1), Ok(0));
        assert!(network.is_flow_free());
        let dinic = network.dinic(2, 2).unwrap();
        assert!(dinic.is_terminated());

        // no path
        let mut network = FlowNetwork::try_from_edges(4, [(0, 1, 5), (2, 3, 5)]).unwrap();
        assert_eq!(network.max_flow(0, 3), Ok(0));
        assert_eq!(network.max_flow(3, 0), Ok(0));

        // no edges at all
        let mut network = FlowNetwork::new(2);
        assert_eq!(network.max_flow(0, 1), Ok(0));

        // single edge
        for c in [0, 1, 1234, i64::MAX] {
            let mut network = FlowNetwork::try_from_edges(2, [(0, 1, c)]).unwrap();
            assert_eq!(network.max_flow(0, 1), Ok(c as Flow));
            assert_eq!(network.max_flow(1, 0), Ok(0));
        }
    }

    #[test]
    fn invalid_endpoints() {
        let mut network = FlowNetwork::try_from_edges(4, WORKED_EXAMPLE).unwrap();
        assert_eq!(
            network.max_flow(4, 3),
            Err(FlowError::InvalidEndpoint {
                terminal: Terminal::Source,
                node: 4,
                n: 4
            })
        );
        assert_eq!(
            network.max_flow(0, 10),
            Err(FlowError::InvalidEndpoint {
                terminal: Terminal::Sink,
                node: 10,
                n: 4
            })
        );
        assert!(network.is_flow_free());
    }

    #[test]
    fn cancels_flow() {
        // the only shortest path 0 -> 1 -> 2 -> 4 blocks both remaining routes; the second
        // phase has to send flow back along 2 -> 1
        let mut network = FlowNetwork::try_from_edges(
            7,
            [
                (0, 1, 1),
                (1, 2, 1),
                (2, 4, 1),
                (0, 3, 1),
                (3, 5, 1),
                (5, 2, 1),
                (1, 6, 1),
                (6, 4, 1),
            ],
        )
        .unwrap();

        let mut dinic = network.dinic(0, 4).unwrap();
        assert_eq!(dinic.next(), Some(1));
        assert_eq!(dinic.next(), Some(1));
        assert_eq!(dinic.levels().level(4), 6);
        assert_eq!(dinic.run(), 2);

        assert_eq!(network.flow_of(1), 0);
        assert_valid_flow(&network, 0, 4, 2);
    }

    #[test]
    fn parallel_and_antiparallel_edges() {
        let mut network = FlowNetwork::try_from_edges(
            3,
            [(0, 1, 2), (0, 1, 3), (1, 0, 4), (1, 2, 10), (2, 1, 1), (1, 1, 9)],
        )
        .unwrap();
        assert_eq!(network.max_flow(0, 2), Ok(5));
        assert_valid_flow(&network, 0, 2, 5);
    }

    #[test]
    fn identical_networks_identical_results() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let edges = CapacitatedGnp::new()
                .nodes(30)
                .prob(0.1)
                .max_capacity(50)
                .generate(rng);

            let mut first = FlowNetwork::try_from_edges(30, edges.iter()).unwrap();
            let mut second = FlowNetwork::try_from_edges(30, edges.iter()).unwrap();

            assert_eq!(first.max_flow(0, 29), second.max_flow(0, 29));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn reset_and_rerun() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let mut network = CapacitatedGnp::new()
            .nodes(40)
            .prob(0.15)
            .max_capacity(100)
            .build(rng)
            .unwrap();

        let flow = network.max_flow(0, 39).unwrap();
        assert_eq!(network.dinic(0, 39).unwrap().run(), 0);
        assert_eq!(network.max_flow(0, 39), Ok(flow));
        assert_valid_flow(&network, 0, 39, flow);

        network.reset_flow();
        assert!(network.is_flow_free());
        assert_eq!(network.max_flow(0, 39), Ok(flow));
    }

    #[test]
    fn random_against_min_cut() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for n in [2, 3, 5, 8, 10] {
            for p in [0.2, 0.4, 0.7] {
                for _ in 0..20 {
                    let mut network = CapacitatedGnp::new()
                        .nodes(n)
                        .prob(p)
                        .max_capacity(20)
                        .build(rng)
                        .unwrap();

                    let s = rng.random_range(0..n);
                    let t = rng.random_range(0..n);

                    let expected = brute_force_min_cut(&network, s, t);
                    let (flow, cut) = network.max_flow_min_cut(s, t).unwrap();

                    assert_eq!(flow, expected, "n={n} p={p} s={s} t={t}");
                    assert_valid_flow(&network, s, t, flow);
                    if s != t {
                        assert_eq!(cut.capacity(), flow);
                    }
                }
            }
        }
    }

    #[test]
    fn phase_count_is_bounded() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);
        for _ in 0..10 {
            let mut network = Layered::new()
                .layers(6)
                .width(5)
                .prob(0.5)
                .max_capacity(30)
                .build(rng)
                .unwrap();
            let sink = network.number_of_nodes() - 1;
            let n = network.len();

            let mut dinic = network.dinic(0, sink).unwrap();
            let mut last_level = 0;
            while dinic.next().is_some() {
                let level = dinic.levels().level(sink);
                assert!(level > last_level);
                last_level = level;
            }
            assert!(dinic.phases() < n);
        }
    }
}
