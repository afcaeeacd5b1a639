/*!
# Blocking-Flow Search

Depth-first search for augmenting paths inside the level graph of a [`LevelGraph`].

Every vertex owns an [`ArcCursors`] entry pointing into its adjacency list at the first arc
that is not yet known to be useless. An arc is skipped for the rest of the phase once it is
not admissible or once everything behind it turned out to be blocked. Since levels do not
change within a phase, such an arc cannot become useful again before the next relabeling,
so cursors only move forward. This bounds the total work of one phase by `O(n * m)`.

The search keeps the current path on an explicit stack instead of recursing, so the depth of
an augmenting path is only limited by memory.
*/

use super::*;
use log::trace;

/// Per-vertex position of the next arc to try.
#[derive(Debug, Clone)]
pub struct ArcCursors {
    cursors: Vec<usize>,
}

impl ArcCursors {
    /// Creates cursors for `n` vertices, all at the head of their adjacency list.
    pub fn new(n: NumNodes) -> Self {
        Self {
            cursors: vec![0; n as usize],
        }
    }

    /// Moves every cursor back to the head of its adjacency list.
    pub fn reset(&mut self) {
        self.cursors.fill(0);
    }

    /// Returns the index into the adjacency list of `u` the cursor points at.
    pub fn position(&self, u: Node) -> usize {
        self.cursors[u as usize]
    }

    /// Moves the cursor of `u` one arc further.
    pub fn advance(&mut self, u: Node) {
        self.cursors[u as usize] += 1;
    }

    /// Returns *true* if the cursor of `u` ran past its last arc, i.e. `u` is blocked for
    /// the current phase.
    pub fn is_exhausted(&self, network: &FlowNetwork, u: Node) -> bool {
        self.cursors[u as usize] >= network.adjacency_of(u).len()
    }
}

/// State of the blocking-flow search of one phase: arc cursors and the path stack.
#[derive(Debug, Clone)]
pub struct BlockingFlow {
    cursors: ArcCursors,
    path: Vec<EdgeId>,
}

impl BlockingFlow {
    /// Creates the search state for a network with `n` vertices.
    pub fn new(n: NumNodes) -> Self {
        Self {
            cursors: ArcCursors::new(n),
            path: Vec::new(),
        }
    }

    /// Prepares a new phase by resetting all arc cursors.
    pub fn reset(&mut self) {
        self.cursors.reset();
        self.path.clear();
    }

    /// Returns the arc cursors.
    pub fn cursors(&self) -> &ArcCursors {
        &self.cursors
    }

    /// Finds one augmenting path from `source` to `sink` in the level graph and pushes its
    /// bottleneck capacity, capped by `limit`. Returns the amount pushed; `0` means that no
    /// further path exists in this phase.
    ///
    /// If `source == sink`, `limit` is returned without touching the network.
    /// ** Panics if `source >= n` or `sink >= n` **
    pub fn augment(
        &mut self,
        network: &mut FlowNetwork,
        levels: &LevelGraph,
        source: Node,
        sink: Node,
        limit: Flow,
    ) -> Flow {
        if source == sink {
            return limit;
        }
        if limit == 0 {
            return 0;
        }

        self.path.clear();
        let mut u = source;

        loop {
            if u == sink {
                let pushed = self
                    .path
                    .iter()
                    .map(|&e| network.arc(e).residual)
                    .fold(limit, Flow::min);

                for &e in &self.path {
                    network.push(e, pushed);
                }

                trace!("Pushed {pushed} along a path of length {}", self.path.len());
                return pushed;
            }

            match self.next_admissible(network, levels, u) {
                Some(e) => {
                    self.path.push(e);
                    u = network.arc(e).target;
                }
                None => {
                    // u is blocked; retreat and never try the arc leading here again
                    let Some(e) = self.path.pop() else {
                        return 0;
                    };
                    u = network.tail_of(e);
                    self.cursors.advance(u);
                }
            }
        }
    }

    /// Advances the cursor of `u` to the next admissible arc and returns it without moving
    /// past it.
    fn next_admissible(
        &mut self,
        network: &FlowNetwork,
        levels: &LevelGraph,
        u: Node,
    ) -> Option<EdgeId> {
        let adjacency = network.adjacency_of(u);
        while let Some(&e) = adjacency.get(self.cursors.position(u)) {
            if levels.is_admissible(u, network.arc(e)) {
                return Some(e);
            }
            self.cursors.advance(u);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_example() -> FlowNetwork {
        FlowNetwork::try_from_edges(
            4,
            [(0, 1, 3), (1, 2, 2), (0, 2, 2), (2, 3, 3), (1, 3, 2)],
        )
        .unwrap()
    }

    #[test]
    fn augments_shortest_paths() {
        let mut network = worked_example();
        let mut levels = LevelGraph::new(4);
        let mut search = BlockingFlow::new(4);

        assert!(levels.build(&network, 0, 3));
        search.reset();

        // 0 -> 1 -> 3
        assert_eq!(search.augment(&mut network, &levels, 0, 3, Flow::MAX), 2);
        assert_eq!(network.flow_of(0), 2);
        assert_eq!(network.flow_of(4), 2);

        // 0 -> 2 -> 3
        assert_eq!(search.augment(&mut network, &levels, 0, 3, Flow::MAX), 2);
        assert_eq!(network.flow_of(2), 2);
        assert_eq!(network.flow_of(3), 2);

        // level graph is blocked: 0 -> 1 -> 3 is saturated and 1 -> 2 is not admissible
        assert_eq!(search.augment(&mut network, &levels, 0, 3, Flow::MAX), 0);
        assert!(search.cursors().is_exhausted(&network, 0));
        assert!(search.cursors().is_exhausted(&network, 1));

        // the next phase uses 0 -> 1 -> 2 -> 3
        assert!(levels.build(&network, 0, 3));
        assert_eq!(levels.level(3), 3);
        search.reset();
        assert_eq!(search.augment(&mut network, &levels, 0, 3, Flow::MAX), 1);
        assert_eq!(search.augment(&mut network, &levels, 0, 3, Flow::MAX), 0);

        assert!(!levels.build(&network, 0, 3));
    }

    #[test]
    fn respects_limit() {
        let mut network = worked_example();
        let mut levels = LevelGraph::new(4);
        let mut search = BlockingFlow::new(4);
        levels.build(&network, 0, 3);
        search.reset();

        assert_eq!(search.augment(&mut network, &levels, 0, 3, 1), 1);
        assert_eq!(network.flow_of(0), 1);
        assert_eq!(search.augment(&mut network, &levels, 0, 3, 0), 0);
        assert!(network.flow_of(0) == 1 && network.flow_of(2) == 0);
    }

    #[test]
    fn trivial_paths() {
        let mut network = worked_example();
        let mut levels = LevelGraph::new(4);
        let mut search = BlockingFlow::new(4);
        levels.build(&network, 2, 2);
        assert_eq!(search.augment(&mut network, &levels, 2, 2, 17), 17);
        assert!(network.is_flow_free());
    }

    #[test]
    fn cursors_never_rewind_within_phase() {
        // two dead ends in front of the only useful arc
        let mut network = FlowNetwork::try_from_edges(
            5,
            [(0, 1, 1), (0, 2, 1), (0, 3, 5), (3, 4, 5), (1, 3, 0)],
        )
        .unwrap();
        let mut levels = LevelGraph::new(5);
        let mut search = BlockingFlow::new(5);

        assert!(levels.build(&network, 0, 4));
        search.reset();

        assert_eq!(search.augment(&mut network, &levels, 0, 4, Flow::MAX), 5);
        // both dead ends were skipped permanently
        assert_eq!(search.cursors().position(0), 2);

        assert_eq!(search.augment(&mut network, &levels, 0, 4, Flow::MAX), 0);
        assert!(search.cursors().is_exhausted(&network, 0));

        search.reset();
        assert_eq!(search.cursors().position(0), 0);
    }

    #[test]
    fn long_path_does_not_recurse() {
        let n: NumNodes = 200_000;
        let mut network = FlowNetwork::try_from_edges(n, crate::gens::path(n, 3)).unwrap();
        let mut levels = LevelGraph::new(n);
        let mut search = BlockingFlow::new(n);

        assert!(levels.build(&network, 0, n - 1));
        search.reset();
        assert_eq!(search.augment(&mut network, &levels, 0, n - 1, Flow::MAX), 3);
        assert_eq!(search.augment(&mut network, &levels, 0, n - 1, Flow::MAX), 0);
    }
}
