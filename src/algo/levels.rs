/*!
# Level Builder

Breadth-first layering of the residual graph. After [`LevelGraph::build`], `level(s) = 0` and
every vertex reachable from `s` via arcs of positive residual capacity carries its BFS
distance from `s`; all other vertices are [`UNREACHED`].

An arc `u -> v` is *admissible* iff it has positive residual capacity and
`level(v) == level(u) + 1`. Admissible arcs form the level graph in which the blocking-flow
search operates.
*/

use super::*;
use std::collections::VecDeque;

/// Distance labels of one phase of Dinic's algorithm.
///
/// The buffers are owned by a single computation and reused between phases; every call to
/// [`LevelGraph::build`] first resets all labels.
#[derive(Debug, Clone)]
pub struct LevelGraph {
    levels: Vec<Level>,
    queue: VecDeque<Node>,
}

impl LevelGraph {
    /// Creates labels for `n` vertices, all [`UNREACHED`].
    pub fn new(n: NumNodes) -> Self {
        Self {
            levels: vec![UNREACHED; n as usize],
            queue: VecDeque::with_capacity(n as usize),
        }
    }

    /// Relabels all vertices by their BFS distance from `source` in the residual graph and
    /// returns *true* iff `sink` received a label.
    ///
    /// Runs in `O(n + m)`.
    /// ** Panics if `source >= n` or `sink >= n` **
    pub fn build(&mut self, network: &FlowNetwork, source: Node, sink: Node) -> bool {
        debug_assert_eq!(self.levels.len(), network.len());

        self.levels.fill(UNREACHED);
        self.queue.clear();

        self.levels[source as usize] = 0;
        self.queue.push_back(source);

        while let Some(u) = self.queue.pop_front() {
            let next_level = self.levels[u as usize] + 1;
            for v in network.neighbors_of(u) {
                if self.levels[v as usize] == UNREACHED {
                    self.levels[v as usize] = next_level;
                    self.queue.push_back(v);
                }
            }
        }

        self.is_reached(sink)
    }

    /// Returns the label of `u`, which is [`UNREACHED`] if `u` was not reached.
    pub fn level(&self, u: Node) -> Level {
        self.levels[u as usize]
    }

    /// Returns *true* if `u` was reached by the last build.
    pub fn is_reached(&self, u: Node) -> bool {
        self.levels[u as usize] != UNREACHED
    }

    /// Returns *true* if `arc` (leaving `u`) belongs to the level graph.
    pub fn is_admissible(&self, u: Node, arc: &Arc) -> bool {
        arc.is_residual()
            && self.levels[u as usize] != UNREACHED
            && self.levels[arc.target as usize] == self.levels[u as usize] + 1
    }

    /// Returns all labels indexed by vertex.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Returns the number of vertices carrying a label.
    pub fn number_of_reached(&self) -> NumNodes {
        self.levels.iter().filter(|&&l| l != UNREACHED).count() as NumNodes
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
    fn bfs_distances() {
        let network = worked_example();
        let mut levels = LevelGraph::new(4);

        assert!(levels.build(&network, 0, 3));
        assert_eq!(levels.levels(), &[0, 1, 1, 2]);
        assert_eq!(levels.number_of_reached(), 4);

        // from the middle only forward arcs have residual capacity
        assert!(levels.build(&network, 1, 3));
        assert_eq!(levels.levels(), &[UNREACHED, 0, 1, 1]);
        assert!(!levels.is_reached(0));
    }

    #[test]
    fn resets_labels() {
        let mut network = worked_example();
        let mut levels = LevelGraph::new(4);
        assert!(levels.build(&network, 0, 3));

        // saturate everything leaving the source
        network.push(0, 3);
        network.push(4, 2);

        assert!(!levels.build(&network, 0, 3));
        assert_eq!(levels.levels(), &[0, UNREACHED, UNREACHED, UNREACHED]);
        assert_eq!(levels.level(3), UNREACHED);
    }

    #[test]
    fn source_is_sink() {
        let network = worked_example();
        let mut levels = LevelGraph::new(4);
        assert!(levels.build(&network, 3, 3));
        assert_eq!(levels.level(3), 0);
        assert_eq!(levels.number_of_reached(), 1);
    }

    #[test]
    fn isolated_source() {
        let network = FlowNetwork::try_from_edges(3, [(1, 2, 4), (2, 0, 0)]).unwrap();
        let mut levels = LevelGraph::new(3);
        assert!(!levels.build(&network, 0, 2));
        assert_eq!(levels.number_of_reached(), 1);
        assert_eq!(levels.level(0), 0);
    }

    #[test]
    fn admissible_arcs() {
        let network = worked_example();
        let mut levels = LevelGraph::new(4);
        levels.build(&network, 0, 3);

        let admissible = |u: Node| {
            network
                .arcs_of(u)
                .filter(|(_, arc)| levels.is_admissible(u, arc))
                .map(|(e, _)| e)
                .collect::<Vec<_>>()
        };

        assert_eq!(admissible(0), vec![0, 4]);
        // 1 -> 2 stays within a level
        assert_eq!(admissible(1), vec![8]);
        assert_eq!(admissible(2), vec![6]);
        assert!(admissible(3).is_empty());
    }
}
