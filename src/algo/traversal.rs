/*!
Breadth-first traversal over any [`AdjacencyList`].

On a [`FlowNetwork`] the adjacency is the residual graph: a traversal only follows arcs with
positive residual capacity. The iterator here is used to extract the source side of a
minimum cut and to answer reachability queries; the level builder of Dinic's algorithm has
its own specialised BFS that reuses its buffers between phases.
*/

use super::*;
use std::collections::VecDeque;

/// Breadth-first traversal iterator. Yields every node reachable from the start node exactly
/// once, starting with the start node itself.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
    stop_at: Option<Node>,
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        if self.stop_at == Some(u) {
            self.queue.clear();
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.get_bit(v) {
                    self.visited.set_bit(v);
                    self.queue.push_back(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.queue.len()),
        )
    }
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
            stop_at: None,
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Builder-style version of [`Self::set_stop_at`].
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Checks if a given node `u` has already been discovered.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Runs the traversal to completion and returns the set of all discovered nodes.
    pub fn into_visited(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.visited
    }
}

/// Provides traversal methods directly on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start` in BFS order.
    ///
    /// # Examples
    /// ```
    /// use capflow::{prelude::*, algo::*};
    ///
    /// let network = FlowNetwork::try_from_edges(3, [(0, 1, 1), (1, 2, 0)]).unwrap();
    ///
    /// // (1, 2) has no residual capacity
    /// let order: Vec<_> = network.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns *true* iff there is a directed path from `u` to `v`.
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        u == v || self.bfs(u).stop_at(v).any(|w| w == v)
    }

    /// Returns the set of nodes reachable from `start` (including `start`).
    fn reachable_from(&self, start: Node) -> NodeBitSet {
        self.bfs(start).into_visited()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn network() -> FlowNetwork {
        FlowNetwork::try_from_edges(
            6,
            [
                (0, 1, 1),
                (0, 2, 1),
                (1, 3, 1),
                (2, 3, 0),
                (3, 4, 1),
                (5, 0, 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn bfs_order() {
        let network = network();
        assert_eq!(network.bfs(0).collect_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(network.bfs(2).collect_vec(), vec![2]);
        assert_eq!(network.bfs(5).collect_vec(), vec![5, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn stopper() {
        let network = network();
        assert_eq!(network.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
        assert_eq!(network.bfs(0).stop_at(0).collect_vec(), vec![0]);
    }

    #[test]
    fn reachability() {
        let network = network();
        assert!(network.is_reachable(0, 4));
        assert!(network.is_reachable(2, 2));
        assert!(!network.is_reachable(2, 3));
        assert!(!network.is_reachable(4, 0));

        let reachable = network.reachable_from(1);
        assert_eq!(
            network.vertices().filter(|&u| reachable.get_bit(u)).collect_vec(),
            vec![1, 3, 4]
        );
    }

    #[test]
    fn visited_nodes() {
        let network = network();
        let mut bfs = network.bfs(0);
        assert!(bfs.did_visit_node(0));
        assert!(!bfs.did_visit_node(1));
        bfs.next();
        assert!(bfs.did_visit_node(1));
        assert!(bfs.did_visit_node(2));
        assert!(!bfs.did_visit_node(5));
    }
}
