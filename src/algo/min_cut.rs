/*!
# Minimum Cut

Once no augmenting path is left, the vertices reachable from the source in the residual graph
form the source side `S` of a minimum `(s, t)`-cut. Every inserted edge leaving `S` is
saturated, every edge entering `S` carries no flow, and the capacity of the cut equals the
value of the maximum flow.
*/

use super::*;

/// A cut `(S, V \ S)` extracted from the residual graph of a network.
#[derive(Debug, Clone)]
pub struct MinCut {
    source_side: NodeBitSet,
    edges: Vec<NumEdges>,
    capacity: Capacity,
}

impl MinCut {
    /// Extracts the cut induced by all vertices reachable from `source` in the residual graph.
    ///
    /// The cut is minimum iff the flow currently stored in `network` is maximum. If the sink
    /// is still reachable, it lies on the source side.
    /// ** Panics if `source >= n` **
    pub fn from_residual(network: &FlowNetwork, source: Node) -> Self {
        let source_side = network.reachable_from(source);

        let edges: Vec<NumEdges> = (0..network.number_of_edges())
            .filter(|&k| {
                let (u, v, _) = network.edge(k);
                source_side.get_bit(u) && !source_side.get_bit(v)
            })
            .collect();

        let capacity = edges
            .iter()
            .map(|&k| network.original_capacity(k))
            .fold(0, Capacity::saturating_add);

        Self {
            source_side,
            edges,
            capacity,
        }
    }

    /// Returns the source side as a bitset over all vertices.
    pub fn source_side(&self) -> &NodeBitSet {
        &self.source_side
    }

    /// Returns *true* if `u` lies on the source side.
    pub fn contains(&self, u: Node) -> bool {
        self.source_side.get_bit(u)
    }

    /// Returns an iterator over the vertices on the source side in ascending order.
    pub fn source_side_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.source_side.iter_set_bits()
    }

    /// Returns the insertion indices of all edges crossing from the source side to the sink
    /// side.
    pub fn edges(&self) -> &[NumEdges] {
        &self.edges
    }

    /// Sum of the capacities of all crossing edges
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}
