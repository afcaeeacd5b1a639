use std::ops::Range;

use crate::{error::FlowError, *};

/// Provides getters pertaining to the node-size of a network
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the network
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` of all vertices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a vertex of the network
    fn has_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the network has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a network
pub trait GraphEdgeOrder {
    /// Returns the number of inserted edges, each of which is stored as a pair of arcs
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the number of stored arcs (forward and reverse)
    fn number_of_arcs(&self) -> usize {
        2 * self.number_of_edges() as usize
    }

    /// Returns *true* if the network has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Neighborhood access for traversals.
///
/// For residual networks, `v` is a neighbor of `u` iff some arc `u -> v` still has positive
/// residual capacity.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// Parallel arcs may yield the same neighbor more than once.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }
}

/// A super trait for creating a network from scratch from a set of capacitated edges and a
/// number of nodes.
pub trait GraphFromEdges: Sized {
    /// Creates a network with `n` nodes and inserts all edges in order.
    ///
    /// # Errors
    /// Returns the first [`FlowError::InvalidEdge`] encountered.
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<CapacitatedEdge>>,
    ) -> Result<Self, FlowError>;
}
