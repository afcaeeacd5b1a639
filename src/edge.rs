use std::fmt::{Debug, Display};

use crate::Node;

/// Capacity of an arc. Inputs are validated as non-negative before they become a `Capacity`.
pub type Capacity = u64;

/// Amount of flow; never exceeds the sum of capacities leaving the source.
pub type Flow = u64;

/// Index of an arc inside a [`FlowNetwork`](crate::repr::FlowNetwork).
///
/// Arcs are stored in pairs: the forward arc of the `k`-th inserted edge has index `2k`,
/// its reverse arc has index `2k + 1`.
pub type EdgeId = u32;

/// We limit the number of inserted edges to `2^31 - 1` so that both arcs of a pair fit into
/// an [`EdgeId`].
pub type NumEdges = u32;

/// A capacitated, directed input edge `u -> v` with capacity `c`.
///
/// The capacity is signed so that malformed input survives parsing and can be rejected
/// with a proper error when it is inserted into a network.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapacitatedEdge(pub Node, pub Node, pub i64);

impl Display for CapacitatedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl Debug for CapacitatedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl CapacitatedEdge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Returns the endpoints as a tuple
    pub fn endpoints(&self) -> (Node, Node) {
        (self.0, self.1)
    }
}

impl From<(Node, Node, i64)> for CapacitatedEdge {
    fn from(value: (Node, Node, i64)) -> Self {
        CapacitatedEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, i64)> for CapacitatedEdge {
    fn from(value: &(Node, Node, i64)) -> Self {
        CapacitatedEdge(value.0, value.1, value.2)
    }
}

impl From<&CapacitatedEdge> for CapacitatedEdge {
    fn from(value: &CapacitatedEdge) -> Self {
        *value
    }
}

/// A stored arc of the residual network.
///
/// Invariant (over a pair): `residual(e) + residual(reverse(e)) == capacity(e)`
/// where `capacity` is the capacity the forward arc was inserted with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Arc {
    /// Head of the arc
    pub target: Node,
    /// Capacity that may still be pushed along this arc
    pub residual: Capacity,
    /// Index of the paired arc pointing the other way
    pub reverse: EdgeId,
}

impl Arc {
    /// Returns *true* if flow can still be pushed along the arc
    pub fn is_residual(&self) -> bool {
        self.residual > 0
    }

    /// Returns *true* if this is the forward arc of its pair
    pub fn is_forward(&self) -> bool {
        self.reverse & 1 == 1
    }
}
