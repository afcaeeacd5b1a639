/*!
# Errors

All errors raised by the core are structural: they describe malformed input and are never
transient. Edges are validated when they are inserted, terminals when a computation starts,
so a computation that has begun always runs to completion.
*/

use std::fmt::Display;

use thiserror::Error;

use crate::{Node, NumEdges, NumNodes};

/// The two distinguished vertices of an `(s, t)`-flow problem.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// The vertex flow originates at
    Source,
    /// The vertex flow drains into
    Sink,
}

impl Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Terminal::Source => write!(f, "source"),
            Terminal::Sink => write!(f, "sink"),
        }
    }
}

/// Why an edge was rejected by [`FlowNetwork::add_edge`](crate::repr::FlowNetwork::add_edge).
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum InvalidEdgeReason {
    /// An endpoint is not in `0..n`
    #[error("endpoint {node} is outside of 0..{n}")]
    EndpointOutOfRange { node: Node, n: NumNodes },

    /// Capacities must be non-negative
    #[error("negative capacity {0}")]
    NegativeCapacity(i64),

    /// The network was created with an upper bound on the number of edges
    #[error("edge limit of {0} reached")]
    EdgeLimitExceeded(NumEdges),

    /// The total capacity leaving a vertex would not fit into a `Flow`
    #[error("total capacity leaving the tail overflows")]
    CapacityOverflow,
}

/// Errors raised by the flow core.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Raised when inserting an edge; the network is unchanged.
    #[error("invalid edge ({u},{v}): {reason}")]
    InvalidEdge {
        u: Node,
        v: Node,
        reason: InvalidEdgeReason,
    },

    /// Raised before a computation starts if the source or the sink does not exist.
    #[error("invalid {terminal} {node}: network has {n} nodes")]
    InvalidEndpoint {
        terminal: Terminal,
        node: Node,
        n: NumNodes,
    },
}

impl From<FlowError> for std::io::Error {
    fn from(value: FlowError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}
