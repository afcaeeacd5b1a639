/*!
# Flow Network (Edge Store)

[`FlowNetwork`] is the residual representation all flow algorithms of this crate operate on.

Every inserted edge `u -> v` with capacity `c` is stored as a pair of [`Arc`]s:
- the forward arc `u -> v` at index `2k` with residual capacity `c`,
- the reverse arc `v -> u` at index `2k + 1` with residual capacity `0`,

where `k` is the insertion index of the edge. Each vertex owns a list of the indices of
arcs leaving it, in insertion order. Pushing `f` units along an arc decreases its residual
capacity and increases the residual capacity of its partner by the same amount, so
`residual(e) + residual(reverse(e))` always equals the inserted capacity. As a consequence
the flow on the `k`-th edge is the residual capacity of its reverse arc; no separate flow
array is needed.

The structure is write-once per edge: there is no removal. Parallel edges are independent
pairs.
*/

use super::*;
use crate::error::{FlowError, InvalidEdgeReason};

/// Upper bound on the number of edges so that both arcs of every pair are addressable by
/// an [`EdgeId`].
pub const MAX_EDGES: NumEdges = (EdgeId::MAX >> 1) - 1;

/// [`FlowNetwork::with_edge_limit`] never reserves storage for more edges than this.
pub const MAX_RESERVED_EDGES: NumEdges = 1 << 20;

/// A directed network with residual capacities.
///
/// # Examples
/// ```
/// use capflow::{prelude::*, algo::*};
///
/// let mut network = FlowNetwork::new(4);
/// for (u, v, c) in [(0, 1, 3), (1, 2, 2), (0, 2, 2), (2, 3, 3), (1, 3, 2)] {
///     network.add_edge(u, v, c).unwrap();
/// }
///
/// assert_eq!(network.max_flow(0, 3).unwrap(), 5);
/// assert_eq!(network.flow_of(4), 2); // (1, 3) is saturated
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNetwork {
    arcs: Vec<Arc>,
    adjacency: Vec<Vec<EdgeId>>,
    /// Sum of capacities of all edges inserted with this vertex as tail
    out_capacity: Vec<Capacity>,
    edge_limit: NumEdges,
}

impl FlowNetwork {
    /// Creates a network with `n` isolated vertices. Arc storage grows with the insertions.
    pub fn new(n: NumNodes) -> Self {
        Self {
            arcs: Vec::new(),
            adjacency: vec![Vec::new(); n as usize],
            out_capacity: vec![0; n as usize],
            edge_limit: MAX_EDGES,
        }
    }

    /// Creates a network with `n` isolated vertices that accepts at most `limit` edges.
    /// Further insertions fail with [`InvalidEdgeReason::EdgeLimitExceeded`].
    ///
    /// Storage for up to [`MAX_RESERVED_EDGES`] edges is reserved upfront.
    pub fn with_edge_limit(n: NumNodes, limit: NumEdges) -> Self {
        let limit = limit.min(MAX_EDGES);
        let mut network = Self::new(n);
        network.edge_limit = limit;
        network
            .arcs
            .reserve_exact(2 * limit.min(MAX_RESERVED_EDGES) as usize);
        network
    }

    /// Returns the maximum number of edges this network accepts.
    pub fn edge_limit(&self) -> NumEdges {
        self.edge_limit
    }

    /// Inserts the edge `u -> v` with the given capacity and returns its insertion index.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEdge`] and leaves the network unchanged if
    /// - `u` or `v` is not in `0..n`,
    /// - `capacity` is negative,
    /// - the edge limit is reached,
    /// - the capacities leaving `u` would sum up to more than [`Capacity::MAX`].
    pub fn add_edge(&mut self, u: Node, v: Node, capacity: i64) -> Result<NumEdges, FlowError> {
        let invalid = |reason| FlowError::InvalidEdge { u, v, reason };

        let n = self.number_of_nodes();
        for node in [u, v] {
            if node >= n {
                return Err(invalid(InvalidEdgeReason::EndpointOutOfRange { node, n }));
            }
        }

        let capacity = Capacity::try_from(capacity)
            .map_err(|_| invalid(InvalidEdgeReason::NegativeCapacity(capacity)))?;

        let k = self.number_of_edges();
        if k >= self.edge_limit {
            return Err(invalid(InvalidEdgeReason::EdgeLimitExceeded(self.edge_limit)));
        }

        let out_capacity = self.out_capacity[u as usize]
            .checked_add(capacity)
            .ok_or(invalid(InvalidEdgeReason::CapacityOverflow))?;
        self.out_capacity[u as usize] = out_capacity;

        let forward = 2 * k;
        let backward = forward + 1;

        self.arcs.push(Arc {
            target: v,
            residual: capacity,
            reverse: backward,
        });
        self.arcs.push(Arc {
            target: u,
            residual: 0,
            reverse: forward,
        });

        self.adjacency[u as usize].push(forward);
        self.adjacency[v as usize].push(backward);

        Ok(k)
    }

    /// Inserts all edges in order, stopping at the first invalid one.
    ///
    /// # Errors
    /// See [`FlowNetwork::add_edge`]. Edges inserted before the failing one remain.
    pub fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<CapacitatedEdge>>,
    ) -> Result<(), FlowError> {
        for edge in edges {
            let CapacitatedEdge(u, v, c) = edge.into();
            self.add_edge(u, v, c)?;
        }
        Ok(())
    }

    /// Returns the arc with index `e`.
    /// ** Panics if `e` is not a valid arc index **
    pub fn arc(&self, e: EdgeId) -> &Arc {
        &self.arcs[e as usize]
    }

    /// Returns the tail of arc `e`, i.e. the head of its partner.
    /// ** Panics if `e` is not a valid arc index **
    pub fn tail_of(&self, e: EdgeId) -> Node {
        self.arcs[self.arcs[e as usize].reverse as usize].target
    }

    /// Returns the indices of all arcs leaving `u` (forward and reverse) in insertion order.
    /// ** Panics if `u >= n` **
    pub fn adjacency_of(&self, u: Node) -> &[EdgeId] {
        &self.adjacency[u as usize]
    }

    /// Returns an iterator over all arcs leaving `u` together with their indices.
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> impl Iterator<Item = (EdgeId, &Arc)> + '_ {
        self.adjacency[u as usize]
            .iter()
            .map(|&e| (e, &self.arcs[e as usize]))
    }

    /// Pushes `amount` units of flow along arc `e`.
    ///
    /// This is the only place residual capacities change during a computation.
    pub(crate) fn push(&mut self, e: EdgeId, amount: Flow) {
        let arc = &mut self.arcs[e as usize];
        debug_assert!(arc.residual >= amount);
        arc.residual -= amount;
        let reverse = arc.reverse;
        self.arcs[reverse as usize].residual += amount;
    }

    /// Returns `(u, v, capacity)` of the `k`-th inserted edge.
    /// ** Panics if `k >= m` **
    pub fn edge(&self, k: NumEdges) -> (Node, Node, Capacity) {
        let forward = 2 * k;
        (
            self.tail_of(forward),
            self.arcs[forward as usize].target,
            self.original_capacity(k),
        )
    }

    /// Returns the capacity the `k`-th edge was inserted with.
    /// ** Panics if `k >= m` **
    pub fn original_capacity(&self, k: NumEdges) -> Capacity {
        let forward = 2 * k as usize;
        self.arcs[forward].residual + self.arcs[forward + 1].residual
    }

    /// Returns the flow currently routed along the `k`-th edge.
    /// ** Panics if `k >= m` **
    pub fn flow_of(&self, k: NumEdges) -> Flow {
        self.arcs[2 * k as usize + 1].residual
    }

    /// Returns an iterator over `(u, v, flow)` for all inserted edges in insertion order.
    pub fn edge_flows(&self) -> impl Iterator<Item = (Node, Node, Flow)> + '_ {
        (0..self.number_of_edges()).map(|k| {
            let (u, v, _) = self.edge(k);
            (u, v, self.flow_of(k))
        })
    }

    /// Returns an iterator over `(u, v, capacity)` for all inserted edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node, Capacity)> + '_ {
        (0..self.number_of_edges()).map(|k| self.edge(k))
    }

    /// Returns the sum of capacities of all edges inserted with tail `u`.
    /// ** Panics if `u >= n` **
    pub fn out_capacity(&self, u: Node) -> Capacity {
        self.out_capacity[u as usize]
    }

    /// Returns the net amount of flow leaving `u`: outgoing minus incoming flow on
    /// inserted edges.
    /// ** Panics if `u >= n` **
    pub fn excess_out_of(&self, u: Node) -> i128 {
        self.arcs_of(u)
            .map(|(e, _)| {
                let flow = self.flow_of(e >> 1) as i128;
                if e & 1 == 0 { flow } else { -flow }
            })
            .sum()
    }

    /// Returns *true* if no edge carries flow.
    pub fn is_flow_free(&self) -> bool {
        self.arcs.iter().skip(1).step_by(2).all(|arc| arc.residual == 0)
    }

    /// Cancels all flow, restoring every residual capacity to its inserted value.
    /// Afterwards the network can be solved again as if it was freshly built.
    pub fn reset_flow(&mut self) {
        for pair in self.arcs.chunks_exact_mut(2) {
            pair[0].residual += pair[1].residual;
            pair[1].residual = 0;
        }
    }

    /// Checks that `source` and `sink` are vertices of this network.
    ///
    /// # Errors
    /// Returns [`FlowError::InvalidEndpoint`] naming the first offending terminal.
    pub fn check_terminals(&self, source: Node, sink: Node) -> Result<(), FlowError> {
        let n = self.number_of_nodes();
        for (terminal, node) in [(Terminal::Source, source), (Terminal::Sink, sink)] {
            if node >= n {
                return Err(FlowError::InvalidEndpoint { terminal, node, n });
            }
        }
        Ok(())
    }
}

impl GraphNodeOrder for FlowNetwork {
    fn number_of_nodes(&self) -> NumNodes {
        self.adjacency.len() as NumNodes
    }
}

impl GraphEdgeOrder for FlowNetwork {
    fn number_of_edges(&self) -> NumEdges {
        (self.arcs.len() / 2) as NumEdges
    }
}

impl AdjacencyList for FlowNetwork {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.arcs_of(u)
            .filter(|(_, arc)| arc.is_residual())
            .map(|(_, arc)| arc.target)
    }
}

impl GraphFromEdges for FlowNetwork {
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<CapacitatedEdge>>,
    ) -> Result<Self, FlowError> {
        let mut network = Self::new(n);
        network.add_edges(edges)?;
        Ok(network)
    }
}
