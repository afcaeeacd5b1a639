//! Oracles shared by the test modules of this crate.

use crate::prelude::*;

/// Computes the minimum `(s, t)`-cut capacity by enumerating all vertex subsets containing `s`
/// but not `t`. Only feasible for tiny networks; uses the inserted capacities, so the network
/// may already carry flow.
pub(crate) fn brute_force_min_cut(network: &FlowNetwork, s: Node, t: Node) -> Flow {
    if s == t {
        return 0;
    }

    let n = network.number_of_nodes();
    assert!(n <= 20, "Brute force is limited to 20 nodes");

    let edges = network.edges().collect::<Vec<_>>();
    let inside = |mask: u32, u: Node| (mask >> u) & 1 == 1;

    (0u32..1 << n)
        .filter(|&mask| inside(mask, s) && !inside(mask, t))
        .map(|mask| {
            edges
                .iter()
                .filter(|&&(u, v, _)| inside(mask, u) && !inside(mask, v))
                .map(|&(_, _, c)| c)
                .sum::<Flow>()
        })
        .min()
        .unwrap_or(0)
}

/// Asserts that the flow stored in `network` respects all capacities, is conserved at every
/// vertex other than `s` and `t` and has value `value`.
pub(crate) fn assert_valid_flow(network: &FlowNetwork, s: Node, t: Node, value: Flow) {
    for k in 0..network.number_of_edges() {
        let (u, v, capacity) = network.edge(k);
        let flow = network.flow_of(k);
        assert!(
            flow <= capacity,
            "edge {k} ({u},{v}) carries {flow} > {capacity}"
        );
        assert_eq!(network.arc(2 * k).residual, capacity - flow);
    }

    for u in network.vertices() {
        let excess = network.excess_out_of(u);
        if s != t && u == s {
            assert_eq!(excess, value as i128, "flow leaving source {s}");
        } else if s != t && u == t {
            assert_eq!(excess, -(value as i128), "flow entering sink {t}");
        } else {
            assert_eq!(excess, 0, "conservation violated at {u}");
        }
    }

    if s == t {
        assert_eq!(value, 0);
    }
}
