use crate::{
    graph::{EdgeState, FlowNetwork, NodeState},
    types::{Flow, NodeId},
};
use log::debug;

impl FlowNetwork {
    /// One unit of work for node `u`: the first admissible incident edge
    /// receives a push; if the full scan finds none, `u` is relabelled and
    /// requeued.
    ///
    /// A stale worklist entry (a node whose excess is already zero) falls
    /// through the same paths harmlessly: a push of zero, or a relabel that
    /// never matters again.
    pub(crate) fn dispatch(&self, u: NodeId) {
        for &edge_id in &self.adjacency[u] {
            let edge = &self.edges[edge_id];
            let v = edge.other(u);
            let (mut u_state, mut v_state) = self.lock_pair(u, v);
            if u_state.height > v_state.height && edge.residual(u) > 0 {
                self.push(u, v, edge, &mut u_state, &mut v_state);
                return;
            }
        }
        self.relabel(u);
    }

    /// Moves `min(excess, residual)` from `u` to `v` across `edge`. The
    /// caller must hold both node locks for the whole call.
    pub(crate) fn push(
        &self,
        u: NodeId,
        v: NodeId,
        edge: &EdgeState,
        u_state: &mut NodeState,
        v_state: &mut NodeState,
    ) {
        let delta: Flow = u_state.excess.min(edge.residual(u));
        edge.apply(u, delta);
        u_state.excess -= delta;
        v_state.excess += delta;

        assert!(delta >= 0, "negative push of {delta} from {u} to {v}");
        assert!(
            u_state.excess >= 0,
            "node {u} left with negative excess {} after a push of {delta}",
            u_state.excess
        );
        assert!(
            edge.flow_value().abs() <= edge.capacity,
            "edge {u}-{v} flow {} exceeds capacity {}",
            edge.flow_value(),
            edge.capacity
        );

        debug!("push {delta} from {u} to {v}, {} excess left", u_state.excess);

        if u_state.excess > 0 {
            self.worklist.insert(u);
        }
        // v went from zero to `delta` just now; a node that already held
        // excess is on the worklist or being dispatched already.
        if delta > 0 && v_state.excess == delta {
            self.worklist.insert(v);
        }
    }

    /// Lifts `u` one level and requeues it. Runs when the admissibility
    /// scan comes up empty.
    fn relabel(&self, u: NodeId) {
        let mut u_state = self.lock_node(u);
        u_state.height += 1;
        debug!("relabel {u} to height {}", u_state.height);
        drop(u_state);
        self.worklist.insert(u);
    }
}
