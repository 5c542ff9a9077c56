use crate::graph::FlowNetwork;
use log::debug;

impl FlowNetwork {
    /// Builds the initial preflow.
    ///
    /// The source is lifted to `node_count` and every incident edge is
    /// saturated away from it: the edge's full capacity is credited to the
    /// source as excess and pushed across, which enqueues each neighbor
    /// whose excess just became positive.
    pub(crate) fn initialize_preflow(&self) {
        let source = self.source();
        {
            let mut source_state = self.lock_node(source);
            source_state.height = self.node_count();
        }
        debug!(
            "saturating {} edge(s) incident to the source",
            self.adjacency[source].len()
        );
        for &edge_id in &self.adjacency[source] {
            let edge = &self.edges[edge_id];
            let neighbor = edge.other(source);
            let (mut source_state, mut neighbor_state) = self.lock_pair(source, neighbor);
            source_state.excess += edge.capacity;
            self.push(source, neighbor, edge, &mut source_state, &mut neighbor_state);
        }
    }
}
