use crate::{
    sync::{AtomicI64, Mutex, MutexGuard, Ordering},
    types::{EdgeId, Flow, Height, NodeId},
    worklist::Worklist,
};
use derive_more::Debug;
use log::debug;
use thiserror::Error;

/// Error returned when an edge list does not describe a valid network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// The network must contain at least one node.
    #[error("network has no nodes")]
    Empty,
    /// An edge references a node outside `0..node_count`.
    #[error("edge {edge} endpoint {endpoint} is out of range for {node_count} node(s)")]
    EndpointOutOfRange {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The out-of-range endpoint.
        endpoint: NodeId,
        /// Number of nodes in the network.
        node_count: usize,
    },
    /// Capacities are non-negative by definition.
    #[error("edge {edge} has negative capacity {capacity}")]
    NegativeCapacity {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The rejected capacity.
        capacity: Flow,
    },
}

/// Mutable per-node state.
///
/// A plain value type with no embedded synchronization primitive; the
/// network's parallel lock array guards it, one lock per index.
#[derive(Debug, Default)]
pub(crate) struct NodeState {
    /// Height label. Only grows.
    pub(crate) height: Height,
    /// Excess preflow resident at the node. Never negative.
    pub(crate) excess: Flow,
}

/// One edge record, shared by both endpoints' adjacency lists.
#[derive(Debug)]
pub(crate) struct EdgeState {
    /// First endpoint; flow is positive when running `u -> v`.
    pub(crate) u: NodeId,
    /// Second endpoint.
    pub(crate) v: NodeId,
    pub(crate) capacity: Flow,
    /// Signed flow. Read and written only while both endpoint locks are
    /// held: the atomic makes the sharing between the two adjacency lists
    /// sound, the lock pair is the actual exclusion discipline.
    #[debug(skip)]
    flow: AtomicI64,
}

impl EdgeState {
    fn new(u: NodeId, v: NodeId, capacity: Flow) -> Self {
        Self {
            u,
            v,
            capacity,
            flow: AtomicI64::new(0),
        }
    }

    /// The endpoint opposite to `node`.
    pub(crate) fn other(&self, node: NodeId) -> NodeId {
        if node == self.u {
            self.v
        } else {
            self.u
        }
    }

    /// Remaining pushable amount away from `from`: forward pushes are
    /// bounded by `capacity - flow`, reverse pushes by `capacity + flow`.
    pub(crate) fn residual(&self, from: NodeId) -> Flow {
        let flow = self.flow.load(Ordering::Relaxed);
        if from == self.u {
            self.capacity - flow
        } else {
            self.capacity + flow
        }
    }

    /// Moves `delta` units of flow away from `from`.
    pub(crate) fn apply(&self, from: NodeId, delta: Flow) {
        let flow = self.flow.load(Ordering::Relaxed);
        let flow = if from == self.u {
            flow + delta
        } else {
            flow - delta
        };
        self.flow.store(flow, Ordering::Relaxed);
    }

    pub(crate) fn flow_value(&self) -> Flow {
        self.flow.load(Ordering::Relaxed)
    }
}

/// A capacitated network together with the shared solver state: the edge
/// array, the per-node lock array and the excess worklist.
///
/// Topology is immutable after construction. Adjacency lists hold edge
/// indices, so each edge record is reachable from both of its endpoints
/// without duplication. The source is node `0`, the sink node
/// `node_count - 1`.
#[must_use]
#[derive(Debug)]
pub struct FlowNetwork {
    node_count: usize,
    source: NodeId,
    sink: NodeId,
    #[debug(skip)]
    pub(crate) nodes: Vec<Mutex<NodeState>>,
    #[debug(skip)]
    pub(crate) edges: Vec<EdgeState>,
    #[debug(skip)]
    pub(crate) adjacency: Vec<Vec<EdgeId>>,
    #[debug(skip)]
    pub(crate) worklist: Worklist,
}

impl FlowNetwork {
    /// Builds a network from `(u, v, capacity)` records.
    ///
    /// Endpoints must lie in `0..node_count` and capacities must be
    /// non-negative. Self-loops are dropped: they can never carry useful
    /// flow, and the two-lock discipline cannot lock one node twice.
    ///
    /// # Errors
    /// If the edge list is structurally invalid.
    pub fn from_edges(
        node_count: usize,
        edges: &[(NodeId, NodeId, Flow)],
    ) -> Result<Self, GraphError> {
        if node_count == 0 {
            return Err(GraphError::Empty);
        }
        let source = 0;
        let sink = node_count - 1;

        let mut edge_states = Vec::with_capacity(edges.len());
        let mut adjacency = vec![Vec::new(); node_count];
        for (index, &(u, v, capacity)) in edges.iter().enumerate() {
            for endpoint in [u, v] {
                if endpoint >= node_count {
                    return Err(GraphError::EndpointOutOfRange {
                        edge: index,
                        endpoint,
                        node_count,
                    });
                }
            }
            if capacity < 0 {
                return Err(GraphError::NegativeCapacity {
                    edge: index,
                    capacity,
                });
            }
            if u == v {
                debug!("dropping self-loop edge {index} at node {u}");
                continue;
            }
            let edge_id = edge_states.len();
            adjacency[u].push(edge_id);
            adjacency[v].push(edge_id);
            edge_states.push(EdgeState::new(u, v, capacity));
        }

        let nodes = (0..node_count)
            .map(|_| Mutex::new(NodeState::default()))
            .collect();

        Ok(Self {
            node_count,
            source,
            sink,
            nodes,
            edges: edge_states,
            adjacency,
            worklist: Worklist::new(source, sink),
        })
    }

    /// Number of nodes in the network.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges kept at build time (self-loops excluded).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The source node, fixed as node `0`.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The sink node, fixed as node `node_count - 1`.
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// Net signed flow on `edge`, positive from the edge's first endpoint
    /// toward its second. Intended for quiescent (post-run) inspection.
    pub fn flow(&self, edge: EdgeId) -> Flow {
        self.edges[edge].flow_value()
    }

    /// Capacity of `edge`.
    pub fn capacity(&self, edge: EdgeId) -> Flow {
        self.edges[edge].capacity
    }

    /// The `(u, v)` endpoint pair of `edge`.
    pub fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        let edge = &self.edges[edge];
        (edge.u, edge.v)
    }

    /// Excess preflow currently resident at `node`.
    pub fn excess(&self, node: NodeId) -> Flow {
        self.lock_node(node).excess
    }

    /// Height label of `node`.
    pub fn height(&self, node: NodeId) -> Height {
        self.lock_node(node).height
    }

    pub(crate) fn lock_node(&self, node: NodeId) -> MutexGuard<'_, NodeState> {
        self.nodes[node].lock().expect("node mutex poisoned")
    }

    /// Locks two distinct nodes, lower index first, and returns the guards
    /// in argument order. Every two-lock acquisition in the crate goes
    /// through here; the index order is what rules out deadlock between
    /// concurrent dispatches.
    pub(crate) fn lock_pair(
        &self,
        u: NodeId,
        v: NodeId,
    ) -> (MutexGuard<'_, NodeState>, MutexGuard<'_, NodeState>) {
        debug_assert_ne!(u, v, "two-lock acquisition requires distinct nodes");
        if u < v {
            let u_guard = self.lock_node(u);
            let v_guard = self.lock_node(v);
            (u_guard, v_guard)
        } else {
            let v_guard = self.lock_node(v);
            let u_guard = self.lock_node(u);
            (u_guard, v_guard)
        }
    }
}
