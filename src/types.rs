/// Index of a node in the network's node array.
///
/// Stable for the lifetime of the network, and the basis of the total
/// lock-acquisition order: of two node locks, the lower index is always
/// taken first.
pub type NodeId = usize;

/// Index of an edge in the network's edge array.
pub type EdgeId = usize;

/// Flow, capacity and excess quantity.
///
/// Signed: an edge's flow is negative when the net flow runs against the
/// edge's nominal direction.
pub type Flow = i64;

/// Node height (label). Monotonically non-decreasing per node.
pub type Height = usize;
