use core::num::NonZeroUsize;

/// Default number of worker threads in the pool.
///
/// A fixed tunable, deliberately not derived from the graph size: the pool
/// is bounded by contention on the worklist long before it is bounded by
/// the number of excess nodes.
pub const DEFAULT_WORKERS: usize = 10;

/// Runtime configuration of the solver's worker pool.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of worker threads to spawn. At least one worker is required
    /// for the pool to drain the worklist at all.
    pub workers: NonZeroUsize,
}

impl SolverConfig {
    /// Configuration with an explicit worker count.
    pub fn with_workers(workers: NonZeroUsize) -> Self {
        Self { workers }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: NonZeroUsize::new(DEFAULT_WORKERS).expect("DEFAULT_WORKERS is non-zero"),
        }
    }
}
