mod dispatch;
mod init;

use crate::{
    config::SolverConfig, graph::FlowNetwork, sync::thread, types::Flow, worklist::Worklist,
};
use log::{debug, error};
#[cfg(feature = "loom")]
use std::sync::Arc;
use thiserror::Error;

/// Error returned by [`FlowNetwork::max_flow`] when the worker pool did not
/// reach quiescence cleanly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolverError {
    /// One or more workers stopped mid-run, typically by panicking on a
    /// tripped invariant assertion. The partial result is discarded rather
    /// than reported.
    #[error("{failed} worker(s) stopped before the pool reached quiescence")]
    WorkerStopped {
        /// Number of workers whose join reported a failure.
        failed: usize,
    },
}

/// Releases the holder's active-worker slot when dropped.
///
/// Created right after a successful pop, so a worker that unwinds
/// mid-dispatch still broadcasts its exit and cannot strand the rest of the
/// pool in a wait nobody will signal.
struct DispatchGuard<'a>(&'a Worklist);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.finish_dispatch();
    }
}

impl FlowNetwork {
    /// Computes the maximum flow from the source to the sink.
    ///
    /// Seeds the initial preflow, runs a fixed pool of
    /// `config.workers` threads until the worklist is empty and no worker
    /// is mid-dispatch, and returns the excess accumulated at the sink.
    /// Calling this again on an already-solved network is a no-op that
    /// returns the same value.
    ///
    /// # Errors
    /// If any worker stopped before the pool reached quiescence; no flow
    /// value is reported in that case.
    #[cfg(not(feature = "loom"))]
    pub fn max_flow(&self, config: &SolverConfig) -> Result<Flow, SolverError> {
        self.initialize_preflow();
        let failed = thread::scope(|scope| {
            let workers: Vec<_> = (0..config.workers.get())
                .map(|_| scope.spawn(|| self.worker_loop()))
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join())
                .filter(Result::is_err)
                .count()
        });
        self.collect_result(failed)
    }

    /// Loom-testable version of `max_flow`. The model checker has no scoped
    /// threads, so every worker carries its own handle to the network.
    #[cfg(feature = "loom")]
    pub fn max_flow(self: Arc<Self>, config: &SolverConfig) -> Result<Flow, SolverError> {
        self.initialize_preflow();
        let workers: Vec<_> = (0..config.workers.get())
            .map(|_| {
                let network = Arc::clone(&self);
                thread::spawn(move || network.worker_loop())
            })
            .collect();
        let failed = workers
            .into_iter()
            .map(|worker| worker.join())
            .filter(Result::is_err)
            .count();
        self.collect_result(failed)
    }

    fn collect_result(&self, failed: usize) -> Result<Flow, SolverError> {
        if failed > 0 {
            error!("{failed} worker(s) stopped mid-run; discarding the partial result");
            return Err(SolverError::WorkerStopped { failed });
        }
        let flow = self.excess(self.sink());
        debug!("pool reached quiescence, sink excess = {flow}");
        Ok(flow)
    }

    /// Pop-dispatch-repeat until the termination test fires: worklist empty
    /// and no worker inside a dispatch.
    fn worker_loop(&self) {
        while let Some(node) = self.worklist.take_or_wait() {
            let _active = DispatchGuard(&self.worklist);
            self.dispatch(node);
        }
    }
}
