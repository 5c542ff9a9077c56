use crate::{
    sync::{Condvar, Mutex},
    types::NodeId,
};
use std::collections::VecDeque;

/// Shared queue of nodes holding positive excess, plus the active-worker
/// accounting that the distributed termination test is built on.
///
/// One lock protects both the queue and the counter; pushes and relabels
/// themselves never run under it.
pub(crate) struct Worklist {
    source: NodeId,
    sink: NodeId,
    state: Mutex<State>,
    work_available: Condvar,
}

#[derive(Default)]
struct State {
    /// Pending excess nodes, newest first. Duplicate entries are tolerated;
    /// dispatching a stale entry is a no-op.
    queue: VecDeque<NodeId>,
    /// Workers currently inside a dispatch call. Incremented only after a
    /// successful pop, decremented only once the dispatch has returned.
    active_workers: usize,
}

impl Worklist {
    pub(crate) fn new(source: NodeId, sink: NodeId) -> Self {
        Self {
            source,
            sink,
            state: Mutex::new(State::default()),
            work_available: Condvar::new(),
        }
    }

    /// Queues `node` at the head and wakes one waiting worker. The source
    /// and the sink never enter the worklist.
    pub(crate) fn insert(&self, node: NodeId) {
        if node == self.source || node == self.sink {
            return;
        }
        let mut state = self.state.lock().expect("worklist mutex poisoned");
        state.queue.push_front(node);
        drop(state);
        self.work_available.notify_one();
    }

    /// Pops the next excess node, blocking while the queue is empty and
    /// other workers are still dispatching.
    ///
    /// Returns `None` once the queue is empty and `active_workers` is zero.
    /// That pair of facts is stable: producing new work requires finishing
    /// a dispatch first, and finishing a dispatch broadcasts before this
    /// test can observe the counter again.
    pub(crate) fn take_or_wait(&self) -> Option<NodeId> {
        let mut state = self.state.lock().expect("worklist mutex poisoned");
        loop {
            if let Some(node) = state.queue.pop_front() {
                state.active_workers += 1;
                return Some(node);
            }
            if state.active_workers == 0 {
                return None;
            }
            state = self
                .work_available
                .wait(state)
                .expect("worklist mutex poisoned");
        }
    }

    /// Ends the caller's dispatch: drops the active count and wakes every
    /// waiter, so all idle workers re-check the termination test together.
    pub(crate) fn finish_dispatch(&self) {
        let mut state = self.state.lock().expect("worklist mutex poisoned");
        assert!(state.active_workers > 0, "active-worker count underflow");
        state.active_workers -= 1;
        drop(state);
        self.work_available.notify_all();
    }
}
