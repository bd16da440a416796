//! Detached background tasks
//!
//! Fire-and-forget work (flag notifications) runs on a [`TaskTracker`] so the
//! request that launched it returns immediately, while shutdown can still
//! wait for in-flight tasks instead of dropping them mid-way.

use std::future::Future;

use tokio_util::task::TaskTracker;
use tracing::{debug, Instrument};

/// Tracked set of detached tasks.
///
/// Cloning yields a handle to the same set.
#[derive(Debug, Clone)]
pub struct DetachedTasks {
    tracker: TaskTracker,
    label: &'static str,
}

impl DetachedTasks {
    pub fn new(label: &'static str) -> Self {
        Self { tracker: TaskTracker::new(), label }
    }

    /// Launch `task` in the background, inheriting the current span.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tracker.spawn(task.in_current_span());
        debug!(tasks = self.label, in_flight = self.tracker.len(), "detached_task_spawned");
    }

    /// Number of tasks still running
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Wait for every task spawned so far to finish.
    ///
    /// The set stays usable afterwards.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
        debug!(tasks = self.label, "detached_tasks_drained");
    }
}
