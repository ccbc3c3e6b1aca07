//! Screen-owned task scope.
//!
//! A screen that issues store operations through a `ViewScope` stops their
//! continuations from applying once it is torn down: dropping the scope
//! aborts every task that has not finished yet.

use std::future::Future;

use parking_lot::Mutex;
use tokio::task::AbortHandle;

/// Spawns store operations and aborts the unfinished ones on drop.
#[derive(Debug, Default)]
pub struct ViewScope {
    tasks: Mutex<Vec<AbortHandle>>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `operation` on the current tokio runtime, tied to this scope.
    pub fn spawn<F>(&self, operation: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(operation);
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle.abort_handle());
    }

    /// Number of spawned operations still running.
    pub fn pending(&self) -> usize {
        self.tasks
            .lock()
            .iter()
            .filter(|task| !task.is_finished())
            .count()
    }

    /// Abort every unfinished operation.
    pub fn cancel(&self) {
        let tasks = std::mem::take(&mut *self.tasks.lock());
        let mut aborted = 0usize;
        for task in tasks {
            if !task.is_finished() {
                task.abort();
                aborted += 1;
            }
        }
        if aborted > 0 {
            tracing::debug!(aborted, "View scope cancelled pending operations");
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel();
    }
}
