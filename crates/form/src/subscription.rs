//! The subscription set owned by a form session.
//!
//! Every background task of a session is registered here together with one
//! shared cancellation token. Releasing the set cancels the token and aborts
//! the tasks; tasks select on the token with priority, so nothing is
//! published after [`Subscriptions::release`] returns.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Bulk-cancellable set of background tasks.
#[derive(Debug, Default)]
pub struct Subscriptions {
    token: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl Subscriptions {
    /// Creates an empty, live set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Token every registered task must observe.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Registers a task; a task added after release is aborted at once.
    pub fn track(&mut self, task: JoinHandle<()>) {
        if self.is_released() {
            task.abort();
            return;
        }
        self.tasks.push(task);
    }

    /// Number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether [`release`](Self::release) has run.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels everything. Runs once; later calls are no-ops.
    pub fn release(&mut self) {
        if self.is_released() {
            return;
        }
        self.token.cancel();
        let count = self.tasks.len();
        for task in self.tasks.drain(..) {
            task.abort();
        }
        debug!(tasks = count, "subscriptions released");
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.release();
    }
}
