//! Cancellable handle for the timer's status poll task

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle to the background 1-second status poll.
///
/// Returned at schedule time and owned by the timer state. Cancellation is
/// idempotent and fires on every path that leaves the Running state: manual
/// stop, auto-stop, tab switch, and quit. Dropping the handle cancels too,
/// so replacing a handle can never leak a ticking task.
#[derive(Debug)]
pub struct PollHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn new(shutdown: watch::Sender<bool>, task: JoinHandle<()>) -> Self {
        Self { shutdown, task }
    }

    /// Signal the poll loop to exit and abort the task. Safe to call more
    /// than once.
    pub fn cancel(&self) {
        let _ = self.shutdown.send(true);
        self.task.abort();
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
