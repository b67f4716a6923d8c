//! Latest-wins async task slot.

use std::future::Future;
use std::sync::Mutex;
use tokio::task::JoinHandle;

/// Holds at most one in-flight task; spawning replaces and aborts the
/// previous one. The pattern behind search-as-you-type and other
/// "only the latest result matters" flows. Dropping the slot aborts the
/// in-flight task.
#[derive(Default)]
pub struct LatestTask {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl LatestTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `future`, aborting whatever was running before.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let task = tokio::spawn(future);
        if let Some(previous) = self.handle.lock().unwrap().replace(task) {
            previous.abort();
        }
    }

    /// Abort the in-flight task, if any.
    pub fn abort(&self) {
        if let Some(task) = self.handle.lock().unwrap().take() {
            task.abort();
        }
    }

    /// Whether a task is still running.
    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for LatestTask {
    fn drop(&mut self) {
        self.abort();
    }
}
