pub mod dispatch;
pub mod gateway;
pub mod submitter;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Task id used for the (single) in-flight submission
pub const SUBMIT_TASK_ID: &str = "submit";

/// Manages background tasks
/// Tracks running tasks and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_task<F>(&mut self, task_id: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel(task_id);

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id.to_string(), handle);
    }

    /// Abort a single task; returns true if one was still running
    pub fn cancel(&mut self, task_id: &str) -> bool {
        match self.tasks.remove(task_id) {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn cancel_aborts_running_task() {
        let mut manager = BackgroundTaskManager::new();
        manager.spawn_task("slow", async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        assert!(manager.cancel("slow"));
        assert!(!manager.cancel("slow"));
    }

    #[tokio::test]
    async fn respawn_replaces_previous_task() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut manager = BackgroundTaskManager::new();

        let first = tx.clone();
        manager.spawn_task("job", async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = first.send(1);
        });
        manager.spawn_task("job", async move {
            let _ = tx.send(2);
        });

        assert_eq!(rx.recv().await, Some(2));
        // The first task was aborted, dropping its sender
        assert_eq!(rx.recv().await, None);
    }
}
