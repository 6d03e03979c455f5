use std::future::Future;
use std::sync::{Mutex, PoisonError};
use tokio::task::JoinHandle;

/// Background tasks owned by a provider.
///
/// Remote writes are spawned here so they can be awaited (`settle`) or
/// cancelled together (`abort_all`) when the provider goes away.
#[derive(Default)]
pub(crate) struct TaskSet {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl TaskSet {
    pub(crate) fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }

    /// Waits for every task spawned so far, including tasks spawned while
    /// waiting.
    pub(crate) async fn settle(&self) {
        loop {
            let pending = std::mem::take(
                &mut *self.handles.lock().unwrap_or_else(PoisonError::into_inner),
            );
            if pending.is_empty() {
                break;
            }
            for handle in pending {
                if let Err(e) = handle.await {
                    if e.is_panic() {
                        tracing::error!("Background sync task panicked: {}", e);
                    }
                }
            }
        }
    }

    pub(crate) fn abort_all(&self) {
        let handles = std::mem::take(
            &mut *self.handles.lock().unwrap_or_else(PoisonError::into_inner),
        );
        for handle in handles {
            handle.abort();
        }
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|h| !h.is_finished())
            .count()
    }
}
