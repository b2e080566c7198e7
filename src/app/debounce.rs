//! Trailing-edge debouncing for search query writes.
//!
//! Filtering is cheap enough to run on every keystroke, but each query write
//! still notifies every subscriber. [`QueryDebouncer`] collapses a burst of
//! writes into one: only the last query of a burst is forwarded, once no new
//! query has arrived for the configured delay.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::store::DirectoryStore;

/// Default quiet period before a query is forwarded.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Forwards the last of a burst of queries after a quiet period.
///
/// Dropping the debouncer flushes a pending query immediately.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use employee_directory::app::{DirectoryStore, QueryDebouncer};
/// # fn demo(store: Arc<DirectoryStore>) {
/// let debouncer = QueryDebouncer::for_store(store, Duration::from_millis(300));
/// debouncer.push("a");
/// debouncer.push("ad");
/// debouncer.push("ada"); // only "ada" reaches the store
/// # }
/// ```
#[derive(Debug)]
pub struct QueryDebouncer {
    tx: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl QueryDebouncer {
    /// Spawns the debouncing task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new<F>(delay: Duration, sink: F) -> Self
    where
        F: Fn(String) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        let task = tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    tokio::select! {
                        next = rx.recv() => match next {
                            Some(query) => latest = query,
                            None => {
                                sink(latest);
                                return;
                            }
                        },
                        () = tokio::time::sleep(delay) => {
                            tracing::trace!(query_len = latest.len(), "debounced query forwarded");
                            sink(latest);
                            break;
                        }
                    }
                }
            }
        });

        Self { tx, task }
    }

    /// Debouncer that writes settled queries into `store`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn for_store(store: Arc<DirectoryStore>, delay: Duration) -> Self {
        Self::new(delay, move |query| store.set_search_query(query))
    }

    /// Records a new query, restarting the quiet period.
    pub fn push(&self, query: impl Into<String>) {
        if self.tx.send(query.into()).is_err() {
            tracing::debug!("debounce task stopped, query dropped");
        }
    }

    /// Closes the input and waits until any pending query has been forwarded.
    pub async fn flush(self) {
        let Self { tx, task } = self;
        drop(tx);
        if let Err(e) = task.await {
            tracing::debug!(error = %e, "debounce task ended abnormally");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn collector() -> (Arc<Mutex<Vec<String>>>, impl Fn(String) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = Arc::clone(&seen);
        (seen, move |query| sink_seen.lock().expect("lock").push(query))
    }

    #[tokio::test(start_paused = true)]
    async fn forwards_only_the_last_query_of_a_burst() {
        let (seen, sink) = collector();
        let debouncer = QueryDebouncer::new(DEFAULT_DEBOUNCE, sink);

        debouncer.push("a");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("ad");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("ada");

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(seen.lock().expect("lock").is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*seen.lock().expect("lock"), vec!["ada".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_are_forwarded_separately() {
        let (seen, sink) = collector();
        let debouncer = QueryDebouncer::new(DEFAULT_DEBOUNCE, sink);

        debouncer.push("ada");
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.push("grace");
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(
            *seen.lock().expect("lock"),
            vec!["ada".to_string(), "grace".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn flush_forwards_the_pending_query() {
        let (seen, sink) = collector();
        let debouncer = QueryDebouncer::new(DEFAULT_DEBOUNCE, sink);

        debouncer.push("turing");
        debouncer.flush().await;

        assert_eq!(*seen.lock().expect("lock"), vec!["turing".to_string()]);
    }
}
