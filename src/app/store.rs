//! The directory data store.
//!
//! [`DirectoryStore`] owns the single [`DirectoryState`], serializes every
//! mutation through [`handle_event`], and executes the resulting actions
//! against the injected [`EmployeeSource`]. Consumers get snapshots or a
//! change subscription; they never touch the state directly.
//!
//! # Concurrency
//!
//! The state lives in a `tokio::sync::watch` channel. Each transition runs
//! inside one `send_if_modified` call, so the single-flight check and the move
//! into `Loading`/`Refreshing` are atomic. No lock is held across the network
//! call. A second `fetch()`/`refresh()` issued while one is outstanding returns
//! immediately without touching the network.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::watch;

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::modes::{FetchKind, Status};
use super::state::{DirectoryState, EmployeeCount};
use crate::api::{EmployeeSource, PageRequest};
use crate::domain::Employee;

/// Message recorded when an in-flight request is abandoned by its caller.
const CANCELLED_MESSAGE: &str = "Request cancelled.";

/// App-scoped owner of the employee list and its request status.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use employee_directory::api::HttpEmployeeSource;
/// use employee_directory::app::DirectoryStore;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let source = HttpEmployeeSource::from_base("https://dummyjson.com")?;
/// let store = DirectoryStore::new(Arc::new(source));
///
/// store.fetch().await;
/// store.set_search_query("engineer");
/// for employee in store.filtered_employees() {
///     println!("{}", employee.full_name());
/// }
/// # Ok(())
/// # }
/// ```
pub struct DirectoryStore {
    source: Arc<dyn EmployeeSource>,
    page: PageRequest,
    state: watch::Sender<DirectoryState>,
}

impl DirectoryStore {
    /// Creates a store in [`Status::Idle`] that loads the default first page.
    #[must_use]
    pub fn new(source: Arc<dyn EmployeeSource>) -> Self {
        Self::with_page(source, PageRequest::default())
    }

    /// Creates a store that loads `page` on every fetch and refresh.
    #[must_use]
    pub fn with_page(source: Arc<dyn EmployeeSource>, page: PageRequest) -> Self {
        Self {
            source,
            page,
            state: watch::Sender::new(DirectoryState::new()),
        }
    }

    /// The injected fetch collaborator.
    #[must_use]
    pub fn source(&self) -> &Arc<dyn EmployeeSource> {
        &self.source
    }

    /// Loads the employee list, or retries after an error.
    ///
    /// Does nothing if a fetch or refresh is already in flight. Failures end in
    /// [`Status::Error`]; this method never returns an error.
    pub async fn fetch(&self) {
        self.run(Event::Fetch).await;
    }

    /// Reloads the employee list while keeping the current one visible.
    ///
    /// Same single-flight rule as [`fetch`](Self::fetch). A failed refresh keeps
    /// the previously loaded employees.
    pub async fn refresh(&self) {
        self.run(Event::Refresh).await;
    }

    /// Stores the raw query text. Filtering is derived on read.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.dispatch(Event::SetSearchQuery(query.into()));
    }

    /// Dismisses the current error. No-op outside [`Status::Error`].
    pub fn clear_error(&self) {
        self.dispatch(Event::ClearError);
    }

    /// Drops the loaded list and returns to idle, unless a request is in flight.
    pub fn reset(&self) {
        self.dispatch(Event::Reset);
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DirectoryState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.state.borrow().status.clone()
    }

    /// Employees matching the current search query, in server order.
    #[must_use]
    pub fn filtered_employees(&self) -> Vec<Employee> {
        self.state.borrow().filtered_employees()
    }

    #[must_use]
    pub fn counts(&self) -> EmployeeCount {
        self.state.borrow().counts()
    }

    #[must_use]
    pub fn employee_by_id(&self, id: u64) -> Option<Employee> {
        self.state.borrow().employee_by_id(id).cloned()
    }

    /// Subscribes to state changes. The receiver sees the latest snapshot
    /// after every transition that modified the state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DirectoryState> {
        self.state.subscribe()
    }

    /// Applies one event atomically and returns the actions it produced.
    fn dispatch(&self, event: Event) -> Vec<Action> {
        let mut actions = Vec::new();
        self.state.send_if_modified(|state| {
            let (changed, produced) = handle_event(state, event);
            actions = produced;
            changed
        });
        actions
    }

    async fn run(&self, event: Event) {
        let mut pending: VecDeque<Action> = self.dispatch(event).into();
        while let Some(action) = pending.pop_front() {
            let completion = self.execute(action).await;
            pending.extend(self.dispatch(completion));
        }
    }

    async fn execute(&self, action: Action) -> Event {
        match action {
            Action::RequestEmployees(kind) => {
                let mut guard = CompletionGuard { store: self, kind, armed: true };

                let result = self.source.get_employees(self.page).await;
                guard.armed = false;

                match result {
                    Ok(page) => Event::LoadSucceeded {
                        kind,
                        employees: page.users,
                    },
                    Err(error) => {
                        tracing::debug!(kind = kind.as_str(), error = %error, "employee source failed");
                        Event::LoadFailed {
                            kind,
                            message: error.user_message(),
                        }
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for DirectoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryStore")
            .field("page", &self.page)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

/// Moves the store out of its in-flight status if the request future is
/// dropped before the source answers, so later fetches are not blocked forever.
struct CompletionGuard<'a> {
    store: &'a DirectoryStore,
    kind: FetchKind,
    armed: bool,
}

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!(kind = self.kind.as_str(), "request abandoned before completion");
            self.store.dispatch(Event::LoadFailed {
                kind: self.kind,
                message: CANCELLED_MESSAGE.to_string(),
            });
        }
    }
}
