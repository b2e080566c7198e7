//! Event handling and state transition logic.
//!
//! Every mutation of [`DirectoryState`] goes through [`handle_event`]. The
//! handler pattern-matches the event, applies the transition, and returns
//! whether anything changed plus the side effects to run.
//!
//! # Event Types
//!
//! - **Requests**: `Fetch`, `Refresh`
//! - **Completions**: `LoadSucceeded`, `LoadFailed`
//! - **Local edits**: `SetSearchQuery`, `ClearError`, `Reset`
//!
//! # Example
//!
//! ```rust
//! use employee_directory::app::{handle_event, Action, DirectoryState, Event, FetchKind, Status};
//!
//! let mut state = DirectoryState::new();
//! let (changed, actions) = handle_event(&mut state, Event::Fetch);
//! assert!(changed);
//! assert_eq!(state.status, Status::Loading);
//! assert_eq!(actions, vec![Action::RequestEmployees(FetchKind::Fetch)]);
//!
//! // A second fetch while one is in flight is dropped.
//! let (changed, actions) = handle_event(&mut state, Event::Fetch);
//! assert!(!changed);
//! assert!(actions.is_empty());
//! ```

use super::actions::Action;
use super::modes::{FetchKind, Status};
use super::state::DirectoryState;
use crate::domain::Employee;

/// Events that drive the directory state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Load (or retry loading) the employee list.
    Fetch,
    /// Reload the employee list while keeping the current one visible.
    Refresh,
    /// A request issued for `kind` returned employees.
    LoadSucceeded {
        kind: FetchKind,
        employees: Vec<Employee>,
    },
    /// A request issued for `kind` failed with a user-facing message.
    LoadFailed { kind: FetchKind, message: String },
    /// Replaces the raw search query.
    SetSearchQuery(String),
    /// Dismisses the current error.
    ClearError,
    /// Drops the loaded list and returns to idle.
    Reset,
}

/// Applies `event` to `state`.
///
/// Returns `(changed, actions)`: `changed` is `true` when the state was
/// modified, and `actions` lists the side effects the caller must execute.
/// Events that are invalid in the current state are ignored, never errors.
pub fn handle_event(state: &mut DirectoryState, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!(
        "handle_event",
        status = state.status.name(),
        employees = state.employees.len()
    )
    .entered();

    match event {
        Event::Fetch => begin_request(state, FetchKind::Fetch),
        Event::Refresh => begin_request(state, FetchKind::Refresh),
        Event::LoadSucceeded { kind, employees } => {
            if state.status != kind.in_flight_status() {
                tracing::debug!(kind = kind.as_str(), "stale completion ignored");
                return (false, vec![]);
            }
            tracing::debug!(
                kind = kind.as_str(),
                count = employees.len(),
                "employees loaded"
            );
            state.employees = employees;
            state.status = Status::Ready;
            state.last_loaded_at = Some(chrono::Utc::now());
            (true, vec![])
        }
        Event::LoadFailed { kind, message } => {
            if state.status != kind.in_flight_status() {
                tracing::debug!(kind = kind.as_str(), "stale failure ignored");
                return (false, vec![]);
            }
            let message = if message.trim().is_empty() {
                fallback_message(kind).to_string()
            } else {
                message
            };
            tracing::warn!(
                kind = kind.as_str(),
                error = %message,
                retained = state.employees.len(),
                "employee request failed"
            );
            state.status = Status::Error { message };
            (true, vec![])
        }
        Event::SetSearchQuery(query) => {
            if state.search_query == query {
                return (false, vec![]);
            }
            tracing::trace!(query_len = query.len(), "search query updated");
            state.search_query = query;
            (true, vec![])
        }
        Event::ClearError => {
            if !state.status.is_error() {
                return (false, vec![]);
            }
            state.status = state.resting_status();
            tracing::debug!(status = state.status.name(), "error cleared");
            (true, vec![])
        }
        Event::Reset => {
            if state.status.is_in_flight() {
                tracing::debug!("reset ignored while a request is in flight");
                return (false, vec![]);
            }
            let changed = !state.employees.is_empty() || state.status != Status::Idle;
            state.employees.clear();
            state.status = Status::Idle;
            state.last_loaded_at = None;
            (changed, vec![])
        }
    }
}

fn begin_request(state: &mut DirectoryState, kind: FetchKind) -> (bool, Vec<Action>) {
    if state.status.is_in_flight() {
        tracing::debug!(
            kind = kind.as_str(),
            status = state.status.name(),
            "request already in flight, dropping"
        );
        return (false, vec![]);
    }

    state.status = kind.in_flight_status();
    tracing::debug!(kind = kind.as_str(), "request started");
    (true, vec![Action::RequestEmployees(kind)])
}

const fn fallback_message(kind: FetchKind) -> &'static str {
    match kind {
        FetchKind::Fetch => "Failed to fetch employees",
        FetchKind::Refresh => "Failed to refresh employees",
    }
}
