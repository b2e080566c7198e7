//! Directory state container and derived views.
//!
//! [`DirectoryState`] is the single source of truth for the employee list and
//! its request status. Everything a presentation layer needs beyond the raw
//! fields (filtered list, counts, loading flags) is computed from a snapshot
//! on demand rather than stored, so there is no second copy to drift.

use chrono::{DateTime, Utc};

use super::filter::filter_employees;
use super::modes::Status;
use crate::domain::Employee;

/// Employee list, request status and search query.
///
/// Created once per process with an empty list in [`Status::Idle`] and mutated
/// only through [`handle_event`](super::handle_event).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryState {
    /// Employees in server response order. Replaced wholesale on every
    /// successful load, never merged.
    pub employees: Vec<Employee>,

    /// Request lifecycle, including the error message when failed.
    pub status: Status,

    /// Raw query text as typed. Filtering is derived from it.
    pub search_query: String,

    /// When the current `employees` list arrived.
    pub last_loaded_at: Option<DateTime<Utc>>,
}

/// Total and filtered employee counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeCount {
    pub total: usize,
    pub filtered: usize,
}

/// Boolean view of the status for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoadingStates {
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub has_error: bool,
    pub is_empty: bool,
}

impl DirectoryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The failure message while in the error state.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.status.error_message()
    }

    /// Employees matching the current search query.
    #[must_use]
    pub fn filtered_employees(&self) -> Vec<Employee> {
        filter_employees(&self.employees, &self.search_query)
    }

    #[must_use]
    pub fn counts(&self) -> EmployeeCount {
        EmployeeCount {
            total: self.employees.len(),
            filtered: self.filtered_employees().len(),
        }
    }

    #[must_use]
    pub fn loading_states(&self) -> LoadingStates {
        LoadingStates {
            is_loading: self.status == Status::Loading,
            is_refreshing: self.status == Status::Refreshing,
            has_error: self.status.is_error(),
            is_empty: self.employees.is_empty(),
        }
    }

    /// Looks up a loaded employee by identifier.
    #[must_use]
    pub fn employee_by_id(&self, id: u64) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Status to fall back to when an error is dismissed.
    pub(crate) fn resting_status(&self) -> Status {
        if self.employees.is_empty() {
            Status::Idle
        } else {
            Status::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DirectoryState {
        DirectoryState {
            employees: vec![
                Employee::new(1, "Ada", "Lovelace", "ada@x.com"),
                Employee::new(2, "Grace", "Hopper", "grace@navy.mil"),
            ],
            status: Status::Ready,
            search_query: "grace".to_string(),
            last_loaded_at: None,
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = DirectoryState::new();
        assert_eq!(state.status, Status::Idle);
        assert!(state.employees.is_empty());
        assert!(state.error_message().is_none());
        assert!(state.loading_states().is_empty);
    }

    #[test]
    fn counts_follow_the_query() {
        let state = sample();
        assert_eq!(state.counts(), EmployeeCount { total: 2, filtered: 1 });
    }

    #[test]
    fn looks_up_by_id() {
        let state = sample();
        assert_eq!(state.employee_by_id(2).map(|e| e.first_name.as_str()), Some("Grace"));
        assert!(state.employee_by_id(99).is_none());
    }

    #[test]
    fn loading_states_reflect_status() {
        let mut state = sample();
        state.status = Status::Refreshing;
        let flags = state.loading_states();
        assert!(flags.is_refreshing);
        assert!(!flags.is_loading);
        assert!(!flags.has_error);
        assert!(!flags.is_empty);
    }
}
