//! View model types representing renderable directory state.
//!
//! View models are computed from a [`DirectoryState`] snapshot and consumed by
//! the renderer. They contain no business logic, only display-ready strings.
//!
//! # Example
//!
//! ```rust
//! use employee_directory::app::DirectoryState;
//! use employee_directory::ui::DirectoryViewModel;
//!
//! let vm = DirectoryViewModel::from_state(&DirectoryState::new());
//! assert_eq!(vm.header.total, 0);
//! assert!(vm.rows.is_empty());
//! ```

use crate::app::{DirectoryState, Status};
use crate::domain::text::capitalize_words;
use crate::domain::Employee;

/// Title shown above the list.
pub const DIRECTORY_TITLE: &str = "Employee Directory";

/// Complete list-screen view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryViewModel {
    pub header: HeaderInfo,

    /// Present when a query is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Filtered employees, in list order.
    pub rows: Vec<EmployeeRow>,

    /// Replaces the rows when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Shown above the rows when the list is stale or being reloaded.
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub total: usize,
    pub filtered: usize,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// One employee in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: u64,
    pub name: String,
    pub title: String,
    pub department: String,
    pub email: String,
}

/// Message shown in place of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// True when `message` is a load failure and a retry is offered.
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Loading a new list in the background.
    Refreshing,
    /// The last load failed but earlier results are still shown.
    Stale { message: String },
}

impl DirectoryViewModel {
    /// Computes the list view from a state snapshot.
    ///
    /// # Empty State Precedence
    ///
    /// 1. A failure with nothing loaded shows the error and a retry hint.
    /// 2. A first load in progress shows a loading message.
    /// 3. A query that matches nobody names the query.
    /// 4. Otherwise an empty list says so.
    #[must_use]
    pub fn from_state(state: &DirectoryState) -> Self {
        let filtered = state.filtered_employees();
        let query = state.search_query.trim();

        let header = HeaderInfo {
            title: DIRECTORY_TITLE.to_string(),
            total: state.employees.len(),
            filtered: filtered.len(),
            status: state.status.name(),
        };

        let search_bar = (!query.is_empty()).then(|| SearchBarInfo {
            query: state.search_query.clone(),
        });

        let empty_state = if filtered.is_empty() {
            Some(empty_state_for(state, query))
        } else {
            None
        };

        let notice = match &state.status {
            Status::Refreshing => Some(Notice::Refreshing),
            Status::Error { message } if !state.employees.is_empty() => Some(Notice::Stale {
                message: message.clone(),
            }),
            _ => None,
        };

        let rows = filtered.iter().map(EmployeeRow::from_employee).collect();

        Self {
            header,
            search_bar,
            rows,
            empty_state,
            notice,
        }
    }
}

fn empty_state_for(state: &DirectoryState, query: &str) -> EmptyState {
    if let Status::Error { message } = &state.status {
        if state.employees.is_empty() {
            return EmptyState {
                message: message.clone(),
                subtitle: "Try again to reload the directory.".to_string(),
                is_error: true,
            };
        }
    }

    if state.employees.is_empty() && state.status.is_in_flight() {
        return EmptyState {
            message: "Loading employees...".to_string(),
            subtitle: String::new(),
            is_error: false,
        };
    }

    if !query.is_empty() && !state.employees.is_empty() {
        return EmptyState {
            message: format!("No employees found matching \"{query}\""),
            subtitle: "Clear the search to see everyone.".to_string(),
            is_error: false,
        };
    }

    EmptyState {
        message: "No employees found.".to_string(),
        subtitle: "Refresh to load the directory.".to_string(),
        is_error: false,
    }
}

impl EmployeeRow {
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.full_name(),
            title: employee.title().map(capitalize_words).unwrap_or_default(),
            department: employee.department().map(capitalize_words).unwrap_or_default(),
            email: employee.email.clone(),
        }
    }
}

/// Label/value pair on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

impl InfoRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Titled group of [`InfoRow`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub rows: Vec<InfoRow>,
}

/// Detail-screen view model for a single employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetail {
    pub id: u64,
    pub name: String,
    pub initials: String,
    /// Title and department on one line, when known.
    pub subtitle: Option<String>,
    pub sections: Vec<DetailSection>,
}

impl EmployeeDetail {
    /// Builds the contact, work and address sections.
    ///
    /// Work rows are omitted for missing company fields, and the address section
    /// is omitted entirely when there is no address.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        let mut sections = vec![DetailSection {
            title: "Contact Information",
            rows: vec![
                InfoRow::new("Email", employee.email.clone()),
                InfoRow::new("Phone", employee.formatted_phone()),
            ],
        }];

        if let Some(company) = &employee.company {
            let mut rows = Vec::new();
            if !company.name.is_empty() {
                rows.push(InfoRow::new("Company", company.name.clone()));
            }
            if let Some(title) = &company.title {
                rows.push(InfoRow::new("Job Title", capitalize_words(title)));
            }
            if let Some(department) = &company.department {
                rows.push(InfoRow::new("Department", capitalize_words(department)));
            }
            if !rows.is_empty() {
                sections.push(DetailSection {
                    title: "Work Information",
                    rows,
                });
            }
        }

        if let Some(address) = &employee.address {
            sections.push(DetailSection {
                title: "Address",
                rows: vec![
                    InfoRow::new("Street", address.street.clone()),
                    InfoRow::new("City", address.city.clone()),
                    InfoRow::new("State", address.state.clone()),
                    InfoRow::new("Postal Code", address.postal_code.clone()),
                ],
            });
        }

        let subtitle = match (employee.title(), employee.department()) {
            (Some(title), Some(department)) => Some(format!(
                "{} · {}",
                capitalize_words(title),
                capitalize_words(department)
            )),
            (Some(one), None) | (None, Some(one)) => Some(capitalize_words(one)),
            (None, None) => None,
        };

        Self {
            id: employee.id,
            name: employee.full_name(),
            initials: employee.initials(),
            subtitle,
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Company};

    fn ada() -> Employee {
        Employee::new(1, "Ada", "Lovelace", "ada@x.io")
            .with_phone("5551234567")
            .with_company(Company::new("Analytical", "senior engineer", "engineering"))
    }

    fn grace() -> Employee {
        Employee::new(2, "Grace", "Hopper", "grace@x.io")
    }

    fn ready(employees: Vec<Employee>) -> DirectoryState {
        DirectoryState {
            employees,
            status: Status::Ready,
            ..DirectoryState::default()
        }
    }

    #[test]
    fn rows_follow_the_filter() {
        let mut state = ready(vec![ada(), grace()]);
        state.search_query = "engineer".to_string();

        let vm = DirectoryViewModel::from_state(&state);
        assert_eq!(vm.header.total, 2);
        assert_eq!(vm.header.filtered, 1);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].name, "Ada Lovelace");
        assert_eq!(vm.rows[0].title, "Senior Engineer");
        assert_eq!(vm.search_bar.map(|s| s.query).as_deref(), Some("engineer"));
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn error_without_data_offers_retry() {
        let state = DirectoryState {
            status: Status::Error {
                message: "Network error".to_string(),
            },
            ..DirectoryState::default()
        };

        let empty = DirectoryViewModel::from_state(&state)
            .empty_state
            .expect("empty state");
        assert!(empty.is_error);
        assert_eq!(empty.message, "Network error");
    }

    #[test]
    fn error_with_data_keeps_rows_and_flags_them_stale() {
        let state = DirectoryState {
            employees: vec![ada(), grace()],
            status: Status::Error {
                message: "Server error. Please try again later.".to_string(),
            },
            ..DirectoryState::default()
        };

        let vm = DirectoryViewModel::from_state(&state);
        assert_eq!(vm.rows.len(), 2);
        assert!(vm.empty_state.is_none());
        assert_eq!(
            vm.notice,
            Some(Notice::Stale {
                message: "Server error. Please try again later.".to_string()
            })
        );
    }

    #[test]
    fn unmatched_query_is_named() {
        let mut state = ready(vec![ada()]);
        state.search_query = "  zzz ".to_string();

        let empty = DirectoryViewModel::from_state(&state)
            .empty_state
            .expect("empty state");
        assert_eq!(empty.message, "No employees found matching \"zzz\"");
        assert!(!empty.is_error);
    }

    #[test]
    fn first_load_shows_loading() {
        let state = DirectoryState {
            status: Status::Loading,
            ..DirectoryState::default()
        };
        let empty = DirectoryViewModel::from_state(&state)
            .empty_state
            .expect("empty state");
        assert_eq!(empty.message, "Loading employees...");
    }

    #[test]
    fn detail_sections() {
        let employee = ada().with_address(Address::new("1 Main St", "London", "LDN", "N1"));
        let detail = EmployeeDetail::from_employee(&employee);

        assert_eq!(detail.initials, "AL");
        assert_eq!(detail.subtitle.as_deref(), Some("Senior Engineer · Engineering"));
        let titles: Vec<_> = detail.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Contact Information", "Work Information", "Address"]);
        assert_eq!(detail.sections[0].rows[1].value, "(555) 123-4567");
    }

    #[test]
    fn detail_without_company_or_address() {
        let detail = EmployeeDetail::from_employee(&grace());
        assert_eq!(detail.sections.len(), 1);
        assert_eq!(detail.subtitle, None);
    }
}
