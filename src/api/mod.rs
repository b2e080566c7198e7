//! Fetch collaborator for the directory API.
//!
//! The data store never talks HTTP directly; it is handed an
//! [`EmployeeSource`] at construction. This keeps transport out of the state
//! machine and lets tests substitute a fake.
//!
//! # Modules
//!
//! - `source`: The [`EmployeeSource`] trait and page types
//! - `http`: Reqwest implementation against the public API
//! - `error`: Transport error taxonomy and user-facing messages

pub mod error;
pub mod http;
pub mod source;

pub use error::ApiError;
pub use http::{HttpEmployeeSource, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use source::{EmployeeSource, EmployeesPage, PageRequest, DEFAULT_PAGE_LIMIT};
