//! Employee source abstraction.
//!
//! This module defines the [`EmployeeSource`] trait, the fetch collaborator the
//! data store is constructed with. Production code uses
//! [`HttpEmployeeSource`](crate::api::HttpEmployeeSource); tests substitute a
//! scripted fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::domain::Employee;

/// Default number of employees requested per page.
pub const DEFAULT_PAGE_LIMIT: u32 = 30;

/// Offset/limit pair for a page of employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub skip: u32,
}

impl PageRequest {
    /// The first page with the given limit.
    #[must_use]
    pub const fn first(limit: u32) -> Self {
        Self { limit, skip: 0 }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_LIMIT)
    }
}

/// One page of employees as returned by the list and search endpoints.
///
/// ```json
/// { "users": [ ... ], "total": 208, "skip": 0, "limit": 30 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeesPage {
    pub users: Vec<Employee>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Abstraction over wherever employee records come from.
///
/// Implementations own their own timeouts; a timed-out request surfaces as
/// [`ApiError::Timeout`] like any other failure.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetches one page of the employee list.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the body cannot be decoded.
    async fn get_employees(&self, page: PageRequest) -> Result<EmployeesPage, ApiError>;

    /// Runs a server-side search.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the body cannot be decoded.
    async fn search_employees(&self, query: &str, limit: u32) -> Result<EmployeesPage, ApiError>;

    /// Fetches a single employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] with status 404 for an unknown id, or any other
    /// transport failure.
    async fn get_employee(&self, id: u64) -> Result<Employee, ApiError>;
}
