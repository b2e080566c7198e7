//! Domain layer for the employee directory.
//!
//! This module contains the core record types and the crate error type,
//! independent of transport, storage or presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`employee`]: Employee record and its company/address sub-records
//! - [`text`]: Small text formatting helpers shared by the renderers
//!
//! # Examples
//!
//! ```
//! use employee_directory::domain::{Employee, Result};
//!
//! fn load() -> Result<Employee> {
//!     Ok(Employee::new(1, "Ada", "Lovelace", "ada@x.com"))
//! }
//! # assert_eq!(load().unwrap().full_name(), "Ada Lovelace");
//! ```

pub mod employee;
pub mod error;
pub mod text;

pub use employee::{Address, Company, Employee};
pub use error::{DirectoryError, Result};
