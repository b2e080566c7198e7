//! Application layer: directory state, transitions and the data store.
//!
//! The layer follows a unidirectional data flow:
//!
//! ```text
//! fetch()/refresh() → Event → handle_event → State mutation → Action
//!                                ↑                              │
//!                                └── LoadSucceeded/LoadFailed ◀─┘ (EmployeeSource)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`handler`]: Event processing and the status state machine
//! - [`modes`]: Status and request kind enums
//! - [`state`]: State container and derived views
//! - [`filter`]: Pure client-side search
//! - [`store`]: The store that owns the state and runs requests
//! - [`debounce`]: Query write debouncing for interactive callers
//!
//! # Example
//!
//! ```rust
//! use employee_directory::app::{handle_event, DirectoryState, Event};
//!
//! let mut state = DirectoryState::new();
//! let (changed, _actions) = handle_event(&mut state, Event::SetSearchQuery("ada".into()));
//! assert!(changed);
//! ```

pub mod actions;
pub mod debounce;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;
pub mod store;

pub use actions::Action;
pub use debounce::{QueryDebouncer, DEFAULT_DEBOUNCE};
pub use filter::{filter_employees, matches_query};
pub use handler::{handle_event, Event};
pub use modes::{FetchKind, Status};
pub use state::{DirectoryState, EmployeeCount, LoadingStates};
pub use store::DirectoryStore;
