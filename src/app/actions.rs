//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) is pure: it mutates state and returns
//! the effects that should follow. The data store executes them. Keeping the
//! two apart means every transition can be tested without a network.

use super::modes::FetchKind;

/// Commands produced by the event handler for the store to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Load the first page of employees from the source.
    ///
    /// The completion must be fed back as
    /// [`Event::LoadSucceeded`](super::Event::LoadSucceeded) or
    /// [`Event::LoadFailed`](super::Event::LoadFailed) with the same kind.
    RequestEmployees(FetchKind),
}
