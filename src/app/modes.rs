//! Request status state machine types.
//!
//! [`Status`] is the directory's request lifecycle. The error message lives
//! inside [`Status::Error`], so a message can never exist without the error
//! state or outlive it.
//!
//! ```text
//! Idle ──fetch──▶ Loading ──ok──▶ Ready ──refresh──▶ Refreshing ──ok──▶ Ready
//!                    │                                   │
//!                    └──err──▶ Error ◀───────err─────────┘
//!                               │
//!                               └──fetch──▶ Loading
//! ```

/// Which operation started the in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    /// Initial load or retry. Enters [`Status::Loading`].
    Fetch,
    /// Reload while keeping the current list visible. Enters [`Status::Refreshing`].
    Refresh,
}

impl FetchKind {
    /// The in-flight status this kind of request enters.
    #[must_use]
    pub const fn in_flight_status(self) -> Status {
        match self {
            Self::Fetch => Status::Loading,
            Self::Refresh => Status::Refreshing,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Refresh => "refresh",
        }
    }
}

/// Request lifecycle of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing requested yet, or an error was dismissed before any data loaded.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// A refresh is in flight; the previous list is still shown.
    Refreshing,
    /// The last request succeeded.
    Ready,
    /// The last request failed.
    Error {
        /// User-facing description of the failure. Never empty.
        message: String,
    },
}

impl Status {
    /// `true` while a fetch or refresh is outstanding.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::Loading | Self::Refreshing)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The error message when in the error state.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Refreshing => "refreshing",
            Self::Ready => "ready",
            Self::Error { .. } => "error",
        }
    }
}
