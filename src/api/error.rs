//! Transport errors raised by employee sources.

use thiserror::Error;

/// Failure of a request to the directory API.
///
/// The data store reduces every variant to [`ApiError::user_message`]; the
/// variant itself is only kept for logging and for callers that talk to a
/// source directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request did not complete within the client timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// No response was received (DNS, connection refused, TLS, reset).
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status}")]
    Http { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Anything else, including a request that could not be built.
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Human-readable message suitable for showing next to a retry action.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::api::ApiError;
    ///
    /// assert_eq!(ApiError::Http { status: 404 }.user_message(), "Resource not found.");
    /// assert_eq!(
    ///     ApiError::Http { status: 418 }.user_message(),
    ///     "Request failed with status 418"
    /// );
    /// ```
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout(_) => {
                "Request timeout. Please check your internet connection.".to_string()
            }
            Self::Network(_) => {
                "Network error. Please check your internet connection.".to_string()
            }
            Self::Http { status } => match status {
                400 => "Bad request. Please try again.".to_string(),
                401 => "Unauthorized access.".to_string(),
                403 => "Forbidden access.".to_string(),
                404 => "Resource not found.".to_string(),
                500 => "Server error. Please try again later.".to_string(),
                other => format!("Request failed with status {other}"),
            },
            Self::Decode(_) => "Unexpected response from server.".to_string(),
            Self::Unknown(message) if !message.trim().is_empty() => message.clone(),
            Self::Unknown(_) => "Failed to fetch employees".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bad_request(400, "Bad request. Please try again.")]
    #[case::unauthorized(401, "Unauthorized access.")]
    #[case::forbidden(403, "Forbidden access.")]
    #[case::not_found(404, "Resource not found.")]
    #[case::server_error(500, "Server error. Please try again later.")]
    #[case::bad_gateway(502, "Request failed with status 502")]
    fn maps_statuses_to_user_messages(#[case] status: u16, #[case] expected: &str) {
        assert_eq!(ApiError::Http { status }.user_message(), expected);
    }

    #[test]
    fn blank_unknown_errors_fall_back_to_generic_text() {
        assert_eq!(
            ApiError::Unknown("  ".to_string()).user_message(),
            "Failed to fetch employees"
        );
        assert_eq!(ApiError::Unknown("boom".to_string()).user_message(), "boom");
    }

    #[test]
    fn transport_failures_mention_connectivity() {
        assert!(ApiError::Timeout("10s".into()).user_message().starts_with("Request timeout"));
        assert!(ApiError::Network("refused".into()).user_message().starts_with("Network error"));
    }
}
