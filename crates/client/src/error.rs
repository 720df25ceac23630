//! Error types for the data-access layer.
//!
//! The HTTP client normalizes every backend or transport failure into an
//! [`ApiError`]; it never silently swallows one. Resource methods propagate
//! these unchanged. Only the session store catches errors, and only inside
//! `login`/`check_session`, where a failure becomes a cleared session plus
//! a recorded user-facing message.

use thiserror::Error;

/// Errors raised by the HTTP client and resource methods.
///
/// The `#[error]` strings double as the user-facing messages the portal UI
/// shows, so they are written for humans rather than for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend returned 401 - the bearer token is invalid or expired.
    ///
    /// The client has already cleared the stored token by the time this is
    /// raised; the caller is expected to route to re-authentication.
    #[error("Session expired. Please login again.")]
    AuthExpired,

    /// Backend returned 403.
    #[error("You do not have permission to access this resource.")]
    Forbidden,

    /// Backend returned 404.
    #[error("Resource not found.")]
    NotFound,

    /// Any other non-2xx response. `message` carries the backend's `detail`
    /// field when the error body parses as JSON, otherwise a generic
    /// `"API Error: <status>"` fallback.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable detail from the backend, or the generic fallback.
        message: String,
    },

    /// Transport-level failure - no response was received at all.
    #[error("Network error. Please check your connection and ensure the API server is running.")]
    Network(#[source] reqwest::Error),

    /// A 2xx response whose body did not parse as the expected JSON shape.
    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

/// Errors raised by the session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The supplied mode password is not in the credential table.
    ///
    /// No network call is made in this case; the session stays logged out
    /// and nothing is persisted.
    #[error("Unrecognized access code.")]
    UnknownModePassword,

    /// One of the two login calls (authenticate, profile fetch) failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Persisted session data did not deserialize; the session has been
    /// fully cleared rather than partially restored.
    #[error("Stored session was corrupt and has been cleared. Please login again.")]
    Restore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_backend_detail() {
        let err = ApiError::Api {
            status: 422,
            message: "service_type must be one of healthcare, training, nutrition".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "service_type must be one of healthcare, training, nutrition"
        );
    }

    #[test]
    fn auth_expired_message_is_user_facing() {
        assert_eq!(
            ApiError::AuthExpired.to_string(),
            "Session expired. Please login again."
        );
    }

    #[test]
    fn session_error_wraps_api_error_transparently() {
        let err = SessionError::from(ApiError::Forbidden);
        assert_eq!(
            err.to_string(),
            "You do not have permission to access this resource."
        );
    }
}
