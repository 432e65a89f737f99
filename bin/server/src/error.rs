//! Domain error types for server operations.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Session-related errors.
#[derive(Debug)]
pub enum SessionError {
    /// User is not authenticated (no session cookie).
    NotAuthenticated,
    /// Session was not found in the store.
    NotFound { session_id: String },
    /// Session has expired.
    Expired { session_id: String },
    /// Failed to extract request state (cookie jar, context).
    Extraction { details: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "not authenticated"),
            Self::NotFound { session_id } => {
                write!(f, "session '{}' not found", session_id)
            }
            Self::Expired { session_id } => {
                write!(f, "session '{}' has expired", session_id)
            }
            Self::Extraction { details } => {
                write!(f, "failed to extract request state: {}", details)
            }
        }
    }
}

impl SessionError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            SessionError::NotAuthenticated => ServerFnError::new("Not authenticated"),
            SessionError::NotFound { .. } => ServerFnError::new("Session not found"),
            SessionError::Expired { .. } => ServerFnError::new("Session expired"),
            SessionError::Extraction { .. } => ServerFnError::new("Internal server error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_session_id() {
        let err = SessionError::NotFound {
            session_id: "01J0000000000000000000000".to_string(),
        };
        assert!(err.to_string().contains("01J0000000000000000000000"));
    }

    #[test]
    fn server_error_hides_extraction_details() {
        let err = SessionError::Extraction {
            details: "request body already taken".to_string(),
        };
        let server_error = err.into_server_error();
        assert!(!server_error.to_string().contains("request body"));
    }
}
