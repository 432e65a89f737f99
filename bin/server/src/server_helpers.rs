//! Helper functions for server functions with proper error handling and logging.

use std::sync::Arc;

use glasspane_session::SessionId;
use leptos::prelude::*;

use crate::auth::SESSION_COOKIE;
use crate::auth::store::{SessionRecord, SessionStore};
use crate::error::SessionError;

/// Authenticated session information.
pub struct AuthenticatedSession {
    pub session_id: SessionId,
    pub record: SessionRecord,
}

/// Extracts and validates the current session from the request.
///
/// This function:
/// 1. Gets the session cookie
/// 2. Looks up the session in the store
/// 3. Validates the session is not expired
///
/// Logs structured errors for debugging while returning user-safe error types.
pub async fn get_authenticated_session() -> Result<AuthenticatedSession, SessionError> {
    let jar = leptos_axum::extract::<axum_extra::extract::CookieJar>()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to extract cookie jar");
            SessionError::Extraction {
                details: e.to_string(),
            }
        })?;

    let session_id_str = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(SessionError::NotAuthenticated)?;

    let session_id = SessionId::new(session_id_str.clone());

    let store = get_session_store();
    let record = store.find(&session_id).await.ok_or_else(|| {
        tracing::debug!(session_id = %session_id_str, "Session not found in store");
        SessionError::NotFound {
            session_id: session_id_str.clone(),
        }
    })?;

    if record.is_expired() {
        tracing::debug!(session_id = %session_id_str, "Session expired");
        return Err(SessionError::Expired {
            session_id: session_id_str,
        });
    }

    Ok(AuthenticatedSession { session_id, record })
}

/// Gets the session store from the request context.
pub fn get_session_store() -> Arc<SessionStore> {
    expect_context::<Arc<SessionStore>>()
}
