//! Development authentication for the glasspane server.
//!
//! This module provides:
//! - An in-memory session store with expiry-based cleanup
//! - A development identity stub that mints unsigned demo tokens
//! - Cookie-based login/logout routes
//!
//! The OIDC protocol itself (discovery, redirects, PKCE, token exchange)
//! is deliberately absent: glasspane displays session state, it does not
//! authenticate against a real provider. The stub stands in for the
//! identity provider so the demo runs self-contained; its tokens are
//! unsigned and carry no trust.

pub mod identity;
pub mod routes;
pub mod store;

pub use routes::{login, logout};

use std::sync::Arc;

use crate::config::{IdentityConfig, SessionConfig};
use store::SessionStore;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "session";

/// Shared application state.
pub struct AppState {
    /// In-memory session store.
    pub store: Arc<SessionStore>,
    /// Session configuration.
    pub session_config: SessionConfig,
    /// Identity the development stub issues tokens for.
    pub identity_config: IdentityConfig,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        store: Arc<SessionStore>,
        session_config: SessionConfig,
        identity_config: IdentityConfig,
    ) -> Self {
        Self {
            store,
            session_config,
            identity_config,
        }
    }
}
