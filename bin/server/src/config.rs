//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables. Every field
//! has a default, so the demo runs with zero configuration.

use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Development identity used to mint demo sessions.
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session duration in minutes.
    /// Short sessions bound revocation latency.
    #[serde(default = "default_session_duration_minutes")]
    pub duration_minutes: i64,

    /// Interval between session cleanup runs, in seconds.
    #[serde(default = "default_cleanup_interval_seconds")]
    pub cleanup_interval_seconds: u64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Defaults to false because the demo serves plain HTTP locally.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

/// The identity the development stub issues tokens for.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Issuer claim stamped into minted identity tokens.
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Subject claim identifying the demo user.
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Human-readable display name.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Email address claim.
    #[serde(default = "default_email")]
    pub email: String,

    /// Groups claim.
    #[serde(default = "default_groups")]
    pub groups: Vec<String>,
}

fn default_session_duration_minutes() -> i64 {
    5
}

fn default_cleanup_interval_seconds() -> u64 {
    300
}

fn default_secure_cookies() -> bool {
    false
}

fn default_issuer() -> String {
    "https://glasspane.localhost/idp".to_string()
}

fn default_subject() -> String {
    "demo-user".to_string()
}

fn default_display_name() -> String {
    "Demo User".to_string()
}

fn default_email() -> String {
    "demo.user@example.com".to_string()
}

fn default_groups() -> Vec<String> {
    vec!["users".to_string()]
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_session_duration_minutes(),
            cleanup_interval_seconds: default_cleanup_interval_seconds(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            issuer: default_issuer(),
            subject: default_subject(),
            display_name: default_display_name(),
            email: default_email(),
            groups: default_groups(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
