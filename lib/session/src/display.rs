//! Pure derivation of the session view.
//!
//! `SessionDisplay` is computed from session inputs alone, so every panel
//! the UI shows can be pinned down in plain unit tests without rendering.

use serde::Serialize;

use crate::profile::{ProfileLoadingState, UserProfile};
use crate::token::SessionTokens;

/// Message shown while the user profile is loading.
pub const PROFILE_LOADING_MESSAGE: &str = "User information is loading";

/// Message shown when the user profile failed to load.
pub const PROFILE_LOAD_FAILED_MESSAGE: &str = "Failed to load user information";

/// Content of the user-information panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInfoContent {
    /// A fixed status message.
    Message(&'static str),
    /// A pretty-printed claims document.
    Dump(String),
}

/// Everything the session view renders.
///
/// Derived fresh from the current tokens, profile, and loading state on
/// every change; the same inputs always produce the same display. Absent
/// tokens come through as empty strings, and a token without a decodable
/// payload simply has no payload dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDisplay {
    access_token: String,
    identity_token: String,
    identity_payload: Option<String>,
    user_info: UserInfoContent,
}

impl SessionDisplay {
    /// Derives the display from session state.
    ///
    /// The user-information panel is selected by the loading state alone:
    /// a fixed message while loading or after a failure, and the profile
    /// dump once loaded. A completed fetch with no document dumps JSON
    /// `null` rather than an empty object, keeping "no document" visibly
    /// distinct from "empty document".
    #[must_use]
    pub fn derive(
        tokens: &SessionTokens,
        profile: Option<&UserProfile>,
        state: ProfileLoadingState,
    ) -> Self {
        let user_info = match state {
            ProfileLoadingState::Loading => UserInfoContent::Message(PROFILE_LOADING_MESSAGE),
            ProfileLoadingState::LoadingError => {
                UserInfoContent::Message(PROFILE_LOAD_FAILED_MESSAGE)
            }
            ProfileLoadingState::Loaded => {
                let document = match profile {
                    Some(profile) => serde_json::Value::Object(profile.claims().clone()),
                    None => serde_json::Value::Null,
                };
                UserInfoContent::Dump(pretty_json(&document))
            }
        };

        Self {
            access_token: tokens.access_token().as_str().to_string(),
            identity_token: tokens.identity_token().raw().to_string(),
            identity_payload: tokens.identity_token().payload().map(pretty_json),
            user_info,
        }
    }

    /// Returns the access token panel text.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the identity token panel text.
    #[must_use]
    pub fn identity_token(&self) -> &str {
        &self.identity_token
    }

    /// Returns the identity payload dump, when the token decoded.
    #[must_use]
    pub fn identity_payload(&self) -> Option<&str> {
        self.identity_payload.as_deref()
    }

    /// Returns the user-information panel content.
    #[must_use]
    pub fn user_info(&self) -> &UserInfoContent {
        &self.user_info
    }
}

/// Pretty-prints a claims document with two-space indentation.
fn pretty_json<T: Serialize>(value: &T) -> String {
    // Claims documents are finite JSON trees with string keys, so
    // serialization cannot fail.
    serde_json::to_string_pretty(value).expect("JSON document serialization")
}
