//! User profile document and its loading lifecycle.

use serde::{Deserialize, Serialize};

use crate::token::ClaimMap;

/// Claims document describing the authenticated user.
///
/// The document is kept as the provider returned it, claim order included.
/// No claim is required; consumers that need a specific claim look it up
/// and handle absence themselves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(ClaimMap);

impl UserProfile {
    /// Creates a profile from a claims document.
    #[must_use]
    pub fn new(claims: ClaimMap) -> Self {
        Self(claims)
    }

    /// Returns the full claims document.
    #[must_use]
    pub fn claims(&self) -> &ClaimMap {
        &self.0
    }

    /// Returns a single claim by name.
    #[must_use]
    pub fn get(&self, claim: &str) -> Option<&serde_json::Value> {
        self.0.get(claim)
    }

    /// Returns true if the document has no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ClaimMap> for UserProfile {
    fn from(claims: ClaimMap) -> Self {
        Self(claims)
    }
}

/// Where the user profile fetch currently stands.
///
/// Exactly one of these holds at any time. `Loaded` covers both a present
/// and an absent document; presence is a separate input to the display
/// derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileLoadingState {
    /// The profile request is still in flight.
    Loading,
    /// The profile request failed.
    LoadingError,
    /// The profile request completed.
    Loaded,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_claims() -> ClaimMap {
        let mut claims = ClaimMap::new();
        claims.insert("sub".to_string(), json!("user_1"));
        claims.insert("name".to_string(), json!("Alice"));
        claims.insert("email".to_string(), json!("alice@example.com"));
        claims
    }

    #[test]
    fn get_returns_claim_by_name() {
        let profile = UserProfile::new(sample_claims());

        assert_eq!(profile.get("name"), Some(&json!("Alice")));
        assert_eq!(profile.get("missing"), None);
    }

    #[test]
    fn claims_iterate_in_insertion_order() {
        let profile = UserProfile::new(sample_claims());
        let keys: Vec<&String> = profile.claims().keys().collect();

        assert_eq!(keys, ["sub", "name", "email"]);
    }

    #[test]
    fn empty_profile_has_no_claims() {
        let profile = UserProfile::default();

        assert!(profile.is_empty());
        assert_eq!(profile.get("sub"), None);
    }

    #[test]
    fn profile_deserializes_from_bare_object() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"sub":"user_1","groups":["a","b"]}"#).expect("deserialize");

        assert_eq!(profile.get("sub"), Some(&json!("user_1")));
        assert_eq!(profile.get("groups"), Some(&json!(["a", "b"])));
    }
}
