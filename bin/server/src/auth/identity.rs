//! Development identity stub.
//!
//! Mints the material a real identity provider would hand back after a
//! login: a JWT-shaped identity token, an opaque access token, and a
//! userinfo document. The identity token is unsigned (`alg: none`, empty
//! signature segment) so it decodes for display but carries no trust.

use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use glasspane_session::{AccessToken, ClaimMap, IdentityToken, SessionTokens, UserProfile};
use serde_json::json;

use crate::config::IdentityConfig;

/// Audience claim stamped into minted identity tokens.
const TOKEN_AUDIENCE: &str = "glasspane-demo";

/// Tokens and profile for a freshly minted demo session.
#[derive(Debug, Clone)]
pub struct MintedSession {
    pub tokens: SessionTokens,
    pub profile: UserProfile,
}

/// Mints a session for the configured identity, valid for `valid_for`
/// from `issued_at`.
pub fn mint_session(
    identity: &IdentityConfig,
    issued_at: DateTime<Utc>,
    valid_for: Duration,
) -> MintedSession {
    let claims = identity_claims(identity, issued_at, valid_for);
    let identity_token = IdentityToken::from_raw(encode_unsigned_token(&claims));
    let access_token = AccessToken::new(ulid::Ulid::new().to_string());

    MintedSession {
        tokens: SessionTokens::new(access_token, identity_token),
        profile: UserProfile::new(profile_claims(identity)),
    }
}

/// Builds the identity-token claims document, in the order a provider
/// conventionally emits them.
fn identity_claims(
    identity: &IdentityConfig,
    issued_at: DateTime<Utc>,
    valid_for: Duration,
) -> ClaimMap {
    let mut claims = ClaimMap::new();
    claims.insert("iss".to_string(), json!(identity.issuer));
    claims.insert("sub".to_string(), json!(identity.subject));
    claims.insert("aud".to_string(), json!(TOKEN_AUDIENCE));
    claims.insert("iat".to_string(), json!(issued_at.timestamp()));
    claims.insert(
        "exp".to_string(),
        json!((issued_at + valid_for).timestamp()),
    );
    claims.insert("name".to_string(), json!(identity.display_name));
    claims.insert("email".to_string(), json!(identity.email));
    claims.insert("groups".to_string(), json!(identity.groups));
    claims
}

/// Builds the userinfo document for the configured identity.
fn profile_claims(identity: &IdentityConfig) -> ClaimMap {
    let mut claims = ClaimMap::new();
    claims.insert("sub".to_string(), json!(identity.subject));
    claims.insert("name".to_string(), json!(identity.display_name));
    claims.insert("email".to_string(), json!(identity.email));
    claims.insert("groups".to_string(), json!(identity.groups));
    claims
}

/// Serializes claims as an unsigned compact JWT:
/// `base64url(header).base64url(claims).` with an empty signature.
fn encode_unsigned_token(claims: &ClaimMap) -> String {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = engine.encode(
        serde_json::to_string(claims)
            .expect("claims document serialization")
            .as_bytes(),
    );
    format!("{header}.{payload}.")
}
