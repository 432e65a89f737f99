//! Token types carried by an authenticated session.
//!
//! A session holds two tokens from the identity provider: an opaque access
//! token and a JWT-shaped identity token. The identity token's payload is
//! decoded for display only; nothing here validates signatures or expiry.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::TokenDecodeError;

/// A JSON claims document.
///
/// Keys iterate in the order the provider sent them, so a serialized
/// dump reads the same as the original document.
pub type ClaimMap = serde_json::Map<String, serde_json::Value>;

/// Opaque access token issued alongside the identity token.
///
/// The platform never inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates an access token from a string.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no token is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccessToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AccessToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An identity token together with its decoded payload.
///
/// The raw compact form is kept verbatim for display. The payload is the
/// decoded middle segment, or `None` when the token is absent or does not
/// decode. An undecodable token is not an error at this level: the raw
/// string is still shown, only the payload view is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityToken {
    raw: String,
    payload: Option<ClaimMap>,
}

impl IdentityToken {
    /// Creates an identity token from its compact serialized form,
    /// decoding the payload if possible.
    #[must_use]
    pub fn from_raw(raw: String) -> Self {
        if raw.is_empty() {
            return Self::empty();
        }

        let payload = match Self::decode_payload(&raw) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!(error = %e, "identity token payload not decodable");
                None
            }
        };

        Self { raw, payload }
    }

    /// Creates the absent token.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            raw: String::new(),
            payload: None,
        }
    }

    /// Decodes the payload segment of a compact token.
    ///
    /// Tokens are `base64url(header).base64url(payload).signature`. Only the
    /// payload segment is decoded; the signature may be empty, as it is for
    /// unsigned development tokens.
    pub fn decode_payload(raw: &str) -> Result<ClaimMap, TokenDecodeError> {
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenDecodeError::MalformedToken {
                segments: segments.len(),
            });
        }

        let payload_bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(segments[1])
            .map_err(|e| TokenDecodeError::PayloadDecode {
                details: e.to_string(),
            })?;

        let payload: serde_json::Value =
            serde_json::from_slice(&payload_bytes).map_err(|e| TokenDecodeError::PayloadParse {
                details: e.to_string(),
            })?;

        match payload {
            serde_json::Value::Object(claims) => Ok(claims),
            _ => Err(TokenDecodeError::PayloadNotObject),
        }
    }

    /// Returns the compact serialized token, or the empty string when absent.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the decoded payload, if the token carried one.
    #[must_use]
    pub fn payload(&self) -> Option<&ClaimMap> {
        self.payload.as_ref()
    }

    /// Returns true if no token is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// The token pair held by a session, as handed to the UI.
///
/// An anonymous session carries both tokens empty rather than being a
/// distinct shape; the display layer renders empty values as empty panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTokens {
    access_token: AccessToken,
    identity_token: IdentityToken,
}

impl SessionTokens {
    /// Creates a token pair.
    #[must_use]
    pub fn new(access_token: AccessToken, identity_token: IdentityToken) -> Self {
        Self {
            access_token,
            identity_token,
        }
    }

    /// Creates the token pair of an anonymous session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            access_token: AccessToken::new(String::new()),
            identity_token: IdentityToken::empty(),
        }
    }

    /// Returns the access token.
    #[must_use]
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the identity token.
    #[must_use]
    pub fn identity_token(&self) -> &IdentityToken {
        &self.identity_token
    }

    /// Returns true if either token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty() || !self.identity_token.is_empty()
    }
}
