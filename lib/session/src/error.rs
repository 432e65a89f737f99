//! Error types for the session crate.

use std::fmt;

/// Errors from decoding the payload segment of an identity token.
///
/// Decoding here is presentational only. The token is split and parsed so
/// its claims can be shown, never to establish trust, so there are no
/// signature or expiry variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenDecodeError {
    /// Token is not three dot-separated segments.
    MalformedToken { segments: usize },
    /// Payload segment is not valid base64url.
    PayloadDecode { details: String },
    /// Payload bytes are not valid JSON.
    PayloadParse { details: String },
    /// Payload JSON is not an object.
    PayloadNotObject,
}

impl fmt::Display for TokenDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedToken { segments } => {
                write!(f, "malformed token: expected 3 segments, found {segments}")
            }
            Self::PayloadDecode { details } => {
                write!(f, "failed to decode token payload: {details}")
            }
            Self::PayloadParse { details } => {
                write!(f, "failed to parse token payload: {details}")
            }
            Self::PayloadNotObject => {
                write!(f, "token payload is not a JSON object")
            }
        }
    }
}

impl std::error::Error for TokenDecodeError {}
