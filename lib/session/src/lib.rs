//! Session state and display derivation for glasspane.
//!
//! This crate provides:
//! - Token types (`AccessToken`, `IdentityToken`, `SessionTokens`)
//! - The user profile document (`UserProfile`) and its loading lifecycle
//!   (`ProfileLoadingState`)
//! - The pure display derivation (`SessionDisplay`) the UI renders from
//!
//! Tokens are treated as data to show, not credentials to verify: the
//! identity token payload is decoded without any signature or expiry
//! checks, and claims documents keep the provider's key order so a dump
//! reads exactly as the provider sent it.
//!
//! # Example
//!
//! ```
//! use glasspane_session::{
//!     AccessToken, IdentityToken, ProfileLoadingState, SessionDisplay, SessionTokens,
//! };
//!
//! let tokens = SessionTokens::new(
//!     AccessToken::new("opaque-access".to_string()),
//!     IdentityToken::from_raw("not-a-decodable-token".to_string()),
//! );
//!
//! // While the profile loads, the user panel shows a fixed message and
//! // the token panels are already populated.
//! let display = SessionDisplay::derive(&tokens, None, ProfileLoadingState::Loading);
//! assert_eq!(display.access_token(), "opaque-access");
//! assert_eq!(display.identity_token(), "not-a-decodable-token");
//! assert!(display.identity_payload().is_none());
//! ```

pub mod display;
pub mod error;
pub mod profile;
pub mod session;
pub mod token;

// Re-export main types at crate root
pub use display::{
    PROFILE_LOAD_FAILED_MESSAGE, PROFILE_LOADING_MESSAGE, SessionDisplay, UserInfoContent,
};
pub use error::TokenDecodeError;
pub use profile::{ProfileLoadingState, UserProfile};
pub use session::SessionId;
pub use token::{AccessToken, ClaimMap, IdentityToken, SessionTokens};
