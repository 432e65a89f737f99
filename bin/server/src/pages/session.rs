//! Session page and the authenticated session view.

use glasspane_session::{SessionDisplay, UserInfoContent};
use leptos::prelude::*;

use crate::session::{use_session, use_session_state};

/// Session page: a login prompt when unauthenticated, the session view
/// otherwise.
#[component]
pub fn SessionPage() -> impl IntoView {
    let session = use_session();
    let authenticated = session.authenticated();

    view! {
        <div class="session-page">
            {move || {
                if authenticated.get() {
                    view! { <SessionInfo/> }.into_any()
                } else {
                    view! {
                        <div class="login-prompt">
                            <p>"Please log in to view your session."</p>
                            <a href="/auth/login" rel="external" class="login-button">"Log in"</a>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// Read-only view of the current session.
///
/// Four panels: a welcome card with the logout control, the raw access
/// token, the raw identity token with its decoded payload when one is
/// present, and the user profile document gated by its loading state.
/// Everything shown comes from [`SessionDisplay::derive`]; the only action
/// originating here is the logout click, forwarded to the session handle
/// once per click.
#[component]
pub fn SessionInfo() -> impl IntoView {
    let session = use_session();
    let state = use_session_state();

    let display = Memo::new(move |_| {
        SessionDisplay::derive(&state.tokens(), state.profile().as_ref(), state.loading_state())
    });

    view! {
        <div class="session-info">
            <section class="card welcome-card">
                <h5 class="card-title">"Welcome!"</h5>
                <p class="card-text">"Demo application protected by OpenID Connect"</p>
                <button
                    type="button"
                    class="logout-button"
                    on:click=move |_| session.logout()
                >"Log out"</button>
            </section>

            <section class="card token-card">
                <h5 class="card-title">"Access Token"</h5>
                <p class="card-text">{move || display.get().access_token().to_string()}</p>
            </section>

            <section class="card token-card">
                <h5 class="card-title">"Identity Token"</h5>
                <p class="card-text">{move || display.get().identity_token().to_string()}</p>
                {move || {
                    display.get().identity_payload().map(|payload| view! {
                        <pre class="card-text">{payload.to_string()}</pre>
                    })
                }}
            </section>

            <section class="card profile-card">
                <h5 class="card-title">"User information"</h5>
                {move || {
                    match display.get().user_info().clone() {
                        UserInfoContent::Message(message) => {
                            view! { <p class="card-text">{message}</p> }.into_any()
                        }
                        UserInfoContent::Dump(dump) => {
                            view! { <pre class="card-text">{dump}</pre> }.into_any()
                        }
                    }
                }}
            </section>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::session::{LogoutAction, SessionHandle, SessionState};
    use base64::Engine;
    use glasspane_session::{
        AccessToken, ClaimMap, IdentityToken, PROFILE_LOAD_FAILED_MESSAGE,
        PROFILE_LOADING_MESSAGE, ProfileLoadingState, SessionTokens, UserProfile,
    };
    use serde_json::json;

    fn demo_tokens(raw_identity: &str) -> SessionTokens {
        SessionTokens::new(
            AccessToken::new("access-abc".to_string()),
            IdentityToken::from_raw(raw_identity.to_string()),
        )
    }

    fn encoded_identity_token() -> String {
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let body = engine.encode(br#"{"sub":"123"}"#);
        format!("{header}.{body}.")
    }

    fn render_session_info(
        tokens: SessionTokens,
        profile: Option<UserProfile>,
        state: ProfileLoadingState,
    ) -> String {
        let owner = Owner::new();
        owner.set();

        provide_context(SessionState::new(
            Signal::derive(move || tokens.clone()),
            Signal::derive(move || profile.clone()),
            Signal::derive(move || state),
        ));
        provide_context(SessionHandle::new(
            Signal::derive(|| true),
            LogoutAction::new(|| {}),
        ));

        view! { <SessionInfo/> }.to_html()
    }

    #[test]
    fn renders_four_panels_with_a_single_logout_control() {
        let html = render_session_info(
            demo_tokens("opaque-not-a-jwt"),
            None,
            ProfileLoadingState::Loading,
        );

        assert_eq!(html.matches("<section").count(), 4);
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("Welcome!"));
        assert!(html.contains("Access Token"));
        assert!(html.contains("Identity Token"));
        assert!(html.contains("User information"));
        assert!(html.contains("access-abc"));
        assert!(html.contains("opaque-not-a-jwt"));
    }

    #[test]
    fn loading_markup_shows_loading_message() {
        let html = render_session_info(
            demo_tokens("opaque-not-a-jwt"),
            None,
            ProfileLoadingState::Loading,
        );

        assert!(html.contains(PROFILE_LOADING_MESSAGE));
        assert!(!html.contains(PROFILE_LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn loading_error_markup_shows_failure_message() {
        let html = render_session_info(
            demo_tokens("opaque-not-a-jwt"),
            None,
            ProfileLoadingState::LoadingError,
        );

        assert!(html.contains(PROFILE_LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn loaded_markup_dumps_profile_document() {
        let mut claims = ClaimMap::new();
        claims.insert("name".to_string(), json!("Alice"));

        let html = render_session_info(
            demo_tokens("opaque-not-a-jwt"),
            Some(UserProfile::new(claims)),
            ProfileLoadingState::Loaded,
        );

        assert!(html.contains("Alice"));
        assert_eq!(html.matches("<pre").count(), 1);
    }

    #[test]
    fn identity_payload_markup_present_when_token_decodes() {
        let html = render_session_info(
            demo_tokens(&encoded_identity_token()),
            None,
            ProfileLoadingState::Loading,
        );

        assert_eq!(html.matches("<pre").count(), 1);
        assert!(html.contains("123"));
    }

    #[test]
    fn identity_payload_markup_absent_for_undecodable_token() {
        let html = render_session_info(
            demo_tokens("opaque-not-a-jwt"),
            None,
            ProfileLoadingState::Loading,
        );

        assert_eq!(html.matches("<pre").count(), 0);
    }

    #[test]
    fn anonymous_tokens_render_empty_panels_without_panicking() {
        let html = render_session_info(
            SessionTokens::anonymous(),
            None,
            ProfileLoadingState::Loaded,
        );

        assert!(html.contains("Access Token"));
        assert!(html.contains("Identity Token"));
    }
}
