//! Authentication routes for login and logout.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Duration as ChronoDuration;
use glasspane_session::SessionId;
use std::sync::Arc;
use time::Duration as TimeDuration;

use super::{
    AppState, SESSION_COOKIE, identity,
    store::{SessionRecord, generate_session_id},
};

/// Establishes a demo session and redirects home.
///
/// Stands in for the full OIDC redirect/callback round trip: the identity
/// stub mints the tokens a provider would return, the session is stored,
/// and the session cookie is set.
pub async fn login(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    let duration = ChronoDuration::minutes(state.session_config.duration_minutes);
    let minted = identity::mint_session(&state.identity_config, chrono::Utc::now(), duration);

    let session_id = generate_session_id();
    let record = SessionRecord::new(minted.tokens, minted.profile, duration);
    state.store.create(session_id.clone(), record).await;

    tracing::info!(session_id = %session_id, "Session established");

    let session_cookie = Cookie::build((SESSION_COOKIE, session_id.as_str().to_string()))
        .path("/")
        .http_only(true)
        .secure(state.session_config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(
            state.session_config.duration_minutes,
        ));

    (jar.add(session_cookie), Redirect::to("/"))
}

/// Logs out the user by deleting their session.
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    if let Some(session_cookie) = jar.get(SESSION_COOKIE) {
        let session_id = SessionId::new(session_cookie.value().to_string());
        if state.store.delete(&session_id).await {
            tracing::info!(session_id = %session_id, "Session ended");
        }
    }

    // Remove session cookie
    let remove_session = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(TimeDuration::ZERO);

    (jar.add(remove_session), Redirect::to("/"))
}
