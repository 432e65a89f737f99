//! Reactive session context consumed by the UI.
//!
//! This module is the boundary between the views and the session
//! collaborator. `SessionProvider` owns the reactive state: two resources
//! backed by server functions, projected into read-only signals for the
//! token pair, the profile document, and the profile loading state.
//! Components reach it through `use_session` (the logout capability) and
//! `use_session_state` (the read slots); nothing below the provider
//! mutates session state directly.

use std::sync::Arc;

use glasspane_session::{ProfileLoadingState, SessionTokens, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Server function returning the current session's token pair.
///
/// An absent, unknown, or expired session is `Ok(None)`, not an error:
/// the client renders that as an anonymous session.
#[server]
pub async fn get_session_tokens() -> Result<Option<SessionTokens>, ServerFnError> {
    use crate::error::SessionError;
    use crate::server_helpers::get_authenticated_session;

    match get_authenticated_session().await {
        Ok(auth) => Ok(Some(auth.record.tokens().clone())),
        Err(e @ SessionError::Extraction { .. }) => {
            tracing::error!(error = %e, "Failed to read request state for token fetch");
            Err(e.into_server_error())
        }
        Err(e) => {
            tracing::debug!(error = %e, "No authenticated session for token fetch");
            Ok(None)
        }
    }
}

/// Server function returning the current session's user profile document.
#[server]
pub async fn get_user_profile() -> Result<Option<UserProfile>, ServerFnError> {
    use crate::error::SessionError;
    use crate::server_helpers::get_authenticated_session;

    match get_authenticated_session().await {
        Ok(auth) => Ok(Some(auth.record.profile().clone())),
        Err(e @ SessionError::Extraction { .. }) => {
            tracing::error!(error = %e, "Failed to read request state for profile fetch");
            Err(e.into_server_error())
        }
        Err(e) => {
            tracing::debug!(error = %e, "No authenticated session for profile fetch");
            Ok(None)
        }
    }
}

/// Server function ending the current session.
///
/// Deletes the session record; the cookie is left to expire on its own.
/// Ending a session that no longer exists is a no-op, not an error.
#[server]
pub async fn end_session() -> Result<(), ServerFnError> {
    use crate::auth::SESSION_COOKIE;
    use crate::error::SessionError;
    use crate::server_helpers::get_session_store;
    use axum_extra::extract::CookieJar;
    use glasspane_session::SessionId;

    let jar: CookieJar = leptos_axum::extract().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to extract cookie jar for logout");
        SessionError::Extraction {
            details: e.to_string(),
        }
        .into_server_error()
    })?;

    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(());
    };

    let session_id = SessionId::new(cookie.value().to_string());
    let store = get_session_store();
    if store.delete(&session_id).await {
        tracing::info!(session_id = %session_id, "Session ended");
    }

    Ok(())
}

/// Read-only session state: the slots the session view subscribes to.
///
/// All three signals are owned by `SessionProvider`; reading them inside
/// a reactive scope re-runs that scope whenever the provider refetches.
#[derive(Clone, Copy)]
pub struct SessionState {
    tokens: Signal<SessionTokens>,
    profile: Signal<Option<UserProfile>>,
    loading_state: Signal<ProfileLoadingState>,
}

impl SessionState {
    pub(crate) fn new(
        tokens: Signal<SessionTokens>,
        profile: Signal<Option<UserProfile>>,
        loading_state: Signal<ProfileLoadingState>,
    ) -> Self {
        Self {
            tokens,
            profile,
            loading_state,
        }
    }

    /// Current token pair; anonymous until the first fetch resolves.
    pub fn tokens(&self) -> SessionTokens {
        self.tokens.get()
    }

    /// Current user profile document, if one has arrived.
    pub fn profile(&self) -> Option<UserProfile> {
        self.profile.get()
    }

    /// Where the profile fetch currently stands.
    pub fn loading_state(&self) -> ProfileLoadingState {
        self.loading_state.get()
    }
}

/// The collaborator's logout operation, injected into the session handle.
///
/// One `invoke` forwards exactly one logout request. The provider wires
/// in the real server call; tests substitute a counting callback.
#[derive(Clone)]
pub struct LogoutAction(Arc<dyn Fn() + Send + Sync>);

impl LogoutAction {
    pub(crate) fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    fn invoke(&self) {
        (self.0)()
    }
}

/// The session capability handed to components: an authenticated flag for
/// gating views, and the logout action.
#[derive(Clone)]
pub struct SessionHandle {
    authenticated: Signal<bool>,
    logout: LogoutAction,
}

impl SessionHandle {
    pub(crate) fn new(authenticated: Signal<bool>, logout: LogoutAction) -> Self {
        Self {
            authenticated,
            logout,
        }
    }

    /// True when the current session carries tokens.
    pub fn authenticated(&self) -> Signal<bool> {
        self.authenticated
    }

    /// Ends the session, fire-and-forget.
    ///
    /// One call forwards exactly one logout invocation to the
    /// collaborator. The visible state change (panels going empty) comes
    /// from the refetch that follows, not from any local mutation here.
    pub fn logout(&self) {
        self.logout.invoke()
    }
}

/// Returns the session capability installed by `SessionProvider`.
///
/// Panics when called outside a `<SessionProvider/>` subtree.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
        .expect("use_session must be called inside a <SessionProvider/>")
}

/// Returns the read-only session state installed by `SessionProvider`.
///
/// Panics when called outside a `<SessionProvider/>` subtree.
pub fn use_session_state() -> SessionState {
    use_context::<SessionState>()
        .expect("use_session_state must be called inside a <SessionProvider/>")
}

/// Maps a profile-fetch outcome to the loading state the view branches on.
fn profile_loading_state(
    outcome: Option<Result<Option<UserProfile>, ServerFnError>>,
) -> ProfileLoadingState {
    match outcome {
        None => ProfileLoadingState::Loading,
        Some(Err(_)) => ProfileLoadingState::LoadingError,
        Some(Ok(_)) => ProfileLoadingState::Loaded,
    }
}

/// Owns the session resources and provides `SessionState` and
/// `SessionHandle` as context for the subtree.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let tokens_resource = Resource::new(|| (), |_| get_session_tokens());
    let profile_resource = Resource::new(|| (), |_| get_user_profile());

    let tokens = Signal::derive(move || {
        tokens_resource
            .get()
            .and_then(|result| result.ok())
            .flatten()
            .unwrap_or_else(SessionTokens::anonymous)
    });
    let profile = Signal::derive(move || {
        profile_resource
            .get()
            .and_then(|result| result.ok())
            .flatten()
    });
    let loading_state = Signal::derive(move || profile_loading_state(profile_resource.get()));
    let authenticated = Signal::derive(move || tokens.get().is_authenticated());

    let logout = LogoutAction::new(move || {
        spawn_local(async move {
            if let Err(e) = end_session().await {
                leptos::logging::warn!("logout failed: {e}");
            }
            tokens_resource.refetch();
            profile_resource.refetch();
        });
    });

    provide_context(SessionState::new(tokens, profile, loading_state));
    provide_context(SessionHandle::new(authenticated, logout));

    children()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glasspane_session::ClaimMap;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn logout_invokes_collaborator_exactly_once_per_call() {
        let owner = Owner::new();
        owner.set();

        let invocations = Arc::new(AtomicUsize::new(0));
        let handle = SessionHandle::new(Signal::derive(|| true), {
            let invocations = Arc::clone(&invocations);
            LogoutAction::new(move || {
                invocations.fetch_add(1, Ordering::SeqCst);
            })
        });

        handle.logout();
        assert_eq!(invocations.load(Ordering::SeqCst), 1);

        handle.logout();
        handle.logout();
        assert_eq!(invocations.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn cloned_handle_forwards_to_the_same_collaborator() {
        let owner = Owner::new();
        owner.set();

        let invocations = Arc::new(AtomicUsize::new(0));
        let handle = SessionHandle::new(Signal::derive(|| true), {
            let invocations = Arc::clone(&invocations);
            LogoutAction::new(move || {
                invocations.fetch_add(1, Ordering::SeqCst);
            })
        });

        handle.clone().logout();
        handle.logout();
        assert_eq!(invocations.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn pending_fetch_maps_to_loading() {
        assert_eq!(profile_loading_state(None), ProfileLoadingState::Loading);
    }

    #[test]
    fn failed_fetch_maps_to_loading_error() {
        let outcome = Some(Err(ServerFnError::new("profile fetch failed")));
        assert_eq!(profile_loading_state(outcome), ProfileLoadingState::LoadingError);
    }

    #[test]
    fn resolved_fetch_without_document_maps_to_loaded() {
        assert_eq!(
            profile_loading_state(Some(Ok(None))),
            ProfileLoadingState::Loaded
        );
    }

    #[test]
    fn resolved_fetch_with_document_maps_to_loaded() {
        let mut claims = ClaimMap::new();
        claims.insert("sub".to_string(), json!("user_1"));
        let outcome = Some(Ok(Some(UserProfile::new(claims))));

        assert_eq!(profile_loading_state(outcome), ProfileLoadingState::Loaded);
    }
}
