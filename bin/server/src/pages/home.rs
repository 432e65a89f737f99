//! Home page component.

use leptos::prelude::*;

use crate::session::use_session;

/// The home page component.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let authenticated = session.authenticated();

    view! {
        <div class="home-page">
            {move || {
                if authenticated.get() {
                    view! {
                        <div>
                            <h1>"Welcome back"</h1>
                            <p>"Your session is active."</p>
                            <a href="/session" class="cta-button">"View session details"</a>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div>
                            <h1>"glasspane"</h1>
                            <p>"Demo application protected by OpenID Connect"</p>
                            <p>"Log in to inspect the tokens and profile attached to your session."</p>
                            <a href="/auth/login" rel="external" class="cta-button">"Log in"</a>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
