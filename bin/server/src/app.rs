//! Main Leptos application component and routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{HomePage, SessionPage};
use crate::session::{SessionProvider, use_session};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="glasspane"/>
        <SessionProvider>
            <Router>
                <Header/>
                <main class="container">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/session") view=SessionPage/>
                    </Routes>
                </main>
            </Router>
        </SessionProvider>
    }
}

/// Header component with navigation and session controls.
#[component]
fn Header() -> impl IntoView {
    let session = use_session();
    let authenticated = session.authenticated();

    view! {
        <header class="header">
            <div class="header-left">
                <a href="/" class="logo">"glasspane"</a>
            </div>
            <div class="header-right">
                {move || {
                    if authenticated.get() {
                        view! {
                            <a href="/session" class="nav-link">"Session"</a>
                        }.into_any()
                    } else {
                        view! {
                            <a href="/auth/login" rel="external" class="login-button">"Log in"</a>
                        }.into_any()
                    }
                }}
            </div>
        </header>
    }
}
