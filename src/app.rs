//! Root application component: header, routing, and the one-shot session fetch.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::account::Account;
use crate::components::oauth_ask::OAuthAsk;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;

/// Application display name shown in the header and page title.
///
/// Overridable at compile time via the `APP_NAME` env var.
pub fn app_name() -> &'static str {
    option_env!("APP_NAME").unwrap_or("Authsvc")
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Fetches the current user once on mount and provides the result to the
/// route tree as shared auth state. Any fetch failure collapses to "no
/// session"; nothing is retried, polled, or surfaced to the user.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|state| state.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/authsvc-web.css"/>
        <Title text=app_name()/>

        <header class="app-header">
            <h1>{app_name()}</h1>
        </header>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Account/>
                <Route path=(StaticSegment("oauth"), StaticSegment("ask")) view=OAuthAsk/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
            </Routes>
        </Router>
    }
}
