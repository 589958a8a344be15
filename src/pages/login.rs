//! Bare login page for the `/auth/login/` route.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::login_control::LoginControl;

/// Bare login view: just the login form, with the redirect hint forwarded.
#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();

    view! {
        <div class="login-page">
            {move || {
                let redirect = query.get().get("redirect_uri");
                view! { <LoginControl redirect=redirect/> }
            }}
        </div>
    }
}
