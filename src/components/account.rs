//! Account strip: login-or-logout control plus an informational message.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::login_control::LoginControl;
use crate::components::logout_control::LogoutControl;
use crate::net::types::User;
use crate::state::auth::AuthState;

/// Which control the account strip shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountControl {
    /// No session: login form carrying the post-login redirect hint.
    Login { redirect: Option<String> },
    /// Active session: logout form bound to the display name.
    Logout { name: String },
}

/// Select the control for the current session state.
pub fn select_control(user: Option<&User>, redirect: Option<String>) -> AccountControl {
    match user {
        Some(user) => AccountControl::Logout {
            name: user.name.clone(),
        },
        None => AccountControl::Login { redirect },
    }
}

/// Account strip shown on `/`.
///
/// Renders the logout control when a session is present, the login control
/// otherwise, and echoes the `msg` query parameter alongside.
#[component]
pub fn Account() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();

    let control = move || {
        let state = auth.get();
        let redirect = query.get().get("redirect_uri");
        match select_control(state.user.as_ref(), redirect) {
            AccountControl::Login { redirect } => {
                view! { <LoginControl redirect=redirect/> }.into_any()
            }
            AccountControl::Logout { name } => {
                view! { <LogoutControl name=name/> }.into_any()
            }
        }
    };

    let message = move || query.get().get("msg").unwrap_or_default();

    view! {
        <div class="account-strip">
            <div class="account-strip__control">{control}</div>
            <div class="account-strip__message">{message}</div>
        </div>
    }
}
