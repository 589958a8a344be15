//! Login form posting to the server's login endpoint.

use leptos::prelude::*;

/// Login form carrying an opaque post-login redirect hint.
///
/// A plain full-page POST with fixed field names; no client-side validation,
/// all semantics deferred to the server's form handler. The redirect hint is
/// forwarded untouched and unvalidated.
#[component]
pub fn LoginControl(redirect: Option<String>) -> impl IntoView {
    view! {
        <form action="/auth/login/" method="POST">
            <input type="hidden" name="redirect_uri" value=redirect.unwrap_or_default()/>
            <input type="text" placeholder="username" name="username"/>
            <input type="password" placeholder="password" name="password"/>
            <input type="submit" name="submit" value="Login"/>
        </form>
    }
}
