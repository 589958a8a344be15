//! Logout form bound to the current session's display name.

use leptos::prelude::*;

/// Logout form showing who is signed in.
#[component]
pub fn LogoutControl(name: String) -> impl IntoView {
    view! {
        <form action="/auth/logout/" method="POST">
            <span class="logout-control__name">{name}</span>
            <input type="submit" name="submit" value="Logout"/>
        </form>
    }
}
