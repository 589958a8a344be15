//! REST helper for the identity endpoint.
//!
//! Client-side (hydrate): a real HTTP call via `gloo-net`.
//! Server-side (SSR): a stub returning `None`, since session identity is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (network error, non-2xx status, bad JSON) collapses to
//! `None` so the UI degrades to the logged-out view without crashing
//! hydration. Nothing is retried and nothing is logged.

#![allow(clippy::unused_async)]

use super::types::User;

/// Endpoint serving the current session's user record.
pub const USER_ENDPOINT: &str = "/api/v4/user";

/// Fetch the currently authenticated user.
///
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
