//! OAuth consent prompt keyed by the correlation token in the query string.

#[cfg(test)]
#[path = "oauth_ask_test.rs"]
mod oauth_ask_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Label used when the requesting application did not supply a name.
const GENERIC_APP_LABEL: &str = "application";

/// Consent prompt view-model extracted from the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentRequest {
    /// Correlation token tying this prompt to a pending authorization
    /// request on the server. Forwarded as a hidden form field, never
    /// interpreted client-side.
    pub corr: String,
    /// Display name of the requesting application, if supplied.
    pub app_name: Option<String>,
}

impl ConsentRequest {
    /// Build the view-model from the `id` and `app` query values.
    ///
    /// Without a correlation token there is nothing to ask; empty values
    /// count as absent.
    pub fn from_query(id: Option<String>, app: Option<String>) -> Option<Self> {
        let corr = id.filter(|id| !id.is_empty())?;
        Some(Self {
            corr,
            app_name: app.filter(|app| !app.is_empty()),
        })
    }

    /// Heading for the consent prompt.
    pub fn heading(&self) -> String {
        format!(
            "Allow {} access?",
            self.app_name.as_deref().unwrap_or(GENERIC_APP_LABEL)
        )
    }
}

/// Consent prompt shown on `/oauth/ask`.
///
/// Renders an approve/deny form carrying the correlation token, or an empty
/// placeholder when the query string has no `id`.
#[component]
pub fn OAuthAsk() -> impl IntoView {
    let query = use_query_map();

    move || {
        let q = query.get();
        match ConsentRequest::from_query(q.get("id"), q.get("app")) {
            Some(request) => view! {
                <div class="oauth-ask">
                    <h3>{request.heading()}</h3>
                    <form action="/oauth/approve" method="post">
                        <input type="hidden" name="corr" value=request.corr/>
                        <input type="submit" name="approve" value="Approve"/>
                        <input type="submit" name="deny" value="Deny"/>
                    </form>
                </div>
            }
            .into_any(),
            None => view! { <span class="nothing-here"></span> }.into_any(),
        }
    }
}
