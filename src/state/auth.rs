#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and the startup fetch.
///
/// `loading` starts true and flips false exactly once when the identity
/// fetch resolves, whether or not a user came back. The state is never
/// touched again after that.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Record the outcome of the identity fetch.
    ///
    /// Fetch failures of any kind arrive here as `None`; "network error"
    /// and "unauthorized" are intentionally indistinguishable.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }
}
