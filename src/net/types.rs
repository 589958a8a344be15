//! Wire DTOs for the identity endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `GET /api/v4/user`.
///
/// The server may send additional fields; only the display name matters
/// client-side and the rest are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name shown in the logout control.
    pub name: String,
}
