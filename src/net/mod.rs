//! Networking: the identity endpoint and its wire types.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client makes exactly one HTTP call itself (the session fetch in
//! `api`); all other server interaction happens through full-page HTML form
//! submissions rendered by the components.

pub mod api;
pub mod types;
