//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The only client-held state is the session: one `AuthState` owned by the
//! root component and passed down as read-only context. Everything else is
//! recomputed from the URL on each render.

pub mod auth;
