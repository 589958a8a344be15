//! Full-page views selected by the router.

pub mod login;
