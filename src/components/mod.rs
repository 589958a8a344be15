//! View components: the account strip, its login/logout forms, and the
//! OAuth consent prompt.

pub mod account;
pub mod login_control;
pub mod logout_control;
pub mod oauth_ask;
