use super::*;

fn alice() -> User {
    User {
        name: "alice".to_owned(),
    }
}

// =============================================================
// Control selection
// =============================================================

#[test]
fn session_present_selects_logout_with_display_name() {
    let user = alice();
    let control = select_control(Some(&user), Some("/next".to_owned()));
    assert_eq!(
        control,
        AccountControl::Logout {
            name: "alice".to_owned()
        }
    );
}

#[test]
fn no_session_selects_login_with_redirect_forwarded() {
    let control = select_control(None, Some("/next".to_owned()));
    assert_eq!(
        control,
        AccountControl::Login {
            redirect: Some("/next".to_owned())
        }
    );
}

#[test]
fn no_session_without_redirect_still_selects_login() {
    let control = select_control(None, None);
    assert_eq!(control, AccountControl::Login { redirect: None });
}

#[test]
fn session_present_ignores_redirect_hint() {
    let user = alice();
    let control = select_control(Some(&user), Some("/ignored".to_owned()));
    assert!(matches!(control, AccountControl::Logout { .. }));
}
