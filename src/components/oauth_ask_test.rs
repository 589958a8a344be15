use super::*;

// =============================================================
// View-model construction
// =============================================================

#[test]
fn missing_id_yields_no_prompt() {
    assert_eq!(
        ConsentRequest::from_query(None, Some("Demo".to_owned())),
        None
    );
}

#[test]
fn empty_id_yields_no_prompt() {
    assert_eq!(ConsentRequest::from_query(Some(String::new()), None), None);
}

#[test]
fn id_becomes_correlation_token() {
    let request = ConsentRequest::from_query(Some("42".to_owned()), None).unwrap();
    assert_eq!(request.corr, "42");
}

#[test]
fn app_name_is_carried_through() {
    let request =
        ConsentRequest::from_query(Some("42".to_owned()), Some("Demo".to_owned())).unwrap();
    assert_eq!(request.app_name.as_deref(), Some("Demo"));
}

#[test]
fn empty_app_name_counts_as_absent() {
    let request =
        ConsentRequest::from_query(Some("42".to_owned()), Some(String::new())).unwrap();
    assert_eq!(request.app_name, None);
}

// =============================================================
// Heading
// =============================================================

#[test]
fn heading_includes_app_name() {
    let request =
        ConsentRequest::from_query(Some("42".to_owned()), Some("Demo".to_owned())).unwrap();
    assert_eq!(request.heading(), "Allow Demo access?");
}

#[test]
fn heading_falls_back_to_generic_label() {
    let request = ConsentRequest::from_query(Some("42".to_owned()), None).unwrap();
    assert_eq!(request.heading(), "Allow application access?");
}
