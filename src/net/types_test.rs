use super::*;

#[test]
fn user_deserializes_from_identity_body() {
    let user: User = serde_json::from_str(r#"{"name":"alice"}"#).unwrap();
    assert_eq!(user.name, "alice");
}

#[test]
fn user_ignores_extra_server_fields() {
    let body = r#"{"name":"alice","id":"u1","groups":["admin"]}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.name, "alice");
}

#[test]
fn user_without_name_is_rejected() {
    let result = serde_json::from_str::<User>(r#"{"id":"u1"}"#);
    assert!(result.is_err());
}
