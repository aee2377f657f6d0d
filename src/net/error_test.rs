use super::*;

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn field_errors_parse_list_values() {
    let errors = FieldErrors::from_body(r#"{"email": ["Invalid email"]}"#).unwrap();
    assert_eq!(errors.message("email").as_deref(), Some("Invalid email"));
    assert_eq!(errors.message("password"), None);
}

#[test]
fn multiple_messages_are_joined_with_a_space() {
    let errors = FieldErrors::from_body(r#"{"password": ["Too short.", "Too common."]}"#).unwrap();
    assert_eq!(errors.message("password").as_deref(), Some("Too short. Too common."));
}

#[test]
fn plain_string_values_are_accepted() {
    let errors = FieldErrors::from_body(r#"{"detail": "Not allowed"}"#).unwrap();
    assert_eq!(errors.message("detail").as_deref(), Some("Not allowed"));
}

#[test]
fn non_field_errors_are_exposed_separately() {
    let errors =
        FieldErrors::from_body(r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#).unwrap();
    assert_eq!(errors.non_field().as_deref(), Some("Unable to log in with provided credentials."));
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["non_field_errors"]);
}

#[test]
fn null_and_empty_values_are_dropped() {
    let errors = FieldErrors::from_body(r#"{"email": null, "password": []}"#).unwrap();
    assert!(errors.is_empty());
}

#[test]
fn non_object_bodies_are_not_validation_payloads() {
    assert_eq!(FieldErrors::from_body("[\"oops\"]"), None);
    assert_eq!(FieldErrors::from_body("<html>Bad Request</html>"), None);
    assert_eq!(FieldErrors::from_body(""), None);
}

#[test]
fn list_messages_are_joined_with_spaces() {
    let errors = FieldErrors::from_body(r#"{"email": ["first", "second"]}"#).unwrap();
    assert_eq!(errors.message("email").as_deref(), Some("first second"));
}

// =============================================================
// ApiError classification
// =============================================================

#[test]
fn unauthorized_and_forbidden_are_auth_errors() {
    assert_eq!(ApiError::from_status(401, r#"{"detail": "Invalid token."}"#), ApiError::Auth);
    assert_eq!(ApiError::from_status(403, ""), ApiError::Auth);
    assert!(ApiError::Auth.is_auth());
}

#[test]
fn bad_request_with_object_is_validation() {
    let error = ApiError::from_status(400, r#"{"email": ["Enter a valid email address."]}"#);
    let ApiError::Validation(fields) = error else {
        panic!("expected validation error");
    };
    assert_eq!(fields.message("email").as_deref(), Some("Enter a valid email address."));
}

#[test]
fn bad_request_without_payload_is_server_error() {
    assert_eq!(ApiError::from_status(400, "Bad Request"), ApiError::Server(400));
    assert_eq!(ApiError::from_status(400, "{}"), ApiError::Server(400));
}

#[test]
fn other_statuses_are_server_errors() {
    assert_eq!(ApiError::from_status(500, ""), ApiError::Server(500));
    assert_eq!(ApiError::from_status(404, "{}"), ApiError::Server(404));
}

#[test]
fn transport_message_is_never_empty() {
    let message = ApiError::Transport(String::new()).user_message();
    assert_eq!(message, UNREACHABLE_MESSAGE);
}

#[test]
fn server_message_names_the_status() {
    assert!(ApiError::Server(502).user_message().contains("502"));
}
