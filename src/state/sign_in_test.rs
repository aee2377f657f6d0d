use super::*;
use crate::config::ClientConfig;
use crate::net::error::{FieldErrors, UNREACHABLE_MESSAGE};
use crate::state::session::SessionStatus;
use crate::util::route::{AppRoute, RouteDecision, decide_route};

fn session() -> SessionStore {
    SessionStore::in_memory(&ClientConfig::default())
}

fn submitting() -> SignInForm {
    let mut form = SignInForm::default();
    assert!(form.begin_submit());
    form
}

fn validation(body: &str) -> ApiError {
    ApiError::Validation(FieldErrors::from_body(body).unwrap())
}

#[test]
fn begin_submit_enters_submitting_and_clears_errors() {
    let mut form = SignInForm {
        email_error: Some("old".to_owned()),
        alert: Some("old".to_owned()),
        ..SignInForm::default()
    };
    assert!(form.begin_submit());
    assert!(form.is_submitting());
    assert_eq!(form.email_error, None);
    assert_eq!(form.alert, None);
}

#[test]
fn duplicate_submit_is_ignored() {
    let mut form = submitting();
    assert!(!form.begin_submit());
    assert!(form.is_submitting());
}

#[test]
fn success_stores_prefixed_token_and_leaves_sign_in() {
    let session = session();
    let mut form = submitting();
    form.finish(Ok(AuthToken { token: "abc".to_owned() }), &session);
    assert_eq!(session.token().as_deref(), Some("Token abc"));
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert_eq!(
        decide_route(session.status(), &AppRoute::SignIn.path()),
        RouteDecision::Redirect(AppRoute::Recipes)
    );
}

#[test]
fn email_validation_error_is_shown_inline_and_session_unchanged() {
    let session = session();
    let mut form = submitting();
    form.finish(Err(validation(r#"{"email": ["Invalid email"]}"#)), &session);
    assert_eq!(form.email_error.as_deref(), Some("Invalid email"));
    assert_eq!(form.password_error, None);
    assert_eq!(form.alert, None);
    assert_eq!(session.token(), None);
    assert_eq!(session.status(), SessionStatus::Anonymous);
    assert!(!form.is_submitting());
}

#[test]
fn non_field_error_opens_alert() {
    let session = session();
    let mut form = submitting();
    form.finish(
        Err(validation(r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#)),
        &session,
    );
    assert_eq!(form.alert.as_deref(), Some("Unable to log in with provided credentials."));
    form.dismiss_alert();
    assert_eq!(form.alert, None);
}

#[test]
fn validation_for_unknown_fields_still_reports_something() {
    let session = session();
    let mut form = submitting();
    form.finish(Err(validation(r#"{"username": ["Required."]}"#)), &session);
    assert_eq!(form.alert.as_deref(), Some(UNPLACED_VALIDATION_MESSAGE));
}

#[test]
fn transport_failure_uses_unreachable_message() {
    let session = session();
    let mut form = submitting();
    form.finish(Err(ApiError::Transport("NetworkError".to_owned())), &session);
    assert_eq!(form.alert.as_deref(), Some(UNREACHABLE_MESSAGE));
    assert_eq!(session.token(), None);
}

#[test]
fn failed_attempt_keeps_existing_session_untouched() {
    let session = session();
    session.set_token("Token previous");
    let mut form = submitting();
    form.finish(Err(ApiError::Server(500)), &session);
    assert_eq!(session.token().as_deref(), Some("Token previous"));
    assert!(form.alert.is_some());
}
