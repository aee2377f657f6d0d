//! Sign-in form state machine: `idle -> submitting -> {success, failed}`.
//!
//! The page owns a `RwSignal<SignInForm>` and drives it from the submit
//! handler; success writes the session and leaves navigation to the guard.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use crate::net::error::ApiError;
use crate::net::types::AuthToken;
use crate::state::session::SessionStore;

/// Shown when a 400 names only fields this form has no input for.
pub const UNPLACED_VALIDATION_MESSAGE: &str = "Unable to sign in with the provided details.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub phase: SubmitPhase,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    /// Modal message; `None` hides the dialog.
    pub alert: Option<String>,
}

impl SignInForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Enter `submitting` and clear the previous attempt's errors.
    /// Returns `false` when a submit is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self { phase: SubmitPhase::Submitting, ..Self::default() };
        true
    }

    /// Apply the `authenticate` result.
    pub fn finish(&mut self, result: Result<AuthToken, ApiError>, session: &SessionStore) {
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(token) => {
                session.set_token(&token.authorization());
                log::info!("signed in");
            }
            Err(ApiError::Validation(fields)) => {
                self.email_error = fields.message("email");
                self.password_error = fields.message("password");
                self.alert = fields.non_field();
                if self.email_error.is_none() && self.password_error.is_none() && self.alert.is_none() {
                    log::warn!("sign-in rejected on unplaced fields: {:?}", fields.fields().collect::<Vec<_>>());
                    self.alert = Some(UNPLACED_VALIDATION_MESSAGE.to_owned());
                }
            }
            Err(err) => {
                log::warn!("sign-in failed: {err}");
                self.alert = Some(err.user_message());
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
