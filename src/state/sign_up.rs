//! Sign-up form state machine: `idle -> submitting -> {created, failed}`.
//!
//! A successful registration never authenticates. It shows a confirmation
//! modal, and dismissing it hands off to sign-in.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignUpPhase {
    #[default]
    Idle,
    Submitting,
    /// Confirmation modal is open.
    Created,
    /// Confirmation dismissed; the page navigates to sign-in.
    Done,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub phase: SignUpPhase,
    pub first_name_error: Option<String>,
    pub last_name_error: Option<String>,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    /// Transport or server failure message. Validation opens it only when
    /// no message can be placed under a field.
    pub alert: Option<String>,
}

pub const CREATED_TITLE: &str = "Success";
pub const CREATED_MESSAGE: &str = "Your account was created successfully. Please sign in on the next page.";
/// Alert for a rejected registration that names none of the form's fields.
pub const UNPLACED_VALIDATION_MESSAGE: &str = "Unable to create an account with the provided details.";

impl SignUpForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == SignUpPhase::Submitting
    }

    pub fn show_confirmation(&self) -> bool {
        self.phase == SignUpPhase::Created
    }

    /// Returns `false` when a submit is in flight or the account already exists.
    pub fn begin_submit(&mut self) -> bool {
        if matches!(self.phase, SignUpPhase::Submitting | SignUpPhase::Created | SignUpPhase::Done) {
            return false;
        }
        *self = Self { phase: SignUpPhase::Submitting, ..Self::default() };
        true
    }

    /// Apply the `create_account` result.
    pub fn finish(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                log::info!("account created");
                self.phase = SignUpPhase::Created;
            }
            Err(ApiError::Validation(fields)) => {
                self.phase = SignUpPhase::Idle;
                self.first_name_error = fields.message("first_name");
                self.last_name_error = fields.message("last_name");
                self.email_error = fields.message("email");
                self.password_error = fields.message("password");
                if self.first_name_error.is_none()
                    && self.last_name_error.is_none()
                    && self.email_error.is_none()
                    && self.password_error.is_none()
                {
                    log::warn!("sign-up rejected on unplaced fields: {:?}", fields.fields().collect::<Vec<_>>());
                    self.alert = Some(fields.non_field().unwrap_or_else(|| UNPLACED_VALIDATION_MESSAGE.to_owned()));
                }
            }
            Err(err) => {
                log::warn!("sign-up failed: {err}");
                self.phase = SignUpPhase::Idle;
                self.alert = Some(err.user_message());
            }
        }
    }

    /// Close the confirmation modal. Returns `true` when the page should
    /// move on to sign-in.
    pub fn dismiss_confirmation(&mut self) -> bool {
        if self.phase != SignUpPhase::Created {
            return false;
        }
        self.phase = SignUpPhase::Done;
        true
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
