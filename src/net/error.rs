//! Typed API failures.
//!
//! ERROR HANDLING
//! ==============
//! Every REST call resolves to `Result<T, ApiError>`. Callers match on the
//! variant instead of indexing into an assumed payload shape: validation
//! maps bind to form fields, `Auth` drives sign-out, and transport or server
//! failures become a single readable message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

/// Catch-all key the backend uses for errors not tied to one input.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Shown whenever the backend could not be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the server. Please check your connection and try again.";

/// Field-keyed validation messages from a 400 response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Parse a validation payload. Returns `None` unless the body is a JSON object.
    ///
    /// Values may be a list of strings, a single string, or anything else
    /// (rendered as JSON text).
    pub fn from_body(body: &str) -> Option<Self> {
        let serde_json::Value::Object(map) = serde_json::from_str::<serde_json::Value>(body).ok()? else {
            return None;
        };
        let fields = map
            .into_iter()
            .map(|(field, value)| (field, messages_of(value)))
            .filter(|(_, messages)| !messages.is_empty())
            .collect();
        Some(Self { fields })
    }

    /// All messages for `field` joined by a space, or `None` if it has none.
    pub fn message(&self, field: &str) -> Option<String> {
        self.fields.get(field).filter(|m| !m.is_empty()).map(|m| m.join(" "))
    }

    pub fn non_field(&self) -> Option<String> {
        self.message(NON_FIELD_ERRORS)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

fn messages_of(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            })
            .collect(),
        serde_json::Value::String(text) => vec![text],
        serde_json::Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request was rejected: {0:?}")]
    Validation(FieldErrors),
    #[error("credentials were missing or rejected")]
    Auth,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Server(u16),
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Auth,
            400 => FieldErrors::from_body(body)
                .filter(|fields| !fields.is_empty())
                .map_or(Self::Server(400), Self::Validation),
            other => Self::Server(other),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// Message suitable for an alert dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(fields) => fields
                .non_field()
                .unwrap_or_else(|| "Please correct the highlighted fields.".to_owned()),
            Self::Auth => "Your credentials were rejected. Please sign in again.".to_owned(),
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_owned(),
            Self::Server(status) => format!("The server could not complete the request (status {status})."),
        }
    }
}
