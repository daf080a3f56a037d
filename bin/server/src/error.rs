//! Error types for the account form server functions.
//!
//! Server functions log the detailed cause with `tracing`, then convert
//! to a user-safe [`ServerFnError`] with [`FormError::into_server_error`].
//! The forgot-password flow never produces one of these.

use leptos::server_fn::error::ServerFnError;
use std::fmt;
use subtrack_account::CredentialError;

/// Shown when the account backend refuses or fails a request.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str = "Accounts are not available yet. Please try again later.";

/// Shown for any failure that has no more specific message.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Failures of a sign-in or sign-up submission.
#[derive(Debug)]
pub enum FormError {
    /// The submitted values failed validation.
    Invalid(CredentialError),
    /// The account backend could not complete the request.
    Backend { details: String },
    /// Shared server state was not attached to the request.
    StateMissing { details: String },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "invalid submission: {e}"),
            Self::Backend { details } => write!(f, "account backend error: {details}"),
            Self::StateMissing { details } => write!(f, "application state missing: {details}"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<CredentialError> for FormError {
    fn from(e: CredentialError) -> Self {
        Self::Invalid(e)
    }
}

impl FormError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match self {
            FormError::Invalid(e) => ServerFnError::new(e.to_string()),
            FormError::Backend { .. } => ServerFnError::new(BACKEND_UNAVAILABLE_MESSAGE),
            FormError::StateMissing { .. } => ServerFnError::new(GENERIC_MESSAGE),
        }
    }
}

/// Extracts the text to show the user from a server function error.
///
/// Messages produced by [`FormError::into_server_error`] pass through;
/// transport and decoding failures collapse to [`GENERIC_MESSAGE`].
pub fn user_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        _ => GENERIC_MESSAGE.to_string(),
    }
}
