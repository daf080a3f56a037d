//! Error types for the account crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `CredentialError`: a form submission failed validation
//! - `AccountError`: the account backend could not complete a request

use std::fmt;
use subtrack_core::ParseEmailError;

/// Validation failures for sign-in and sign-up submissions.
///
/// These are safe to show to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The email address is malformed.
    InvalidEmail { reason: ParseEmailError },
    /// No password was entered.
    MissingPassword,
    /// The new password is shorter than the minimum.
    PasswordTooShort { min: usize },
    /// The password confirmation differs from the password.
    PasswordMismatch,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail { reason } => write!(f, "Please enter a valid email address ({reason})."),
            Self::MissingPassword => write!(f, "Please enter your password."),
            Self::PasswordTooShort { min } => {
                write!(f, "Password must be at least {min} characters.")
            }
            Self::PasswordMismatch => write!(f, "Passwords do not match."),
        }
    }
}

impl std::error::Error for CredentialError {}

impl From<ParseEmailError> for CredentialError {
    fn from(reason: ParseEmailError) -> Self {
        Self::InvalidEmail { reason }
    }
}

/// Failures reported by an [`AccountBackend`](crate::AccountBackend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The account service is not reachable or not configured.
    ServiceUnavailable { reason: String },
    /// The reset email could not be handed to the mail provider.
    DeliveryFailed { reason: String },
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceUnavailable { reason } => {
                write!(f, "account service unavailable: {reason}")
            }
            Self::DeliveryFailed { reason } => {
                write!(f, "reset email delivery failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AccountError {}
