//! The account backend seam.
//!
//! Accounts, sessions and outgoing mail are owned by an external
//! authentication service. The site talks to it only through
//! [`AccountBackend`].

use crate::credentials::{LoginCredentials, SignupCredentials};
use crate::error::AccountError;
use crate::reset::PasswordResetRequest;
use async_trait::async_trait;
use subtrack_core::Result;
use subtrack_core::SubmissionId;

/// Operations the site needs from the authentication service.
#[async_trait]
pub trait AccountBackend: Send + Sync {
    /// Sends a reset link if an account exists for the address.
    ///
    /// Implementations must not reveal through the result whether the
    /// account exists; `Ok(())` covers both cases.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request could not be processed at all.
    async fn send_reset_link(&self, request: &PasswordResetRequest) -> Result<(), AccountError>;

    /// Starts a session for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the service fails.
    async fn sign_in(
        &self,
        submission: SubmissionId,
        credentials: &LoginCredentials,
    ) -> Result<(), AccountError>;

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the account cannot be created.
    async fn sign_up(
        &self,
        submission: SubmissionId,
        credentials: &SignupCredentials,
    ) -> Result<(), AccountError>;
}

/// Stand-in used until an authentication service exists.
///
/// Reset requests are logged and reported as handled. Sign-in and sign-up
/// are refused with [`AccountError::ServiceUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderBackend;

const UNAVAILABLE_REASON: &str = "no account service configured";

#[async_trait]
impl AccountBackend for PlaceholderBackend {
    async fn send_reset_link(&self, request: &PasswordResetRequest) -> Result<(), AccountError> {
        tracing::info!(
            request_id = %request.id(),
            email = %request.email(),
            "Password reset requested"
        );
        Ok(())
    }

    async fn sign_in(
        &self,
        submission: SubmissionId,
        credentials: &LoginCredentials,
    ) -> Result<(), AccountError> {
        tracing::info!(
            submission_id = %submission,
            email = %credentials.email(),
            "Sign-in attempted without an account service"
        );
        Err(AccountError::ServiceUnavailable {
            reason: UNAVAILABLE_REASON.to_string(),
        }
        .into())
    }

    async fn sign_up(
        &self,
        submission: SubmissionId,
        credentials: &SignupCredentials,
    ) -> Result<(), AccountError> {
        tracing::info!(
            submission_id = %submission,
            email = %credentials.email(),
            "Sign-up attempted without an account service"
        );
        Err(AccountError::ServiceUnavailable {
            reason: UNAVAILABLE_REASON.to_string(),
        }
        .into())
    }
}
