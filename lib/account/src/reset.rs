//! The forgot-password flow.
//!
//! Every submission is answered with [`RESET_CONFIRMATION`], whether the
//! address was malformed, rate limited, unknown to the backend, or actually
//! sent a link. The distinction exists only in [`ResetOutcome`] and in the
//! logs, so the form cannot be used to probe for accounts.

use crate::backend::AccountBackend;
use crate::rate_limit::{RateLimitConfig, RateLimitResult, RateLimiter};
use std::sync::Arc;
use subtrack_core::{EmailAddress, ParseEmailError, ResetRequestId};

/// The only message a forgot-password submission ever produces.
pub const RESET_CONFIRMATION: &str =
    "If an account exists with this email, you will receive a password reset link.";

/// A reset request that passed validation and rate limiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetRequest {
    id: ResetRequestId,
    email: EmailAddress,
}

impl PasswordResetRequest {
    #[must_use]
    pub fn new(id: ResetRequestId, email: EmailAddress) -> Self {
        Self { id, email }
    }

    #[must_use]
    pub fn id(&self) -> ResetRequestId {
        self.id
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Why a submission was not passed on to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppressReason {
    InvalidEmail(ParseEmailError),
    RateLimited { retry_after_secs: i64 },
    BackendFailed,
}

/// What happened to a submission. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Dispatched { request_id: ResetRequestId },
    Suppressed { reason: SuppressReason },
}

impl ResetOutcome {
    /// The user-facing message, identical for every outcome.
    #[must_use]
    pub fn message(&self) -> &'static str {
        RESET_CONFIRMATION
    }

    #[must_use]
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched { .. })
    }
}

/// Validates, rate limits and forwards password-reset requests.
#[derive(Clone)]
pub struct PasswordResetService {
    backend: Arc<dyn AccountBackend>,
    limiter: RateLimiter,
}

impl PasswordResetService {
    #[must_use]
    pub fn new(backend: Arc<dyn AccountBackend>, limits: RateLimitConfig) -> Self {
        Self {
            backend,
            limiter: RateLimiter::new(limits),
        }
    }

    /// Handles one forgot-password submission.
    pub async fn request_reset(&self, raw_email: &str) -> ResetOutcome {
        let email = match EmailAddress::parse(raw_email) {
            Ok(email) => email,
            Err(reason) => {
                tracing::debug!(error = %reason, "Ignoring reset request with invalid email");
                return ResetOutcome::Suppressed {
                    reason: SuppressReason::InvalidEmail(reason),
                };
            }
        };

        let verdict = self.limiter.check_and_increment(email.as_str());
        if let RateLimitResult::Exceeded { retry_after, .. } = verdict {
            tracing::warn!(
                email = %email,
                retry_after_secs = retry_after.num_seconds(),
                "Password reset rate limit exceeded"
            );
            return ResetOutcome::Suppressed {
                reason: SuppressReason::RateLimited {
                    retry_after_secs: retry_after.num_seconds(),
                },
            };
        }

        tracing::debug!(
            remaining = verdict.remaining(),
            "Password reset request within rate limit"
        );

        let request = PasswordResetRequest::new(ResetRequestId::new(), email);
        match self.backend.send_reset_link(&request).await {
            Ok(()) => {
                tracing::info!(request_id = %request.id(), "Password reset dispatched");
                ResetOutcome::Dispatched {
                    request_id: request.id(),
                }
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    request_id = %request.id(),
                    "Account backend failed to send reset link"
                );
                ResetOutcome::Suppressed {
                    reason: SuppressReason::BackendFailed,
                }
            }
        }
    }

    /// Returns the limiter, for periodic pruning.
    #[must_use]
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{LoginCredentials, SignupCredentials};
    use crate::error::AccountError;
    use crate::backend::PlaceholderBackend;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use subtrack_core::{Result, SubmissionId};

    #[derive(Default)]
    struct RecordingBackend {
        sent: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl AccountBackend for RecordingBackend {
        async fn send_reset_link(
            &self,
            request: &PasswordResetRequest,
        ) -> Result<(), AccountError> {
            if self.fail {
                return Err(AccountError::DeliveryFailed {
                    reason: "smtp down".to_string(),
                }
                .into());
            }
            self.sent
                .lock()
                .expect("lock")
                .push(request.email().to_string());
            Ok(())
        }

        async fn sign_in(
            &self,
            _submission: SubmissionId,
            _credentials: &LoginCredentials,
        ) -> Result<(), AccountError> {
            Ok(())
        }

        async fn sign_up(
            &self,
            _submission: SubmissionId,
            _credentials: &SignupCredentials,
        ) -> Result<(), AccountError> {
            Ok(())
        }
    }

    fn service_with(backend: Arc<RecordingBackend>, max: u32) -> PasswordResetService {
        PasswordResetService::new(backend, RateLimitConfig::new(max, 900))
    }

    #[tokio::test]
    async fn valid_email_is_dispatched_normalized() {
        let backend = Arc::new(RecordingBackend::default());
        let service = service_with(backend.clone(), 3);

        let outcome = service.request_reset("  Hal@Example.com ").await;

        assert!(outcome.is_dispatched());
        assert_eq!(*backend.sent.lock().expect("lock"), ["hal@example.com"]);
    }

    #[tokio::test]
    async fn any_non_empty_input_gets_the_confirmation() {
        let service = PasswordResetService::new(Arc::new(PlaceholderBackend), RateLimitConfig::default());

        for input in ["ivy@example.com", "ivy", "x", "@@@", "ivy@example"] {
            let outcome = service.request_reset(input).await;
            assert_eq!(outcome.message(), RESET_CONFIRMATION, "{input}");
        }
    }

    #[tokio::test]
    async fn invalid_email_is_not_forwarded() {
        let backend = Arc::new(RecordingBackend::default());
        let service = service_with(backend.clone(), 3);

        let outcome = service.request_reset("not-an-email").await;

        assert_eq!(
            outcome,
            ResetOutcome::Suppressed {
                reason: SuppressReason::InvalidEmail(ParseEmailError::MissingAt)
            }
        );
        assert!(backend.sent.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn repeated_requests_are_rate_limited_per_address() {
        let backend = Arc::new(RecordingBackend::default());
        let service = service_with(backend.clone(), 2);

        assert!(service.request_reset("jo@example.com").await.is_dispatched());
        assert!(service.request_reset("JO@example.com").await.is_dispatched());

        let third = service.request_reset("jo@example.com").await;
        assert!(matches!(
            third,
            ResetOutcome::Suppressed {
                reason: SuppressReason::RateLimited { .. }
            }
        ));
        assert_eq!(third.message(), RESET_CONFIRMATION);

        assert!(service.request_reset("kim@example.com").await.is_dispatched());
        assert_eq!(backend.sent.lock().expect("lock").len(), 3);
    }

    #[tokio::test]
    async fn backend_failure_is_hidden_from_the_user() {
        let backend = Arc::new(RecordingBackend {
            fail: true,
            ..RecordingBackend::default()
        });
        let service = service_with(backend, 3);

        let outcome = service.request_reset("lee@example.com").await;

        assert_eq!(
            outcome,
            ResetOutcome::Suppressed {
                reason: SuppressReason::BackendFailed
            }
        );
        assert_eq!(outcome.message(), RESET_CONFIRMATION);
    }
}
