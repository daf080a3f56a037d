//! Account-form contracts for the SubTrack site.
//!
//! This crate provides:
//! - Credential validation for the sign-in and sign-up forms
//! - The password-reset service behind the forgot-password form
//! - A fixed-window rate limiter for reset requests
//! - The [`AccountBackend`] trait, the seam to whatever authentication
//!   service eventually owns accounts
//!
//! No accounts exist yet. [`PlaceholderBackend`] logs what it is asked to do
//! and refuses sign-in and sign-up.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use subtrack_account::{
//!     PasswordResetService, PlaceholderBackend, RateLimitConfig, RESET_CONFIRMATION,
//! };
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let service = PasswordResetService::new(
//!     Arc::new(PlaceholderBackend),
//!     RateLimitConfig::new(3, 900),
//! );
//!
//! // Valid or not, every submission gets the same answer.
//! let outcome = service.request_reset("alice@example.com").await;
//! assert_eq!(outcome.message(), RESET_CONFIRMATION);
//! let outcome = service.request_reset("not an email").await;
//! assert_eq!(outcome.message(), RESET_CONFIRMATION);
//! # });
//! ```

pub mod backend;
pub mod credentials;
pub mod error;
pub mod rate_limit;
pub mod reset;

pub use backend::{AccountBackend, PlaceholderBackend};
pub use credentials::{LoginCredentials, MIN_PASSWORD_LEN, SignupCredentials};
pub use error::{AccountError, CredentialError};
pub use rate_limit::{RateLimitConfig, RateLimitResult, RateLimiter};
pub use reset::{
    PasswordResetRequest, PasswordResetService, RESET_CONFIRMATION, ResetOutcome, SuppressReason,
};
