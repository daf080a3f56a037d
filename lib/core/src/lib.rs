//! Core domain types and utilities for the SubTrack site.
//!
//! This crate provides the foundational types shared by the content model,
//! the account forms and the web server: the rootcause `Result` alias,
//! validated email addresses and correlation ids for logged requests.

pub mod email;
pub mod error;
pub mod id;

pub use email::{EmailAddress, ParseEmailError};
pub use error::Result;
pub use id::{ResetRequestId, SubmissionId};
