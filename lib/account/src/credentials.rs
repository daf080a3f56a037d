//! Sign-in and sign-up credential validation.

use crate::error::CredentialError;
use std::fmt;
use subtrack_core::EmailAddress;

/// Minimum length for a new password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A validated sign-in submission.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: String,
}

impl LoginCredentials {
    /// Validates raw form values.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure: email first, then password.
    pub fn parse(email: &str, password: &str) -> Result<Self, CredentialError> {
        let email = EmailAddress::parse(email)?;
        if password.is_empty() {
            return Err(CredentialError::MissingPassword);
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A validated sign-up submission.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    email: EmailAddress,
    password: String,
}

impl SignupCredentials {
    /// Validates raw form values.
    ///
    /// Unlike sign-in, sign-up enforces [`MIN_PASSWORD_LEN`] (counted in
    /// characters) and requires the confirmation to match exactly.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure in field order.
    pub fn parse(email: &str, password: &str, confirm: &str) -> Result<Self, CredentialError> {
        let email = EmailAddress::parse(email)?;
        if password.is_empty() {
            return Err(CredentialError::MissingPassword);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if password != confirm {
            return Err(CredentialError::PasswordMismatch);
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for SignupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtrack_core::ParseEmailError;

    #[test]
    fn login_accepts_valid_input() {
        let creds = LoginCredentials::parse(" Dana@Example.com", "hunter2").expect("valid");
        assert_eq!(creds.email().as_str(), "dana@example.com");
        assert_eq!(creds.password(), "hunter2");
    }

    #[test]
    fn login_does_not_enforce_length() {
        assert!(LoginCredentials::parse("dana@example.com", "x").is_ok());
    }

    #[test]
    fn login_rejects_bad_email_before_password() {
        let err = LoginCredentials::parse("dana", "").expect_err("invalid");
        assert_eq!(
            err,
            CredentialError::InvalidEmail {
                reason: ParseEmailError::MissingAt
            }
        );
    }

    #[test]
    fn login_rejects_empty_password() {
        let err = LoginCredentials::parse("dana@example.com", "").expect_err("invalid");
        assert_eq!(err, CredentialError::MissingPassword);
    }

    #[test]
    fn signup_accepts_matching_passwords() {
        let creds =
            SignupCredentials::parse("erin@example.com", "correct horse", "correct horse")
                .expect("valid");
        assert_eq!(creds.email().as_str(), "erin@example.com");
    }

    #[test]
    fn signup_rejects_short_password() {
        let err = SignupCredentials::parse("erin@example.com", "short", "short").expect_err("invalid");
        assert_eq!(err, CredentialError::PasswordTooShort { min: 8 });
    }

    #[test]
    fn signup_counts_characters_not_bytes() {
        // Four two-byte characters: eight bytes, still too short.
        let err = SignupCredentials::parse("erin@example.com", "éééé", "éééé").expect_err("invalid");
        assert_eq!(err, CredentialError::PasswordTooShort { min: 8 });
    }

    #[test]
    fn signup_rejects_mismatch() {
        let err = SignupCredentials::parse("erin@example.com", "password1", "password2")
            .expect_err("invalid");
        assert_eq!(err, CredentialError::PasswordMismatch);
    }

    #[test]
    fn debug_redacts_password() {
        let creds = LoginCredentials::parse("dana@example.com", "hunter2").expect("valid");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
