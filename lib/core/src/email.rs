//! Validated email addresses.
//!
//! Addresses are normalized on parse (trimmed, ASCII-lowercased) so that
//! two spellings of the same address compare equal and share a rate-limit
//! bucket. Validation is deliberately shallow: one `@`, a non-empty local
//! part and a dotted domain. Anything stricter belongs to whoever delivers
//! the mail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reasons an email address is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseEmailError {
    /// The input was empty after trimming.
    Empty,
    /// The input contains no `@`.
    MissingAt,
    /// The input contains more than one `@`.
    MultipleAt,
    /// Nothing precedes the `@`.
    EmptyLocalPart,
    /// The domain is empty, undotted, or has an empty label.
    InvalidDomain,
    /// The input contains whitespace inside the address.
    ContainsWhitespace,
}

impl fmt::Display for ParseEmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email address is empty"),
            Self::MissingAt => write!(f, "email address is missing '@'"),
            Self::MultipleAt => write!(f, "email address contains more than one '@'"),
            Self::EmptyLocalPart => write!(f, "email address has no name before '@'"),
            Self::InvalidDomain => write!(f, "email address has an invalid domain"),
            Self::ContainsWhitespace => write!(f, "email address contains whitespace"),
        }
    }
}

impl std::error::Error for ParseEmailError {}

/// A normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an address.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseEmailError`] describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, ParseEmailError> {
        let normalized = input.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ParseEmailError::Empty);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(ParseEmailError::ContainsWhitespace);
        }

        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let Some(domain) = parts.next() else {
            return Err(ParseEmailError::MissingAt);
        };
        if parts.next().is_some() {
            return Err(ParseEmailError::MultipleAt);
        }
        if local.is_empty() {
            return Err(ParseEmailError::EmptyLocalPart);
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(ParseEmailError::InvalidDomain);
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = ParseEmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ParseEmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let email = EmailAddress::parse("  Alice@Example.COM ").expect("valid");
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(EmailAddress::parse("   "), Err(ParseEmailError::Empty));
    }

    #[test]
    fn parse_rejects_missing_at() {
        assert_eq!(
            EmailAddress::parse("alice.example.com"),
            Err(ParseEmailError::MissingAt)
        );
    }

    #[test]
    fn parse_rejects_multiple_at() {
        assert_eq!(EmailAddress::parse("a@b@c.io"), Err(ParseEmailError::MultipleAt));
    }

    #[test]
    fn parse_rejects_empty_local_part() {
        assert_eq!(
            EmailAddress::parse("@example.com"),
            Err(ParseEmailError::EmptyLocalPart)
        );
    }

    #[test]
    fn parse_rejects_bad_domains() {
        for input in ["alice@", "alice@localhost", "alice@example.", "alice@.com"] {
            assert_eq!(
                EmailAddress::parse(input),
                Err(ParseEmailError::InvalidDomain),
                "{input}"
            );
        }
    }

    #[test]
    fn parse_rejects_inner_whitespace() {
        assert_eq!(
            EmailAddress::parse("ali ce@example.com"),
            Err(ParseEmailError::ContainsWhitespace)
        );
    }

    #[test]
    fn equal_after_normalization() {
        let a: EmailAddress = "BOB@example.com".parse().expect("valid");
        let b: EmailAddress = "bob@EXAMPLE.com".parse().expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn deserialize_validates() {
        let ok: EmailAddress = serde_json::from_str("\"Carol@Example.org\"").expect("valid");
        assert_eq!(ok.as_str(), "carol@example.org");
        assert!(serde_json::from_str::<EmailAddress>("\"carol\"").is_err());
    }
}
