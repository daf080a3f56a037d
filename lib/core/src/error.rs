//! The shared result type.
//!
//! Fallible operations across the workspace return a [`rootcause::Report`]
//! whose context is the calling crate's own error enum, e.g.
//! `Result<(), AccountError>` in `subtrack-account`.

use rootcause::Report;

/// `Result` carrying a rootcause [`Report`] with context `C`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl std::error::Error for Refused {}

    fn refuse() -> Result<u8, Refused> {
        Err(Refused.into())
    }

    #[test]
    fn report_displays_its_context() {
        let report = refuse().unwrap_err();
        assert!(report.to_string().contains("refused"));
    }
}
