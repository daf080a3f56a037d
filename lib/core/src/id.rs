//! Correlation ids for logged form submissions.
//!
//! Nothing on the site is persisted, so these ids exist only to tie the log
//! lines of a single request together. They are ULIDs, so log output sorts
//! by arrival time, and always carry a short kind prefix (`rst_...`) so a
//! grep for one kind never matches another.

use std::fmt;
use ulid::Ulid;

macro_rules! correlation_id {
    ($(#[$meta:meta])* $name:ident => $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Ulid);

        impl $name {
            /// Prefix written before the ULID when displayed.
            pub const PREFIX: &'static str = $prefix;

            /// Generates a fresh id stamped with the current time.
            #[must_use]
            pub fn new() -> Self {
                Self(Ulid::new())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", Self::PREFIX, self.0)
            }
        }
    };
}

correlation_id!(
    /// Identifies one accepted password-reset request.
    ResetRequestId => "rst"
);

correlation_id!(
    /// Identifies one sign-in or sign-up form submission.
    SubmissionId => "sub"
);
