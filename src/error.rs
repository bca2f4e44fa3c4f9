//! Error types for the checked math entry points.
//!
//! The legacy functions ([`pow`](crate::pow), [`sqrt`](crate::sqrt)) never return
//! errors: they report through the thread-local indicator in [`errno`](crate::errno)
//! and a NaN sentinel. The checked variants ([`try_pow`](crate::try_pow),
//! [`try_sqrt`](crate::try_sqrt)) return [`MathError`] instead and leave the
//! indicator alone.

use std::fmt;

use crate::errno::Errno;

/// Errors that can occur in checked math operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
    /// Input is outside the domain of the operation (e.g., square root of a negative number).
    DomainError,
}

impl MathError {
    /// The indicator value the legacy entry points store for this error.
    pub fn errno(self) -> Errno {
        match self {
            Self::DomainError => Errno::Domain,
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainError => write!(f, "input is outside the domain of the operation"),
        }
    }
}

impl std::error::Error for MathError {}

impl From<MathError> for Errno {
    fn from(error: MathError) -> Self {
        error.errno()
    }
}
