//! Invocation Errors
//!
//! Only failures of the invocation itself are errors. A syscall that the
//! kernel rejects still returns `Ok` with the raw error sentinel.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The native syscall entry point could not be located.
    ///
    /// Fatal: there is no other path for this backend to reach the kernel.
    #[error("failed to resolve syscall entry point `{symbol}`: {reason}")]
    EntryPointResolutionFailed { symbol: String, reason: String },

    /// More arguments were given than any syscall can take. Nothing was called.
    #[error("{count} syscall arguments given, at most {max} are supported")]
    ArgumentCountExceeded { count: usize, max: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::ArgumentCountExceeded { count: 7, max: 6 };
        assert_eq!(err.to_string(), "7 syscall arguments given, at most 6 are supported");

        let err = Error::EntryPointResolutionFailed {
            symbol: "syscall".into(),
            reason: "not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to resolve syscall entry point `syscall`: not found"
        );
    }
}
