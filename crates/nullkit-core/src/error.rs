//! Error types for nullkit

use thiserror::Error;

/// Errors reported by the fallible companions of the null helpers
///
/// The helpers themselves express failure as absence; only the `try_*`
/// variants surface it as a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NullsError {
    #[error("Invalid cast: value is not an instance of {expected}")]
    InvalidCast { expected: &'static str },
}

/// Result type for nullkit operations
pub type NullsResult<T> = Result<T, NullsError>;
