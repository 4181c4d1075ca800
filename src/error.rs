use std::result;

use thiserror::Error;

/// Error types for query construction
///
/// Every failure is a deterministic function of the call's arguments and
/// the builder's current state; there is nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// An invalid value was supplied to a builder method
    ///
    /// The rejecting call leaves the builder untouched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The query cannot be rendered in its current state
    ///
    /// Raised only by `build()` when no fragments have accumulated.
    #[error("cannot build query: {0}")]
    InvalidState(String),
}

pub type Result<T> = result::Result<T, QueryError>;
