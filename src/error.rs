//! Error types for fieldstone operations.
//!
//! Only usage-contract violations are represented as error values. Internal
//! invariant violations (a non-map document root, a kind/payload mismatch
//! coming off the wire) are fatal assertions, not recoverable errors; see
//! [`DocumentValue::new`](crate::DocumentValue::new).

use thiserror::Error;

/// Result type alias for fieldstone operations.
pub type StoneResult<T> = Result<T, StoneError>;

/// Errors that can occur during fieldstone operations.
#[derive(Debug, Error)]
pub enum StoneError {
    /// An empty path was passed to an operation that requires at least one
    /// segment (`set`, `delete`, `pop_first`).
    #[error("{op} requires a non-empty field path")]
    EmptyPath {
        /// The operation that rejected the path.
        op: &'static str,
    },
}

impl StoneError {
    /// Create an empty-path error for the named operation.
    #[inline]
    pub fn empty_path(op: &'static str) -> Self {
        StoneError::EmptyPath { op }
    }
}
