//! Unified error handling for the collection helpers.
//!
//! Every fallible operation returns [`LdError`]. Argument shapes are checked
//! before a traversal starts; `pluck` may still fail midway on an element it
//! cannot read, in which case the partial result is dropped. `extend` never
//! leaves a partially extended target behind.


use std::fmt;
use tracing::debug;

/// A unified error type for all collection operations.
///
/// Each variant carries the signature of the operation that rejected its
/// input, e.g. `"map(collection, transform)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LdError {
    /// An argument had the wrong shape (e.g. a number where a collection
    /// was expected)
    InvalidArgument {
        operation: &'static str,
        message: String,
    },

    /// A fold without a seed was asked to reduce an empty collection
    EmptyCollection { operation: &'static str },
}

const EMPTY_COLLECTION_MESSAGE: &str = "on empty collection without a seed";

impl LdError {
    /// Create a new invalid-argument error.
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        debug!(operation, %message, "rejected argument");
        LdError::InvalidArgument { operation, message }
    }

    /// Create a new empty-collection error.
    pub fn empty_collection(operation: &'static str) -> Self {
        debug!(operation, "fold over empty collection without a seed");
        LdError::EmptyCollection { operation }
    }

    /// Get a short error kind description (e.g., "InvalidArgument").
    pub fn kind(&self) -> &'static str {
        match self {
            LdError::InvalidArgument { .. } => "InvalidArgument",
            LdError::EmptyCollection { .. } => "EmptyCollection",
        }
    }

    /// Signature of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            LdError::InvalidArgument { operation, .. } => operation,
            LdError::EmptyCollection { operation } => operation,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            LdError::InvalidArgument { message, .. } => message,
            LdError::EmptyCollection { .. } => EMPTY_COLLECTION_MESSAGE,
        }
    }
}

impl fmt::Display for LdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.kind(), self.operation(), self.message())
    }
}

impl std::error::Error for LdError {}
