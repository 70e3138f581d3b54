//! Error types for keyed and indexed collection access.

use thiserror::Error;

/// An index fell outside a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The index {index} is out of range. The collection size is {size}.")]
pub struct OutOfRangeError {
    /// The index as the caller gave it, negative values included.
    pub index: isize,
    pub size: usize,
}

/// A dictionary has no entry for a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The key \"{key}\" is not defined.")]
pub struct MissingKeyError {
    pub key: String,
}
