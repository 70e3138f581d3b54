//! Checked containers.
//!
//! Thin wrappers over `Vec` and `IndexMap` whose lookups fail with typed
//! errors ([`OutOfRangeError`], [`MissingKeyError`]) and offer `*_if_absent`
//! variants instead.

pub mod dictionary;
pub mod error;
pub mod ordered_collection;

pub use dictionary::Dictionary;
pub use error::{MissingKeyError, OutOfRangeError};
pub use ordered_collection::OrderedCollection;
