//! Path-driven access to value graphs.
//!
//! [`ObjectAttributeAccessor`] interprets an [`AttributePath`](crate::path::AttributePath)
//! against a root [`Value`](crate::document::Value) one segment at a time:
//!
//! - `[n]` segments index into lists
//! - every other segment is a map key or object field
//!
//! Reads treat a null slot as absent while [`is_defined`](ObjectAttributeAccessor::is_defined)
//! only checks that the slot exists. Failures are reported as
//! [`MissingAttributeError`], carrying the shortest sub-path that did not resolve.

pub mod error;
pub mod object_attribute_accessor;

pub use error::MissingAttributeError;
pub use object_attribute_accessor::ObjectAttributeAccessor;
