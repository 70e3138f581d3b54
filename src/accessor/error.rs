//! Error raised when an attribute path does not resolve.

use crate::document::value::Value;
use crate::path::AttributePath;
use thiserror::Error;

/// A path could not be resolved against a value graph.
///
/// Carries a snapshot of the root that was walked, the full path requested
/// and the shortest leading sub-path that failed to resolve.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("The nested attribute \"{missing_path}\" was not found.")]
pub struct MissingAttributeError {
    object: Box<Value>,
    path: AttributePath,
    missing_path: AttributePath,
}

impl MissingAttributeError {
    pub fn new(object: Value, path: AttributePath, missing_path: AttributePath) -> Self {
        Self {
            object: Box::new(object),
            path,
            missing_path,
        }
    }

    /// The root value the path was resolved against.
    pub fn object(&self) -> &Value {
        &self.object
    }

    /// The complete path that was requested.
    pub fn full_path(&self) -> &AttributePath {
        &self.path
    }

    /// The leading part of the path up to and including the first segment
    /// that did not resolve.
    pub fn missing_path(&self) -> &AttributePath {
        &self.missing_path
    }
}
