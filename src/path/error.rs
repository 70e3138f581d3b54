//! Error types for path algebra and path-addressed filesystem operations.

use std::io;
use thiserror::Error;

/// Errors raised by malformed path-algebra calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A count argument was out of range, e.g. `back(-1)`.
    #[error("{class_name}->{method}( {parameter} ): invalid parameter {parameter}.")]
    InvalidParameter {
        class_name: &'static str,
        method: &'static str,
        parameter: isize,
    },
    /// One operand is absolute and the other relative.
    #[error("Trying to get the common path between an absolute path and a relative path.")]
    AbsoluteMismatch,
    /// One operand has a protocol and the other does not.
    #[error(
        "Trying to get the common path between a path with protocol and a path with no protocol."
    )]
    ProtocolMismatch,
}

/// Errors raised by the filesystem operations of a `FilePath`.
///
/// Every variant names the path it failed on; OS failures keep the
/// underlying `io::Error` as their source.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Could not read the file \"{path}\": {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not write the file \"{path}\": {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not create the folder \"{path}\": {source}")]
    CreateFolder {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not delete \"{path}\": {source}")]
    Delete {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not list the folder \"{path}\": {source}")]
    ListFolder {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not read the metadata of \"{path}\": {source}")]
    Metadata {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("The path \"{path}\" has a protocol and is not on the local filesystem.")]
    NotLocal { path: String },
}

impl FileError {
    /// Returns the path the failed operation was applied to.
    pub fn path(&self) -> &str {
        match self {
            FileError::Read { path, .. }
            | FileError::Write { path, .. }
            | FileError::CreateFolder { path, .. }
            | FileError::Delete { path, .. }
            | FileError::ListFolder { path, .. }
            | FileError::Metadata { path, .. }
            | FileError::NotLocal { path } => path,
        }
    }

    /// Returns true if the failure was caused by a missing file or folder.
    pub fn is_not_found(&self) -> bool {
        use std::error::Error as _;

        self.source()
            .and_then(|source| source.downcast_ref::<io::Error>())
            .map(|source| source.kind() == io::ErrorKind::NotFound)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let error = PathError::InvalidParameter {
            class_name: "AttributePath",
            method: "back",
            parameter: -1,
        };
        assert_eq!(
            error.to_string(),
            "AttributePath->back( -1 ): invalid parameter -1."
        );
    }

    #[test]
    fn test_file_error_not_found() {
        let error = FileError::Read {
            path: "/nowhere".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(error.is_not_found());
        assert_eq!(error.path(), "/nowhere");

        let error = FileError::NotLocal {
            path: "http://host/file".to_string(),
        };
        assert!(!error.is_not_found());
    }
}
