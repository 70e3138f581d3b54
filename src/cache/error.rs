//! Errors raised by the files cache.

use crate::accessor::MissingAttributeError;
use crate::path::FileError;
use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Attribute(#[from] MissingAttributeError),

    #[error("The cache manifest \"{path}\" is not valid JSON: {source}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Serialize(anyhow::Error),

    #[error("Could not (de)compress the cached file \"{path}\": {source}")]
    Compression {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("The cached copy of \"{path}\" is not valid UTF-8: {source}")]
    Encoding {
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("The file \"{path}\" is not cached.")]
    NotCached { path: String },
}
