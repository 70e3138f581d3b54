//! On-disk cache of file copies.
//!
//! A [`FilesCache`] mirrors source files into a cache folder and keeps a JSON
//! [`FilesCacheManifest`] next to them recording where each copy lives and
//! when its source was last modified. The manifest is read and updated
//! exclusively through attribute paths.

pub mod error;
pub mod files_cache;
pub mod manifest;

pub use error::CacheError;
pub use files_cache::FilesCache;
pub use manifest::{CacheEntry, FilesCacheManifest};
