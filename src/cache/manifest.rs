//! The JSON manifest that records what the cache holds.
//!
//! The manifest is decoded into a [`Value`] and only ever read and written
//! through attribute paths:
//!
//! ```json
//! {
//!   "cached_files": {
//!     "/site/index.md": {
//!       "cached_file": ".pathquill-cache/site/index.md",
//!       "source_modified": 1700000000000,
//!       "compressed": false
//!     }
//!   }
//! }
//! ```

use super::error::CacheError;
use crate::accessor::ObjectAttributeAccessor;
use crate::document::parser::{from_json_value, to_json_string};
use crate::document::value::Value;
use crate::path::{AttributePath, FileError, FilePath};
use anyhow::Context;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

const CACHED_FILES: &str = "cached_files";
const CACHED_FILE: &str = "cached_file";
const SOURCE_MODIFIED: &str = "source_modified";
const COMPRESSED: &str = "compressed";

/// What the manifest knows about one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub cached_file: FilePath,
    /// Source modification time, in milliseconds since the Unix epoch
    pub source_modified: u64,
    pub compressed: bool,
}

#[derive(Debug, Clone)]
pub struct FilesCacheManifest {
    file: FilePath,
    contents: Value,
    pretty: bool,
}

impl FilesCacheManifest {
    /// Loads the manifest stored at `file`; a missing file is an empty manifest.
    pub fn load(file: FilePath, pretty: bool) -> Result<Self, CacheError> {
        let contents = if file.is_file() {
            let text = file.file_contents()?;
            let json = serde_json::from_str(&text).map_err(|source| CacheError::Manifest {
                path: file.to_string(),
                source,
            })?;
            from_json_value(&json)
        } else {
            Value::map()
        };

        trace!(manifest = %file, "loaded cache manifest");
        Ok(Self {
            file,
            contents,
            pretty,
        })
    }

    pub fn file(&self) -> &FilePath {
        &self.file
    }

    /// Writes the manifest to a temporary file and renames it into place.
    pub fn save(&self) -> Result<(), CacheError> {
        let text = to_json_string(&self.contents, self.pretty)
            .with_context(|| format!("Failed to serialize the cache manifest \"{}\"", self.file))
            .map_err(CacheError::Serialize)?;

        let mut temp = self.file.clone();
        temp.change_extension("tmp");
        temp.write_file_contents(text)?;

        fs::rename(temp.to_path_buf(), self.file.to_path_buf()).map_err(|source| {
            FileError::Write {
                path: self.file.to_string(),
                source,
            }
        })?;
        trace!(manifest = %self.file, "saved cache manifest");
        Ok(())
    }

    fn entry_path(source: &FilePath, attribute: &str) -> AttributePath {
        AttributePath::new(vec![
            CACHED_FILES.to_string(),
            source.to_string(),
            attribute.to_string(),
        ])
    }

    /// Returns the recorded entry for `source`, if any.
    pub fn entry_for(&self, source: &FilePath) -> Option<CacheEntry> {
        let accessor = ObjectAttributeAccessor::new(&self.contents);

        let cached_file =
            accessor.get_value_at_or(Self::entry_path(source, CACHED_FILE), Value::Null);
        let source_modified =
            accessor.get_value_at_or(Self::entry_path(source, SOURCE_MODIFIED), Value::Null);
        let compressed = accessor
            .get_value_at_or(Self::entry_path(source, COMPRESSED), false)
            .as_bool()
            .unwrap_or(false);

        Some(CacheEntry {
            cached_file: FilePath::new(cached_file.as_str()?),
            source_modified: u64::try_from(source_modified.as_i64()?).ok()?,
            compressed,
        })
    }

    /// Returns true if `source` has no entry, its cached copy is gone, or
    /// it changed since it was cached.
    ///
    /// Sources without a local file (remote or generated content) stay fresh
    /// for as long as their copy exists.
    pub fn needs_caching(&self, source: &FilePath) -> Result<bool, CacheError> {
        let Some(entry) = self.entry_for(source) else {
            return Ok(true);
        };
        if !entry.cached_file.is_file() {
            return Ok(true);
        }
        Ok(match source_modification_millis(source)? {
            Some(modified) => modified != entry.source_modified,
            None => false,
        })
    }

    /// Records that `cached_file` holds the current contents of `source`.
    pub fn record(
        &mut self,
        source: &FilePath,
        cached_file: &FilePath,
        source_modified: u64,
        compressed: bool,
    ) -> Result<(), CacheError> {
        let mut accessor = ObjectAttributeAccessor::new(&mut self.contents);
        accessor.create_value_at(Self::entry_path(source, CACHED_FILE), cached_file.to_string())?;
        accessor.create_value_at(Self::entry_path(source, SOURCE_MODIFIED), source_modified)?;
        accessor.create_value_at(Self::entry_path(source, COMPRESSED), compressed)?;
        Ok(())
    }

    /// Removes the entry for `source`. Returns true if there was one.
    pub fn forget(&mut self, source: &FilePath) -> bool {
        let Value::Map(root) = &mut self.contents else {
            return false;
        };
        match root.get_mut(CACHED_FILES) {
            Some(Value::Map(files)) => files.shift_remove(&source.to_string()).is_some(),
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.contents = Value::map();
    }

    /// Every source path with an entry, in recording order.
    pub fn cached_sources(&self) -> Vec<FilePath> {
        let accessor = ObjectAttributeAccessor::new(&self.contents);
        let files = accessor.get_value_at_or(CACHED_FILES, Value::Null);
        files
            .as_map()
            .map(|files| files.keys().map(|key| FilePath::new(key.as_str())).collect())
            .unwrap_or_default()
    }
}

/// Modification time of `source` in milliseconds since the Unix epoch, or
/// `None` when it is not a local file.
pub(crate) fn source_modification_millis(source: &FilePath) -> Result<Option<u64>, CacheError> {
    if !source.is_file() {
        return Ok(None);
    }
    Ok(Some(millis_since_epoch(source.modification_time()?)))
}

pub(crate) fn millis_since_epoch(time: SystemTime) -> u64 {
    let millis = time
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);
    u64::try_from(millis).unwrap_or(u64::MAX)
}
