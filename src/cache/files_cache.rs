//! Local copies of files, kept fresh against their sources.

use super::error::CacheError;
use super::manifest::{millis_since_epoch, source_modification_millis, FilesCacheManifest};
use crate::config::Config;
use crate::path::{FilePath, Path};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};
use std::time::SystemTime;
use tracing::debug;

const COMPRESSED_SUFFIX: &str = ".gz";
const PARENT_FOLDER: &str = "..";
const LOCAL_FOLDER: &str = "local";
const REMOTE_FOLDER: &str = "remote";

/// A folder of cached file copies plus the manifest describing them.
///
/// Sources are keyed by their resolved absolute form, so `docs/a.md` and
/// `docs/../docs/a.md` share one entry. Local sources are mirrored under
/// `<cache_folder>/local` and remote ones under `<cache_folder>/remote/<protocol>`:
/// `/site/index.md` is cached as `<cache_folder>/local/site/index.md`, or with
/// a `.gz` suffix when compression is on. A copy is stale once its source has
/// been modified since it was cached.
///
/// # Example
///
/// ```no_run
/// use pathquill::cache::FilesCache;
/// use pathquill::config::Config;
/// use pathquill::path::FilePath;
///
/// let mut cache = FilesCache::new(&Config::default())?;
/// let source = FilePath::new("docs/guide.md");
/// if cache.needs_caching(&source)? {
///     cache.cache_file(&source)?;
/// }
/// let text = cache.read_file_contents(&source)?;
/// # Ok::<(), pathquill::cache::CacheError>(())
/// ```
#[derive(Debug)]
pub struct FilesCache {
    folder: FilePath,
    manifest: FilesCacheManifest,
    compress: bool,
}

impl FilesCache {
    /// Opens the cache described by `config`, creating its folder if needed.
    pub fn new(config: &Config) -> Result<Self, CacheError> {
        let folder = FilePath::new(config.cache_folder.as_str());
        folder.create_folder_path()?;

        let manifest_file = folder.concat(vec![config.manifest_file.clone()]);
        let manifest = FilesCacheManifest::load(manifest_file, config.pretty_manifest)?;

        debug!(folder = %folder, compress = config.compress, "opened files cache");
        Ok(Self {
            folder,
            manifest,
            compress: config.compress,
        })
    }

    /// Opens the cache described by the user's config file, or by the
    /// defaults when there is none.
    pub fn open_default() -> Result<Self, CacheError> {
        Self::new(&Config::load())
    }

    pub fn cache_folder(&self) -> &FilePath {
        &self.folder
    }

    pub fn manifest(&self) -> &FilesCacheManifest {
        &self.manifest
    }

    /// Where the copy of `source` lives inside the cache folder.
    ///
    /// Relative sources are taken from the current folder.
    pub fn cached_file_path(&self, source: &FilePath) -> Result<FilePath, CacheError> {
        let source = normalized(source)?;
        let mut segments = match source.protocol() {
            Some(protocol) => vec![REMOTE_FOLDER.to_string(), protocol.to_string()],
            None => vec![LOCAL_FOLDER.to_string()],
        };
        segments.extend(
            source
                .segments()
                .iter()
                .filter(|segment| segment.as_str() != PARENT_FOLDER)
                .cloned(),
        );

        if self.compress {
            if let Some(name) = segments.last_mut() {
                name.push_str(COMPRESSED_SUFFIX);
            }
        }
        Ok(self.folder.concat(segments))
    }

    /// Returns true if `source` has no up-to-date copy in the cache.
    pub fn needs_caching(&self, source: &FilePath) -> Result<bool, CacheError> {
        let stale = self.manifest.needs_caching(&normalized(source)?)?;
        if stale {
            debug!(source = %source, "cache miss");
        } else {
            debug!(source = %source, "cache hit");
        }
        Ok(stale)
    }

    /// Stores `contents` as the cached copy of `source` and records it.
    ///
    /// Sources with no local file (remote or generated content) are stamped
    /// with the current time.
    pub fn write_file(
        &mut self,
        source: &FilePath,
        contents: impl AsRef<[u8]>,
    ) -> Result<FilePath, CacheError> {
        let key = normalized(source)?;
        let cached_file = self.cached_file_path(&key)?;
        let source_modified = match source_modification_millis(&key)? {
            Some(modified) => modified,
            None => millis_since_epoch(SystemTime::now()),
        };

        if self.compress {
            let compressed = compress(&cached_file, contents.as_ref())?;
            cached_file.write_file_contents(compressed)?;
        } else {
            cached_file.write_file_contents(contents)?;
        }

        self.manifest
            .record(&key, &cached_file, source_modified, self.compress)?;
        self.manifest.save()?;

        debug!(source = %source, cached_file = %cached_file, "cached file");
        Ok(cached_file)
    }

    /// Copies the current contents of `source` into the cache.
    pub fn cache_file(&mut self, source: &FilePath) -> Result<FilePath, CacheError> {
        let contents = source.file_bytes()?;
        self.write_file(source, contents)
    }

    /// Reads the cached copy of `source`, decompressing it if needed.
    pub fn read_file(&self, source: &FilePath) -> Result<Vec<u8>, CacheError> {
        let entry = self
            .manifest
            .entry_for(&normalized(source)?)
            .ok_or_else(|| CacheError::NotCached {
                path: source.to_string(),
            })?;

        let bytes = entry.cached_file.file_bytes()?;
        if entry.compressed {
            decompress(&entry.cached_file, &bytes)
        } else {
            Ok(bytes)
        }
    }

    /// Reads the cached copy of `source` as UTF-8 text.
    pub fn read_file_contents(&self, source: &FilePath) -> Result<String, CacheError> {
        String::from_utf8(self.read_file(source)?).map_err(|source_error| CacheError::Encoding {
            path: source.to_string(),
            source: source_error,
        })
    }

    /// Deletes the cached copy of `source` and its manifest entry.
    ///
    /// Returns false if `source` was not cached.
    pub fn forget(&mut self, source: &FilePath) -> Result<bool, CacheError> {
        let key = normalized(source)?;
        let Some(entry) = self.manifest.entry_for(&key) else {
            return Ok(false);
        };
        entry.cached_file.delete()?;
        self.manifest.forget(&key);
        self.manifest.save()?;

        debug!(source = %source, "forgot cached file");
        Ok(true)
    }

    /// Deletes every cached copy and empties the manifest.
    pub fn clear(&mut self) -> Result<(), CacheError> {
        self.folder.delete()?;
        self.folder.create_folder_path()?;
        self.manifest.clear();
        self.manifest.save()?;

        debug!(folder = %self.folder, "cleared files cache");
        Ok(())
    }
}

/// The resolved absolute form of `source`, used as its manifest key.
fn normalized(source: &FilePath) -> Result<FilePath, CacheError> {
    if source.is_absolute() || source.has_protocol() {
        return Ok(source.resolve());
    }
    Ok(FilePath::current_folder()?.concat(source).resolve())
}

fn compress(cached_file: &FilePath, contents: &[u8]) -> Result<Vec<u8>, CacheError> {
    let compression_error = |source| CacheError::Compression {
        path: cached_file.to_string(),
        source,
    };

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(contents).map_err(compression_error)?;
    encoder.finish().map_err(compression_error)
}

fn decompress(cached_file: &FilePath, bytes: &[u8]) -> Result<Vec<u8>, CacheError> {
    let mut decoder = GzDecoder::new(bytes);
    let mut contents = Vec::new();
    decoder
        .read_to_end(&mut contents)
        .map_err(|source| CacheError::Compression {
            path: cached_file.to_string(),
            source,
        })?;
    Ok(contents)
}
