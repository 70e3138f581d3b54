//! Slash-separated filesystem paths.
//!
//! A `FilePath` is either relative (`src/main.rs`), absolute (`/home/dev`) or
//! carries a protocol (`http://host/index.html`), which also makes it absolute.
//! Comparisons between paths of different kinds fail with a [`PathError`]
//! instead of returning a meaningless answer.
//!
//! The filesystem operations are thin wrappers over `std::fs`; their failures
//! are reported as [`FileError`]s naming the path involved.

use super::error::{FileError, PathError};
use super::{common_prefix_len, segments_begin_with, segments_difference, Path, PathChain};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::debug;

const PROTOCOL_MARKER: &str = "://";
const PARENT_FOLDER: &str = "..";
const CURRENT_FOLDER: &str = ".";

/// A `/`-separated path to a file or folder.
///
/// # Example
///
/// ```
/// use pathquill::path::{FilePath, Path};
///
/// let walk = FilePath::new("user/address/street").walk_to("user").unwrap();
/// assert_eq!(walk.to_string(), "../..");
///
/// let page = FilePath::new("http://example.com/index.html");
/// assert_eq!(page.protocol(), Some("http"));
/// assert!(page.is_absolute());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilePath {
    segments: Vec<String>,
    absolute: bool,
    protocol: Option<String>,
}

impl Path for FilePath {
    const SEPARATOR: &'static str = "/";
    const CLASS_NAME: &'static str = "FilePath";

    fn segments(&self) -> &[String] {
        &self.segments
    }

    fn segments_mut(&mut self) -> &mut Vec<String> {
        &mut self.segments
    }

    /// Text chains drop the empty segments produced by `//` or a trailing `/`.
    fn normalize_chain(chain: PathChain<'_>) -> Vec<String> {
        match chain {
            PathChain::Text(text) => split_segments(&text),
            other => other.into_segments(Self::SEPARATOR),
        }
    }

    fn to_string_with(&self, separator: &str) -> String {
        format!("{}{}", self.prefix(), self.segments.join(separator))
    }
}

impl FilePath {
    /// Builds a path from a string, a segment sequence or another path.
    ///
    /// Strings starting with `/` are absolute; strings starting with
    /// `<scheme>://` record the protocol and are absolute too. Building from
    /// another `FilePath` copies its absoluteness and protocol.
    pub fn new<'a>(chain: impl Into<PathChain<'a>>) -> Self {
        match chain.into() {
            PathChain::File(path) => path.clone(),
            PathChain::Text(text) => Self::parse(&text),
            other => Self {
                segments: other.into_segments(Self::SEPARATOR),
                ..Self::default()
            },
        }
    }

    fn parse(text: &str) -> Self {
        let (protocol, rest) = match text.find(PROTOCOL_MARKER) {
            Some(position) if is_scheme(&text[..position]) => (
                Some(text[..position].to_string()),
                &text[position + PROTOCOL_MARKER.len()..],
            ),
            _ => (None, text),
        };

        Self {
            absolute: protocol.is_some() || rest.starts_with(Self::SEPARATOR),
            segments: split_segments(rest),
            protocol,
        }
    }

    /// Converts a `std::path::Path` into a `FilePath`.
    pub fn from_std_path(path: &std::path::Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }

    /// Returns the process working directory.
    pub fn current_folder() -> Result<Self, FileError> {
        std::env::current_dir()
            .map(|dir| Self::from_std_path(&dir))
            .map_err(|source| FileError::Metadata {
                path: CURRENT_FOLDER.to_string(),
                source,
            })
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn is_relative(&self) -> bool {
        !self.absolute
    }

    /// Marks the path absolute (or relative when `flag` is false).
    pub fn be_absolute(&mut self, flag: bool) -> &mut Self {
        self.absolute = flag;
        if !flag {
            self.protocol = None;
        }
        self
    }

    /// Marks the path relative (or absolute when `flag` is false).
    ///
    /// A relative path has no protocol.
    pub fn be_relative(&mut self, flag: bool) -> &mut Self {
        self.be_absolute(!flag)
    }

    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    pub fn has_protocol(&self) -> bool {
        self.protocol.is_some()
    }

    fn prefix(&self) -> String {
        match &self.protocol {
            Some(protocol) => format!("{}{}", protocol, PROTOCOL_MARKER),
            None if self.absolute => Self::SEPARATOR.to_string(),
            None => String::new(),
        }
    }

    /// A relative path made of `segments`.
    fn relative(segments: Vec<String>) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    /// A path made of `segments` with the absoluteness and protocol of `self`.
    fn with_segments(&self, segments: Vec<String>) -> Self {
        Self {
            segments,
            absolute: self.absolute,
            protocol: self.protocol.clone(),
        }
    }

    fn check_comparable(&self, other: &FilePath) -> Result<(), PathError> {
        if self.has_protocol() != other.has_protocol() {
            return Err(PathError::ProtocolMismatch);
        }
        if self.absolute != other.absolute {
            return Err(PathError::AbsoluteMismatch);
        }
        Ok(())
    }

    /// Returns true if this path starts with `other`.
    pub fn begins_with<'a>(&self, other: impl Into<PathChain<'a>>) -> Result<bool, PathError> {
        let other = Self::new(other);
        self.check_comparable(&other)?;
        if self.protocol != other.protocol {
            return Ok(false);
        }
        Ok(segments_begin_with(&self.segments, &other.segments))
    }

    /// Returns the longest leading path shared with `other`.
    ///
    /// Paths with different protocols share nothing; the result is then an
    /// empty relative path.
    pub fn root_in_common_with<'a>(&self, other: impl Into<PathChain<'a>>) -> Result<Self, PathError> {
        let other = Self::new(other);
        self.check_comparable(&other)?;
        if self.protocol != other.protocol {
            return Ok(Self::default());
        }
        let common = common_prefix_len(&self.segments, &other.segments);
        Ok(self.with_segments(self.segments[..common].to_vec()))
    }

    /// Returns what remains of this path after removing `other` from its
    /// front, as a relative path.
    ///
    /// If `other` extends this path the result is empty; unrelated paths
    /// return this path unchanged.
    pub fn difference_with<'a>(&self, other: impl Into<PathChain<'a>>) -> Result<Self, PathError> {
        let other = Self::new(other);
        self.check_comparable(&other)?;
        if self.protocol != other.protocol {
            return Ok(self.clone());
        }
        Ok(match segments_difference(&self.segments, &other.segments) {
            Some(segments) => Self::relative(segments),
            None => self.clone(),
        })
    }

    /// Returns the relative path leading from this path to `other`.
    ///
    /// One `..` per segment of this path beyond the common root, followed by
    /// the part of `other` past that root. Equal paths give an empty walk.
    /// Paths with different protocols cannot be walked between; `other` is
    /// returned as is.
    pub fn walk_to<'a>(&self, other: impl Into<PathChain<'a>>) -> Result<Self, PathError> {
        let other = Self::new(other);
        let common = self.root_in_common_with(&other)?;
        if self.protocol != other.protocol {
            return Ok(other);
        }

        let ups = self.length() - common.length();
        let mut segments = vec![PARENT_FOLDER.to_string(); ups];
        segments.extend_from_slice(&other.segments[common.length()..]);
        Ok(Self::relative(segments))
    }

    /// Collapses `.` and `..` segments.
    ///
    /// `..` at the root of an absolute path is dropped; leading `..` of a
    /// relative path are kept.
    pub fn resolve(&self) -> Self {
        let mut resolved: Vec<String> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment.as_str() {
                CURRENT_FOLDER => {}
                PARENT_FOLDER => match resolved.last() {
                    Some(last) if last != PARENT_FOLDER => {
                        resolved.pop();
                    }
                    _ if self.absolute => {}
                    _ => resolved.push(PARENT_FOLDER.to_string()),
                },
                _ => resolved.push(segment.clone()),
            }
        }
        self.with_segments(resolved)
    }

    /// Returns the extension of the last segment, without the dot.
    ///
    /// Dot files such as `.gitignore` have no extension.
    pub fn file_extension(&self) -> &str {
        let name = self.get_last_attribute();
        match name.rfind('.') {
            Some(position) if position > 0 => &name[position + 1..],
            _ => "",
        }
    }

    /// Replaces the extension of the last segment; an empty `extension`
    /// removes it.
    pub fn change_extension(&mut self, extension: &str) -> &mut Self {
        let Some(name) = self.segments.last_mut() else {
            return self;
        };
        let stem = match name.rfind('.') {
            Some(position) if position > 0 => name[..position].to_string(),
            _ => name.clone(),
        };
        *name = if extension.is_empty() {
            stem
        } else {
            format!("{}.{}", stem, extension)
        };
        self
    }

    /// The path as a `PathBuf`, including any protocol prefix.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }

    fn local_path(&self) -> Result<PathBuf, FileError> {
        if self.has_protocol() {
            return Err(FileError::NotLocal {
                path: self.to_string(),
            });
        }
        Ok(self.to_path_buf())
    }

    pub fn exists(&self) -> bool {
        self.local_path().map(|path| path.exists()).unwrap_or(false)
    }

    pub fn is_file(&self) -> bool {
        self.local_path().map(|path| path.is_file()).unwrap_or(false)
    }

    pub fn is_folder(&self) -> bool {
        self.local_path().map(|path| path.is_dir()).unwrap_or(false)
    }

    /// Reads the whole file as UTF-8 text.
    pub fn file_contents(&self) -> Result<String, FileError> {
        fs::read_to_string(self.local_path()?).map_err(|source| self.read_error(source))
    }

    /// Reads the whole file as bytes.
    pub fn file_bytes(&self) -> Result<Vec<u8>, FileError> {
        fs::read(self.local_path()?).map_err(|source| self.read_error(source))
    }

    /// Writes `contents` to the file, creating its parent folders first.
    pub fn write_file_contents(&self, contents: impl AsRef<[u8]>) -> Result<(), FileError> {
        let target = self.local_path()?;
        if self.length() > 1 {
            self.with_segments(self.segments[..self.length() - 1].to_vec())
                .create_folder_path()?;
        }
        debug!(path = %self, "writing file");
        fs::write(target, contents).map_err(|source| FileError::Write {
            path: self.to_string(),
            source,
        })
    }

    /// Creates this folder and any missing parents.
    pub fn create_folder_path(&self) -> Result<(), FileError> {
        let target = self.local_path()?;
        if target.is_dir() {
            return Ok(());
        }
        debug!(path = %self, "creating folder");
        fs::create_dir_all(target).map_err(|source| FileError::CreateFolder {
            path: self.to_string(),
            source,
        })
    }

    /// Deletes the file, or the folder with everything inside it.
    ///
    /// Deleting a path that does not exist succeeds.
    pub fn delete(&self) -> Result<(), FileError> {
        let target = self.local_path()?;
        let result = if target.is_dir() {
            fs::remove_dir_all(&target)
        } else {
            fs::remove_file(&target)
        };
        match result {
            Ok(()) => {
                debug!(path = %self, "deleted");
                Ok(())
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(FileError::Delete {
                path: self.to_string(),
                source,
            }),
        }
    }

    /// Lists the entries of this folder, sorted by name.
    pub fn files_in_folder(&self) -> Result<Vec<FilePath>, FileError> {
        let list_error = |source| FileError::ListFolder {
            path: self.to_string(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(self.local_path()?).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| self.concat(vec![name]))
            .collect())
    }

    pub fn modification_time(&self) -> Result<SystemTime, FileError> {
        self.metadata()?
            .modified()
            .map_err(|source| self.metadata_error(source))
    }

    pub fn file_size(&self) -> Result<u64, FileError> {
        Ok(self.metadata()?.len())
    }

    fn metadata(&self) -> Result<fs::Metadata, FileError> {
        fs::metadata(self.local_path()?).map_err(|source| self.metadata_error(source))
    }

    fn read_error(&self, source: io::Error) -> FileError {
        FileError::Read {
            path: self.to_string(),
            source,
        }
    }

    fn metadata_error(&self, source: io::Error) -> FileError {
        FileError::Metadata {
            path: self.to_string(),
            source,
        }
    }
}

fn split_segments(text: &str) -> Vec<String> {
    text.split(FilePath::SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(Self::SEPARATOR))
    }
}

impl From<&str> for FilePath {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<&std::path::Path> for FilePath {
    fn from(path: &std::path::Path) -> Self {
        Self::from_std_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative() {
        let path = FilePath::new("a/b/c");
        assert!(path.is_relative());
        assert_eq!(path.to_array(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        assert_eq!(FilePath::new("a//b/").to_array(), vec!["a", "b"]);
        assert_eq!(FilePath::new("/").to_string(), "/");
        assert!(FilePath::new("/").is_empty());
    }

    #[test]
    fn test_parse_protocol() {
        let path = FilePath::new("https://example.com/a");
        assert_eq!(path.protocol(), Some("https"));
        assert_eq!(path.to_array(), vec!["example.com", "a"]);
        assert_eq!(path.to_string(), "https://example.com/a");
    }

    #[test]
    fn test_not_a_scheme() {
        let path = FilePath::new("a b://c");
        assert!(!path.has_protocol());
        assert!(path.is_relative());
    }

    #[test]
    fn test_be_relative_clears_protocol() {
        let mut path = FilePath::new("http://host/x");
        path.be_relative(true);
        assert!(!path.has_protocol());
        assert_eq!(path.to_string(), "host/x");
    }

    #[test]
    fn test_resolve() {
        assert_eq!(FilePath::new("/a/./b/../c").resolve().to_string(), "/a/c");
        assert_eq!(FilePath::new("../a/../../b").resolve().to_string(), "../../b");
        assert_eq!(FilePath::new("/../a").resolve().to_string(), "/a");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(FilePath::new("a/b.tar.gz").file_extension(), "gz");
        assert_eq!(FilePath::new("a/.gitignore").file_extension(), "");
        assert_eq!(FilePath::new("a/README").file_extension(), "");
    }

    #[test]
    fn test_change_extension() {
        let mut path = FilePath::new("/a/b.txt");
        path.change_extension("md");
        assert_eq!(path.to_string(), "/a/b.md");
        path.change_extension("");
        assert_eq!(path.to_string(), "/a/b");
    }

    #[test]
    fn test_remote_path_is_not_local() {
        let path = FilePath::new("http://host/file");
        assert!(!path.exists());
        assert!(matches!(path.file_contents(), Err(FileError::NotLocal { .. })));
    }
}
