//! Segment paths for addressing nested values and filesystem trees.
//!
//! A path is an ordered sequence of string segments (root first) plus a
//! separator used only when converting from and to text. Two flavors exist:
//!
//! - [`AttributePath`] - `.`-separated, addresses map keys, object fields and
//!   list indices (`[0]`) inside a [`Value`](crate::document::Value)
//! - [`FilePath`] - `/`-separated, absolute or relative, optionally prefixed
//!   by a protocol (`http://`)
//!
//! The shared algebra lives on the [`Path`] trait. Methods come in pairs: one
//! that returns a new path and leaves the receiver alone (`concat`, `back`) and
//! one that mutates the receiver in place (`append`, `drop`).
//!
//! # Examples
//!
//! ```
//! use pathquill::path::{AttributePath, FilePath, Path};
//!
//! let street = AttributePath::new("user.address.street");
//! assert_eq!(street.back(2).unwrap().to_string(), "user");
//!
//! let src = FilePath::new("/home").concat("dev/src");
//! assert_eq!(src.to_string(), "/home/dev/src");
//! assert!(src.is_absolute());
//! ```

pub mod attribute_path;
pub mod error;
pub mod file_path;

pub use attribute_path::{AttributeKey, AttributePath};
pub use error::{FileError, PathError};
pub use file_path::FilePath;

use std::borrow::Cow;

/// Any input accepted where a path is expected.
///
/// Strings are split on the separator of the path they are applied to, so the
/// same text means different things to an `AttributePath` and a `FilePath`.
#[derive(Debug, Clone, Default)]
pub enum PathChain<'a> {
    #[default]
    Empty,
    Text(Cow<'a, str>),
    Segments(Vec<String>),
    Attribute(&'a AttributePath),
    File(&'a FilePath),
}

impl PathChain<'_> {
    /// Normalizes the chain into owned segments.
    pub fn into_segments(self, separator: &str) -> Vec<String> {
        match self {
            PathChain::Empty => Vec::new(),
            PathChain::Text(text) if text.is_empty() => Vec::new(),
            PathChain::Text(text) => text.split(separator).map(str::to_string).collect(),
            PathChain::Segments(segments) => segments,
            PathChain::Attribute(path) => path.to_array(),
            PathChain::File(path) => path.to_array(),
        }
    }
}

impl<'a> From<&'a str> for PathChain<'a> {
    fn from(text: &'a str) -> Self {
        PathChain::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for PathChain<'a> {
    fn from(text: &'a String) -> Self {
        PathChain::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for PathChain<'_> {
    fn from(text: String) -> Self {
        PathChain::Text(Cow::Owned(text))
    }
}

impl From<Vec<String>> for PathChain<'_> {
    fn from(segments: Vec<String>) -> Self {
        PathChain::Segments(segments)
    }
}

impl From<Vec<&str>> for PathChain<'_> {
    fn from(segments: Vec<&str>) -> Self {
        PathChain::Segments(segments.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PathChain<'_> {
    fn from(segments: &[&str]) -> Self {
        PathChain::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for PathChain<'_> {
    fn from(segments: &[String]) -> Self {
        PathChain::Segments(segments.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for PathChain<'_> {
    fn from(segments: [&str; N]) -> Self {
        PathChain::Segments(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a> From<&'a AttributePath> for PathChain<'a> {
    fn from(path: &'a AttributePath) -> Self {
        PathChain::Attribute(path)
    }
}

impl<'a> From<&'a FilePath> for PathChain<'a> {
    fn from(path: &'a FilePath) -> Self {
        PathChain::File(path)
    }
}

impl From<AttributePath> for PathChain<'_> {
    fn from(path: AttributePath) -> Self {
        PathChain::Segments(path.to_array())
    }
}

/// Structural operations shared by every path flavor.
pub trait Path: Clone {
    /// Separator used to split and join the textual form.
    const SEPARATOR: &'static str;

    /// Name used in error messages.
    const CLASS_NAME: &'static str;

    fn segments(&self) -> &[String];

    fn segments_mut(&mut self) -> &mut Vec<String>;

    /// Turns a chain into the segments this flavor would append.
    fn normalize_chain(chain: PathChain<'_>) -> Vec<String> {
        chain.into_segments(Self::SEPARATOR)
    }

    /// Returns the number of segments.
    fn length(&self) -> usize {
        self.segments().len()
    }

    fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }

    /// Returns the last segment, or `""` for an empty path.
    fn get_last_attribute(&self) -> &str {
        self.segments().last().map(String::as_str).unwrap_or("")
    }

    /// Returns an owned copy of the segments.
    fn to_array(&self) -> Vec<String> {
        self.segments().to_vec()
    }

    /// Joins the segments with `separator`.
    fn to_string_with(&self, separator: &str) -> String {
        self.segments().join(separator)
    }

    /// Returns a new path made of this one followed by `chain`.
    fn concat<'c>(&self, chain: impl Into<PathChain<'c>>) -> Self {
        let mut path = self.clone();
        path.append(chain);
        path
    }

    /// Adds the segments of `chain` at the end of this path.
    fn append<'c>(&mut self, chain: impl Into<PathChain<'c>>) -> &mut Self {
        let segments = Self::normalize_chain(chain.into());
        self.segments_mut().extend(segments);
        self
    }

    /// Returns a new path without its last `n` segments.
    ///
    /// Removing more segments than the path has gives an empty path.
    fn back(&self, n: isize) -> Result<Self, PathError> {
        let count = checked_count::<Self>("back", n)?;
        let mut path = self.clone();
        truncate_back(path.segments_mut(), count);
        Ok(path)
    }

    /// Removes the last `n` segments of this path.
    fn drop(&mut self, n: isize) -> Result<&mut Self, PathError> {
        let count = checked_count::<Self>("drop", n)?;
        truncate_back(self.segments_mut(), count);
        Ok(self)
    }
}

fn checked_count<P: Path>(method: &'static str, n: isize) -> Result<usize, PathError> {
    usize::try_from(n).map_err(|_| PathError::InvalidParameter {
        class_name: P::CLASS_NAME,
        method,
        parameter: n,
    })
}

fn truncate_back(segments: &mut Vec<String>, count: usize) {
    let keep = segments.len().saturating_sub(count);
    segments.truncate(keep);
}

/// Number of leading segments `a` and `b` have in common.
pub(crate) fn common_prefix_len(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Prefix test where an empty prefix matches anything and a non-empty
/// prefix never matches an empty path.
pub(crate) fn segments_begin_with(segments: &[String], prefix: &[String]) -> bool {
    if prefix.is_empty() {
        return true;
    }
    !segments.is_empty() && segments.starts_with(prefix)
}

/// Suffix of `segments` past `other`, following the difference rules shared
/// by both path flavors. `None` means "no relation".
pub(crate) fn segments_difference(segments: &[String], other: &[String]) -> Option<Vec<String>> {
    if segments.is_empty() {
        return Some(Vec::new());
    }
    if segments.starts_with(other) {
        return Some(segments[other.len()..].to_vec());
    }
    if other.starts_with(segments) {
        return Some(Vec::new());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_chain_text_splits_on_separator() {
        let chain = PathChain::from("a.b/c");
        assert_eq!(chain.clone().into_segments("."), strings(&["a", "b/c"]));
        assert_eq!(chain.into_segments("/"), strings(&["a.b", "c"]));
    }

    #[test]
    fn test_chain_empty_text_has_no_segments() {
        assert!(PathChain::from("").into_segments(".").is_empty());
        assert!(PathChain::Empty.into_segments(".").is_empty());
    }

    #[test]
    fn test_chain_segments_are_kept_verbatim() {
        let chain = PathChain::from(vec!["a.b", "c"]);
        assert_eq!(chain.into_segments("."), strings(&["a.b", "c"]));
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(&strings(&["a", "b", "c"]), &strings(&["a", "b", "d"])), 2);
        assert_eq!(common_prefix_len(&strings(&["a"]), &strings(&["b"])), 0);
        assert_eq!(common_prefix_len(&[], &strings(&["b"])), 0);
    }

    #[test]
    fn test_segments_difference() {
        let abc = strings(&["a", "b", "c"]);
        assert_eq!(segments_difference(&abc, &strings(&["a"])), Some(strings(&["b", "c"])));
        assert_eq!(segments_difference(&strings(&["a"]), &abc), Some(Vec::new()));
        assert_eq!(segments_difference(&abc, &strings(&["x"])), None);
        assert_eq!(segments_difference(&[], &abc), Some(Vec::new()));
    }
}
