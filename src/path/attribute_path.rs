//! Dot-separated paths into value graphs.

use super::{common_prefix_len, segments_begin_with, segments_difference, Path, PathChain};
use crate::accessor::{MissingAttributeError, ObjectAttributeAccessor};
use crate::document::value::Value;
use std::fmt;

/// A decoded attribute segment.
///
/// A segment of the exact form `[<digits>]` is a list index; anything else is
/// a map key or object field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKey<'a> {
    Name(&'a str),
    Index(usize),
}

impl<'a> AttributeKey<'a> {
    /// Decodes a single segment.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::path::AttributeKey;
    ///
    /// assert_eq!(AttributeKey::decode("[3]"), AttributeKey::Index(3));
    /// assert_eq!(AttributeKey::decode("street"), AttributeKey::Name("street"));
    /// assert_eq!(AttributeKey::decode("[x]"), AttributeKey::Name("[x]"));
    /// ```
    pub fn decode(segment: &'a str) -> Self {
        segment
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(AttributeKey::Index)
            .unwrap_or(AttributeKey::Name(segment))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, AttributeKey::Index(_))
    }

    /// The key this segment addresses inside a string-keyed map.
    pub fn map_key(&self) -> String {
        match self {
            AttributeKey::Name(name) => name.to_string(),
            AttributeKey::Index(index) => index.to_string(),
        }
    }
}

/// A `.`-separated path addressing a nested value.
///
/// # Example
///
/// ```
/// use pathquill::document::parser::parse_json;
/// use pathquill::path::{AttributePath, Path};
///
/// let root = parse_json(r#"{"address": {"street": "Evergreen 742"}}"#).unwrap();
/// let path = AttributePath::new("address.street");
///
/// assert_eq!(path.length(), 2);
/// assert_eq!(path.get_value_from(&root).unwrap().as_str(), Some("Evergreen 742"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributePath {
    segments: Vec<String>,
}

impl Path for AttributePath {
    const SEPARATOR: &'static str = ".";
    const CLASS_NAME: &'static str = "AttributePath";

    fn segments(&self) -> &[String] {
        &self.segments
    }

    fn segments_mut(&mut self) -> &mut Vec<String> {
        &mut self.segments
    }
}

impl AttributePath {
    /// Builds a path from a string, a segment sequence or another path.
    pub fn new<'a>(chain: impl Into<PathChain<'a>>) -> Self {
        Self {
            segments: Self::normalize_chain(chain.into()),
        }
    }

    /// Decodes every segment, root first.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey<'_>> {
        self.segments.iter().map(|segment| AttributeKey::decode(segment))
    }

    /// Reads the value this path addresses inside `root`.
    pub fn get_value_from<'v>(&self, root: &'v Value) -> Result<&'v Value, MissingAttributeError> {
        ObjectAttributeAccessor::new(root).into_value_at(self)
    }

    /// Overwrites the value this path addresses inside `root`.
    ///
    /// Every segment must already exist; see
    /// [`ObjectAttributeAccessor::set_value_at`].
    pub fn set_value_to(
        &self,
        root: &mut Value,
        value: impl Into<Value>,
    ) -> Result<(), MissingAttributeError> {
        ObjectAttributeAccessor::new(root).set_value_at(self, value)
    }

    /// Writes `value` at this path, creating missing intermediate containers.
    pub fn create_value_in(
        &self,
        root: &mut Value,
        value: impl Into<Value>,
    ) -> Result<(), MissingAttributeError> {
        ObjectAttributeAccessor::new(root).create_value_at(self, value)
    }

    /// Returns true if `other` has exactly the same segments.
    pub fn equals<'a>(&self, other: impl Into<PathChain<'a>>) -> bool {
        self.segments == Self::normalize_chain(other.into())
    }

    /// Returns true if this path starts with the segments of `other`.
    ///
    /// An empty `other` is a prefix of every path; a non-empty `other` is
    /// never a prefix of an empty path.
    pub fn begins_with<'a>(&self, other: impl Into<PathChain<'a>>) -> bool {
        segments_begin_with(&self.segments, &Self::normalize_chain(other.into()))
    }

    /// Returns the longest run of leading segments shared with `other`.
    pub fn root_in_common_with<'a>(&self, other: impl Into<PathChain<'a>>) -> Self {
        let other = Self::normalize_chain(other.into());
        let common = common_prefix_len(&self.segments, &other);
        Self {
            segments: self.segments[..common].to_vec(),
        }
    }

    /// Returns what remains of this path after removing `other` from its front.
    ///
    /// If `other` extends (or equals) this path the result is empty; if the two
    /// paths are unrelated this path is returned unchanged.
    pub fn difference_with<'a>(&self, other: impl Into<PathChain<'a>>) -> Self {
        let other = Self::normalize_chain(other.into());
        match segments_difference(&self.segments, &other) {
            Some(segments) => Self { segments },
            None => self.clone(),
        }
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(Self::SEPARATOR))
    }
}

impl From<&str> for AttributePath {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<Vec<String>> for AttributePath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}
