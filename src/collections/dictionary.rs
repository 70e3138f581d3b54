//! String-keyed, insertion-ordered associative table.

use super::error::MissingKeyError;
use indexmap::IndexMap;
use std::borrow::Cow;

/// A dictionary with checked key access.
///
/// # Example
///
/// ```
/// use pathquill::collections::Dictionary;
///
/// let mut ages = Dictionary::new();
/// ages.at_put("Lisa", 8);
///
/// assert_eq!(ages.at("Lisa"), Ok(&8));
/// assert_eq!(ages.at("Bart").unwrap_err().to_string(), "The key \"Bart\" is not defined.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for Dictionary<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> Dictionary<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn at(&self, key: &str) -> Result<&V, MissingKeyError> {
        self.entries.get(key).ok_or_else(|| MissingKeyError {
            key: key.to_string(),
        })
    }

    pub fn at_mut(&mut self, key: &str) -> Result<&mut V, MissingKeyError> {
        self.entries.get_mut(key).ok_or_else(|| MissingKeyError {
            key: key.to_string(),
        })
    }

    /// Returns the value at `key`, or the value built by `absent` when there
    /// is none.
    pub fn at_if_absent(&self, key: &str, absent: impl FnOnce() -> V) -> Cow<'_, V>
    where
        V: Clone,
    {
        match self.entries.get(key) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(absent()),
        }
    }

    /// Stores `value` at `key`, replacing any previous value in place.
    pub fn at_put(&mut self, key: impl Into<String>, value: V) -> &mut Self {
        self.entries.insert(key.into(), value);
        self
    }

    /// Removes the entry at `key`, keeping the order of the others.
    pub fn remove_at(&mut self, key: &str) -> Result<V, MissingKeyError> {
        self.entries.shift_remove(key).ok_or_else(|| MissingKeyError {
            key: key.to_string(),
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.entries.iter()
    }

    /// Copies every entry of `other` into this dictionary; keys present in
    /// both take the value from `other`.
    pub fn merge(&mut self, other: &Dictionary<V>) -> &mut Self
    where
        V: Clone,
    {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }
}

impl<V> FromIterator<(String, V)> for Dictionary<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, V> IntoIterator for &'a Dictionary<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
