//! Indexed sequence with checked access.
//!
//! Indices may be negative to count from the end: `-1` is the last item.

use super::error::OutOfRangeError;
use std::borrow::Cow;

/// An ordered, growable collection.
///
/// # Example
///
/// ```
/// use pathquill::collections::OrderedCollection;
///
/// let mut names = OrderedCollection::with_all(["Lisa", "Bart"]);
/// names.add("Maggie");
///
/// assert_eq!(names.at(-1), Ok(&"Maggie"));
/// assert!(names.at(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedCollection<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> OrderedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn add_first(&mut self, item: T) -> &mut Self {
        self.items.insert(0, item);
        self
    }

    pub fn add_all(&mut self, items: impl IntoIterator<Item = T>) -> &mut Self {
        self.items.extend(items);
        self
    }

    /// Maps a possibly negative index to a position inside the collection.
    fn position_of(&self, index: isize) -> Result<usize, OutOfRangeError> {
        let size = self.items.len();
        let position = if index < 0 {
            size.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        position
            .filter(|&position| position < size)
            .ok_or(OutOfRangeError { index, size })
    }

    pub fn at(&self, index: isize) -> Result<&T, OutOfRangeError> {
        let position = self.position_of(index)?;
        Ok(&self.items[position])
    }

    /// Returns the item at `index`, or the item built by `absent` when out of
    /// range.
    pub fn at_if_absent(&self, index: isize, absent: impl FnOnce() -> T) -> Cow<'_, T>
    where
        T: Clone,
    {
        match self.at(index) {
            Ok(item) => Cow::Borrowed(item),
            Err(_) => Cow::Owned(absent()),
        }
    }

    /// Replaces the item at `index`.
    pub fn at_put(&mut self, index: isize, item: T) -> Result<&mut Self, OutOfRangeError> {
        let position = self.position_of(index)?;
        self.items[position] = item;
        Ok(self)
    }

    pub fn remove_at(&mut self, index: isize) -> Result<T, OutOfRangeError> {
        let position = self.position_of(index)?;
        Ok(self.items.remove(position))
    }

    pub fn remove_first(&mut self) -> Result<T, OutOfRangeError> {
        self.remove_at(0)
    }

    pub fn remove_last(&mut self) -> Result<T, OutOfRangeError> {
        self.remove_at(-1)
    }

    pub fn first(&self) -> Result<&T, OutOfRangeError> {
        self.at(0)
    }

    pub fn last(&self) -> Result<&T, OutOfRangeError> {
        self.at(-1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a new collection with the items matching `predicate`.
    pub fn select(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        Self::with_all(self.items.iter().filter(|item| predicate(*item)).cloned())
    }

    /// Returns a new collection with `f` applied to every item.
    pub fn collect<U>(&self, f: impl FnMut(&T) -> U) -> OrderedCollection<U> {
        OrderedCollection::with_all(self.items.iter().map(f))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T: PartialEq> OrderedCollection<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    pub fn includes(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_all(iter)
    }
}

impl<T> IntoIterator for OrderedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
