//! Reads and writes through attribute paths.

use super::error::MissingAttributeError;
use crate::document::value::{Object, Value};
use crate::path::{AttributeKey, AttributePath, Path, PathChain};
use std::borrow::{Borrow, BorrowMut, Cow};

/// Class name given to objects created as intermediate containers.
const GENERIC_CLASS_NAME: &str = "Object";

/// Resolves attribute paths against a root value.
///
/// The root is whatever the caller hands in: `&Value` for read-only access,
/// `&mut Value` for writes, or an owned `Value`. The accessor keeps no other
/// state, so it is cheap to build one per operation.
///
/// # Example
///
/// ```
/// use pathquill::accessor::ObjectAttributeAccessor;
/// use pathquill::document::value::Value;
///
/// let mut root = Value::map();
/// let mut accessor = ObjectAttributeAccessor::new(&mut root);
/// accessor.create_value_at("addresses.[0].address.number", 742).unwrap();
///
/// assert!(accessor.is_defined("addresses.[0]"));
/// assert_eq!(accessor.get_value_at("addresses.[0].address.number").unwrap(), &Value::from(742));
/// ```
#[derive(Debug)]
pub struct ObjectAttributeAccessor<R> {
    root: R,
}

impl<R: Borrow<Value>> ObjectAttributeAccessor<R> {
    pub fn new(root: R) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        self.root.borrow()
    }

    pub fn into_root(self) -> R {
        self.root
    }

    /// Returns true if every segment of `path` names an existing slot.
    ///
    /// Only key existence is checked: a slot holding null is defined.
    pub fn is_defined<'p>(&self, path: impl Into<PathChain<'p>>) -> bool {
        let path = AttributePath::new(path);
        let mut current = self.root();
        for key in path.keys() {
            match current.as_container().and_then(|container| container.get(key)) {
                Some(next) => current = next,
                None => return false,
            }
        }
        true
    }

    pub fn not_defined<'p>(&self, path: impl Into<PathChain<'p>>) -> bool {
        !self.is_defined(path)
    }

    /// Returns the value at `path`.
    ///
    /// Fails when a slot along the way is missing or holds null.
    pub fn get_value_at<'p>(
        &self,
        path: impl Into<PathChain<'p>>,
    ) -> Result<&Value, MissingAttributeError> {
        let path = AttributePath::new(path);
        lookup(self.root(), &path).map_err(|missing| self.missing_attribute(path, missing))
    }

    /// Returns the value at `path`, or the result of `absent` called with the
    /// leading sub-path that failed to resolve.
    pub fn get_value_at_if_absent<'p, F>(&self, path: impl Into<PathChain<'p>>, absent: F) -> Cow<'_, Value>
    where
        F: FnOnce(&AttributePath) -> Value,
    {
        let path = AttributePath::new(path);
        match lookup(self.root(), &path) {
            Ok(value) => Cow::Borrowed(value),
            Err(missing) => Cow::Owned(absent(&missing)),
        }
    }

    /// Returns the value at `path`, or `default` when it does not resolve.
    pub fn get_value_at_or<'p>(
        &self,
        path: impl Into<PathChain<'p>>,
        default: impl Into<Value>,
    ) -> Cow<'_, Value> {
        let default = default.into();
        self.get_value_at_if_absent(path, |_| default)
    }

    fn missing_attribute(&self, path: AttributePath, missing: AttributePath) -> MissingAttributeError {
        MissingAttributeError::new(self.root().clone(), path, missing)
    }
}

impl<'a> ObjectAttributeAccessor<&'a Value> {
    /// Like [`get_value_at`](Self::get_value_at), but the result borrows the
    /// root instead of the accessor.
    pub fn into_value_at<'p>(
        self,
        path: impl Into<PathChain<'p>>,
    ) -> Result<&'a Value, MissingAttributeError> {
        let root = self.root;
        let path = AttributePath::new(path);
        lookup(root, &path).map_err(|missing| MissingAttributeError::new(root.clone(), path, missing))
    }
}

impl<R: BorrowMut<Value>> ObjectAttributeAccessor<R> {
    pub fn root_mut(&mut self) -> &mut Value {
        self.root.borrow_mut()
    }

    /// Overwrites the value at `path`.
    ///
    /// Every segment, including the last one, must already exist. Nothing is
    /// created; use [`create_value_at`](Self::create_value_at) for that.
    pub fn set_value_at<'p>(
        &mut self,
        path: impl Into<PathChain<'p>>,
        value: impl Into<Value>,
    ) -> Result<(), MissingAttributeError> {
        let path = AttributePath::new(path);
        let value = value.into();
        let result = slot_mut(self.root.borrow_mut(), &path).map(|slot| *slot = value);
        result.map_err(|missing| self.missing_attribute(path, missing))
    }

    /// Writes `value` at `path`, creating missing intermediate containers.
    ///
    /// A missing intermediate becomes an empty list when the following segment
    /// is an index, an empty map when the root is a map, and an empty generic
    /// `Object` otherwise. Intermediates that already hold a value are kept.
    pub fn create_value_at<'p>(
        &mut self,
        path: impl Into<PathChain<'p>>,
        value: impl Into<Value>,
    ) -> Result<(), MissingAttributeError> {
        let path = AttributePath::new(path);
        let result = create(self.root.borrow_mut(), &path, value.into());
        result.map_err(|missing| self.missing_attribute(path, missing))
    }
}

/// Walks `path` for reading. On failure returns the walked sub-path,
/// ending with the segment that was missing or null.
fn lookup<'v>(root: &'v Value, path: &AttributePath) -> Result<&'v Value, AttributePath> {
    let mut current = root;
    let mut walked = AttributePath::default();

    for (segment, key) in path.segments().iter().zip(path.keys()) {
        walked.segments_mut().push(segment.clone());
        match current.as_container().and_then(|container| container.get(key)) {
            Some(next) if !next.is_null() => current = next,
            _ => return Err(walked),
        }
    }

    if current.is_null() {
        return Err(walked);
    }
    Ok(current)
}

/// Walks `path` to an existing slot for writing.
fn slot_mut<'v>(root: &'v mut Value, path: &AttributePath) -> Result<&'v mut Value, AttributePath> {
    let mut current = root;
    let mut walked = AttributePath::default();

    for (segment, key) in path.segments().iter().zip(path.keys()) {
        walked.segments_mut().push(segment.clone());
        current = match current
            .as_container_mut()
            .and_then(|container| container.get_mut(key))
        {
            Some(next) => next,
            None => return Err(walked),
        };
    }

    Ok(current)
}

fn create(root: &mut Value, path: &AttributePath, value: Value) -> Result<(), AttributePath> {
    let keys: Vec<AttributeKey<'_>> = path.keys().collect();
    let Some((last, intermediates)) = keys.split_last() else {
        *root = value;
        return Ok(());
    };

    let fill_with_maps = root.is_map();
    let mut current = root;
    let mut walked = AttributePath::default();

    for (position, key) in intermediates.iter().enumerate() {
        walked.segments_mut().push(path.segments()[position].clone());

        let Some(container) = current.as_container_mut() else {
            return Err(walked);
        };

        let present = container
            .get(*key)
            .is_some_and(|existing| !existing.is_null());
        if !present {
            let fresh = empty_container(keys[position + 1].is_index(), fill_with_maps);
            if !container.set(*key, fresh) {
                return Err(walked);
            }
        }

        current = match container.get_mut(*key) {
            Some(next) => next,
            None => return Err(walked),
        };
    }

    walked
        .segments_mut()
        .push(path.get_last_attribute().to_string());

    let Some(container) = current.as_container_mut() else {
        return Err(walked);
    };
    if container.set(*last, value) {
        Ok(())
    } else {
        Err(walked)
    }
}

fn empty_container(for_index: bool, as_map: bool) -> Value {
    if for_index {
        Value::list()
    } else if as_map {
        Value::map()
    } else {
        Value::Object(Object::new(GENERIC_CLASS_NAME))
    }
}
