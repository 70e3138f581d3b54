//! Capability interface over the three container shapes.
//!
//! The accessor never matches on `Value` variants while walking a path. It asks
//! the current value for a [`Container`] view and talks to that instead:
//!
//! - maps answer name keys, and index keys through their decimal string form
//! - lists answer index keys only
//! - objects answer field names only

use super::value::{Object, Value};
use crate::path::attribute_path::AttributeKey;
use indexmap::IndexMap;

/// Keyed access to a container value.
pub trait Container {
    /// Returns true if the container holds a slot for `key`.
    fn has(&self, key: AttributeKey<'_>) -> bool;

    fn get(&self, key: AttributeKey<'_>) -> Option<&Value>;

    fn get_mut(&mut self, key: AttributeKey<'_>) -> Option<&mut Value>;

    /// Stores `value` at `key`, creating the slot if needed.
    ///
    /// Returns false when the container cannot be addressed by that kind of key.
    fn set(&mut self, key: AttributeKey<'_>, value: Value) -> bool;
}

impl Container for IndexMap<String, Value> {
    fn has(&self, key: AttributeKey<'_>) -> bool {
        match key {
            AttributeKey::Name(name) => self.contains_key(name),
            AttributeKey::Index(_) => self.contains_key(&key.map_key()),
        }
    }

    fn get(&self, key: AttributeKey<'_>) -> Option<&Value> {
        match key {
            AttributeKey::Name(name) => IndexMap::get(self, name),
            AttributeKey::Index(_) => IndexMap::get(self, &key.map_key()),
        }
    }

    fn get_mut(&mut self, key: AttributeKey<'_>) -> Option<&mut Value> {
        match key {
            AttributeKey::Name(name) => IndexMap::get_mut(self, name),
            AttributeKey::Index(_) => IndexMap::get_mut(self, &key.map_key()),
        }
    }

    fn set(&mut self, key: AttributeKey<'_>, value: Value) -> bool {
        self.insert(key.map_key(), value);
        true
    }
}

impl Container for Vec<Value> {
    fn has(&self, key: AttributeKey<'_>) -> bool {
        matches!(key, AttributeKey::Index(index) if index < self.len())
    }

    fn get(&self, key: AttributeKey<'_>) -> Option<&Value> {
        match key {
            AttributeKey::Index(index) => self.as_slice().get(index),
            AttributeKey::Name(_) => None,
        }
    }

    fn get_mut(&mut self, key: AttributeKey<'_>) -> Option<&mut Value> {
        match key {
            AttributeKey::Index(index) => self.as_mut_slice().get_mut(index),
            AttributeKey::Name(_) => None,
        }
    }

    fn set(&mut self, key: AttributeKey<'_>, value: Value) -> bool {
        let AttributeKey::Index(index) = key else {
            return false;
        };

        if index < self.len() {
            self[index] = value;
        } else {
            // Pad the gap so the value lands exactly at `index`
            self.resize(index, Value::Null);
            self.push(value);
        }
        true
    }
}

impl Container for Object {
    fn has(&self, key: AttributeKey<'_>) -> bool {
        match key {
            AttributeKey::Name(name) => self.has_field(name),
            AttributeKey::Index(_) => false,
        }
    }

    fn get(&self, key: AttributeKey<'_>) -> Option<&Value> {
        match key {
            AttributeKey::Name(name) => self.field(name),
            AttributeKey::Index(_) => None,
        }
    }

    fn get_mut(&mut self, key: AttributeKey<'_>) -> Option<&mut Value> {
        match key {
            AttributeKey::Name(name) => self.field_mut(name),
            AttributeKey::Index(_) => None,
        }
    }

    fn set(&mut self, key: AttributeKey<'_>, value: Value) -> bool {
        match key {
            AttributeKey::Name(name) => {
                self.set_field(name, value);
                true
            }
            AttributeKey::Index(_) => false,
        }
    }
}

impl Value {
    /// Returns the container view of this value, or `None` for scalars and null.
    pub fn as_container(&self) -> Option<&dyn Container> {
        match self {
            Value::Map(entries) => Some(entries),
            Value::List(items) => Some(items),
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        match self {
            Value::Map(entries) => Some(entries),
            Value::List(items) => Some(items),
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}
