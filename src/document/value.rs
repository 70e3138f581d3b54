//! In-memory value representation addressed by attribute paths.
//!
//! A `Value` is the root (and every nested node) that an
//! [`ObjectAttributeAccessor`](crate::accessor::ObjectAttributeAccessor) walks.
//! Three of its variants are containers that a path can descend into:
//!
//! - `Map` - string-keyed, insertion ordered
//! - `List` - integer-indexed
//! - `Object` - a named record with dynamic fields
//!
//! # Example
//!
//! ```
//! use pathquill::document::value::{Object, Value};
//! use indexmap::IndexMap;
//!
//! let mut address = IndexMap::new();
//! address.insert("street".to_string(), Value::from("Evergreen 742"));
//!
//! let mut person = Object::new("Person");
//! person.set_field("name", Value::from("Lisa"));
//! person.set_field("address", Value::Map(address));
//!
//! let root = Value::Object(person);
//! assert!(root.is_object());
//! assert!(root.is_container());
//! ```

use indexmap::IndexMap;

/// Represents numbers (integer or float).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(_) => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

/// A field-bearing object.
///
/// Objects behave like maps for attribute access but keep a class name, so
/// containers created on their behalf can be told apart from plain maps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    class_name: String,
    fields: IndexMap<String, Value>,
}

impl Object {
    /// Creates an object of the given class with no fields.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder form of [`Object::set_field`].
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Sets a field, creating it if the object does not have it yet.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }
}

/// A value without metadata.
///
/// Containers (`Map`, `List`, `Object`) own their children, so a whole value
/// graph is a tree rooted at a single `Value`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value. Reads treat a null slot as missing.
    #[default]
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    /// Integer-indexed sequence
    List(Vec<Value>),
    /// String-keyed associative table, insertion ordered
    Map(IndexMap<String, Value>),
    /// Field-bearing object
    Object(Object),
}

impl Value {
    /// Returns an empty map.
    pub fn map() -> Self {
        Value::Map(IndexMap::new())
    }

    /// Returns an empty list.
    pub fn list() -> Self {
        Value::List(Vec::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if a path can descend into this value.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::document::value::Value;
    ///
    /// assert!(Value::list().is_container());
    /// assert!(!Value::from(42).is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_) | Value::Object(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i64::from(i)))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::Number(Number::Float(u as f64)),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}
