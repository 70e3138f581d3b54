//! Conversion between serialized documents and [`Value`] graphs.
//!
//! JSON and YAML text is decoded with `serde_json` / `serde_yaml` and then
//! converted into our own representation, so every document can be walked by
//! attribute paths regardless of where it came from.
//!
//! # Example
//!
//! ```
//! use pathquill::document::parser::parse_json;
//! use pathquill::path::{AttributePath, Path};
//!
//! let root = parse_json(r#"{"name": "Lisa", "pets": ["Snowball"]}"#).unwrap();
//! let pet = AttributePath::new("pets.[0]").get_value_from(&root).unwrap();
//! assert_eq!(pet.as_str(), Some("Snowball"));
//! ```

use super::value::{Number, Value};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value as SerdeValue;
use serde_yaml::Value as YamlValue;

/// Parses JSON text into a value graph.
pub fn parse_json(source: &str) -> Result<Value> {
    let value: SerdeValue = serde_json::from_str(source).context("Failed to parse JSON")?;
    Ok(from_json_value(&value))
}

/// Parses YAML text into a value graph.
///
/// Tagged nodes are unwrapped to their inner value; non-string mapping keys
/// are rendered to their scalar text.
pub fn parse_yaml(source: &str) -> Result<Value> {
    let value: YamlValue = serde_yaml::from_str(source).context("Failed to parse YAML")?;
    Ok(from_yaml_value(&value))
}

/// Converts a `serde_json::Value` into a [`Value`].
pub fn from_json_value(value: &SerdeValue) -> Value {
    match value {
        SerdeValue::Null => Value::Null,
        SerdeValue::Bool(b) => Value::Boolean(*b),
        SerdeValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::Integer(i))
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                Value::Number(Number::Float(n.as_f64().unwrap_or(0.0)))
            }
        }
        SerdeValue::String(s) => Value::String(s.clone()),
        SerdeValue::Array(items) => Value::List(items.iter().map(from_json_value).collect()),
        SerdeValue::Object(entries) => Value::Map(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), from_json_value(v)))
                .collect(),
        ),
    }
}

fn from_yaml_value(value: &YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Boolean(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::Integer(i))
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                Value::Number(Number::Float(n.as_f64().unwrap_or(0.0)))
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => Value::List(items.iter().map(from_yaml_value).collect()),
        YamlValue::Mapping(mapping) => {
            let mut entries = IndexMap::new();
            for (k, v) in mapping {
                entries.insert(yaml_key_to_string(k), from_yaml_value(v));
            }
            Value::Map(entries)
        }
        YamlValue::Tagged(tagged) => from_yaml_value(&tagged.value),
    }
}

fn yaml_key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Converts a [`Value`] into a `serde_json::Value`.
///
/// Objects become JSON objects of their fields; the class name is not
/// serialized. Non-finite floats become `null`.
pub fn to_json_value(value: &Value) -> SerdeValue {
    match value {
        Value::Null => SerdeValue::Null,
        Value::Boolean(b) => SerdeValue::Bool(*b),
        Value::Number(Number::Integer(i)) => SerdeValue::from(*i),
        Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
            .map(SerdeValue::Number)
            .unwrap_or(SerdeValue::Null),
        Value::String(s) => SerdeValue::String(s.clone()),
        Value::List(items) => SerdeValue::Array(items.iter().map(to_json_value).collect()),
        Value::Map(entries) => SerdeValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), to_json_value(v)))
                .collect(),
        ),
        Value::Object(object) => SerdeValue::Object(
            object
                .fields()
                .iter()
                .map(|(k, v)| (k.clone(), to_json_value(v)))
                .collect(),
        ),
    }
}

/// Serializes a value graph as JSON text.
pub fn to_json_string(value: &Value, pretty: bool) -> Result<String> {
    let json = to_json_value(value);
    let text = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    text.context("Failed to serialize JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::value::Object;

    #[test]
    fn test_parse_json_keeps_key_order() {
        let value = parse_json(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
        let keys: Vec<&String> = value.as_map().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_json_numbers() {
        let value = parse_json(r#"[1, -2, 2.5]"#).unwrap();
        let items = value.as_list().unwrap();
        assert_eq!(items[0].as_i64(), Some(1));
        assert_eq!(items[1].as_i64(), Some(-2));
        assert_eq!(items[2].as_f64(), Some(2.5));
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(parse_json("{not json").is_err());
    }

    #[test]
    fn test_parse_yaml_nested() {
        let value = parse_yaml("user:\n  name: Lisa\n  tags:\n    - a\n    - b\n").unwrap();
        let user = value.as_map().unwrap().get("user").unwrap();
        let tags = user.as_map().unwrap().get("tags").unwrap();
        assert_eq!(tags.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_yaml_numeric_keys() {
        let value = parse_yaml("1: one\ntrue: yes\n").unwrap();
        let map = value.as_map().unwrap();
        assert!(map.contains_key("1"));
        assert!(map.contains_key("true"));
    }

    #[test]
    fn test_object_serializes_as_fields() {
        let value = Value::Object(Object::new("Person").with_field("name", "Lisa"));
        let text = to_json_string(&value, false).unwrap();
        assert_eq!(text, r#"{"name":"Lisa"}"#);
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        assert_eq!(to_json_value(&Value::from(f64::NAN)), SerdeValue::Null);
    }
}
