//! Value graphs that attribute paths are resolved against.
//!
//! # Modules
//!
//! - `value`: the `Value` enum and field-bearing `Object`
//! - `container`: keyed access shared by maps, lists and objects
//! - `parser`: JSON / YAML conversion

pub mod container;
pub mod parser;
pub mod value;

pub use container::Container;
pub use value::{Number, Object, Value};
