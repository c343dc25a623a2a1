//! Document type stored in lab collections.
//!
//! A `Document` is an ordered map of field name to JSON value. The labs
//! build documents from request parameters with the `doc!` macro and read
//! fields back through the typed accessors when rendering.
//!
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single record of a collection: named fields holding JSON values
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Document(BTreeMap<String, Value>);

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Raw value of a field, if present
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the field exists at all
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// String value of a field
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Integer value of a field
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    /// Numeric value of a field (integers widen to f64)
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Boolean value of a field
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Number of fields in the document
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build a [`Document`] from field/value pairs.
///
/// Values can be anything convertible into a `serde_json::Value`:
/// strings, integers, floats, booleans.
#[macro_export]
macro_rules! doc {
    () => { $crate::Document::new() };
    ($($field:literal : $value:expr),+ $(,)?) => {{
        let mut document = $crate::Document::new();
        $(document.set($field, $value);)+
        document
    }};
}
