//! Storage value model shared by the escaper, operators and builders.
//!
//! [`Value`] is a closed model on purpose: everything an entity's
//! `to_storage()` produces must flatten to one of these variants before it
//! reaches the SQL layer. Nested structures are rejected at the conversion
//! boundary, not deep inside a builder.

use crate::error::{DriverError, DriverResult};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A single column value as seen by the statement builders.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Rendered as a `'YYYY-MM-DD HH:MM:SS'` datetime literal
    DateTime(DateTime<Utc>),
    /// Ordered sequence of scalars, rendered as a parenthesized list
    List(Vec<Value>),
}

/// A raw result row: column name to value.
pub type Row = HashMap<String, Value>;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert a `serde_json::Value` into a storage value.
    ///
    /// Objects are refused: callers flatten nested data before it reaches
    /// this layer. Arrays may only contain scalars.
    pub fn from_json(json: serde_json::Value) -> DriverResult<Self> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(DriverError::unsupported_value(format!(
                        "number out of range: {n}"
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                            return Err(DriverError::unsupported_value(
                                "arrays may only contain scalar values",
                            ));
                        }
                        other => list.push(Value::from_json(other)?),
                    }
                }
                Ok(Value::List(list))
            }
            serde_json::Value::Object(_) => Err(DriverError::unsupported_value(
                "nested objects must be flattened before storage",
            )),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_scalars() {
        assert_eq!(Value::from_json(json!(null)).unwrap(), Value::Null);
        assert_eq!(Value::from_json(json!(true)).unwrap(), Value::Bool(true));
        assert_eq!(Value::from_json(json!(42)).unwrap(), Value::Int(42));
        assert_eq!(Value::from_json(json!(1.5)).unwrap(), Value::Float(1.5));
        assert_eq!(
            Value::from_json(json!("jo")).unwrap(),
            Value::String("jo".to_string())
        );
    }

    #[test]
    fn from_json_array_of_scalars() {
        let value = Value::from_json(json!([1, 2, 3])).unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn from_json_rejects_object() {
        let err = Value::from_json(json!({"nested": 1})).unwrap_err();
        assert!(err.is_unsupported_value());
    }

    #[test]
    fn from_json_rejects_nested_array() {
        let err = Value::from_json(json!([[1, 2]])).unwrap_err();
        assert!(err.is_unsupported_value());
    }

    #[test]
    fn option_conversion() {
        let none: Option<i64> = None;
        assert_eq!(Value::from(none), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Int(7));
    }
}
