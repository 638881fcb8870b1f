// valo-data - Host-native bridge
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversion from host-native data into the value algebra.
//!
//! This module provides the [`IntoValue`] trait for converting Rust
//! scalars and collections, plus [`from_json`] for mapping a parsed
//! `serde_json::Value` tree recursively. The inverse direction is not
//! provided; JSON text rendering lives in the `json` module.
//!
//! # Built-in Conversions
//!
//! | Rust type | valo type |
//! |-----------|-----------|
//! | `()` | `Unit` |
//! | `bool` | `Boolean` |
//! | `f64`, `i64`, `i32` | `Number` |
//! | `String`, `&str` | `String` |
//! | `Vec<T: IntoValue>` | `Array` |

use indexmap::IndexMap;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::value::Value;

/// Convert a Rust type into a `Value`.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Unit
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Number(self as f64)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Number(self as f64)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::Array(self.into_iter().map(IntoValue::into_value).collect())
    }
}

/// Map a parsed JSON tree into the value algebra, recursively.
///
/// `null` becomes Unit; numbers must fit a host double. Object key
/// order is preserved (serde_json is built with `preserve_order`).
pub fn from_json(native: &serde_json::Value) -> Result<Value> {
    match native {
        serde_json::Value::Null => Ok(Value::Unit),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| Error::precondition(format!("{} does not fit a double", n))),
        serde_json::Value::String(s) => Ok(Value::string(s.as_str())),
        serde_json::Value::Array(items) => {
            let converted: Result<im::Vector<Value>> = items.iter().map(from_json).collect();
            Ok(Value::Array(converted?))
        }
        serde_json::Value::Object(map) => {
            let mut converted = IndexMap::new();
            for (key, value) in map.iter() {
                converted.insert(key.clone(), from_json(value)?);
            }
            Ok(Value::Object(Rc::new(converted)))
        }
    }
}
