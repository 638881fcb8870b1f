// valo-data - JSON rendering
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! One-way JSON text rendering for data values.
//!
//! Unit renders as `null`, Objects render in their own key order, and
//! non-ASCII text is left as literal code points. There is no parser;
//! decoding is out of scope.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::value::Value;

impl Value {
    /// Render this data value as JSON text, reified as a String value.
    ///
    /// Fails with a capability violation for Void, expressions, and
    /// operations - only data values have a JSON rendering.
    pub fn as_json(&self) -> Result<Value> {
        Ok(Value::string(render(self)?))
    }
}

/// Render a data value to a JSON string.
pub(crate) fn render(value: &Value) -> Result<String> {
    let mut out = String::new();
    render_into(value, &mut out)?;
    Ok(out)
}

fn render_into(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Unit => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => {
            // Rust's shortest f64 rendering matches the host decimal
            // form for integral values (no trailing ".0").
            let _ = write!(out, "{}", n);
        }
        Value::String(s) => render_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_into(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render_string(key, out);
                out.push(':');
                render_into(item, out)?;
            }
            out.push('}');
        }
        other => return Err(Error::type_mismatch("Data", other.type_name())),
    }
    Ok(())
}

/// Quote and escape text: `"` and `\` escaped, control characters as
/// short escapes or `\u00XX`, everything else (including non-ASCII)
/// literal.
fn render_string(text: &str, out: &mut String) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c if c < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
