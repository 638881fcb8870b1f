// valo-data - Capability protocol
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Structural type conformance.
//!
//! A [`Type`] is a capability descriptor: a named bundle of selector
//! names a value must answer to "have" that type, plus an optional
//! nominal [`Tag`]. Conformance is structural - the candidate's closed
//! selector table must cover every selector in the bundle - and the tag,
//! when present, must match exactly. The tag exists solely to separate
//! leaf types whose structural signature is empty (Void vs Unit).

use crate::error::{Error, Result};
use crate::value::Value;

/// Nominal tag for leaf types with an empty structural signature.
///
/// A fixed enumeration, so tag assignment is deterministic and never
/// depends on initialization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Void,
    Unit,
}

/// A capability descriptor: selector bundle plus optional nominal tag.
///
/// Descriptors compare by name; two descriptors are the same capability
/// only if they are the same definition.
#[derive(Debug)]
pub struct Type {
    name: &'static str,
    selectors: &'static [&'static str],
    tag: Option<Tag>,
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Type {}

impl Type {
    /// The capability's name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The selector bundle a conforming value must answer.
    pub fn selectors(&self) -> &'static [&'static str] {
        self.selectors
    }

    /// Check whether `value` conforms to this capability.
    ///
    /// Structural: every selector in the bundle must appear in the
    /// value's selector table. Nominal: if this descriptor carries a
    /// tag, the value must carry the same tag.
    pub fn conforms(&self, value: &Value) -> bool {
        let answered = selectors(value);
        if !self.selectors.iter().all(|s| answered.contains(s)) {
            return false;
        }
        match self.tag {
            None => true,
            Some(tag) => value.tag() == Some(tag),
        }
    }

    /// Assert conformance, failing with a type mismatch otherwise.
    pub fn check(&self, value: &Value) -> Result<()> {
        if self.conforms(value) {
            Ok(())
        } else {
            Err(Error::type_mismatch(self.name, value.type_name()))
        }
    }
}

// ============================================================================
// Predefined capabilities
// ============================================================================

/// Any value. Everything answers `equals`.
pub static VALUE: Type = Type {
    name: "Value",
    selectors: &["equals"],
    tag: None,
};

/// Any data value: renders to JSON. Expressions and operations are not data.
pub static DATA: Type = Type {
    name: "Data",
    selectors: &["equals", "asJSON"],
    tag: None,
};

/// The "no type" marker. Tag-disambiguated from Unit.
pub static VOID: Type = Type {
    name: "Void",
    selectors: &["equals"],
    tag: Some(Tag::Void),
};

/// The "present but empty" datum. Tag-disambiguated from Void.
pub static UNIT: Type = Type {
    name: "Unit",
    selectors: &["equals", "asJSON"],
    tag: Some(Tag::Unit),
};

pub static BOOLEAN: Type = Type {
    name: "Boolean",
    selectors: &["equals", "asJSON", "not", "and", "or", "xor"],
    tag: None,
};

pub static NUMBER: Type = Type {
    name: "Number",
    selectors: &[
        "equals",
        "asJSON",
        "lessThan",
        "lessEqual",
        "greaterThan",
        "greaterEqual",
        "plus",
        "times",
    ],
    tag: None,
};

pub static STRING: Type = Type {
    name: "String",
    selectors: &[
        "equals",
        "asJSON",
        "length",
        "value",
        "skip",
        "take",
        "extract",
        "concatenate",
        "append",
        "bind",
        "asArray",
    ],
    tag: None,
};

pub static ARRAY: Type = Type {
    name: "Array",
    selectors: &[
        "equals",
        "asJSON",
        "length",
        "value",
        "skip",
        "take",
        "extract",
        "concatenate",
        "append",
        "asString",
    ],
    tag: None,
};

pub static OBJECT: Type = Type {
    name: "Object",
    selectors: &[
        "equals",
        "asJSON",
        "hasProperty",
        "value",
        "names",
        "extract",
        "concatenate",
    ],
    tag: None,
};

/// Anything that can produce a value given a context.
pub static EXPRESSION: Type = Type {
    name: "Expression",
    selectors: &["equals", "evaluate"],
    tag: None,
};

/// A callable combinator. Operations also evaluate (to themselves).
pub static OPERATION: Type = Type {
    name: "Operation",
    selectors: &["equals", "evaluate", "operate", "concatenate"],
    tag: None,
};

// ============================================================================
// Selector tables
// ============================================================================

/// The closed selector table for a value: every selector its type answers.
pub fn selectors(value: &Value) -> &'static [&'static str] {
    match value {
        Value::Void => &["equals"],
        Value::Unit => &["equals", "asJSON"],
        Value::Bool(_) => &["equals", "asJSON", "not", "and", "or", "xor"],
        Value::Number(_) => &[
            "equals",
            "asJSON",
            "lessThan",
            "lessEqual",
            "greaterThan",
            "greaterEqual",
            "plus",
            "times",
        ],
        Value::String(_) => &[
            "equals",
            "asJSON",
            "length",
            "value",
            "skip",
            "take",
            "extract",
            "concatenate",
            "append",
            "bind",
            "asArray",
        ],
        Value::Array(_) => &[
            "equals",
            "asJSON",
            "length",
            "value",
            "skip",
            "take",
            "extract",
            "concatenate",
            "append",
            "asString",
        ],
        Value::Object(_) => &[
            "equals",
            "asJSON",
            "hasProperty",
            "value",
            "names",
            "extract",
            "concatenate",
        ],
        Value::Expr(_) => &["equals", "evaluate"],
        Value::Operation(_) => &["equals", "evaluate", "operate", "concatenate"],
    }
}
