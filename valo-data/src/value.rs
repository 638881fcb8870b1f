// valo-data - Immutable value types
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for valo.
//!
//! `Value` is the central enum representing every valo value. Values are
//! immutable once constructed and use reference counting and persistent
//! collections for cheap sharing; every mutating-looking operation
//! returns a new value.

use std::fmt;
use std::rc::Rc;

use im::Vector;
use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::types::{self, Tag};

/// The core value type for valo.
///
/// Scalars, containers, expression trees, and operations all live in one
/// closed algebra so that operand data can mix plain values with
/// unevaluated expressions.
#[derive(Clone, Debug)]
pub enum Value {
    /// The "no type" marker, distinct from every data type.
    Void,
    /// The canonical "present but empty" data value.
    Unit,
    /// Logical true or false.
    Bool(bool),
    /// Host double-precision numeric scalar.
    Number(f64),
    /// Immutable sequence of Unicode code points.
    String(Rc<str>),
    /// Immutable ordered sequence (persistent, structural sharing).
    Array(Vector<Value>),
    /// Immutable insertion-ordered mapping, keys unique.
    Object(Rc<IndexMap<String, Value>>),
    /// An unevaluated expression tree node.
    Expr(Rc<Expr>),
    /// A callable combinator.
    Operation(Operation),
}

// ============================================================================
// Constructors
// ============================================================================

impl Value {
    /// Create a Boolean value.
    pub fn bool(b: bool) -> Value {
        Value::Bool(b)
    }

    /// Create a Number value.
    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    /// Create a String value.
    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::String(s.into())
    }

    /// Create an Array value from an element sequence.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Array(items.into_iter().collect())
    }

    /// Create an Object value from key/value pairs.
    ///
    /// Keys are unique; a repeated key keeps its first position and
    /// takes the last value, matching `concatenate`'s right bias.
    pub fn object(pairs: impl IntoIterator<Item = (String, Value)>) -> Value {
        Value::Object(Rc::new(pairs.into_iter().collect()))
    }

    /// Wrap an expression tree node as a value.
    pub fn expr(expr: Expr) -> Value {
        Value::Expr(Rc::new(expr))
    }

    /// The canonical empty String.
    pub fn empty_string() -> Value {
        Value::String(Rc::from(""))
    }

    /// The canonical empty Array.
    pub fn empty_array() -> Value {
        Value::Array(Vector::new())
    }

    /// The canonical empty Object.
    pub fn empty_object() -> Value {
        Value::Object(Rc::new(IndexMap::new()))
    }

    /// Human-readable type name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Void => "Void",
            Value::Unit => "Unit",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
            Value::Expr(_) => "Expression",
            Value::Operation(_) => "Operation",
        }
    }

    /// Nominal tag, carried only by leaf types with an empty structural
    /// signature.
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Value::Void => Some(Tag::Void),
            Value::Unit => Some(Tag::Unit),
            _ => None,
        }
    }
}

// ============================================================================
// Equality
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) => true,
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // Pointwise on the underlying double; NaN is not equal to
            // itself, per host semantics.
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // IndexMap equality is key-set based; insertion order does
            // not participate.
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Expr(a), Value::Expr(b)) => a == b,
            (Value::Operation(a), Value::Operation(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Structural equality, reified as a Boolean value.
    pub fn equals(&self, other: &Value) -> Value {
        Value::Bool(self == other)
    }
}

// ============================================================================
// Boolean operations
// ============================================================================

impl Value {
    fn expect_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::type_mismatch("Boolean", other.type_name())),
        }
    }

    /// Logical negation. Total over {true, false}.
    pub fn not(&self) -> Result<Value> {
        Ok(Value::Bool(!self.expect_bool()?))
    }

    /// Logical conjunction.
    pub fn and(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(self.expect_bool()? & other.expect_bool()?))
    }

    /// Logical disjunction.
    pub fn or(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(self.expect_bool()? | other.expect_bool()?))
    }

    /// Logical exclusive or.
    pub fn xor(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(self.expect_bool()? ^ other.expect_bool()?))
    }
}

// ============================================================================
// Numeric operations
// ============================================================================

impl Value {
    fn expect_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(Error::type_mismatch("Number", other.type_name())),
        }
    }

    /// A Number holding a non-negative integer, as a usize.
    fn expect_count(&self, context: &'static str) -> Result<usize> {
        let n = self.expect_number()?;
        if n < 0.0 || n.fract() != 0.0 {
            return Err(Error::precondition(format!(
                "{} requires a non-negative integer, got {}",
                context, n
            )));
        }
        Ok(n as usize)
    }

    /// A Number holding an integer in [0, length), as a usize.
    fn expect_index(&self, length: usize) -> Result<usize> {
        let n = self.expect_number()?;
        if n < 0.0 || n.fract() != 0.0 || n >= length as f64 {
            return Err(Error::IndexOutOfBounds { index: n, length });
        }
        Ok(n as usize)
    }

    pub fn less_than(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(self.expect_number()? < other.expect_number()?))
    }

    pub fn less_equal(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(self.expect_number()? <= other.expect_number()?))
    }

    pub fn greater_than(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(self.expect_number()? > other.expect_number()?))
    }

    pub fn greater_equal(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(self.expect_number()? >= other.expect_number()?))
    }

    /// Addition, closed over Numbers with host double rules.
    pub fn plus(&self, other: &Value) -> Result<Value> {
        Ok(Value::Number(self.expect_number()? + other.expect_number()?))
    }

    /// Multiplication, closed over Numbers with host double rules.
    pub fn times(&self, other: &Value) -> Result<Value> {
        Ok(Value::Number(self.expect_number()? * other.expect_number()?))
    }
}

// ============================================================================
// Sequence operations (String and Array)
// ============================================================================

/// Half-open interval decoded from an `{from, upto}` Object.
fn decode_interval(interval: &Value, length: usize) -> Result<(usize, usize)> {
    types::OBJECT.check(interval)?;
    let from = interval
        .value(&Value::string("from"))?
        .expect_count("extract from")?;
    let upto = interval
        .value(&Value::string("upto"))?
        .expect_count("extract upto")?;
    if from > upto {
        return Err(Error::precondition(format!(
            "extract requires from <= upto, got from {} upto {}",
            from, upto
        )));
    }
    if upto > length {
        return Err(Error::IndexOutOfBounds {
            index: upto as f64,
            length,
        });
    }
    Ok((from, upto))
}

impl Value {
    /// Element count: code points for a String, elements for an Array.
    pub fn length(&self) -> Result<Value> {
        match self {
            Value::String(s) => Ok(Value::Number(s.chars().count() as f64)),
            Value::Array(items) => Ok(Value::Number(items.len() as f64)),
            other => Err(Error::type_mismatch("String or Array", other.type_name())),
        }
    }

    /// Projection by key.
    ///
    /// For a String, a bounds-checked Number offset yielding the code
    /// point at that position; for an Array, the element at the offset;
    /// for an Object, the value bound to a String name (failing when the
    /// name is unbound).
    pub fn value(&self, key: &Value) -> Result<Value> {
        match self {
            Value::String(s) => {
                let index = key.expect_index(s.chars().count())?;
                // expect_index guarantees the position exists
                let cp = s.chars().nth(index).map(|c| c as u32 as f64);
                Ok(Value::Number(cp.unwrap_or(0.0)))
            }
            Value::Array(items) => {
                let index = key.expect_index(items.len())?;
                Ok(items[index].clone())
            }
            Value::Object(map) => {
                let name = key.expect_string()?;
                map.get(&*name as &str)
                    .cloned()
                    .ok_or_else(|| Error::MissingProperty(name.to_string()))
            }
            other => Err(Error::type_mismatch(
                "String, Array, or Object",
                other.type_name(),
            )),
        }
    }

    /// Drop the first `count` elements; past the end yields the empty value.
    pub fn skip(&self, count: &Value) -> Result<Value> {
        let count = count.expect_count("skip")?;
        match self {
            Value::String(s) => Ok(Value::String(s.chars().skip(count).collect::<String>().into())),
            Value::Array(items) => {
                Ok(Value::Array(items.iter().skip(count).cloned().collect()))
            }
            other => Err(Error::type_mismatch("String or Array", other.type_name())),
        }
    }

    /// Keep the first `count` elements; `count` must not exceed the length.
    pub fn take(&self, count: &Value) -> Result<Value> {
        let count = count.expect_count("take")?;
        match self {
            Value::String(s) => {
                let length = s.chars().count();
                if count > length {
                    return Err(Error::IndexOutOfBounds {
                        index: count as f64,
                        length,
                    });
                }
                Ok(Value::String(s.chars().take(count).collect::<String>().into()))
            }
            Value::Array(items) => {
                if count > items.len() {
                    return Err(Error::IndexOutOfBounds {
                        index: count as f64,
                        length: items.len(),
                    });
                }
                Ok(Value::Array(items.iter().take(count).cloned().collect()))
            }
            other => Err(Error::type_mismatch("String or Array", other.type_name())),
        }
    }

    /// Sub-range or projection.
    ///
    /// For a String or Array, `argument` is an `{from, upto}` interval
    /// Object selecting the half-open range. For an Object, `argument`
    /// is an Array of names projecting to a sub-mapping; every requested
    /// name must be present.
    pub fn extract(&self, argument: &Value) -> Result<Value> {
        match self {
            Value::String(s) => {
                let (from, upto) = decode_interval(argument, s.chars().count())?;
                Ok(Value::String(
                    s.chars().skip(from).take(upto - from).collect::<String>().into(),
                ))
            }
            Value::Array(items) => {
                let (from, upto) = decode_interval(argument, items.len())?;
                Ok(Value::Array(
                    items.iter().skip(from).take(upto - from).cloned().collect(),
                ))
            }
            Value::Object(map) => {
                let names = argument.expect_array()?;
                let mut projected = IndexMap::new();
                for name in names.iter() {
                    let name = name.expect_string()?;
                    let value = map
                        .get(&*name as &str)
                        .cloned()
                        .ok_or_else(|| Error::MissingProperty(name.to_string()))?;
                    projected.insert(name.to_string(), value);
                }
                Ok(Value::Object(Rc::new(projected)))
            }
            other => Err(Error::type_mismatch(
                "String, Array, or Object",
                other.type_name(),
            )),
        }
    }

    /// Same-type combination, left operand first.
    ///
    /// Strings and Arrays join in order. Objects form a right-biased
    /// union: keys present in both take the value from `other`, keeping
    /// their original position. Operations compose into a pipeline.
    pub fn concatenate(&self, other: &Value) -> Result<Value> {
        match self {
            Value::String(a) => {
                let b = other.expect_string()?;
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(&b);
                Ok(Value::String(joined.into()))
            }
            Value::Array(a) => match other {
                Value::Array(b) => {
                    let mut joined = a.clone();
                    joined.append(b.clone());
                    Ok(Value::Array(joined))
                }
                other => Err(Error::type_mismatch("Array", other.type_name())),
            },
            Value::Object(a) => match other {
                Value::Object(b) => {
                    let mut union = (**a).clone();
                    for (key, value) in b.iter() {
                        union.insert(key.clone(), value.clone());
                    }
                    Ok(Value::Object(Rc::new(union)))
                }
                other => Err(Error::type_mismatch("Object", other.type_name())),
            },
            Value::Operation(a) => match other {
                Value::Operation(b) => Ok(Value::Operation(a.concatenate(b))),
                other => Err(Error::type_mismatch("Operation", other.type_name())),
            },
            other => Err(Error::type_mismatch(
                "String, Array, Object, or Operation",
                other.type_name(),
            )),
        }
    }

    /// Append one element.
    ///
    /// A String appends one code point given as a Number; an Array
    /// appends any value.
    pub fn append(&self, element: &Value) -> Result<Value> {
        match self {
            Value::String(s) => {
                let cp = element.expect_count("append")?;
                let c = u32::try_from(cp)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        Error::precondition(format!("{} is not a Unicode code point", cp))
                    })?;
                let mut appended = s.to_string();
                appended.push(c);
                Ok(Value::String(appended.into()))
            }
            Value::Array(items) => {
                types::VALUE.check(element)?;
                let mut appended = items.clone();
                appended.push_back(element.clone());
                Ok(Value::Array(appended))
            }
            other => Err(Error::type_mismatch("String or Array", other.type_name())),
        }
    }
}

// ============================================================================
// String and Array conversions
// ============================================================================

impl Value {
    fn expect_string(&self) -> Result<Rc<str>> {
        match self {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::type_mismatch("String", other.type_name())),
        }
    }

    fn expect_array(&self) -> Result<&Vector<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::type_mismatch("Array", other.type_name())),
        }
    }

    /// String to Array of per-code-point Numbers.
    pub fn as_array(&self) -> Result<Value> {
        let s = self.expect_string()?;
        Ok(Value::Array(
            s.chars().map(|c| Value::Number(c as u32 as f64)).collect(),
        ))
    }

    /// Array of code-point Numbers to String. Left inverse of `as_array`.
    pub fn as_string(&self) -> Result<Value> {
        let items = self.expect_array()?;
        let mut joined = Value::empty_string();
        for item in items.iter() {
            joined = joined.append(item)?;
        }
        Ok(joined)
    }

    /// One-key Object binding this String's text to `value`.
    ///
    /// The fundamental building block for constructing binding
    /// environments: `name.bind(v)` concatenated onto a context Object
    /// adds or shadows one binding.
    pub fn bind(&self, value: &Value) -> Result<Value> {
        let name = self.expect_string()?;
        types::VALUE.check(value)?;
        let mut map = IndexMap::new();
        map.insert(name.to_string(), value.clone());
        Ok(Value::Object(Rc::new(map)))
    }
}

// ============================================================================
// Object operations
// ============================================================================

impl Value {
    fn expect_object(&self) -> Result<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(Error::type_mismatch("Object", other.type_name())),
        }
    }

    /// Whether this Object has a binding for `name`.
    pub fn has_property(&self, name: &Value) -> Result<Value> {
        let map = self.expect_object()?;
        let name = name.expect_string()?;
        Ok(Value::Bool(map.contains_key(&*name as &str)))
    }

    /// This Object's keys, as an Array of Strings in the mapping's own
    /// order.
    pub fn names(&self) -> Result<Value> {
        let map = self.expect_object()?;
        Ok(Value::Array(
            map.keys().map(|k| Value::string(k.as_str())).collect(),
        ))
    }
}

// ============================================================================
// Operation - a callable combinator
// ============================================================================

/// Signature of the function wrapped by an [`Operation`]: unevaluated
/// operand plus evaluation context, producing a value.
pub type OperationFn = dyn Fn(&Value, &Value) -> Result<Value>;

/// A frozen wrapper around a two-argument (operand, context) function.
///
/// Whether and how the operand is evaluated is entirely the operation's
/// responsibility; this is what lets one combination form express both
/// non-evaluating special forms and ordinary application.
#[derive(Clone)]
pub struct Operation {
    name: Rc<str>,
    func: Rc<OperationFn>,
}

impl Operation {
    /// Create a new operation.
    pub fn new(
        name: impl Into<Rc<str>>,
        func: impl Fn(&Value, &Value) -> Result<Value> + 'static,
    ) -> Self {
        Operation {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// Display name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the wrapped function on an unevaluated operand and the
    /// current context.
    pub fn operate(&self, operand: &Value, context: &Value) -> Result<Value> {
        types::VALUE.check(operand)?;
        (self.func)(operand, context)
    }

    /// Compose into a pipeline: apply `self`, then apply `other` to the
    /// result, threading the same context through both stages.
    pub fn concatenate(&self, other: &Operation) -> Operation {
        let name = format!("{}+{}", self.name, other.name);
        let first = self.func.clone();
        let second = other.func.clone();
        Operation::new(name, move |operand, context| {
            second(&first(operand, context)?, context)
        })
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<operation {}>", self.name)
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        // Operations compare by identity
        std::ptr::eq(
            Rc::as_ptr(&self.func) as *const (),
            Rc::as_ptr(&other.func) as *const (),
        )
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => write!(f, "#<void>"),
            Value::Expr(_) => write!(f, "#<expression>"),
            Value::Operation(op) => write!(f, "{:?}", op),
            data => match crate::json::render(data) {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "#<{}>", data.type_name()),
            },
        }
    }
}
