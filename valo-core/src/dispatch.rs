// valo-core - Method dispatch tables
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Closed per-type method dispatch.
//!
//! Method-reference evaluation resolves a selector name against the
//! target's selector table and produces a bound [`Operation`]. The
//! table is closed: an unknown selector, or one the target's type does
//! not answer, is a precondition violation rather than a dynamic lookup
//! failure.

use valo_data::error::{Error, Result};
use valo_data::types;
use valo_data::value::{Operation, Value};

use crate::eval::eval_value;

/// Every dispatchable selector with its argument arity.
const SELECTORS: &[(&str, usize)] = &[
    ("equals", 1),
    ("asJSON", 0),
    ("not", 0),
    ("and", 1),
    ("or", 1),
    ("xor", 1),
    ("lessThan", 1),
    ("lessEqual", 1),
    ("greaterThan", 1),
    ("greaterEqual", 1),
    ("plus", 1),
    ("times", 1),
    ("length", 0),
    ("value", 1),
    ("skip", 1),
    ("take", 1),
    ("extract", 1),
    ("concatenate", 1),
    ("append", 1),
    ("bind", 1),
    ("asArray", 0),
    ("asString", 0),
    ("hasProperty", 1),
    ("names", 0),
    ("evaluate", 0),
    ("operate", 2),
];

/// Resolve `selector` on `target`, producing the bound method as an
/// Operation.
///
/// The returned operation expects its operand to be the **evaluated**
/// argument Array (method-reference evaluation composes it after the
/// argument-array combinator), checks arity, and applies the data
/// operation with `target` as the receiver.
pub fn method(target: &Value, selector: &str) -> Result<Operation> {
    let answered = types::selectors(target);
    let (name, arity) = SELECTORS
        .iter()
        .copied()
        .find(|(name, _)| *name == selector && answered.contains(name))
        .ok_or_else(|| Error::unknown_selector(target.type_name(), selector))?;
    let target = target.clone();
    Ok(Operation::new(name, move |operand, context| {
        let args = match operand {
            Value::Array(items) => items,
            other => {
                return Err(Error::type_mismatch_in(
                    "method arguments",
                    "Array",
                    other.type_name(),
                ))
            }
        };
        if args.len() != arity {
            return Err(Error::arity(name, arity, args.len()));
        }
        let args: Vec<Value> = args.iter().cloned().collect();
        apply(&target, name, &args, context)
    }))
}

/// Apply a resolved selector. `selector` is known to be answered by the
/// target's type and `args` has the right arity.
fn apply(target: &Value, selector: &'static str, args: &[Value], context: &Value) -> Result<Value> {
    match selector {
        "equals" => Ok(target.equals(&args[0])),
        "asJSON" => target.as_json(),
        "not" => target.not(),
        "and" => target.and(&args[0]),
        "or" => target.or(&args[0]),
        "xor" => target.xor(&args[0]),
        "lessThan" => target.less_than(&args[0]),
        "lessEqual" => target.less_equal(&args[0]),
        "greaterThan" => target.greater_than(&args[0]),
        "greaterEqual" => target.greater_equal(&args[0]),
        "plus" => target.plus(&args[0]),
        "times" => target.times(&args[0]),
        "length" => target.length(),
        "value" => target.value(&args[0]),
        "skip" => target.skip(&args[0]),
        "take" => target.take(&args[0]),
        "extract" => target.extract(&args[0]),
        "concatenate" => target.concatenate(&args[0]),
        "append" => target.append(&args[0]),
        "bind" => target.bind(&args[0]),
        "asArray" => target.as_array(),
        "asString" => target.as_string(),
        "hasProperty" => target.has_property(&args[0]),
        "names" => target.names(),
        "evaluate" => eval_value(target, context),
        "operate" => match target {
            Value::Operation(operation) => operation.operate(&args[0], &args[1]),
            other => Err(Error::type_mismatch("Operation", other.type_name())),
        },
        _ => Err(Error::unknown_selector(target.type_name(), selector)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(target: &Value, selector: &str, args: impl IntoIterator<Item = Value>) -> Result<Value> {
        let bound = method(target, selector)?;
        bound.operate(&Value::array(args), &Value::empty_object())
    }

    #[test]
    fn test_bound_method_applies_data_operation() {
        let result = call(
            &Value::number(2.0),
            "plus",
            [Value::number(3.0)],
        )
        .unwrap();
        assert_eq!(result, Value::number(5.0));
    }

    #[test]
    fn test_unknown_selector_is_rejected() {
        let err = method(&Value::number(1.0), "frobnicate").unwrap_err();
        assert_eq!(err, Error::unknown_selector("Number", "frobnicate"));
    }

    #[test]
    fn test_selector_outside_the_targets_type_is_rejected() {
        // `bind` is a String method; Numbers do not answer it
        let err = method(&Value::number(1.0), "bind").unwrap_err();
        assert_eq!(err, Error::unknown_selector("Number", "bind"));
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let err = call(&Value::number(1.0), "plus", []).unwrap_err();
        assert_eq!(err, Error::arity("plus", 1, 0));
    }

    #[test]
    fn test_operate_dispatches_through_the_wrapped_function() {
        let doubled = Value::Operation(Operation::new("double", |v, _| {
            v.plus(v)
        }));
        let result = call(
            &doubled,
            "operate",
            [Value::number(21.0), Value::empty_object()],
        )
        .unwrap();
        assert_eq!(result, Value::number(42.0));
    }
}
