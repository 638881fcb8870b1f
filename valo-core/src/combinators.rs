// valo-core - Standard combinators
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The three standard operations every evaluator context wants.
//!
//! Each is an [`Operation`], so each decides for itself what to do with
//! its unevaluated operand: `quote` never evaluates, `arguments` and
//! `sequential` evaluate an expression array left-to-right.

use im::Vector;

use valo_data::error::{Error, Result};
use valo_data::types;
use valo_data::value::{Operation, Value};

use crate::eval::eval_value;

/// The quoting combinator: returns its operand unchanged, ignoring the
/// context. The operand is never evaluated, even when it is itself an
/// expression.
pub fn quote() -> Operation {
    Operation::new("quote", |operand, _context| {
        types::VALUE.check(operand)?;
        Ok(operand.clone())
    })
}

/// Assert the operand is an Array and hand back its elements.
fn expression_array<'a>(operand: &'a Value, context: &'static str) -> Result<&'a Vector<Value>> {
    match operand {
        Value::Array(items) => Ok(items),
        other => Err(Error::type_mismatch_in(
            context,
            "Array",
            other.type_name(),
        )),
    }
}

/// The argument-array combinator: the operand must be an Array of
/// expressions; each is evaluated left-to-right under the context and
/// the results are returned as an Array. Ordinary "evaluate all
/// arguments" application semantics.
pub fn arguments() -> Operation {
    Operation::new("arguments", |operand, context| {
        let items = expression_array(operand, "arguments operand")?;
        let mut results = Vector::new();
        for item in items.iter() {
            types::EXPRESSION.check(item)?;
            results.push_back(eval_value(item, context)?);
        }
        Ok(Value::Array(results))
    })
}

/// The sequencing combinator: same operand contract as [`arguments`],
/// but only the last result is retained; an empty operand array yields
/// Unit.
pub fn sequential() -> Operation {
    Operation::new("sequential", |operand, context| {
        let items = expression_array(operand, "sequential operand")?;
        let mut result = Value::Unit;
        for item in items.iter() {
            types::EXPRESSION.check(item)?;
            result = eval_value(item, context)?;
        }
        Ok(result)
    })
}
