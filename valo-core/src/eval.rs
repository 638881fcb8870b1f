// valo-core - Tree-walking expression evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tree-walking evaluator for valo expressions.
//!
//! Evaluation is pure with respect to the tree: only the context value
//! supplies variability. A combination hands its operand to the
//! operation **unevaluated**; whether the operand is ever evaluated is
//! the operation's decision, which is what lets quoting special forms
//! and ordinary application share one tree shape.

use valo_data::error::{Error, Result};
use valo_data::expr::Expr;
use valo_data::types;
use valo_data::value::Value;

use crate::combinators;
use crate::dispatch;

/// Evaluate an expression in the given context.
///
/// The context must carry the Object capability whenever the tree
/// contains variable references; it is otherwise opaque to the engine.
pub fn eval(expr: &Expr, context: &Value) -> Result<Value> {
    match expr {
        // Literals ignore the context
        Expr::Literal(value) => Ok(value.clone()),

        // Variable lookup through the context's own property access;
        // an unbound name propagates the context's failure
        Expr::Variable(name) => {
            types::OBJECT.check(context)?;
            context.value(&Value::String(name.clone()))
        }

        // Evaluate the operator, then hand it the operand as stored
        Expr::Combine { operator, operand } => match eval(operator, context)? {
            Value::Operation(operation) => operation.operate(operand, context),
            other => Err(Error::type_mismatch_in(
                "combination operator",
                "Operation",
                other.type_name(),
            )),
        },

        // A method reference reduces to an applicative operation:
        // evaluate the argument array, then dispatch to the bound method
        Expr::Method { target, selector } => {
            let selector = eval(selector, context)?;
            let name = match &selector {
                Value::String(name) => name.clone(),
                other => {
                    return Err(Error::type_mismatch_in(
                        "method selector",
                        "String",
                        other.type_name(),
                    ))
                }
            };
            let target = eval(target, context)?;
            types::VALUE.check(&target)?;
            let bound = dispatch::method(&target, &name)?;
            Ok(Value::Operation(
                combinators::arguments().concatenate(&bound),
            ))
        }
    }
}

/// Evaluate a value carrying the Expression capability.
///
/// Expression tree nodes evaluate through [`eval`]; operations evaluate
/// to themselves. Anything else fails the capability check.
pub fn eval_value(value: &Value, context: &Value) -> Result<Value> {
    match value {
        Value::Expr(expr) => eval(expr, context),
        Value::Operation(_) => Ok(value.clone()),
        other => Err(Error::type_mismatch("Expression", other.type_name())),
    }
}
