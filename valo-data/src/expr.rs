// valo-data - Expression tree nodes
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Expression trees over the value algebra.
//!
//! `Expr` is pure data: the four node shapes the evaluator reduces.
//! Evaluation itself lives in `valo-core`; keeping the tree here lets
//! operand Arrays hold unevaluated expressions as ordinary values.

use std::rc::Rc;

use crate::value::Value;

/// An expression tree node: "produce a value given a context".
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A pre-built value; evaluation ignores the context.
    Literal(Value),
    /// A name looked up in the context Object at evaluation time.
    Variable(Rc<str>),
    /// Operator expression combined with operand data.
    ///
    /// The operand is stored exactly as given, unevaluated; whether it
    /// is ever evaluated is decided by the operation the operator
    /// reduces to.
    Combine { operator: Rc<Expr>, operand: Value },
    /// A method reference: target and selector expressions.
    ///
    /// Evaluates to an applicative operation that evaluates its
    /// argument array and then dispatches to the named method on the
    /// target.
    Method {
        target: Rc<Expr>,
        selector: Rc<Expr>,
    },
}

impl Expr {
    /// A literal expression.
    pub fn literal(value: Value) -> Expr {
        Expr::Literal(value)
    }

    /// A variable reference.
    pub fn variable(name: impl Into<Rc<str>>) -> Expr {
        Expr::Variable(name.into())
    }

    /// A combination of an operator expression with unevaluated operand
    /// data.
    pub fn combine(operator: Expr, operand: Value) -> Expr {
        Expr::Combine {
            operator: Rc::new(operator),
            operand,
        }
    }

    /// A method reference.
    pub fn method(target: Expr, selector: Expr) -> Expr {
        Expr::Method {
            target: Rc::new(target),
            selector: Rc::new(selector),
        }
    }
}
