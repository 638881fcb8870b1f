// valo-core - Evaluator integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for expression evaluation: literals, variables,
//! quoting versus application, and sequencing.

use valo_core::{arguments, eval, quote, sequential, Expr, Value};

fn context() -> Value {
    Value::string("x")
        .bind(&Value::number(1.0))
        .unwrap()
        .concatenate(&Value::string("y").bind(&Value::number(2.0)).unwrap())
        .unwrap()
}

// =============================================================================
// Literals and Variables
// =============================================================================

#[test]
fn test_literals_evaluate_to_their_value() {
    for value in [
        Value::Unit,
        Value::Bool(true),
        Value::number(0.0),
        Value::string("s"),
        Value::empty_array(),
        Value::empty_object(),
    ] {
        assert_eq!(eval(&Expr::literal(value.clone()), &context()).unwrap(), value);
    }
}

#[test]
fn test_variables_read_the_context() {
    assert_eq!(
        eval(&Expr::variable("x"), &context()).unwrap(),
        Value::number(1.0)
    );
    assert_eq!(
        eval(&Expr::variable("y"), &context()).unwrap(),
        Value::number(2.0)
    );
    assert!(eval(&Expr::variable("z"), &context()).is_err());
}

#[test]
fn test_shadowed_context_changes_the_lookup() {
    let inner = context()
        .concatenate(&Value::string("x").bind(&Value::number(10.0)).unwrap())
        .unwrap();
    let expr = Expr::variable("x");
    assert_eq!(eval(&expr, &context()).unwrap(), Value::number(1.0));
    assert_eq!(eval(&expr, &inner).unwrap(), Value::number(10.0));
}

// =============================================================================
// Quoting versus Application
// =============================================================================
// The same combination tree shape carries both: the operation decides
// whether its operand is evaluated.

#[test]
fn test_quote_passes_the_operand_through_untouched() {
    // The operand contains an unbound variable expression; quoting must
    // never evaluate it
    let operand = Value::array([
        Value::expr(Expr::variable("unbound")),
        Value::number(1.0),
    ]);
    let expr = Expr::combine(
        Expr::literal(Value::Operation(quote())),
        operand.clone(),
    );
    assert_eq!(eval(&expr, &context()).unwrap(), operand);
}

#[test]
fn test_arguments_evaluates_the_operand_array() {
    let operand = Value::array([
        Value::expr(Expr::variable("x")),
        Value::expr(Expr::literal(Value::number(5.0))),
        Value::expr(Expr::variable("y")),
    ]);
    let expr = Expr::combine(Expr::literal(Value::Operation(arguments())), operand);
    assert_eq!(
        eval(&expr, &context()).unwrap(),
        Value::array([
            Value::number(1.0),
            Value::number(5.0),
            Value::number(2.0)
        ])
    );
}

#[test]
fn test_operator_position_is_evaluated_first() {
    // The operator is itself a variable bound to an operation
    let bound = context()
        .concatenate(
            &Value::string("quote")
                .bind(&Value::Operation(quote()))
                .unwrap(),
        )
        .unwrap();
    let expr = Expr::combine(Expr::variable("quote"), Value::number(7.0));
    assert_eq!(eval(&expr, &bound).unwrap(), Value::number(7.0));
}

#[test]
fn test_combining_plain_data_fails() {
    let expr = Expr::combine(Expr::literal(Value::number(1.0)), Value::Unit);
    assert!(eval(&expr, &context()).is_err());
}

// =============================================================================
// Sequencing
// =============================================================================

#[test]
fn test_sequential_yields_the_last_result() {
    let operand = Value::array([
        Value::expr(Expr::variable("x")),
        Value::expr(Expr::variable("y")),
    ]);
    let expr = Expr::combine(Expr::literal(Value::Operation(sequential())), operand);
    assert_eq!(eval(&expr, &context()).unwrap(), Value::number(2.0));
}

#[test]
fn test_empty_sequence_yields_unit() {
    let expr = Expr::combine(
        Expr::literal(Value::Operation(sequential())),
        Value::empty_array(),
    );
    assert_eq!(eval(&expr, &context()).unwrap(), Value::Unit);
}

#[test]
fn test_sequencing_stops_at_the_first_failure() {
    let operand = Value::array([
        Value::expr(Expr::variable("missing")),
        Value::expr(Expr::literal(Value::number(1.0))),
    ]);
    let expr = Expr::combine(Expr::literal(Value::Operation(sequential())), operand);
    assert!(eval(&expr, &context()).is_err());
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn test_combinations_nest() {
    // arguments([arguments([x]), y]) evaluates inside-out
    let inner = Expr::combine(
        Expr::literal(Value::Operation(arguments())),
        Value::array([Value::expr(Expr::variable("x"))]),
    );
    let outer = Expr::combine(
        Expr::literal(Value::Operation(arguments())),
        Value::array([
            Value::expr(inner),
            Value::expr(Expr::variable("y")),
        ]),
    );
    assert_eq!(
        eval(&outer, &context()).unwrap(),
        Value::array([
            Value::array([Value::number(1.0)]),
            Value::number(2.0)
        ])
    );
}
