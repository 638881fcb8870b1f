// valo-core - Expression evaluator for the valo value algebra
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # valo-core
//!
//! Expression evaluator for the valo value algebra. Provides a
//! tree-walking interpreter for [`Expr`] trees, the standard quoting,
//! argument-array, and sequencing combinators, and the closed method
//! dispatch tables behind method-reference expressions.

pub mod combinators;
pub mod dispatch;
pub mod eval;

pub use combinators::{arguments, quote, sequential};
pub use dispatch::method;
pub use eval::{eval, eval_value};

// Re-export data types for convenience
pub use valo_data::{Error, Expr, Operation, Result, Value};
