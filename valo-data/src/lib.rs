// valo-data - Immutable value algebra with structural type conformance
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # valo-data
//!
//! A small closed algebra of immutable values with a capability-based
//! type-conformance protocol. Every datum - booleans, numbers, text,
//! sequences, records, and the two absence markers - carries a uniform
//! capability identity, so generic code can ask "does this value behave
//! like type T?" without naming a class hierarchy.
//!
//! Expression trees and the `Operation` combinator wrapper are defined
//! here as data; the evaluator that reduces them lives in `valo-core`.

pub mod error;
pub mod expr;
pub mod json;
pub mod native;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use expr::Expr;
pub use native::{from_json, IntoValue};
pub use types::{Tag, Type};
pub use value::{Operation, OperationFn, Value};
