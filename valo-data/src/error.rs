// valo-data - Error type for the value algebra
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Precondition-violation errors.
//!
//! Every error in valo is a capability or precondition violation: an
//! operation was handed a value that does not satisfy the operation's
//! contract. There is no recoverable/fatal distinction and no retry;
//! a violation aborts the operation that detected it.

use std::fmt;

/// Result type for valo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by value operations and evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A value does not conform to the required capability.
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// An Object has no binding for the requested name.
    MissingProperty(String),
    /// An offset or count falls outside a container's bounds.
    IndexOutOfBounds { index: f64, length: usize },
    /// A method reference named a selector the target's type does not answer.
    UnknownSelector {
        type_name: &'static str,
        selector: String,
    },
    /// A bound method was combined with the wrong number of arguments.
    Arity {
        selector: &'static str,
        expected: usize,
        got: usize,
    },
    /// A precondition that is not covered by the variants above.
    Precondition(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type mismatch: expected {}, got {}", expected, got)
                }
            }
            Error::MissingProperty(name) => {
                write!(f, "No binding for property: {}", name)
            }
            Error::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for length {}",
                    index, length
                )
            }
            Error::UnknownSelector {
                type_name,
                selector,
            } => {
                write!(f, "{} does not answer selector: {}", type_name, selector)
            }
            Error::Arity {
                selector,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Wrong number of arguments to '{}': expected {}, got {}",
                    selector, expected, got
                )
            }
            Error::Precondition(msg) => {
                write!(f, "Precondition violated: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a type-mismatch error.
    pub fn type_mismatch(expected: &'static str, got: &'static str) -> Self {
        Error::TypeMismatch {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type-mismatch error with context.
    pub fn type_mismatch_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeMismatch {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create an unknown-selector error.
    pub fn unknown_selector(type_name: &'static str, selector: impl Into<String>) -> Self {
        Error::UnknownSelector {
            type_name,
            selector: selector.into(),
        }
    }

    /// Create an arity error.
    pub fn arity(selector: &'static str, expected: usize, got: usize) -> Self {
        Error::Arity {
            selector,
            expected,
            got,
        }
    }

    /// Create a general precondition error.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Error::Precondition(msg.into())
    }
}
