//! JavaScript error types and error handling.
//!
//! This module provides the error kinds that correspond to JavaScript's
//! built-in error constructors, and the [`JsError`] raised when a value
//! cannot be constructed or read.

use std::fmt;
use thiserror::Error;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors. The same
/// enum describes the internal kind of error *objects* held by script code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Plain `Error`
    Error,
    /// Syntax error in JavaScript code
    SyntaxError,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Reference to an undefined variable
    ReferenceError,
    /// Value out of allowed range
    RangeError,
    /// Error in eval() function
    EvalError,
    /// Error in URI handling functions
    URIError,
    /// Several errors wrapped into one
    AggregateError,
    /// Internal engine error
    InternalError,
}

impl ErrorKind {
    /// Returns the constructor name of this error kind.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::URIError => "URIError",
            ErrorKind::AggregateError => "AggregateError",
            ErrorKind::InternalError => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JavaScript error with a message.
///
/// # Examples
///
/// ```
/// use core_types::{JsError, ErrorKind};
///
/// let error = JsError::range_error("Invalid array length");
///
/// assert_eq!(error.kind, ErrorKind::RangeError);
/// assert_eq!(error.to_string(), "RangeError: Invalid array length");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::TypeError, message)
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::RangeError, message)
    }
}

/// Result type for JavaScript operations
pub type JsResult<T> = Result<T, JsError>;
