//! Runtime value representation
//!
//! Shared dynamically-typed value for the interpreter:
//! - Numbers, Bools, Nil: immediate values (stack-allocated)
//! - Strings: heap-allocated, reference-counted (Arc<String>), immutable
//!
//! Equality is strict per-variant value equality: `nil` equals only `nil`,
//! and there is no cross-type coercion (a number is never equal to its
//! string form). The derived `PartialEq` provides exactly that.

use std::fmt;
use std::sync::Arc;

/// Runtime value type
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric value (IEEE 754 double-precision)
    Number(f64),
    /// String value (reference-counted, immutable)
    String(Arc<String>),
    /// Boolean value
    Bool(bool),
    /// Nil value
    Nil,
}

impl Value {
    /// Create a new string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Check if this value is truthy
    ///
    /// `nil` and `false` are falsy; every other value (including `0` and
    /// the empty string) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            _ => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display is already the shortest round-trip form with no
            // trailing .0 on integral values
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s.as_ref()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Nil => write!(f, "nil"),
        }
    }
}
