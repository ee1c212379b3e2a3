use std::fmt;

use crate::error::{EvalResult, RuntimeError};

/// Largest magnitude below which integral numbers print without a fractional
/// part.
const MAX_INTEGRAL_DISPLAY: f64 = 1e15;

/// Represents a runtime value in the evaluator.
///
/// Arithmetic produces numbers; comparison and logical operators produce
/// booleans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Example
    /// ```
    /// use exprkit::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(10.0).as_number(0).unwrap(), 10.0);
    /// assert!(Value::Bool(true).as_number(0).is_err());
    /// ```
    pub const fn as_number(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Bool(_) => Err(RuntimeError::ExpectedNumber { position }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Numbers are never treated as truthy.
    pub const fn as_bool(&self, position: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Number(_) => Err(RuntimeError::ExpectedBoolean { position }),
        }
    }

    /// Name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Value {
    /// Integral numbers print without a trailing `.0`, so `20.0` shows as
    /// `20`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < MAX_INTEGRAL_DISPLAY => {
                // -0 prints as 0
                write!(f, "{}", n + 0.0)
            },
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
