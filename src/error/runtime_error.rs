use thiserror::Error;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the byte offset of the expression that failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Tried to use a variable that is not in the environment.
    #[error("Error at position {position}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// Called a function that is not in the function table.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset of the call.
        position: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error at position {position}: '{name}' does not accept {found} argument(s).")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of arguments supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at position {position}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Byte offset of the failing expression.
        position: usize,
    },
    /// A boolean value was expected, but not found.
    #[error("Error at position {position}: Expected boolean.")]
    ExpectedBoolean {
        /// Byte offset of the failing expression.
        position: usize,
    },
    /// A numeric value was expected, but not found.
    #[error("Error at position {position}: Expected number.")]
    ExpectedNumber {
        /// Byte offset of the failing expression.
        position: usize,
    },
    /// Attempted division or remainder by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the operator.
        position: usize,
    },
    /// The result grew too large to be represented.
    #[error("Error at position {position}: Overflow while trying to compute result.")]
    Overflow {
        /// Byte offset of the failing expression.
        position: usize,
    },
    /// An argument is outside the domain of the operation.
    #[error("Error at position {position}: {details}.")]
    DomainError {
        /// Details about why the operation is undefined.
        details:  String,
        /// Byte offset of the failing expression.
        position: usize,
    },
    /// An assertion failed during evaluation.
    #[error("Error at position {position}: Assertion failed.")]
    AssertionFailed {
        /// Byte offset of the call.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UndefinedVariable { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::TypeError { position, .. }
            | Self::ExpectedBoolean { position }
            | Self::ExpectedNumber { position }
            | Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::DomainError { position, .. }
            | Self::AssertionFailed { position } => *position,
        }
    }
}
