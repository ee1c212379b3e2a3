/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression: stray characters, unbalanced brackets, misplaced tokens and
/// leftover input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables, unknown functions, type mismatches and division by
/// zero.
pub mod runtime_error;

pub use parse_error::{BracketError, ParseError, ParseResult};
pub use runtime_error::{EvalResult, RuntimeError};
use thiserror::Error;

/// Any failure of the full tokenize, parse and evaluate pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
