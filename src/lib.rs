//! # exprkit
//!
//! exprkit is a small mathematical expression engine written in Rust.
//! It tokenizes, parses and evaluates expressions such as
//! `sqrt(16) + pow(2, 3)` or `r = 2 * pi`, with variables, built-in
//! functions, comparisons and boolean logic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        environment::Environment, evaluator::Evaluator, lexer::tokenize, parser::parse,
        value::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Attaches source positions to nodes for error reporting.
/// - Renders trees back to source form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression. Every error carries the byte offset
/// it was raised at.
pub mod error;
/// Orchestrates the tokenize, parse and evaluate pipeline.
///
/// This module ties together the lexer, parser, evaluator, values and
/// sessions, and exposes each phase on its own.
pub mod interpreter;

/// Evaluates `source` against `environment` in one go.
///
/// Runs the whole pipeline with the built-in functions. The first error from
/// any phase aborts the run. Assignments evaluate to their value but are not
/// stored; use [`interpreter::session::Session`] for that.
///
/// # Errors
/// Returns [`Error::Parse`] if the text cannot be tokenized or parsed and
/// [`Error::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use exprkit::{calculate, interpreter::{environment::Environment, value::Value}};
///
/// let env = Environment::new();
/// assert_eq!(calculate("sqrt(16) + pow(2, 3)", &env).unwrap(), Value::Number(12.0));
///
/// // 'x' is not defined
/// assert!(calculate("x + 1", &env).is_err());
/// ```
pub fn calculate(source: &str, environment: &Environment) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    Ok(Evaluator::new().evaluate(&expr, environment)?)
}
