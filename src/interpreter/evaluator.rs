/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and logical operators, including the
/// short-circuiting forms.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the `Evaluator` type and the post-order walk over the AST.
pub mod core;

/// Function evaluation.
///
/// Holds the built-in function table and the built-in implementations.
pub mod function;

/// Unary operator evaluation logic.
///
/// Implements negation, identity and logical NOT.
pub mod unary;

/// Utility functions for evaluation.
///
/// Provides argument checks and result validation shared by operators and
/// built-in functions.
pub mod utils;

pub use self::core::Evaluator;
