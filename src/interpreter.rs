/// Variable bindings that expressions are evaluated against.
///
/// An `Environment` maps names to values. The evaluator only reads it;
/// [`session::Session`] is the piece that writes to it.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST in post-order, performs arithmetic, comparison
/// and logical operations, calls functions from its function table, and
/// produces a [`value::Value`].
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Resolves variables in an [`environment::Environment`].
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source and produces a sequence of tokens, each
/// paired with the byte offset where it starts. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input into numbers, identifiers, operators, brackets and
///   commas.
/// - Validates bracket nesting while scanning.
/// - Reports lexical errors with their position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level turns
/// the token sequence into a single [`crate::ast::Expr`].
///
/// # Responsibilities
/// - Applies operator precedence and associativity.
/// - Builds calls, bracket groups and assignments.
/// - Reports syntax errors with their position.
pub mod parser;
/// A running calculator session.
///
/// Pairs an evaluator with a mutable environment so that assignments and the
/// `ans` variable persist from one line to the next.
pub mod session;
/// The value module defines the runtime data types for evaluation.
pub mod value;
