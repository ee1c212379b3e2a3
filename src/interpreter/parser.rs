/// Binary operator parsing.
///
/// Implements one function per precedence level, from logical OR down to
/// exponentiation, and the token to operator mapping they share.
pub mod binary;
/// Core parsing entry points.
///
/// Contains the `parse` function that turns a whole token slice into one
/// expression, and the assignment level that sits at the top of the grammar.
pub mod core;
/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, identifiers, function calls and
/// bracket groups.
pub mod unary;
/// Helpers shared by the parsing functions.
pub mod utils;

pub use self::core::{parse, parse_expression};
