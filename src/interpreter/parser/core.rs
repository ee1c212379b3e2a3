use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Expr,
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Operator, Token},
        parser::{binary::parse_logical_or, utils::nest},
    },
};

/// How many brackets, prefix operators and right-associative operators the
/// parser descends through before it gives up with
/// [`ParseError::NestingTooDeep`].
pub const MAX_NESTING: usize = 128;

/// Tallest tree a left-associative operator chain may build.
pub const MAX_DEPTH: usize = 512;

/// Parses a complete token sequence into a single expression.
///
/// The whole slice must form exactly one expression; anything left over after
/// the top-level expression is an error.
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if the tokens run out while an
///   operand is required. The empty sequence fails this way at position 0.
/// - [`ParseError::UnexpectedToken`] if an operand cannot be formed.
/// - [`ParseError::UnexpectedTrailingInput`] if tokens remain.
/// - [`ParseError::NestingTooDeep`] if the expression nests past
///   [`MAX_NESTING`] or [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use exprkit::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let expr = parse(&tokenize("1 - 2 - 3").unwrap()).unwrap();
///
/// // Left-associative: (1 - 2) - 3
/// let Expr::Binary { left, op, .. } = expr else { panic!() };
/// assert_eq!(op, BinaryOperator::Sub);
/// assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Sub, .. }));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter).map_err(|e| match e {
                                               ParseError::UnexpectedEndOfInput { .. } => {
                                                   ParseError::UnexpectedEndOfInput {
                                                       position: end_position(tokens),
                                                   }
                                               },
                                               other => other,
                                           })?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingInput { token:    token.to_string(),
                                                         position: *position, });
    }

    debug!("parsed {} tokens into an expression of depth {}", tokens.len(), expr.depth());
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_nested_expression(tokens, 0)
}

/// Parses a full expression `depth` nesting levels below the top.
pub(in crate::interpreter::parser) fn parse_nested_expression<'a, I>(tokens: &mut Peekable<I>,
                                                                     depth: usize)
                                                                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_assignment(tokens, depth)
}

/// Parses an assignment.
///
/// Assignment is right-associative, so `a = b = 1` binds `b` first. The left
/// side has to be a bare identifier.
///
/// Grammar: `assignment := logical_or ("=" assignment)?`
///
/// # Errors
/// [`ParseError::InvalidAssignmentTarget`] if the left side is anything other
/// than an identifier.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let target = parse_logical_or(tokens, depth)?;

    let Some((Token::Operator(Operator::Equals), position)) = tokens.peek() else {
        return Ok(target);
    };
    let position = *position;
    tokens.next();

    let Expr::Identifier { name, .. } = target else {
        return Err(ParseError::InvalidAssignmentTarget { position });
    };

    let value = parse_assignment(tokens, nest(depth, position)?)?;
    Ok(Expr::Assign { name,
                      value: Box::new(value),
                      position })
}

/// Byte offset just past the final token, used to place end-of-input errors.
fn end_position(tokens: &[(Token, usize)]) -> usize {
    tokens.last()
          .map_or(0, |(token, position)| position + token.to_string().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::BinaryOperator, interpreter::lexer::tokenize};

    fn parse_str(source: &str) -> ParseResult<Expr> {
        parse(&tokenize(source)?)
    }

    #[test]
    fn empty_input_is_end_of_input() {
        assert_eq!(parse_str(""), Err(ParseError::UnexpectedEndOfInput { position: 0 }));
    }

    #[test]
    fn dangling_operator_reports_end_position() {
        assert_eq!(parse_str("1 +"), Err(ParseError::UnexpectedEndOfInput { position: 3 }));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(parse_str("1 2"),
                   Err(ParseError::UnexpectedTrailingInput { token:    "2".to_string(),
                                                             position: 2, }));
        assert!(matches!(parse_str("f [1]"),
                         Err(ParseError::UnexpectedTrailingInput { position: 2, .. })));
    }

    #[test]
    fn assignment_is_right_associative() {
        let expr = parse_str("a = b = 1 + 2").unwrap();
        let Expr::Assign { name, value, .. } = expr else {
            panic!("expected assignment");
        };
        assert_eq!(name, "a");
        assert!(matches!(*value, Expr::Assign { ref name, .. } if name == "b"));
    }

    #[test]
    fn assignment_binds_loosest() {
        let expr = parse_str("x = 1 || y").unwrap();
        let Expr::Assign { value, .. } = expr else {
            panic!("expected assignment");
        };
        assert!(matches!(*value, Expr::Binary { op: BinaryOperator::Or, .. }));
    }

    #[test]
    fn long_assignment_chains_are_cut_off() {
        let source = "a = ".repeat(10_000) + "1";
        assert!(matches!(parse_str(&source), Err(ParseError::NestingTooDeep { .. })));
        assert!(parse_str(&("a = ".repeat(100) + "1")).is_ok());
    }

    #[test]
    fn only_identifiers_can_be_assigned() {
        assert_eq!(parse_str("1 + x = 2"),
                   Err(ParseError::InvalidAssignmentTarget { position: 6 }));
        assert_eq!(parse_str("(x) = 2"),
                   Err(ParseError::InvalidAssignmentTarget { position: 4 }));
    }
}
