use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Bracket, Operator, Token},
        parser::{
            core::parse_nested_expression,
            utils::{expect_token, nest, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. Each prefix operator counts as one nesting level.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Operator(Operator::Minus), _)) => UnaryOperator::Negate,
        Some((Token::Operator(Operator::Plus), _)) => UnaryOperator::Plus,
        Some((Token::Operator(Operator::Bang), _)) => UnaryOperator::Not,
        _ => return parse_primary(tokens, depth),
    };

    let (_, position) = *tokens.next().ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;
    let operand = parse_unary(tokens, nest(depth, position)?)?;
    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     position })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - identifiers
/// - function calls
/// - bracket groups in any of `()`, `[]` or `{}`
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER ("(" arguments ")")?
///              | open expression close
/// ```
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] when there is no token left.
/// - [`ParseError::UnexpectedToken`] when the next token cannot start an
///   operand, such as a closing bracket, a comma or an infix operator.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match peeked {
        (Token::Number(value), position) => {
            let expr = Expr::Number { value:    *value,
                                      position: *position, };
            tokens.next();
            Ok(expr)
        },
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens, depth),
        (Token::OpenBracket(_), _) => parse_group(tokens, depth),
        (tok, position) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses a bracketed expression.
///
/// Expected form `open expression close`, where `close` must be the partner of
/// `open`. The tokenizer has already checked bracket pairing, but the group
/// checks the closing token again so the parser never depends on that.
///
/// Grammar `group := "(" expression ")" | "[" expression "]" | "{" expression "}"`
fn parse_group<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (bracket, position) = match tokens.next() {
        Some((Token::OpenBracket(bracket), position)) => (*bracket, *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };

    let inner = parse_nested_expression(tokens, nest(depth, position)?)?;
    expect_token(tokens, &Token::CloseBracket(bracket))?;

    Ok(Expr::Group { bracket,
                     inner: Box::new(inner),
                     position })
}

/// Parses an identifier or a function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// Only `(` directly after the name starts a call.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Identifier`] otherwise.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(name), position)) => (name.clone(), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                     position: *position, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    };

    match tokens.peek() {
        Some((Token::OpenBracket(Bracket::Paren), _)) => {
            tokens.next();
            let depth = nest(depth, position)?;
            let arguments = parse_comma_separated(tokens,
                                                  |tokens| parse_nested_expression(tokens, depth),
                                                  &Token::CloseBracket(Bracket::Paren))?;
            Ok(Expr::FunctionCall { name,
                                    arguments,
                                    position })
        },
        _ => Ok(Expr::Identifier { name, position }),
    }
}
