use std::iter::Peekable;

use crate::{
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::Token,
        parser::core::{MAX_DEPTH, MAX_NESTING},
    },
};

/// Steps one nesting level deeper.
///
/// Called wherever the parser recurses: bracket groups, call arguments,
/// prefix operators, the right side of `**` and of `=`.
///
/// # Returns
/// The nesting level for the nested parse.
///
/// # Errors
/// [`ParseError::NestingTooDeep`] once the level would exceed
/// [`MAX_NESTING`].
pub(in crate::interpreter::parser) const fn nest(depth: usize, position: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(depth + 1)
}

/// Rejects a tree whose height exceeds [`MAX_DEPTH`].
///
/// Left-associative chains such as `1 + 1 + ... + 1` grow the tree without
/// recursing in the parser, so their height is checked as they are folded.
pub(in crate::interpreter::parser) const fn check_height(height: usize, position: usize) -> ParseResult<()> {
    if height > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(())
}

/// Parses a comma-separated list of items until a closing token.
///
/// Used for function argument lists. It repeatedly calls `parse_item` to parse
/// one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. Every
/// comma has to follow an item and be followed by one, so leading, trailing
/// and doubled commas are errors.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or '{closing}', found '{tok}'"),
                                                         position: *position, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { position: 0 }),
        }
    }
    Ok(items)
}

/// Consumes the next token and checks that it is `expected`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] if a different token is found.
/// - [`ParseError::UnexpectedEndOfInput`] if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("expected '{expected}', found '{tok}'"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}
