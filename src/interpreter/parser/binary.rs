use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseResult,
    interpreter::{
        lexer::{Operator, Token},
        parser::{
            unary::parse_unary,
            utils::{check_height, nest},
        },
    },
};

/// Parses one left-associative precedence level.
///
/// Parses an operand with `next`, then keeps folding `operand (op operand)*`
/// into a left-leaning tree for as long as the upcoming operator is one of
/// `operators`. Each fold makes the tree one level taller, so the height is
/// tracked and capped at [`crate::interpreter::parser::core::MAX_DEPTH`].
///
/// # Parameters
/// - `tokens`: Token stream with positions.
/// - `depth`: Current nesting level, passed on to `next`.
/// - `next`: Parser for the next-higher precedence level.
/// - `operators`: Operators that belong to this level.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 next: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 operators: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = next(tokens, depth)?;
    let mut height = left.depth();
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && operators.contains(&op)
        {
            let position = *position;
            tokens.next();
            let right = next(tokens, depth)?;
            height = 1 + height.max(right.depth());
            check_height(height, position)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||` and its eager form `|`.
/// Precedence is lower than AND.
///
/// Grammar: `logical_or := logical_and (("||" | "|") logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens,
                           depth,
                           parse_logical_and,
                           &[BinaryOperator::Or, BinaryOperator::EagerOr])
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&` and its eager form `&`.
///
/// Grammar: `logical_and := equality (("&&" | "&") equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens,
                           depth,
                           parse_equality,
                           &[BinaryOperator::And, BinaryOperator::EagerAnd])
}

/// Parses equality comparisons.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens,
                           depth,
                           parse_comparison,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual])
}

/// Parses ordering comparisons.
///
/// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens,
                           depth,
                           parse_additive,
                           &[BinaryOperator::Less,
                             BinaryOperator::Greater,
                             BinaryOperator::LessEqual,
                             BinaryOperator::GreaterEqual])
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens,
                           depth,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := exponent (("*" | "/" | "//" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_left_associative(tokens,
                           depth,
                           parse_exponent,
                           &[BinaryOperator::Mul,
                             BinaryOperator::Div,
                             BinaryOperator::FloorDiv,
                             BinaryOperator::Mod])
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ** b ** c` parses as
/// `a ** (b ** c)`. The right-hand side recurses into this same level instead
/// of looping. `^` is accepted as a synonym for `**`.
///
/// Grammar: `exponent := unary (("**" | "^") exponent)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_unary(tokens, depth)?;

    if let Some((token, position)) = tokens.peek()
       && let Some(BinaryOperator::Pow) = token_to_binary_operator(token)
    {
        let position = *position;
        tokens.next();
        let exponent = parse_exponent(tokens, nest(depth, position)?)?;
        return Ok(Expr::Binary { left: Box::new(base),
                                 op: BinaryOperator::Pow,
                                 right: Box::new(exponent),
                                 position });
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators, including `=` and
/// `!`, which only appear in assignment and prefix position.
///
/// # Example
/// ```
/// use exprkit::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Operator, Token},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Operator(Operator::Caret)),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    let Token::Operator(op) = token else {
        return None;
    };
    match op {
        Operator::Plus => Some(BinaryOperator::Add),
        Operator::Minus => Some(BinaryOperator::Sub),
        Operator::Star => Some(BinaryOperator::Mul),
        Operator::Slash => Some(BinaryOperator::Div),
        Operator::SlashSlash => Some(BinaryOperator::FloorDiv),
        Operator::Percent => Some(BinaryOperator::Mod),
        Operator::StarStar | Operator::Caret => Some(BinaryOperator::Pow),
        Operator::Less => Some(BinaryOperator::Less),
        Operator::Greater => Some(BinaryOperator::Greater),
        Operator::LessEqual => Some(BinaryOperator::LessEqual),
        Operator::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Operator::EqualEqual => Some(BinaryOperator::Equal),
        Operator::BangEqual => Some(BinaryOperator::NotEqual),
        Operator::AmpAmp => Some(BinaryOperator::And),
        Operator::PipePipe => Some(BinaryOperator::Or),
        Operator::Ampersand => Some(BinaryOperator::EagerAnd),
        Operator::Pipe => Some(BinaryOperator::EagerOr),
        Operator::Equals | Operator::Bang => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::parse},
    };

    fn parsed(source: &str) -> Expr {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    fn root_op(expr: &Expr) -> BinaryOperator {
        match expr {
            Expr::Binary { op, .. } => *op,
            other => panic!("expected binary node, found {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parsed("1 + 2 * 3");
        assert_eq!(root_op(&expr), BinaryOperator::Add);
        let Expr::Binary { right, .. } = expr else { unreachable!() };
        assert_eq!(root_op(&right), BinaryOperator::Mul);
    }

    #[test]
    fn exponent_is_right_associative() {
        let Expr::Binary { left, right, .. } = parsed("2 ** 3 ^ 2") else {
            panic!("expected binary node");
        };
        assert!(matches!(*left, Expr::Number { value, .. } if value == 2.0));
        assert_eq!(root_op(&right), BinaryOperator::Pow);
    }

    #[test]
    fn unary_minus_binds_tighter_than_exponent() {
        let Expr::Binary { left, op, .. } = parsed("-2 ** 2") else {
            panic!("expected binary node");
        };
        assert_eq!(op, BinaryOperator::Pow);
        assert!(matches!(*left, Expr::Unary { .. }));
    }

    #[test]
    fn precedence_ladder_from_or_to_comparison() {
        // a || (b && ((c == d) ...)) with comparisons below equality.
        let expr = parsed("a || b && c == d < e + 1");
        assert_eq!(root_op(&expr), BinaryOperator::Or);
        let Expr::Binary { right, .. } = expr else { unreachable!() };
        assert_eq!(root_op(&right), BinaryOperator::And);
        let Expr::Binary { right, .. } = *right else { unreachable!() };
        assert_eq!(root_op(&right), BinaryOperator::Equal);
        let Expr::Binary { right, .. } = *right else { unreachable!() };
        assert_eq!(root_op(&right), BinaryOperator::Less);
    }

    #[test]
    fn eager_operators_share_levels_with_short_circuit_ones() {
        let expr = parsed("a | b & c");
        assert_eq!(root_op(&expr), BinaryOperator::EagerOr);
        let Expr::Binary { right, .. } = expr else { unreachable!() };
        assert_eq!(root_op(&right), BinaryOperator::EagerAnd);
    }

    #[test]
    fn long_operator_chains_are_capped() {
        let long = vec!["1"; 10_000].join(" + ");
        assert!(matches!(parse(&tokenize(&long).unwrap()),
                         Err(ParseError::NestingTooDeep { .. })));
        let powers = vec!["2"; 10_000].join(" ** ");
        assert!(matches!(parse(&tokenize(&powers).unwrap()),
                         Err(ParseError::NestingTooDeep { .. })));

        let fine = vec!["1"; 300].join(" + ");
        assert_eq!(parsed(&fine).depth(), 300);
    }

    #[test]
    fn binary_nodes_record_operator_position() {
        assert_eq!(parsed("10 // 3").position(), 3);
    }
}
