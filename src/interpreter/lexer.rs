use std::fmt;

use log::debug;
use logos::Logos;

use crate::error::{BracketError, ParseError, ParseResult};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The lexer pairs every token with the byte offset it starts at, so the rest
/// of the pipeline works on `(Token, usize)` pairs.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `1.`.
    ///
    /// A number takes a run of digits and at most one decimal point.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`, `[` or `{`
    #[token("(", |_| Bracket::Paren)]
    #[token("[", |_| Bracket::Square)]
    #[token("{", |_| Bracket::Curly)]
    OpenBracket(Bracket),
    /// `)`, `]` or `}`
    #[token(")", |_| Bracket::Paren)]
    #[token("]", |_| Bracket::Square)]
    #[token("}", |_| Bracket::Curly)]
    CloseBracket(Bracket),
    /// `,`
    #[token(",")]
    Comma,
    /// Operator tokens. Two-character operators win over their one-character
    /// prefixes because the lexer always takes the longest match.
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Star)]
    #[token("/", |_| Operator::Slash)]
    #[token("%", |_| Operator::Percent)]
    #[token("=", |_| Operator::Equals)]
    #[token("!", |_| Operator::Bang)]
    #[token("<", |_| Operator::Less)]
    #[token(">", |_| Operator::Greater)]
    #[token("^", |_| Operator::Caret)]
    #[token("&", |_| Operator::Ampersand)]
    #[token("|", |_| Operator::Pipe)]
    #[token("==", |_| Operator::EqualEqual)]
    #[token("!=", |_| Operator::BangEqual)]
    #[token("<=", |_| Operator::LessEqual)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("**", |_| Operator::StarStar)]
    #[token("//", |_| Operator::SlashSlash)]
    #[token("&&", |_| Operator::AmpAmp)]
    #[token("||", |_| Operator::PipePipe)]
    Operator(Operator),
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// The three bracket shapes understood by the lexer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `( )`
    Paren,
    /// `[ ]`
    Square,
    /// `{ }`
    Curly,
}

impl Bracket {
    /// The opening character for this bracket shape.
    #[must_use]
    pub const fn open_char(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    /// The closing character for this bracket shape.
    #[must_use]
    pub const fn close_char(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// Every operator spelling the lexer recognises.
///
/// The lexer does not assign meaning to operators; the parser maps them to
/// [`crate::ast::BinaryOperator`] or [`crate::ast::UnaryOperator`] depending
/// on where they appear.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Equals,
    /// `!`
    Bang,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `^`
    Caret,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `**`
    StarStar,
    /// `//`
    SlashSlash,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
}

impl Operator {
    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Equals => "=",
            Self::Bang => "!",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::StarStar => "**",
            Self::SlashSlash => "//",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::OpenBracket(b) => write!(f, "{}", b.open_char()),
            Self::CloseBracket(b) => write!(f, "{}", b.close_char()),
            Self::Comma => f.write_str(","),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which makes the lexer report
///   an error at this position.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits `source` into position-annotated tokens.
///
/// Scans left to right, skipping whitespace. Brackets are tracked on a stack
/// while scanning, so the returned sequence is always bracket-balanced.
///
/// # Errors
/// - [`ParseError::UnexpectedCharacter`] for a character that starts no token.
/// - [`ParseError::UnmatchedBracket`] for a closing bracket with no opener, a
///   closing bracket of the wrong shape, or an opener left unclosed at the end
///   of input.
///
/// # Example
/// ```
/// use exprkit::interpreter::lexer::{Bracket, Operator, Token, tokenize};
///
/// let tokens = tokenize("(a+1)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::OpenBracket(Bracket::Paren), 0),
///                 (Token::Identifier("a".to_string()), 1),
///                 (Token::Operator(Operator::Plus), 2),
///                 (Token::Number(1.0), 3),
///                 (Token::CloseBracket(Bracket::Paren), 4)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut brackets: Vec<(Bracket, usize)> = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        let Ok(token) = token else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::UnexpectedCharacter { character,
                                                         position });
        };

        match token {
            Token::OpenBracket(open) => brackets.push((open, position)),
            Token::CloseBracket(close) => match brackets.pop() {
                Some((open, _)) if open == close => {},
                Some((open, open_position)) => {
                    return Err(BracketError::Mismatched { open: open.open_char(),
                                                         open_position,
                                                         close: close.close_char(),
                                                         close_position: position }.into());
                },
                None => {
                    return Err(BracketError::Unopened { close: close.close_char(),
                                                        position }.into());
                },
            },
            _ => {},
        }

        tokens.push((token, position));
    }

    if let Some((open, position)) = brackets.pop() {
        return Err(BracketError::Unclosed { open: open.open_char(),
                                            position }.into());
    }

    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn numbers_take_at_most_one_decimal_point() {
        assert_eq!(kinds("3.25"), vec![Token::Number(3.25)]);
        assert_eq!(kinds("7."), vec![Token::Number(7.0)]);
        assert!(matches!(tokenize("1.2.3"),
                         Err(ParseError::UnexpectedCharacter { character: '.',
                                                               position:  3, })));
    }

    #[test]
    fn identifiers_take_digits_and_underscores() {
        assert_eq!(kinds("_tmp2 x1"),
                   vec![Token::Identifier("_tmp2".into()), Token::Identifier("x1".into())]);
    }

    #[test]
    fn compound_operators_are_matched_greedily() {
        use Operator::{Bang, BangEqual, Star, StarStar};

        assert_eq!(kinds("** * != !"),
                   vec![Token::Operator(StarStar),
                        Token::Operator(Star),
                        Token::Operator(BangEqual),
                        Token::Operator(Bang)]);
        assert_eq!(kinds("a//b"),
                   vec![Token::Identifier("a".into()),
                        Token::Operator(Operator::SlashSlash),
                        Token::Identifier("b".into())]);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("  12 +\tfoo").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|(_, p)| *p).collect();
        assert_eq!(positions, vec![2, 5, 7]);
    }

    #[test]
    fn unknown_character_reports_position() {
        match tokenize("1 + $") {
            Err(ParseError::UnexpectedCharacter { character, position }) => {
                assert_eq!(character, '$');
                assert_eq!(position, 4);
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unclosed_bracket_is_reported_at_its_opener() {
        assert!(matches!(tokenize("(2 + 3"),
                         Err(ParseError::UnmatchedBracket(BracketError::Unclosed { open:     '(',
                                                                                   position: 0, }))));
    }

    #[test]
    fn mismatched_brackets_report_both_sides() {
        assert!(matches!(tokenize("[1 + 2)"),
                         Err(ParseError::UnmatchedBracket(BracketError::Mismatched {
                             open: '[',
                             open_position: 0,
                             close: ')',
                             close_position: 6,
                         }))));
    }

    #[test]
    fn stray_closing_bracket_is_an_error() {
        assert!(matches!(tokenize("1)"),
                         Err(ParseError::UnmatchedBracket(BracketError::Unopened { close:    ')',
                                                                                   position: 1, }))));
    }

    #[test]
    fn joined_token_text_tokenizes_identically() {
        let source = "max(a_1, 2.50)**-{x}//3 >= 4 && !y";
        let first = kinds(source);
        let joined = first.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        assert_eq!(kinds(&joined), first);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
