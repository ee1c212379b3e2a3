use thiserror::Error;

/// Result type used by the tokenizer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Every variant carries the byte offset of the offending input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("Error at position {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The character encountered.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// Brackets do not pair up.
    #[error(transparent)]
    UnmatchedBracket(#[from] BracketError),
    /// Found a token where an operand or a specific token was required.
    #[error("Error at position {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered, or a short description of what was expected.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still required.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset just past the last token.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at position {position}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingInput {
        /// The first leftover token.
        token:    String,
        /// Byte offset of the token.
        position: usize,
    },
    /// The left side of `=` is not a plain identifier.
    #[error("Error at position {position}: Only a variable name can be assigned to.")]
    InvalidAssignmentTarget {
        /// Byte offset of the `=` operator.
        position: usize,
    },
    /// Brackets, prefix operators or operator chains nest deeper than the
    /// parser allows.
    #[error("Error at position {position}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// Byte offset of the token that went past the limit.
        position: usize,
    },
}

/// The ways brackets can fail to pair up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BracketError {
    /// An opening bracket was never closed.
    #[error("Error at position {position}: Unmatched '{open}' is never closed.")]
    Unclosed {
        /// The opening bracket character.
        open:     char,
        /// Byte offset of the opening bracket.
        position: usize,
    },
    /// A closing bracket appeared with nothing open.
    #[error("Error at position {position}: Unmatched '{close}' has no opening bracket.")]
    Unopened {
        /// The closing bracket character.
        close:    char,
        /// Byte offset of the closing bracket.
        position: usize,
    },
    /// A closing bracket does not match the most recent opening bracket.
    #[error("Error at position {close_position}: '{close}' does not match '{open}' opened at position {open_position}.")]
    Mismatched {
        /// The opening bracket character.
        open:           char,
        /// Byte offset of the opening bracket.
        open_position:  usize,
        /// The closing bracket character.
        close:          char,
        /// Byte offset of the closing bracket.
        close_position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::UnexpectedTrailingInput { position, .. }
            | Self::InvalidAssignmentTarget { position }
            | Self::NestingTooDeep { position }
            | Self::UnmatchedBracket(BracketError::Unclosed { position, .. }
                                     | BracketError::Unopened { position, .. }
                                     | BracketError::Mismatched { close_position: position,
                                                                  .. }) => *position,
        }
    }
}
