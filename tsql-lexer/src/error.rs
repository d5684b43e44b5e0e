use core::fmt;

use crate::token::Position;

/// A scanning failure, tied to the position of the offending character.
///
/// Grounded on `usql-lexer/src/error.rs`'s `LexerError`: a message plus a
/// location, with `Display`/`Error` but no backtrace or source chain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexerError {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Position of the first character of the offending text.
    pub position: Position,
}

impl LexerError {
    pub(crate) fn new(position: Position, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, char {}",
            self.message, self.position.line, self.position.column
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexerError {}
