use core::fmt;

use tsql_lexer::{LexerError, Position, Token};

/// A parse failure: a rendered, human-readable message. Spec §7 treats the
/// exact message text as a public contract, so every variant is produced by
/// one of the constructors below rather than assembled ad hoc at call
/// sites — the single table the spec's "error catalog" design note (§9)
/// asks for.
///
/// Grounded on `usql-parser::ParserError`, generalized from its two
/// constructors (`parse_error`/`unexpected_eof`) to the full catalog QL's
/// contract requires.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParserError {
    message: String,
}

impl ParserError {
    /// `found <tok>, expected <tok1>, <tok2>, … at line L, char C`.
    pub(crate) fn expected(position: Position, expected: &[&str], found: &Token) -> Self {
        Self {
            message: format!(
                "found {}, expected {} at {}",
                found,
                expected.join(", "),
                position
            ),
        }
    }

    /// `fractional parts not allowed in LIMIT/OFFSET at line L, char C`.
    pub(crate) fn fractional_limit_offset(position: Position, clause: &str) -> Self {
        Self {
            message: format!(
                "fractional parts not allowed in {} at {}",
                clause, position
            ),
        }
    }

    /// `LIMIT/OFFSET must be > 0 at line L, char C`.
    pub(crate) fn non_positive_limit_offset(position: Position, clause: &str) -> Self {
        Self {
            message: format!("{} must be > 0 at {}", clause, position),
        }
    }

    /// `unable to parse date at line L, char C`.
    pub(crate) fn unable_to_parse_date(position: Position) -> Self {
        Self {
            message: format!("unable to parse date at {}", position),
        }
    }

    /// `unable to parse datetime at line L, char C`.
    pub(crate) fn unable_to_parse_datetime(position: Position) -> Self {
        Self {
            message: format!("unable to parse datetime at {}", position),
        }
    }

    /// `number must be an integer at line L, char C`.
    pub(crate) fn number_must_be_integer(position: Position) -> Self {
        Self {
            message: format!("number must be an integer at {}", position),
        }
    }

    /// `invalid value N: must be 1 <= n <= 2147483647 at line L, char C`.
    pub(crate) fn invalid_replication_factor(position: Position, n: i64) -> Self {
        Self {
            message: format!(
                "invalid value {}: must be 1 <= n <= 2147483647 at {}",
                n, position
            ),
        }
    }

    /// `invalid duration` — surfaced with no position, matching
    /// [`crate::duration::parse_duration`]'s own error (spec §7's note that
    /// this one template carries no location).
    pub(crate) fn invalid_duration() -> Self {
        Self {
            message: "invalid duration".to_string(),
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParserError {}

impl From<LexerError> for ParserError {
    fn from(err: LexerError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<crate::duration::DurationError> for ParserError {
    fn from(_: crate::duration::DurationError) -> Self {
        Self::invalid_duration()
    }
}
