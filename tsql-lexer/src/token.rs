use core::fmt;

use crate::keyword::Keyword;

/// A 1-based source position: line and character (column).
///
/// Grounded on `usql/src/error.rs`'s `Location`, renamed to match spec
/// terminology ("line" and "char").
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based character (column) offset within the line. Tabs count as one
    /// character, matching spec §9.
    pub column: usize,
}

impl Position {
    /// The position of the first character of a fresh scan.
    pub const START: Position = Position { line: 1, column: 1 };

    pub(crate) fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, char {}", self.line, self.column)
    }
}

/// A scanned token: its lexical category, its position, and (where
/// significant) its literal source text.
///
/// Quoted identifiers retain their surrounding `"` in [`Token::Ident`]'s
/// string, per spec §3.1/§3.5; this is what lets the parser preserve quoted
/// names verbatim in AST fields such as a retention policy's `"1h.cpu"`.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A bare or quoted identifier. The literal text includes surrounding
    /// double quotes when the source used them.
    Ident(String),
    /// A single-quoted string literal, with quotes stripped and escapes
    /// resolved.
    String(String),
    /// An unsigned numeric literal, stored as scanned (not yet parsed).
    Number(String),
    /// A duration literal (`<integer><unit>`), stored as scanned.
    Duration(String),
    /// A reserved keyword: its kind, plus the literal text as it appeared in
    /// the source (case preserved).
    Keyword(Keyword, String),

    /// `,`
    Comma,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    SemiColon,
    /// `.`
    Period,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,

    /// End of input. Repeated reads past EOF keep returning this.
    Eof,
}

impl Token {
    /// The keyword this token represents, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Token::Keyword(kw, _) => Some(*kw),
            _ => None,
        }
    }

    /// True if this token is the given keyword.
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => f.write_str(s),
            Token::String(s) => write!(f, "'{}'", s),
            Token::Number(s) => f.write_str(s),
            Token::Duration(s) => f.write_str(s),
            Token::Keyword(kw, _) => write!(f, "{}", kw),
            Token::Comma => f.write_str(","),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::SemiColon => f.write_str(";"),
            Token::Period => f.write_str("."),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Equal => f.write_str("="),
            Token::NotEqual => f.write_str("!="),
            Token::Less => f.write_str("<"),
            Token::LessOrEqual => f.write_str("<="),
            Token::Greater => f.write_str(">"),
            Token::GreaterOrEqual => f.write_str(">="),
            Token::Eof => f.write_str("EOF"),
        }
    }
}
