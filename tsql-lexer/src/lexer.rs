use core::iter::Peekable;
use core::str::Chars;

use crate::{error::LexerError, keyword::Keyword, token::Position, token::Token};

/// Scans a QL query into a sequence of tokens.
///
/// Grounded on `usql-lexer/src/lexer.rs`: a `Peekable<Chars>` driven by
/// single-character lookahead, tracking [`Position`] by advancing it on
/// every consumed character. Unlike the teacher, there is no dialect
/// parameter (QL has exactly one lexical grammar) and whitespace/`--`
/// comments are discarded during scanning rather than emitted as tokens,
/// since nothing downstream of the scanner ever needs them back.
pub struct Lexer<'a> {
    iter: Peekable<Chars<'a>>,
    position: Position,
}

const DURATION_UNIT_STARTS: &[char] = &['u', 'µ', 's', 'm', 'h', 'd', 'w'];

impl<'a> Lexer<'a> {
    /// Creates a scanner over the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            iter: input.chars().peekable(),
            position: Position::START,
        }
    }

    /// The position of the next character to be scanned.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Scans and returns the next significant token, skipping whitespace and
    /// `--` comments. Returns [`Token::Eof`] once the input is exhausted;
    /// further calls keep returning [`Token::Eof`].
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.next_token_located().map(|(_, token)| token)
    }

    /// Like [`Lexer::next_token`], but also returns the position of the
    /// token's first character. The parser needs this to stamp errors and
    /// AST-adjacent diagnostics with the offending token's location, since
    /// [`Lexer::position`] alone reflects only the cursor *after* the most
    /// recent scan, not a token's start.
    pub fn next_token_located(&mut self) -> Result<(Position, Token), LexerError> {
        self.skip_trivia();
        let start = self.position;
        let token = match self.peek() {
            None => Ok(Token::Eof),
            Some('"') => self.scan_quoted_ident(start),
            Some('\'') => self.scan_string(start),
            Some(c) if c.is_ascii_digit() => self.scan_number(start),
            Some(c) if is_ident_start(c) => Ok(self.scan_ident_or_keyword(start)),
            Some(_) => self.scan_symbol(start),
        }?;
        Ok((start, token))
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_whitespace() => {
                    self.advance();
                }
                Some('-') => {
                    // Only a `--` pair introduces a comment; a lone `-` is the
                    // minus operator and must be left for the caller.
                    let mut lookahead = self.iter.clone();
                    lookahead.next();
                    if lookahead.next() == Some('-') {
                        self.advance();
                        self.advance();
                        while let Some(&c) = self.iter.peek() {
                            if c == '\n' {
                                break;
                            }
                            self.advance();
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_quoted_ident(&mut self, start: Position) -> Result<Token, LexerError> {
        self.advance(); // opening `"`
        let mut value = String::new();
        loop {
            match self.iter.next() {
                Some('"') => {
                    self.position.advance('"');
                    break;
                }
                Some('\\') => match self.iter.next() {
                    Some('"') => {
                        self.position.advance('\\');
                        self.position.advance('"');
                        value.push('"');
                    }
                    Some('\\') => {
                        self.position.advance('\\');
                        self.position.advance('\\');
                        value.push('\\');
                    }
                    Some(other) => {
                        self.position.advance('\\');
                        self.position.advance(other);
                        value.push('\\');
                        value.push(other);
                    }
                    None => return Err(self.error(start, "unterminated quoted identifier")),
                },
                Some(c) => {
                    self.position.advance(c);
                    value.push(c);
                }
                None => return Err(self.error(start, "unterminated quoted identifier")),
            }
        }
        Ok(Token::Ident(format!("\"{}\"", value)))
    }

    fn scan_string(&mut self, start: Position) -> Result<Token, LexerError> {
        self.advance(); // opening `'`
        let mut value = String::new();
        loop {
            match self.iter.next() {
                Some('\'') => {
                    self.position.advance('\'');
                    break;
                }
                Some('\\') => match self.iter.next() {
                    Some('n') => {
                        self.position.advance('\\');
                        self.position.advance('n');
                        value.push('\n');
                    }
                    Some('\\') => {
                        self.position.advance('\\');
                        self.position.advance('\\');
                        value.push('\\');
                    }
                    Some('\'') => {
                        self.position.advance('\\');
                        self.position.advance('\'');
                        value.push('\'');
                    }
                    Some(other) => {
                        self.position.advance('\\');
                        self.position.advance(other);
                        value.push('\\');
                        value.push(other);
                    }
                    None => return Err(self.error(start, "unterminated string literal")),
                },
                Some(c) => {
                    self.position.advance(c);
                    value.push(c);
                }
                None => return Err(self.error(start, "unterminated string literal")),
            }
        }
        Ok(Token::String(value))
    }

    fn scan_number(&mut self, start: Position) -> Result<Token, LexerError> {
        let mut text = self.take_while(|c| c.is_ascii_digit());
        let mut fractional = false;
        if self.peek() == Some('.') {
            fractional = true;
            self.advance();
            text.push('.');
            text.push_str(&self.take_while(|c| c.is_ascii_digit()));
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {}
            // Rust's float parsing saturates an out-of-range literal to
            // infinity instead of erroring; QL treats that the same as an
            // unparsable number, matching the source language's ParseFloat.
            _ => return Err(self.error(start, "unable to parse number")),
        }
        // Fractional durations are rejected: the unit letter is left for the
        // next token, which lets the parser report its own diagnostic there.
        if !fractional {
            if let Some(unit) = self.try_scan_duration_unit() {
                text.push_str(&unit);
                return Ok(Token::Duration(text));
            }
        }
        Ok(Token::Number(text))
    }

    fn try_scan_duration_unit(&mut self) -> Option<String> {
        let c = self.peek()?;
        if !DURATION_UNIT_STARTS.contains(&c) {
            return None;
        }
        if c == 'm' {
            let mut lookahead = self.iter.clone();
            lookahead.next();
            if lookahead.next() == Some('s') {
                self.advance();
                self.advance();
                return Some("ms".into());
            }
        }
        self.advance();
        Some(c.to_string())
    }

    fn scan_ident_or_keyword(&mut self, _start: Position) -> Token {
        let text = self.take_while(is_ident_part);
        match Keyword::lookup(&text) {
            Some(kw) => Token::Keyword(kw, text),
            None => Token::Ident(text),
        }
    }

    fn scan_symbol(&mut self, start: Position) -> Result<Token, LexerError> {
        let c = self.iter.next().expect("peeked Some");
        self.position.advance(c);
        let token = match c {
            ',' => Token::Comma,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ';' => Token::SemiColon,
            '.' => Token::Period,
            '*' => Token::Star,
            '/' => Token::Slash,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '=' => Token::Equal,
            '!' => {
                if self.next_if_eq('=') {
                    Token::NotEqual
                } else {
                    return Err(self.error(start, "unexpected character '!'"));
                }
            }
            '<' => {
                if self.next_if_eq('=') {
                    Token::LessOrEqual
                } else {
                    Token::Less
                }
            }
            '>' => {
                if self.next_if_eq('=') {
                    Token::GreaterOrEqual
                } else {
                    Token::Greater
                }
            }
            other => return Err(self.error(start, format!("unexpected character {:?}", other))),
        };
        Ok(token)
    }

    fn peek(&mut self) -> Option<char> {
        self.iter.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.iter.next()?;
        self.position.advance(c);
        Some(c)
    }

    fn next_if_eq(&mut self, expected: char) -> bool {
        if self.iter.peek() == Some(&expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            s.push(c);
            self.advance();
        }
        s
    }

    fn error(&self, position: Position, message: impl Into<String>) -> LexerError {
        LexerError::new(position, message)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut out = vec![];
        loop {
            let token = lexer.next_token().unwrap();
            if token == Token::Eof {
                break;
            }
            out.push(token);
        }
        out
    }

    #[test]
    fn scans_simple_select() {
        assert_eq!(
            tokens("SELECT * FROM myseries"),
            vec![
                Token::Keyword(Keyword::SELECT, "SELECT".into()),
                Token::Star,
                Token::Keyword(Keyword::FROM, "FROM".into()),
                Token::Ident("myseries".into()),
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive_but_preserve_case() {
        assert_eq!(
            tokens("select X from Y"),
            vec![
                Token::Keyword(Keyword::SELECT, "select".into()),
                Token::Ident("X".into()),
                Token::Keyword(Keyword::FROM, "from".into()),
                Token::Ident("Y".into()),
            ]
        );
    }

    #[test]
    fn scans_quoted_identifier_retaining_quotes() {
        assert_eq!(tokens("\"1h.cpu\""), vec![Token::Ident("\"1h.cpu\"".into())]);
    }

    #[test]
    fn scans_string_literal_escapes() {
        assert_eq!(
            tokens(r"'it\'s a \\test\n'"),
            vec![Token::String("it's a \\test\n".into())]
        );
    }

    #[test]
    fn scans_duration_literal() {
        assert_eq!(tokens("10h"), vec![Token::Duration("10h".into())]);
        assert_eq!(tokens("15ms"), vec![Token::Duration("15ms".into())]);
        assert_eq!(tokens("100s 2m 2d 2w"), {
            let mut v = vec![];
            for s in ["100s", "2m", "2d", "2w"] {
                v.push(Token::Duration(s.into()));
            }
            v
        });
    }

    #[test]
    fn fractional_duration_splits_into_number_and_ident() {
        assert_eq!(
            tokens("10.5h"),
            vec![Token::Number("10.5".into()), Token::Ident("h".into())]
        );
    }

    #[test]
    fn skips_line_comments() {
        assert_eq!(
            tokens("SELECT 1 -- trailing comment\nFROM x"),
            vec![
                Token::Keyword(Keyword::SELECT, "SELECT".into()),
                Token::Number("1".into()),
                Token::Keyword(Keyword::FROM, "FROM".into()),
                Token::Ident("x".into()),
            ]
        );
    }

    #[test]
    fn unterminated_string_reports_position() {
        let mut lexer = Lexer::new("select 'foo");
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.message, "unterminated string literal");
    }

    #[test]
    fn number_followed_by_second_period_is_two_tokens() {
        let mut lexer = Lexer::new("1.2.3");
        assert_eq!(lexer.next_token().unwrap(), Token::Number("1.2".into()));
        assert_eq!(lexer.next_token().unwrap(), Token::Period);
        assert_eq!(lexer.next_token().unwrap(), Token::Number("3".into()));
    }

    #[test]
    fn out_of_range_number_reports_error() {
        let huge = "1".repeat(400);
        let mut lexer = Lexer::new(&huge);
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.message, "unable to parse number");
    }
}
