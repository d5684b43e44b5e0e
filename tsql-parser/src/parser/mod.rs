mod expression;
mod statement;

use tsql_ast::{Query, Statement};
use tsql_lexer::{Keyword, Lexer, Position, Token};

use crate::error::ParserError;

/// Drives a [`Lexer`] and constructs the QL abstract syntax tree.
///
/// Grounded on `usql-parser::Parser`: owns its scanner and a one-token
/// pushback slot, per the concurrency note in spec §5 — a parser instance
/// is not `Sync`/shareable; to parse concurrently, construct independent
/// instances.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pushback: Option<(Position, Token)>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given source text.
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            pushback: None,
        }
    }

    /// Parses every statement in the input, in order (`ParseQuery`, spec
    /// §4.2). Skips empty statements produced by a leading or trailing `;`;
    /// an empty input produces an empty [`Query`], not an error (spec
    /// §8.1 property 2).
    pub fn parse_query(&mut self) -> Result<Query, ParserError> {
        let mut statements = Vec::new();
        loop {
            while self.consume_if(&Token::SemiColon)? {}
            let (_, token) = self.peek()?;
            if token == Token::Eof {
                break;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(Query { statements })
    }

    /// Parses exactly one statement (`ParseStatement`, spec §4.2): reads
    /// the leading keyword and dispatches to the matching statement rule.
    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let (position, token) = self.peek()?;
        match token.keyword() {
            Some(Keyword::SELECT) => Ok(Statement::Select(self.parse_select()?)),
            Some(Keyword::DELETE) => Ok(Statement::Delete(self.parse_delete()?)),
            Some(Keyword::SHOW) => self.parse_show(),
            Some(Keyword::DROP) => self.parse_drop(),
            Some(Keyword::CREATE) => self.parse_create(),
            Some(Keyword::ALTER) => Ok(Statement::AlterRetentionPolicy(
                self.parse_alter_retention_policy()?,
            )),
            Some(Keyword::GRANT) => Ok(Statement::Grant(self.parse_grant()?)),
            Some(Keyword::REVOKE) => Ok(Statement::Revoke(self.parse_revoke()?)),
            _ => Err(ParserError::expected(position, &["SELECT"], &token)),
        }
    }

    /// Consumes the next token and returns it with its position.
    fn next(&mut self) -> Result<(Position, Token), ParserError> {
        match self.pushback.take() {
            Some(located) => Ok(located),
            None => Ok(self.lexer.next_token_located()?),
        }
    }

    /// Returns the next token and its position without consuming it. A
    /// second call before [`Parser::next`] returns the same token, since
    /// QL's grammar never needs more than one token of lookahead.
    fn peek(&mut self) -> Result<(Position, Token), ParserError> {
        let located = self.next()?;
        self.pushback = Some(located.clone());
        Ok(located)
    }

    fn push_back(&mut self, located: (Position, Token)) {
        self.pushback = Some(located);
    }

    /// Consumes the next token and returns `true` if it equals `expected`,
    /// otherwise leaves it for the next read and returns `false`.
    fn consume_if(&mut self, expected: &Token) -> Result<bool, ParserError> {
        let located = self.next()?;
        if located.1 == *expected {
            Ok(true)
        } else {
            self.push_back(located);
            Ok(false)
        }
    }

    /// Consumes the next token and requires it to equal `expected`,
    /// reporting `name` in the diagnostic if it doesn't.
    fn expect_token(&mut self, expected: &Token, name: &str) -> Result<Position, ParserError> {
        let (position, token) = self.next()?;
        if token == *expected {
            Ok(position)
        } else {
            Err(ParserError::expected(position, &[name], &token))
        }
    }

    /// Consumes the next token if it is `keyword`, otherwise leaves it and
    /// returns `false`.
    fn parse_keyword(&mut self, keyword: Keyword) -> Result<bool, ParserError> {
        let located = self.next()?;
        if located.1.is_keyword(keyword) {
            Ok(true)
        } else {
            self.push_back(located);
            Ok(false)
        }
    }

    /// Consumes the next token and requires it to be `keyword`.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<Position, ParserError> {
        let (position, token) = self.next()?;
        if token.is_keyword(keyword) {
            Ok(position)
        } else {
            Err(ParserError::expected(
                position,
                &[&keyword.to_string()],
                &token,
            ))
        }
    }

    /// Consumes the next token if it is one of `keywords`, returning the
    /// matched keyword and its position.
    fn parse_one_of_keywords(
        &mut self,
        keywords: &[Keyword],
    ) -> Result<Option<(Position, Keyword)>, ParserError> {
        let located = self.next()?;
        match located.1.keyword() {
            Some(kw) if keywords.contains(&kw) => Ok(Some((located.0, kw))),
            _ => {
                self.push_back(located);
                Ok(None)
            }
        }
    }

    /// Consumes the next token and requires it to be one of `keywords`.
    fn expect_one_of_keywords(
        &mut self,
        keywords: &[Keyword],
    ) -> Result<(Position, Keyword), ParserError> {
        match self.parse_one_of_keywords(keywords)? {
            Some(found) => Ok(found),
            None => {
                let (position, token) = self.next()?;
                let names: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                Err(ParserError::expected(position, &names, &token))
            }
        }
    }

    /// Parses a comma-separated list of one or more items via `f`.
    fn parse_comma_separated<T>(
        &mut self,
        mut f: impl FnMut(&mut Self) -> Result<T, ParserError>,
    ) -> Result<Vec<T>, ParserError> {
        let mut values = vec![f(self)?];
        while self.consume_if(&Token::Comma)? {
            values.push(f(self)?);
        }
        Ok(values)
    }

    /// Parses an identifier (bare or quoted), preserving quotes verbatim in
    /// the returned string. `TIME` is reserved (spec §4.1's keyword table)
    /// but is accepted here too — it still needs to work as a measurement,
    /// alias, or sort-field name rather than only inside expression position.
    fn parse_identifier(&mut self) -> Result<String, ParserError> {
        let (position, token) = self.next()?;
        match token {
            Token::Ident(name) => Ok(name),
            Token::Keyword(Keyword::TIME, text) => Ok(text),
            other => Err(ParserError::expected(position, &["identifier"], &other)),
        }
    }

    /// Parses the integer argument of a `LIMIT`/`OFFSET` clause: a
    /// fractional number is rejected with `clause`-specific wording, and so
    /// is zero.
    fn parse_limit_or_offset(&mut self, clause: &str) -> Result<u64, ParserError> {
        let (position, token) = self.next()?;
        match token {
            Token::Number(text) => {
                if text.contains('.') {
                    return Err(ParserError::fractional_limit_offset(position, clause));
                }
                let value: u64 = text
                    .parse()
                    .map_err(|_| ParserError::number_must_be_integer(position))?;
                if value == 0 {
                    return Err(ParserError::non_positive_limit_offset(position, clause));
                }
                Ok(value)
            }
            other => Err(ParserError::expected(position, &["number"], &other)),
        }
    }

    /// Parses a plain decimal integer (e.g. `REPLICATION <n>`), positioned
    /// so the caller can range-check it.
    fn parse_integer(&mut self) -> Result<(Position, i64), ParserError> {
        let (position, token) = self.next()?;
        match token {
            Token::Number(text) => {
                if text.contains('.') {
                    return Err(ParserError::number_must_be_integer(position));
                }
                let value: i64 = text
                    .parse()
                    .map_err(|_| ParserError::number_must_be_integer(position))?;
                Ok((position, value))
            }
            other => Err(ParserError::expected(position, &["number"], &other)),
        }
    }
}
