use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tsql_ast::{BinaryOperator, Expr};
use tsql_lexer::{Keyword, Token};

use crate::{duration::parse_duration, error::ParserError, parser::Parser};

/// Tokens accepted at the start of an expression, as reported in
/// diagnostics.
const EXPR_PREFIX_EXPECTED: &[&str] = &["identifier", "string", "number", "bool"];

impl<'a> Parser<'a> {
    /// Parses a complete expression (`ParseExpr`, spec §4.3).
    pub fn parse_expr(&mut self) -> Result<Expr, ParserError> {
        self.parse_subexpr(0)
    }

    /// Parses tokens until the next operator's precedence no longer
    /// exceeds `precedence`, implementing left-associative Pratt parsing
    ///.
    fn parse_subexpr(&mut self, precedence: u8) -> Result<Expr, ParserError> {
        let mut expr = self.parse_prefix()?;
        loop {
            let next_precedence = self.next_precedence()?;
            if precedence >= next_precedence {
                break;
            }
            expr = self.parse_infix(expr, next_precedence)?;
        }
        Ok(expr)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParserError> {
        let (position, token) = self.next()?;
        match token {
            Token::Number(text) => text
                .parse::<f64>()
                .map(Expr::Number)
                .map_err(|_| ParserError::number_must_be_integer(position)),
            Token::String(text) => self.parse_string_or_time(position, text),
            Token::Duration(text) => Ok(Expr::Duration(parse_duration(&text)?)),
            Token::Keyword(Keyword::TRUE, _) => Ok(Expr::Boolean(true)),
            Token::Keyword(Keyword::FALSE, _) => Ok(Expr::Boolean(false)),
            // `TIME` is reserved (spec §4.1's keyword table) but still needs
            // to work as a plain identifier and as the `time(<duration>)`
            // call used throughout `GROUP BY` — it is never a literal in
            // expression position, so it's folded into the same path as any
            // other identifier rather than rejected.
            Token::Keyword(Keyword::TIME, text) => self.parse_identifier_or_call(text),
            Token::Ident(name) => self.parse_identifier_or_call(name),
            Token::Star => Ok(Expr::Wildcard),
            Token::LeftParen => {
                let inner = self.parse_expr()?;
                self.expect_token(&Token::RightParen, ")")?;
                Ok(Expr::Paren(Box::new(inner)))
            }
            other => Err(ParserError::expected(position, EXPR_PREFIX_EXPECTED, &other)),
        }
    }

    /// A string is reinterpreted as a [`Expr::Time`] only when it has the
    /// shape of a date or datetime; shape-matching but invalid
    /// calendar values raise `unable to parse date/datetime`, while a string
    /// with no date-like shape stays a plain [`Expr::String`].
    fn parse_string_or_time(
        &self,
        position: tsql_lexer::Position,
        text: String,
    ) -> Result<Expr, ParserError> {
        if looks_like_datetime_shape(&text) {
            return NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M:%S%.f")
                .map(|naive| Expr::Time(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)))
                .map_err(|_| ParserError::unable_to_parse_datetime(position));
        }
        if looks_like_date_shape(&text) {
            return NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                .map(|date| {
                    // Midnight always exists for any valid calendar date.
                    let naive = date.and_hms_opt(0, 0, 0).unwrap();
                    Expr::Time(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
                })
                .map_err(|_| ParserError::unable_to_parse_date(position));
        }
        Ok(Expr::String(text))
    }

    fn parse_identifier_or_call(&mut self, name: String) -> Result<Expr, ParserError> {
        if self.consume_if(&Token::LeftParen)? {
            let args = if self.consume_if(&Token::RightParen)? {
                Vec::new()
            } else {
                let args = self.parse_comma_separated(Parser::parse_expr)?;
                self.expect_token(&Token::RightParen, ")")?;
                args
            };
            Ok(Expr::Call { name, args })
        } else {
            Ok(Expr::VarRef(name))
        }
    }

    /// The binding power of the upcoming operator token, or 0 if the next
    /// token isn't an infix operator (spec §4.3's precedence table, lowest
    /// to highest: `OR`, `AND`, comparisons, `+`/`-`, `*`/`/`).
    fn next_precedence(&mut self) -> Result<u8, ParserError> {
        let (_, token) = self.peek()?;
        Ok(match token {
            Token::Keyword(Keyword::OR, _) => 1,
            Token::Keyword(Keyword::AND, _) => 2,
            Token::Equal
            | Token::NotEqual
            | Token::Less
            | Token::LessOrEqual
            | Token::Greater
            | Token::GreaterOrEqual => 3,
            Token::Plus | Token::Minus => 4,
            Token::Star | Token::Slash => 5,
            _ => 0,
        })
    }

    fn parse_infix(&mut self, left: Expr, precedence: u8) -> Result<Expr, ParserError> {
        let (position, token) = self.next()?;
        let op = match token {
            Token::Keyword(Keyword::OR, _) => BinaryOperator::Or,
            Token::Keyword(Keyword::AND, _) => BinaryOperator::And,
            Token::Equal => BinaryOperator::Equal,
            Token::NotEqual => BinaryOperator::NotEqual,
            Token::Less => BinaryOperator::LessThan,
            Token::LessOrEqual => BinaryOperator::LessThanOrEqual,
            Token::Greater => BinaryOperator::GreaterThan,
            Token::GreaterOrEqual => BinaryOperator::GreaterThanOrEqual,
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Subtract,
            Token::Star => BinaryOperator::Multiply,
            Token::Slash => BinaryOperator::Divide,
            // Can only happen if `next_precedence` got out of sync with this match.
            other => return Err(ParserError::expected(position, &["an operator"], &other)),
        };
        let right = self.parse_subexpr(precedence)?;
        Ok(Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

fn is_date_prefix(b: &[u8]) -> bool {
    b.len() >= 10
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2].is_ascii_digit()
        && b[3].is_ascii_digit()
        && b[4] == b'-'
        && b[5].is_ascii_digit()
        && b[6].is_ascii_digit()
        && b[7] == b'-'
        && b[8].is_ascii_digit()
        && b[9].is_ascii_digit()
}

fn looks_like_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10 && is_date_prefix(b)
}

fn looks_like_datetime_shape(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 19 || !is_date_prefix(b) || b[10] != b' ' {
        return false;
    }
    let time_ok = b[11].is_ascii_digit()
        && b[12].is_ascii_digit()
        && b[13] == b':'
        && b[14].is_ascii_digit()
        && b[15].is_ascii_digit()
        && b[16] == b':'
        && b[17].is_ascii_digit()
        && b[18].is_ascii_digit();
    if !time_ok {
        return false;
    }
    match b.len() {
        19 => true,
        len if len > 20 => b[19] == b'.' && b[20..].iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsql_ast::Duration;

    fn expr(input: &str) -> Expr {
        Parser::new(input).parse_expr().unwrap()
    }

    #[test]
    fn precedence_or_below_and() {
        // `a OR b AND c` parses as `a OR (b AND c)`.
        let parsed = expr("true OR false AND true");
        match parsed {
            Expr::Binary {
                op: BinaryOperator::Or,
                right,
                ..
            } => assert!(matches!(
                *right,
                Expr::Binary {
                    op: BinaryOperator::And,
                    ..
                }
            )),
            other => panic!("expected OR at the root, got {:?}", other),
        }
    }

    #[test]
    fn precedence_and_below_comparison() {
        // `a AND b = c` parses as `a AND (b = c)`.
        let parsed = expr("true AND 1 = 2");
        match parsed {
            Expr::Binary {
                op: BinaryOperator::And,
                right,
                ..
            } => assert!(matches!(
                *right,
                Expr::Binary {
                    op: BinaryOperator::Equal,
                    ..
                }
            )),
            other => panic!("expected AND at the root, got {:?}", other),
        }
    }

    #[test]
    fn left_associative_multiplication() {
        // `a * b * c` parses as `(a * b) * c`.
        let parsed = expr("2 * 3 * 4");
        match parsed {
            Expr::Binary {
                op: BinaryOperator::Multiply,
                left,
                right,
            } => {
                assert!(matches!(*right, Expr::Number(n) if n == 4.0));
                assert!(matches!(
                    *left,
                    Expr::Binary {
                        op: BinaryOperator::Multiply,
                        ..
                    }
                ));
            }
            other => panic!("expected * at the root, got {:?}", other),
        }
    }

    #[test]
    fn parenthesized_expr_overrides_precedence() {
        // `(a + b) * c` parses with the addition nested inside a Paren.
        let parsed = expr("(1 + 2) * 3");
        match parsed {
            Expr::Binary {
                op: BinaryOperator::Multiply,
                left,
                ..
            } => assert!(matches!(*left, Expr::Paren(_))),
            other => panic!("expected * at the root, got {:?}", other),
        }
    }

    #[test]
    fn string_literal_stays_a_string_outside_date_shape() {
        assert_eq!(
            expr("'hosta.influxdb.org'"),
            Expr::String("hosta.influxdb.org".into())
        );
    }

    #[test]
    fn date_shaped_string_becomes_time_literal() {
        assert!(matches!(expr("'2021-11-09'"), Expr::Time(_)));
    }

    #[test]
    fn datetime_shaped_string_becomes_time_literal() {
        let parsed = expr("'2000-01-01 00:00:00.232'");
        match parsed {
            Expr::Time(t) => {
                assert_eq!(t.format("%Y-%m-%d %H:%M:%S%.3f").to_string(), "2000-01-01 00:00:00.232");
            }
            other => panic!("expected a time literal, got {:?}", other),
        }
    }

    #[test]
    fn invalid_calendar_date_is_an_error() {
        let err = Parser::new("'2021-13-40'").parse_expr().unwrap_err();
        assert!(err.to_string().starts_with("unable to parse date"));
    }

    #[test]
    fn duration_literal_parses() {
        assert_eq!(expr("10h"), Expr::Duration(Duration::from_micros(36_000_000_000)));
    }

    #[test]
    fn function_call_with_args() {
        let parsed = expr("time(10h)");
        match parsed {
            Expr::Call { name, args } => {
                assert_eq!(name, "time");
                assert_eq!(args, vec![Expr::Duration(Duration::from_micros(36_000_000_000))]);
            }
            other => panic!("expected a call, got {:?}", other),
        }
    }

    #[test]
    fn wildcard_call_with_no_args() {
        let parsed = expr("count()");
        assert_eq!(
            parsed,
            Expr::Call {
                name: "count".into(),
                args: vec![],
            }
        );
    }
}
