use tsql_ast::{ShowRetentionPoliciesStatement, ShowStatement, ShowTagValuesStatement, Statement};
use tsql_lexer::{Keyword, Token};

use crate::{error::ParserError, parser::Parser};

impl<'a> Parser<'a> {
    /// `SHOW ...`, dispatching on the second keyword.
    pub(crate) fn parse_show(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::SHOW)?;
        let (_, keyword) = self.expect_one_of_keywords(&[
            Keyword::CONTINUOUS,
            Keyword::DATABASES,
            Keyword::FIELD,
            Keyword::MEASUREMENTS,
            Keyword::RETENTION,
            Keyword::SERIES,
            Keyword::TAG,
            Keyword::USERS,
        ])?;
        match keyword {
            Keyword::DATABASES => Ok(Statement::ShowDatabases(self.parse_show_attrs()?)),
            Keyword::SERIES => Ok(Statement::ShowSeries(self.parse_show_attrs()?)),
            Keyword::MEASUREMENTS => Ok(Statement::ShowMeasurements(self.parse_show_attrs()?)),
            Keyword::FIELD => {
                self.expect_keyword(Keyword::KEYS)?;
                Ok(Statement::ShowFieldKeys(self.parse_show_attrs()?))
            }
            Keyword::TAG => {
                let (_, tag_keyword) =
                    self.expect_one_of_keywords(&[Keyword::KEYS, Keyword::VALUES])?;
                match tag_keyword {
                    Keyword::KEYS => Ok(Statement::ShowTagKeys(self.parse_show_attrs()?)),
                    _ => Ok(Statement::ShowTagValues(self.parse_show_tag_values()?)),
                }
            }
            Keyword::RETENTION => {
                self.expect_keyword(Keyword::POLICIES)?;
                self.expect_keyword(Keyword::ON)?;
                let database = self.parse_identifier()?;
                Ok(Statement::ShowRetentionPolicies(
                    ShowRetentionPoliciesStatement { database },
                ))
            }
            Keyword::USERS => Ok(Statement::ShowUsers),
            Keyword::CONTINUOUS => {
                self.expect_keyword(Keyword::QUERIES)?;
                Ok(Statement::ShowContinuousQueries)
            }
            _ => unreachable!("expect_one_of_keywords only returns the keywords it was given"),
        }
    }

    fn parse_show_tag_values(&mut self) -> Result<ShowTagValuesStatement, ParserError> {
        let tag_keys = if self.parse_keyword(Keyword::WITH)? {
            self.expect_keyword(Keyword::KEY)?;
            self.expect_keyword(Keyword::IN)?;
            self.expect_token(&Token::LeftParen, "(")?;
            let keys = self.parse_comma_separated(Parser::parse_identifier)?;
            self.expect_token(&Token::RightParen, ")")?;
            keys
        } else {
            Vec::new()
        };
        Ok(ShowTagValuesStatement {
            show: self.parse_show_attrs()?,
            tag_keys,
        })
    }

    /// The attributes shared by all introspection statements: an optional
    /// `FROM`, `WHERE`, `ORDER BY`, `LIMIT`, `OFFSET`.
    fn parse_show_attrs(&mut self) -> Result<ShowStatement, ParserError> {
        let source = if self.parse_keyword(Keyword::FROM)? {
            Some(self.parse_source()?)
        } else {
            None
        };
        let condition = if self.parse_keyword(Keyword::WHERE)? {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let sort_fields = self.parse_optional_order_by()?;
        let limit = self.parse_optional_limit()?;
        let offset = self.parse_optional_offset()?;
        Ok(ShowStatement {
            source,
            condition,
            sort_fields,
            limit,
            offset,
        })
    }
}
