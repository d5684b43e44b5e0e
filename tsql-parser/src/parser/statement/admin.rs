use tsql_ast::{
    AlterRetentionPolicyStatement, CreateContinuousQueryStatement, CreateDatabaseStatement,
    CreateRetentionPolicyStatement, CreateUserStatement, DropContinuousQueryStatement,
    DropDatabaseStatement, DropRetentionPolicyStatement, DropSeriesStatement, DropUserStatement,
    GrantStatement, Privilege, RevokeStatement, Statement,
};
use tsql_lexer::{Keyword, Token};

use crate::{duration::parse_duration, error::ParserError, parser::Parser};

impl<'a> Parser<'a> {
    /// `DROP ...`, dispatching on the second keyword.
    pub(crate) fn parse_drop(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::DROP)?;
        let (_, keyword) = self.expect_one_of_keywords(&[
            Keyword::SERIES,
            Keyword::CONTINUOUS,
            Keyword::DATABASE,
            Keyword::RETENTION,
            Keyword::USER,
        ])?;
        match keyword {
            Keyword::SERIES => {
                self.expect_keyword(Keyword::FROM)?;
                let name = self.parse_dotted_identifier()?;
                Ok(Statement::DropSeries(DropSeriesStatement { name }))
            }
            Keyword::CONTINUOUS => {
                self.expect_keyword(Keyword::QUERY)?;
                let name = self.parse_identifier()?;
                Ok(Statement::DropContinuousQuery(
                    DropContinuousQueryStatement { name },
                ))
            }
            Keyword::DATABASE => {
                let name = self.parse_identifier()?;
                Ok(Statement::DropDatabase(DropDatabaseStatement { name }))
            }
            Keyword::RETENTION => {
                self.expect_keyword(Keyword::POLICY)?;
                let name = self.parse_identifier()?;
                self.expect_keyword(Keyword::ON)?;
                let database = self.parse_identifier()?;
                Ok(Statement::DropRetentionPolicy(DropRetentionPolicyStatement {
                    name,
                    database,
                }))
            }
            Keyword::USER => {
                let name = self.parse_identifier()?;
                Ok(Statement::DropUser(DropUserStatement { name }))
            }
            _ => unreachable!("expect_one_of_keywords only returns the keywords it was given"),
        }
    }

    /// `CREATE ...`, dispatching on the second keyword.
    pub(crate) fn parse_create(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::CREATE)?;
        let (_, keyword) = self.expect_one_of_keywords(&[
            Keyword::CONTINUOUS,
            Keyword::DATABASE,
            Keyword::USER,
            Keyword::RETENTION,
        ])?;
        match keyword {
            Keyword::CONTINUOUS => {
                self.expect_keyword(Keyword::QUERY)?;
                let name = self.parse_identifier()?;
                self.expect_keyword(Keyword::ON)?;
                let database = self.parse_identifier()?;
                self.expect_keyword(Keyword::BEGIN)?;
                let select = self.parse_select()?;
                self.expect_keyword(Keyword::END)?;
                Ok(Statement::CreateContinuousQuery(
                    CreateContinuousQueryStatement {
                        name,
                        database,
                        select,
                    },
                ))
            }
            Keyword::DATABASE => {
                let name = self.parse_identifier()?;
                Ok(Statement::CreateDatabase(CreateDatabaseStatement { name }))
            }
            Keyword::USER => {
                let name = self.parse_identifier()?;
                self.expect_keyword(Keyword::WITH)?;
                self.expect_keyword(Keyword::PASSWORD)?;
                let password = self.parse_string_literal()?;
                let privilege = if self.parse_keyword(Keyword::WITH)? {
                    Some(self.parse_privilege()?)
                } else {
                    None
                };
                Ok(Statement::CreateUser(CreateUserStatement {
                    name,
                    password,
                    privilege,
                }))
            }
            Keyword::RETENTION => {
                self.expect_keyword(Keyword::POLICY)?;
                let name = self.parse_identifier()?;
                self.expect_keyword(Keyword::ON)?;
                let database = self.parse_identifier()?;
                self.expect_keyword(Keyword::DURATION)?;
                let duration = parse_duration(&self.parse_duration_text()?)?;
                self.expect_keyword(Keyword::REPLICATION)?;
                let replication = self.parse_replication_factor()?;
                let default = self.parse_keyword(Keyword::DEFAULT)?;
                Ok(Statement::CreateRetentionPolicy(
                    CreateRetentionPolicyStatement {
                        name,
                        database,
                        duration,
                        replication,
                        default,
                    },
                ))
            }
            _ => unreachable!("expect_one_of_keywords only returns the keywords it was given"),
        }
    }

    /// `ALTER RETENTION POLICY <name> ON <db> <options...>` with
    /// order-independent, at-most-once `DURATION`/`REPLICATION`/`DEFAULT`
    /// options.
    pub(crate) fn parse_alter_retention_policy(
        &mut self,
    ) -> Result<AlterRetentionPolicyStatement, ParserError> {
        self.expect_keyword(Keyword::ALTER)?;
        self.expect_keyword(Keyword::RETENTION)?;
        self.expect_keyword(Keyword::POLICY)?;
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::ON)?;
        let database = self.parse_identifier()?;

        const OPTIONS: &[Keyword] = &[Keyword::DURATION, Keyword::REPLICATION, Keyword::DEFAULT];
        let mut duration = None;
        let mut replication = None;
        let mut default = false;

        let (_, first) = self.expect_one_of_keywords(OPTIONS)?;
        self.apply_alter_option(first, &mut duration, &mut replication, &mut default)?;
        while let Some((_, keyword)) = self.parse_one_of_keywords(OPTIONS)? {
            self.apply_alter_option(keyword, &mut duration, &mut replication, &mut default)?;
        }
        Ok(AlterRetentionPolicyStatement {
            name,
            database,
            duration,
            replication,
            default,
        })
    }

    /// Applies one `DURATION`/`REPLICATION`/`DEFAULT` option; a repeated
    /// option simply overwrites the prior value, matching the greedy,
    /// order-independent consumption rule.
    fn apply_alter_option(
        &mut self,
        keyword: Keyword,
        duration: &mut Option<tsql_ast::Duration>,
        replication: &mut Option<i64>,
        default: &mut bool,
    ) -> Result<(), ParserError> {
        match keyword {
            Keyword::DURATION => {
                *duration = Some(parse_duration(&self.parse_duration_text()?)?);
            }
            Keyword::REPLICATION => {
                *replication = Some(self.parse_replication_factor()?);
            }
            Keyword::DEFAULT => {
                *default = true;
            }
            _ => unreachable!("only DURATION/REPLICATION/DEFAULT are passed in"),
        }
        Ok(())
    }

    /// `GRANT <privilege> [ON <db>] TO <user>`.
    pub(crate) fn parse_grant(&mut self) -> Result<GrantStatement, ParserError> {
        self.expect_keyword(Keyword::GRANT)?;
        let privilege = self.parse_privilege()?;
        let on = self.parse_optional_on()?;
        self.expect_keyword(Keyword::TO)?;
        let user = self.parse_identifier()?;
        Ok(GrantStatement { privilege, on, user })
    }

    /// `REVOKE <privilege> [ON <db>] FROM <user>`.
    pub(crate) fn parse_revoke(&mut self) -> Result<RevokeStatement, ParserError> {
        self.expect_keyword(Keyword::REVOKE)?;
        let privilege = self.parse_privilege()?;
        let on = self.parse_optional_on()?;
        self.expect_keyword(Keyword::FROM)?;
        let user = self.parse_identifier()?;
        Ok(RevokeStatement { privilege, on, user })
    }

    fn parse_optional_on(&mut self) -> Result<Option<String>, ParserError> {
        if self.parse_keyword(Keyword::ON)? {
            Ok(Some(self.parse_identifier()?))
        } else {
            Ok(None)
        }
    }

    /// `READ`, `WRITE`, `ALL`, or `ALL PRIVILEGES`.
    fn parse_privilege(&mut self) -> Result<Privilege, ParserError> {
        let (_, keyword) =
            self.expect_one_of_keywords(&[Keyword::READ, Keyword::WRITE, Keyword::ALL])?;
        match keyword {
            Keyword::READ => Ok(Privilege::Read),
            Keyword::WRITE => Ok(Privilege::Write),
            Keyword::ALL => {
                self.parse_keyword(Keyword::PRIVILEGES)?;
                Ok(Privilege::All)
            }
            _ => unreachable!("expect_one_of_keywords only returns the keywords it was given"),
        }
    }

    fn parse_string_literal(&mut self) -> Result<String, ParserError> {
        let (position, token) = self.next()?;
        match token {
            Token::String(s) => Ok(s),
            other => Err(ParserError::expected(position, &["string"], &other)),
        }
    }

    fn parse_duration_text(&mut self) -> Result<String, ParserError> {
        let (position, token) = self.next()?;
        match token {
            Token::Duration(text) => Ok(text),
            Token::Number(text) => Ok(text),
            other => Err(ParserError::expected(position, &["duration"], &other)),
        }
    }

    /// A replication factor: a plain integer in `1..=2147483647`.
    fn parse_replication_factor(&mut self) -> Result<i64, ParserError> {
        let (position, value) = self.parse_integer()?;
        if (1..=2_147_483_647).contains(&value) {
            Ok(value)
        } else {
            Err(ParserError::invalid_replication_factor(position, value))
        }
    }
}
