pub(crate) mod admin;
pub(crate) mod select;
pub(crate) mod show;

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::{
    admin::{
        AlterRetentionPolicyStatement, CreateContinuousQueryStatement, CreateDatabaseStatement,
        CreateRetentionPolicyStatement, CreateUserStatement, DropContinuousQueryStatement,
        DropDatabaseStatement, DropRetentionPolicyStatement, DropSeriesStatement,
        DropUserStatement, GrantStatement, Privilege, RevokeStatement,
    },
    select::{DeleteStatement, Dimension, Duration, Field, SelectStatement, SortField, Source, Target},
    show::{ShowRetentionPoliciesStatement, ShowStatement, ShowTagValuesStatement},
};
use self::show::fmt_show;

/// The closed set of QL statement variants. Every AST node is
/// immutable once a parse returns it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Statement {
    /// `SELECT ...`
    Select(SelectStatement),
    /// `DELETE ...`
    Delete(DeleteStatement),
    /// `SHOW DATABASES ...`
    ShowDatabases(ShowStatement),
    /// `SHOW SERIES ...`
    ShowSeries(ShowStatement),
    /// `SHOW MEASUREMENTS ...`
    ShowMeasurements(ShowStatement),
    /// `SHOW FIELD KEYS ...`
    ShowFieldKeys(ShowStatement),
    /// `SHOW TAG KEYS ...`
    ShowTagKeys(ShowStatement),
    /// `SHOW TAG VALUES ...`
    ShowTagValues(ShowTagValuesStatement),
    /// `SHOW RETENTION POLICIES ON ...`
    ShowRetentionPolicies(ShowRetentionPoliciesStatement),
    /// `SHOW USERS`
    ShowUsers,
    /// `SHOW CONTINUOUS QUERIES`
    ShowContinuousQueries,
    /// `DROP SERIES FROM ...`
    DropSeries(DropSeriesStatement),
    /// `DROP DATABASE ...`
    DropDatabase(DropDatabaseStatement),
    /// `DROP USER ...`
    DropUser(DropUserStatement),
    /// `DROP CONTINUOUS QUERY ...`
    DropContinuousQuery(DropContinuousQueryStatement),
    /// `DROP RETENTION POLICY ... ON ...`
    DropRetentionPolicy(DropRetentionPolicyStatement),
    /// `CREATE DATABASE ...`
    CreateDatabase(CreateDatabaseStatement),
    /// `CREATE USER ...`
    CreateUser(CreateUserStatement),
    /// `CREATE RETENTION POLICY ...`
    CreateRetentionPolicy(CreateRetentionPolicyStatement),
    /// `ALTER RETENTION POLICY ...`
    AlterRetentionPolicy(AlterRetentionPolicyStatement),
    /// `CREATE CONTINUOUS QUERY ...`
    CreateContinuousQuery(CreateContinuousQueryStatement),
    /// `GRANT ...`
    Grant(GrantStatement),
    /// `REVOKE ...`
    Revoke(RevokeStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(s) => write!(f, "{}", s),
            Statement::Delete(s) => write!(f, "{}", s),
            Statement::ShowDatabases(s) => fmt_show(f, "SHOW DATABASES", s),
            Statement::ShowSeries(s) => fmt_show(f, "SHOW SERIES", s),
            Statement::ShowMeasurements(s) => fmt_show(f, "SHOW MEASUREMENTS", s),
            Statement::ShowFieldKeys(s) => fmt_show(f, "SHOW FIELD KEYS", s),
            Statement::ShowTagKeys(s) => fmt_show(f, "SHOW TAG KEYS", s),
            Statement::ShowTagValues(s) => write!(f, "{}", s),
            Statement::ShowRetentionPolicies(s) => write!(f, "{}", s),
            Statement::ShowUsers => f.write_str("SHOW USERS"),
            Statement::ShowContinuousQueries => f.write_str("SHOW CONTINUOUS QUERIES"),
            Statement::DropSeries(s) => write!(f, "{}", s),
            Statement::DropDatabase(s) => write!(f, "{}", s),
            Statement::DropUser(s) => write!(f, "{}", s),
            Statement::DropContinuousQuery(s) => write!(f, "{}", s),
            Statement::DropRetentionPolicy(s) => write!(f, "{}", s),
            Statement::CreateDatabase(s) => write!(f, "{}", s),
            Statement::CreateUser(s) => write!(f, "{}", s),
            Statement::CreateRetentionPolicy(s) => write!(f, "{}", s),
            Statement::AlterRetentionPolicy(s) => write!(f, "{}", s),
            Statement::CreateContinuousQuery(s) => write!(f, "{}", s),
            Statement::Grant(s) => write!(f, "{}", s),
            Statement::Revoke(s) => write!(f, "{}", s),
        }
    }
}
