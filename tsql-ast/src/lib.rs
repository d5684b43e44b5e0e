//! # tsql-ast
//!
//! tsql-ast is the closed abstract-syntax-tree type catalog for the `tsql`
//! time-series query language: a typed tree of statements and expressions
//! that external collaborators (query planners, storage engines, the
//! database catalog) consume as the parser's sole output contract.
//!
//! This crate carries no parsing logic of its own; `tsql-parser` builds these
//! types, `tsql-lexer` never sees them.

#![deny(missing_docs)]
#![deny(unused_imports)]

mod expression;
mod query;
mod statement;
mod utils;

pub use self::{
    expression::{BinaryOperator, Expr},
    query::Query,
    statement::{
        AlterRetentionPolicyStatement, CreateContinuousQueryStatement, CreateDatabaseStatement,
        CreateRetentionPolicyStatement, CreateUserStatement, DeleteStatement, Dimension,
        DropContinuousQueryStatement, DropDatabaseStatement, DropRetentionPolicyStatement,
        DropSeriesStatement, DropUserStatement, Duration, Field, GrantStatement, Privilege,
        RevokeStatement, SelectStatement, ShowRetentionPoliciesStatement, ShowStatement,
        ShowTagValuesStatement, SortField, Source, Statement, Target,
    },
};
