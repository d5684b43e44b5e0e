//! # tsql
//!
//! tsql is a lexer, recursive-descent parser, and AST for QL, a SQL-flavored
//! query language for time-series databases: data retrieval (`SELECT` with
//! joins/merges, filters, time/tag grouping, ordering, limits/offsets),
//! administrative statements (database/retention-policy/continuous-query/user
//! management), schema introspection (`SHOW ...`), and access control
//! (`GRANT`/`REVOKE`).
//!
//! ```
//! use tsql::parser::Parser;
//!
//! let query = Parser::new("SELECT * FROM cpu WHERE host = 'serverA'")
//!     .parse_query()
//!     .unwrap();
//! assert_eq!(query.statements.len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(unused_imports)]

pub use tsql_ast as ast;
pub use tsql_lexer as lexer;
pub use tsql_parser as parser;

pub use tsql_ast::{Query, Statement};
pub use tsql_parser::{
    format_duration, parse_duration, quote_ident, quote_string, DurationError, Parser, ParserError,
};
