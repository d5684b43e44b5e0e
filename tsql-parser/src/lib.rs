//! Recursive-descent parser for QL, the time-series query language.
//!
//! Owns the scanner (via [`tsql_lexer`]) and constructs the AST defined in
//! [`tsql_ast`]. See [`Parser`] for the entry points.
#![deny(missing_docs)]
#![deny(unused_imports)]

mod duration;
mod error;
mod parser;
mod quote;

pub use crate::{
    duration::{format_duration, parse_duration, DurationError},
    error::ParserError,
    parser::Parser,
    quote::{quote_ident, quote_string},
};
