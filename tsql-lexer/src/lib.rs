//! # tsql-lexer
//!
//! tsql-lexer is the scanner and token model for the `tsql` time-series
//! query language: it converts a string into a sequence of positioned tokens.

#![deny(missing_docs)]
#![deny(unused_imports)]

mod error;
mod keyword;
mod lexer;
mod token;

pub use self::{
    error::LexerError,
    keyword::Keyword,
    lexer::Lexer,
    token::{Position, Token},
};
