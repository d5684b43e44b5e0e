use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::statement::Statement;

/// The result of parsing a `;`-separated sequence of statements
/// (`ParseQuery`, spec §4.2): an ordered list of statements, empty if the
/// input held none.
///
/// Grounded on the teacher's top-level `Vec<Stmt>` collected by its parser
/// loop; named rather than a bare `Vec` because `ParseQuery`'s return type
/// is itself part of the public contract.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    /// The statements, in source order.
    pub statements: Vec<Statement>,
}

impl Query {
    /// An empty query.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
