use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    expression::Expr,
    statement::select::{SortField, Source},
    utils::display_comma_separated,
};

/// The shared attribute set of `SHOW DATABASES`/`SHOW SERIES`/
/// `SHOW MEASUREMENTS`/`SHOW FIELD KEYS`/`SHOW TAG KEYS`: an
/// optional source, an optional filter, an ordering, and a limit/offset.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShowStatement {
    /// The `FROM` source, if any.
    pub source: Option<Source>,
    /// The `WHERE` condition, if any.
    pub condition: Option<Expr>,
    /// The `ORDER BY` terms, in source order.
    pub sort_fields: Vec<SortField>,
    /// The `LIMIT`, or 0 if absent.
    pub limit: u64,
    /// The `OFFSET`, or 0 if absent.
    pub offset: u64,
}

impl ShowStatement {
    fn fmt_suffix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, " FROM {}", source)?;
        }
        if let Some(condition) = &self.condition {
            write!(f, " WHERE {}", condition)?;
        }
        if !self.sort_fields.is_empty() {
            f.write_str(" ORDER BY ")?;
            display_comma_separated(f, &self.sort_fields)?;
        }
        if self.limit > 0 {
            write!(f, " LIMIT {}", self.limit)?;
        }
        if self.offset > 0 {
            write!(f, " OFFSET {}", self.offset)?;
        }
        Ok(())
    }
}

/// `SHOW TAG VALUES`: a [`ShowStatement`] plus the `WITH KEY IN (...)` tag
/// key list (spec §3.2; preservation of the keys' source order is not
/// required).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShowTagValuesStatement {
    /// The shared `SHOW ...` attributes.
    pub show: ShowStatement,
    /// The tag keys named in `WITH KEY IN (...)`.
    pub tag_keys: Vec<String>,
}

impl fmt::Display for ShowTagValuesStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SHOW TAG VALUES")?;
        if !self.tag_keys.is_empty() {
            f.write_str(" WITH KEY IN (")?;
            display_comma_separated(f, &self.tag_keys)?;
            f.write_str(")")?;
        }
        self.show.fmt_suffix(f)
    }
}

/// `SHOW RETENTION POLICIES ON <database>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShowRetentionPoliciesStatement {
    /// The database named by `ON`.
    pub database: String,
}

impl fmt::Display for ShowRetentionPoliciesStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHOW RETENTION POLICIES ON {}", self.database)
    }
}

pub(crate) fn fmt_show(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    show: &ShowStatement,
) -> fmt::Result {
    f.write_str(keyword)?;
    show.fmt_suffix(f)
}
