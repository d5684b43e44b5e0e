use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::expression::Duration;
use crate::{expression::Expr, utils::display_comma_separated};

/// A `SELECT` statement: the full field/source/target/
/// filter/group/sort/limit pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectStatement {
    /// The selected fields, in source order.
    pub fields: Vec<Field>,
    /// The `FROM` source.
    pub source: Source,
    /// The `INTO` target, if any.
    pub target: Option<Target>,
    /// The `WHERE` condition, if any.
    pub condition: Option<Expr>,
    /// The `GROUP BY` terms, in source order.
    pub dimensions: Vec<Dimension>,
    /// The `ORDER BY` terms, in source order.
    pub sort_fields: Vec<SortField>,
    /// The `LIMIT`, or 0 if absent.
    pub limit: u64,
    /// The `OFFSET`, or 0 if absent.
    pub offset: u64,
}

impl SelectStatement {
    /// The `GROUP BY time(...)` bucket width, if the dimensions contain one,
    /// computed on demand rather than cached (spec §9's "legacy coupling"
    /// design note: the teacher memoizes this on the embedded
    /// `SelectStatement` during CQ parsing; this recomputes it as a pure
    /// query over [`Self::dimensions`] instead).
    pub fn group_by_interval(&self) -> Option<Duration> {
        self.dimensions.iter().find_map(|d| match &d.expr {
            Expr::Duration(duration) => Some(*duration),
            Expr::Call { name, args } if name.eq_ignore_ascii_case("time") => {
                args.first().and_then(|arg| match arg {
                    Expr::Duration(duration) => Some(*duration),
                    _ => None,
                })
            }
            _ => None,
        })
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        display_comma_separated(f, &self.fields)?;
        write!(f, " FROM {}", self.source)?;
        if let Some(target) = &self.target {
            write!(f, " INTO {}", target)?;
        }
        if let Some(condition) = &self.condition {
            write!(f, " WHERE {}", condition)?;
        }
        if !self.dimensions.is_empty() {
            f.write_str(" GROUP BY ")?;
            display_comma_separated(f, &self.dimensions)?;
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

/// A `DELETE` statement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeleteStatement {
    /// The source to delete from.
    pub source: Source,
    /// The `WHERE` condition, if any.
    pub condition: Option<Expr>,
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.source)?;
        if let Some(condition) = &self.condition {
            write!(f, " WHERE {}", condition)?;
        }
        Ok(())
    }
}

/// One selected field: an expression plus an optional `AS` alias.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    /// The selected expression (possibly [`Expr::Wildcard`]).
    pub expr: Expr,
    /// The `AS` alias, if any.
    pub alias: Option<String>,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {}", alias)?;
        }
        Ok(())
    }
}

/// One `GROUP BY` term: a duration literal, a `time(duration)` call, or a
/// bare identifier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    /// The dimension expression.
    pub expr: Expr,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// One `ORDER BY` term: an optional column name (absent ⇒ the
/// implicit default sort key) plus direction (default ascending).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortField {
    /// The sort column, or `None` for the implicit default sort key.
    pub name: Option<String>,
    /// `true` for `ASC` (the default), `false` for `DESC`.
    pub ascending: bool,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{} ", name)?;
        }
        f.write_str(if self.ascending { "ASC" } else { "DESC" })
    }
}

/// A `FROM`/source clause: one measurement, or a `join(...)`/
/// `merge(...)` pseudo-function over several.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Source {
    /// A single measurement, named by its (possibly quoted) identifier text.
    Measurement(String),
    /// `join(m1, m2, ...)`.
    Join(Vec<String>),
    /// `merge(m1, m2, ...)`.
    Merge(Vec<String>),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Measurement(name) => f.write_str(name),
            Source::Join(names) => {
                f.write_str("join(")?;
                display_comma_separated(f, names)?;
                f.write_str(")")
            }
            Source::Merge(names) => {
                f.write_str("merge(")?;
                display_comma_separated(f, names)?;
                f.write_str(")")
            }
        }
    }
}

/// An `INTO` target: a measurement destination, preserved as a single
/// (possibly dotted/quoted multi-segment) string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target(pub String);

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(dimensions: Vec<Dimension>) -> SelectStatement {
        SelectStatement {
            fields: vec![Field {
                expr: Expr::Wildcard,
                alias: None,
            }],
            source: Source::Measurement("cpu".into()),
            target: None,
            condition: None,
            dimensions,
            sort_fields: vec![],
            limit: 0,
            offset: 0,
        }
    }

    #[test]
    fn group_by_interval_reads_bare_duration() {
        let stmt = select(vec![Dimension {
            expr: Expr::Duration(Duration::from_micros(36_000_000_000)),
        }]);
        assert_eq!(
            stmt.group_by_interval(),
            Some(Duration::from_micros(36_000_000_000))
        );
    }

    #[test]
    fn group_by_interval_reads_time_call() {
        let stmt = select(vec![Dimension {
            expr: Expr::Call {
                name: "time".into(),
                args: vec![Expr::Duration(Duration::from_micros(600_000_000))],
            },
        }]);
        assert_eq!(
            stmt.group_by_interval(),
            Some(Duration::from_micros(600_000_000))
        );
    }

    #[test]
    fn group_by_interval_absent_without_time_dimension() {
        let stmt = select(vec![Dimension {
            expr: Expr::VarRef("host".into()),
        }]);
        assert_eq!(stmt.group_by_interval(), None);
    }
}
