use core::fmt;

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{display_comma_separated, escape_single_quoted};

/// A microsecond-resolution span, the unit `ParseDuration`/`FormatDuration`
/// (in `tsql-parser`) operate on; absence of a unit suffix in the source
/// text means microseconds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Duration {
    /// The span, in microseconds.
    pub micros: i64,
}

impl Duration {
    /// Constructs a duration from a microsecond count.
    pub const fn from_micros(micros: i64) -> Self {
        Self { micros }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}u", self.micros)
    }
}

/// QL's expression sum type: literals, identifiers, function calls, and
/// binary operator applications, per spec §3.3.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A 64-bit floating point numeric literal.
    Number(f64),
    /// A single-quoted string literal that was not reinterpreted as a
    /// [`Expr::Time`] by the expression parser.
    String(String),
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// A string literal reinterpreted as an absolute UTC instant because it
    /// matched one of the date/datetime formats in spec §6.3.
    Time(DateTime<Utc>),
    /// A duration literal, e.g. `10h`.
    Duration(Duration),
    /// A variable reference: a bare or quoted identifier. The literal text
    /// includes surrounding double quotes when the source used them (spec
    /// §3.5's quoted-identifier preservation invariant).
    VarRef(String),
    /// The unqualified wildcard `*`.
    Wildcard,
    /// A function call, e.g. `time(10h)` or `mean(value)`.
    Call {
        /// The called function's name.
        name: String,
        /// The ordered argument expressions.
        args: Vec<Expr>,
    },
    /// A binary operator application. Trees of equal-precedence operators
    /// are left-associative.
    Binary {
        /// The operator.
        op: BinaryOperator,
        /// The left operand.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
    /// A parenthesized expression, preserved (rather than discarded) so
    /// formatting can round-trip the original grouping.
    Paren(Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::String(s) => write!(f, "'{}'", escape_single_quoted(s)),
            Expr::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Expr::Time(t) => write!(f, "'{}'", t.format("%Y-%m-%d %H:%M:%S%.f")),
            Expr::Duration(d) => write!(f, "{}", d),
            Expr::VarRef(name) => f.write_str(name),
            Expr::Wildcard => f.write_str("*"),
            Expr::Call { name, args } => {
                write!(f, "{}(", name)?;
                display_comma_separated(f, args)?;
                f.write_str(")")
            }
            Expr::Binary { op, left, right } => write!(f, "{} {} {}", left, op, right),
            Expr::Paren(inner) => write!(f, "({})", inner),
        }
    }
}

/// Arithmetic, comparison, and boolean binary operators, per spec §4.3's
/// precedence table (lowest to highest: `OR`, `AND`, comparisons, additive,
/// multiplicative).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_expr_displays_infix() {
        let expr = Expr::Binary {
            op: BinaryOperator::Equal,
            left: Box::new(Expr::VarRef("host".into())),
            right: Box::new(Expr::String("hosta.influxdb.org".into())),
        };
        assert_eq!(expr.to_string(), "host = 'hosta.influxdb.org'");
    }

    #[test]
    fn string_literal_escapes_on_display() {
        let expr = Expr::String("it's".into());
        assert_eq!(expr.to_string(), "'it\\'s'");
    }
}
