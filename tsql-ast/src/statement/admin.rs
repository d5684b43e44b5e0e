use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{expression::Duration, statement::select::SelectStatement};

/// `CREATE DATABASE <name>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateDatabaseStatement {
    /// The database name.
    pub name: String,
}

impl fmt::Display for CreateDatabaseStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE DATABASE {}", self.name)
    }
}

/// `DROP DATABASE <name>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropDatabaseStatement {
    /// The database name.
    pub name: String,
}

impl fmt::Display for DropDatabaseStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP DATABASE {}", self.name)
    }
}

/// `DROP SERIES FROM <name>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropSeriesStatement {
    /// The series/measurement name.
    pub name: String,
}

impl fmt::Display for DropSeriesStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP SERIES FROM {}", self.name)
    }
}

/// `DROP CONTINUOUS QUERY <name>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropContinuousQueryStatement {
    /// The continuous query's name.
    pub name: String,
}

impl fmt::Display for DropContinuousQueryStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP CONTINUOUS QUERY {}", self.name)
    }
}

/// `DROP USER <name>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropUserStatement {
    /// The user's name.
    pub name: String,
}

impl fmt::Display for DropUserStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP USER {}", self.name)
    }
}

/// `DROP RETENTION POLICY <name> ON <database>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DropRetentionPolicyStatement {
    /// The policy's name.
    pub name: String,
    /// The database it belongs to.
    pub database: String,
}

impl fmt::Display for DropRetentionPolicyStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DROP RETENTION POLICY {} ON {}", self.name, self.database)
    }
}

/// `CREATE USER <name> WITH PASSWORD '...' [WITH <privilege>]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateUserStatement {
    /// The user's name.
    pub name: String,
    /// The password text, as scanned from the single-quoted string literal.
    pub password: String,
    /// The granted privilege, if any.
    pub privilege: Option<Privilege>,
}

impl fmt::Display for CreateUserStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE USER {} WITH PASSWORD [REDACTED]", self.name)?;
        if let Some(privilege) = &self.privilege {
            write!(f, " WITH {}", privilege)?;
        }
        Ok(())
    }
}

/// `CREATE RETENTION POLICY <name> ON <database> DURATION <d> REPLICATION <n> [DEFAULT]`
///.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateRetentionPolicyStatement {
    /// The policy's name.
    pub name: String,
    /// The database it applies to.
    pub database: String,
    /// The retention duration.
    pub duration: Duration,
    /// The replication factor.
    pub replication: i64,
    /// Whether this policy becomes the database's default.
    pub default: bool,
}

impl fmt::Display for CreateRetentionPolicyStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE RETENTION POLICY {} ON {} DURATION {} REPLICATION {}",
            self.name, self.database, self.duration, self.replication
        )?;
        if self.default {
            f.write_str(" DEFAULT")?;
        }
        Ok(())
    }
}

/// `ALTER RETENTION POLICY <name> ON <database> <options...>` (spec §3.2,
/// §4.2.2): at least one of `DURATION`/`REPLICATION`/`DEFAULT`, each at most
/// once, in any order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlterRetentionPolicyStatement {
    /// The policy's name.
    pub name: String,
    /// The database it applies to.
    pub database: String,
    /// The new duration, if given.
    pub duration: Option<Duration>,
    /// The new replication factor, if given.
    pub replication: Option<i64>,
    /// Whether `DEFAULT` was given.
    pub default: bool,
}

impl fmt::Display for AlterRetentionPolicyStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER RETENTION POLICY {} ON {}", self.name, self.database)?;
        if let Some(duration) = &self.duration {
            write!(f, " DURATION {}", duration)?;
        }
        if let Some(replication) = &self.replication {
            write!(f, " REPLICATION {}", replication)?;
        }
        if self.default {
            f.write_str(" DEFAULT")?;
        }
        Ok(())
    }
}

/// `CREATE CONTINUOUS QUERY <name> ON <database> BEGIN <select> END`
///: always wraps a [`SelectStatement`] whose `target` is set
///.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateContinuousQueryStatement {
    /// The continuous query's name.
    pub name: String,
    /// The database it runs against.
    pub database: String,
    /// The wrapped `SELECT ... INTO ...` statement.
    pub select: SelectStatement,
}

impl fmt::Display for CreateContinuousQueryStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREATE CONTINUOUS QUERY {} ON {} BEGIN {} END",
            self.name, self.database, self.select
        )
    }
}

/// A scoped privilege level: `READ`, `WRITE`, or `ALL`
/// (`ALL PRIVILEGES` also parses to `All`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Privilege {
    /// `READ`
    Read,
    /// `WRITE`
    Write,
    /// `ALL` / `ALL PRIVILEGES`
    All,
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Privilege::Read => "READ",
            Privilege::Write => "WRITE",
            Privilege::All => "ALL PRIVILEGES",
        })
    }
}

/// `GRANT <privilege> [ON <database>] TO <user>`. An
/// absent `ON` clause denotes a cluster-wide privilege.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrantStatement {
    /// The granted privilege.
    pub privilege: Privilege,
    /// The database it's scoped to, or `None` for cluster-wide.
    pub on: Option<String>,
    /// The grantee.
    pub user: String,
}

impl fmt::Display for GrantStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GRANT {}", self.privilege)?;
        if let Some(on) = &self.on {
            write!(f, " ON {}", on)?;
        }
        write!(f, " TO {}", self.user)
    }
}

/// `REVOKE <privilege> [ON <database>] FROM <user>`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RevokeStatement {
    /// The revoked privilege.
    pub privilege: Privilege,
    /// The database it's scoped to, or `None` for cluster-wide.
    pub on: Option<String>,
    /// Whose privilege is being revoked.
    pub user: String,
}

impl fmt::Display for RevokeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "REVOKE {}", self.privilege)?;
        if let Some(on) = &self.on {
            write!(f, " ON {}", on)?;
        }
        write!(f, " FROM {}", self.user)
    }
}
