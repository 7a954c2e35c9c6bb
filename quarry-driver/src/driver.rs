//! Database driver kinds and the limits they impose on generated SQL.

use std::fmt;
use std::str::FromStr;

/// Anything that knows the longest alias its database accepts.
///
/// `None` or `Some(0)` means aliases are never shortened.
///
/// The limit is compared against the alias length in `char`s. PostgreSQL
/// and Oracle count identifier length in bytes, so an alias with multibyte
/// characters can fit the limit here and still be truncated by the server.
/// Hashed aliases are always ASCII and are not affected.
pub trait AliasLimit {
    /// Maximum alias length in characters.
    fn max_alias_length(&self) -> Option<usize>;
}

impl AliasLimit for Option<usize> {
    fn max_alias_length(&self) -> Option<usize> {
        *self
    }
}

impl AliasLimit for usize {
    fn max_alias_length(&self) -> Option<usize> {
        Some(*self)
    }
}

/// Supported database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseType {
    /// PostgreSQL
    Postgres,
    /// CockroachDB
    CockroachDb,
    /// MySQL
    MySql,
    /// MariaDB
    MariaDb,
    /// Oracle
    Oracle,
    /// Microsoft SQL Server
    MsSql,
    /// SQLite
    Sqlite,
    /// SAP HANA
    Sap,
}

impl DatabaseType {
    /// Every known driver kind.
    pub const ALL: [DatabaseType; 8] = [
        Self::Postgres,
        Self::CockroachDb,
        Self::MySql,
        Self::MariaDb,
        Self::Oracle,
        Self::MsSql,
        Self::Sqlite,
        Self::Sap,
    ];

    /// Resolve a driver from a `type` option or URL scheme.
    ///
    /// ```rust
    /// use quarry_driver::DatabaseType;
    ///
    /// assert_eq!(DatabaseType::from_type("pg"), Some(DatabaseType::Postgres));
    /// assert_eq!(DatabaseType::from_type("PostgreSQL"), Some(DatabaseType::Postgres));
    /// assert_eq!(DatabaseType::from_type("oracle"), Some(DatabaseType::Oracle));
    /// assert_eq!(DatabaseType::from_type("redis"), None);
    /// ```
    pub fn from_type(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            "cockroachdb" | "cockroach" => Some(Self::CockroachDb),
            "mysql" => Some(Self::MySql),
            "mariadb" => Some(Self::MariaDb),
            "oracle" => Some(Self::Oracle),
            "mssql" | "sqlserver" => Some(Self::MsSql),
            "sqlite" | "sqlite3" => Some(Self::Sqlite),
            "sap" | "hana" => Some(Self::Sap),
            _ => None,
        }
    }

    /// Get the driver name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::CockroachDb => "cockroachdb",
            Self::MySql => "mysql",
            Self::MariaDb => "mariadb",
            Self::Oracle => "oracle",
            Self::MsSql => "mssql",
            Self::Sqlite => "sqlite",
            Self::Sap => "sap",
        }
    }

    /// Get the default port for this driver.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            Self::Postgres => Some(5432),
            Self::CockroachDb => Some(26257),
            Self::MySql | Self::MariaDb => Some(3306),
            Self::Oracle => Some(1521),
            Self::MsSql => Some(1433),
            Self::Sqlite => None,
            Self::Sap => Some(30015),
        }
    }

    /// Whether the database segment of the URL names an Oracle SID.
    pub fn uses_sid(&self) -> bool {
        matches!(self, Self::Oracle)
    }
}

impl AliasLimit for DatabaseType {
    fn max_alias_length(&self) -> Option<usize> {
        match self {
            Self::Postgres | Self::CockroachDb | Self::MySql | Self::MariaDb => Some(63),
            Self::Oracle => Some(30),
            Self::Sap => Some(128),
            Self::MsSql | Self::Sqlite => None,
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DatabaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type(s).ok_or_else(|| format!("unknown database type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for ty in DatabaseType::ALL {
            assert_eq!(DatabaseType::from_type(ty.name()), Some(ty));
            assert_eq!(ty.to_string().parse::<DatabaseType>(), Ok(ty));
        }
    }

    #[test]
    fn test_alias_limits() {
        assert_eq!(DatabaseType::Postgres.max_alias_length(), Some(63));
        assert_eq!(DatabaseType::Oracle.max_alias_length(), Some(30));
        assert_eq!(DatabaseType::Sap.max_alias_length(), Some(128));
        assert_eq!(DatabaseType::Sqlite.max_alias_length(), None);
    }

    #[test]
    fn test_only_oracle_uses_sid() {
        let sid: Vec<_> = DatabaseType::ALL.iter().filter(|t| t.uses_sid()).collect();
        assert_eq!(sid, vec![&DatabaseType::Oracle]);
    }

    #[test]
    fn test_unknown_type() {
        assert!("couchdb".parse::<DatabaseType>().is_err());
    }

    #[test]
    fn test_plain_limits() {
        assert_eq!(Some(10usize).max_alias_length(), Some(10));
        assert_eq!(None::<usize>.max_alias_length(), None);
        assert_eq!(0usize.max_alias_length(), Some(0));
    }
}
