//! Column aliases for generated SQL.
//!
//! An alias is `{prefix}_{column}`. When a driver caps identifier length and
//! the alias is longer than the cap, it is replaced by a hash of exactly the
//! cap's length, so every alias fits while short ones stay readable.
//!
//! ```rust
//! use quarry_driver::{ColumnAlias, DatabaseType, build_column_alias};
//!
//! assert_eq!(build_column_alias(Some(63), "post", "title"), "post_title");
//!
//! let alias = ColumnAlias::for_driver(
//!     &DatabaseType::Oracle,
//!     "category_subcategory_parent",
//!     "created_at",
//! );
//! assert_eq!(alias.as_str().len(), 30);
//! assert!(alias.is_hashed());
//! ```

use std::fmt;

use crate::driver::AliasLimit;
use crate::hash::hash;

/// Build the alias for `column` under `alias_prefix`.
///
/// `max_alias_length` of `None` or `Some(0)` disables shortening. Length is
/// counted in characters.
pub fn build_column_alias(
    max_alias_length: Option<usize>,
    alias_prefix: &str,
    column_name: &str,
) -> String {
    ColumnAlias::new(max_alias_length, alias_prefix, column_name).into_string()
}

/// A generated column alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnAlias {
    alias: String,
    hashed: bool,
}

impl ColumnAlias {
    /// Build an alias under an explicit limit.
    pub fn new(max_alias_length: Option<usize>, alias_prefix: &str, column_name: &str) -> Self {
        let candidate = format!("{}_{}", alias_prefix, column_name);

        match max_alias_length {
            Some(max) if max > 0 && candidate.chars().count() > max => Self {
                alias: hash(&candidate, max),
                hashed: true,
            },
            _ => Self {
                alias: candidate,
                hashed: false,
            },
        }
    }

    /// Build an alias under the limit of `driver`.
    pub fn for_driver<D: AliasLimit + ?Sized>(
        driver: &D,
        alias_prefix: &str,
        column_name: &str,
    ) -> Self {
        Self::new(driver.max_alias_length(), alias_prefix, column_name)
    }

    /// The alias text.
    pub fn as_str(&self) -> &str {
        &self.alias
    }

    /// Whether the alias was replaced by a hash.
    pub fn is_hashed(&self) -> bool {
        self.hashed
    }

    /// Take the alias text.
    pub fn into_string(self) -> String {
        self.alias
    }
}

impl fmt::Display for ColumnAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alias)
    }
}

impl AsRef<str> for ColumnAlias {
    fn as_ref(&self) -> &str {
        &self.alias
    }
}
