//! `quarry alias` command - Print the alias generated for a column.

use quarry_driver::{AliasLimit, ColumnAlias};
use tracing::debug;

use crate::cli::AliasArgs;
use crate::error::CliResult;

/// Run the alias command
pub async fn run(args: AliasArgs) -> CliResult<()> {
    let limit = match (args.max_length, args.driver) {
        (Some(max), _) => Some(max),
        (None, Some(driver)) => driver.max_alias_length(),
        (None, None) => None,
    };

    let alias = ColumnAlias::new(limit, &args.prefix, &args.column);
    debug!(limit = ?limit, hashed = alias.is_hashed(), "Alias generated");

    println!("{}", alias);
    Ok(())
}
