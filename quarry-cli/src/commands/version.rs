//! `quarry version` command - Display version information.

use quarry_driver::{AliasLimit, DatabaseType};

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::header("Quarry");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    output::newline();

    output::section("Drivers");
    for driver in DatabaseType::ALL {
        let limit = driver
            .max_alias_length()
            .map_or_else(|| "no alias limit".to_string(), |n| format!("aliases up to {}", n));
        kv(driver.name(), &limit);
    }

    output::newline();
    output::dim("Set QUARRY_DEBUG=1 to enable debug logging");

    Ok(())
}
