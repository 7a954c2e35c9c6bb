//! `quarry url` command - Show how a connection URL is split.

use quarry_driver::{AliasLimit, parse_connection_url};

use crate::cli::UrlArgs;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the url command
pub async fn run(args: UrlArgs) -> CliResult<()> {
    let parsed = parse_connection_url(&args.url)?;
    let shown = if args.show_password {
        parsed
    } else {
        parsed.redacted()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    output::header("Connection URL");
    kv("Scheme", &shown.scheme);
    kv("Host", &shown.host);
    kv("Port", &shown.port.map_or_else(|| "-".to_string(), |p| p.to_string()));
    kv("Username", &shown.username);
    kv("Password", shown.password.as_deref().unwrap_or("-"));
    kv("Database", shown.database.as_deref().unwrap_or("-"));

    match shown.database_type() {
        Some(driver) => {
            kv("Driver", driver.name());
            kv(
                "Alias limit",
                &driver
                    .max_alias_length()
                    .map_or_else(|| "none".to_string(), |n| n.to_string()),
            );
        }
        None => kv("Driver", "unknown"),
    }
    output::newline();

    Ok(())
}
