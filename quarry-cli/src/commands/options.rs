//! `quarry options` command - Build normalized driver options.

use std::path::{Path, PathBuf};

use quarry_driver::config::CONFIG_FILE_NAME;
use quarry_driver::connection::URL_KEY;
use quarry_driver::{
    ConfigError, DriverOptions, OptionValue, QuarryConfig, logging, parse_connection_url,
};
use tracing::debug;

use crate::cli::OptionsArgs;
use crate::error::{CliError, CliResult};
use crate::output::{self, kv};

/// Run the options command
pub async fn run(args: OptionsArgs) -> CliResult<()> {
    let mut config = load_config(args.config.as_deref(), args.env.as_deref()).await?;
    logging::init_from(&config.debug);

    if let Some(url) = args.url {
        config.database.insert(URL_KEY, url);
    }
    for pair in &args.set {
        let (key, value) = parse_pair(pair)?;
        config.database.insert(key, OptionValue::infer(value));
    }
    if args.use_sid {
        config.driver.use_sid = Some(true);
    } else if args.no_sid {
        config.driver.use_sid = Some(false);
    }

    let built = config.driver_options()?;
    let shown = if args.show_password {
        built
    } else {
        mask_secrets(&built)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    output::header("Driver Options");
    if shown.is_empty() {
        output::info("No options set");
    }
    for (key, value) in shown.iter() {
        kv(key, &value.to_string());
    }
    if !config.database.contains_key(URL_KEY) {
        output::newline();
        output::info("No url option; options were copied unchanged");
    }
    output::newline();

    Ok(())
}

/// Load the config file, or `./quarry.toml` when present, or an empty config.
async fn load_config(path: Option<&Path>, env: Option<&str>) -> CliResult<QuarryConfig> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(CONFIG_FILE_NAME);
            default.exists().then_some(default)
        }
    };

    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| ConfigError::Io {
                    path: path.display().to_string(),
                    source: e,
                })?;
            QuarryConfig::from_str(&content)?
        }
        None => QuarryConfig::default(),
    };

    Ok(match env {
        Some(env) => config.with_environment(env)?,
        None => config,
    })
}

fn parse_pair(pair: &str) -> CliResult<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(CliError::InvalidOption(pair.to_string())),
    }
}

/// Hide the password option and the password inside the url option.
fn mask_secrets(options: &DriverOptions) -> DriverOptions {
    options
        .iter()
        .map(|(key, value)| {
            let masked = match (key, value) {
                ("password", OptionValue::String(_)) => OptionValue::from("****"),
                (URL_KEY, OptionValue::String(url)) => match mask_url_password(url) {
                    Some(masked) => OptionValue::from(masked),
                    None => value.clone(),
                },
                _ => value.clone(),
            };
            (key, masked)
        })
        .collect()
}

/// Replace the password inside `url` with `****`, leaving the rest of the text as written.
fn mask_url_password(url: &str) -> Option<String> {
    parse_connection_url(url).ok()?.password?;

    let start = url.find("//")? + 2;
    let rest = &url[start..];
    let base = rest.rfind('/').map_or(rest, |end| &rest[..end]);
    let at = base.find('@')?;
    let colon = base[..at].find(':')?;

    let mut masked = String::with_capacity(url.len());
    masked.push_str(&url[..start + colon + 1]);
    masked.push_str("****");
    masked.push_str(&url[start + at..]);
    Some(masked)
}
