//! Logging setup for Quarry.
//!
//! Library code only emits `tracing` events. Installing a subscriber is left
//! to the application, or to [`init`] when the `tracing-subscriber` feature is
//! enabled.
//!
//! # Environment Variables
//!
//! - `QUARRY_DEBUG=true|1|yes` - Enable debug logging
//! - `QUARRY_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `QUARRY_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! Events never carry connection URLs, passwords or other parsed values.

use std::env;
use std::sync::Once;

use crate::config::DebugConfig;

static INIT: Once = Once::new();

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Whether `QUARRY_DEBUG` asks for debug logging.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("QUARRY_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

fn normalize_level(level: &str) -> Option<&'static str> {
    let level = level.to_lowercase();
    LEVELS.iter().copied().find(|l| *l == level)
}

fn normalize_format(format: &str) -> &'static str {
    match format.to_lowercase().as_str() {
        "pretty" => "pretty",
        "compact" => "compact",
        _ => "json",
    }
}

/// Resolve the log level: `QUARRY_LOG_LEVEL`, then `fallback`, then
/// `debug` if `QUARRY_DEBUG` is set, otherwise `warn`.
pub fn resolve_level(fallback: Option<&str>) -> &'static str {
    env::var("QUARRY_LOG_LEVEL")
        .ok()
        .and_then(|l| normalize_level(&l))
        .or_else(|| fallback.and_then(normalize_level))
        .unwrap_or(if is_debug_enabled() { "debug" } else { "warn" })
}

/// Resolve the log format: `QUARRY_LOG_FORMAT`, then `fallback`, then json.
pub fn resolve_format(fallback: Option<&str>) -> &'static str {
    env::var("QUARRY_LOG_FORMAT")
        .ok()
        .or_else(|| fallback.map(str::to_string))
        .map(|f| normalize_format(&f))
        .unwrap_or("json")
}

/// Initialize logging from the environment alone. Later calls are no-ops.
pub fn init() {
    init_from(&DebugConfig::default());
}

/// Initialize logging from a config's `[debug]` section, with environment
/// variables taking precedence. Later calls are no-ops.
///
/// Nothing is installed unless a level was asked for somewhere.
pub fn init_from(config: &DebugConfig) {
    INIT.call_once(|| {
        let requested = is_debug_enabled()
            || env::var("QUARRY_LOG_LEVEL").is_ok()
            || config.log_level.is_some();
        if !requested {
            return;
        }

        let level = resolve_level(config.log_level.as_deref());
        let format = resolve_format(config.log_format.as_deref());
        install(level, format);
    });
}

#[cfg(feature = "tracing-subscriber")]
fn install(level: &str, format: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_new(format!(
        "quarry={},quarry_driver={},quarry_cli={}",
        level, level, level
    ))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Events go to stderr so command output on stdout stays parseable.
    let layer = fmt::layer().with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        "pretty" => registry.with(layer.pretty()).try_init(),
        "compact" => registry.with(layer.compact()).try_init(),
        _ => registry.with(layer.json()).try_init(),
    };

    if installed.is_ok() {
        tracing::info!(level = level, format = format, "Quarry logging initialized");
    }
}

#[cfg(not(feature = "tracing-subscriber"))]
fn install(_level: &str, _format: &str) {
    // Without the subscriber feature the application installs its own.
}
