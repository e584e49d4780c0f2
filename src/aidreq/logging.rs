use crate::error::{AidreqError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding a tracing filter directive; wins over everything else.
pub const LOG_ENV: &str = "AIDREQ_LOG";

/// Pick the effective filter: `AIDREQ_LOG`, then `--verbose`, then the configured level.
pub fn effective_level(env_value: Option<String>, verbose: bool, configured: &str) -> String {
    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(directive) => directive,
        None if verbose => "debug".to_string(),
        None => configured.to_string(),
    }
}

/// Install the global subscriber. Output goes to stderr so stdout stays parseable.
pub fn init_logging(level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(level)
        .map_err(|e| AidreqError::Config(format!("Invalid log level {}: {}", level, e)))?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|e| AidreqError::Config(format!("Failed to initialize logging: {}", e)))
}
