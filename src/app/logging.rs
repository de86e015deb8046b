//! Structured logging setup.
//!
//! Log events go to stderr so generated output and `✅` summaries on stdout stay
//! clean. `RUST_LOG` overrides everything; otherwise the level comes from
//! `--quiet`, `--verbose`, `--log-level` or `PLUMBER_LOG_LEVEL`, in that order.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read for the default log level.
pub const LOG_LEVEL_ENV: &str = "PLUMBER_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's events.
    pub level: Level,
    /// Include the module target in each line.
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: Level::INFO, include_target: true }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self { level, ..Default::default() }
    }

    /// Resolve the level from CLI switches. `quiet` wins over `verbose`.
    pub fn from_flags(verbose: u8, quiet: bool, log_level: Option<&str>) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => log_level.and_then(parse_level).unwrap_or(Level::INFO),
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        };
        Self::with_level(level)
    }
}

/// Parse a level name case-insensitively.
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(format!("warn,plumber={}", config.level)),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    let filter = build_filter(&config);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(config.include_target).with_writer(std::io::stderr))
        .try_init();
}
