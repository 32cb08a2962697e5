//! Logging initialization for hosts of the catalog
//!
//! The crate itself only emits `tracing` events. Hosts that do not set up
//! their own subscriber can call [`init_logging`], which supports:
//! - Environment variable override (TRACKER_I18N_LOG)
//! - Pretty, JSON or compact console output
//! - Module-level log filtering

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "TRACKER_I18N_LOG";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level
    pub level: Level,
    /// Output format
    pub format: LogFormat,
    /// Show timestamps
    pub timestamps: bool,
    /// Show file and line numbers
    pub file_line: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Pretty,
            timestamps: true,
            file_line: false,
        }
    }
}

impl From<&config::LoggingConfig> for LoggingConfig {
    fn from(config: &config::LoggingConfig) -> Self {
        Self {
            level: parse_level(&config.level),
            format: LogFormat::from_str(&config.format),
            timestamps: config.timestamps,
            file_line: config.file_line,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl LogFormat {
    /// Unknown names fall back to `Pretty`
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// Initialize the global subscriber
///
/// Returns `false` when a subscriber was already installed; the existing
/// one is left untouched.
///
/// # Environment Variables
/// - `TRACKER_I18N_LOG`: Override filter (e.g., "tracker_i18n=trace")
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tracker_i18n={}",
            config.level.as_str().to_lowercase()
        ))
    });

    let base = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(config.file_line)
        .with_line_number(config.file_line);

    let console_layer = match config.format {
        LogFormat::Json => {
            let layer = base.json();
            if config.timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Compact => {
            let layer = base.compact();
            if config.timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Pretty => {
            let layer = base.pretty();
            if config.timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            level = %config.level,
            format = ?config.format,
            "Logging initialized"
        );
    }
    installed
}

/// Parse log level from string
pub fn parse_level(s: &str) -> Level {
    match s.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
