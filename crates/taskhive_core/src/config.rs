//! Runtime settings for core consumers.
//!
//! # Responsibility
//! - Collect the environment-tunable knobs the core and its boundary
//!   layers share, with sensible defaults for local development.
//!
//! # Invariants
//! - Reading settings never fails: unset or unparseable variables fall
//!   back to defaults instead of aborting startup.

use std::env;

const DEFAULT_APP_NAME: &str = "Taskhive";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_DIR: &str = "/tmp/taskhive/logs";

/// Application settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Display name used in health output and log events.
    pub app_name: String,
    /// Enables verbose diagnostics in boundary layers.
    pub debug: bool,
    /// Log level passed to `init_logging`.
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: String,
}

impl Settings {
    /// Resolves settings from `APP_NAME`, `DEBUG`, `LOG_LEVEL` and
    /// `LOG_DIR`, applying defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            debug: env::var("DEBUG")
                .ok()
                .and_then(|raw| parse_bool(&raw))
                .unwrap_or(false),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            debug: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

/// Parses the usual boolean spellings; `None` for anything else.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
