//! Configuration data model.
//!
//! Struct definitions plus default values only. Source discovery and env
//! precedence live in the sibling modules.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_COLOR, DEFAULT_LOG_LEVEL, DEFAULT_WRAP};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Display / styling preferences.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Allow ANSI color and bold output when the terminal supports it.
    pub color: bool,
    /// Soft-wrap printed text at `wrap_column`.
    pub wrap: bool,
    /// Explicit wrap column. Falls back to the terminal width when omitted.
    pub wrap_column: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            wrap: DEFAULT_WRAP,
            wrap_column: None,
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `warn` or `termcue=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Where the loaded config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// `./termcue.toml` in the working directory.
    Local,
    /// `$XDG_CONFIG_HOME/termcue/termcue.toml` or `~/.config/termcue/termcue.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Loaded config plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
