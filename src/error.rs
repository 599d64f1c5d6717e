//! Unified error types for styling, prompting, and configuration.

use std::fmt;

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Errors from the interactive single-character prompt.
#[derive(Debug)]
pub enum PromptError {
    /// The caller broke the prompt contract (no interactive terminal, empty
    /// choice set, bad default index, empty prompt text).
    InvalidUsage(String),
    /// The keystroke stream ended before a valid choice arrived.
    InputClosed,
    /// Reading keys or toggling terminal modes failed.
    Io(std::io::Error),
}

impl PromptError {
    /// True when the error is a caller contract violation.
    pub fn is_invalid_usage(&self) -> bool {
        matches!(self, Self::InvalidUsage(_))
    }
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUsage(msg) => write!(f, "invalid usage: {msg}"),
            Self::InputClosed => write!(f, "input closed before a choice was made"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// CliError (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type for the `termcue` binary.
#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Prompt(PromptError),
    /// Writing to stdout failed.
    Output(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Prompt(e) => write!(f, "prompt: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PromptError> for CliError {
    fn from(e: PromptError) -> Self {
        Self::Prompt(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e)
    }
}
