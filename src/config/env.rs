//! Environment overrides.
//!
//! `TERMCUE_*` variables override file values. `NO_COLOR` (any non-empty
//! value) disables color regardless of `TERMCUE_COLOR`.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(raw) = env_lookup("TERMCUE_COLOR") {
        config.display.color = parse_bool("TERMCUE_COLOR", &raw)?;
    }
    if let Some(raw) = env_lookup("TERMCUE_WRAP") {
        config.display.wrap = parse_bool("TERMCUE_WRAP", &raw)?;
    }
    if let Some(raw) = env_lookup("TERMCUE_WRAP_COLUMN") {
        config.display.wrap_column = Some(parse_column("TERMCUE_WRAP_COLUMN", &raw)?);
    }
    if let Some(raw) = env_lookup("TERMCUE_LOG") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            config.logging.level = trimmed.to_string();
        }
    }
    if env_lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
        config.display.color = false;
    }
    Ok(())
}

/// Parse a boolean switch in the usual spellings.
pub(super) fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected true/false"
        ))),
    }
}

/// Parse a positive column count.
pub(super) fn parse_column(name: &str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(cols) if cols > 0 => Ok(cols),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected positive integer columns"
        ))),
    }
}
