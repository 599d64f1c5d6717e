//! Default configuration constants.

/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "termcue.toml";
/// Directory under the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "termcue";
/// Color output is allowed unless disabled by config, env, or flag.
pub(super) const DEFAULT_COLOR: bool = true;
/// Wrapping is opt-in.
pub(super) const DEFAULT_WRAP: bool = false;
/// Default log filter when neither env nor config provides one.
pub(super) const DEFAULT_LOG_LEVEL: &str = "warn";
