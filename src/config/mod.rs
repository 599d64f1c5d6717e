//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Command-line flags (applied by the binary after loading).
//! 2. Environment variables (`TERMCUE_COLOR`, `TERMCUE_WRAP`,
//!    `TERMCUE_WRAP_COLUMN`, `TERMCUE_LOG`, plus `NO_COLOR`).
//! 3. TOML file specified via --config CLI flag
//! 4. ./termcue.toml in the current directory
//! 5. $XDG_CONFIG_HOME/termcue/termcue.toml (or ~/.config/termcue/termcue.toml)
//! 6. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::{load_config, load_config_with_source};
pub use sources::config_root_dir;
pub use types::{Config, ConfigSource, DisplayConfig, LoadedConfig, LoggingConfig};
