//! Diagnostic logging setup.
//!
//! One `tracing` fmt subscriber writing to stderr, so diagnostics never mix
//! with styled output on stdout. Later calls are no-ops, which keeps tests
//! and library reuse from panicking on double initialization.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the global subscriber.
///
/// `TERMCUE_LOG` has already been folded into `level` by config loading;
/// `verbose` raises the crate's own events to `debug`.
pub fn init_subscriber(level: &str, verbose: bool, ansi: bool) {
    INIT.call_once(|| {
        let directive = if verbose {
            format!("{level},termcue=debug")
        } else {
            level.to_string()
        };
        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
            eprintln!("warning: invalid log filter `{directive}`: {e}; using `warn`");
            EnvFilter::new("warn")
        });

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_target(false)
            .init();
        tracing::debug!(%directive, "logging initialized");
    });
}
