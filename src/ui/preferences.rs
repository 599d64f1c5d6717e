//! Process-wide output preferences and terminal capability detection.
//!
//! Preferences are built once at startup and passed to whatever formats
//! output. Nothing here mutates after construction except the memoized wrap
//! column, which resolves on first read.

use crate::config::DisplayConfig;
use crate::ui::settings;
use crossterm::terminal;
use std::io::{self, IsTerminal};
use std::sync::OnceLock;

/// Capability signals read from the attached stdio streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether stdout accepts ANSI sequences; `None` when it cannot be told.
    pub stdout_supports_ansi: Option<bool>,
    /// Whether stdin is attached to a terminal.
    pub stdin_has_terminal: bool,
    /// Terminal width in columns, when known.
    pub columns: Option<usize>,
}

impl Capabilities {
    /// Probe the current process's stdio streams.
    pub fn detect() -> Self {
        Self {
            stdout_supports_ansi: stdout_supports_ansi(),
            stdin_has_terminal: io::stdin().is_terminal(),
            columns: terminal_columns(),
        }
    }

    /// ANSI support with indeterminate treated as unsupported.
    pub fn supports_ansi(&self) -> bool {
        self.stdout_supports_ansi.unwrap_or(false)
    }
}

fn stdout_supports_ansi() -> Option<bool> {
    if !io::stdout().is_terminal() {
        return Some(false);
    }
    match std::env::var("TERM") {
        Ok(term) if term == "dumb" => Some(false),
        Ok(_) => Some(true),
        // Windows consoles rarely set TERM; crossterm knows whether VT mode is on.
        #[cfg(windows)]
        Err(_) => Some(crossterm::ansi_support::supports_ansi()),
        #[cfg(not(windows))]
        Err(_) => None,
    }
}

/// Read terminal width, ignoring zero-width reports.
pub(crate) fn terminal_columns() -> Option<usize> {
    terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
}

/// Immutable wrap/color preferences.
#[derive(Debug, Clone)]
pub struct OutputPreferences {
    wrap_text: bool,
    show_color: bool,
    wrap_column_override: Option<usize>,
    /// Width source consulted when no override is set.
    column_probe: fn() -> Option<usize>,
    wrap_column: OnceLock<usize>,
}

impl OutputPreferences {
    /// Explicit preferences; the terminal width is probed lazily if needed.
    pub fn new(wrap_text: bool, wrap_column_override: Option<usize>, show_color: bool) -> Self {
        Self::with_probe(wrap_text, wrap_column_override, show_color, terminal_columns)
    }

    fn with_probe(
        wrap_text: bool,
        wrap_column_override: Option<usize>,
        show_color: bool,
        column_probe: fn() -> Option<usize>,
    ) -> Self {
        Self {
            wrap_text,
            show_color,
            wrap_column_override: wrap_column_override.filter(|cols| *cols > 0),
            column_probe,
            wrap_column: OnceLock::new(),
        }
    }

    /// Preferences for this process from config and detected capabilities.
    pub fn detect(display: &DisplayConfig, capabilities: &Capabilities) -> Self {
        let show_color = display.color && capabilities.supports_ansi();
        let prefs = Self::new(display.wrap, display.wrap_column, show_color);
        tracing::debug!(
            wrap = prefs.wrap_text,
            show_color,
            override_column = ?prefs.wrap_column_override,
            "output preferences detected"
        );
        prefs
    }

    /// Deterministic preferences for tests: no wrapping, no color.
    pub fn test() -> Self {
        Self::with_probe(false, None, false, || None)
    }

    pub fn wrap_text(&self) -> bool {
        self.wrap_text
    }

    pub fn show_color(&self) -> bool {
        self.show_color
    }

    /// Column to wrap at: override, else terminal width, else 100.
    pub fn wrap_column(&self) -> usize {
        *self.wrap_column.get_or_init(|| {
            self.wrap_column_override
                .or_else(self.column_probe)
                .unwrap_or(settings::DEFAULT_WRAP_COLUMN)
        })
    }
}
