//! Centralized, hardcoded UI settings.
//!
//! Prompt chrome and layout fallbacks live here so they can be tweaked in one
//! place.

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Wrap column when neither an override nor a terminal width is available.
pub const DEFAULT_WRAP_COLUMN: usize = 100;

// ---------------------------------------------------------------------------
// Prompt chrome
// ---------------------------------------------------------------------------

pub const PROMPT_CHOICES_OPEN: &str = " [";
pub const PROMPT_CHOICES_CLOSE: &str = "]";
pub const PROMPT_CHOICES_SEPARATOR: &str = "|";
pub const PROMPT_TERMINATOR: &str = ": ";
