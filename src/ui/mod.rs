//! Terminal-facing styling and prompting.
//!
//! `style` and `text` are pure string transforms driven by
//! [`OutputPreferences`]; `prompt` owns the interactive side (terminal modes,
//! keystroke source, prompt rendering).

pub mod ansi;
pub mod keys;
pub mod preferences;
pub mod prompt;
pub mod settings;
pub mod style;
pub mod terminal;
pub mod text;

pub use ansi::Color;
pub use keys::{KeySource, ReaderKeys, StdinKeys, Utf8ChunkDecoder};
pub use preferences::{Capabilities, OutputPreferences};
pub use prompt::{CharPrompt, Prompter};
pub use style::{strip_ansi, visible_width, Styler};
pub use terminal::{SavedModes, StdinModes, TerminalModes};
pub use text::wrap_text;
