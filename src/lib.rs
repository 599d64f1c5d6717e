//! termcue: ANSI text styling and single-keystroke prompts for CLIs.
//!
//! Styling is nesting-safe and idempotent: re-bolding strips old bold
//! controls, and re-coloring text that already contains a color reset keeps
//! the outer color going. Without ANSI support every styling call returns its
//! input unchanged.
//!
//! # Quick start
//!
//! ```no_run
//! use termcue::config::load_config;
//! use termcue::ui::{Capabilities, CharPrompt, OutputPreferences, Prompter, Styler};
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let capabilities = Capabilities::detect();
//! let prefs = OutputPreferences::detect(&config.display, &capabilities);
//! let styler = Styler::from_preferences(&prefs);
//! println!("{}", styler.bolden("ready"));
//!
//! let mut prompter = Prompter::stdio(styler).interactive(capabilities.stdin_has_terminal);
//! let accepted = ['y', 'n'];
//! let request = CharPrompt::new(&accepted).with_prompt("Continue?").with_default(0);
//! let choice = prompter.prompt_for_char_input(&request).await.unwrap();
//! println!("chose {choice}");
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod ui;
