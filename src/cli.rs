//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use termcue::ui::Color;

/// Style terminal text and prompt for single-key choices.
#[derive(Debug, Parser)]
#[command(name = "termcue", version)]
pub struct Args {
    /// Path to config file (default: ./termcue.toml or ~/.config/termcue/termcue.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color and bold output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Wrap output at the wrap column.
    #[arg(long = "wrap", global = true)]
    pub wrap: bool,

    /// Wrap column override (implies --wrap).
    #[arg(
        long = "wrap-column",
        value_name = "COLS",
        global = true,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub wrap_column: Option<u16>,

    /// Log debug diagnostics to stderr.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print text in bold. Reads stdin when TEXT is omitted.
    Bold { text: Option<String> },
    /// Print text in a color. Reads stdin when TEXT is omitted.
    Color {
        #[arg(value_enum)]
        color: Color,
        text: Option<String>,
    },
    /// Clear the screen (two blank lines without ANSI support).
    Clear,
    /// Print every color name in its own color.
    Colors,
    /// Wait for one key from CHOICES and print it to stdout.
    Choose {
        /// Accepted characters, e.g. `ynq`.
        choices: String,
        /// Question shown before the choices.
        #[arg(short = 'p', long = "prompt")]
        prompt: Option<String>,
        /// Zero-based index of the choice selected by a bare Enter.
        #[arg(short = 'd', long = "default")]
        default: Option<usize>,
        /// Do not list the accepted characters.
        #[arg(long = "hide-choices")]
        hide_choices: bool,
    },
}
