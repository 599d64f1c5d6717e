//! CLI entry point for termcue.

mod cli;

use clap::{CommandFactory, Parser};
use std::io::{self, IsTerminal, Read, Write};
use termcue::config::{load_config_with_source, DisplayConfig};
use termcue::error::CliError;
use termcue::logging;
use termcue::ui::ansi::RESET_ALL;
use termcue::ui::{
    wrap_text, Capabilities, CharPrompt, Color, KeySource, OutputPreferences, Prompter,
    StdinKeys, StdinModes, Styler,
};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    let Some(command) = args.command.clone() else {
        let _ = cli::Args::command().print_help();
        std::process::exit(2);
    };

    let capabilities = Capabilities::detect();
    if let Err(e) = run(&args, command, &capabilities).await {
        // Errors go to stderr; color only when stderr is a terminal too.
        let color = !args.no_color && capabilities.supports_ansi() && io::stderr().is_terminal();
        let styler = Styler::new(color);
        eprintln!("{} {e}", styler.color(&styler.bolden("error:"), Some(Color::Red)));
        std::process::exit(1);
    }
}

async fn run(
    args: &cli::Args,
    command: cli::Command,
    capabilities: &Capabilities,
) -> Result<(), CliError> {
    let loaded = load_config_with_source(args.config.as_deref())?;
    let mut config = loaded.config;
    apply_cli_overrides(&mut config.display, args);

    let prefs = OutputPreferences::detect(&config.display, capabilities);
    logging::init_subscriber(&config.logging.level, args.verbose, prefs.show_color());
    tracing::debug!(source = ?loaded.source, display = ?config.display, "configuration loaded");

    let styler = Styler::from_preferences(&prefs);
    match command {
        cli::Command::Bold { text } => {
            let text = text_or_stdin(text)?;
            emit(&styler.bolden(&wrap_text(&text, &prefs)))?;
        }
        cli::Command::Color { color, text } => {
            let text = text_or_stdin(text)?;
            emit(&styler.color(&wrap_text(&text, &prefs), Some(color)))?;
        }
        cli::Command::Clear => {
            let mut stdout = io::stdout().lock();
            // Drop any attributes left active so the cleared screen is unstyled.
            if styler.supports_color() {
                stdout.write_all(RESET_ALL.as_bytes())?;
            }
            stdout.write_all(styler.clear_screen().as_bytes())?;
            stdout.flush()?;
        }
        cli::Command::Colors => {
            let listing = Color::ALL
                .iter()
                .map(|color| styler.color(color.name(), Some(*color)))
                .collect::<Vec<_>>()
                .join("\n");
            emit(&listing)?;
        }
        cli::Command::Choose {
            choices,
            prompt,
            default,
            hide_choices,
        } => {
            let accepted: Vec<char> = choices.chars().collect();
            let mut request = CharPrompt::new(&accepted);
            if let Some(prompt) = prompt.as_deref() {
                request = request.with_prompt(prompt);
            }
            if let Some(index) = default {
                request = request.with_default(index);
            }
            if hide_choices {
                request = request.hide_accepted();
            }

            // Prompt chrome goes to stderr so stdout carries only the answer.
            let mut prompter = Prompter::new(
                styler,
                Box::new(io::stderr()),
                Box::new(StdinModes::new()),
                || Box::new(StdinKeys::stdin()) as Box<dyn KeySource>,
            )
            .interactive(capabilities.stdin_has_terminal);
            let choice = prompter.prompt_for_char_input(&request).await?;
            tracing::debug!(%choice, "choice made");
            emit(&choice.to_string())?;
        }
    }
    Ok(())
}

/// Fold command-line display flags over the loaded config.
fn apply_cli_overrides(display: &mut DisplayConfig, args: &cli::Args) {
    if args.no_color {
        display.color = false;
    }
    if args.wrap {
        display.wrap = true;
    }
    if let Some(cols) = args.wrap_column {
        display.wrap = true;
        display.wrap_column = Some(usize::from(cols));
    }
}

fn text_or_stdin(text: Option<String>) -> io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write `text` to stdout, adding a final newline only when it lacks one.
fn emit(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
