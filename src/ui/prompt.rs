//! Single-character interactive prompt.
//!
//! [`Prompter::prompt_for_char_input`] blocks until the user presses one of
//! the accepted keys. With a default choice, a bare Enter selects it. There
//! is no timeout; cancellation belongs to the caller.

use crate::error::PromptError;
use crate::ui::keys::{KeySource, StdinKeys};
use crate::ui::settings;
use crate::ui::style::{strip_ansi, Styler};
use crate::ui::terminal::{SingleCharModeGuard, StdinModes, TerminalModes};
use std::io::{self, Write};

const ENTER: char = '\n';

/// One prompt request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharPrompt<'a> {
    /// Keys that end the prompt.
    pub accepted: &'a [char],
    /// Question shown before the choices.
    pub prompt: Option<&'a str>,
    /// Index into `accepted` selected by a bare Enter.
    pub default_index: Option<usize>,
    /// Show `[a|b|c]` after the question.
    pub display_accepted: bool,
}

impl<'a> CharPrompt<'a> {
    pub fn new(accepted: &'a [char]) -> Self {
        Self {
            accepted,
            prompt: None,
            default_index: None,
            display_accepted: true,
        }
    }

    pub fn with_prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn with_default(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }

    pub fn hide_accepted(mut self) -> Self {
        self.display_accepted = false;
        self
    }

    /// Reject contract violations before touching the terminal.
    fn validate(&self) -> Result<(), PromptError> {
        if self.accepted.is_empty() {
            return Err(PromptError::InvalidUsage(
                "accepted characters must not be empty".to_string(),
            ));
        }
        if self.prompt.is_some_and(str::is_empty) {
            return Err(PromptError::InvalidUsage(
                "prompt text must not be empty when given".to_string(),
            ));
        }
        if let Some(index) = self.default_index {
            if index >= self.accepted.len() {
                return Err(PromptError::InvalidUsage(format!(
                    "default choice index {index} is out of range for {} accepted characters",
                    self.accepted.len()
                )));
            }
        }
        Ok(())
    }
}

type KeySourceFactory = Box<dyn Fn() -> Box<dyn KeySource> + Send + Sync>;

/// Interactive prompter owning its terminal modes, output, and key source.
///
/// The key source is created on first use and reused by every later prompt.
pub struct Prompter {
    styler: Styler,
    interactive: bool,
    out: Box<dyn Write + Send>,
    modes: Box<dyn TerminalModes>,
    open_keys: KeySourceFactory,
    keys: Option<Box<dyn KeySource>>,
}

impl Prompter {
    /// Prompter bound to the process's stdin/stdout.
    ///
    /// Not interactive until [`Prompter::set_interactive`] is called.
    pub fn stdio(styler: Styler) -> Self {
        Self::new(
            styler,
            Box::new(io::stdout()),
            Box::new(StdinModes::new()),
            || Box::new(StdinKeys::stdin()) as Box<dyn KeySource>,
        )
    }

    pub fn new<F>(
        styler: Styler,
        out: Box<dyn Write + Send>,
        modes: Box<dyn TerminalModes>,
        open_keys: F,
    ) -> Self
    where
        F: Fn() -> Box<dyn KeySource> + Send + Sync + 'static,
    {
        Self {
            styler,
            interactive: false,
            out,
            modes,
            open_keys: Box::new(open_keys),
            keys: None,
        }
    }

    /// Builder form of [`Prompter::set_interactive`].
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Mark whether a human is attached and prompting is allowed.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Prompt until one of `request.accepted` is typed and return it.
    ///
    /// Fails with [`PromptError::InvalidUsage`] when the prompter is not
    /// interactive or the request is malformed; the terminal is untouched in
    /// that case. Single-character mode is restored on every return path.
    pub async fn prompt_for_char_input(
        &mut self,
        request: &CharPrompt<'_>,
    ) -> Result<char, PromptError> {
        if !self.interactive {
            return Err(PromptError::InvalidUsage(
                "cannot prompt without an interactive terminal".to_string(),
            ));
        }
        request.validate()?;

        let mut accepted = request.accepted.to_vec();
        let mut displayed: Vec<String> = accepted.iter().map(char::to_string).collect();
        let default = request.default_index.map(|index| accepted[index]);
        if let Some(index) = request.default_index {
            displayed[index] = self.styler.bolden(&displayed[index]);
            if !accepted.contains(&ENTER) {
                accepted.push(ENTER);
            }
        }
        let prompt_line = self.render_prompt(request, &displayed);

        let choice = {
            let _mode = SingleCharModeGuard::acquire(self.modes.as_mut())?;
            let keys = self.keys.get_or_insert_with(|| {
                tracing::debug!("opening keystroke source");
                (self.open_keys)()
            });

            let mut attempts = 0usize;
            loop {
                self.out.write_all(prompt_line.as_bytes())?;
                self.out.flush()?;

                let key = keys.next_key().await?.ok_or(PromptError::InputClosed)?;
                // Escape sequences from arrow or function keys would move the cursor.
                writeln!(self.out, "{}", strip_ansi(&key))?;
                self.out.flush()?;

                if let Some(choice) = single_char(&key).filter(|ch| accepted.contains(ch)) {
                    break choice;
                }
                attempts += 1;
                tracing::debug!(attempts, key = ?key, "rejected keystroke, prompting again");
            }
        };

        Ok(match default {
            Some(default) if choice == ENTER => default,
            _ => choice,
        })
    }

    /// `prompt [a|b]: ` with bold prompt text and terminator.
    fn render_prompt(&self, request: &CharPrompt<'_>, displayed: &[String]) -> String {
        let mut line = String::new();
        if let Some(prompt) = request.prompt {
            line.push_str(&self.styler.bolden(prompt));
        }
        if request.display_accepted {
            line.push_str(settings::PROMPT_CHOICES_OPEN);
            line.push_str(&displayed.join(settings::PROMPT_CHOICES_SEPARATOR));
            line.push_str(settings::PROMPT_CHOICES_CLOSE);
        }
        line.push_str(&self.styler.bolden(settings::PROMPT_TERMINATOR));
        line
    }
}

/// The key's only character, or `None` for empty or multi-character input.
fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
