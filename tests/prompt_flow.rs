//! End-to-end prompt and styling flows through the public API.
//!
//! Keystrokes come from an in-memory duplex pipe so the byte decoding path
//! (`ReaderKeys`) is exercised exactly as it is for stdin.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use termcue::error::PromptError;
use termcue::ui::ansi::{BOLD, RESET_BOLD, RESET_COLOR};
use termcue::ui::{
    strip_ansi, wrap_text, CharPrompt, Color, KeySource, OutputPreferences, Prompter, ReaderKeys,
    Styler, TerminalModes,
};
use tokio::io::{AsyncWriteExt, DuplexStream};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct FakeTty(Arc<Mutex<(bool, bool)>>);

impl FakeTty {
    fn new() -> Self {
        Self(Arc::new(Mutex::new((true, true))))
    }
    fn modes(&self) -> (bool, bool) {
        *self.0.lock().unwrap()
    }
}

impl TerminalModes for FakeTty {
    fn has_terminal(&self) -> bool {
        true
    }
    fn echo_mode(&self) -> io::Result<bool> {
        Ok(self.0.lock().unwrap().0)
    }
    fn set_echo_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.0.lock().unwrap().0 = enabled;
        Ok(())
    }
    fn line_mode(&self) -> io::Result<bool> {
        Ok(self.0.lock().unwrap().1)
    }
    fn set_line_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.0.lock().unwrap().1 = enabled;
        Ok(())
    }
}

/// Prompter reading keys from the returned writer half.
fn piped_prompter(styler: Styler) -> (Prompter, DuplexStream, Captured, FakeTty) {
    let (tx, rx) = tokio::io::duplex(64);
    let reader = Mutex::new(Some(rx));
    let out = Captured::default();
    let tty = FakeTty::new();
    let prompter = Prompter::new(
        styler,
        Box::new(out.clone()),
        Box::new(tty.clone()),
        move || {
            let rx = reader
                .lock()
                .unwrap()
                .take()
                .expect("key source opened more than once");
            Box::new(ReaderKeys::new(rx)) as Box<dyn KeySource>
        },
    )
    .interactive(true);
    (prompter, tx, out, tty)
}

#[tokio::test]
async fn enter_picks_default_from_piped_input() {
    let (mut prompter, mut tx, out, tty) = piped_prompter(Styler::plain());
    tx.write_all(b"\r").await.unwrap();

    let accepted = ['y', 'n'];
    let request = CharPrompt::new(&accepted)
        .with_prompt("Overwrite?")
        .with_default(0);
    let choice = prompter.prompt_for_char_input(&request).await.unwrap();

    assert_eq!(choice, 'y');
    assert_eq!(out.text(), "Overwrite? [y|n]: \n\n");
    assert_eq!(tty.modes(), (true, true));
}

#[tokio::test]
async fn reprompts_until_valid_then_reuses_source() {
    let (mut prompter, mut tx, out, _tty) = piped_prompter(Styler::plain());
    let accepted = ['y', 'n'];
    let request = CharPrompt::new(&accepted);

    // Type each key only once its prompt is on screen, so reads never merge.
    let screen = out.clone();
    let typing = tokio::spawn(async move {
        for (shown, key) in [b"x", b"n", b"y"].into_iter().enumerate() {
            while screen.text().matches("[y|n]: ").count() <= shown {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            }
            tx.write_all(key).await.unwrap();
        }
        tx
    });

    assert_eq!(prompter.prompt_for_char_input(&request).await.unwrap(), 'n');
    assert_eq!(out.text().matches("[y|n]: ").count(), 2);
    // A second prompt keeps reading the same stream.
    assert_eq!(prompter.prompt_for_char_input(&request).await.unwrap(), 'y');
    drop(typing.await.unwrap());
}

#[tokio::test]
async fn closed_input_is_reported_and_modes_restored() {
    let (mut prompter, tx, _out, tty) = piped_prompter(Styler::plain());
    drop(tx);
    let accepted = ['q'];
    let err = prompter
        .prompt_for_char_input(&CharPrompt::new(&accepted))
        .await
        .unwrap_err();
    assert!(matches!(err, PromptError::InputClosed), "got: {err}");
    assert_eq!(tty.modes(), (true, true));
}

#[test]
fn styled_output_composes_and_wraps() {
    let styler = Styler::new(true);
    let warning = styler.color("careful", Some(Color::Yellow));
    let line = styler.bolden(&styler.color(&format!("note: {warning} now"), Some(Color::Cyan)));

    assert!(line.starts_with(BOLD));
    assert!(line.ends_with(RESET_BOLD));
    assert!(line.contains(&format!("{RESET_COLOR}{}", Color::Cyan.code())));
    assert_eq!(strip_ansi(&line), "note: careful now");

    let prefs = OutputPreferences::new(true, Some(10), true);
    assert_eq!(wrap_text("note: careful now", &prefs), "note:\ncareful\nnow");
}
