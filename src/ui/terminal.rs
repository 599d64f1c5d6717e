//! Stdin line/echo mode control for single-keystroke input.
//!
//! Entering single-character mode disables echo before line buffering;
//! restoring puts line buffering back before echo. At least one platform
//! misbehaves when the order is swapped.

use std::io;

/// Controls the input terminal's echo and line-buffering modes.
pub trait TerminalModes: Send {
    /// Whether stdin is attached to a terminal. Mode changes are skipped
    /// when it is not.
    fn has_terminal(&self) -> bool;

    fn echo_mode(&self) -> io::Result<bool>;
    fn set_echo_mode(&mut self, enabled: bool) -> io::Result<()>;

    fn line_mode(&self) -> io::Result<bool>;
    fn set_line_mode(&mut self, enabled: bool) -> io::Result<()>;

    /// Deliver keystrokes immediately and without local echo.
    fn enter_single_char_mode(&mut self) -> io::Result<()> {
        self.set_echo_mode(false)?;
        self.set_line_mode(false)
    }

    /// Put back a previously captured state, line mode first.
    fn restore_modes(&mut self, saved: SavedModes) -> io::Result<()> {
        self.set_line_mode(saved.line)?;
        self.set_echo_mode(saved.echo)
    }
}

/// Echo and line-mode state captured before single-character input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedModes {
    pub echo: bool,
    pub line: bool,
}

impl SavedModes {
    pub fn capture(modes: &dyn TerminalModes) -> io::Result<Self> {
        Ok(Self {
            echo: modes.echo_mode()?,
            line: modes.line_mode()?,
        })
    }
}

/// Single-character mode lifetime guard; puts the prior modes back on any
/// return path.
pub(crate) struct SingleCharModeGuard<'a> {
    modes: &'a mut dyn TerminalModes,
    saved: Option<SavedModes>,
}

impl<'a> SingleCharModeGuard<'a> {
    /// Enter single-character mode when a terminal is attached.
    pub(crate) fn acquire(modes: &'a mut dyn TerminalModes) -> io::Result<Self> {
        if !modes.has_terminal() {
            return Ok(Self { modes, saved: None });
        }
        let saved = SavedModes::capture(&*modes)?;
        if let Err(e) = modes.enter_single_char_mode() {
            // Echo may already be off; put it back before surfacing the error.
            let _ = modes.restore_modes(saved);
            return Err(e);
        }
        tracing::trace!(?saved, "entered single-character input mode");
        Ok(Self {
            modes,
            saved: Some(saved),
        })
    }
}

impl Drop for SingleCharModeGuard<'_> {
    fn drop(&mut self) {
        let Some(saved) = self.saved else {
            return;
        };
        if let Err(e) = self.modes.restore_modes(saved) {
            tracing::warn!(error = %e, "failed to restore terminal input modes");
        } else {
            tracing::trace!(?saved, "restored terminal input modes");
        }
    }
}

/// Modes of the process's real stdin.
#[derive(Debug, Default)]
pub struct StdinModes {
    // Without termios the two modes can only be toggled together through
    // crossterm raw mode; remember each requested state separately.
    #[cfg(not(unix))]
    echo: Option<bool>,
    #[cfg(not(unix))]
    line: Option<bool>,
}

impl StdinModes {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(unix)]
mod termios {
    use nix::sys::termios::{tcgetattr, tcsetattr, LocalFlags, SetArg};
    use std::io;

    pub(super) fn flag(flag: LocalFlags) -> io::Result<bool> {
        let attrs = tcgetattr(io::stdin())?;
        Ok(attrs.local_flags.contains(flag))
    }

    pub(super) fn set_flag(flag: LocalFlags, enabled: bool) -> io::Result<()> {
        let stdin = io::stdin();
        let mut attrs = tcgetattr(&stdin)?;
        attrs.local_flags.set(flag, enabled);
        tcsetattr(&stdin, SetArg::TCSANOW, &attrs)?;
        Ok(())
    }
}

#[cfg(unix)]
impl TerminalModes for StdinModes {
    fn has_terminal(&self) -> bool {
        std::io::IsTerminal::is_terminal(&io::stdin())
    }

    fn echo_mode(&self) -> io::Result<bool> {
        termios::flag(nix::sys::termios::LocalFlags::ECHO)
    }

    fn set_echo_mode(&mut self, enabled: bool) -> io::Result<()> {
        termios::set_flag(nix::sys::termios::LocalFlags::ECHO, enabled)
    }

    fn line_mode(&self) -> io::Result<bool> {
        termios::flag(nix::sys::termios::LocalFlags::ICANON)
    }

    fn set_line_mode(&mut self, enabled: bool) -> io::Result<()> {
        termios::set_flag(nix::sys::termios::LocalFlags::ICANON, enabled)
    }
}

#[cfg(not(unix))]
impl TerminalModes for StdinModes {
    fn has_terminal(&self) -> bool {
        std::io::IsTerminal::is_terminal(&io::stdin())
    }

    fn echo_mode(&self) -> io::Result<bool> {
        Ok(self.echo.unwrap_or(!crossterm::terminal::is_raw_mode_enabled()?))
    }

    fn set_echo_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.echo = Some(enabled);
        Ok(())
    }

    fn line_mode(&self) -> io::Result<bool> {
        Ok(self.line.unwrap_or(!crossterm::terminal::is_raw_mode_enabled()?))
    }

    fn set_line_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.line = Some(enabled);
        if enabled {
            crossterm::terminal::disable_raw_mode()
        } else {
            crossterm::terminal::enable_raw_mode()
        }
    }
}
