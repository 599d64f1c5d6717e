//! ANSI escape sequences and the fixed color palette.

use std::fmt;
use std::str::FromStr;

/// Start bold weight.
pub const BOLD: &str = "\x1b[1m";
/// Return to normal weight without touching color.
pub const RESET_BOLD: &str = "\x1b[22m";
/// Reset every attribute.
pub const RESET_ALL: &str = "\x1b[0m";
/// Return to the default foreground color without touching weight.
pub const RESET_COLOR: &str = "\x1b[39m";
/// Clear the whole screen and move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Foreground colors supported by the styler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Color {
    Red,
    Green,
    Blue,
    Cyan,
    Yellow,
    Magenta,
    #[value(alias = "gray")]
    Grey,
}

// Indexed by `Color as usize`.
const COLOR_CODES: [&str; 7] = [
    "\x1b[31m", // red
    "\x1b[32m", // green
    "\x1b[34m", // blue
    "\x1b[36m", // cyan
    "\x1b[33m", // yellow
    "\x1b[35m", // magenta
    "\x1b[90m", // grey
];

impl Color {
    /// Every color in declaration order.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Yellow,
        Color::Magenta,
        Color::Grey,
    ];

    /// Escape sequence that starts this foreground color.
    pub fn code(self) -> &'static str {
        COLOR_CODES[self as usize]
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Grey => "grey",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color name is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color `{}`", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered == "gray" {
            return Ok(Self::Grey);
        }
        Self::ALL
            .into_iter()
            .find(|color| color.name() == lowered)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
