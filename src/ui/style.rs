//! Bold/color styling for multi-line terminal text.
//!
//! Styling is applied line by line so every line carries its own start and
//! reset codes. Line-oriented log capture can then split or buffer output
//! without leaking bold or color state onto adjacent lines.
//!
//! Both operations are identities when the sink does not support ANSI, and
//! neither adds a trailing newline the input did not have.

use crate::ui::ansi::{self, Color};
use crate::ui::preferences::OutputPreferences;
use regex::Regex;
use std::sync::OnceLock;

/// Matches either bold control so re-bolding never nests resets.
fn bold_controls() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            "(?:{}|{})",
            regex::escape(ansi::BOLD),
            regex::escape(ansi::RESET_BOLD)
        ))
        .expect("bold control pattern is valid")
    })
}

/// Matches any CSI escape sequence (SGR, cursor, erase).
pub(crate) fn csi_sequences() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]").expect("csi pattern is valid")
    })
}

/// Applies ANSI styling when the output supports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    supports_color: bool,
}

impl Styler {
    pub fn new(supports_color: bool) -> Self {
        Self { supports_color }
    }

    /// Styler that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Styler honoring the process-wide color preference.
    pub fn from_preferences(preferences: &OutputPreferences) -> Self {
        Self::new(preferences.show_color())
    }

    pub fn supports_color(&self) -> bool {
        self.supports_color
    }

    /// Make every line of `text` bold.
    ///
    /// Bold controls already embedded in a line are dropped first, so an
    /// inner bold-reset cannot end the new bold span early.
    pub fn bolden(&self, text: &str) -> String {
        if !self.supports_color || text.is_empty() {
            return text.to_string();
        }
        map_lines(text, |line, out| {
            out.push_str(ansi::BOLD);
            out.push_str(&bold_controls().replace_all(line, ""));
            out.push_str(ansi::RESET_BOLD);
        })
    }

    /// Color every line of `text`.
    ///
    /// Embedded color resets are followed by this color's code, so text that
    /// was colored earlier returns to the outer color instead of the terminal
    /// default when its inner span ends.
    pub fn color(&self, text: &str, color: Option<Color>) -> String {
        let Some(color) = color else {
            return text.to_string();
        };
        if !self.supports_color || text.is_empty() {
            return text.to_string();
        }
        let code = color.code();
        let continued = format!("{}{code}", ansi::RESET_COLOR);
        map_lines(text, |line, out| {
            out.push_str(code);
            out.push_str(&line.replace(ansi::RESET_COLOR, &continued));
            out.push_str(ansi::RESET_COLOR);
        })
    }

    /// Sequence that clears the screen, or two blank lines without ANSI.
    pub fn clear_screen(&self) -> &'static str {
        if self.supports_color {
            ansi::CLEAR_SCREEN
        } else {
            "\n\n"
        }
    }
}

/// Run `style_line` over each line, keeping the input's trailing-newline shape.
fn map_lines<F>(text: &str, mut style_line: F) -> String
where
    F: FnMut(&str, &mut String),
{
    let ends_with_newline = text.ends_with('\n');
    let body = if ends_with_newline {
        &text[..text.len() - 1]
    } else {
        text
    };

    let mut out = String::with_capacity(text.len() + 16);
    for line in body.split('\n') {
        style_line(line, &mut out);
        out.push('\n');
    }
    if !ends_with_newline {
        // Drop the newline added after the last line.
        out.pop();
    }
    out
}

/// Remove every CSI escape sequence from `text`.
pub fn strip_ansi(text: &str) -> String {
    csi_sequences().replace_all(text, "").into_owned()
}

/// Number of visible characters, ignoring escape sequences.
pub fn visible_width(text: &str) -> usize {
    if !text.contains('\x1b') {
        return text.chars().count();
    }
    strip_ansi(text).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ansi::{BOLD, CLEAR_SCREEN, RESET_BOLD, RESET_COLOR};

    fn styled() -> Styler {
        Styler::new(true)
    }

    #[test]
    fn unsupported_styler_returns_input_unchanged() {
        let styler = Styler::plain();
        for text in ["", "a", "a\n", "a\nb", "\n\n", "x\x1b[1my"] {
            assert_eq!(styler.bolden(text), text);
            assert_eq!(styler.color(text, Some(Color::Red)), text);
        }
    }

    #[test]
    fn empty_text_and_missing_color_are_no_ops() {
        assert_eq!(styled().bolden(""), "");
        assert_eq!(styled().color("", Some(Color::Blue)), "");
        assert_eq!(styled().color("plain", None), "plain");
    }

    #[test]
    fn bolden_wraps_each_line() {
        assert_eq!(
            styled().bolden("one\ntwo"),
            format!("{BOLD}one{RESET_BOLD}\n{BOLD}two{RESET_BOLD}")
        );
    }

    #[test]
    fn bolden_keeps_trailing_newline_shape() {
        // Exactly one trailing newline survives; none is invented.
        assert_eq!(styled().bolden("hi"), format!("{BOLD}hi{RESET_BOLD}"));
        assert_eq!(styled().bolden("hi\n"), format!("{BOLD}hi{RESET_BOLD}\n"));
        assert_eq!(styled().bolden("\n"), format!("{BOLD}{RESET_BOLD}\n"));
    }

    #[test]
    fn bolden_strips_embedded_bold_controls() {
        let once = styled().bolden("a b");
        let twice = styled().bolden(&once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches(BOLD).count(), 1);
        assert_eq!(twice.matches(RESET_BOLD).count(), 1);
    }

    #[test]
    fn bolden_inside_text_does_not_end_outer_bold_early() {
        let inner = styled().bolden("inner");
        let outer = styled().bolden(&format!("pre {inner} post"));
        assert_eq!(outer, format!("{BOLD}pre inner post{RESET_BOLD}"));
    }

    #[test]
    fn color_wraps_each_line_with_reset() {
        let red = Color::Red.code();
        assert_eq!(
            styled().color("a\nb\n", Some(Color::Red)),
            format!("{red}a{RESET_COLOR}\n{red}b{RESET_COLOR}\n")
        );
    }

    #[test]
    fn nested_color_resumes_outer_color_after_inner_reset() {
        let inner = styled().color("warn", Some(Color::Yellow));
        let outer = styled().color(&format!("[{inner}] done"), Some(Color::Green));
        let green = Color::Green.code();
        let yellow = Color::Yellow.code();
        assert_eq!(
            outer,
            format!("{green}[{yellow}warn{RESET_COLOR}{green}] done{RESET_COLOR}")
        );
    }

    #[test]
    fn blank_middle_lines_are_still_styled() {
        let cyan = Color::Cyan.code();
        assert_eq!(
            styled().color("a\n\nb", Some(Color::Cyan)),
            format!("{cyan}a{RESET_COLOR}\n{cyan}{RESET_COLOR}\n{cyan}b{RESET_COLOR}")
        );
    }

    #[test]
    fn clear_screen_depends_on_support() {
        assert_eq!(styled().clear_screen(), CLEAR_SCREEN);
        assert_eq!(Styler::plain().clear_screen(), "\n\n");
    }

    #[test]
    fn from_preferences_follows_show_color() {
        assert!(!Styler::from_preferences(&OutputPreferences::test()).supports_color());
        assert!(Styler::from_preferences(&OutputPreferences::new(false, Some(80), true)).supports_color());
    }

    #[test]
    fn strip_ansi_and_visible_width_ignore_escapes() {
        let text = styled().bolden(&styled().color("héllo", Some(Color::Magenta)));
        assert_eq!(strip_ansi(&text), "héllo");
        assert_eq!(visible_width(&text), 5);
        assert_eq!(strip_ansi(CLEAR_SCREEN), "");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_color() -> impl Strategy<Value = Color> {
            proptest::sample::select(Color::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn unsupported_styling_is_identity(text in "[ -~\n]{0,64}", color in any_color()) {
                let styler = Styler::plain();
                prop_assert_eq!(styler.bolden(&text), text.clone());
                prop_assert_eq!(styler.color(&text, Some(color)), text);
            }

            #[test]
            fn styling_preserves_trailing_newline_shape(
                text in "[ -~\n]{1,64}",
                color in any_color(),
            ) {
                let styler = Styler::new(true);
                for out in [styler.bolden(&text), styler.color(&text, Some(color))] {
                    prop_assert_eq!(out.ends_with('\n'), text.ends_with('\n'));
                    prop_assert!(!out.ends_with("\n\n") || text.ends_with("\n\n"));
                    prop_assert_eq!(out.matches('\n').count(), text.matches('\n').count());
                    prop_assert_eq!(strip_ansi(&out), text.clone());
                }
            }

            #[test]
            fn bolden_is_stable_under_reapplication(text in "[ -~\n]{1,64}") {
                let styler = Styler::new(true);
                let once = styler.bolden(&text);
                prop_assert_eq!(styler.bolden(&once), once);
            }
        }
    }
}
