//! Colored terminal output.
//!
//! Color is only emitted when stdout supports it and `--no-color` was not
//! given.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{colors::css, OwoColorize};

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turns colored output off for the rest of the process
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

fn color_enabled() -> bool {
    !COLOR_DISABLED.load(Ordering::Relaxed)
        && supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if color_enabled() {
        style(text)
    } else {
        text.to_owned()
    }
}

/// Styles for status lines, diff lines and risk levels
pub trait Colorize {
    /// Added lines, low risk, completion messages
    fn success(&self) -> String;
    /// Medium risk
    fn warning(&self) -> String;
    /// Removed lines, high risk
    fn error(&self) -> String;
    /// Hunk headers
    fn info(&self) -> String;
    /// Skipped work
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), |s| s.fg::<css::Green>().to_string())
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), |s| s.fg::<css::Orange>().to_string())
    }

    fn error(&self) -> String {
        paint(self.as_ref(), |s| s.fg::<css::Red>().to_string())
    }

    fn info(&self) -> String {
        paint(self.as_ref(), |s| s.fg::<css::LightBlue>().to_string())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), |s| s.dimmed().to_string())
    }
}
