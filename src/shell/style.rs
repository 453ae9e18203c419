//! Colored console lines.

use std::fmt;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const RESET: &str = "\x1b[0m";

/// Foreground colors used by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Yellow,
    Blue,
    White,
    BrightGreen,
}

impl Color {
    /// ANSI escape selecting this color.
    pub fn ansi(self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Red => "\x1b[31m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::White => "\x1b[37m",
            Color::BrightGreen => "\x1b[92m",
        }
    }

    /// Wraps `text` in this color, or returns it unchanged when `enabled`
    /// is false.
    pub fn paint(self, text: &str, enabled: bool) -> String {
        if enabled {
            format!("{}{text}{RESET}", self.ansi())
        } else {
            text.to_string()
        }
    }
}

/// One line of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub color: Color,
}

impl Line {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Regular output.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Color::White)
    }

    /// Headings and status messages.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Color::Blue)
    }

    /// Bot replies and advisory notes.
    pub fn note(text: impl Into<String>) -> Self {
        Self::new(text, Color::Yellow)
    }

    /// Results worth highlighting.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Color::BrightGreen)
    }

    /// Faults and usage messages.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Color::Red)
    }

    /// Renders the line (without newline).
    pub fn render(&self, color: bool) -> String {
        self.color.paint(&self.text, color)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
