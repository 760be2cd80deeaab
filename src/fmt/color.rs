//! The fixed tag palette. Tags are colored with plain SGR codes rather than
//! 24-bit escapes so the output stays readable on basic terminals.

use super::hash;
use std::fmt;
use std::str::FromStr;

/// One entry of the seven-color tag palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Palette order is part of the output contract: reordering it recolors every existing tag.
    pub const PALETTE: [Self; 7] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Escape sequence that switches the foreground to this color.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[91m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Same tag, same color, in every instance and every run.
    #[must_use]
    pub const fn for_tag(tag: &str) -> Self {
        Self::PALETTE[hash::palette_index(tag, Self::PALETTE.len())]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Config files and CLI flags name colors as strings; a typo must surface as an error, not a silent default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: '{}'", self.0)
    }
}

impl ParseColorError {
    /// The rejected input, as given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::PALETTE
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Wraps `text` in the color's escape and the reset escape.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
