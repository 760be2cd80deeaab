//! The exact layout of one emitted line.
//!
//! ```text
//! [<timestamp>] [<LEVEL>] [<coloredTag>] [<caller>] <message>\n
//! [<timestamp>] [<LEVEL>] [<caller>] <message>\n          (empty tag)
//! ```

use super::color::{Color, colorize};

/// Width of the level column; shorter labels are right-aligned inside it.
pub const LEVEL_WIDTH: usize = 5;

/// Everything that varies between two lines.
#[derive(Debug, Clone, Copy)]
pub struct LineParts<'a> {
    pub timestamp: &'a str,
    pub label: &'a str,
    pub tag: &'a str,
    pub color: Color,
    pub caller: &'a str,
    pub message: &'a str,
}

impl LineParts<'_> {
    /// Renders the line including its trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let Self {
            timestamp,
            label,
            tag,
            color,
            caller,
            message,
        } = *self;

        if tag.is_empty() {
            format!(
                "[{timestamp}] [{label:>width$}] [{caller}] {message}\n",
                width = LEVEL_WIDTH
            )
        } else {
            let tag = colorize(tag, color);
            format!(
                "[{timestamp}] [{label:>width$}] [{tag}] [{caller}] {message}\n",
                width = LEVEL_WIDTH
            )
        }
    }
}
