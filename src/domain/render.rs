//! Indentation-aware line rendering shared by both builder styles.

use std::fmt;

/// Number of spaces added per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentUnit(usize);

impl IndentUnit {
    /// Markup-like `<tag>` rendering.
    pub const TAG: IndentUnit = IndentUnit(2);
    /// Class declaration rendering.
    pub const DECLARATION: IndentUnit = IndentUnit(4);

    pub const fn new(width: usize) -> Self {
        Self(width)
    }

    pub const fn width(self) -> usize {
        self.0
    }

    /// Leading whitespace for a line at `depth`.
    pub fn pad(self, depth: usize) -> String {
        " ".repeat(self.0 * depth)
    }

    /// A single rendered line: `content` prefixed with the padding for `depth`.
    pub fn line(self, depth: usize, content: impl fmt::Display) -> String {
        format!("{}{}", self.pad(depth), content)
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::TAG
    }
}

impl fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} spaces", self.0)
    }
}

/// Anything that can print itself as an ordered sequence of indented lines.
///
/// `render` is a pure function of the current state; calling it never mutates the
/// receiver, so rendering may happen at any point during construction.
pub trait Render {
    /// Lines for this value and its whole subtree, each already indented for `depth`.
    fn render(&self, depth: usize) -> Vec<String>;

    /// Render at depth 0 and join the lines with `\n` (no trailing newline).
    fn to_text(&self) -> String {
        self.render(0).join("\n")
    }
}
