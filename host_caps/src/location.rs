//! Buffer locations and selection spans

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column location in the host text buffer (both 0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLocation {
    pub line: usize,
    pub column: usize,
}

impl TextLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn origin() -> Self {
        Self { line: 0, column: 0 }
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A selected region of the host text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSpan {
    pub start: TextLocation,
    pub end: TextLocation,
}

impl SelectionSpan {
    pub fn new(start: TextLocation, end: TextLocation) -> Self {
        Self { start, end }
    }

    /// A zero-width span carries no selected text.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
