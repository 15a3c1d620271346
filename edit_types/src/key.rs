//! Command-line input alphabet

use serde::{Deserialize, Serialize};

/// A key as seen by the command-line processor.
///
/// Any character is valid input and passes through verbatim; the three
/// named keys drive the edit/cancel/run protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKey {
    /// A literal character to append
    Char(char),
    /// Run the accumulated command
    Enter,
    /// Delete the last character, or cancel when there is none
    Backspace,
    /// Discard the accumulated command
    Escape,
}

impl CommandKey {
    /// The literal character, if this is a character key.
    pub fn as_char(&self) -> Option<char> {
        match self {
            CommandKey::Char(ch) => Some(*ch),
            _ => None,
        }
    }
}

impl From<char> for CommandKey {
    fn from(ch: char) -> Self {
        CommandKey::Char(ch)
    }
}
