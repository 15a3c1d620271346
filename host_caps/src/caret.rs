//! The host caret resource and its presentation descriptor

use crate::location::TextLocation;
use serde::{Deserialize, Serialize};

/// How the host should draw the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaretDisplay {
    /// Full block over the character
    Block,
    /// Lower half block
    HalfBlock,
    /// Lower quarter block
    QuarterBlock,
    /// No caret drawn at all
    Invisible,
    /// The host's ordinary caret
    NormalCaret,
}

impl CaretDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaretDisplay::Block => "block",
            CaretDisplay::HalfBlock => "half-block",
            CaretDisplay::QuarterBlock => "quarter-block",
            CaretDisplay::Invisible => "invisible",
            CaretDisplay::NormalCaret => "normal",
        }
    }
}

/// The full caret presentation: shape plus opacity in `[0, 1]`.
///
/// Recomputed on every triggering event; it has no persistent identity of
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaretDescriptor {
    pub display: CaretDisplay,
    pub opacity: f64,
}

impl CaretDescriptor {
    pub fn new(display: CaretDisplay, opacity: f64) -> Self {
        Self { display, opacity }
    }
}

/// The host caret resource.
///
/// Owned by the host view; this system only adjusts its presentation and
/// releases it on buffer close.
pub trait CaretCap {
    /// Moves the caret and returns the location it landed on.
    fn move_to(&mut self, location: TextLocation) -> TextLocation;
    /// Scrolls the caret into view.
    fn ensure_visible(&mut self);
    fn is_hidden(&self) -> bool;
    fn set_hidden(&mut self, hidden: bool);
    fn set_display(&mut self, display: CaretDisplay);
    fn set_opacity(&mut self, opacity: f64);
    /// Releases the host caret resource. Idempotent.
    fn destroy(&mut self);
}
