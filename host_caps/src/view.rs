//! View, selection, buffer, and command-runner contracts

use crate::location::SelectionSpan;
use edit_types::{Mode, RunResult};
use serde::{Deserialize, Serialize};

/// Notifications emitted by the host buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferEvent {
    /// The buffer changed mode
    SwitchedMode,
    /// The buffer began processing a key
    KeyInputStart,
    /// The buffer finished processing a key
    KeyInputEnd,
    /// The buffer was closed; host resources are about to go away
    Closed,
}

/// Read access to the host view lifecycle.
pub trait TextViewCap {
    /// True once the view has been torn down. No caret or selection
    /// operation may be attempted past this point.
    fn is_closed(&self) -> bool;
}

/// The host selection, reachable only for inspection and clearing.
pub trait SelectionCap {
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
    /// The currently selected span. Only meaningful while non-empty.
    fn stream_span(&self) -> SelectionSpan;
}

/// The external command runner.
///
/// Invoked at most once per command-line session, only by the Enter key.
pub trait CommandRunner {
    fn run_command(&mut self, command: &str) -> RunResult;
}

/// Read access to the host buffer's current mode and sub-state.
pub trait EditorBufferCap {
    fn mode(&self) -> Mode;
}
