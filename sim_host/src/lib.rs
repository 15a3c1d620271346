//! # Sim Host
//!
//! Simulated host capabilities for testing the Vigil front-end services
//! without a real editor view.
//!
//! Every capability contract from `host_caps` is implemented with fully
//! inspectable state: tests can read back what was pushed at the caret,
//! which commands the runner received, and whether the selection was
//! cleared.

use std::cell::Cell;

use edit_types::{Mode, RunResult};
use event_source::EventSource;
use host_caps::{
    BufferEvent, CaretCap, CaretDisplay, CommandRunner, EditorBufferCap, SelectionCap,
    SelectionSpan, TextLocation, TextViewCap,
};

/// Host view that a test can close.
#[derive(Debug, Default)]
pub struct SimTextView {
    closed: bool,
}

impl SimTextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl TextViewCap for SimTextView {
    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Host selection with a settable span.
#[derive(Debug, Default)]
pub struct SimSelection {
    span: Option<SelectionSpan>,
    clear_count: usize,
}

impl SimSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, span: SelectionSpan) {
        self.span = Some(span);
    }

    /// How many times `clear` has been called.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl SelectionCap for SimSelection {
    fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    fn clear(&mut self) {
        self.span = None;
        self.clear_count += 1;
    }

    fn stream_span(&self) -> SelectionSpan {
        self.span
            .unwrap_or_else(|| SelectionSpan::new(TextLocation::origin(), TextLocation::origin()))
    }
}

/// Host caret that records everything pushed at it.
#[derive(Debug)]
pub struct SimCaret {
    location: TextLocation,
    hidden: bool,
    display: CaretDisplay,
    opacity: f64,
    destroyed: bool,
    moves: Vec<TextLocation>,
    ensure_visible_count: usize,
}

impl SimCaret {
    pub fn new() -> Self {
        Self {
            location: TextLocation::origin(),
            hidden: false,
            display: CaretDisplay::NormalCaret,
            opacity: 1.0,
            destroyed: false,
            moves: Vec::new(),
            ensure_visible_count: 0,
        }
    }

    pub fn location(&self) -> TextLocation {
        self.location
    }

    pub fn display(&self) -> CaretDisplay {
        self.display
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Every location `move_to` was called with, in order.
    pub fn moves(&self) -> &[TextLocation] {
        &self.moves
    }

    pub fn ensure_visible_count(&self) -> usize {
        self.ensure_visible_count
    }
}

impl Default for SimCaret {
    fn default() -> Self {
        Self::new()
    }
}

impl CaretCap for SimCaret {
    fn move_to(&mut self, location: TextLocation) -> TextLocation {
        self.location = location;
        self.moves.push(location);
        location
    }

    fn ensure_visible(&mut self) {
        self.ensure_visible_count += 1;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_display(&mut self, display: CaretDisplay) {
        self.display = display;
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// Command runner that records every dispatched command.
#[derive(Debug)]
pub struct RecordingRunner {
    commands: Vec<String>,
    result: RunResult,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            result: RunResult::Completed,
        }
    }

    /// Sets the result the next runs will report.
    pub fn set_result(&mut self, result: RunResult) {
        self.result = result;
    }

    /// Every command string received, in dispatch order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<&str> {
        self.commands.last().map(|command| command.as_str())
    }

    pub fn run_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run_command(&mut self, command: &str) -> RunResult {
        self.commands.push(command.to_string());
        self.result
    }
}

/// Host buffer: the current mode plus the notification source.
///
/// The mode lives in a `Cell` and is stored before the notification goes
/// out, so subscribers read the new value re-entrantly.
pub struct SimEditorBuffer {
    mode: Cell<Mode>,
    events: EventSource<BufferEvent>,
}

impl SimEditorBuffer {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode: Cell::new(mode),
            events: EventSource::new(),
        }
    }

    pub fn events(&self) -> &EventSource<BufferEvent> {
        &self.events
    }

    /// Updates the mode without notifying anyone. Pairs with a later
    /// forced recomputation through the controller's `update`.
    pub fn set_mode(&self, mode: Mode) {
        self.mode.set(mode);
    }

    /// Updates the mode, then notifies subscribers.
    pub fn switch_mode(&self, mode: Mode) {
        self.mode.set(mode);
        self.events.emit(&BufferEvent::SwitchedMode);
    }

    pub fn begin_key_input(&self) {
        self.events.emit(&BufferEvent::KeyInputStart);
    }

    pub fn end_key_input(&self) {
        self.events.emit(&BufferEvent::KeyInputEnd);
    }

    pub fn close(&self) {
        self.events.emit(&BufferEvent::Closed);
    }
}

impl EditorBufferCap for SimEditorBuffer {
    fn mode(&self) -> Mode {
        self.mode.get()
    }
}
