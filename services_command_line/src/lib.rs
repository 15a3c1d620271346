//! # Command Line Service
//!
//! The command-line input engine for the Vigil editor front end.
//!
//! ## Philosophy
//!
//! - **One dispatch per entry**: the external runner is invoked at most
//!   once per command-line session, only by the Enter key
//! - **Total input**: every character is valid command-line input; there
//!   is no validation layer
//! - **Explicit transitions**: Backspace means "edit" or "cancel"
//!   depending on whether text remains, and the two are separate guarded
//!   transitions, not one ambiguous handler branch
//! - **Capability access only**: the view, selection, caret, and runner
//!   are injected host capabilities
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A command grammar or parser (the runner owns that)
//! - Command history (the host's runner retains what it wants)
//! - Rendering of the command line

use std::cell::RefCell;
use std::rc::Rc;

use edit_types::{CommandKey, CommandOrigin, RunResult};
use host_caps::{CaretCap, CommandRunner, SelectionCap, TextViewCap};

/// Outcome of feeding one key to the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Still accumulating input
    Pending,
    /// The command was dispatched and the session ended
    Executed(RunResult),
    /// The session ended without dispatching
    Cancelled,
}

impl ProcessOutcome {
    /// True when the key ended the command-line session. The host switches
    /// the buffer mode after observing this, so the mode transition is the
    /// last effect of leaving.
    pub fn leaves_mode(&self) -> bool {
        !matches!(self, ProcessOutcome::Pending)
    }
}

/// Accumulates command-line input and runs the finished command exactly
/// once per entry.
pub struct CommandLineProcessor {
    view: Rc<RefCell<dyn TextViewCap>>,
    selection: Rc<RefCell<dyn SelectionCap>>,
    caret: Rc<RefCell<dyn CaretCap>>,
    runner: Rc<RefCell<dyn CommandRunner>>,
    command: String,
    active: bool,
}

impl CommandLineProcessor {
    pub fn new(
        view: Rc<RefCell<dyn TextViewCap>>,
        selection: Rc<RefCell<dyn SelectionCap>>,
        caret: Rc<RefCell<dyn CaretCap>>,
        runner: Rc<RefCell<dyn CommandRunner>>,
    ) -> Self {
        Self {
            view,
            selection,
            caret,
            runner,
            command: String::new(),
            active: false,
        }
    }

    /// The accumulated command text.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begins a command-line session.
    ///
    /// Always resets the text: empty, or the visual range seed when the
    /// mode was entered from an active visual selection. The host caret is
    /// hidden for the duration of the session.
    pub fn enter(&mut self, origin: CommandOrigin) {
        self.command.clear();
        self.command.push_str(origin.seed());
        self.active = true;
        self.caret.borrow_mut().set_hidden(true);
    }

    /// Forced exit by another component (focus change, window teardown).
    ///
    /// Never touches the text: a prior run may have left status or error
    /// text that must stay visible. Entering clears, leaving does not.
    pub fn leave(&mut self) {
        self.active = false;
        self.caret.borrow_mut().set_hidden(false);
    }

    /// Feeds one key to the session.
    pub fn process(&mut self, key: CommandKey) -> ProcessOutcome {
        match key {
            CommandKey::Char(ch) => {
                self.command.push(ch);
                ProcessOutcome::Pending
            }
            CommandKey::Backspace => {
                if self.command.pop().is_some() {
                    ProcessOutcome::Pending
                } else {
                    // Deleting past the start cancels, exactly like Escape.
                    self.finish_session();
                    ProcessOutcome::Cancelled
                }
            }
            CommandKey::Enter => {
                // An empty command is still a valid run.
                let result = self.runner.borrow_mut().run_command(&self.command);
                // The runner's verdict does not change the exit protocol.
                self.finish_session();
                ProcessOutcome::Executed(result)
            }
            CommandKey::Escape => {
                self.finish_session();
                ProcessOutcome::Cancelled
            }
        }
    }

    /// Shared exit path: reset the text, deactivate, clean up any live
    /// selection.
    fn finish_session(&mut self) {
        self.command.clear();
        self.active = false;
        self.clean_up_selection();
    }

    /// If the view is open and a selection exists: capture its start,
    /// clear it, then park the caret on the captured start and scroll it
    /// into view. Clear before move, never the other way around.
    fn clean_up_selection(&mut self) {
        if self.view.borrow().is_closed() {
            return;
        }
        let start = {
            let selection = self.selection.borrow();
            if selection.is_empty() {
                return;
            }
            selection.stream_span().start
        };
        self.selection.borrow_mut().clear();
        let mut caret = self.caret.borrow_mut();
        caret.move_to(start);
        caret.ensure_visible();
    }
}
