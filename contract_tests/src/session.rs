//! A fully wired simulated editing session

use std::cell::RefCell;
use std::rc::Rc;

use edit_types::{CommandKey, CommandOrigin, Mode};
use global_settings::GlobalSettings;
use services_caret_display::CaretPresentationController;
use services_command_line::{CommandLineProcessor, ProcessOutcome};
use sim_host::{RecordingRunner, SimCaret, SimEditorBuffer, SimSelection, SimTextView};

/// Settings, simulated host, and both services wired together exactly the
/// way a host adapter wires them.
pub struct SimSession {
    pub settings: GlobalSettings,
    pub view: Rc<RefCell<SimTextView>>,
    pub selection: Rc<RefCell<SimSelection>>,
    pub caret: Rc<RefCell<SimCaret>>,
    pub runner: Rc<RefCell<RecordingRunner>>,
    pub buffer: Rc<SimEditorBuffer>,
    pub processor: CommandLineProcessor,
    pub controller: CaretPresentationController,
}

impl SimSession {
    pub fn new() -> Self {
        let settings = GlobalSettings::new();
        let view = Rc::new(RefCell::new(SimTextView::new()));
        let selection = Rc::new(RefCell::new(SimSelection::new()));
        let caret = Rc::new(RefCell::new(SimCaret::new()));
        let runner = Rc::new(RefCell::new(RecordingRunner::new()));
        let buffer = Rc::new(SimEditorBuffer::new(Mode::normal()));

        let processor = CommandLineProcessor::new(
            view.clone(),
            selection.clone(),
            caret.clone(),
            runner.clone(),
        );
        let controller = CaretPresentationController::new(
            buffer.clone(),
            buffer.events(),
            caret.clone(),
            settings.clone(),
        );

        Self {
            settings,
            view,
            selection,
            caret,
            runner,
            buffer,
            processor,
            controller,
        }
    }

    /// Enters command-line mode the way a host adapter does: switch the
    /// buffer mode, then start the session.
    pub fn enter_command_line(&mut self, origin: CommandOrigin) {
        self.buffer.switch_mode(Mode::CommandLine);
        self.processor.enter(origin);
    }

    /// Feeds one key. On a session-ending outcome the host's side of the
    /// exit runs too: leave the processor, then switch the mode back —
    /// the mode transition is the last effect of leaving, so the caret
    /// controller only observes it after the processor has finished.
    pub fn press(&mut self, key: CommandKey) -> ProcessOutcome {
        self.buffer.begin_key_input();
        let outcome = self.processor.process(key);
        if outcome.leaves_mode() {
            self.processor.leave();
            self.buffer.switch_mode(Mode::normal());
        }
        self.buffer.end_key_input();
        outcome
    }

    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(CommandKey::Char(ch));
        }
    }
}

impl Default for SimSession {
    fn default() -> Self {
        Self::new()
    }
}
