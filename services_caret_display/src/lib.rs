//! # Caret Display Service
//!
//! Keeps the host caret's shape and opacity synchronized with editor
//! state, and frees the caret resource on shutdown.
//!
//! The shape is a pure function of (mode, sub-state,
//! selection-inclusivity); the controller's only job is to recompute it on
//! the right notifications and push it at the host caret capability.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use edit_types::Mode;
use event_source::{EventSource, Subscription};
use global_settings::{GlobalSettings, SettingKind};
use host_caps::{BufferEvent, CaretCap, CaretDescriptor, CaretDisplay, EditorBufferCap};

/// Maps editor state to the caret shape the host should draw.
///
/// Total over every mode; identical inputs always yield the identical
/// shape, regardless of call history.
pub fn caret_display_for(mode: Mode, selection_inclusive: bool) -> CaretDisplay {
    match mode {
        Mode::Normal(state) => {
            if state.replace_pending {
                CaretDisplay::QuarterBlock
            } else if state.operator_pending {
                CaretDisplay::HalfBlock
            } else if state.incremental_search {
                CaretDisplay::Invisible
            } else {
                CaretDisplay::Block
            }
        }
        // In visual mode the caret follows the selection mode.
        Mode::VisualCharacter | Mode::VisualLine | Mode::VisualBlock => {
            if selection_inclusive {
                CaretDisplay::Block
            } else {
                CaretDisplay::NormalCaret
            }
        }
        Mode::CommandLine | Mode::SubstituteConfirm => CaretDisplay::Invisible,
        Mode::Insert | Mode::ExternalEdit => CaretDisplay::NormalCaret,
        Mode::Disabled => CaretDisplay::NormalCaret,
        Mode::Replace => CaretDisplay::QuarterBlock,
    }
}

/// Converts the caret-opacity setting to the `[0, 1]` value the host
/// caret takes.
///
/// Out-of-range settings are rejected outright, not clamped; the caller
/// keeps its previous opacity.
pub fn caret_opacity_fraction(value: i64) -> Option<f64> {
    if (0..=100).contains(&value) {
        Some(value as f64 / 100.0)
    } else {
        None
    }
}

struct ControllerState {
    buffer: Rc<dyn EditorBufferCap>,
    caret: Rc<RefCell<dyn CaretCap>>,
    settings: GlobalSettings,
    display: CaretDisplay,
    opacity: f64,
    buffer_subscription: Option<Subscription>,
    settings_subscription: Option<Subscription>,
}

impl ControllerState {
    fn update_display(&mut self) {
        let display = caret_display_for(self.buffer.mode(), self.settings.selection_inclusive());
        self.display = display;
        self.caret.borrow_mut().set_display(display);
    }

    fn update_opacity(&mut self) {
        if let Some(opacity) = caret_opacity_fraction(self.settings.caret_opacity()) {
            self.opacity = opacity;
            self.caret.borrow_mut().set_opacity(opacity);
        }
    }

    fn on_buffer_closed(&mut self) {
        self.caret.borrow_mut().destroy();
        // The settings store outlives this session; keeping the
        // registration alive would leak the controller with it.
        self.settings_subscription.take();
        self.buffer_subscription.take();
    }
}

/// Keeps the host caret presentation in sync with the editor.
pub struct CaretPresentationController {
    state: Rc<RefCell<ControllerState>>,
}

impl CaretPresentationController {
    /// Wires the controller to the buffer's notifications and the global
    /// settings, then computes the initial shape and opacity without
    /// waiting for the first event.
    pub fn new(
        buffer: Rc<dyn EditorBufferCap>,
        buffer_events: &EventSource<BufferEvent>,
        caret: Rc<RefCell<dyn CaretCap>>,
        settings: GlobalSettings,
    ) -> Self {
        let state = Rc::new(RefCell::new(ControllerState {
            buffer,
            caret,
            settings: settings.clone(),
            display: CaretDisplay::Block,
            opacity: 1.0,
            buffer_subscription: None,
            settings_subscription: None,
        }));

        let weak = Rc::downgrade(&state);
        let buffer_subscription = buffer_events.subscribe(move |event| {
            Self::on_buffer_event(&weak, *event);
        });
        let weak = Rc::downgrade(&state);
        let settings_subscription = settings.subscribe(move |kind| {
            Self::on_setting_changed(&weak, *kind);
        });

        {
            let mut state = state.borrow_mut();
            state.buffer_subscription = Some(buffer_subscription);
            state.settings_subscription = Some(settings_subscription);
            state.update_display();
            state.update_opacity();
        }

        Self { state }
    }

    /// Externally forced display recomputation.
    pub fn update(&self) {
        self.state.borrow_mut().update_display();
    }

    /// The shape and opacity currently applied to the host caret.
    pub fn descriptor(&self) -> CaretDescriptor {
        let state = self.state.borrow();
        CaretDescriptor::new(state.display, state.opacity)
    }

    fn on_buffer_event(state: &Weak<RefCell<ControllerState>>, event: BufferEvent) {
        let Some(state) = state.upgrade() else { return };
        let mut state = state.borrow_mut();
        match event {
            BufferEvent::SwitchedMode | BufferEvent::KeyInputStart | BufferEvent::KeyInputEnd => {
                state.update_display();
            }
            BufferEvent::Closed => state.on_buffer_closed(),
        }
    }

    fn on_setting_changed(state: &Weak<RefCell<ControllerState>>, kind: SettingKind) {
        let Some(state) = state.upgrade() else { return };
        let mut state = state.borrow_mut();
        match kind {
            SettingKind::CaretOpacity => state.update_opacity(),
            SettingKind::SelectionInclusive => state.update_display(),
        }
    }
}
