//! # Global Settings
//!
//! Process-wide editor settings with change notifications.
//!
//! ## Philosophy
//!
//! - **Typed settings**: every setting has an explicit type, not a string
//! - **Identity in the notification**: a change carries which setting
//!   changed, so subscribers recompute only what that setting affects
//! - **Unvalidated store**: setters accept values verbatim, including
//!   out-of-range ones; range enforcement belongs to the consumer
//! - **Outlives sessions**: the store lives as long as the process, so
//!   subscribers must release their registration when their session ends
//!
//! ## Example
//!
//! ```
//! use global_settings::GlobalSettings;
//!
//! let settings = GlobalSettings::new();
//! let _watch = settings.subscribe(|kind| {
//!     println!("changed: {:?}", kind);
//! });
//! settings.set_caret_opacity(80);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use event_source::{EventSource, Subscription};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of a setting, carried by change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKind {
    /// Caret opacity percentage (the consumer honors `0..=100`)
    CaretOpacity,
    /// Whether visual selections include the character under the caret
    SelectionInclusive,
}

impl SettingKind {
    /// The setting's user-facing name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::CaretOpacity => "caretopacity",
            SettingKind::SelectionInclusive => "selection",
        }
    }
}

/// A typed setting value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    Integer(i64),
    Boolean(bool),
}

impl SettingValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            SettingValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

/// Settings error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("wrong value type for '{}': expected {expected}", .setting.as_str())]
    TypeMismatch {
        setting: SettingKind,
        expected: &'static str,
    },
}

const DEFAULT_CARET_OPACITY: i64 = 65;
const DEFAULT_SELECTION_INCLUSIVE: bool = true;

struct SettingsState {
    caret_opacity: i64,
    selection_inclusive: bool,
}

/// Process-wide editor settings.
///
/// Handles are cheap to clone; all clones share one store.
#[derive(Clone)]
pub struct GlobalSettings {
    state: Rc<RefCell<SettingsState>>,
    changed: EventSource<SettingKind>,
}

impl GlobalSettings {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SettingsState {
                caret_opacity: DEFAULT_CARET_OPACITY,
                selection_inclusive: DEFAULT_SELECTION_INCLUSIVE,
            })),
            changed: EventSource::new(),
        }
    }

    /// Caret opacity percentage, stored verbatim (may be out of range).
    pub fn caret_opacity(&self) -> i64 {
        self.state.borrow().caret_opacity
    }

    pub fn set_caret_opacity(&self, value: i64) {
        self.state.borrow_mut().caret_opacity = value;
        self.changed.emit(&SettingKind::CaretOpacity);
    }

    pub fn selection_inclusive(&self) -> bool {
        self.state.borrow().selection_inclusive
    }

    pub fn set_selection_inclusive(&self, value: bool) {
        self.state.borrow_mut().selection_inclusive = value;
        self.changed.emit(&SettingKind::SelectionInclusive);
    }

    /// The current value of a setting, typed.
    pub fn get(&self, kind: SettingKind) -> SettingValue {
        match kind {
            SettingKind::CaretOpacity => SettingValue::Integer(self.caret_opacity()),
            SettingKind::SelectionInclusive => SettingValue::Boolean(self.selection_inclusive()),
        }
    }

    /// Untyped host surface: stores `value` if its type matches `kind`.
    pub fn set(&self, kind: SettingKind, value: SettingValue) -> Result<(), SettingsError> {
        match (kind, value) {
            (SettingKind::CaretOpacity, SettingValue::Integer(opacity)) => {
                self.set_caret_opacity(opacity);
                Ok(())
            }
            (SettingKind::CaretOpacity, _) => Err(SettingsError::TypeMismatch {
                setting: kind,
                expected: "integer",
            }),
            (SettingKind::SelectionInclusive, SettingValue::Boolean(inclusive)) => {
                self.set_selection_inclusive(inclusive);
                Ok(())
            }
            (SettingKind::SelectionInclusive, _) => Err(SettingsError::TypeMismatch {
                setting: kind,
                expected: "boolean",
            }),
        }
    }

    /// Registers a change observer. The registration lives until the
    /// returned handle is dropped or released.
    pub fn subscribe(&self, callback: impl FnMut(&SettingKind) + 'static) -> Subscription {
        self.changed.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.changed.subscriber_count()
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GlobalSettings::new();
        assert_eq!(settings.caret_opacity(), 65);
        assert!(settings.selection_inclusive());
    }

    #[test]
    fn test_typed_setters_notify_with_identity() {
        let settings = GlobalSettings::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _watch = settings.subscribe(move |kind| sink.borrow_mut().push(*kind));

        settings.set_caret_opacity(40);
        settings.set_selection_inclusive(false);

        assert_eq!(
            *seen.borrow(),
            vec![SettingKind::CaretOpacity, SettingKind::SelectionInclusive]
        );
        assert_eq!(settings.caret_opacity(), 40);
        assert!(!settings.selection_inclusive());
    }

    #[test]
    fn test_out_of_range_opacity_is_stored_verbatim() {
        let settings = GlobalSettings::new();
        settings.set_caret_opacity(250);
        assert_eq!(settings.caret_opacity(), 250);
    }

    #[test]
    fn test_untyped_set_matching_type() {
        let settings = GlobalSettings::new();
        settings
            .set(SettingKind::CaretOpacity, SettingValue::Integer(30))
            .unwrap();
        assert_eq!(settings.get(SettingKind::CaretOpacity).as_integer(), Some(30));
    }

    #[test]
    fn test_untyped_set_type_mismatch() {
        let settings = GlobalSettings::new();
        let error = settings
            .set(SettingKind::CaretOpacity, SettingValue::Boolean(true))
            .unwrap_err();
        assert_eq!(
            error,
            SettingsError::TypeMismatch {
                setting: SettingKind::CaretOpacity,
                expected: "integer",
            }
        );
        // Store untouched on a rejected set.
        assert_eq!(settings.caret_opacity(), 65);
    }

    #[test]
    fn test_dropped_watch_stops_receiving() {
        let settings = GlobalSettings::new();
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let watch = settings.subscribe(move |_| *sink.borrow_mut() += 1);

        settings.set_caret_opacity(10);
        drop(watch);
        settings.set_caret_opacity(20);

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(settings.subscriber_count(), 0);
    }

    #[test]
    fn test_clones_share_the_store() {
        let settings = GlobalSettings::new();
        let other = settings.clone();
        other.set_caret_opacity(12);
        assert_eq!(settings.caret_opacity(), 12);
    }

    #[test]
    fn test_setting_names() {
        assert_eq!(SettingKind::CaretOpacity.as_str(), "caretopacity");
        assert_eq!(SettingKind::SelectionInclusive.as_str(), "selection");
    }
}
