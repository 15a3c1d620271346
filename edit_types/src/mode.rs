//! Editor modes and Normal-mode sub-state

use core::fmt;
use serde::{Deserialize, Serialize};

/// Sub-state observable only while in Normal mode.
///
/// The flags are independent; consumers that need a single answer (like
/// the caret shape map) resolve them in priority order: replace, then
/// operator-pending, then incremental search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalState {
    /// A replace command is waiting for its argument character.
    pub replace_pending: bool,
    /// An operator is waiting for its motion.
    pub operator_pending: bool,
    /// An incremental search prompt is active.
    pub incremental_search: bool,
}

/// Editor mode
///
/// A closed enumeration: every state the host buffer can be in maps to
/// exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Normal mode (navigation and commands), with its sub-state
    Normal(NormalState),
    /// Insert mode (text entry)
    Insert,
    /// Replace mode (overtype)
    Replace,
    /// Character-wise visual selection
    VisualCharacter,
    /// Line-wise visual selection
    VisualLine,
    /// Block-wise visual selection
    VisualBlock,
    /// Command-line entry (ex commands)
    CommandLine,
    /// Substitute confirmation prompt
    SubstituteConfirm,
    /// Editing disabled
    Disabled,
    /// Buffer is being edited by an external tool
    ExternalEdit,
}

impl Mode {
    /// Normal mode with no sub-state set.
    pub fn normal() -> Self {
        Mode::Normal(NormalState::default())
    }

    /// True for any of the visual variants.
    pub fn is_visual(&self) -> bool {
        matches!(
            self,
            Mode::VisualCharacter | Mode::VisualLine | Mode::VisualBlock
        )
    }

    /// Status-line label for the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal(_) => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Replace => "REPLACE",
            Mode::VisualCharacter => "VISUAL",
            Mode::VisualLine => "VISUAL LINE",
            Mode::VisualBlock => "VISUAL BLOCK",
            Mode::CommandLine => "COMMAND",
            Mode::SubstituteConfirm => "CONFIRM",
            Mode::Disabled => "DISABLED",
            Mode::ExternalEdit => "EXTERNAL",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_normal_default_sub_state() {
        let mode = Mode::normal();
        match mode {
            Mode::Normal(state) => {
                assert!(!state.replace_pending);
                assert!(!state.operator_pending);
                assert!(!state.incremental_search);
            }
            _ => panic!("Expected Normal"),
        }
    }

    #[test]
    fn test_mode_strings() {
        assert_eq!(Mode::normal().as_str(), "NORMAL");
        assert_eq!(Mode::Insert.as_str(), "INSERT");
        assert_eq!(Mode::CommandLine.as_str(), "COMMAND");
        assert_eq!(Mode::SubstituteConfirm.as_str(), "CONFIRM");
        assert_eq!(Mode::ExternalEdit.as_str(), "EXTERNAL");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(format!("{}", Mode::VisualLine), "VISUAL LINE");
        assert_eq!(format!("{}", Mode::normal()), "NORMAL");
    }

    #[test]
    fn test_is_visual() {
        assert!(Mode::VisualCharacter.is_visual());
        assert!(Mode::VisualLine.is_visual());
        assert!(Mode::VisualBlock.is_visual());
        assert!(!Mode::normal().is_visual());
        assert!(!Mode::CommandLine.is_visual());
    }

    #[test]
    fn test_sub_state_distinguishes_modes() {
        let plain = Mode::normal();
        let pending = Mode::Normal(NormalState {
            operator_pending: true,
            ..NormalState::default()
        });
        assert_ne!(plain, pending);
    }

    #[test]
    fn test_mode_serialization_keeps_sub_state() {
        let mode = Mode::Normal(NormalState {
            replace_pending: true,
            ..NormalState::default()
        });
        let json = serde_json::to_string(&mode).unwrap();
        let deserialized: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, deserialized);
    }
}
