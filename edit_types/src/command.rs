//! Command-line entry context and the external runner's result

use serde::{Deserialize, Serialize};

/// Seed text for a command line entered from an active visual selection:
/// the conventional range marker denoting "the current visual selection".
pub const VISUAL_RANGE_SEED: &str = "'<,'>";

/// How command-line mode was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOrigin {
    /// Entered directly, with an empty command line
    Plain,
    /// Entered from an active visual selection; the command line starts
    /// with [`VISUAL_RANGE_SEED`]
    FromVisual,
}

impl CommandOrigin {
    /// The text a fresh command line starts with for this origin.
    pub fn seed(&self) -> &'static str {
        match self {
            CommandOrigin::Plain => "",
            CommandOrigin::FromVisual => VISUAL_RANGE_SEED,
        }
    }
}

/// Result of running a finished command, reported by the external command
/// runner. The command-line layer surfaces it but never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunResult {
    /// The command ran to completion
    Completed,
    /// The command started a substitute-confirm session
    SubstituteConfirmActive,
    /// The command failed; the runner has already reported the error
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_seed_exact_characters() {
        let mut chars = VISUAL_RANGE_SEED.chars();
        assert_eq!(chars.next(), Some('\''));
        assert_eq!(chars.next(), Some('<'));
        assert_eq!(chars.next(), Some(','));
        assert_eq!(chars.next(), Some('\''));
        assert_eq!(chars.next(), Some('>'));
        assert_eq!(chars.next(), None);
    }

    #[test]
    fn test_origin_seed() {
        assert_eq!(CommandOrigin::Plain.seed(), "");
        assert_eq!(CommandOrigin::FromVisual.seed(), VISUAL_RANGE_SEED);
    }
}
