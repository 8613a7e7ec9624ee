//! Application phase domain model.

use serde::{Deserialize, Serialize};

/// The three-phase lifecycle of one upload-to-chat flow.
///
/// This is the single source of truth for which view the presentation layer
/// renders. Transitions are driven exclusively by the
/// `ConversationController`:
///
/// - `Upload -> Analyzing` on a validated file selection
/// - `Analyzing -> Chat` when the initial analysis succeeds
/// - `Analyzing -> Upload` when the initial analysis fails
///
/// There is no path from `Chat` back to `Upload` short of restarting the
/// application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPhase {
    /// Waiting for the user to select a routine file.
    #[default]
    Upload,
    /// The file was accepted and the initial analysis is in flight.
    Analyzing,
    /// The interview conversation is running.
    Chat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_upload() {
        assert_eq!(AppPhase::default(), AppPhase::Upload);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AppPhase::Analyzing).unwrap(),
            "\"analyzing\""
        );
    }
}
