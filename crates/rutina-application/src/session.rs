//! Conversation session: one dialogue with the remote coach.

use std::sync::Arc;

use rutina_core::{EncodedFile, Result, RutinaError};
use rutina_interaction::{
    ANALYSIS_FALLBACK, ANALYSIS_TRIGGER, Dialogue, FOLLOW_UP_FALLBACK, ModelClient,
    SYSTEM_INSTRUCTION,
};

/// Owns at most one live dialogue with the remote model.
///
/// The dialogue handle is single-owner with a replace-invalidates-previous
/// policy: `begin_analysis` always opens a fresh dialogue and any prior one
/// becomes unreachable. Empty-but-successful replies are masked with fixed
/// fallback copy; only transport and protocol failures surface as errors.
pub struct ConversationSession {
    client: Arc<dyn ModelClient>,
    dialogue: Option<Box<dyn Dialogue>>,
}

impl ConversationSession {
    /// Creates a session backed by the given model client.
    ///
    /// No dialogue exists until [`begin_analysis`](Self::begin_analysis) is
    /// called.
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
            dialogue: None,
        }
    }

    /// Opens a new dialogue and sends the encoded routine as the first turn.
    ///
    /// The dialogue is configured with the fixed interview script and the
    /// file is sent together with the trigger prompt. Returns the model's
    /// first reply. A single failure surfaces immediately; there is no
    /// retry, and the session stays uninitialized.
    pub async fn begin_analysis(&mut self, file: EncodedFile) -> Result<String> {
        // Any previous dialogue is invalidated up front.
        self.dialogue = None;

        let mut dialogue = self.client.open_dialogue(SYSTEM_INSTRUCTION);
        let reply = dialogue.send_file_turn(&file, ANALYSIS_TRIGGER).await?;
        self.dialogue = Some(dialogue);

        Ok(reply.unwrap_or_else(|| ANALYSIS_FALLBACK.to_string()))
    }

    /// Relays a follow-up turn through the existing dialogue.
    ///
    /// # Errors
    ///
    /// `SessionNotInitialized` if no analysis has opened a dialogue yet;
    /// `Remote` on transport or protocol failure.
    pub async fn send_follow_up(&mut self, text: &str) -> Result<String> {
        let dialogue = self
            .dialogue
            .as_mut()
            .ok_or(RutinaError::SessionNotInitialized)?;

        let reply = dialogue.send_text_turn(text).await?;
        Ok(reply.unwrap_or_else(|| FOLLOW_UP_FALLBACK.to_string()))
    }

    /// Drops the dialogue handle, returning the session to its initial
    /// uninitialized state. Called when a failed analysis sends the flow
    /// back to the upload phase.
    pub fn reset(&mut self) {
        self.dialogue = None;
    }

    /// Whether a dialogue is currently open.
    pub fn is_active(&self) -> bool {
        self.dialogue.is_some()
    }
}
