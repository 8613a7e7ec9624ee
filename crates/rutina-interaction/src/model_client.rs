//! Remote model client traits.
//!
//! The application layer drives the remote model exclusively through these
//! traits, so tests can substitute a scripted implementation and the core
//! never depends on a concrete provider.

use async_trait::async_trait;
use rutina_core::{EncodedFile, Result};

/// One stateful dialogue with the remote model.
///
/// A dialogue preserves conversational context across turns. The first turn
/// carries the encoded routine file as an inline content part; every later
/// turn is plain text.
///
/// `Ok(None)` means the remote call succeeded but produced no text; callers
/// mask it with fallback copy rather than treating it as a failure. `Err`
/// is reserved for transport, protocol, and quota failures.
#[async_trait]
pub trait Dialogue: Send + Sync {
    /// Sends the opening turn: inline file content plus a trigger prompt.
    async fn send_file_turn(&mut self, file: &EncodedFile, text: &str) -> Result<Option<String>>;

    /// Sends a plain-text follow-up turn.
    async fn send_text_turn(&mut self, text: &str) -> Result<Option<String>>;
}

/// Factory for dialogues with a remote model.
///
/// Opening a dialogue is a local operation: no network traffic happens until
/// the first turn is sent.
pub trait ModelClient: Send + Sync {
    /// Opens a new dialogue constrained by the given system instruction.
    fn open_dialogue(&self, system_instruction: &str) -> Box<dyn Dialogue>;
}
