//! UI-facing conversation controller.
//!
//! Drives the Upload -> Analyzing -> Chat lifecycle, owns the append-only
//! message log, and is the only caller of `ConversationSession`. The
//! presentation layer calls [`ConversationController::on_file_select`] and
//! [`ConversationController::on_send_message`] and renders from the
//! accessors; it is expected to disable input while `is_loading` is true,
//! with the controller's own guards as the backstop.

use rutina_core::{AppPhase, EncodedFile, Message};

use crate::session::ConversationSession;

/// Blocking notice shown when the initial analysis fails.
pub const ANALYSIS_ERROR_NOTICE: &str =
    "Hubo un error analizando tu archivo. Por favor intenta con una imagen más clara o un PDF válido.";

/// The application state machine for one upload-to-chat flow.
pub struct ConversationController {
    session: ConversationSession,
    phase: AppPhase,
    messages: Vec<Message>,
    is_loading: bool,
    notice: Option<String>,
}

impl ConversationController {
    /// Creates a controller in the initial state: upload phase, empty
    /// transcript, not loading.
    pub fn new(session: ConversationSession) -> Self {
        Self {
            session,
            phase: AppPhase::Upload,
            messages: Vec::new(),
            is_loading: false,
            notice: None,
        }
    }

    /// Handles a validated file selection.
    ///
    /// Moves to `Analyzing` and sets the loading flag before the remote
    /// call resolves, so the pending indicator shows with no messages yet.
    /// On success the first bot message is appended and the phase becomes
    /// `Chat`; on failure the phase reverts to `Upload` with a user-visible
    /// notice, the transcript untouched, and the file must be re-selected.
    pub async fn on_file_select(&mut self, file: EncodedFile) {
        if self.is_loading {
            tracing::warn!("[ConversationController] File select ignored: operation in flight");
            return;
        }
        if self.phase != AppPhase::Upload {
            tracing::warn!(
                "[ConversationController] File select ignored in phase {:?}",
                self.phase
            );
            return;
        }

        self.notice = None;
        self.is_loading = true;
        self.phase = AppPhase::Analyzing;

        match self.session.begin_analysis(file).await {
            Ok(text) => {
                self.messages.push(Message::bot(text));
                self.phase = AppPhase::Chat;
            }
            Err(err) => {
                tracing::error!("[ConversationController] Analysis failed: {}", err);
                self.session.reset();
                self.phase = AppPhase::Upload;
                self.notice = Some(ANALYSIS_ERROR_NOTICE.to_string());
            }
        }

        self.is_loading = false;
    }

    /// Handles a chat message from the user.
    ///
    /// The user message is appended optimistically before the remote call.
    /// On success the bot reply is appended; on failure nothing is appended
    /// and the error is only logged, leaving the user free to retry by
    /// sending again.
    pub async fn on_send_message(&mut self, text: &str) {
        if self.is_loading {
            tracing::warn!("[ConversationController] Send ignored: operation in flight");
            return;
        }
        if self.phase != AppPhase::Chat {
            tracing::warn!(
                "[ConversationController] Send ignored in phase {:?}",
                self.phase
            );
            return;
        }

        self.messages.push(Message::user(text));
        self.is_loading = true;

        match self.session.send_follow_up(text).await {
            Ok(reply) => {
                self.messages.push(Message::bot(reply));
            }
            Err(err) => {
                // The optimistic user message stays in the transcript.
                tracing::error!("[ConversationController] Follow-up failed: {}", err);
            }
        }

        self.is_loading = false;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> AppPhase {
        self.phase
    }

    /// Whether an operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The ordered conversation transcript.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The pending analysis-failure notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Clears the failure notice once the presentation layer has shown it.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
