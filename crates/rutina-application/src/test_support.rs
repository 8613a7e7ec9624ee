//! Scripted mock of the remote model for tests.
//!
//! The interview script is enforced by the real model's
//! instruction-following, so tests drive the session and controller with
//! canned replies instead of asserting live-model behavior.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rutina_core::{EncodedFile, Result};
use rutina_interaction::{Dialogue, ModelClient};

/// A `ModelClient` that hands out dialogues replaying canned replies.
pub struct ScriptedClient {
    replies: Arc<Mutex<VecDeque<Result<Option<String>>>>>,
    /// System instructions of every dialogue opened, in order.
    pub opened: Mutex<Vec<String>>,
    /// Text of every turn sent across all dialogues, in order.
    pub sent: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<Option<String>>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Arc::new(Mutex::new(replies.into())),
            opened: Mutex::new(Vec::new()),
            sent: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn opened_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }
}

impl ModelClient for ScriptedClient {
    fn open_dialogue(&self, system_instruction: &str) -> Box<dyn Dialogue> {
        self.opened
            .lock()
            .unwrap()
            .push(system_instruction.to_string());
        Box::new(ScriptedDialogue {
            replies: self.replies.clone(),
            sent: self.sent.clone(),
        })
    }
}

struct ScriptedDialogue {
    replies: Arc<Mutex<VecDeque<Result<Option<String>>>>>,
    sent: Arc<Mutex<Vec<String>>>,
}

impl ScriptedDialogue {
    fn next_reply(&self) -> Result<Option<String>> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted replies exhausted")
    }
}

#[async_trait]
impl Dialogue for ScriptedDialogue {
    async fn send_file_turn(&mut self, file: &EncodedFile, text: &str) -> Result<Option<String>> {
        self.sent
            .lock()
            .unwrap()
            .push(format!("[file:{}] {}", file.name, text));
        self.next_reply()
    }

    async fn send_text_turn(&mut self, text: &str) -> Result<Option<String>> {
        self.sent.lock().unwrap().push(text.to_string());
        self.next_reply()
    }
}
