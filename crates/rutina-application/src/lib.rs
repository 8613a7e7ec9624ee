//! Application layer for Rutina.
//!
//! Coordinates the domain and remote-model layers into the two operations
//! the presentation layer calls: begin an analysis from an uploaded routine
//! file, and relay follow-up chat messages.

pub mod controller;
pub mod session;

#[cfg(test)]
mod test_support;

pub use controller::{ANALYSIS_ERROR_NOTICE, ConversationController};
pub use session::ConversationSession;
