//! Domain layer for Rutina.
//!
//! Contains the shared error type, the conversation transcript models, the
//! application phase, and the upload encoder. No network code lives here.

pub mod error;
pub mod message;
pub mod phase;
pub mod upload;

// Re-export common types
pub use error::{Result, RutinaError};
pub use message::{Message, Sender};
pub use phase::AppPhase;
pub use upload::{ALLOWED_MIME_TYPES, EncodedFile, MAX_UPLOAD_BYTES, encode_bytes, encode_file};
