//! Error types for the Rutina application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Rutina workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Every variant is recoverable
/// by user action (re-uploading or re-sending); nothing here is fatal to the
/// process.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RutinaError {
    /// The uploaded file's media type is not in the accepted set.
    #[error("Unsupported file format: '{mime_type}'")]
    UnsupportedFormat { mime_type: String },

    /// The uploaded file exceeds the maximum allowed size.
    #[error("File too large: {size} bytes (limit is {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    /// IO failure while reading the uploaded file into memory.
    #[error("Failed to read file: {message}")]
    ReadFailure { message: String },

    /// A follow-up was sent before any analysis opened a dialogue.
    #[error("Chat session not initialized. Upload a routine first.")]
    SessionNotInitialized,

    /// Transport, protocol, or quota failure reported by the remote model.
    #[error("Remote model error: {message}")]
    Remote { message: String },
}

impl RutinaError {
    /// Creates an UnsupportedFormat error.
    pub fn unsupported_format(mime_type: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            mime_type: mime_type.into(),
        }
    }

    /// Creates a FileTooLarge error.
    pub fn file_too_large(size: u64, max: u64) -> Self {
        Self::FileTooLarge { size, max }
    }

    /// Creates a ReadFailure error.
    pub fn read_failure(message: impl Into<String>) -> Self {
        Self::ReadFailure {
            message: message.into(),
        }
    }

    /// Creates a Remote error.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Check if this is a local validation error from the file encoder.
    ///
    /// Validation errors are shown inline near the upload control and never
    /// change the application phase.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. } | Self::FileTooLarge { .. } | Self::ReadFailure { .. }
        )
    }

    /// Check if this is a Remote error.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}

impl From<std::io::Error> for RutinaError {
    fn from(err: std::io::Error) -> Self {
        Self::ReadFailure {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, RutinaError>`.
pub type Result<T> = std::result::Result<T, RutinaError>;
