//! Upload validation and encoding.
//!
//! This module contains the `EncodedFile` domain model and the file encoder
//! that turns a routine file on disk into the text-safe representation the
//! remote model consumes as an inline content part.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RutinaError};

/// Media types accepted for routine uploads.
pub const ALLOWED_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/webp",
];

/// Uploads of this size or more are rejected (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// An uploaded routine file, validated and encoded for transmission.
///
/// `data` holds the bare base64 payload with no transport-envelope prefix
/// (no `data:<mime>;base64,` header). Immutable once constructed; consumed
/// exactly once to open an analysis dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedFile {
    /// Base64-encoded file content.
    pub data: String,
    /// Declared media type, one of [`ALLOWED_MIME_TYPES`].
    pub mime_type: String,
    /// Original file name, for display.
    pub name: String,
}

/// Checks the declared media type and size against the upload limits.
///
/// The type check runs first, then the size check; both operate on metadata
/// only, before any byte of content is read.
fn validate(mime_type: &str, size: u64) -> Result<()> {
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(RutinaError::unsupported_format(mime_type));
    }
    if size >= MAX_UPLOAD_BYTES {
        return Err(RutinaError::file_too_large(size, MAX_UPLOAD_BYTES));
    }
    Ok(())
}

/// Maps a file extension to its declared media type.
///
/// Mirrors what a browser reports as `file.type`; unknown extensions map to
/// an empty string so validation fails with `UnsupportedFormat`.
fn mime_from_extension(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "",
    }
    .to_string()
}

/// Validates and encodes in-memory file content.
///
/// Used by callers that already hold the bytes (e.g. a presentation layer
/// that received them over IPC).
pub fn encode_bytes(name: &str, mime_type: &str, bytes: &[u8]) -> Result<EncodedFile> {
    validate(mime_type, bytes.len() as u64)?;

    Ok(EncodedFile {
        data: BASE64_STANDARD.encode(bytes),
        mime_type: mime_type.to_string(),
        name: name.to_string(),
    })
}

/// Validates and encodes a routine file from disk.
///
/// The media type is inferred from the extension and checked together with
/// the size reported by file metadata before the content is read. IO errors
/// while stat-ing or reading the file surface as `ReadFailure`.
pub async fn encode_file(path: impl AsRef<Path>) -> Result<EncodedFile> {
    let path = path.as_ref();
    let mime_type = mime_from_extension(path);
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("routine")
        .to_string();

    if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
        return Err(RutinaError::unsupported_format(mime_type));
    }

    let metadata = tokio::fs::metadata(path).await?;
    validate(&mime_type, metadata.len())?;

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(
        "[FileEncoder] Encoded '{}' ({} bytes, {})",
        name,
        bytes.len(),
        mime_type
    );

    Ok(EncodedFile {
        data: BASE64_STANDARD.encode(&bytes),
        mime_type,
        name,
    })
}
