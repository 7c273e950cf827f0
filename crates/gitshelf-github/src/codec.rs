//! Base64/UTF-8 content codec.
//!
//! The Contents API transports file text as base64; responses wrap the
//! payload across lines, so the decoder strips whitespace first. Both
//! directions are byte-exact for multi-byte UTF-8.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use gitshelf_core::{AppError, AppResult};

/// Encode text into the transport encoding.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode transport-encoded text back into a string.
///
/// Tolerates embedded whitespace and newlines in the input.
pub fn decode(encoded: &str) -> AppResult<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AppError::with_source(
            gitshelf_core::error::ErrorKind::Serialization,
            "Invalid base64 content from upstream",
            e,
        ))?;
    String::from_utf8(bytes).map_err(|e| {
        AppError::with_source(
            gitshelf_core::error::ErrorKind::Serialization,
            "Upstream content is not valid UTF-8",
            e,
        )
    })
}
