//! Store key builders for all GitShelf entries.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the application uses.

/// Store key for a share record by id.
pub fn share_record(id: &str) -> String {
    format!("share:{id}")
}

/// Prefix matching every share record key.
pub fn share_prefix() -> &'static str {
    "share:"
}

/// Extract the share id back out of a record key.
pub fn share_id_from_key(key: &str) -> Option<&str> {
    key.strip_prefix(share_prefix())
}
