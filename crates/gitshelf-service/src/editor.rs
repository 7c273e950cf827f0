//! File editing — fetch-for-edit and the optimistic-concurrency write.

use std::sync::Arc;

use tracing::info;

use gitshelf_core::traits::source::{ContentSource, RemoteEntry, WriteOutcome};
use gitshelf_core::types::VirtualPath;
use gitshelf_core::{AppError, AppResult};
use gitshelf_github::codec;

/// A file prepared for the editor: decoded text plus the version token the
/// save must present.
#[derive(Debug, Clone)]
pub struct EditableFile {
    /// File name for display.
    pub name: String,
    /// Current version token (blob SHA).
    pub sha: String,
    /// Decoded text content.
    pub content: String,
}

/// Coordinates file edits against the upstream host.
///
/// The version token is the only concurrency mechanism: no lock is held
/// across the read-edit-write session, and a rejected write is returned
/// as a typed conflict for the caller to handle (re-fetch, no automatic
/// retry).
#[derive(Debug, Clone)]
pub struct EditorService {
    /// Upstream content source.
    source: Arc<dyn ContentSource>,
}

impl EditorService {
    /// Creates a new editor service.
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Fetch a file's decoded content and version token for editing.
    pub async fn fetch_for_edit(&self, path: &VirtualPath) -> AppResult<EditableFile> {
        let entry = self.source.entry(path).await?;

        let descriptor = match entry {
            RemoteEntry::File(descriptor) => descriptor,
            RemoteEntry::Listing(_) => {
                return Err(AppError::validation(format!("{path} is a directory")));
            }
        };

        let content = match (descriptor.encoding.as_deref(), descriptor.content) {
            (Some("base64"), Some(encoded)) => codec::decode(&encoded)?,
            (_, Some(raw)) => raw,
            (_, None) => String::new(),
        };

        Ok(EditableFile {
            name: descriptor.name,
            sha: descriptor.sha,
            content,
        })
    }

    /// Submit an edited file with `sha` as the compare-and-swap
    /// precondition.
    pub async fn write(
        &self,
        path: &VirtualPath,
        sha: &str,
        content: &str,
    ) -> AppResult<WriteOutcome> {
        let outcome = self.source.write_file(path, sha, content).await?;

        match &outcome {
            WriteOutcome::Committed => {
                info!(%path, "File updated");
            }
            WriteOutcome::Conflict { status, .. } => {
                info!(%path, status, "File update rejected: stale version token");
            }
        }

        Ok(outcome)
    }
}
