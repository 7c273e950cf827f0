//! Repository and directory browsing.

use std::sync::Arc;

use gitshelf_core::AppResult;
use gitshelf_core::traits::source::{
    ContentSource, FileDescriptor, FileStream, RemoteEntry, RepoSummary,
};
use gitshelf_core::types::VirtualPath;

/// Read-side browsing over the upstream content source.
///
/// Unlike share resolution, browsing is an authenticated surface, so
/// upstream failures pass through with their original status.
#[derive(Debug, Clone)]
pub struct BrowseService {
    /// Upstream content source.
    source: Arc<dyn ContentSource>,
}

impl BrowseService {
    /// Creates a new browse service.
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// List all repositories, most recently updated first.
    pub async fn repositories(&self) -> AppResult<Vec<RepoSummary>> {
        self.source.list_repositories().await
    }

    /// Resolve a virtual path to a directory listing or a file descriptor.
    pub async fn browse(&self, path: &VirtualPath) -> AppResult<RemoteEntry> {
        self.source.entry(path).await
    }

    /// Open a file's raw byte stream for proxying.
    pub async fn open_file(&self, descriptor: &FileDescriptor) -> AppResult<FileStream> {
        self.source.stream_file(descriptor).await
    }
}
