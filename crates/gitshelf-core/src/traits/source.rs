//! Content source trait for the upstream repository host.
//!
//! The trait is defined here in `gitshelf-core` and implemented in
//! `gitshelf-github`; tests substitute an in-process fake.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;
use crate::types::VirtualPath;

/// A byte stream type used for proxying file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Summary of one repository visible to the configured identity.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RepoSummary {
    /// Repository name.
    pub name: String,
    /// Whether the repository is private.
    pub private: bool,
    /// Last update time, as reported by the host.
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// The kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A subdirectory.
    Dir,
    /// A regular file.
    File,
    /// Anything else the host reports (symlink, submodule).
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EntrySummary {
    /// Entry name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Size in bytes (zero for directories).
    pub size: u64,
}

/// Metadata of a single file, including its version token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FileDescriptor {
    /// File name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Content version token (blob SHA). Supplied back on writes as the
    /// compare-and-swap precondition.
    pub sha: String,
    /// Opaque reference for fetching the raw content.
    pub download_url: Option<String>,
    /// Inline content, when the host included it.
    pub content: Option<String>,
    /// Encoding of the inline content (`"base64"`).
    pub encoding: Option<String>,
}

/// Result of a metadata/listing lookup: the response shape decides whether
/// the path is a directory or a file.
#[derive(Debug, Clone)]
pub enum RemoteEntry {
    /// The path is a directory.
    Listing(Vec<EntrySummary>),
    /// The path is a file.
    File(FileDescriptor),
}

/// A raw proxied file stream with the upstream response metadata.
pub struct FileStream {
    /// Upstream status code, forwarded verbatim.
    pub status: u16,
    /// Upstream `Content-Type`, if present.
    pub content_type: Option<String>,
    /// Upstream `Content-Length`, if present.
    pub content_length: Option<u64>,
    /// The unbuffered body stream.
    pub body: ByteStream,
}

impl std::fmt::Debug for FileStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStream")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Typed outcome of a conditional write.
///
/// A version-token mismatch is an expected result of optimistic
/// concurrency, not an error; retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The write was accepted.
    Committed,
    /// The host rejected the write because the supplied version token no
    /// longer matches the resource.
    Conflict {
        /// Upstream status code.
        status: u16,
        /// Human-readable message from the host.
        message: String,
    },
}

/// Trait for the upstream repository host.
#[async_trait]
pub trait ContentSource: Send + Sync + std::fmt::Debug + 'static {
    /// List all repositories visible to the configured identity, most
    /// recently updated first.
    async fn list_repositories(&self) -> AppResult<Vec<RepoSummary>>;

    /// Fetch metadata for a virtual path: a directory listing or a single
    /// file descriptor.
    async fn entry(&self, path: &VirtualPath) -> AppResult<RemoteEntry>;

    /// Stream a file's raw bytes without buffering the whole body.
    async fn stream_file(&self, file: &FileDescriptor) -> AppResult<FileStream>;

    /// Conditionally write a file: the host accepts the write only if the
    /// resource's current version still matches `sha`.
    async fn write_file(
        &self,
        path: &VirtualPath,
        sha: &str,
        content: &str,
    ) -> AppResult<WriteOutcome>;
}
