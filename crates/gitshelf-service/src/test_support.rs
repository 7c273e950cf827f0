//! In-process fakes shared by the service unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;

use gitshelf_core::config::store::MemoryStoreConfig;
use gitshelf_core::traits::source::{
    ContentSource, EntryKind, EntrySummary, FileDescriptor, FileStream, RemoteEntry, RepoSummary,
    WriteOutcome,
};
use gitshelf_core::types::VirtualPath;
use gitshelf_core::{AppError, AppResult};
use gitshelf_github::codec;
use gitshelf_store::{ShareStore, StoreManager};

/// A memory-backed share store for tests.
pub fn memory_share_store() -> ShareStore {
    let provider = Arc::new(gitshelf_store::memory::MemoryKvProvider::new(
        &MemoryStoreConfig { max_capacity: 1000 },
    ));
    ShareStore::new(Arc::new(StoreManager::from_provider(provider)))
}

/// One fake upstream file.
#[derive(Debug, Clone)]
pub struct FakeFile {
    pub sha: String,
    pub content: String,
}

/// An in-process `ContentSource` over a mutable file map keyed by
/// `<repo>/<relative path>`.
#[derive(Debug, Default)]
pub struct FakeSource {
    files: Mutex<HashMap<String, FakeFile>>,
    repos: Mutex<Vec<RepoSummary>>,
    sha_counter: AtomicU64,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, full_path: &str, sha: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(
            full_path.to_string(),
            FakeFile {
                sha: sha.to_string(),
                content: content.to_string(),
            },
        );
        self
    }

    pub fn with_repo(self, name: &str) -> Self {
        self.repos.lock().unwrap().push(RepoSummary {
            name: name.to_string(),
            private: false,
            updated_at: None,
        });
        self
    }

    /// Current content of a file, for post-write assertions.
    pub fn content_of(&self, full_path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(full_path)
            .map(|f| f.content.clone())
    }

    /// Current version token of a file.
    pub fn sha_of(&self, full_path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(full_path)
            .map(|f| f.sha.clone())
    }

    fn next_sha(&self) -> String {
        format!("sha-{}", self.sha_counter.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn list_repositories(&self) -> AppResult<Vec<RepoSummary>> {
        Ok(self.repos.lock().unwrap().clone())
    }

    async fn entry(&self, path: &VirtualPath) -> AppResult<RemoteEntry> {
        let full = path.to_string();
        let files = self.files.lock().unwrap();

        if let Some(file) = files.get(&full) {
            return Ok(RemoteEntry::File(FileDescriptor {
                name: path.file_name().to_string(),
                path: path.relative_path.clone(),
                size: file.content.len() as u64,
                sha: file.sha.clone(),
                download_url: Some(format!("fake://{full}")),
                content: Some(codec::encode(&file.content)),
                encoding: Some("base64".to_string()),
            }));
        }

        let dir_prefix = format!("{full}/");
        let children: Vec<EntrySummary> = files
            .keys()
            .filter_map(|key| key.strip_prefix(&dir_prefix))
            .map(|rest| {
                let child = rest.split('/').next().unwrap_or(rest);
                let is_file = !rest.contains('/');
                EntrySummary {
                    name: child.to_string(),
                    path: if path.is_repo_root() {
                        child.to_string()
                    } else {
                        format!("{}/{}", path.relative_path, child)
                    },
                    kind: if is_file { EntryKind::File } else { EntryKind::Dir },
                    size: 0,
                }
            })
            .collect();

        if children.is_empty() {
            return Err(AppError::not_found(format!("No such path: {full}")));
        }
        Ok(RemoteEntry::Listing(children))
    }

    async fn stream_file(&self, file: &FileDescriptor) -> AppResult<FileStream> {
        let url = file
            .download_url
            .as_deref()
            .ok_or_else(|| AppError::upstream(502, "No content reference"))?;
        let full = url.trim_start_matches("fake://");

        let content = self
            .files
            .lock()
            .unwrap()
            .get(full)
            .map(|f| f.content.clone())
            .ok_or_else(|| AppError::not_found(format!("No such file: {full}")))?;

        let bytes = Bytes::from(content);
        Ok(FileStream {
            status: 200,
            content_type: Some("text/plain".to_string()),
            content_length: Some(bytes.len() as u64),
            body: futures::stream::iter(vec![Ok(bytes)]).boxed(),
        })
    }

    async fn write_file(
        &self,
        path: &VirtualPath,
        sha: &str,
        content: &str,
    ) -> AppResult<WriteOutcome> {
        let full = path.to_string();
        let mut files = self.files.lock().unwrap();

        let Some(file) = files.get_mut(&full) else {
            return Err(AppError::not_found(format!("No such file: {full}")));
        };

        if file.sha != sha {
            return Ok(WriteOutcome::Conflict {
                status: 409,
                message: format!("{full} does not match {sha}"),
            });
        }

        file.content = content.to_string();
        file.sha = self.next_sha();
        Ok(WriteOutcome::Committed)
    }
}

/// Drain a `FileStream` into a byte vector.
pub async fn collect_stream(stream: FileStream) -> Vec<u8> {
    use futures::TryStreamExt;
    let chunks: Vec<Bytes> = stream.body.try_collect().await.expect("stream failed");
    chunks.concat()
}
