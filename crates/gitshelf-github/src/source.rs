//! The GitHub-backed content source.

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use tracing::debug;

use gitshelf_core::traits::source::{
    ContentSource, EntryKind, EntrySummary, FileDescriptor, FileStream, RemoteEntry, RepoSummary,
    WriteOutcome,
};
use gitshelf_core::types::VirtualPath;
use gitshelf_core::{AppError, AppResult};

use crate::client::GithubClient;
use crate::codec;
use crate::types::{ApiErrorBody, ContentItem, ContentsResponse, PutContentsRequest, RepoInfo};

/// Commit message recorded for edits made through the web editor.
const EDIT_COMMIT_MESSAGE: &str = "Update via GitShelf";

/// `ContentSource` implementation against the GitHub Contents API.
#[derive(Debug, Clone)]
pub struct GithubContentSource {
    /// The configured API client.
    client: GithubClient,
}

impl GithubContentSource {
    /// Creates a new content source.
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }

    /// Turn a non-success contents response into an AppError, preserving
    /// the upstream status.
    async fn error_for(response: reqwest::Response) -> AppError {
        let status = response.status().as_u16();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| "Upstream request failed".to_string());

        if status == 404 {
            AppError::not_found(message)
        } else {
            AppError::upstream(status, message)
        }
    }
}

fn entry_kind(item_type: &str) -> EntryKind {
    match item_type {
        "dir" => EntryKind::Dir,
        "file" => EntryKind::File,
        _ => EntryKind::Other,
    }
}

fn to_descriptor(item: ContentItem) -> FileDescriptor {
    FileDescriptor {
        name: item.name,
        path: item.path,
        size: item.size,
        sha: item.sha,
        download_url: item.download_url,
        content: item.content,
        encoding: item.encoding,
    }
}

#[async_trait]
impl ContentSource for GithubContentSource {
    async fn list_repositories(&self) -> AppResult<Vec<RepoSummary>> {
        let response = self
            .client
            .http()
            .get(self.client.repos_url())
            .send()
            .await
            .map_err(GithubClient::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let repos: Vec<RepoInfo> = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Malformed repository listing: {e}")))?;

        // The host already sorts by update recency; keep its order.
        Ok(repos
            .into_iter()
            .map(|r| RepoSummary {
                name: r.name,
                private: r.private,
                updated_at: r.updated_at,
            })
            .collect())
    }

    async fn entry(&self, path: &VirtualPath) -> AppResult<RemoteEntry> {
        let url = self.client.contents_url(path);
        debug!(%path, "Fetching contents metadata");

        let response = self
            .client
            .http()
            .get(&url)
            .send()
            .await
            .map_err(GithubClient::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let contents: ContentsResponse = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Malformed contents response: {e}")))?;

        match contents {
            ContentsResponse::Listing(items) => Ok(RemoteEntry::Listing(
                items
                    .into_iter()
                    .map(|item| EntrySummary {
                        kind: entry_kind(&item.item_type),
                        size: item.size,
                        name: item.name,
                        path: item.path,
                    })
                    .collect(),
            )),
            ContentsResponse::Item(item) if item.item_type == "file" => {
                Ok(RemoteEntry::File(to_descriptor(*item)))
            }
            ContentsResponse::Item(item) => Err(AppError::upstream(
                500,
                format!("Unsupported entry type '{}' at {path}", item.item_type),
            )),
        }
    }

    async fn stream_file(&self, file: &FileDescriptor) -> AppResult<FileStream> {
        let url = file
            .download_url
            .as_deref()
            .ok_or_else(|| AppError::upstream(502, format!("No content reference for {}", file.path)))?;

        let response = self
            .client
            .http()
            .get(url)
            .send()
            .await
            .map_err(GithubClient::transport_error)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let content_length = response.content_length();

        // The body is handed over as a stream; nothing here buffers it.
        let body = response
            .bytes_stream()
            .map_err(std::io::Error::other)
            .boxed();

        Ok(FileStream {
            status,
            content_type,
            content_length,
            body,
        })
    }

    async fn write_file(
        &self,
        path: &VirtualPath,
        sha: &str,
        content: &str,
    ) -> AppResult<WriteOutcome> {
        let body = PutContentsRequest {
            message: EDIT_COMMIT_MESSAGE.to_string(),
            content: codec::encode(content),
            sha: sha.to_string(),
        };

        let response = self
            .client
            .http()
            .put(self.client.contents_url(path))
            .json(&body)
            .send()
            .await
            .map_err(GithubClient::transport_error)?;

        let status = response.status();
        if status.is_success() {
            debug!(%path, "Conditional write committed");
            return Ok(WriteOutcome::Committed);
        }

        // 409/422 are the host's version-mismatch answers; the stale token
        // is an expected outcome, not an error.
        if status.as_u16() == 409 || status.as_u16() == 422 {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "Version token no longer matches".to_string());
            return Ok(WriteOutcome::Conflict {
                status: status.as_u16(),
                message,
            });
        }

        Err(Self::error_for(response).await)
    }
}
