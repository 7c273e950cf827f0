//! Contents API wire types.

use serde::{Deserialize, Serialize};

/// One repository as returned by `GET /user/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoInfo {
    /// Repository name.
    pub name: String,
    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,
    /// Last update time.
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// One item of a contents response: a directory entry or a full file
/// object, distinguished by `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    /// Entry name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Blob SHA; the file version token.
    pub sha: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// `"file"`, `"dir"`, `"symlink"` or `"submodule"`.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Raw content URL, present for files.
    pub download_url: Option<String>,
    /// Inline base64 content, present for single-file responses.
    pub content: Option<String>,
    /// Encoding of the inline content.
    pub encoding: Option<String>,
}

/// The two shapes a contents lookup can answer with: an array means the
/// path is a directory, a single object means it is a file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    /// Directory listing.
    Listing(Vec<ContentItem>),
    /// Single file (or symlink/submodule) object.
    Item(Box<ContentItem>),
}

/// Body of the conditional `PUT /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, Serialize)]
pub struct PutContentsRequest {
    /// Commit message recorded by the host.
    pub message: String,
    /// Base64-encoded file content.
    pub content: String,
    /// Expected current blob SHA; the compare-and-swap precondition.
    pub sha: String,
}

/// Error body shape of Contents API failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message.
    pub message: Option<String>,
}
