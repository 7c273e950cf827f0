//! The virtual path address space exposed to clients.
//!
//! A virtual path is `<repository>/<relative path>`; it is derived from URL
//! paths and stored share records, never persisted itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A parsed virtual path: a repository name plus a path inside it.
///
/// The relative path may be empty, which addresses the repository's own
/// root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualPath {
    /// The repository name (first path segment).
    pub repository: String,
    /// The path inside the repository, `/`-joined, without leading slash.
    pub relative_path: String,
}

impl VirtualPath {
    /// Parse a virtual path from a slash-separated string.
    ///
    /// Empty segments are dropped, so `/repo//a/` and `repo/a` parse the
    /// same. A path with no segments (the root) is a validation error;
    /// callers handle the root listing before resolving paths.
    pub fn parse(path: &str) -> Result<Self, AppError> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let repository = segments
            .next()
            .ok_or_else(|| AppError::validation("Empty virtual path"))?
            .to_string();
        let relative_path = segments.collect::<Vec<_>>().join("/");

        Ok(Self {
            repository,
            relative_path,
        })
    }

    /// Whether this path addresses the repository root.
    pub fn is_repo_root(&self) -> bool {
        self.relative_path.is_empty()
    }

    /// The final segment, used as a display file name.
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.repository)
    }

    /// The parent virtual path as a URL path, for "up one level" links.
    pub fn parent_url_path(&self) -> String {
        if self.is_repo_root() {
            return "/".to_string();
        }
        let mut parts: Vec<&str> = self.relative_path.split('/').collect();
        parts.pop();
        if parts.is_empty() {
            format!("/{}", self.repository)
        } else {
            format!("/{}/{}", self.repository, parts.join("/"))
        }
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative_path.is_empty() {
            write!(f, "{}", self.repository)
        } else {
            write!(f, "{}/{}", self.repository, self.relative_path)
        }
    }
}

/// Normalize a URL path: strip the trailing slash, except for the root.
pub fn normalize_url_path(path: &str) -> &str {
    if path != "/" && path.ends_with('/') {
        &path[..path.len() - 1]
    } else {
        path
    }
}
