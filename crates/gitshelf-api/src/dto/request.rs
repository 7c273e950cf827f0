//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use gitshelf_entity::share::ExpiryUnit;

/// Body of `POST /api/share/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareRequest {
    /// `<repository>/<relative file path>` of the file to share.
    #[validate(length(min = 1, message = "fullPath is required"))]
    pub full_path: String,
    /// Duration unit.
    pub unit: ExpiryUnit,
    /// Duration multiplier.
    #[validate(range(min = 1, message = "value must be positive"))]
    pub value: u32,
}

/// Body of `POST /api/share/toggle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleShareRequest {
    /// Share id.
    pub id: String,
    /// New active state.
    pub active: bool,
}

/// Body of `POST /api/share/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteShareRequest {
    /// Share id.
    pub id: String,
}

/// Body of `POST /api/file/update`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFileRequest {
    /// Repository name.
    #[validate(length(min = 1, message = "repo is required"))]
    pub repo: String,
    /// Path inside the repository.
    #[validate(length(min = 1, message = "path is required"))]
    pub path: String,
    /// Version token read with the file; the write precondition.
    #[validate(length(min = 1, message = "sha is required"))]
    pub sha: String,
    /// New text content.
    pub content: String,
}
