//! Public share access — validates record state and streams the file.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use gitshelf_core::error::ErrorKind;
use gitshelf_core::traits::source::{ContentSource, FileStream, RemoteEntry};
use gitshelf_core::{AppError, AppResult};
use gitshelf_entity::share::{ShareRecord, ShareState};
use gitshelf_store::ShareStore;

/// Handles public share resolution.
///
/// This path carries no secret-based authorization: possession of the id
/// is the access control.
#[derive(Debug, Clone)]
pub struct AccessService {
    /// Share record store.
    shares: ShareStore,
    /// Upstream content source.
    source: Arc<dyn ContentSource>,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(shares: ShareStore, source: Arc<dyn ContentSource>) -> Self {
        Self { shares, source }
    }

    /// Resolve a share id into the shared file's byte stream.
    ///
    /// Distinct failures: absent record ⇒ `NotFound`, deactivated ⇒
    /// `Forbidden`, past expiry ⇒ `Expired`. Upstream failures other than
    /// a missing file surface as `Upstream` without a status so the public
    /// caller sees a plain 502.
    pub async fn resolve(&self, id: &str) -> AppResult<(ShareRecord, FileStream)> {
        let record = self
            .shares
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Share link does not exist"))?;

        match record.state_at(Utc::now()) {
            ShareState::Inactive => {
                return Err(AppError::forbidden("Share link has been deactivated"));
            }
            ShareState::Expired => {
                return Err(AppError::expired("Share link has expired"));
            }
            ShareState::Resolvable => {}
        }

        self.record_visit(&record);

        let path = record.virtual_path()?;
        let entry = self
            .source
            .entry(&path)
            .await
            .map_err(hide_upstream_detail)?;

        let stream = match entry {
            RemoteEntry::File(descriptor) => self
                .source
                .stream_file(&descriptor)
                .await
                .map_err(hide_upstream_detail)?,
            RemoteEntry::Listing(_) => {
                return Err(AppError::upstream_unreachable(
                    "Shared path no longer resolves to a file",
                ));
            }
        };

        Ok((record, stream))
    }

    /// Persist the visit increment without delaying the response.
    ///
    /// The store has no atomic counter, so concurrent visits can lose
    /// increments; a failed write is logged and otherwise ignored.
    fn record_visit(&self, record: &ShareRecord) {
        let mut updated = record.clone();
        updated.visits += 1;

        let shares = self.shares.clone();
        tokio::spawn(async move {
            if let Err(e) = shares.put(&updated).await {
                warn!(share_id = %updated.id, error = %e, "Failed to persist visit count");
            }
        });
    }
}

/// Collapse upstream detail for public callers: a missing file stays
/// `NotFound`, anything else becomes a statusless upstream error (502).
fn hide_upstream_detail(err: AppError) -> AppError {
    match err.kind {
        ErrorKind::NotFound => err,
        _ => AppError::upstream_unreachable("Source file is unavailable"),
    }
}
