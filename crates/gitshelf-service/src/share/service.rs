//! Share CRUD service.

use chrono::Utc;
use tracing::info;

use gitshelf_core::types::VirtualPath;
use gitshelf_core::{AppError, AppResult};
use gitshelf_entity::share::{ExpiryUnit, ShareRecord};
use gitshelf_store::ShareStore;

use super::id::IdGenerator;

/// Manages share creation, toggling, deletion, and listing.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share record store.
    shares: ShareStore,
    /// Id generator.
    ids: IdGenerator,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(shares: ShareStore, ids: IdGenerator) -> Self {
        Self { shares, ids }
    }

    /// Create a share for `full_path`, valid for `value × unit`.
    pub async fn create(
        &self,
        full_path: &str,
        unit: ExpiryUnit,
        value: u32,
    ) -> AppResult<ShareRecord> {
        if value == 0 {
            return Err(AppError::validation("Duration value must be positive"));
        }

        let path = VirtualPath::parse(full_path)?;
        if path.is_repo_root() {
            return Err(AppError::validation(
                "A share must point at a file inside a repository",
            ));
        }

        let created_at = Utc::now();
        let record = ShareRecord {
            id: self.ids.generate(),
            full_path: path.to_string(),
            created_at,
            expire_at: unit.expire_at(created_at, value),
            active: true,
            visits: 0,
        };

        self.shares.create(&record).await?;

        info!(
            share_id = %record.id,
            full_path = %record.full_path,
            expire_at = ?record.expire_at,
            "Share created"
        );

        Ok(record)
    }

    /// Flip a share's active flag.
    ///
    /// Returns `false` when no record exists for `id`; no record is
    /// created in that case.
    pub async fn toggle(&self, id: &str, active: bool) -> AppResult<bool> {
        let Some(mut record) = self.shares.get(id).await? else {
            return Ok(false);
        };

        record.active = active;
        self.shares.put(&record).await?;

        info!(share_id = %id, active, "Share toggled");
        Ok(true)
    }

    /// Delete a share. Deleting an unknown id is a successful no-op.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.shares.delete(id).await?;
        info!(share_id = %id, "Share deleted");
        Ok(())
    }

    /// List all shares, newest first.
    pub async fn list(&self) -> AppResult<Vec<ShareRecord>> {
        let mut records = self.shares.list_all().await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
