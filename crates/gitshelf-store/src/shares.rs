//! Typed share record store layered on the KV provider.

use std::sync::Arc;

use tracing::warn;

use gitshelf_core::result::AppResult;
use gitshelf_core::traits::kv::KvProvider;
use gitshelf_entity::share::ShareRecord;

use crate::keys;
use crate::provider::StoreManager;

/// CRUD operations over share records, keyed by share id.
///
/// `put` is a full overwrite; callers needing to change one field must
/// read-modify-write, and concurrent writers race (last write wins). The
/// store never evicts: expired and inactive records stay until an explicit
/// delete.
#[derive(Debug, Clone)]
pub struct ShareStore {
    /// The underlying KV store.
    store: Arc<StoreManager>,
}

impl ShareStore {
    /// Creates a new share store.
    pub fn new(store: Arc<StoreManager>) -> Self {
        Self { store }
    }

    /// Persist a newly created record.
    ///
    /// Ids carry enough entropy that collisions are not checked for; an
    /// improbable duplicate overwrites, consistent with `put`.
    pub async fn create(&self, record: &ShareRecord) -> AppResult<()> {
        self.store.set_json(&keys::share_record(&record.id), record).await
    }

    /// Fetch a record by id.
    pub async fn get(&self, id: &str) -> AppResult<Option<ShareRecord>> {
        self.store.get_json(&keys::share_record(id)).await
    }

    /// Overwrite a record in full.
    pub async fn put(&self, record: &ShareRecord) -> AppResult<()> {
        self.store.set_json(&keys::share_record(&record.id), record).await
    }

    /// Delete a record by id. Deleting an absent id is a no-op.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store.delete(&keys::share_record(id)).await
    }

    /// List every stored record.
    ///
    /// Corrupt entries are skipped with a warning rather than failing the
    /// whole listing.
    pub async fn list_all(&self) -> AppResult<Vec<ShareRecord>> {
        let keys = self.store.keys(keys::share_prefix()).await?;
        let mut records = Vec::with_capacity(keys.len());

        for key in keys {
            match self.store.get(&key).await? {
                Some(raw) => match serde_json::from_str::<ShareRecord>(&raw) {
                    Ok(record) => records.push(record),
                    Err(e) => warn!(key, error = %e, "Skipping undecodable share record"),
                },
                None => {}
            }
        }

        Ok(records)
    }
}
