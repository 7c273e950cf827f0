//! In-memory store implementation using the moka crate.

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;

use gitshelf_core::config::store::MemoryStoreConfig;
use gitshelf_core::result::AppResult;
use gitshelf_core::traits::kv::KvProvider;

/// In-memory store provider using moka.
///
/// Entries never expire (share records are durable data, not cache
/// entries); capacity is bounded by configuration. A dashmap key index
/// backs prefix listing, which moka itself does not support in insertion
/// order.
#[derive(Debug, Clone)]
pub struct MemoryKvProvider {
    /// The underlying moka cache.
    entries: Cache<String, String>,
    /// Key index for prefix scans.
    key_index: Arc<dashmap::DashSet<String>>,
}

impl MemoryKvProvider {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryStoreConfig) -> Self {
        let entries = Cache::builder().max_capacity(config.max_capacity).build();

        Self {
            entries,
            key_index: Arc::new(dashmap::DashSet::new()),
        }
    }
}

#[async_trait]
impl KvProvider for MemoryKvProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).await)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string()).await;
        self.key_index.insert(key.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key).await;
        self.key_index.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        let keys = self
            .key_index
            .iter()
            .filter(|k| k.key().starts_with(prefix))
            .map(|k| k.key().clone())
            .collect();
        Ok(keys)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
