//! Redis store provider implementation.

use async_trait::async_trait;
use redis::AsyncCommands;

use gitshelf_core::error::{AppError, ErrorKind};
use gitshelf_core::result::AppResult;
use gitshelf_core::traits::kv::KvProvider;

use super::client::RedisClient;

/// Redis-backed share store provider.
///
/// Records are stored without TTL; expiry is an application-level property
/// of the share record, not of the key.
#[derive(Debug, Clone)]
pub struct RedisKvProvider {
    /// Redis client.
    client: RedisClient,
}

impl RedisKvProvider {
    /// Create a new Redis store provider.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AppError.
    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Store, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl KvProvider for RedisKvProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn.set(&full_key, value).await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn.del(&full_key).await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: bool = conn.exists(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn keys(&self, prefix: &str) -> AppResult<Vec<String>> {
        let full_prefix = self.client.prefixed_key(prefix);
        let pattern = format!("{full_prefix}*");
        let mut conn = self.client.conn_mut();

        // SCAN rather than KEYS so a large share table does not block the
        // Redis event loop.
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await
                .map_err(Self::map_err)?;

            keys.extend(batch);
            cursor = next;
            if cursor == 0 {
                break;
            }
        }

        // Strip the provider prefix so callers see logical keys.
        let prefix_len = self.client.prefix().len();
        Ok(keys.into_iter().map(|k| k[prefix_len..].to_string()).collect())
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}
