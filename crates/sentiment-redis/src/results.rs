//! Analysis result writes.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::debug;

use sentiment_core::{ResultStore, StoredResult};

use crate::client::RedisResult;

/// Key namespace used when none is configured.
pub const DEFAULT_TABLE: &str = "SentimentAnalysisResults";

/// Field of the item hash holding the JSON-encoded result.
pub const DATA_FIELD: &str = "data";

/// Key of the hash holding one result.
pub fn result_key(table: &str, id: &str) -> String {
    format!("{}:{}", table, id)
}

/// JSON form of a stored item. Scores are decimal strings.
pub fn encode_item(item: &StoredResult) -> RedisResult<String> {
    Ok(serde_json::to_string(item)?)
}

/// Write one result with a single `HSET`, so the item lands atomically.
pub async fn put_result<C: AsyncCommands>(conn: &mut C, table: &str, item: &StoredResult) -> RedisResult<()> {
    let key = result_key(table, &item.id.to_string());
    conn.hset::<_, _, _, ()>(&key, DATA_FIELD, encode_item(item)?).await?;
    debug!(%key, "Stored analysis result");
    Ok(())
}

/// [`ResultStore`] backed by Redis hashes.
#[derive(Clone)]
pub struct RedisResultStore {
    conn: ConnectionManager,
    table: String,
}

impl RedisResultStore {
    pub fn new(conn: ConnectionManager, table: impl Into<String>) -> Self {
        Self { conn, table: table.into() }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl ResultStore for RedisResultStore {
    async fn put_result(&self, item: &StoredResult) -> anyhow::Result<()> {
        let mut conn = self.conn.clone();
        put_result(&mut conn, &self.table, item).await?;
        Ok(())
    }
}
