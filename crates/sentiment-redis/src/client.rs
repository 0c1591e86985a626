//! Opening the result store.

use redis::aio::ConnectionManager;
use thiserror::Error;
use tracing::info;

use crate::results::RedisResultStore;

/// Failures talking to Redis or encoding an item for it.
#[derive(Error, Debug)]
pub enum RedisError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Failed to encode result item: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type RedisResult<T> = Result<T, RedisError>;

/// Connect to `redis_url` and return a store writing under `table`.
///
/// The connection reconnects on its own and is shared by every clone of
/// the returned store.
pub async fn connect(redis_url: &str, table: &str) -> RedisResult<RedisResultStore> {
    let client = redis::Client::open(redis_url)?;
    let conn = ConnectionManager::new(client).await?;
    info!(%table, "Connected result store");
    Ok(RedisResultStore::new(conn, table))
}
