//! Key-value/document store over `PostgreSQL`.
//!
//! The recommendation core treats its storage as a plain key-value store:
//! `get(key)` and `put(key, value, ttl)` over JSON documents. The tool
//! catalog lives under the `tools` key and cached intents under the
//! `intent:` namespace. Callers treat every operation as fallible and
//! degrade to their local fallback on error - the store is an optional side
//! channel, never a correctness dependency.
//!
//! Expired entries are filtered on read rather than reaped eagerly; a
//! subsequent `put` for the same key overwrites them.

use std::future::Future;
use std::time::Duration;

use serde_json::Value as JsonValue;
use sqlx::{PgPool, Row};
use thiserror::Error;

/// Errors from key-value store operations.
#[derive(Debug, Error)]
pub enum KvError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Minimal get/put contract the recommendation core stores documents through.
///
/// Implemented by [`PgKvStore`] in production and by an in-memory store in
/// tests. Get-then-set sequences carry no atomicity guarantee; last write
/// wins, which is acceptable because concurrent writes for the same key hold
/// equivalent values.
pub trait KeyValueStore: Clone + Send + Sync {
    /// Fetch the document stored under `key`, if present and not expired.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<JsonValue>, KvError>> + Send;

    /// Store `value` under `key`, replacing any previous document.
    ///
    /// A `ttl` of `None` stores the document without expiry.
    fn put(
        &self,
        key: &str,
        value: &JsonValue,
        ttl: Option<Duration>,
    ) -> impl Future<Output = Result<(), KvError>> + Send;
}

/// `PostgreSQL`-backed key-value store over the `kv_entries` table.
#[derive(Clone)]
pub struct PgKvStore {
    pool: PgPool,
}

impl PgKvStore {
    /// Create a store over an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for PgKvStore {
    async fn get(&self, key: &str) -> Result<Option<JsonValue>, KvError> {
        let row = sqlx::query(
            r"
            SELECT value FROM kv_entries
            WHERE key = $1 AND (expires_at IS NULL OR expires_at > NOW())
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn put(
        &self,
        key: &str,
        value: &JsonValue,
        ttl: Option<Duration>,
    ) -> Result<(), KvError> {
        let ttl_seconds = ttl.map(|d| d.as_secs_f64());

        // make_interval(NULL) is NULL, so a missing TTL stores a NULL expiry.
        sqlx::query(
            r"
            INSERT INTO kv_entries (key, value, expires_at, updated_at)
            VALUES ($1, $2, NOW() + make_interval(secs => $3), NOW())
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value,
                expires_at = EXCLUDED.expires_at,
                updated_at = NOW()
            ",
        )
        .bind(key)
        .bind(value)
        .bind(ttl_seconds)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
