//! Database operations for the Toolscout `PostgreSQL` instance.
//!
//! ## Tables
//!
//! - `kv_entries` - Key-value/document storage (JSONB value + optional TTL).
//!   Holds the tool catalog (`tools` key) and cached intents (`intent:*`).
//! - `tool_vectors` - pgvector embeddings of the catalog for similarity
//!   search.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p toolscout-cli -- migrate
//! ```

pub mod kv;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use kv::{KeyValueStore, KvError, PgKvStore};

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
