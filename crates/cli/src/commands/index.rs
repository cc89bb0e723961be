//! Vector index command.
//!
//! Embeds every catalog tool and upserts it into the `tool_vectors` table
//! so the similarity-search endpoint has data to query.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//! - `OPENAI_API_KEY` - `OpenAI` API key for embeddings

use toolscout_server::catalog::ToolCatalog;
use toolscout_server::db::PgKvStore;
use toolscout_server::search::{EmbeddingClient, ToolSearch};

use super::{CliError, connect, openai_api_key};

/// Re-embed the catalog into the vector index.
///
/// # Errors
///
/// Returns an error if the connection, embedding generation or a database
/// write fails.
pub async fn run() -> Result<(), CliError> {
    let api_key = openai_api_key()?;
    let pool = connect().await?;

    let catalog = ToolCatalog::new(PgKvStore::new(pool.clone()));
    let tools = catalog.all().await;

    let search = ToolSearch::new(EmbeddingClient::new(&api_key), pool);
    let indexed = search.index_tools(&tools).await?;

    tracing::info!(indexed, "Vector index updated");
    Ok(())
}
