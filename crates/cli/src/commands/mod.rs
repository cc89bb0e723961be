//! CLI command implementations.

pub mod index;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Store error: {0}")]
    Store(#[from] toolscout_server::db::KvError),

    #[error("Search error: {0}")]
    Search(#[from] toolscout_server::search::SearchError),
}

/// Connect to the database named by `DATABASE_URL`.
pub async fn connect() -> Result<PgPool, CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = toolscout_server::db::create_pool(&database_url).await?;
    Ok(pool)
}

/// Read the `OpenAI` API key for commands that call the embeddings API.
pub fn openai_api_key() -> Result<SecretString, CliError> {
    std::env::var("OPENAI_API_KEY")
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("OPENAI_API_KEY"))
}
