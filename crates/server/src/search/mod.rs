//! Semantic tool search - the vector-similarity collaborator.
//!
//! Backs the `/api/tools/search` endpoint: embed the query, rank catalog
//! tools by cosine similarity in pgvector, return name/score/metadata
//! tuples. Search failures degrade to an empty result list; they never fail
//! the surrounding request. `index_tools` (re-)embeds the catalog and is run
//! explicitly via `toolscout index`.

mod embeddings;

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use thiserror::Error;
use tracing::{info, instrument, warn};

use toolscout_core::Tool;

pub use embeddings::EmbeddingClient;

/// Default number of results for a similarity search.
pub const DEFAULT_TOP_K: usize = 5;

/// Errors that can occur during indexing or search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Failed to generate embeddings.
    #[error("embedding generation failed: {0}")]
    Embedding(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response from the embeddings API.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}

/// One similarity-search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Tool name (catalog identity key).
    pub name: String,
    /// Cosine similarity, 0-1.
    pub score: f64,
    /// Denormalized catalog metadata stored alongside the vector.
    pub category: String,
    pub description: String,
    pub url: String,
    pub pricing: String,
    pub strength: f64,
}

/// Semantic search over the indexed tool catalog.
#[derive(Clone)]
pub struct ToolSearch {
    embeddings: EmbeddingClient,
    pool: PgPool,
}

impl ToolSearch {
    /// Create a search service over an existing pool and embedding client.
    #[must_use]
    pub const fn new(embeddings: EmbeddingClient, pool: PgPool) -> Self {
        Self { embeddings, pool }
    }

    /// Find the `top_k` tools most similar to `query`.
    ///
    /// Any failure (embedding call, database) is logged and degraded to an
    /// empty list - search is a best-effort feature.
    #[instrument(skip(self, query), fields(query_len = query.len(), top_k = top_k))]
    pub async fn search_tools(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        match self.try_search(query, top_k).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "Tool search failed, returning empty results");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>, SearchError> {
        let embedding = self.embeddings.embed(query).await?;
        let embedding_str = format_embedding(&embedding);

        // Runtime query: SQLx has no built-in pgvector support.
        let rows = sqlx::query(
            r"
            SELECT tool_name, category, description, url, pricing, strength,
                   1 - (embedding <=> $1::vector) AS similarity
            FROM tool_vectors
            ORDER BY embedding <=> $1::vector
            LIMIT $2
            ",
        )
        .bind(&embedding_str)
        .bind(i64::try_from(top_k).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        let results = rows
            .into_iter()
            .map(|row| SearchResult {
                name: row.get("tool_name"),
                score: row.get::<Option<f64>, _>("similarity").unwrap_or(0.0),
                category: row.get("category"),
                description: row.get("description"),
                url: row.get("url"),
                pricing: row.get("pricing"),
                strength: row.get("strength"),
            })
            .collect();

        Ok(results)
    }

    /// Re-embed the catalog into `tool_vectors`, replacing existing rows.
    ///
    /// Each tool is embedded from its name, description and `best_for`
    /// phrases so capability wording is searchable.
    ///
    /// # Errors
    ///
    /// Returns an error if embedding generation or a database write fails.
    #[instrument(skip(self, tools), fields(count = tools.len()))]
    pub async fn index_tools(&self, tools: &[Tool]) -> Result<usize, SearchError> {
        if tools.is_empty() {
            return Ok(0);
        }

        let documents: Vec<String> = tools.iter().map(embedding_document).collect();
        let document_refs: Vec<&str> = documents.iter().map(String::as_str).collect();
        let embeddings = self.embeddings.embed_batch(&document_refs).await?;

        let mut indexed = 0;
        for (tool, embedding) in tools.iter().zip(embeddings) {
            let embedding_str = format_embedding(&embedding);
            sqlx::query(
                r"
                INSERT INTO tool_vectors
                    (tool_name, category, description, url, pricing, strength, embedding, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7::vector, NOW())
                ON CONFLICT (tool_name) DO UPDATE
                SET category = EXCLUDED.category,
                    description = EXCLUDED.description,
                    url = EXCLUDED.url,
                    pricing = EXCLUDED.pricing,
                    strength = EXCLUDED.strength,
                    embedding = EXCLUDED.embedding,
                    updated_at = NOW()
                ",
            )
            .bind(&tool.name)
            .bind(tool.category.as_str())
            .bind(&tool.description)
            .bind(&tool.url)
            .bind(pricing_label(tool))
            .bind(tool.strength)
            .bind(&embedding_str)
            .execute(&self.pool)
            .await?;
            indexed += 1;
        }

        info!(indexed, "Indexed catalog into tool_vectors");
        Ok(indexed)
    }
}

/// Text document a tool is embedded from.
fn embedding_document(tool: &Tool) -> String {
    format!(
        "{} - {}. Best for: {}",
        tool.name,
        tool.description,
        tool.best_for.join(", ")
    )
}

/// Coarse pricing label stored as search metadata.
fn pricing_label(tool: &Tool) -> &'static str {
    if tool.pricing.free {
        "free"
    } else if tool.pricing.freemium {
        "freemium"
    } else {
        "paid"
    }
}

/// Format an embedding vector for pgvector.
fn format_embedding(embedding: &[f32]) -> String {
    let values: Vec<String> = embedding.iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(","))
}
