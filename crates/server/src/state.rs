//! Application state shared across handlers.
//!
//! All external-service clients are constructed once at process start and
//! injected here - components never reach for environment globals.

use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::ToolCatalog;
use crate::config::ServerConfig;
use crate::db::PgKvStore;
use crate::openai::ReasoningClient;
use crate::recommend::{IntentAnalyzer, IntentCache, IntentParser, Recommender};
use crate::search::{EmbeddingClient, ToolSearch};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    catalog: ToolCatalog<PgKvStore>,
    recommender: Recommender<PgKvStore>,
    search: ToolSearch,
}

impl AppState {
    /// Wire up clients, catalog and the recommendation pipeline.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        let store = PgKvStore::new(pool.clone());
        let catalog = ToolCatalog::new(store.clone());

        let reasoning = ReasoningClient::new(config.openai());
        let parser = IntentParser::new(reasoning);
        let cache = IntentCache::new(store);
        let analyzer = IntentAnalyzer::new(cache, parser);
        let recommender = Recommender::new(catalog.clone(), analyzer);

        let embeddings = EmbeddingClient::new(&config.openai.api_key);
        let search = ToolSearch::new(embeddings, pool.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
                recommender,
                search,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    #[must_use]
    pub fn catalog(&self) -> &ToolCatalog<PgKvStore> {
        &self.inner.catalog
    }

    #[must_use]
    pub fn recommender(&self) -> &Recommender<PgKvStore> {
        &self.inner.recommender
    }

    #[must_use]
    pub fn search(&self) -> &ToolSearch {
        &self.inner.search
    }
}
