//! Tool catalog accessor.
//!
//! The catalog lives in the key-value store under a single `tools` key and
//! is replaced wholesale on update - tools are never mutated or deleted one
//! at a time. Reads auto-initialize the store from the bundled seed, and any
//! store failure degrades to the seed, so `all()` never fails and never
//! returns an empty catalog.

mod seed;

use serde_json::json;
use tracing::{info, instrument, warn};

use toolscout_core::{Category, Tool};

use crate::db::{KeyValueStore, KvError};

pub use seed::seed_tools;

/// Key the catalog document is stored under.
const TOOLS_KEY: &str = "tools";

/// Read-mostly accessor over the stored tool catalog.
#[derive(Clone)]
pub struct ToolCatalog<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ToolCatalog<S> {
    /// Create a catalog accessor over a key-value store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The current tool list.
    ///
    /// Auto-initializes the store from the bundled seed when the key is
    /// missing or empty; falls back to the seed when the store errors.
    #[instrument(skip(self))]
    pub async fn all(&self) -> Vec<Tool> {
        match self.load_stored().await {
            Ok(Some(tools)) if !tools.is_empty() => tools,
            Ok(_) => {
                info!("No tools in store, initializing from bundled seed");
                let tools = seed_tools().to_vec();
                if let Err(e) = self.write_tools(&tools).await {
                    warn!(error = %e, "Failed to initialize catalog, serving bundled seed");
                }
                tools
            }
            Err(e) => {
                warn!(error = %e, "Store unavailable, serving bundled seed");
                seed_tools().to_vec()
            }
        }
    }

    /// Replace the entire catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    #[instrument(skip(self, tools), fields(count = tools.len()))]
    pub async fn replace_all(&self, tools: &[Tool]) -> Result<(), KvError> {
        self.write_tools(tools).await?;
        info!(count = tools.len(), "Catalog replaced");
        Ok(())
    }

    /// Tools in the given category.
    pub async fn by_category(&self, category: Category) -> Vec<Tool> {
        self.all()
            .await
            .into_iter()
            .filter(|tool| tool.category == category)
            .collect()
    }

    /// The strongest `limit` tools across all categories.
    pub async fn top_tools(&self, limit: usize) -> Vec<Tool> {
        let mut tools = self.all().await;
        tools.sort_by(|a, b| {
            b.strength
                .partial_cmp(&a.strength)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        tools.truncate(limit);
        tools
    }

    /// Find a tool by its name (the identity key).
    pub async fn find_by_name(&self, name: &str) -> Option<Tool> {
        self.all().await.into_iter().find(|tool| tool.name == name)
    }

    async fn load_stored(&self) -> Result<Option<Vec<Tool>>, KvError> {
        let Some(value) = self.store.get(TOOLS_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_value::<Vec<Tool>>(value) {
            Ok(tools) => Ok(Some(tools)),
            Err(e) => {
                // A corrupt document is treated like a missing one and
                // overwritten by the next initialization.
                warn!(error = %e, "Stored catalog is malformed, ignoring");
                Ok(None)
            }
        }
    }

    async fn write_tools(&self, tools: &[Tool]) -> Result<(), KvError> {
        self.store.put(TOOLS_KEY, &json!(tools), None).await
    }
}
