//! Parsed-intent cache.
//!
//! Reasoning-service calls are the slowest and most expensive part of the
//! pipeline, so successful intents are cached for a day keyed by the
//! normalized query text. Queries differing only in case or whitespace
//! collide to the same entry on purpose (semantic dedup).
//!
//! The cache is an optional side channel: get/set failures are logged and
//! swallowed, and the surrounding request proceeds as if the cache missed.

use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};

use toolscout_core::ParsedIntent;

use crate::db::KeyValueStore;

const CACHE_PREFIX: &str = "intent:";
const CACHE_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Cache of parsed intents over the key-value store.
#[derive(Clone)]
pub struct IntentCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> IntentCache<S> {
    /// Create a cache over a key-value store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up the cached intent for a query.
    ///
    /// Returns `None` on a miss, an expired entry, a malformed entry, or a
    /// store failure - never an error.
    pub async fn get(&self, query: &str) -> Option<ParsedIntent> {
        let key = cache_key(query);

        let value = match self.store.get(&key).await {
            Ok(value) => value?,
            Err(e) => {
                warn!(error = %e, "Intent cache get failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_value::<ParsedIntent>(value) {
            Ok(intent) => {
                debug!(query, "Intent cache hit");
                Some(intent)
            }
            Err(e) => {
                warn!(error = %e, "Cached intent is malformed, treating as miss");
                None
            }
        }
    }

    /// Store an intent for a query with the fixed 24-hour TTL.
    ///
    /// Failures are logged and swallowed - a cache write must never fail the
    /// surrounding request.
    pub async fn set(&self, query: &str, intent: &ParsedIntent) {
        let key = cache_key(query);

        if let Err(e) = self.store.put(&key, &json!(intent), Some(CACHE_TTL)).await {
            warn!(error = %e, "Intent cache set failed, continuing without caching");
        } else {
            debug!(query, "Intent cached");
        }
    }
}

/// Normalize a query into its cache key: lower-case, trim, collapse
/// whitespace runs to single spaces.
fn cache_key(query: &str) -> String {
    let normalized = query
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    format!("{CACHE_PREFIX}{normalized}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::kv::memory::MemoryKvStore;
    use toolscout_core::{Category, Complexity, IntentConstraints};

    fn sample_intent() -> ParsedIntent {
        ParsedIntent {
            primary_category: Category::Visual,
            secondary_categories: vec![Category::Text],
            confidence: 0.9,
            user_goal: "design a logo".to_string(),
            constraints: IntentConstraints::default(),
            keywords: vec!["logo".to_string()],
            reasoning: "clear visual request".to_string(),
            complexity: Complexity::Simple,
            estimated_steps: None,
            workflow_hints: Vec::new(),
        }
    }

    #[test]
    fn test_cache_key_normalization() {
        assert_eq!(cache_key("  Design   a LOGO "), "intent:design a logo");
        assert_eq!(cache_key("design a logo"), "intent:design a logo");
    }

    #[tokio::test]
    async fn test_round_trip_returns_equal_intent() {
        let cache = IntentCache::new(MemoryKvStore::new());
        let intent = sample_intent();

        cache.set("Design a Logo", &intent).await;
        let cached = cache.get("design   a logo").await;

        assert_eq!(cached, Some(intent));
    }

    #[tokio::test]
    async fn test_get_unset_key_returns_none() {
        let cache = IntentCache::new(MemoryKvStore::new());
        assert_eq!(cache.get("never seen").await, None);
    }

    #[tokio::test]
    async fn test_store_failures_degrade_to_miss() {
        let cache = IntentCache::new(MemoryKvStore::failing());
        let intent = sample_intent();

        // Neither operation may panic or propagate the store error.
        cache.set("query", &intent).await;
        assert_eq!(cache.get("query").await, None);
    }
}
