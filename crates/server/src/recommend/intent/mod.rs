//! Intent analysis: cache-wrapped parsing.
//!
//! The orchestrator checks the cache first (errors are never cached, so a
//! hit always carries a valid intent), parses on a miss, and writes back
//! only results worth keeping: confident, non-fallback intents. Fallback
//! intents are lower-fidelity approximations and are deliberately left
//! uncached so the next identical query retries the reasoning service.

mod cache;
mod parser;

use tracing::debug;

use toolscout_core::{IntentError, ParsedIntent};

use crate::db::KeyValueStore;

pub use cache::IntentCache;
pub use parser::IntentParser;

/// Minimum confidence for an intent to be cached.
const CACHE_MIN_CONFIDENCE: f64 = 0.5;

/// Cache-wrapped intent analysis.
#[derive(Clone)]
pub struct IntentAnalyzer<S: KeyValueStore> {
    cache: IntentCache<S>,
    parser: IntentParser,
}

impl<S: KeyValueStore> IntentAnalyzer<S> {
    /// Create an analyzer from its cache and parser.
    #[must_use]
    pub const fn new(cache: IntentCache<S>, parser: IntentParser) -> Self {
        Self { cache, parser }
    }

    /// Analyze a query, serving from cache when possible.
    ///
    /// # Errors
    ///
    /// Propagates terminal [`IntentError`] outcomes from the parser.
    pub async fn analyze(&self, query: &str) -> Result<ParsedIntent, IntentError> {
        if let Some(cached) = self.cache.get(query).await {
            return Ok(cached);
        }

        let intent = self.parser.parse(query).await?;

        if should_cache(&intent) {
            self.cache.set(query, &intent).await;
        } else {
            debug!("Skipping cache write for low-confidence or fallback intent");
        }

        Ok(intent)
    }
}

/// Whether a parsed intent is worth caching.
///
/// Fallback-derived intents are excluded even when confident enough: they
/// should be retried against the reasoning service next time.
fn should_cache(intent: &ParsedIntent) -> bool {
    intent.confidence >= CACHE_MIN_CONFIDENCE && !intent.is_fallback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscout_core::{Category, Complexity, IntentConstraints};

    fn intent(confidence: f64, reasoning: &str) -> ParsedIntent {
        ParsedIntent {
            primary_category: Category::Text,
            secondary_categories: Vec::new(),
            confidence,
            user_goal: "goal".to_string(),
            constraints: IntentConstraints::default(),
            keywords: Vec::new(),
            reasoning: reasoning.to_string(),
            complexity: Complexity::Simple,
            estimated_steps: None,
            workflow_hints: Vec::new(),
        }
    }

    #[test]
    fn test_confident_reasoned_intent_is_cached() {
        assert!(should_cache(&intent(0.9, "clear writing request")));
        assert!(should_cache(&intent(0.5, "borderline but acceptable")));
    }

    #[test]
    fn test_fallback_intent_is_never_cached() {
        // Confidence is high enough, but the fallback marker blocks caching.
        assert!(!should_cache(&intent(
            0.6,
            "Keyword fallback used; the reasoning service was skipped or unavailable."
        )));
    }

    #[test]
    fn test_low_confidence_intent_is_not_cached() {
        assert!(!should_cache(&intent(0.4, "unsure")));
    }
}
