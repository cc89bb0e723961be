//! Integration tests for Toolscout.
//!
//! # Test Categories
//!
//! - `recommendation_pipeline` - the scoring/ranking/workflow pipeline over
//!   the bundled catalog, no network or database required
//! - `intent_rules` - keyword detection, heuristics and template matching
//! - `http_api` - live tests against a running instance, gated on the
//!   `TOOLSCOUT_TEST_URL` environment variable (skipped when unset)
//!
//! # Running
//!
//! ```bash
//! # Library-level tests
//! cargo test -p toolscout-integration-tests
//!
//! # Including live HTTP tests
//! TOOLSCOUT_TEST_URL=http://127.0.0.1:3000 cargo test -p toolscout-integration-tests
//! ```

/// Context for live HTTP tests.
pub struct TestContext {
    /// Base URL of the instance under test.
    pub base_url: String,
    /// Shared HTTP client.
    pub client: reqwest::Client,
}

impl TestContext {
    /// Build a context from `TOOLSCOUT_TEST_URL`, or `None` when the
    /// variable is unset (the caller should skip the test).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("TOOLSCOUT_TEST_URL").ok()?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        })
    }

    /// Absolute URL for a path on the instance under test.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
