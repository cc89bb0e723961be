//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (verifies database)
//!
//! # Recommendation
//! POST /api/recommend       - Recommend a tool or workflow for a query
//!
//! # Catalog
//! GET  /api/tools           - Full tool catalog
//! PUT  /api/tools           - Replace the catalog wholesale
//! GET  /api/tools/search    - Semantic similarity search
//! POST /api/admin/seed      - Re-initialize the catalog from the bundled seed
//! ```

pub mod recommend;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// Build the application router (excluding health endpoints, which live in
/// `main` next to the listener setup).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(recommend::router())
        .merge(tools::router())
}
