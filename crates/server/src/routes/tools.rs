//! Catalog and search API handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use toolscout_core::Tool;

use crate::error::AppError;
use crate::search::{DEFAULT_TOP_K, SearchResult};
use crate::state::AppState;

/// Build the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tools", get(list_tools).put(replace_tools))
        .route("/api/tools/search", get(search_tools))
        .route("/api/admin/seed", post(seed_catalog))
}

/// Full tool catalog.
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<Tool>> {
    Json(state.catalog().all().await)
}

/// Response after a catalog write.
#[derive(Debug, Serialize)]
pub struct CatalogWriteResponse {
    pub count: usize,
}

/// Replace the catalog wholesale.
///
/// # Errors
///
/// Returns 400 for an empty tool list and 500 when the store write fails.
pub async fn replace_tools(
    State(state): State<AppState>,
    Json(tools): Json<Vec<Tool>>,
) -> Result<Json<CatalogWriteResponse>, AppError> {
    if tools.is_empty() {
        return Err(AppError::BadRequest(
            "catalog replacement must not be empty".to_string(),
        ));
    }

    state.catalog().replace_all(&tools).await?;
    Ok(Json(CatalogWriteResponse { count: tools.len() }))
}

/// Re-initialize the catalog from the bundled seed.
///
/// # Errors
///
/// Returns 500 when the store write fails.
pub async fn seed_catalog(
    State(state): State<AppState>,
) -> Result<Json<CatalogWriteResponse>, AppError> {
    let seed = crate::catalog::seed_tools();
    state.catalog().replace_all(seed).await?;
    Ok(Json(CatalogWriteResponse { count: seed.len() }))
}

/// Query parameters for similarity search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text search query.
    pub q: String,
    /// Number of results (default 5).
    #[serde(default)]
    pub top_k: Option<usize>,
}

/// Semantic similarity search over the indexed catalog.
///
/// Search failures degrade to an empty result list.
///
/// # Errors
///
/// Returns 400 for an empty query.
pub async fn search_tools(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("q must not be empty".to_string()));
    }

    let top_k = params.top_k.unwrap_or(DEFAULT_TOP_K);
    Ok(Json(state.search().search_tools(query, top_k).await))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_defaults() {
        let params: SearchParams =
            serde_json::from_str(r#"{"q": "voice cloning"}"#).expect("deserialize");
        assert_eq!(params.q, "voice cloning");
        assert_eq!(params.top_k, None);
    }
}
