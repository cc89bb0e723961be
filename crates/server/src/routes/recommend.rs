//! Recommendation API handler.

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use toolscout_core::{PricingPreference, Recommendation};

use crate::error::AppError;
use crate::recommend::RecommendOptions;
use crate::state::AppState;

/// Build the recommendation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/recommend", post(recommend))
}

/// Request body for a recommendation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Free-text user request.
    pub query: String,
    /// Optional hard pricing filter.
    #[serde(default)]
    pub pricing_filter: Option<PricingPreference>,
}

/// Recommend a tool or workflow for a free-text query.
///
/// # Errors
///
/// Returns 400 for an empty query and a structured intent-error body (422
/// or 502) when intent analysis reached a terminal outcome.
pub async fn recommend(
    State(state): State<AppState>,
    Json(body): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let query = body.query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest("query must not be empty".to_string()));
    }

    let options = RecommendOptions {
        pricing_filter: body.pricing_filter,
    };

    let recommendation = state.recommender().recommend(query, options).await?;
    Ok(Json(recommendation))
}
