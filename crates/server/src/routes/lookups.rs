// crates/server/src/routes/lookups.rs
//! Autocomplete lookups over previously logged values.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{error::ApiResult, state::AppState};

/// GET /api/venues — Distinct venues across all sessions, sorted.
async fn list_venues(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.db.distinct_venues().await?))
}

/// GET /api/injury-locations — Distinct injury locations across all sessions, sorted.
async fn list_injury_locations(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.db.distinct_injury_locations().await?))
}

/// Create the lookup routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/injury-locations", get(list_injury_locations))
}
