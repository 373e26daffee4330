// crates/server/src/routes/analytics.rs
//! Training analytics endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use cruxlog_db::AnalyticsBundle;

use crate::{error::ApiResult, state::AppState};

/// GET /api/analytics — Weekly and rolling-window training metrics,
/// computed for the current calendar date.
async fn get_analytics(State(state): State<Arc<AppState>>) -> ApiResult<Json<AnalyticsBundle>> {
    let today = Utc::now().date_naive();
    Ok(Json(state.db.get_analytics(today).await?))
}

/// Create the analytics routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/analytics", get(get_analytics))
}
