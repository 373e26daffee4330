// crates/server/src/routes/insights.rs
//! Coach insight CRUD routes.
//!
//! - GET    /insights      — List all insights, pinned first
//! - POST   /insights      — Record a new insight (201)
//! - GET    /insights/{id} — Get one insight
//! - PUT    /insights/{id} — Replace an insight
//! - DELETE /insights/{id} — Delete an insight (204)

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use uuid::Uuid;

use cruxlog_core::{validate_insight, CoachInsight, InsightDraft};

use crate::{
    error::{ApiError, ApiResult},
    extract::Json,
    state::AppState,
};

/// Create the insight routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/insights", get(list_insights))
        .route("/insights", post(create_insight))
        .route("/insights/{id}", get(get_insight))
        .route("/insights/{id}", put(update_insight))
        .route("/insights/{id}", delete(delete_insight))
}

/// GET /api/insights — Pinned insights first, then most recently updated.
async fn list_insights(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<CoachInsight>>> {
    Ok(Json(state.db.list_insights().await?))
}

/// POST /api/insights — Validate and persist a new insight.
async fn create_insight(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<InsightDraft>,
) -> ApiResult<(StatusCode, Json<CoachInsight>)> {
    let errors = validate_insight(&draft);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let insight = state.db.create_insight(&draft).await?;
    Ok((StatusCode::CREATED, Json(insight)))
}

/// GET /api/insights/{id}
async fn get_insight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CoachInsight>> {
    state
        .db
        .get_insight(id)
        .await?
        .map(Json)
        .ok_or(ApiError::InsightNotFound(id))
}

/// PUT /api/insights/{id} — Full replace of content and pinned flag.
async fn update_insight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(draft): Json<InsightDraft>,
) -> ApiResult<Json<CoachInsight>> {
    let errors = validate_insight(&draft);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    state
        .db
        .update_insight(id, &draft)
        .await?
        .map(Json)
        .ok_or(ApiError::InsightNotFound(id))
}

/// DELETE /api/insights/{id}
async fn delete_insight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if state.db.delete_insight(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::InsightNotFound(id))
    }
}
