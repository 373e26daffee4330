// crates/server/src/routes/sessions.rs
//! Session log CRUD routes.
//!
//! - GET    /sessions      — List all sessions, newest first
//! - POST   /sessions      — Log a new session (201)
//! - GET    /sessions/{id} — Get one session
//! - PUT    /sessions/{id} — Replace a session wholesale
//! - DELETE /sessions/{id} — Delete a session (204)

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use uuid::Uuid;

use cruxlog_core::{validate_session, Session, SessionDraft};

use crate::{
    error::{ApiError, ApiResult},
    extract::Json,
    state::AppState,
};

/// Create the session routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions", get(list_sessions))
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session))
        .route("/sessions/{id}", put(update_session))
        .route("/sessions/{id}", delete(delete_session))
}

/// GET /api/sessions — All sessions, most recent date first.
async fn list_sessions(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Session>>> {
    Ok(Json(state.db.list_sessions().await?))
}

/// POST /api/sessions — Validate and persist a new session.
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<SessionDraft>,
) -> ApiResult<(StatusCode, Json<Session>)> {
    let errors = validate_session(&draft);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let session = state.db.create_session(&draft).await?;
    tracing::info!(session_id = %session.id, date = %session.date, "Session logged");
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/sessions/{id} — One session with its types and injuries.
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Session>> {
    state
        .db
        .get_session(id)
        .await?
        .map(Json)
        .ok_or(ApiError::SessionNotFound(id))
}

/// PUT /api/sessions/{id} — Full replace; owned rows are rewritten.
async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(draft): Json<SessionDraft>,
) -> ApiResult<Json<Session>> {
    let errors = validate_session(&draft);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    state
        .db
        .update_session(id, &draft)
        .await?
        .map(Json)
        .ok_or(ApiError::SessionNotFound(id))
}

/// DELETE /api/sessions/{id} — Remove the session and its child rows.
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if state.db.delete_session(id).await? {
        tracing::info!(session_id = %id, "Session deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use cruxlog_db::Database;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = Database::new_in_memory().await.expect("in-memory DB");
        Router::new()
            .nest("/api", router())
            .with_state(AppState::new(db))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn valid_draft() -> Value {
        json!({
            "date": "2026-01-28",
            "types": ["boulder"],
            "intensity": "moderate",
            "performance": "normal",
            "productivity": "normal"
        })
    }

    #[tokio::test]
    async fn test_create_returns_201_with_persisted_session() {
        let app = test_app().await;
        let (status, body) = send(&app, "POST", "/api/sessions", Some(valid_draft())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["date"], "2026-01-28");
        assert_eq!(body["types"], json!(["boulder"]));
        assert!(body["id"].is_string());
        assert!(body["createdAt"].is_string());
        assert_eq!(body["injuries"], json!([]));
    }

    #[tokio::test]
    async fn test_create_invalid_draft_returns_400_with_fields() {
        let app = test_app().await;
        let draft = json!({
            "date": "2026-01-28",
            "types": [],
            "intensity": "brutal",
            "performance": "normal",
            "productivity": "normal"
        });
        let (status, body) = send(&app, "POST", "/api/sessions", Some(draft)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["fields"]["types"], "At least one session type is required");
        assert!(body["fields"]["intensity"]
            .as_str()
            .unwrap()
            .contains("easy, moderate, hard"));

        // Nothing persisted
        let (_, listed) = send(&app, "GET", "/api/sessions", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_body_returns_structured_400() {
        let app = test_app().await;

        // Truncated JSON and a type mismatch both go through the same
        // error contract, not axum's plain-text rejection.
        for raw in [r#"{"date": "2026-01-28", "types": ["#, r#"{"date": 20260128}"#] {
            let request = Request::builder()
                .method("POST")
                .uri("/api/sessions")
                .header("content-type", "application/json")
                .body(Body::from(raw))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["error"], "Malformed request body");
            assert!(body["details"].is_string());
        }
    }

    #[tokio::test]
    async fn test_get_round_trips_created_session() {
        let app = test_app().await;
        let (_, created) = send(&app, "POST", "/api/sessions", Some(valid_draft())).await;
        let id = created["id"].as_str().unwrap();

        let (status, fetched) = send(&app, "GET", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_session_returns_404_contract() {
        let app = test_app().await;
        let id = Uuid::new_v4();
        let (status, body) = send(&app, "GET", &format!("/api/sessions/{}", id), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Session not found");
        assert_eq!(body["details"], format!("Session ID: {}", id));
    }

    #[tokio::test]
    async fn test_put_replaces_session() {
        let app = test_app().await;
        let (_, created) = send(&app, "POST", "/api/sessions", Some(valid_draft())).await;
        let id = created["id"].as_str().unwrap().to_string();

        let replacement = json!({
            "date": "2026-01-29",
            "types": ["routes", "prehab"],
            "intensity": "easy",
            "performance": "weak",
            "productivity": "low",
            "injuries": [{"location": "left elbow", "severity": 2}]
        });
        let (status, updated) =
            send(&app, "PUT", &format!("/api/sessions/{}", id), Some(replacement)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["date"], "2026-01-29");
        assert_eq!(updated["types"], json!(["prehab", "routes"]));
        assert_eq!(updated["injuries"][0]["location"], "left elbow");
        assert_eq!(updated["createdAt"], created["createdAt"]);
    }

    #[tokio::test]
    async fn test_put_missing_session_returns_404() {
        let app = test_app().await;
        let uri = format!("/api/sessions/{}", Uuid::new_v4());
        let (status, body) = send(&app, "PUT", &uri, Some(valid_draft())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Session not found");
    }

    #[tokio::test]
    async fn test_delete_returns_204_then_404() {
        let app = test_app().await;
        let (_, created) = send(&app, "POST", "/api/sessions", Some(valid_draft())).await;
        let uri = format!("/api/sessions/{}", created["id"].as_str().unwrap());

        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let app = test_app().await;
        for date in ["2026-01-10", "2026-01-28", "2026-01-19"] {
            let mut draft = valid_draft();
            draft["date"] = json!(date);
            send(&app, "POST", "/api/sessions", Some(draft)).await;
        }

        let (status, listed) = send(&app, "GET", "/api/sessions", None).await;
        assert_eq!(status, StatusCode::OK);
        let dates: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates, vec!["2026-01-28", "2026-01-19", "2026-01-10"]);
    }
}
