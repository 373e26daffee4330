// crates/server/src/lib.rs
//! Cruxlog server library.
//!
//! This crate provides the Axum-based HTTP server for the cruxlog training
//! log. It serves a REST API for recording climbing sessions and coach
//! insights, and for the derived training analytics.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::*;
pub use routes::api_routes;
pub use state::AppState;

use axum::Router;
use cruxlog_db::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes (health, sessions, insights, analytics, lookups)
/// - CORS for development (allows any origin)
/// - Request tracing
pub fn create_app(db: Database) -> Router {
    let state = AppState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = Database::new_in_memory().await.expect("in-memory DB");
        create_app(db)
    }

    async fn fetch(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_every_read_endpoint_serves_json() {
        let app = test_app().await;

        for uri in [
            "/api/health",
            "/api/sessions",
            "/api/insights",
            "/api/analytics",
            "/api/venues",
            "/api/injury-locations",
        ] {
            let (status, body) = fetch(&app, uri).await;
            assert_eq!(status, StatusCode::OK, "GET {} failed", uri);
            assert!(!body.is_null(), "GET {} returned an empty body", uri);
        }
    }

    #[tokio::test]
    async fn test_session_lifecycle_through_the_full_stack() {
        let app = test_app().await;

        let draft = json!({
            "date": "2026-01-28",
            "types": ["boulder"],
            "intensity": "hard",
            "performance": "strong",
            "productivity": "high",
            "venue": "The Depot"
        });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/sessions")
                    .header("content-type", "application/json")
                    .body(Body::from(draft.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // The logged session shows up in the list, its venue in the lookup,
        // and in this week's analytics count.
        let (_, sessions) = fetch(&app, "/api/sessions").await;
        assert_eq!(sessions.as_array().unwrap().len(), 1);
        let (_, venues) = fetch(&app, "/api/venues").await;
        assert_eq!(venues, json!(["The Depot"]));
        let (_, analytics) = fetch(&app, "/api/analytics").await;
        assert_eq!(analytics["weeklySessionCounts"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_error_bodies_share_one_json_contract() {
        let app = test_app().await;

        // Unknown resource id
        let (status, body) = fetch(
            &app,
            "/api/sessions/00000000-0000-0000-0000-000000000000",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Session not found");
        assert!(body["details"].as_str().unwrap().starts_with("Session ID:"));

        // Unroutable path under the prefix
        let (status, _) = fetch(&app, "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Anything outside /api is not served
        for uri in ["/", "/sessions", "/health"] {
            let (status, _) = fetch(&app, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{} should not route", uri);
        }
    }

    #[tokio::test]
    async fn test_preflight_gets_permissive_cors() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/sessions")
                    .header("Origin", "http://localhost:5173")
                    .header("Access-Control-Request-Method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .expect("preflight should carry CORS headers");
        assert_eq!(allow_origin, "*");
    }
}
