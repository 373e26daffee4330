//! API route handlers for the cruxlog server.

pub mod analytics;
pub mod health;
pub mod insights;
pub mod lookups;
pub mod sessions;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET /api/health - Health check
/// - GET /api/sessions - List all sessions, newest first
/// - POST /api/sessions - Log a new session
/// - GET /api/sessions/{id} - Get a specific session
/// - PUT /api/sessions/{id} - Replace a session
/// - DELETE /api/sessions/{id} - Delete a session
/// - GET /api/insights - List coach insights, pinned first
/// - POST /api/insights - Record a new insight
/// - GET /api/insights/{id} - Get a specific insight
/// - PUT /api/insights/{id} - Replace an insight
/// - DELETE /api/insights/{id} - Delete an insight
/// - GET /api/analytics - Training analytics bundle for today
/// - GET /api/venues - Distinct venues seen in the log
/// - GET /api/injury-locations - Distinct injury locations seen in the log
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", sessions::router())
        .nest("/api", insights::router())
        .nest("/api", analytics::router())
        .nest("/api", lookups::router())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_api_routes_creation() {
        let db = cruxlog_db::Database::new_in_memory().await.expect("in-memory DB");
        let state = AppState::new(db);
        let _router = api_routes(state);
    }
}
