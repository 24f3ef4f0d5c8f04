use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check: reports the content revision, whether the last
/// save landed, and how many listeners are attached.
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store = state.store();
    Json(json!({
        "status": "ok",
        "contentRevision": store.revision(),
        "unsavedChanges": store.unsaved_changes(),
        "subscribers": store.event_bus().subscriber_count(),
    }))
}

/// Lightweight ping.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
