//! Upload intake. The body limit layer caps the request before it is
//! buffered; the uploader validates again before encoding or pushing.

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::limit::RequestBodyLimitLayer;

use crate::auth::Session;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes(max_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/v1/assets", post(upload))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_bytes))
}

#[derive(Debug, Deserialize)]
struct UploadParams {
    filename: Option<String>,
}

async fn upload(
    session: Session,
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let filename = params
        .filename
        .unwrap_or_else(|| format!("upload-{}", uuid::Uuid::new_v4()));

    tracing::info!(
        user = %session.claims.sub,
        filename,
        bytes = body.len(),
        "storing upload"
    );
    let url = state
        .uploader()
        .store(&filename, content_type, &body)
        .await?;
    Ok(Json(json!({ "url": url })))
}
