//! Read side: the committed document, per-section projections with the
//! public page filters, and the soft-reference diagnostic.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use venue_cms_core::document::section::Section;
use venue_cms_core::view;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/content", get(full_document))
        .route("/v1/content/diagnostics/orphans", get(orphans))
        .route("/v1/content/{section}", get(section))
}

async fn full_document(State(state): State<AppState>) -> Json<Value> {
    let store = state.store();
    Json(json!({
        "revision": store.revision(),
        "document": *store.document(),
    }))
}

#[derive(Debug, Deserialize)]
struct SectionFilter {
    category: Option<String>,
}

async fn section(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(filter): Query<SectionFilter>,
) -> ApiResult<Json<Value>> {
    let section = Section::parse(&name)
        .ok_or_else(|| ApiError::NotFound(format!("unknown section `{name}`")))?;
    let doc = state.store().document();

    // Events and gallery take the same category filter the public page
    // sections apply client-side.
    let value = match (section, filter.category.as_deref()) {
        (Section::Events, Some(slug)) => {
            serde_json::to_value(view::events_in_category(&doc.events, Some(slug)))
                .unwrap_or(Value::Null)
        }
        (Section::Gallery, Some(slug)) => {
            serde_json::to_value(view::gallery_in_category(&doc.gallery, Some(slug)))
                .unwrap_or(Value::Null)
        }
        _ => view::section_value(&doc, section),
    };
    Ok(Json(value))
}

async fn orphans(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "orphans": state.store().find_orphaned_references(),
    }))
}
