pub mod assets;
pub mod auth;
pub mod content;
pub mod health;
pub mod listen;
pub mod sections;

use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.uploader().max_bytes();
    Router::new()
        .merge(health::routes())
        .merge(content::routes())
        .merge(sections::routes())
        .merge(listen::routes())
        .merge(auth::routes())
        .merge(assets::routes(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use venue_cms_core::events::bus::EventBus;
    use venue_cms_core::store::storage::MemoryStorage;
    use venue_cms_core::store::ContentStore;

    use crate::auth::{AuthClient, SessionClaims};
    use crate::config::AppConfig;
    use crate::uploader::AssetUploader;

    const SECRET: &str = "test-session-secret";
    const UPLOAD_MAX: usize = 64;

    fn test_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            content_path: "unused".into(),
            auth_base_url: None,
            session_secret: SECRET.into(),
            asset_endpoint: None,
            upload_max_bytes: UPLOAD_MAX,
            upstream_timeout_secs: 1,
            event_bus_capacity: 16,
            log_level: "info".into(),
        }
    }

    fn test_app() -> (Router, ContentStore) {
        let store = ContentStore::open(MemoryStorage::new(), EventBus::new(16));
        let timeout = std::time::Duration::from_secs(1);
        let state = AppState::new(
            store.clone(),
            test_config(),
            AuthClient::new(None, timeout).unwrap(),
            AssetUploader::new(None, UPLOAD_MAX, timeout).unwrap(),
        );
        (build_router(state), store)
    }

    fn bearer() -> String {
        let claims = SessionClaims {
            sub: "operator-1".into(),
            email: None,
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        format!("Bearer {token}")
    }

    fn json_request(method: Method, uri: &str, body: Value, authed: bool) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if authed {
            builder = builder.header(header::AUTHORIZATION, bearer());
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn full_document_is_readable_without_a_session() {
        let (app, store) = test_app();
        let response = app
            .oneshot(Request::get("/v1/content").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["revision"], store.revision());
        assert_eq!(
            body["document"]["hero"]["title"],
            store.document().hero.title.as_str()
        );
    }

    #[tokio::test]
    async fn mutations_require_a_session() {
        let (app, store) = test_app();
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/v1/events",
                json!({"title": "No auth", "date": "2026-01-01"}),
                false,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(store.document().events.iter().all(|e| e.title != "No auth"));
    }

    #[tokio::test]
    async fn add_event_round_trips_through_the_store() {
        let (app, store) = test_app();
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/v1/events",
                json!({
                    "title": "Fresh",
                    "date": "2026-02-02",
                    "description": "d",
                    "image": "http://x/y.png"
                }),
                true,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["outcome"], "applied");
        let id = body["id"].as_str().unwrap();
        assert!(store.document().events.iter().any(|e| e.id.as_str() == id));
    }

    #[tokio::test]
    async fn patch_on_unknown_id_is_404() {
        let (app, _store) = test_app();
        let response = app
            .oneshot(json_request(
                Method::PATCH,
                "/v1/events/nonexistent-id",
                json!({"title": "B"}),
                true,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["type"], "notFound");
    }

    #[tokio::test]
    async fn missing_required_field_is_400_and_no_write() {
        let (app, store) = test_app();
        let revision = store.revision();
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/v1/social-links",
                json!({"platform": "", "url": "https://example.com"}),
                true,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.revision(), revision);
    }

    #[tokio::test]
    async fn section_read_applies_the_category_filter() {
        let (app, store) = test_app();
        // Seeded gallery has one image per category.
        let total = store.document().gallery.len();
        assert!(total > 1);

        let response = app
            .oneshot(
                Request::get("/v1/content/gallery?category=vip")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let filtered = body.as_array().unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["category"], "vip");
    }

    #[tokio::test]
    async fn unknown_section_is_404() {
        let (app, _store) = test_app();
        let response = app
            .oneshot(
                Request::get("/v1/content/mystery")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn singleton_put_replaces_wholesale() {
        let (app, store) = test_app();
        let response = app
            .oneshot(json_request(
                Method::PUT,
                "/v1/content/hero",
                json!({"title": "Published", "subtitle": "s", "videoUrl": "v"}),
                true,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.document().hero.title, "Published");
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected() {
        let (app, _store) = test_app();
        let response = app
            .oneshot(
                Request::post("/v1/assets?filename=big.bin")
                    .header(header::AUTHORIZATION, bearer())
                    .header(header::CONTENT_TYPE, "application/octet-stream")
                    .body(Body::from(vec![0u8; UPLOAD_MAX * 2]))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn small_upload_returns_a_data_url() {
        let (app, _store) = test_app();
        let response = app
            .oneshot(
                Request::post("/v1/assets?filename=logo.png")
                    .header(header::AUTHORIZATION, bearer())
                    .header(header::CONTENT_TYPE, "image/png")
                    .body(Body::from(&b"tiny"[..]))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn orphan_diagnostics_reports_dangling_slugs() {
        let (app, store) = test_app();
        // Delete every event category; seeded gallery keeps its slugs, so
        // only the event side is affected here.
        let ids: Vec<_> = store
            .document()
            .event_categories
            .iter()
            .map(|c| c.id.clone())
            .collect();
        for id in ids {
            store.delete_event_category(&id);
        }
        store.update_event(
            &store.document().events[0].id.clone(),
            venue_cms_core::mutation::types::EventPatch {
                category: Some("music".into()),
                ..Default::default()
            },
        );

        let response = app
            .oneshot(
                Request::get("/v1/content/diagnostics/orphans")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        let orphans = body["orphans"].as_array().unwrap();
        assert!(orphans.iter().any(|o| o["slug"] == "music"));
    }
}
