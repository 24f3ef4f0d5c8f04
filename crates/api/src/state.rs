use std::sync::Arc;

use venue_cms_core::store::ContentStore;

use crate::auth::AuthClient;
use crate::config::AppConfig;
use crate::uploader::AssetUploader;

/// Shared application state, passed to all handlers via Axum's `State`
/// extractor. Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    store: ContentStore,
    config: AppConfig,
    auth: AuthClient,
    uploader: AssetUploader,
}

impl AppState {
    pub fn new(
        store: ContentStore,
        config: AppConfig,
        auth: AuthClient,
        uploader: AssetUploader,
    ) -> Self {
        Self {
            inner: Arc::new(InnerState {
                store,
                config,
                auth,
                uploader,
            }),
        }
    }

    pub fn store(&self) -> &ContentStore {
        &self.inner.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn auth(&self) -> &AuthClient {
        &self.inner.auth
    }

    pub fn uploader(&self) -> &AssetUploader {
        &self.inner.uploader
    }
}
