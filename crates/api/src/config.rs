use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Path of the durable content slot (a single JSON file).
    pub content_path: String,
    /// Base URL of the external auth/tenant service.
    pub auth_base_url: Option<String>,
    /// Shared secret verifying externally issued session tokens (HS256).
    pub session_secret: String,
    /// Object-storage upload endpoint. Unset means uploads are encoded
    /// locally as data URLs.
    pub asset_endpoint: Option<String>,
    /// Upload size cap in bytes.
    pub upload_max_bytes: usize,
    /// Timeout applied to upstream auth and upload calls.
    pub upstream_timeout_secs: u64,
    /// Event bus channel capacity.
    pub event_bus_capacity: usize,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse("PORT", 3040)?,
            content_path: env::var("CONTENT_PATH")
                .unwrap_or_else(|_| "data/content.json".to_string()),
            auth_base_url: env::var("AUTH_BASE_URL").ok().filter(|s| !s.is_empty()),
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me-in-production".to_string()),
            asset_endpoint: env::var("ASSET_ENDPOINT").ok().filter(|s| !s.is_empty()),
            upload_max_bytes: parse(
                "UPLOAD_MAX_BYTES",
                venue_cms_core::assets::DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            upstream_timeout_secs: parse("UPSTREAM_TIMEOUT_SECS", 30)?,
            event_bus_capacity: parse("EVENT_BUS_CAPACITY", 256)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} is invalid: {e}")),
        Err(_) => Ok(default),
    }
}
