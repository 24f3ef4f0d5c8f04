//! Asset intake: push bytes to the configured object-storage endpoint
//! and fall back to a local data URL when there is no endpoint or the
//! upload fails. Either way the caller gets back a string the document
//! stores like any other URL.

use serde::Deserialize;
use venue_cms_core::assets;

use crate::error::ApiResult;

#[derive(Clone)]
pub struct AssetUploader {
    http: reqwest::Client,
    endpoint: Option<String>,
    max_bytes: usize,
}

#[derive(Debug, Deserialize)]
struct UploadReceipt {
    url: String,
}

impl AssetUploader {
    pub fn new(
        endpoint: Option<String>,
        max_bytes: usize,
        timeout: std::time::Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(AssetUploader {
            http,
            endpoint,
            max_bytes,
        })
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validate and store the bytes, returning the URL to put in the
    /// document. The size cap is checked before any encoding or network
    /// call.
    pub async fn store(
        &self,
        filename: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> ApiResult<String> {
        assets::validate_upload(bytes, self.max_bytes)?;

        if let Some(endpoint) = &self.endpoint {
            match self.push_remote(endpoint, filename, content_type, bytes).await {
                Ok(url) => return Ok(url),
                Err(err) => {
                    tracing::warn!(%err, filename, "remote upload failed, encoding locally");
                }
            }
        }

        Ok(assets::encode_upload(bytes, content_type, self.max_bytes)?)
    }

    async fn push_remote(
        &self,
        endpoint: &str,
        filename: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, reqwest::Error> {
        let url = format!("{}/{filename}", endpoint.trim_end_matches('/'));
        let content_type = content_type
            .unwrap_or_else(|| assets::sniff_content_type(bytes))
            .to_string();
        let receipt: UploadReceipt = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes.to_vec())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(receipt.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn uploader(endpoint: Option<String>) -> AssetUploader {
        AssetUploader::new(endpoint, 64, std::time::Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn no_endpoint_means_data_url() {
        let url = uploader(None)
            .store("logo.png", Some("image/png"), b"tiny")
            .await
            .unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected_without_encoding() {
        let bytes = vec![0u8; 65];
        let err = uploader(None)
            .store("big.png", None, &bytes)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::PayloadTooLarge(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back_to_data_url() {
        // Nothing listens here; the push fails fast and the data-URL
        // fallback kicks in.
        let url = uploader(Some("http://127.0.0.1:1/assets".into()))
            .store("logo.gif", None, b"GIF89a..")
            .await
            .unwrap();
        assert!(url.starts_with("data:image/gif;base64,"));
    }
}
