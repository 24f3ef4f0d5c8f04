//! Upload intake: size validation, content-type sniffing, and data-URL
//! encoding.
//!
//! A selected file becomes a plain string the document can hold — either
//! a remote object URL (the api crate's uploader) or, as the fallback, a
//! base64 data URL produced here. The size cap is enforced before any
//! encoding or network call so an oversized file never gets that far.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// 5 MiB, matching the original intake cap.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("upload is empty")]
    Empty,
    #[error("upload of {size} bytes exceeds the {max} byte cap")]
    TooLarge { size: usize, max: usize },
}

pub fn validate_upload(bytes: &[u8], max_bytes: usize) -> Result<(), UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::Empty);
    }
    if bytes.len() > max_bytes {
        return Err(UploadError::TooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }
    Ok(())
}

/// Best-effort content type from magic bytes; octet-stream when unknown.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        [b'<', b's', b'v', b'g', ..] | [b'<', b'?', b'x', b'm', b'l', ..] => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn to_data_url(bytes: &[u8], content_type: &str) -> String {
    format!("data:{content_type};base64,{}", BASE64.encode(bytes))
}

/// Validate then encode. The returned string goes into the document like
/// any other URL; with the cap enforced here the worst case stays within
/// what the storage slot tolerates.
pub fn encode_upload(
    bytes: &[u8],
    content_type: Option<&str>,
    max_bytes: usize,
) -> Result<String, UploadError> {
    validate_upload(bytes, max_bytes)?;
    let content_type = content_type.unwrap_or_else(|| sniff_content_type(bytes));
    Ok(to_data_url(bytes, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_upload_is_rejected_before_encoding() {
        let bytes = vec![0u8; DEFAULT_MAX_UPLOAD_BYTES + 1];
        assert_eq!(
            encode_upload(&bytes, None, DEFAULT_MAX_UPLOAD_BYTES),
            Err(UploadError::TooLarge {
                size: DEFAULT_MAX_UPLOAD_BYTES + 1,
                max: DEFAULT_MAX_UPLOAD_BYTES,
            })
        );
    }

    #[test]
    fn empty_upload_is_rejected() {
        assert_eq!(validate_upload(&[], 100), Err(UploadError::Empty));
    }

    #[test]
    fn data_url_carries_the_sniffed_type() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let url = encode_upload(&png, None, DEFAULT_MAX_UPLOAD_BYTES).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn explicit_content_type_wins_over_sniffing() {
        let url = encode_upload(b"hello", Some("text/plain"), 100).unwrap();
        assert_eq!(url, format!("data:text/plain;base64,{}", BASE64.encode(b"hello")));
    }

    #[test]
    fn sniffs_common_image_formats() {
        assert_eq!(sniff_content_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_content_type(b"GIF89a..."), "image/gif");
        assert_eq!(sniff_content_type(b"RIFF\x00\x00\x00\x00WEBPVP8"), "image/webp");
        assert_eq!(sniff_content_type(b"random bytes"), "application/octet-stream");
    }
}
