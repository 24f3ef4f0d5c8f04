//! Versioned persistence envelope and load-time normalization.
//!
//! Schema history:
//! - v1: the bare `ContentDocument` JSON, no envelope. Written by the
//!   first deployment straight into the storage slot.
//! - v2 (current): `{ schemaVersion, revision, savedAt, content }`.
//!
//! Normalization runs exactly once, at load: a v1 payload is wrapped, and
//! any section missing from an older document is filled with its default
//! by the document's own serde hooks. Unknown fields are dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::ContentDocument;

pub const SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDocument {
    pub schema_version: u32,
    /// Monotonic save counter. Single-writer is assumed; the counter
    /// orders events and makes an out-of-band writer diagnosable.
    pub revision: u64,
    pub saved_at: DateTime<Utc>,
    pub content: ContentDocument,
}

impl PersistedDocument {
    pub fn new(content: ContentDocument, revision: u64, saved_at: DateTime<Utc>) -> Self {
        PersistedDocument {
            schema_version: SCHEMA_VERSION,
            revision,
            saved_at,
            content,
        }
    }
}

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("stored document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored document has unsupported schema version {0}")]
    UnsupportedVersion(u32),
}

/// Parse a stored payload into the current schema.
pub fn from_stored(text: &str) -> Result<PersistedDocument, MigrateError> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    let is_envelope = value
        .as_object()
        .is_some_and(|map| map.contains_key("schemaVersion") && map.contains_key("content"));

    if is_envelope {
        let stored: PersistedDocument = serde_json::from_value(value)?;
        if stored.schema_version > SCHEMA_VERSION {
            return Err(MigrateError::UnsupportedVersion(stored.schema_version));
        }
        return Ok(PersistedDocument {
            schema_version: SCHEMA_VERSION,
            ..stored
        });
    }

    // v1: the slot holds the bare document.
    let content: ContentDocument = serde_json::from_value(value)?;
    Ok(PersistedDocument::new(content, 0, Utc::now()))
}

pub fn to_stored(doc: &PersistedDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::defaults;

    #[test]
    fn envelope_round_trips() {
        let stored = PersistedDocument::new(ContentDocument::default(), 7, Utc::now());
        let text = to_stored(&stored).unwrap();
        let back = from_stored(&text).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn legacy_bare_document_is_wrapped_and_defaulted() {
        // Shape written by the first deployment: no envelope, no navbar
        // or footer sections yet.
        let legacy = serde_json::json!({
            "hero": {"title": "t", "subtitle": "s", "videoUrl": "v"},
            "events": [],
            "eventCategories": [],
            "gallery": [],
            "galleryCategories": [],
            "about": {"title": "a", "description": "d", "teamMembers": []},
            "contact": {
                "address": "", "phone": "", "email": "", "hours": "", "mapUrl": ""
            },
            "bottleService": []
        })
        .to_string();

        let stored = from_stored(&legacy).unwrap();
        assert_eq!(stored.schema_version, SCHEMA_VERSION);
        assert_eq!(stored.revision, 0);
        assert_eq!(stored.content.hero.title, "t");
        assert_eq!(stored.content.navbar, defaults::navbar());
        assert_eq!(stored.content.footer, defaults::footer());
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let mut value = serde_json::to_value(ContentDocument::default()).unwrap();
        value["somethingElse"] = serde_json::json!({"x": 1});
        let stored = from_stored(&value.to_string()).unwrap();
        assert_eq!(stored.content, ContentDocument::default());
    }

    #[test]
    fn malformed_payload_is_an_error_not_a_panic() {
        assert!(from_stored("not json at all").is_err());
        assert!(from_stored("[1, 2, 3]").is_err());
    }

    #[test]
    fn newer_schema_is_rejected() {
        let stored = PersistedDocument {
            schema_version: SCHEMA_VERSION + 1,
            revision: 1,
            saved_at: Utc::now(),
            content: ContentDocument::default(),
        };
        let text = serde_json::to_string(&stored).unwrap();
        assert!(matches!(
            from_stored(&text),
            Err(MigrateError::UnsupportedVersion(_))
        ));
    }
}
