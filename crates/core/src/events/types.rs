use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::section::Section;

/// Events emitted after successful commits, consumed by SSE listeners and
/// any in-process observer of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentEvent {
    /// First frame on a new listener stream.
    Welcome,
    Changed(ChangeEvent),
}

/// One section changed. Subscription granularity is the whole document:
/// consumers re-read the document on any event, whichever section it
/// names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub section: Section,
    pub previous_revision: u64,
    pub revision: u64,
    pub timestamp: DateTime<Utc>,
}

impl ContentEvent {
    pub fn changed(section: Section, previous_revision: u64, revision: u64) -> Self {
        ContentEvent::Changed(ChangeEvent {
            section,
            previous_revision,
            revision,
            timestamp: Utc::now(),
        })
    }
}
