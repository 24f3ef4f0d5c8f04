//! Mutation payload types for the content store.
//!
//! Add payloads omit the id (the store assigns one on creation); patch
//! payloads carry `Option` per field and preserve anything unspecified.

use serde::{Deserialize, Serialize};

use crate::document::id::ContentId;
use crate::document::section::Section;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryImageInput {
    pub image: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryImagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMemberInput {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMemberPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BottlePackageInput {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BottlePackagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Shared by nav links and footer quick links; both are name + path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkInput {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinkInput {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// What a transition did. A missing id is reported, not swallowed; callers
/// decide whether to warn, 404, or ignore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum MutationOutcome {
    Applied {
        section: Section,
        /// The created or touched record id; `None` for singleton and
        /// bulk-replace writes.
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<ContentId>,
    },
    NotFound { section: Section, id: ContentId },
}

impl MutationOutcome {
    pub fn applied(section: Section, id: Option<ContentId>) -> Self {
        MutationOutcome::Applied { section, id }
    }

    pub fn not_found(section: Section, id: ContentId) -> Self {
        MutationOutcome::NotFound { section, id }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }

    pub fn section(&self) -> Section {
        match self {
            MutationOutcome::Applied { section, .. } => *section,
            MutationOutcome::NotFound { section, .. } => *section,
        }
    }

    /// Id of the record the mutation created or targeted, if any.
    pub fn record_id(&self) -> Option<&ContentId> {
        match self {
            MutationOutcome::Applied { id, .. } => id.as_ref(),
            MutationOutcome::NotFound { id, .. } => Some(id),
        }
    }
}
