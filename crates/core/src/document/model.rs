use serde::{Deserialize, Serialize};

use super::defaults;
use super::id::ContentId;

/// The editable site content, one nested record per section.
///
/// Field names follow the persisted wire format (camelCase), so a document
/// written by an earlier deployment deserializes unchanged. Every section
/// carries a default so partial documents normalize at load instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default = "defaults::hero")]
    pub hero: HeroContent,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub event_categories: Vec<EventCategory>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub gallery_categories: Vec<GalleryCategory>,
    #[serde(default = "defaults::about")]
    pub about: AboutContent,
    #[serde(default = "defaults::contact")]
    pub contact: ContactContent,
    #[serde(default)]
    pub bottle_service: Vec<BottleServicePackage>,
    #[serde(default = "defaults::navbar")]
    pub navbar: NavbarContent,
    #[serde(default = "defaults::footer")]
    pub footer: FooterContent,
}

impl Default for ContentDocument {
    fn default() -> Self {
        defaults::seed()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub video_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: ContentId,
    pub name: String,
    /// Referenced by `Event::category`. Uniqueness is not enforced here.
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: ContentId,
    pub title: String,
    /// Free-text date, displayed as entered.
    pub date: String,
    pub description: String,
    /// URL or data URL.
    pub image: String,
    /// Soft reference to an `EventCategory::slug`; deleting the category
    /// leaves this untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryCategory {
    pub id: ContentId,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: ContentId,
    pub image: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: ContentId,
    pub name: String,
    pub role: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Free-text opening hours.
    pub hours: String,
    pub map_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleServicePackage {
    pub id: ContentId,
    pub name: String,
    /// Displayed as entered ("$500", "from $1k", ...).
    pub price: String,
    pub description: String,
    pub image: String,
}

/// Navigation entry. `path` is an absolute route or a same-page anchor
/// (`#section`); not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: ContentId,
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: ContentId,
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: ContentId,
    /// Free-text platform name, matched case-insensitively against the
    /// known platforms at render time (see `view::SocialPlatform`).
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarContent {
    #[serde(default)]
    pub links: Vec<NavLink>,
    #[serde(default = "defaults::admin_button_text")]
    pub admin_button_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub quick_links: Vec<QuickLink>,
    #[serde(default = "defaults::newsletter_enabled")]
    pub newsletter_enabled: bool,
    #[serde(default = "defaults::copyright_text")]
    pub copyright_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_round_trips_through_json() {
        let doc = ContentDocument::default();
        let text = serde_json::to_string(&doc).unwrap();
        let back: ContentDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let doc = ContentDocument::default();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("eventCategories").is_some());
        assert!(value.get("bottleService").is_some());
        assert!(value["hero"].get("videoUrl").is_some());
        assert!(value["about"].get("teamMembers").is_some());
        assert!(value["contact"].get("mapUrl").is_some());
        assert!(value["footer"].get("newsletterEnabled").is_some());
        assert!(value["navbar"].get("adminButtonText").is_some());
    }

    #[test]
    fn missing_sections_fill_with_defaults() {
        // A document persisted before navbar/footer were editable.
        let legacy = r#"{
            "hero": {"title": "t", "subtitle": "s", "videoUrl": "v"},
            "events": [],
            "eventCategories": [],
            "gallery": [],
            "galleryCategories": [],
            "about": {"title": "a", "description": "d", "teamMembers": []},
            "contact": {"address": "", "phone": "", "email": "", "hours": "", "mapUrl": ""},
            "bottleService": []
        }"#;
        let doc: ContentDocument = serde_json::from_str(legacy).unwrap();
        assert_eq!(doc.navbar, defaults::navbar());
        assert_eq!(doc.footer, defaults::footer());
        assert!(doc.footer.newsletter_enabled);
    }
}
