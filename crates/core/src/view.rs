//! Read-only projections of the committed document, shared by the public
//! page sections and the editor preview. Filtering is in-memory and
//! recomputed per call; the collections are tens of items at most.

use serde_json::Value;

use crate::document::model::{ContentDocument, Event, GalleryImage};
use crate::document::section::Section;

/// Known social platforms, parsed case-insensitively from the free-text
/// value stored on a `SocialLink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    Tiktok,
    Youtube,
    Unknown,
}

/// Display icon for a platform. Unrecognized platforms get the generic
/// external-link icon instead of disappearing from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Facebook,
    Instagram,
    Twitter,
    Tiktok,
    Youtube,
    ExternalLink,
}

impl SocialPlatform {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "facebook" => SocialPlatform::Facebook,
            "instagram" => SocialPlatform::Instagram,
            "twitter" | "x" => SocialPlatform::Twitter,
            "tiktok" => SocialPlatform::Tiktok,
            "youtube" => SocialPlatform::Youtube,
            _ => SocialPlatform::Unknown,
        }
    }

    pub fn icon(&self) -> SocialIcon {
        match self {
            SocialPlatform::Facebook => SocialIcon::Facebook,
            SocialPlatform::Instagram => SocialIcon::Instagram,
            SocialPlatform::Twitter => SocialIcon::Twitter,
            SocialPlatform::Tiktok => SocialIcon::Tiktok,
            SocialPlatform::Youtube => SocialIcon::Youtube,
            SocialPlatform::Unknown => SocialIcon::ExternalLink,
        }
    }
}

/// Events in a category, insertion order preserved. `None` or `"all"`
/// means no filter; matching is by exact slug.
pub fn events_in_category<'a>(events: &'a [Event], slug: Option<&str>) -> Vec<&'a Event> {
    match slug {
        None | Some("all") | Some("") => events.iter().collect(),
        Some(slug) => events
            .iter()
            .filter(|e| e.category.as_deref() == Some(slug))
            .collect(),
    }
}

pub fn gallery_in_category<'a>(
    gallery: &'a [GalleryImage],
    slug: Option<&str>,
) -> Vec<&'a GalleryImage> {
    match slug {
        None | Some("all") | Some("") => gallery.iter().collect(),
        Some(slug) => gallery
            .iter()
            .filter(|g| g.category.as_deref() == Some(slug))
            .collect(),
    }
}

/// One section of the document as a JSON value, in wire shape.
pub fn section_value(doc: &ContentDocument, section: Section) -> Value {
    let value = match section {
        Section::Hero => serde_json::to_value(&doc.hero),
        Section::Events => serde_json::to_value(&doc.events),
        Section::EventCategories => serde_json::to_value(&doc.event_categories),
        Section::Gallery => serde_json::to_value(&doc.gallery),
        Section::GalleryCategories => serde_json::to_value(&doc.gallery_categories),
        Section::About => serde_json::to_value(&doc.about),
        Section::Contact => serde_json::to_value(&doc.contact),
        Section::BottleService => serde_json::to_value(&doc.bottle_service),
        Section::Navbar => serde_json::to_value(&doc.navbar),
        Section::Footer => serde_json::to_value(&doc.footer),
    };
    // Serializing plain data structs cannot fail.
    value.unwrap_or(Value::Null)
}

/// Fill the `{year}` placeholder the copyright line is stored with.
pub fn render_copyright(text: &str, year: i32) -> String {
    text.replace("{year}", &year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::id::ContentId;

    fn event(id: &str, category: Option<&str>) -> Event {
        Event {
            id: ContentId::from(id),
            title: id.to_string(),
            date: String::new(),
            description: String::new(),
            image: String::new(),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn platform_matching_is_case_insensitive_with_fallback() {
        assert_eq!(SocialPlatform::parse("Facebook"), SocialPlatform::Facebook);
        assert_eq!(SocialPlatform::parse("TIKTOK"), SocialPlatform::Tiktok);
        assert_eq!(SocialPlatform::parse(" instagram "), SocialPlatform::Instagram);
        assert_eq!(SocialPlatform::parse("mastodon"), SocialPlatform::Unknown);
        assert_eq!(
            SocialPlatform::parse("mastodon").icon(),
            SocialIcon::ExternalLink
        );
    }

    #[test]
    fn category_filter_preserves_order_and_handles_all() {
        let events = vec![
            event("e1", Some("music")),
            event("e2", Some("vip")),
            event("e3", Some("music")),
            event("e4", None),
        ];
        let music = events_in_category(&events, Some("music"));
        assert_eq!(
            music.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            ["e1", "e3"]
        );
        assert_eq!(events_in_category(&events, Some("all")).len(), 4);
        assert_eq!(events_in_category(&events, None).len(), 4);
        assert!(events_in_category(&events, Some("techno")).is_empty());
    }

    #[test]
    fn section_value_projects_wire_shape() {
        let doc = ContentDocument::default();
        let hero = section_value(&doc, Section::Hero);
        assert_eq!(hero["title"], doc.hero.title.as_str());
        assert!(hero.get("videoUrl").is_some());

        let events = section_value(&doc, Section::Events);
        assert!(events.is_array());
    }

    #[test]
    fn copyright_year_placeholder() {
        assert_eq!(
            render_copyright("© {year} Dvanity Night Club. All rights reserved.", 2026),
            "© 2026 Dvanity Night Club. All rights reserved."
        );
        // No placeholder, no change.
        assert_eq!(render_copyright("© Dvanity", 2026), "© Dvanity");
    }
}
