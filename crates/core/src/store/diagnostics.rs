//! Soft-reference diagnostics.
//!
//! Category slugs on events and gallery images are soft references:
//! deleting a category neither cascades nor nulls them out. This module
//! reports the records left pointing at a slug no category carries.

use serde::Serialize;

use crate::document::id::ContentId;
use crate::document::model::ContentDocument;
use crate::document::section::Section;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrphanedReference {
    pub section: Section,
    pub id: ContentId,
    pub slug: String,
}

pub fn find_orphaned_references(doc: &ContentDocument) -> Vec<OrphanedReference> {
    let mut orphans = Vec::new();

    let event_slugs: Vec<&str> = doc.event_categories.iter().map(|c| c.slug.as_str()).collect();
    for event in &doc.events {
        if let Some(slug) = dangling(event.category.as_deref(), &event_slugs) {
            orphans.push(OrphanedReference {
                section: Section::Events,
                id: event.id.clone(),
                slug: slug.to_string(),
            });
        }
    }

    let gallery_slugs: Vec<&str> =
        doc.gallery_categories.iter().map(|c| c.slug.as_str()).collect();
    for image in &doc.gallery {
        if let Some(slug) = dangling(image.category.as_deref(), &gallery_slugs) {
            orphans.push(OrphanedReference {
                section: Section::Gallery,
                id: image.id.clone(),
                slug: slug.to_string(),
            });
        }
    }

    orphans
}

/// An empty or absent category means "uncategorized", not a reference.
fn dangling<'a>(reference: Option<&'a str>, slugs: &[&str]) -> Option<&'a str> {
    match reference {
        Some(slug) if !slug.is_empty() && !slugs.contains(&slug) => Some(slug),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::{Event, EventCategory};

    #[test]
    fn reports_events_pointing_at_deleted_categories() {
        let mut doc = ContentDocument::default();
        doc.event_categories = vec![EventCategory {
            id: ContentId::from("c1"),
            name: "Music".into(),
            slug: "music".into(),
        }];
        doc.events = vec![
            Event {
                id: ContentId::from("e1"),
                title: "ok".into(),
                date: String::new(),
                description: String::new(),
                image: String::new(),
                category: Some("music".into()),
            },
            Event {
                id: ContentId::from("e2"),
                title: "orphan".into(),
                date: String::new(),
                description: String::new(),
                image: String::new(),
                category: Some("vip".into()),
            },
            Event {
                id: ContentId::from("e3"),
                title: "uncategorized".into(),
                date: String::new(),
                description: String::new(),
                image: String::new(),
                category: Some(String::new()),
            },
        ];

        let orphans = find_orphaned_references(&doc);
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].id, ContentId::from("e2"));
        assert_eq!(orphans[0].slug, "vip");
        assert_eq!(orphans[0].section, Section::Events);
    }

    #[test]
    fn seed_document_has_no_orphans() {
        assert!(find_orphaned_references(&ContentDocument::default()).is_empty());
    }
}
