use std::fmt;

use serde::{Deserialize, Serialize};

/// Named top-level subtree of the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Hero,
    Events,
    EventCategories,
    Gallery,
    GalleryCategories,
    About,
    Contact,
    BottleService,
    Navbar,
    Footer,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Hero,
        Section::Events,
        Section::EventCategories,
        Section::Gallery,
        Section::GalleryCategories,
        Section::About,
        Section::Contact,
        Section::BottleService,
        Section::Navbar,
        Section::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Events => "events",
            Section::EventCategories => "eventCategories",
            Section::Gallery => "gallery",
            Section::GalleryCategories => "galleryCategories",
            Section::About => "about",
            Section::Contact => "contact",
            Section::BottleService => "bottleService",
            Section::Navbar => "navbar",
            Section::Footer => "footer",
        }
    }

    /// Parse a section name as it appears in wire payloads or URL paths.
    /// Accepts both camelCase and kebab-case spellings.
    pub fn parse(raw: &str) -> Option<Section> {
        match raw {
            "hero" => Some(Section::Hero),
            "events" => Some(Section::Events),
            "eventCategories" | "event-categories" => Some(Section::EventCategories),
            "gallery" => Some(Section::Gallery),
            "galleryCategories" | "gallery-categories" => Some(Section::GalleryCategories),
            "about" => Some(Section::About),
            "contact" => Some(Section::Contact),
            "bottleService" | "bottle-service" => Some(Section::BottleService),
            "navbar" => Some(Section::Navbar),
            "footer" => Some(Section::Footer),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
