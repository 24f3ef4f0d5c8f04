//! Pure transition functions, one per store operation.
//!
//! Each function takes the current document and returns the next document
//! plus a [`MutationOutcome`]. No I/O happens here; persistence and event
//! publication are the store's job, which keeps every transition testable
//! against plain values.

use crate::document::id::ContentId;
use crate::document::model::*;
use crate::document::section::Section;

use super::types::*;

fn patch<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn update_in<T>(
    items: &mut [T],
    id: &ContentId,
    id_of: impl Fn(&T) -> &ContentId,
    apply: impl FnOnce(&mut T),
) -> bool {
    match items.iter_mut().find(|item| id_of(item) == id) {
        Some(item) => {
            apply(item);
            true
        }
        None => false,
    }
}

fn remove_from<T>(items: &mut Vec<T>, id: &ContentId, id_of: impl Fn(&T) -> &ContentId) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

// Singleton sections: wholesale replace, always applied.

pub fn update_hero(doc: &ContentDocument, hero: HeroContent) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.hero = hero;
    (next, MutationOutcome::applied(Section::Hero, None))
}

pub fn update_about(
    doc: &ContentDocument,
    about: AboutContent,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.about = about;
    (next, MutationOutcome::applied(Section::About, None))
}

pub fn update_contact(
    doc: &ContentDocument,
    contact: ContactContent,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.contact = contact;
    (next, MutationOutcome::applied(Section::Contact, None))
}

pub fn update_navbar(
    doc: &ContentDocument,
    navbar: NavbarContent,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.navbar = navbar;
    (next, MutationOutcome::applied(Section::Navbar, None))
}

pub fn update_footer(
    doc: &ContentDocument,
    footer: FooterContent,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.footer = footer;
    (next, MutationOutcome::applied(Section::Footer, None))
}

// Events.

pub fn add_event(doc: &ContentDocument, input: EventInput) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.events.push(Event {
        id: id.clone(),
        title: input.title,
        date: input.date,
        description: input.description,
        image: input.image,
        category: input.category,
    });
    (next, MutationOutcome::applied(Section::Events, Some(id)))
}

pub fn update_event(
    doc: &ContentDocument,
    id: &ContentId,
    change: EventPatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.events, id, |e| &e.id, |e| {
        patch(&mut e.title, change.title);
        patch(&mut e.date, change.date);
        patch(&mut e.description, change.description);
        patch(&mut e.image, change.image);
        if let Some(category) = change.category {
            e.category = Some(category);
        }
    });
    (next, outcome(Section::Events, id, found))
}

pub fn delete_event(doc: &ContentDocument, id: &ContentId) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.events, id, |e| &e.id);
    (next, outcome(Section::Events, id, found))
}

pub fn replace_events(
    doc: &ContentDocument,
    events: Vec<Event>,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.events = events;
    (next, MutationOutcome::applied(Section::Events, None))
}

// Event categories. Deleting one does not touch events that reference its
// slug; that is the documented soft-reference contract.

pub fn add_event_category(
    doc: &ContentDocument,
    input: CategoryInput,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.event_categories.push(EventCategory {
        id: id.clone(),
        name: input.name,
        slug: input.slug,
    });
    (next, MutationOutcome::applied(Section::EventCategories, Some(id)))
}

pub fn update_event_category(
    doc: &ContentDocument,
    id: &ContentId,
    change: CategoryPatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.event_categories, id, |c| &c.id, |c| {
        patch(&mut c.name, change.name);
        patch(&mut c.slug, change.slug);
    });
    (next, outcome(Section::EventCategories, id, found))
}

pub fn delete_event_category(
    doc: &ContentDocument,
    id: &ContentId,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.event_categories, id, |c| &c.id);
    (next, outcome(Section::EventCategories, id, found))
}

pub fn replace_event_categories(
    doc: &ContentDocument,
    categories: Vec<EventCategory>,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.event_categories = categories;
    (next, MutationOutcome::applied(Section::EventCategories, None))
}

// Gallery.

pub fn add_gallery_image(
    doc: &ContentDocument,
    input: GalleryImageInput,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.gallery.push(GalleryImage {
        id: id.clone(),
        image: input.image,
        caption: input.caption,
        category: input.category,
    });
    (next, MutationOutcome::applied(Section::Gallery, Some(id)))
}

pub fn update_gallery_image(
    doc: &ContentDocument,
    id: &ContentId,
    change: GalleryImagePatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.gallery, id, |g| &g.id, |g| {
        patch(&mut g.image, change.image);
        patch(&mut g.caption, change.caption);
        if let Some(category) = change.category {
            g.category = Some(category);
        }
    });
    (next, outcome(Section::Gallery, id, found))
}

pub fn delete_gallery_image(
    doc: &ContentDocument,
    id: &ContentId,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.gallery, id, |g| &g.id);
    (next, outcome(Section::Gallery, id, found))
}

pub fn replace_gallery(
    doc: &ContentDocument,
    gallery: Vec<GalleryImage>,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.gallery = gallery;
    (next, MutationOutcome::applied(Section::Gallery, None))
}

pub fn add_gallery_category(
    doc: &ContentDocument,
    input: CategoryInput,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.gallery_categories.push(GalleryCategory {
        id: id.clone(),
        name: input.name,
        slug: input.slug,
    });
    (next, MutationOutcome::applied(Section::GalleryCategories, Some(id)))
}

pub fn update_gallery_category(
    doc: &ContentDocument,
    id: &ContentId,
    change: CategoryPatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.gallery_categories, id, |c| &c.id, |c| {
        patch(&mut c.name, change.name);
        patch(&mut c.slug, change.slug);
    });
    (next, outcome(Section::GalleryCategories, id, found))
}

pub fn delete_gallery_category(
    doc: &ContentDocument,
    id: &ContentId,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.gallery_categories, id, |c| &c.id);
    (next, outcome(Section::GalleryCategories, id, found))
}

pub fn replace_gallery_categories(
    doc: &ContentDocument,
    categories: Vec<GalleryCategory>,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.gallery_categories = categories;
    (next, MutationOutcome::applied(Section::GalleryCategories, None))
}

// Team members live inside the about section.

pub fn add_team_member(
    doc: &ContentDocument,
    input: TeamMemberInput,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.about.team_members.push(TeamMember {
        id: id.clone(),
        name: input.name,
        role: input.role,
        image: input.image,
    });
    (next, MutationOutcome::applied(Section::About, Some(id)))
}

pub fn update_team_member(
    doc: &ContentDocument,
    id: &ContentId,
    change: TeamMemberPatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.about.team_members, id, |m| &m.id, |m| {
        patch(&mut m.name, change.name);
        patch(&mut m.role, change.role);
        patch(&mut m.image, change.image);
    });
    (next, outcome(Section::About, id, found))
}

pub fn delete_team_member(
    doc: &ContentDocument,
    id: &ContentId,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.about.team_members, id, |m| &m.id);
    (next, outcome(Section::About, id, found))
}

// Bottle service.

pub fn add_bottle_package(
    doc: &ContentDocument,
    input: BottlePackageInput,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.bottle_service.push(BottleServicePackage {
        id: id.clone(),
        name: input.name,
        price: input.price,
        description: input.description,
        image: input.image,
    });
    (next, MutationOutcome::applied(Section::BottleService, Some(id)))
}

pub fn update_bottle_package(
    doc: &ContentDocument,
    id: &ContentId,
    change: BottlePackagePatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.bottle_service, id, |p| &p.id, |p| {
        patch(&mut p.name, change.name);
        patch(&mut p.price, change.price);
        patch(&mut p.description, change.description);
        patch(&mut p.image, change.image);
    });
    (next, outcome(Section::BottleService, id, found))
}

pub fn delete_bottle_package(
    doc: &ContentDocument,
    id: &ContentId,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.bottle_service, id, |p| &p.id);
    (next, outcome(Section::BottleService, id, found))
}

pub fn replace_bottle_service(
    doc: &ContentDocument,
    packages: Vec<BottleServicePackage>,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    next.bottle_service = packages;
    (next, MutationOutcome::applied(Section::BottleService, None))
}

// Nav links live inside the navbar section.

pub fn add_nav_link(doc: &ContentDocument, input: LinkInput) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.navbar.links.push(NavLink {
        id: id.clone(),
        name: input.name,
        path: input.path,
    });
    (next, MutationOutcome::applied(Section::Navbar, Some(id)))
}

pub fn update_nav_link(
    doc: &ContentDocument,
    id: &ContentId,
    change: LinkPatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.navbar.links, id, |l| &l.id, |l| {
        patch(&mut l.name, change.name);
        patch(&mut l.path, change.path);
    });
    (next, outcome(Section::Navbar, id, found))
}

pub fn delete_nav_link(
    doc: &ContentDocument,
    id: &ContentId,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.navbar.links, id, |l| &l.id);
    (next, outcome(Section::Navbar, id, found))
}

// Footer quick links and social links.

pub fn add_quick_link(
    doc: &ContentDocument,
    input: LinkInput,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.footer.quick_links.push(QuickLink {
        id: id.clone(),
        name: input.name,
        path: input.path,
    });
    (next, MutationOutcome::applied(Section::Footer, Some(id)))
}

pub fn update_quick_link(
    doc: &ContentDocument,
    id: &ContentId,
    change: LinkPatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.footer.quick_links, id, |l| &l.id, |l| {
        patch(&mut l.name, change.name);
        patch(&mut l.path, change.path);
    });
    (next, outcome(Section::Footer, id, found))
}

pub fn delete_quick_link(
    doc: &ContentDocument,
    id: &ContentId,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.footer.quick_links, id, |l| &l.id);
    (next, outcome(Section::Footer, id, found))
}

pub fn add_social_link(
    doc: &ContentDocument,
    input: SocialLinkInput,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let id = ContentId::generate();
    next.footer.social_links.push(SocialLink {
        id: id.clone(),
        platform: input.platform,
        url: input.url,
    });
    (next, MutationOutcome::applied(Section::Footer, Some(id)))
}

pub fn update_social_link(
    doc: &ContentDocument,
    id: &ContentId,
    change: SocialLinkPatch,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = update_in(&mut next.footer.social_links, id, |l| &l.id, |l| {
        patch(&mut l.platform, change.platform);
        patch(&mut l.url, change.url);
    });
    (next, outcome(Section::Footer, id, found))
}

pub fn delete_social_link(
    doc: &ContentDocument,
    id: &ContentId,
) -> (ContentDocument, MutationOutcome) {
    let mut next = doc.clone();
    let found = remove_from(&mut next.footer.social_links, id, |l| &l.id);
    (next, outcome(Section::Footer, id, found))
}

fn outcome(section: Section, id: &ContentId, found: bool) -> MutationOutcome {
    if found {
        MutationOutcome::applied(section, Some(id.clone()))
    } else {
        MutationOutcome::not_found(section, id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_doc() -> ContentDocument {
        ContentDocument {
            events: Vec::new(),
            event_categories: Vec::new(),
            gallery: Vec::new(),
            gallery_categories: Vec::new(),
            bottle_service: Vec::new(),
            ..ContentDocument::default()
        }
    }

    #[test]
    fn add_event_assigns_id_and_appends() {
        let doc = empty_doc();
        let (next, out) = add_event(
            &doc,
            EventInput {
                title: "Test".into(),
                date: "2024-01-01".into(),
                description: "d".into(),
                image: "http://x/y.png".into(),
                category: Some(String::new()),
            },
        );
        assert_eq!(next.events.len(), 1);
        assert_eq!(next.events[0].title, "Test");
        assert!(!next.events[0].id.is_empty());
        assert_eq!(out.record_id(), Some(&next.events[0].id));
        assert!(out.is_applied());
        // The source document is untouched.
        assert!(doc.events.is_empty());
    }

    #[test]
    fn update_preserves_unspecified_fields() {
        let mut doc = empty_doc();
        doc.events.push(Event {
            id: ContentId::from("e1"),
            title: "A".into(),
            date: "D".into(),
            description: "desc".into(),
            image: "img".into(),
            category: Some("music".into()),
        });
        let (next, out) = update_event(
            &doc,
            &ContentId::from("e1"),
            EventPatch {
                title: Some("B".into()),
                ..EventPatch::default()
            },
        );
        assert!(out.is_applied());
        let event = &next.events[0];
        assert_eq!(event.title, "B");
        assert_eq!(event.date, "D");
        assert_eq!(event.description, "desc");
        assert_eq!(event.image, "img");
        assert_eq!(event.category.as_deref(), Some("music"));
    }

    #[test]
    fn update_missing_id_reports_not_found_and_changes_nothing() {
        let mut doc = empty_doc();
        doc.events.push(Event {
            id: ContentId::from("e1"),
            title: "A".into(),
            date: "D".into(),
            description: String::new(),
            image: String::new(),
            category: None,
        });
        let (next, out) = update_event(
            &doc,
            &ContentId::from("nonexistent-id"),
            EventPatch {
                title: Some("B".into()),
                ..EventPatch::default()
            },
        );
        assert_eq!(
            out,
            MutationOutcome::not_found(Section::Events, ContentId::from("nonexistent-id"))
        );
        assert_eq!(next.events, doc.events);
    }

    #[test]
    fn delete_removes_exactly_one_order_preserved() {
        let mut doc = empty_doc();
        for id in ["e1", "e2"] {
            doc.events.push(Event {
                id: ContentId::from(id),
                title: id.to_uppercase(),
                date: String::new(),
                description: String::new(),
                image: String::new(),
                category: None,
            });
        }
        let (next, out) = delete_event(&doc, &ContentId::from("e1"));
        assert!(out.is_applied());
        assert_eq!(next.events.len(), 1);
        assert_eq!(next.events[0].id, ContentId::from("e2"));

        let (unchanged, out) = delete_event(&next, &ContentId::from("e1"));
        assert!(!out.is_applied());
        assert_eq!(unchanged.events, next.events);
    }

    #[test]
    fn category_deletion_does_not_cascade() {
        let mut doc = empty_doc();
        doc.event_categories.push(EventCategory {
            id: ContentId::from("c1"),
            name: "VIP".into(),
            slug: "vip".into(),
        });
        doc.events.push(Event {
            id: ContentId::from("e1"),
            title: "t".into(),
            date: String::new(),
            description: String::new(),
            image: String::new(),
            category: Some("vip".into()),
        });
        let (next, out) = delete_event_category(&doc, &ContentId::from("c1"));
        assert!(out.is_applied());
        assert!(next.event_categories.is_empty());
        // The referencing event keeps its slug.
        assert_eq!(next.events[0].category.as_deref(), Some("vip"));
    }

    #[test]
    fn team_members_nest_under_about() {
        let doc = empty_doc();
        let (next, out) = add_team_member(
            &doc,
            TeamMemberInput {
                name: "Dana".into(),
                role: "Host".into(),
                image: String::new(),
            },
        );
        let id = out.record_id().unwrap().clone();
        let members_before = doc.about.team_members.len();
        assert_eq!(next.about.team_members.len(), members_before + 1);

        let (next, out) = update_team_member(
            &next,
            &id,
            TeamMemberPatch {
                role: Some("Manager".into()),
                ..TeamMemberPatch::default()
            },
        );
        assert!(out.is_applied());
        let member = next.about.team_members.iter().find(|m| m.id == id).unwrap();
        assert_eq!(member.name, "Dana");
        assert_eq!(member.role, "Manager");

        let (next, out) = delete_team_member(&next, &id);
        assert!(out.is_applied());
        assert!(next.about.team_members.iter().all(|m| m.id != id));
    }

    #[test]
    fn replace_events_is_wholesale() {
        let mut doc = empty_doc();
        doc.events.push(Event {
            id: ContentId::from("e1"),
            title: "old".into(),
            date: String::new(),
            description: String::new(),
            image: String::new(),
            category: None,
        });
        let (next, out) = replace_events(&doc, Vec::new());
        assert!(out.is_applied());
        assert!(next.events.is_empty());
    }

    #[test]
    fn social_link_crud_targets_footer() {
        let doc = empty_doc();
        let (next, out) = add_social_link(
            &doc,
            SocialLinkInput {
                platform: "Instagram".into(),
                url: "https://instagram.com/dvanity".into(),
            },
        );
        assert_eq!(out.section(), Section::Footer);
        let id = out.record_id().unwrap().clone();
        assert_eq!(next.footer.social_links.len(), 1);

        let (next, out) = update_social_link(
            &next,
            &id,
            SocialLinkPatch {
                url: Some("https://instagram.com/dvanity.club".into()),
                ..SocialLinkPatch::default()
            },
        );
        assert!(out.is_applied());
        assert_eq!(next.footer.social_links[0].platform, "Instagram");

        let (next, out) = delete_social_link(&next, &id);
        assert!(out.is_applied());
        assert!(next.footer.social_links.is_empty());
    }

    #[test]
    fn singleton_updates_always_apply() {
        let doc = empty_doc();
        let hero = HeroContent {
            title: "New".into(),
            subtitle: "Night".into(),
            video_url: "v".into(),
        };
        let (next, out) = update_hero(&doc, hero.clone());
        assert_eq!(out, MutationOutcome::applied(Section::Hero, None));
        assert_eq!(next.hero, hero);
    }
}
