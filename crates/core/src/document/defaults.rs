//! Compiled-in seed content, used when no stored document exists and as
//! the per-section fallback when an older stored document misses a field.

use super::id::ContentId;
use super::model::*;

pub fn seed() -> ContentDocument {
    ContentDocument {
        hero: hero(),
        events: events(),
        event_categories: event_categories(),
        gallery: gallery(),
        gallery_categories: gallery_categories(),
        about: about(),
        contact: contact(),
        bottle_service: bottle_service(),
        navbar: navbar(),
        footer: footer(),
    }
}

pub fn hero() -> HeroContent {
    HeroContent {
        title: "Dvanity Night Club".into(),
        subtitle: "Experience Luxury Nightlife".into(),
        video_url: "https://example.com/video.mp4".into(),
    }
}

pub fn event_categories() -> Vec<EventCategory> {
    [("1", "Music", "music"), ("2", "VIP", "vip"), ("3", "Special", "special")]
        .into_iter()
        .map(|(id, name, slug)| EventCategory {
            id: ContentId::from(id),
            name: name.into(),
            slug: slug.into(),
        })
        .collect()
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: ContentId::from("1"),
            title: "Summer Vibes Party".into(),
            date: "2023-07-15".into(),
            description:
                "Join us for the hottest summer party with top DJs and exclusive bottle service."
                    .into(),
            image: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=800&q=80".into(),
            category: None,
        },
        Event {
            id: ContentId::from("2"),
            title: "VIP Night".into(),
            date: "2023-07-22".into(),
            description: "Exclusive VIP night with celebrity guests and premium entertainment."
                .into(),
            image: "https://images.unsplash.com/photo-1566737236500-c8ac43014a67?w=800&q=80".into(),
            category: None,
        },
    ]
}

pub fn gallery_categories() -> Vec<GalleryCategory> {
    [
        ("1", "Atmosphere", "atmosphere"),
        ("2", "Event", "event"),
        ("3", "VIP", "vip"),
        ("4", "Bar", "bar"),
    ]
    .into_iter()
    .map(|(id, name, slug)| GalleryCategory {
        id: ContentId::from(id),
        name: name.into(),
        slug: slug.into(),
    })
    .collect()
}

pub fn gallery() -> Vec<GalleryImage> {
    [
        (
            "1",
            "https://images.unsplash.com/photo-1566737236500-c8ac43014a67?w=800&q=80",
            "Club atmosphere",
            "atmosphere",
        ),
        (
            "2",
            "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=800&q=80",
            "DJ booth",
            "event",
        ),
        (
            "3",
            "https://images.unsplash.com/photo-1545128485-c400ce7b6892?w=800&q=80",
            "VIP section",
            "vip",
        ),
        (
            "4",
            "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?w=800&q=80",
            "Dance floor",
            "bar",
        ),
    ]
    .into_iter()
    .map(|(id, image, caption, category)| GalleryImage {
        id: ContentId::from(id),
        image: image.into(),
        caption: caption.into(),
        category: Some(category.into()),
    })
    .collect()
}

pub fn about() -> AboutContent {
    AboutContent {
        title: "About Dvanity".into(),
        description: "Dvanity Night Club is the premier destination for luxury nightlife \
                      experiences. Established in 2010, we have been providing unforgettable \
                      nights with top-tier entertainment, exclusive bottle service, and a \
                      sophisticated atmosphere."
            .into(),
        team_members: vec![
            TeamMember {
                id: ContentId::from("1"),
                name: "John Smith".into(),
                role: "Owner".into(),
                image: "https://api.dicebear.com/7.x/avataaars/svg?seed=john".into(),
            },
            TeamMember {
                id: ContentId::from("2"),
                name: "Sarah Johnson".into(),
                role: "Manager".into(),
                image: "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah".into(),
            },
        ],
    }
}

pub fn contact() -> ContactContent {
    ContactContent {
        address: "123 Nightlife Ave, Los Angeles, CA 90001".into(),
        phone: "+1 (555) 123-4567".into(),
        email: "info@dvanity.com".into(),
        hours: "Thursday - Sunday: 10PM - 4AM".into(),
        map_url: "https://maps.example.com/dvanity".into(),
    }
}

pub fn bottle_service() -> Vec<BottleServicePackage> {
    [
        (
            "1",
            "Silver Package",
            "$500",
            "1 premium bottle, mixers, VIP seating for up to 4 guests",
        ),
        (
            "2",
            "Gold Package",
            "$1000",
            "2 premium bottles, mixers, VIP seating for up to 8 guests, priority entry",
        ),
        (
            "3",
            "Platinum Package",
            "$2000",
            "4 premium bottles, mixers, exclusive VIP area for up to 12 guests, priority entry, \
             personal server",
        ),
    ]
    .into_iter()
    .map(|(id, name, price, description)| BottleServicePackage {
        id: ContentId::from(id),
        name: name.into(),
        price: price.into(),
        description: description.into(),
        image: "https://images.unsplash.com/photo-1605270012917-bf357a1fae9e?w=800&q=80".into(),
    })
    .collect()
}

pub fn navbar() -> NavbarContent {
    let links = [
        ("1", "Home", "/"),
        ("2", "Events", "#events"),
        ("3", "Gallery", "#gallery"),
        ("4", "About", "#about"),
        ("5", "Contact", "#contact"),
        ("6", "Bottle Service", "#bottle-service"),
    ]
    .into_iter()
    .map(|(id, name, path)| NavLink {
        id: ContentId::from(id),
        name: name.into(),
        path: path.into(),
    })
    .collect();

    NavbarContent {
        links,
        admin_button_text: admin_button_text(),
        logo: None,
    }
}

pub fn footer() -> FooterContent {
    FooterContent {
        social_links: Vec::new(),
        quick_links: Vec::new(),
        newsletter_enabled: newsletter_enabled(),
        copyright_text: copyright_text(),
        logo: None,
    }
}

pub fn admin_button_text() -> String {
    "Admin".into()
}

pub fn newsletter_enabled() -> bool {
    true
}

pub fn copyright_text() -> String {
    "© {year} Dvanity Night Club. All rights reserved.".into()
}
