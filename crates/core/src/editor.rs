//! Admin editor controller: section-local drafts over the committed
//! document, a dialog state machine for add/edit forms, and the two
//! commit paths.
//!
//! Nothing here touches the store until one of the commit operations
//! runs: [`EditorSession::apply_immediately`] commits a single record
//! from a dialog, [`EditorSession::commit_draft`] pushes one section's
//! draft wholesale, and [`EditorSession::publish_all`] pushes every
//! section ("save everything visible", not a diff).

use serde_json::Value;

use crate::document::id::ContentId;
use crate::document::model::*;
use crate::document::section::Section;
use crate::document::validate::{self, ValidationError};
use crate::mutation::types::*;
use crate::store::ContentStore;
use crate::view;

/// The record types edited through add/edit dialogs. Finer-grained than
/// [`Section`]: the footer owns two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Event,
    EventCategory,
    GalleryImage,
    GalleryCategory,
    TeamMember,
    BottlePackage,
    NavLink,
    QuickLink,
    SocialLink,
}

/// One dialog at a time. The editing id is what disambiguates an add
/// submit from an update submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Adding {
        kind: RecordKind,
    },
    Editing {
        kind: RecordKind,
        id: ContentId,
    },
}

/// A filled dialog form, one variant per editable record type.
#[derive(Debug, Clone)]
pub enum RecordForm {
    Event(EventInput),
    EventCategory(CategoryInput),
    GalleryImage(GalleryImageInput),
    GalleryCategory(CategoryInput),
    TeamMember(TeamMemberInput),
    BottlePackage(BottlePackageInput),
    NavLink(LinkInput),
    QuickLink(LinkInput),
    SocialLink(SocialLinkInput),
}

impl RecordForm {
    fn kind(&self) -> RecordKind {
        match self {
            RecordForm::Event(_) => RecordKind::Event,
            RecordForm::EventCategory(_) => RecordKind::EventCategory,
            RecordForm::GalleryImage(_) => RecordKind::GalleryImage,
            RecordForm::GalleryCategory(_) => RecordKind::GalleryCategory,
            RecordForm::TeamMember(_) => RecordKind::TeamMember,
            RecordForm::BottlePackage(_) => RecordKind::BottlePackage,
            RecordForm::NavLink(_) => RecordKind::NavLink,
            RecordForm::QuickLink(_) => RecordKind::QuickLink,
            RecordForm::SocialLink(_) => RecordKind::SocialLink,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            RecordForm::Event(form) => validate::validate_event(form),
            RecordForm::EventCategory(form) | RecordForm::GalleryCategory(form) => {
                validate::validate_category(form)
            }
            RecordForm::GalleryImage(form) => validate::validate_gallery_image(form),
            RecordForm::TeamMember(form) => validate::validate_team_member(form),
            RecordForm::BottlePackage(form) => validate::validate_bottle_package(form),
            RecordForm::NavLink(form) | RecordForm::QuickLink(form) => {
                validate::validate_link(form)
            }
            RecordForm::SocialLink(form) => validate::validate_social_link(form),
        }
    }
}

/// Editor-local copies of every section. Controlled inputs mutate these;
/// the store sees nothing until a commit.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDrafts {
    pub hero: HeroContent,
    pub events: Vec<Event>,
    pub event_categories: Vec<EventCategory>,
    pub gallery: Vec<GalleryImage>,
    pub gallery_categories: Vec<GalleryCategory>,
    pub about: AboutContent,
    pub contact: ContactContent,
    pub bottle_service: Vec<BottleServicePackage>,
    pub navbar: NavbarContent,
    pub footer: FooterContent,
}

impl SectionDrafts {
    fn from_document(doc: &ContentDocument) -> Self {
        SectionDrafts {
            hero: doc.hero.clone(),
            events: doc.events.clone(),
            event_categories: doc.event_categories.clone(),
            gallery: doc.gallery.clone(),
            gallery_categories: doc.gallery_categories.clone(),
            about: doc.about.clone(),
            contact: doc.contact.clone(),
            bottle_service: doc.bottle_service.clone(),
            navbar: doc.navbar.clone(),
            footer: doc.footer.clone(),
        }
    }

    fn to_document(&self) -> ContentDocument {
        ContentDocument {
            hero: self.hero.clone(),
            events: self.events.clone(),
            event_categories: self.event_categories.clone(),
            gallery: self.gallery.clone(),
            gallery_categories: self.gallery_categories.clone(),
            about: self.about.clone(),
            contact: self.contact.clone(),
            bottle_service: self.bottle_service.clone(),
            navbar: self.navbar.clone(),
            footer: self.footer.clone(),
        }
    }
}

pub struct EditorSession {
    drafts: SectionDrafts,
    base_revision: u64,
    dialog: DialogState,
}

impl EditorSession {
    pub fn new(store: &ContentStore) -> Self {
        EditorSession {
            drafts: SectionDrafts::from_document(&store.document()),
            base_revision: store.revision(),
            dialog: DialogState::Closed,
        }
    }

    pub fn drafts(&self) -> &SectionDrafts {
        &self.drafts
    }

    /// Controlled-input access: mutations land in the drafts only.
    pub fn drafts_mut(&mut self) -> &mut SectionDrafts {
        &mut self.drafts
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Re-clone drafts when the store moved underneath us (another commit
    /// happened since this session last synced). Returns whether a
    /// refresh happened. Unsynced draft edits are discarded, like the
    /// original editor's remount-on-change behavior.
    pub fn refresh(&mut self, store: &ContentStore) -> bool {
        if store.revision() == self.base_revision {
            return false;
        }
        self.drafts = SectionDrafts::from_document(&store.document());
        self.base_revision = store.revision();
        true
    }

    pub fn open_add(&mut self, kind: RecordKind) {
        self.dialog = DialogState::Adding { kind };
    }

    /// Open an edit dialog: sets the editing id and returns the form
    /// pre-filled from the target record. `None` (unknown id) leaves the
    /// dialog closed.
    pub fn open_edit(&mut self, kind: RecordKind, id: &ContentId) -> Option<RecordForm> {
        let form = self.prefill(kind, id)?;
        self.dialog = DialogState::Editing {
            kind,
            id: id.clone(),
        };
        Some(form)
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Per-item commit, straight through the store mutators. Whether this
    /// adds or updates is decided by the dialog state: an open edit
    /// dialog for the same record kind updates its target, anything else
    /// adds. Validation failures leave the dialog open and the store
    /// untouched.
    pub fn apply_immediately(
        &mut self,
        store: &ContentStore,
        form: RecordForm,
    ) -> Result<MutationOutcome, ValidationError> {
        form.validate()?;

        let editing = match &self.dialog {
            DialogState::Editing { kind, id } if *kind == form.kind() => Some(id.clone()),
            _ => None,
        };

        let outcome = match (form, editing) {
            (RecordForm::Event(input), None) => store.add_event(input),
            (RecordForm::Event(input), Some(id)) => store.update_event(
                &id,
                EventPatch {
                    title: Some(input.title),
                    date: Some(input.date),
                    description: Some(input.description),
                    image: Some(input.image),
                    category: input.category,
                },
            ),
            (RecordForm::EventCategory(input), None) => store.add_event_category(input),
            (RecordForm::EventCategory(input), Some(id)) => store.update_event_category(
                &id,
                CategoryPatch {
                    name: Some(input.name),
                    slug: Some(input.slug),
                },
            ),
            (RecordForm::GalleryImage(input), None) => store.add_gallery_image(input),
            (RecordForm::GalleryImage(input), Some(id)) => store.update_gallery_image(
                &id,
                GalleryImagePatch {
                    image: Some(input.image),
                    caption: Some(input.caption),
                    category: input.category,
                },
            ),
            (RecordForm::GalleryCategory(input), None) => store.add_gallery_category(input),
            (RecordForm::GalleryCategory(input), Some(id)) => store.update_gallery_category(
                &id,
                CategoryPatch {
                    name: Some(input.name),
                    slug: Some(input.slug),
                },
            ),
            (RecordForm::TeamMember(input), None) => store.add_team_member(input),
            (RecordForm::TeamMember(input), Some(id)) => store.update_team_member(
                &id,
                TeamMemberPatch {
                    name: Some(input.name),
                    role: Some(input.role),
                    image: Some(input.image),
                },
            ),
            (RecordForm::BottlePackage(input), None) => store.add_bottle_package(input),
            (RecordForm::BottlePackage(input), Some(id)) => store.update_bottle_package(
                &id,
                BottlePackagePatch {
                    name: Some(input.name),
                    price: Some(input.price),
                    description: Some(input.description),
                    image: Some(input.image),
                },
            ),
            (RecordForm::NavLink(input), None) => store.add_nav_link(input),
            (RecordForm::NavLink(input), Some(id)) => store.update_nav_link(
                &id,
                LinkPatch {
                    name: Some(input.name),
                    path: Some(input.path),
                },
            ),
            (RecordForm::QuickLink(input), None) => store.add_quick_link(input),
            (RecordForm::QuickLink(input), Some(id)) => store.update_quick_link(
                &id,
                LinkPatch {
                    name: Some(input.name),
                    path: Some(input.path),
                },
            ),
            (RecordForm::SocialLink(input), None) => store.add_social_link(input),
            (RecordForm::SocialLink(input), Some(id)) => store.update_social_link(
                &id,
                SocialLinkPatch {
                    platform: Some(input.platform),
                    url: Some(input.url),
                },
            ),
        };

        self.close_dialog();
        self.refresh(store);
        Ok(outcome)
    }

    /// Section-level commit: push this section's entire draft to the
    /// store, changed or not.
    pub fn commit_draft(&mut self, store: &ContentStore, section: Section) -> MutationOutcome {
        let outcome = match section {
            Section::Hero => store.update_hero(self.drafts.hero.clone()),
            Section::Events => store.replace_events(self.drafts.events.clone()),
            Section::EventCategories => {
                store.replace_event_categories(self.drafts.event_categories.clone())
            }
            Section::Gallery => store.replace_gallery(self.drafts.gallery.clone()),
            Section::GalleryCategories => {
                store.replace_gallery_categories(self.drafts.gallery_categories.clone())
            }
            Section::About => store.update_about(self.drafts.about.clone()),
            Section::Contact => store.update_contact(self.drafts.contact.clone()),
            Section::BottleService => {
                store.replace_bottle_service(self.drafts.bottle_service.clone())
            }
            Section::Navbar => store.update_navbar(self.drafts.navbar.clone()),
            Section::Footer => store.update_footer(self.drafts.footer.clone()),
        };
        self.base_revision = store.revision();
        outcome
    }

    /// The page-level "Publish": every section draft goes to the store in
    /// one pass.
    pub fn publish_all(&mut self, store: &ContentStore) -> Vec<MutationOutcome> {
        Section::ALL
            .into_iter()
            .map(|section| self.commit_draft(store, section))
            .collect()
    }

    /// Read-only rendering of the current draft for one section. Purely a
    /// projection; no state changes.
    pub fn preview(&self, section: Section) -> Value {
        view::section_value(&self.drafts.to_document(), section)
    }

    fn prefill(&self, kind: RecordKind, id: &ContentId) -> Option<RecordForm> {
        let drafts = &self.drafts;
        match kind {
            RecordKind::Event => drafts.events.iter().find(|e| &e.id == id).map(|e| {
                RecordForm::Event(EventInput {
                    title: e.title.clone(),
                    date: e.date.clone(),
                    description: e.description.clone(),
                    image: e.image.clone(),
                    category: e.category.clone(),
                })
            }),
            RecordKind::EventCategory => {
                drafts.event_categories.iter().find(|c| &c.id == id).map(|c| {
                    RecordForm::EventCategory(CategoryInput {
                        name: c.name.clone(),
                        slug: c.slug.clone(),
                    })
                })
            }
            RecordKind::GalleryImage => drafts.gallery.iter().find(|g| &g.id == id).map(|g| {
                RecordForm::GalleryImage(GalleryImageInput {
                    image: g.image.clone(),
                    caption: g.caption.clone(),
                    category: g.category.clone(),
                })
            }),
            RecordKind::GalleryCategory => {
                drafts.gallery_categories.iter().find(|c| &c.id == id).map(|c| {
                    RecordForm::GalleryCategory(CategoryInput {
                        name: c.name.clone(),
                        slug: c.slug.clone(),
                    })
                })
            }
            RecordKind::TeamMember => {
                drafts.about.team_members.iter().find(|m| &m.id == id).map(|m| {
                    RecordForm::TeamMember(TeamMemberInput {
                        name: m.name.clone(),
                        role: m.role.clone(),
                        image: m.image.clone(),
                    })
                })
            }
            RecordKind::BottlePackage => {
                drafts.bottle_service.iter().find(|p| &p.id == id).map(|p| {
                    RecordForm::BottlePackage(BottlePackageInput {
                        name: p.name.clone(),
                        price: p.price.clone(),
                        description: p.description.clone(),
                        image: p.image.clone(),
                    })
                })
            }
            RecordKind::NavLink => drafts.navbar.links.iter().find(|l| &l.id == id).map(|l| {
                RecordForm::NavLink(LinkInput {
                    name: l.name.clone(),
                    path: l.path.clone(),
                })
            }),
            RecordKind::QuickLink => {
                drafts.footer.quick_links.iter().find(|l| &l.id == id).map(|l| {
                    RecordForm::QuickLink(LinkInput {
                        name: l.name.clone(),
                        path: l.path.clone(),
                    })
                })
            }
            RecordKind::SocialLink => {
                drafts.footer.social_links.iter().find(|l| &l.id == id).map(|l| {
                    RecordForm::SocialLink(SocialLinkInput {
                        platform: l.platform.clone(),
                        url: l.url.clone(),
                    })
                })
            }
        }
    }
}
