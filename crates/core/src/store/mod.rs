//! The content store: single source of truth for the editable site
//! content. Owns persistence and exposes the CRUD contract per section.
//!
//! Every mutation runs against the current document (never a stale
//! snapshot), bumps the revision, rewrites the whole storage slot, and
//! publishes one change event. A failed save is logged and surfaced via
//! [`ContentStore::unsaved_changes`]; the in-memory document still
//! advances so the operator's work is not lost.

pub mod diagnostics;
pub mod storage;

use std::sync::{Arc, RwLock};

use chrono::Utc;
use tokio::sync::broadcast;

use crate::document::id::ContentId;
use crate::document::migrate::{self, PersistedDocument};
use crate::document::model::*;
use crate::events::bus::EventBus;
use crate::events::types::ContentEvent;
use crate::mutation::apply;
use crate::mutation::types::*;

use diagnostics::OrphanedReference;
use storage::ContentStorage;

pub struct ContentStore {
    inner: Arc<Inner>,
}

struct Inner {
    state: RwLock<State>,
    storage: Box<dyn ContentStorage>,
    bus: EventBus,
}

struct State {
    document: Arc<ContentDocument>,
    revision: u64,
    unsaved: bool,
}

impl Clone for ContentStore {
    fn clone(&self) -> Self {
        ContentStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl ContentStore {
    /// Hydrate from the storage slot, or seed the compiled-in default.
    ///
    /// Never fails hard: a corrupt slot is logged and replaced by the
    /// seed, matching the load contract of the original system.
    pub fn open(storage: impl ContentStorage + 'static, bus: EventBus) -> Self {
        let stored = match storage.load() {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(%err, "content slot unreadable, seeding defaults");
                None
            }
        };

        let (document, revision) = match stored {
            Some(text) => match migrate::from_stored(&text) {
                Ok(persisted) => (persisted.content, persisted.revision),
                Err(err) => {
                    tracing::warn!(%err, "stored content malformed, seeding defaults");
                    (ContentDocument::default(), 0)
                }
            },
            None => (ContentDocument::default(), 0),
        };

        let store = ContentStore {
            inner: Arc::new(Inner {
                state: RwLock::new(State {
                    document: Arc::new(document),
                    revision,
                    unsaved: false,
                }),
                storage: Box::new(storage),
                bus,
            }),
        };
        // Write the normalized document back so the slot is always in the
        // current schema after startup.
        store.persist_current();
        store
    }

    /// Snapshot of the committed document. Cheap; consumers re-read on
    /// any change event.
    pub fn document(&self) -> Arc<ContentDocument> {
        Arc::clone(&self.read_state().document)
    }

    pub fn revision(&self) -> u64 {
        self.read_state().revision
    }

    /// True while the last save failed; cleared by the next successful
    /// one.
    pub fn unsaved_changes(&self) -> bool {
        self.read_state().unsaved
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.inner.bus.subscribe()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.inner.bus
    }

    pub fn find_orphaned_references(&self) -> Vec<OrphanedReference> {
        diagnostics::find_orphaned_references(&self.document())
    }

    // Singleton sections.

    pub fn update_hero(&self, hero: HeroContent) -> MutationOutcome {
        self.commit(|doc| apply::update_hero(doc, hero))
    }

    pub fn update_about(&self, about: AboutContent) -> MutationOutcome {
        self.commit(|doc| apply::update_about(doc, about))
    }

    pub fn update_contact(&self, contact: ContactContent) -> MutationOutcome {
        self.commit(|doc| apply::update_contact(doc, contact))
    }

    pub fn update_navbar(&self, navbar: NavbarContent) -> MutationOutcome {
        self.commit(|doc| apply::update_navbar(doc, navbar))
    }

    pub fn update_footer(&self, footer: FooterContent) -> MutationOutcome {
        self.commit(|doc| apply::update_footer(doc, footer))
    }

    // Events.

    pub fn add_event(&self, input: EventInput) -> MutationOutcome {
        self.commit(|doc| apply::add_event(doc, input))
    }

    pub fn update_event(&self, id: &ContentId, change: EventPatch) -> MutationOutcome {
        self.commit(|doc| apply::update_event(doc, id, change))
    }

    pub fn delete_event(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_event(doc, id))
    }

    pub fn replace_events(&self, events: Vec<Event>) -> MutationOutcome {
        self.commit(|doc| apply::replace_events(doc, events))
    }

    pub fn add_event_category(&self, input: CategoryInput) -> MutationOutcome {
        self.commit(|doc| apply::add_event_category(doc, input))
    }

    pub fn update_event_category(&self, id: &ContentId, change: CategoryPatch) -> MutationOutcome {
        self.commit(|doc| apply::update_event_category(doc, id, change))
    }

    pub fn delete_event_category(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_event_category(doc, id))
    }

    pub fn replace_event_categories(&self, categories: Vec<EventCategory>) -> MutationOutcome {
        self.commit(|doc| apply::replace_event_categories(doc, categories))
    }

    // Gallery.

    pub fn add_gallery_image(&self, input: GalleryImageInput) -> MutationOutcome {
        self.commit(|doc| apply::add_gallery_image(doc, input))
    }

    pub fn update_gallery_image(
        &self,
        id: &ContentId,
        change: GalleryImagePatch,
    ) -> MutationOutcome {
        self.commit(|doc| apply::update_gallery_image(doc, id, change))
    }

    pub fn delete_gallery_image(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_gallery_image(doc, id))
    }

    pub fn replace_gallery(&self, gallery: Vec<GalleryImage>) -> MutationOutcome {
        self.commit(|doc| apply::replace_gallery(doc, gallery))
    }

    pub fn add_gallery_category(&self, input: CategoryInput) -> MutationOutcome {
        self.commit(|doc| apply::add_gallery_category(doc, input))
    }

    pub fn update_gallery_category(
        &self,
        id: &ContentId,
        change: CategoryPatch,
    ) -> MutationOutcome {
        self.commit(|doc| apply::update_gallery_category(doc, id, change))
    }

    pub fn delete_gallery_category(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_gallery_category(doc, id))
    }

    pub fn replace_gallery_categories(&self, categories: Vec<GalleryCategory>) -> MutationOutcome {
        self.commit(|doc| apply::replace_gallery_categories(doc, categories))
    }

    // Team members (nested under about).

    pub fn add_team_member(&self, input: TeamMemberInput) -> MutationOutcome {
        self.commit(|doc| apply::add_team_member(doc, input))
    }

    pub fn update_team_member(&self, id: &ContentId, change: TeamMemberPatch) -> MutationOutcome {
        self.commit(|doc| apply::update_team_member(doc, id, change))
    }

    pub fn delete_team_member(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_team_member(doc, id))
    }

    // Bottle service.

    pub fn add_bottle_package(&self, input: BottlePackageInput) -> MutationOutcome {
        self.commit(|doc| apply::add_bottle_package(doc, input))
    }

    pub fn update_bottle_package(
        &self,
        id: &ContentId,
        change: BottlePackagePatch,
    ) -> MutationOutcome {
        self.commit(|doc| apply::update_bottle_package(doc, id, change))
    }

    pub fn delete_bottle_package(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_bottle_package(doc, id))
    }

    pub fn replace_bottle_service(&self, packages: Vec<BottleServicePackage>) -> MutationOutcome {
        self.commit(|doc| apply::replace_bottle_service(doc, packages))
    }

    // Links (nested under navbar and footer).

    pub fn add_nav_link(&self, input: LinkInput) -> MutationOutcome {
        self.commit(|doc| apply::add_nav_link(doc, input))
    }

    pub fn update_nav_link(&self, id: &ContentId, change: LinkPatch) -> MutationOutcome {
        self.commit(|doc| apply::update_nav_link(doc, id, change))
    }

    pub fn delete_nav_link(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_nav_link(doc, id))
    }

    pub fn add_quick_link(&self, input: LinkInput) -> MutationOutcome {
        self.commit(|doc| apply::add_quick_link(doc, input))
    }

    pub fn update_quick_link(&self, id: &ContentId, change: LinkPatch) -> MutationOutcome {
        self.commit(|doc| apply::update_quick_link(doc, id, change))
    }

    pub fn delete_quick_link(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_quick_link(doc, id))
    }

    pub fn add_social_link(&self, input: SocialLinkInput) -> MutationOutcome {
        self.commit(|doc| apply::add_social_link(doc, input))
    }

    pub fn update_social_link(&self, id: &ContentId, change: SocialLinkPatch) -> MutationOutcome {
        self.commit(|doc| apply::update_social_link(doc, id, change))
    }

    pub fn delete_social_link(&self, id: &ContentId) -> MutationOutcome {
        self.commit(|doc| apply::delete_social_link(doc, id))
    }

    fn commit(
        &self,
        transition: impl FnOnce(&ContentDocument) -> (ContentDocument, MutationOutcome),
    ) -> MutationOutcome {
        let mut state = self
            .inner
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let (next, outcome) = transition(&state.document);
        match &outcome {
            MutationOutcome::NotFound { section, id } => {
                tracing::warn!(%section, %id, "mutation target not found, nothing changed");
                return outcome;
            }
            MutationOutcome::Applied { .. } => {}
        }

        let previous_revision = state.revision;
        state.revision += 1;
        state.document = Arc::new(next);
        Self::save(&*self.inner.storage, &mut state);

        self.inner.bus.publish(ContentEvent::changed(
            outcome.section(),
            previous_revision,
            state.revision,
        ));
        outcome
    }

    fn persist_current(&self) {
        let mut state = self
            .inner
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Self::save(&*self.inner.storage, &mut state);
    }

    fn save(storage: &dyn ContentStorage, state: &mut State) {
        let envelope =
            PersistedDocument::new((*state.document).clone(), state.revision, Utc::now());
        let result = match migrate::to_stored(&envelope) {
            Ok(text) => storage.save(&text),
            Err(err) => {
                tracing::error!(%err, "content document failed to serialize");
                state.unsaved = true;
                return;
            }
        };
        match result {
            Ok(()) => state.unsaved = false,
            Err(err) => {
                tracing::error!(%err, "content save failed, changes kept in memory");
                state.unsaved = true;
            }
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.inner
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("ContentStore")
            .field("revision", &state.revision)
            .field("unsaved", &state.unsaved)
            .finish()
    }
}
