//! Content store for the venue marketing site.
//!
//! The single source of truth is a [`ContentDocument`] held by a
//! [`ContentStore`], persisted in full to one durable slot on every
//! mutation and announced over an in-process event bus. The editor layer
//! keeps section-local drafts and commits them through the store's typed
//! mutators.

pub mod assets;
pub mod document;
pub mod editor;
pub mod events;
pub mod mutation;
pub mod store;
pub mod view;

pub use document::id::ContentId;
pub use document::model::ContentDocument;
pub use document::section::Section;
pub use editor::EditorSession;
pub use events::bus::EventBus;
pub use events::types::ContentEvent;
pub use mutation::types::MutationOutcome;
pub use store::storage::{ContentStorage, FileStorage, MemoryStorage};
pub use store::ContentStore;
