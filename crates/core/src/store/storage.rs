//! The durable local slot holding the serialized document.
//!
//! One key, read at startup, overwritten in full on every mutation. The
//! trait exists so transitions and store behavior are testable against an
//! in-memory fake.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage slot unavailable: {0}")]
    Unavailable(String),
}

pub trait ContentStorage: Send + Sync {
    /// Read the slot. `None` means nothing was ever stored.
    fn load(&self) -> Result<Option<String>, StorageError>;
    /// Overwrite the slot in full.
    fn save(&self, payload: &str) -> Result<(), StorageError>;
}

/// File-backed slot. Writes go to a sibling temp file first and are
/// renamed into place, so a crash mid-write never leaves a torn document.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ContentStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let temp = self.temp_path();
        std::fs::write(&temp, payload)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// In-process fake for tests: a mutex-guarded slot with a switch to make
/// writes fail, for exercising the unsaved-changes path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(payload: impl Into<String>) -> Self {
        let storage = Self::new();
        *storage.lock_slot() = Some(payload.into());
        storage
    }

    pub fn contents(&self) -> Option<String> {
        self.lock_slot().clone()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ContentStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.lock_slot().clone())
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("write failure injected".into()));
        }
        *self.lock_slot() = Some(payload.to_string());
        Ok(())
    }
}
