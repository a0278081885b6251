//! Storage collaborators that keep serialized drawings under named slots.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sketchkit_core::PersistenceError;

/// A keyed store for serialized drawings.
///
/// The engine only produces and consumes text; where it lives is up to the
/// implementation.
pub trait DrawingStore {
    /// Writes `data` under `slot`, replacing anything already there.
    fn save(&mut self, slot: &str, data: &str) -> Result<(), PersistenceError>;

    /// Reads the blob under `slot`, or `None` if the slot is empty.
    fn load(&self, slot: &str) -> Result<Option<String>, PersistenceError>;

    /// Removes `slot`. Returns `false` if it did not exist.
    fn remove(&mut self, slot: &str) -> Result<bool, PersistenceError>;

    /// All occupied slot names, sorted.
    fn slots(&self) -> Result<Vec<String>, PersistenceError>;
}

/// In-memory store, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawingStore for MemoryStore {
    fn save(&mut self, slot: &str, data: &str) -> Result<(), PersistenceError> {
        self.slots.insert(slot.to_string(), data.to_string());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(slot).cloned())
    }

    fn remove(&mut self, slot: &str) -> Result<bool, PersistenceError> {
        Ok(self.slots.remove(slot).is_some())
    }

    fn slots(&self) -> Result<Vec<String>, PersistenceError> {
        Ok(self.slots.keys().cloned().collect())
    }
}

const SLOT_EXTENSION: &str = "json";

/// Directory-backed store holding one `<slot>.json` file per slot.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| io_error(&root, e))?;
        tracing::debug!("Opened drawing store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf, PersistenceError> {
        validate_slot_name(slot)?;
        Ok(self.root.join(format!("{}.{}", slot, SLOT_EXTENSION)))
    }
}

impl DrawingStore for FileStore {
    fn save(&mut self, slot: &str, data: &str) -> Result<(), PersistenceError> {
        let path = self.slot_path(slot)?;
        fs::write(&path, data).map_err(|e| io_error(&path, e))
    }

    fn load(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn remove(&mut self, slot: &str) -> Result<bool, PersistenceError> {
        let path = self.slot_path(slot)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn slots(&self) -> Result<Vec<String>, PersistenceError> {
        let entries = fs::read_dir(&self.root).map_err(|e| io_error(&self.root, e))?;
        let mut slots = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| io_error(&self.root, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SLOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if validate_slot_name(stem).is_ok() {
                    slots.push(stem.to_string());
                }
            }
        }
        slots.sort();
        Ok(slots)
    }
}

/// Slot names become file names, so keep them to a safe alphabet.
pub fn validate_slot_name(slot: &str) -> Result<(), PersistenceError> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::storage(format!(
            "invalid slot name '{}'",
            slot
        )))
    }
}

fn io_error(path: &Path, err: io::Error) -> PersistenceError {
    PersistenceError::storage(format!("{}: {}", path.display(), err))
}
