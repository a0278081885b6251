//! File I/O operations (save, load) for designer state.

use std::path::Path;

use sketchkit_core::PersistenceError;

use super::DesignerState;
use crate::serialization::{self, DesignFile};
use crate::storage::DrawingStore;

impl DesignerState {
    /// Serializes the scene into `slot`.
    pub fn save_drawing(
        &self,
        store: &mut dyn DrawingStore,
        slot: &str,
    ) -> Result<(), PersistenceError> {
        let text = serialization::serialize_named(slot, &self.scene)?;
        store.save(slot, &text)?;
        tracing::info!(
            "Saved {} objects to slot '{}'",
            self.scene.object_count(),
            slot
        );
        Ok(())
    }

    /// Replaces the scene with the drawing stored in `slot`.
    ///
    /// Returns `Ok(false)` if the slot is empty. Loading is a single
    /// undoable action that clears the selection. On any error the editor
    /// is left exactly as it was.
    pub fn load_drawing(
        &mut self,
        store: &dyn DrawingStore,
        slot: &str,
    ) -> Result<bool, PersistenceError> {
        let Some(text) = store.load(slot)? else {
            tracing::info!("Slot '{}' is empty, nothing to load", slot);
            return Ok(false);
        };
        let scene = serialization::deserialize(&text).map_err(|e| {
            tracing::warn!("Rejected drawing in slot '{}': {}", slot, e);
            e
        })?;

        self.cancel();
        self.history.commit(&self.scene);
        self.scene = scene;
        self.selection.clear();
        tracing::info!(
            "Loaded {} objects from slot '{}'",
            self.scene.object_count(),
            slot
        );
        Ok(true)
    }

    /// Save design to file.
    pub fn save_to_file(&self, path: impl AsRef<Path>, name: &str) -> anyhow::Result<()> {
        DesignFile::from_scene(name, &self.scene).save_to_file(path)
    }

    /// Load design from file, replacing the scene as one undoable action.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<String> {
        let design = DesignFile::load_from_file(&path)?;
        let name = design.metadata.name.clone();
        let scene = design.into_scene()?;

        self.cancel();
        self.history.commit(&self.scene);
        self.scene = scene;
        self.selection.clear();
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::DrawingMode;
    use crate::model::Point;
    use crate::storage::MemoryStore;

    fn state_with_rectangle() -> DesignerState {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Rectangle);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_up(Point::new(20.0, 10.0));
        state
    }

    #[test]
    fn test_save_then_load_restores_scene() {
        let mut store = MemoryStore::new();
        let state = state_with_rectangle();
        state.save_drawing(&mut store, "drawing").unwrap();

        let mut other = DesignerState::new();
        assert!(other.load_drawing(&store, "drawing").unwrap());
        assert_eq!(other.scene(), state.scene());

        // Loading is undoable.
        assert!(other.undo());
        assert!(other.scene().is_empty());
    }

    #[test]
    fn test_non_finite_scene_is_not_saved() {
        let mut store = MemoryStore::new();
        let mut state = state_with_rectangle();
        let id = state.scene().shapes()[0].id().clone();
        assert!(state.move_object(&id, f64::NAN, 0.0));

        let err = state.save_drawing(&mut store, "drawing").unwrap_err();
        assert!(matches!(err, PersistenceError::Encoding { .. }));
        assert_eq!(store.load("drawing").unwrap(), None);
    }

    #[test]
    fn test_load_empty_slot_is_noop() {
        let store = MemoryStore::new();
        let mut state = state_with_rectangle();
        let before = state.scene().clone();
        assert!(!state.load_drawing(&store, "drawing").unwrap());
        assert_eq!(state.scene(), &before);
        assert_eq!(state.history().undo_depth(), 1);
    }

    #[test]
    fn test_malformed_slot_leaves_state_untouched() {
        let mut store = MemoryStore::new();
        store.save("drawing", "{\"version\":\"1.0\"}").unwrap();
        let mut state = state_with_rectangle();
        let before = state.scene().clone();

        let err = state.load_drawing(&store, "drawing").unwrap_err();
        assert!(matches!(err, PersistenceError::MalformedData { .. }));
        assert_eq!(state.scene(), &before);
        assert_eq!(state.history().undo_depth(), 1);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.json");
        let state = state_with_rectangle();
        state.save_to_file(&path, "sketch").unwrap();

        let mut other = DesignerState::new();
        assert_eq!(other.load_from_file(&path).unwrap(), "sketch");
        assert_eq!(other.scene(), state.scene());
    }
}
