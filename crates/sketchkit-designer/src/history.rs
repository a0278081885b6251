//! Snapshot-based undo/redo history.
//!
//! The history stores whole [`Scene`] copies. Callers commit the scene as it
//! was *before* a mutation, so `undo` swaps that snapshot back in and parks
//! the live scene on the redo stack.

use crate::scene::Scene;

/// Undo and redo stacks of scene snapshots.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Scene>,
    redo_stack: Vec<Scene>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a snapshot and invalidates everything that could be redone.
    ///
    /// Call exactly once per logical user action, with the scene as it was
    /// before that action.
    pub fn commit(&mut self, scene: &Scene) {
        self.undo_stack.push(scene.clone());
        self.redo_stack.clear();
        tracing::trace!("History commit, {} undo levels", self.undo_stack.len());
    }

    /// Restores the most recent snapshot into `live`.
    ///
    /// Returns `false` (and leaves `live` alone) when there is nothing to undo.
    pub fn undo(&mut self, live: &mut Scene) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(std::mem::replace(live, previous));
        true
    }

    /// Re-applies the most recently undone snapshot into `live`.
    pub fn redo(&mut self, live: &mut Scene) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(std::mem::replace(live, next));
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
