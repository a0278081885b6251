use crate::mode::DrawingMode;
use crate::model::{ObjectId, ObjectRef};
use crate::scene::Scene;

/// Tracks which scene objects are currently selected.
///
/// `SelectionManager` is responsible for:
/// - Holding the selection as an ordered set of object ids
/// - Toggle and clear semantics
/// - Deciding what survives a change of interaction mode
///
/// # Selection Model
///
/// - Selection lives beside the scene; it never writes to shape data
/// - Ids stay in the order they were selected
/// - Entering group mode keeps the current accumulation, every other mode
///   change clears it
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected: Vec<ObjectId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use sketchkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// # Returns
    ///
    /// `true` if the id is selected after the call.
    pub fn toggle(&mut self, id: &ObjectId) -> bool {
        if let Some(index) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(index);
            false
        } else {
            self.selected.push(id.clone());
            true
        }
    }

    /// Replaces the selection with a single id.
    pub fn select_only(&mut self, id: &ObjectId) {
        self.selected.clear();
        self.selected.push(id.clone());
    }

    /// Removes `id` from the selection if present.
    pub fn deselect(&mut self, id: &ObjectId) {
        self.selected.retain(|s| s != id);
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[ObjectId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Applies the mode-transition rule.
    ///
    /// Switching into [`DrawingMode::Group`] preserves the selection so a
    /// multi-select can keep accumulating. Any other switch clears it.
    pub fn on_mode_change(&mut self, mode: DrawingMode) {
        if mode != DrawingMode::Group {
            self.clear();
        }
    }

    /// Drops ids that no longer resolve to a top-level object of `scene`.
    ///
    /// Needed after undo, redo, or load replace the scene wholesale.
    pub fn prune(&mut self, scene: &Scene) {
        self.selected.retain(|id| scene.get(id).is_some());
    }

    /// Resolves the selection against `scene` for highlighting.
    pub fn selected_objects<'a>(&self, scene: &'a Scene) -> Vec<ObjectRef<'a>> {
        self.selected.iter().filter_map(|id| scene.get(id)).collect()
    }
}
