//! Shape operations (delete, copy, cut, paste, group, recolor) for designer state.
//!
//! Each operation that changes the scene commits exactly once on success and
//! does nothing on failure.

use sketchkit_core::SceneError;

use super::DesignerState;
use crate::model::ObjectId;

impl DesignerState {
    /// Deletes a top-level object, or a single group member.
    pub fn delete_object(&mut self, id: &ObjectId) -> bool {
        let deleted = Self::apply(&mut self.scene, &mut self.history, "Delete", |scene| {
            scene.delete_object(id)
        })
        .is_some();
        if deleted {
            self.selection.prune(&self.scene);
        }
        deleted
    }

    /// Deletes every selected object as one action.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.ids().to_vec();
        let count = Self::apply(&mut self.scene, &mut self.history, "Delete selection", |scene| {
            if !ids.iter().any(|id| scene.contains(id)) {
                return Err(SceneError::invalid("nothing selected"));
            }
            let mut deleted = 0;
            for id in &ids {
                // An earlier deletion may have dissolved a group this id was in.
                if scene.contains(id) {
                    scene.delete_object(id)?;
                    deleted += 1;
                }
            }
            Ok(deleted)
        })
        .unwrap_or(0);
        self.selection.prune(&self.scene);
        count
    }

    /// Copies a top-level object to the clipboard. No history entry.
    pub fn copy_object(&mut self, id: &ObjectId) -> bool {
        match self.scene.get(id) {
            Some(object) => {
                self.clipboard.copy(object);
                true
            }
            None => {
                tracing::debug!("Copy ignored: no top-level object '{}'", id);
                false
            }
        }
    }

    /// Copies then deletes a top-level object, as one action.
    pub fn cut_object(&mut self, id: &ObjectId) -> bool {
        if !self.copy_object(id) {
            return false;
        }
        self.delete_object(id)
    }

    /// Pastes the clipboard content at the configured offset.
    pub fn paste(&mut self) -> Option<ObjectId> {
        let offset = self.options.paste_offset;
        let clipboard = &self.clipboard;
        Self::apply(&mut self.scene, &mut self.history, "Paste", |scene| {
            clipboard.paste_into(scene, offset)
        })
    }

    /// Groups the selected top-level shapes and selects the new group.
    pub fn group_selected(&mut self) -> Option<ObjectId> {
        let ids = self.selection.ids().to_vec();
        let group_id = Self::apply(&mut self.scene, &mut self.history, "Group", |scene| {
            scene.group(&ids)
        })?;
        self.selection.select_only(&group_id);
        Some(group_id)
    }

    /// Dissolves a group into top-level shapes.
    pub fn ungroup_object(&mut self, group_id: &ObjectId) -> Option<Vec<ObjectId>> {
        let members = Self::apply(&mut self.scene, &mut self.history, "Ungroup", |scene| {
            scene.ungroup(group_id)
        })?;
        self.selection.prune(&self.scene);
        Some(members)
    }

    /// Translates an object as one action.
    pub fn move_object(&mut self, id: &ObjectId, dx: f64, dy: f64) -> bool {
        Self::apply(&mut self.scene, &mut self.history, "Move", |scene| {
            scene.move_object(id, dx, dy)
        })
        .is_some()
    }

    /// Sets the default color for new shapes and recolors the selection.
    ///
    /// Commits only if some shape actually changed color.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        let ids = self.selection.ids().to_vec();
        let color = self.color.clone();
        Self::apply(&mut self.scene, &mut self.history, "Recolor", |scene| {
            match scene.recolor(&ids, &color) {
                0 => Err(SceneError::invalid("no shape changed color")),
                n => Ok(n),
            }
        });
    }

    /// Removes everything from the canvas as one undoable action.
    pub fn clear_canvas(&mut self) {
        Self::apply(&mut self.scene, &mut self.history, "Clear", |scene| {
            if scene.is_empty() {
                return Err(SceneError::invalid("canvas is already empty"));
            }
            scene.clear();
            Ok(())
        });
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::DrawingMode;
    use crate::model::Point;

    fn state_with_lines(n: usize) -> DesignerState {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Line);
        for i in 0..n {
            let y = i as f64 * 50.0;
            state.pointer_down(Point::new(0.0, y));
            state.pointer_up(Point::new(10.0, y));
        }
        state
    }

    #[test]
    fn test_delete_absent_is_silent_noop() {
        let mut state = state_with_lines(1);
        assert!(!state.delete_object(&ObjectId::from("missing")));
        assert_eq!(state.history().undo_depth(), 1);
    }

    #[test]
    fn test_cut_is_one_commit() {
        let mut state = state_with_lines(1);
        let id = state.scene().shapes()[0].id.clone();
        assert!(state.cut_object(&id));
        assert!(state.scene().is_empty());
        assert!(!state.clipboard().is_empty());
        assert_eq!(state.history().undo_depth(), 2);

        let pasted = state.paste().unwrap();
        assert_ne!(pasted, id);
        assert_eq!(
            state.scene().shapes()[0].points(),
            vec![Point::new(10.0, 10.0), Point::new(20.0, 10.0)]
        );
    }

    #[test]
    fn test_paste_with_empty_clipboard_does_not_commit() {
        let mut state = state_with_lines(1);
        assert!(state.paste().is_none());
        assert_eq!(state.history().undo_depth(), 1);
    }

    #[test]
    fn test_set_color_recolors_selection_and_default() {
        let mut state = state_with_lines(2);
        let id = state.scene().shapes()[0].id.clone();
        state.set_mode(DrawingMode::Group);
        state.pointer_down(Point::new(5.0, 0.0));
        assert!(state.selection().contains(&id));

        state.set_color("red");
        assert_eq!(state.color(), "red");
        assert_eq!(state.scene().shapes()[0].color, "red");
        assert_eq!(state.scene().shapes()[1].color, "#000000");
        assert_eq!(state.history().undo_depth(), 3);

        // Same color again changes nothing and records nothing.
        state.set_color("red");
        assert_eq!(state.history().undo_depth(), 3);
    }

    #[test]
    fn test_group_with_single_selection_is_rejected() {
        let mut state = state_with_lines(2);
        state.set_mode(DrawingMode::Group);
        state.pointer_down(Point::new(5.0, 0.0));
        assert!(state.group_selected().is_none());
        assert!(state.scene().groups().is_empty());
        assert_eq!(state.history().undo_depth(), 2);
    }

    #[test]
    fn test_delete_selected_and_clear_canvas() {
        let mut state = state_with_lines(3);
        state.set_mode(DrawingMode::Group);
        state.pointer_down(Point::new(5.0, 0.0));
        state.pointer_down(Point::new(5.0, 50.0));
        assert_eq!(state.delete_selected(), 2);
        assert_eq!(state.scene().shapes().len(), 1);
        assert!(state.selection().is_empty());

        state.clear_canvas();
        assert!(state.scene().is_empty());
        let depth = state.history().undo_depth();
        state.clear_canvas();
        assert_eq!(state.history().undo_depth(), depth);
    }
}
