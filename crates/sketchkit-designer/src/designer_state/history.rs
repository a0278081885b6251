//! Undo/redo functionality for designer state.

use super::{DesignerState, Interaction};

impl DesignerState {
    /// Abandons any draft or drag without touching history.
    ///
    /// A drag's live movement is rolled back to the scene it started from.
    pub fn cancel(&mut self) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Dragging { origin, moved, .. } => {
                if moved {
                    self.scene = origin;
                }
                tracing::debug!("Drag cancelled");
            }
            Interaction::Idle => {}
            _ => tracing::debug!("Draft discarded"),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the scene from before the last committed action.
    pub fn undo(&mut self) -> bool {
        self.cancel();
        let undone = self.history.undo(&mut self.scene);
        if undone {
            self.selection.prune(&self.scene);
        }
        undone
    }

    /// Re-applies the last undone action.
    pub fn redo(&mut self) -> bool {
        self.cancel();
        let redone = self.history.redo(&mut self.scene);
        if redone {
            self.selection.prune(&self.scene);
        }
        redone
    }

    /// Drops all undo and redo levels.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::DrawingMode;
    use crate::model::Point;

    #[test]
    fn test_cancel_rolls_back_drag() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Circle);
        state.pointer_down(Point::new(50.0, 50.0));
        state.pointer_up(Point::new(60.0, 50.0));
        let committed = state.scene().clone();

        state.set_mode(DrawingMode::Move);
        state.pointer_down(Point::new(50.0, 50.0));
        state.pointer_move(Point::new(80.0, 90.0));
        assert_ne!(state.scene(), &committed);

        state.cancel();
        assert_eq!(state.scene(), &committed);
        assert_eq!(state.history().undo_depth(), 1);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Rectangle);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_move(Point::new(10.0, 10.0));
        assert!(state.draft().is_some());

        state.cancel();
        assert!(state.draft().is_none());
        state.pointer_up(Point::new(10.0, 10.0));
        assert!(state.scene().is_empty());
        assert!(!state.can_undo());
    }

    #[test]
    fn test_undo_prunes_selection_and_redo_restores() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Line);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_up(Point::new(10.0, 0.0));
        state.set_mode(DrawingMode::Group);
        state.pointer_down(Point::new(5.0, 0.0));
        assert_eq!(state.selection().len(), 1);

        assert!(state.undo());
        assert!(state.scene().is_empty());
        assert!(state.selection().is_empty());

        assert!(state.redo());
        assert_eq!(state.scene().shapes().len(), 1);
        assert!(!state.redo());
    }

    #[test]
    fn test_undo_mid_drag_drops_drag_first() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Line);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_up(Point::new(10.0, 0.0));
        let one_line = state.scene().clone();
        state.pointer_down(Point::new(0.0, 40.0));
        state.pointer_up(Point::new(10.0, 40.0));

        state.set_mode(DrawingMode::Move);
        state.pointer_down(Point::new(5.0, 40.0));
        state.pointer_move(Point::new(5.0, 90.0));

        assert!(state.undo());
        assert_eq!(state.scene(), &one_line);
        assert_eq!(state.history().undo_depth(), 1);
        assert_eq!(state.history().redo_depth(), 1);
        assert!(!state.is_busy());

        // A release after the undo finds no drag to finish.
        state.pointer_up(Point::new(5.0, 95.0));
        assert_eq!(state.history().undo_depth(), 1);
    }

    #[test]
    fn test_redo_mid_drag_drops_drag_first() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Line);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_up(Point::new(10.0, 0.0));
        state.pointer_down(Point::new(0.0, 40.0));
        state.pointer_up(Point::new(10.0, 40.0));
        let both = state.scene().clone();
        assert!(state.undo());

        state.set_mode(DrawingMode::Move);
        state.pointer_down(Point::new(5.0, 0.0));
        state.pointer_move(Point::new(5.0, 60.0));

        assert!(state.redo());
        assert_eq!(state.scene(), &both);
        assert_eq!(state.history().undo_depth(), 2);
        assert_eq!(state.history().redo_depth(), 0);
    }
}
