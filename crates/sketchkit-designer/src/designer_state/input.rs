//! Pointer events and mode changes for designer state.

use super::{DesignerState, Interaction};
use crate::mode::DrawingMode;
use crate::model::{Geometry, ObjectId, Point, ShapeKind};

impl DesignerState {
    /// Switches the interaction mode.
    ///
    /// Leaving polygon mode commits a draft with at least three vertices.
    /// Leaving group mode groups the selection when it holds two or more
    /// objects. Selection is then cleared unless the new mode is group.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        let previous = self.mode;

        match std::mem::take(&mut self.interaction) {
            Interaction::Polygon { vertices } => self.commit_polygon(vertices),
            Interaction::Dragging { origin, moved, .. } if moved => self.scene = origin,
            _ => {}
        }

        if previous == DrawingMode::Group && mode != DrawingMode::Group && self.selection.len() > 1
        {
            self.group_selected();
        }

        self.selection.on_mode_change(mode);
        self.mode = mode;
        tracing::debug!("Mode {} -> {}", previous, mode);
    }

    pub fn pointer_down(&mut self, p: Point) {
        if let Some(kind) = self.mode.shape_kind() {
            self.start_draft(kind, p);
            return;
        }

        match self.mode {
            DrawingMode::Move => self.start_drag(p),
            DrawingMode::Paste => {
                self.paste();
            }
            DrawingMode::Delete => {
                if let Some(id) = self.pick(p) {
                    self.delete_object(&id);
                }
            }
            DrawingMode::Copy => {
                if let Some(id) = self.pick(p) {
                    self.copy_object(&id);
                }
            }
            DrawingMode::Cut => {
                if let Some(id) = self.pick(p) {
                    self.cut_object(&id);
                }
            }
            DrawingMode::Group => {
                if let Some(id) = self.pick(p) {
                    self.selection.toggle(&id);
                }
            }
            DrawingMode::Ungroup => {
                let target = self
                    .scene
                    .object_at(p)
                    .filter(|o| o.is_group())
                    .map(|o| o.id().clone());
                if let Some(id) = target {
                    self.ungroup_object(&id);
                }
            }
            _ => {}
        }
    }

    pub fn pointer_move(&mut self, p: Point) {
        match &mut self.interaction {
            Interaction::Drawing { kind, points } => update_draft(*kind, points, p),
            Interaction::Dragging {
                id, last, moved, ..
            } => {
                let (dx, dy) = (p.x - last.x, p.y - last.y);
                if dx == 0.0 && dy == 0.0 {
                    return;
                }
                if self.scene.move_object(id, dx, dy).is_ok() {
                    *last = p;
                    *moved = true;
                }
            }
            _ => {}
        }
    }

    pub fn pointer_up(&mut self, p: Point) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Drawing { kind, mut points } => {
                update_draft(kind, &mut points, p);
                self.commit_draft(kind, points);
            }
            Interaction::Dragging {
                id,
                last,
                origin,
                moved,
            } => {
                let (dx, dy) = (p.x - last.x, p.y - last.y);
                let mut moved = moved;
                if (dx != 0.0 || dy != 0.0) && self.scene.move_object(&id, dx, dy).is_ok() {
                    moved = true;
                }
                if moved {
                    self.history.commit(&origin);
                    tracing::debug!("Moved {}", id);
                }
            }
            other => self.interaction = other,
        }
    }

    /// Completes a polygon in polygon mode.
    ///
    /// The click position becomes the last vertex (unless it repeats the
    /// previous one). Fewer than three vertices keeps the draft open.
    pub fn double_click(&mut self, p: Point) {
        if self.mode != DrawingMode::Polygon {
            return;
        }
        let Interaction::Polygon { vertices } = &mut self.interaction else {
            return;
        };
        push_vertex(vertices, p);
        if vertices.len() < 3 {
            tracing::debug!("Polygon needs three vertices, has {}", vertices.len());
            return;
        }
        if let Interaction::Polygon { vertices } = std::mem::take(&mut self.interaction) {
            self.commit_polygon(vertices);
        }
    }

    fn start_draft(&mut self, kind: ShapeKind, p: Point) {
        match kind {
            ShapeKind::Polygon => match &mut self.interaction {
                Interaction::Polygon { vertices } => push_vertex(vertices, p),
                _ => self.interaction = Interaction::Polygon { vertices: vec![p] },
            },
            ShapeKind::Freehand => {
                self.interaction = Interaction::Drawing {
                    kind,
                    points: vec![p],
                }
            }
            _ => {
                self.interaction = Interaction::Drawing {
                    kind,
                    points: vec![p, p],
                }
            }
        }
    }

    fn start_drag(&mut self, p: Point) {
        // A press while still dragging means the release was lost; keep
        // that movement as its own action.
        if let Interaction::Dragging {
            id,
            origin,
            moved: true,
            ..
        } = std::mem::take(&mut self.interaction)
        {
            self.history.commit(&origin);
            tracing::debug!("Moved {} (release not seen)", id);
        }

        let Some(id) = self.pick(p) else {
            self.selection.clear();
            return;
        };
        self.selection.select_only(&id);
        self.interaction = Interaction::Dragging {
            id,
            last: p,
            origin: self.scene.clone(),
            moved: false,
        };
    }

    fn pick(&self, p: Point) -> Option<ObjectId> {
        self.scene.object_at(p).map(|o| o.id().clone())
    }

    fn commit_draft(&mut self, kind: ShapeKind, points: Vec<Point>) {
        let Some(geometry) = Geometry::from_points(kind, points) else {
            tracing::debug!("Discarded incomplete {} draft", kind);
            return;
        };
        self.history.commit(&self.scene);
        self.scene.add_shape(self.color.clone(), geometry);
    }

    pub(crate) fn commit_polygon(&mut self, vertices: Vec<Point>) {
        if vertices.len() < 3 {
            tracing::debug!("Discarded polygon draft with {} vertices", vertices.len());
            return;
        }
        self.commit_draft(ShapeKind::Polygon, vertices);
    }
}

fn update_draft(kind: ShapeKind, points: &mut Vec<Point>, p: Point) {
    if kind == ShapeKind::Freehand {
        if points.last() != Some(&p) {
            points.push(p);
        }
    } else if let Some(end) = points.last_mut() {
        *end = p;
    }
}

fn push_vertex(vertices: &mut Vec<Point>, p: Point) {
    if vertices.last() != Some(&p) {
        vertices.push(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DesignerShape;

    fn drag(state: &mut DesignerState, from: (f64, f64), to: (f64, f64)) {
        state.pointer_down(Point::new(from.0, from.1));
        state.pointer_move(Point::new((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0));
        state.pointer_up(Point::new(to.0, to.1));
    }

    #[test]
    fn test_draw_line_commits_once() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Line);
        drag(&mut state, (0.0, 0.0), (10.0, 0.0));

        assert_eq!(state.scene().shapes().len(), 1);
        assert_eq!(state.history().undo_depth(), 1);
        let shape = &state.scene().shapes()[0];
        assert_eq!(shape.kind(), ShapeKind::Line);
        assert_eq!(shape.points(), vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_freehand_collects_trace() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Freehand);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_move(Point::new(1.0, 1.0));
        state.pointer_move(Point::new(1.0, 1.0));
        state.pointer_move(Point::new(2.0, 3.0));
        state.pointer_up(Point::new(2.0, 3.0));

        assert_eq!(state.scene().shapes()[0].points().len(), 3);
    }

    #[test]
    fn test_polygon_double_click_commits() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Polygon);
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)] {
            state.pointer_down(Point::new(x, y));
            state.pointer_up(Point::new(x, y));
        }
        // The second press of a double-click repeats the last vertex.
        state.pointer_down(Point::new(10.0, 10.0));
        state.double_click(Point::new(10.0, 10.0));

        assert_eq!(state.scene().shapes().len(), 1);
        assert_eq!(state.scene().shapes()[0].points().len(), 3);
        assert!(state.draft().is_none());
    }

    #[test]
    fn test_polygon_with_two_vertices_is_discarded_on_mode_change() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Polygon);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_down(Point::new(10.0, 0.0));
        state.double_click(Point::new(10.0, 0.0));
        assert!(state.scene().is_empty());

        state.set_mode(DrawingMode::Move);
        assert!(state.scene().is_empty());
        assert!(!state.history().can_undo());
    }

    #[test]
    fn test_polygon_commits_on_mode_change() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Polygon);
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)] {
            state.pointer_down(Point::new(x, y));
        }
        state.set_mode(DrawingMode::Line);
        assert_eq!(state.scene().shapes().len(), 1);
        assert_eq!(state.history().undo_depth(), 1);
    }

    #[test]
    fn test_move_drag_commits_once() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Rectangle);
        drag(&mut state, (0.0, 0.0), (20.0, 10.0));
        state.set_mode(DrawingMode::Move);
        drag(&mut state, (5.0, 5.0), (15.0, 25.0));

        assert_eq!(state.history().undo_depth(), 2);
        assert_eq!(state.scene().shapes()[0].bounds(), (10.0, 20.0, 30.0, 30.0));

        state.undo();
        assert_eq!(state.scene().shapes()[0].bounds(), (0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn test_click_without_motion_in_move_mode_does_not_commit() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Circle);
        drag(&mut state, (50.0, 50.0), (60.0, 50.0));
        state.set_mode(DrawingMode::Move);
        state.pointer_down(Point::new(50.0, 50.0));
        state.pointer_up(Point::new(50.0, 50.0));

        assert_eq!(state.history().undo_depth(), 1);
        assert_eq!(state.selection().len(), 1);
    }

    #[test]
    fn test_leaving_group_mode_groups_selection() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Line);
        drag(&mut state, (0.0, 0.0), (10.0, 0.0));
        drag(&mut state, (0.0, 50.0), (10.0, 50.0));

        state.set_mode(DrawingMode::Group);
        state.pointer_down(Point::new(5.0, 0.0));
        state.pointer_down(Point::new(5.0, 50.0));
        assert_eq!(state.selection().len(), 2);

        state.set_mode(DrawingMode::Move);
        assert_eq!(state.scene().groups().len(), 1);
        assert!(state.scene().shapes().is_empty());
        assert!(state.selection().is_empty());
        assert_eq!(state.history().undo_depth(), 3);
    }

    #[test]
    fn test_ungroup_mode_ignores_plain_shapes() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Line);
        drag(&mut state, (0.0, 0.0), (10.0, 0.0));
        state.set_mode(DrawingMode::Ungroup);
        state.pointer_down(Point::new(5.0, 0.0));
        assert_eq!(state.history().undo_depth(), 1);
    }

    #[test]
    fn test_press_during_drag_keeps_first_move_undoable() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Rectangle);
        drag(&mut state, (0.0, 0.0), (10.0, 10.0));
        let drawn = state.scene().clone();

        state.set_mode(DrawingMode::Move);
        state.pointer_down(Point::new(5.0, 5.0));
        state.pointer_move(Point::new(105.0, 5.0));
        let moved = state.scene().clone();

        // Release never arrives; the next press starts a second drag.
        state.pointer_down(Point::new(105.0, 5.0));
        state.pointer_move(Point::new(105.0, 25.0));
        state.pointer_up(Point::new(105.0, 25.0));
        assert_eq!(state.history().undo_depth(), 3);

        assert!(state.undo());
        assert_eq!(state.scene(), &moved);
        assert!(state.undo());
        assert_eq!(state.scene(), &drawn);
    }

    #[test]
    fn test_mode_change_mid_drag_rolls_back() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Circle);
        drag(&mut state, (50.0, 50.0), (60.0, 50.0));
        let committed = state.scene().clone();

        state.set_mode(DrawingMode::Move);
        state.pointer_down(Point::new(50.0, 50.0));
        state.pointer_move(Point::new(90.0, 70.0));
        assert_ne!(state.scene(), &committed);

        state.set_mode(DrawingMode::Line);
        assert_eq!(state.scene(), &committed);
        assert_eq!(state.history().undo_depth(), 1);
        assert!(!state.is_busy());
    }
}
