//! Draw-list builder for designer scenes.
//!
//! Produces stroke paths in paint order for a rendering collaborator. No
//! pixels are produced here; the paths come from the same geometry
//! derivations used by hit-testing, so what is drawn is what is picked.
//!
//! Paint order:
//! - Top-level shapes
//! - Group members
//! - Selection highlight overlay
//! - The in-progress draft, if any

use lyon::path::Path;

use crate::model::{DesignerShape, Geometry, Point, Shape, ShapeKind};
use crate::scene::Scene;
use crate::selection_manager::SelectionManager;

/// What a draw-list entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRole {
    Shape,
    Highlight,
    Draft,
}

/// One stroke to paint.
#[derive(Debug, Clone)]
pub struct RenderItem {
    pub path: Path,
    pub color: String,
    pub width: f64,
    pub role: RenderRole,
}

/// Stroke settings for the draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub stroke_width: f64,
    pub highlight_color: String,
    pub highlight_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            highlight_color: "blue".to_string(),
            highlight_width: 3.0,
        }
    }
}

/// An uncommitted shape being drawn.
#[derive(Debug, Clone, Copy)]
pub struct DraftPreview<'a> {
    pub kind: ShapeKind,
    pub points: &'a [Point],
    pub color: &'a str,
}

/// Builds the complete draw list for one frame.
pub fn build_draw_list(
    scene: &Scene,
    selection: &SelectionManager,
    draft: Option<DraftPreview<'_>>,
    style: &RenderStyle,
) -> Vec<RenderItem> {
    let mut items = Vec::with_capacity(scene.shape_count() + selection.len() + 1);

    let grouped = scene.groups().iter().flat_map(|g| g.members().iter());
    for shape in scene.shapes().iter().chain(grouped) {
        items.push(shape_item(shape, &shape.color, style.stroke_width, RenderRole::Shape));
    }

    for object in selection.selected_objects(scene) {
        for shape in object.shapes() {
            items.push(shape_item(
                shape,
                &style.highlight_color,
                style.highlight_width,
                RenderRole::Highlight,
            ));
        }
    }

    if let Some(draft) = draft {
        if let Some(path) = draft_path(draft.kind, draft.points) {
            items.push(RenderItem {
                path,
                color: draft.color.to_string(),
                width: style.stroke_width,
                role: RenderRole::Draft,
            });
        }
    }

    items
}

fn shape_item(shape: &Shape, color: &str, width: f64, role: RenderRole) -> RenderItem {
    RenderItem {
        path: shape.render(),
        color: color.to_string(),
        width,
        role,
    }
}

/// Path for a draft. Drafts below a kind's committed arity render as an
/// open polyline through the points placed so far.
pub fn draft_path(kind: ShapeKind, points: &[Point]) -> Option<Path> {
    if points.is_empty() {
        return None;
    }
    if let Some(geometry) = Geometry::from_points(kind, points.to_vec()) {
        return Some(geometry.render());
    }
    let mut builder = Path::builder();
    builder.begin(points[0].to_lyon());
    for p in &points[1..] {
        builder.line_to(p.to_lyon());
    }
    builder.end(false);
    Some(builder.build())
}
