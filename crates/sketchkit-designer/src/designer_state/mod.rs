//! Designer state manager for UI integration.
//! Turns discrete input events into scene edits and history commits.
//!
//! This module is split into submodules:
//! - `input`: Pointer events and mode changes
//! - `shapes`: Delete, copy, cut, paste, group, recolor
//! - `history`: Undo, redo and cancel
//! - `file_io`: Save/load through a drawing store

mod file_io;
mod history;
mod input;
mod shapes;

use sketchkit_core::SceneError;

use crate::clipboard::{Clipboard, PASTE_OFFSET};
use crate::history::History;
use crate::mode::DrawingMode;
use crate::model::{ObjectId, Point, ShapeKind};
use crate::renderer::{self, DraftPreview, RenderItem, RenderStyle};
use crate::scene::Scene;
use crate::selection_manager::SelectionManager;

/// Editor settings supplied by the host application.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub default_color: String,
    pub paste_offset: f64,
    pub style: RenderStyle,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_color: "#000000".to_string(),
            paste_offset: PASTE_OFFSET,
            style: RenderStyle::default(),
        }
    }
}

/// The uncommitted state of a pointer interaction.
#[derive(Debug, Clone, Default)]
pub(crate) enum Interaction {
    #[default]
    Idle,
    /// Two-point shapes and freehand traces, between press and release.
    Drawing { kind: ShapeKind, points: Vec<Point> },
    /// Polygon vertices placed so far.
    Polygon { vertices: Vec<Point> },
    /// A move in progress. `origin` is the scene before the drag started.
    Dragging {
        id: ObjectId,
        last: Point,
        origin: Scene,
        moved: bool,
    },
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) scene: Scene,
    pub(crate) selection: SelectionManager,
    pub(crate) history: History,
    pub(crate) clipboard: Clipboard,
    pub(crate) mode: DrawingMode,
    pub(crate) color: String,
    pub(crate) options: EditorOptions,
    pub(crate) interaction: Interaction,
}

impl DesignerState {
    /// Creates a new designer state with default options.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: Scene::new(),
            selection: SelectionManager::new(),
            history: History::new(),
            clipboard: Clipboard::new(),
            mode: DrawingMode::default(),
            color: options.default_color.clone(),
            options,
            interaction: Interaction::Idle,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// The color given to new shapes.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// True while a draft or drag is in flight.
    pub fn is_busy(&self) -> bool {
        !matches!(self.interaction, Interaction::Idle)
    }

    /// The shape currently being drawn, if any.
    pub fn draft(&self) -> Option<DraftPreview<'_>> {
        let (kind, points) = match &self.interaction {
            Interaction::Drawing { kind, points } => (*kind, points.as_slice()),
            Interaction::Polygon { vertices } => (ShapeKind::Polygon, vertices.as_slice()),
            _ => return None,
        };
        Some(DraftPreview {
            kind,
            points,
            color: &self.color,
        })
    }

    /// Everything to paint for the current frame.
    pub fn draw_list(&self) -> Vec<RenderItem> {
        renderer::build_draw_list(&self.scene, &self.selection, self.draft(), &self.options.style)
    }

    /// Runs one scene edit as a single undoable action.
    ///
    /// The pre-edit scene is committed only if the edit succeeds. A rejected
    /// edit is logged and dropped; scene operations validate before they
    /// mutate, so the scene is unchanged in that case.
    pub(crate) fn apply<T>(
        scene: &mut Scene,
        history: &mut History,
        action: &str,
        edit: impl FnOnce(&mut Scene) -> Result<T, SceneError>,
    ) -> Option<T> {
        let before = scene.clone();
        match edit(scene) {
            Ok(value) => {
                history.commit(&before);
                Some(value)
            }
            Err(e) => {
                tracing::debug!("{} ignored: {}", action, e);
                None
            }
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
