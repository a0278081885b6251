//! # SketchKit Designer
//!
//! The scene engine behind the SketchKit drawing surface. It owns the shape
//! and group model, decides what a pointer hits, tracks selection, keeps a
//! snapshot undo history, and moves drawings in and out of storage.
//!
//! ## Core Components
//!
//! - **Model**: Points, the six shape kinds, shapes and flat groups
//! - **Geometry**: Hit-testing and the shared derivations behind it
//! - **Scene**: The authoritative store of top-level shapes and groups
//! - **Selection**: Toggle/clear semantics, independent of shape data
//! - **History**: Undo/redo over whole-scene snapshots
//! - **Clipboard**: One copied object, pasted with fresh ids at an offset
//! - **Serialization/Storage**: Versioned JSON drawings in named slots
//! - **Renderer**: Stroke paths in paint order for a drawing surface
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (mode-indexed event handling)
//!   ├── Scene ── Geometry (hit-testing)
//!   ├── SelectionManager
//!   ├── History (scene snapshots)
//!   ├── Clipboard
//!   └── Renderer (draw list)
//!
//! Serialization ── DrawingStore (memory or directory backed)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sketchkit_designer::{DesignerState, DrawingMode, Point};
//!
//! let mut state = DesignerState::new();
//! state.set_mode(DrawingMode::Rectangle);
//! state.pointer_down(Point::new(0.0, 0.0));
//! state.pointer_move(Point::new(15.0, 10.0));
//! state.pointer_up(Point::new(20.0, 10.0));
//!
//! assert_eq!(state.scene().shapes().len(), 1);
//! assert!(state.undo());
//! assert!(state.scene().is_empty());
//! ```

pub mod clipboard;
pub mod designer_state;
pub mod geometry;
pub mod history;
pub mod mode;
pub mod model;
pub mod renderer;
pub mod scene;
pub mod selection_manager;
pub mod serialization;
pub mod storage;

pub use clipboard::{Clipboard, PASTE_OFFSET};
pub use designer_state::{DesignerState, EditorOptions};
pub use geometry::{hit_test, hit_test_group, Bounds, HIT_TOLERANCE};
pub use history::History;
pub use mode::DrawingMode;
pub use model::{
    DesignCircle, DesignEllipse, DesignFreehand, DesignLine, DesignPolygon, DesignRectangle,
    DesignerShape, Geometry, Group, ObjectId, ObjectRef, Point, SceneObject, Shape, ShapeKind,
};
pub use renderer::{build_draw_list, DraftPreview, RenderItem, RenderRole, RenderStyle};
pub use scene::Scene;
pub use selection_manager::SelectionManager;
pub use serialization::{deserialize, serialize, DesignFile};
pub use storage::{DrawingStore, FileStore, MemoryStore};
