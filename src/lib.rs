//! # SketchKit
//!
//! A 2D vector drawing scene engine:
//! - Six shape kinds (freehand, line, rectangle, ellipse, circle, polygon)
//! - Flat groups, topmost-object picking, toggle selection
//! - Snapshot undo/redo, single-slot clipboard
//! - Versioned JSON drawings stored in named slots
//!
//! ## Architecture
//!
//! SketchKit is organized as a workspace with multiple crates:
//!
//! 1. **sketchkit-core** - Error taxonomy and object identifiers
//! 2. **sketchkit-designer** - Scene engine, editor state machine, storage
//! 3. **sketchkit-settings** - Configuration files
//! 4. **sketchkit** - Glue between configuration and the editor, plus the
//!    drawing inspector binary

use std::collections::BTreeMap;

pub use sketchkit_core::{Error, ObjectId, PersistenceError, Result, SceneError};
pub use sketchkit_designer as designer;
pub use sketchkit_designer::{
    DesignerState, DrawingMode, DrawingStore, EditorOptions, FileStore, MemoryStore, Point,
    RenderStyle, Scene, ShapeKind,
};
pub use sketchkit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Editor options derived from the `drawing` section of a config.
pub fn editor_options(config: &Config) -> EditorOptions {
    let drawing = &config.drawing;
    EditorOptions {
        default_color: drawing.default_color.clone(),
        paste_offset: drawing.paste_offset,
        style: RenderStyle {
            stroke_width: drawing.stroke_width,
            highlight_color: drawing.highlight_color.clone(),
            highlight_width: drawing.highlight_width,
        },
    }
}

/// Opens the drawings directory named by the config.
pub fn open_store(config: &Config) -> Result<FileStore> {
    Ok(FileStore::open(&config.storage.drawings_dir)?)
}

/// Counts and extent of a drawing, as reported by the inspector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingSummary {
    pub top_level_shapes: usize,
    pub groups: usize,
    pub grouped_shapes: usize,
    pub kinds: BTreeMap<String, usize>,
    pub bounds: Option<designer::Bounds>,
}

impl DrawingSummary {
    pub fn of(scene: &Scene) -> Self {
        let mut kinds = BTreeMap::new();
        let grouped = scene.groups().iter().flat_map(|g| g.members().iter());
        for shape in scene.shapes().iter().chain(grouped) {
            *kinds.entry(shape.kind().to_string()).or_insert(0) += 1;
        }
        Self {
            top_level_shapes: scene.shapes().len(),
            groups: scene.groups().len(),
            grouped_shapes: scene.shape_count() - scene.shapes().len(),
            kinds,
            bounds: scene.bounds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_options_follow_config() {
        let mut config = Config::default();
        config.drawing.default_color = "red".to_string();
        config.drawing.paste_offset = 4.0;
        config.drawing.highlight_width = 6.0;

        let options = editor_options(&config);
        assert_eq!(options.default_color, "red");
        assert_eq!(options.paste_offset, 4.0);
        assert_eq!(options.style.highlight_width, 6.0);
        assert_eq!(options.style.highlight_color, "blue");
    }

    #[test]
    fn test_default_config_matches_editor_defaults() {
        assert_eq!(editor_options(&Config::default()), EditorOptions::default());
    }

    #[test]
    fn test_summary_counts_kinds_and_groups() {
        let mut state = DesignerState::new();
        state.set_mode(DrawingMode::Line);
        for y in [0.0, 50.0] {
            state.pointer_down(Point::new(0.0, y));
            state.pointer_up(Point::new(10.0, y));
        }
        state.set_mode(DrawingMode::Group);
        state.pointer_down(Point::new(5.0, 0.0));
        state.pointer_down(Point::new(5.0, 50.0));
        state.set_mode(DrawingMode::Circle);
        state.pointer_down(Point::new(100.0, 100.0));
        state.pointer_up(Point::new(110.0, 100.0));

        let summary = DrawingSummary::of(state.scene());
        assert_eq!(summary.top_level_shapes, 1);
        assert_eq!(summary.groups, 1);
        assert_eq!(summary.grouped_shapes, 2);
        assert_eq!(summary.kinds.get("line"), Some(&2));
        assert_eq!(summary.kinds.get("circle"), Some(&1));
        assert_eq!(summary.bounds, Some((0.0, 0.0, 110.0, 110.0)));
    }

    #[test]
    fn test_open_store_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.drawings_dir = dir.path().join("drawings");
        let store = open_store(&config).unwrap();
        assert!(store.root().is_dir());
    }
}
