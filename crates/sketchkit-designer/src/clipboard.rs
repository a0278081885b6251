//! Single-slot clipboard for copy, cut and paste.

use sketchkit_core::SceneError;

use crate::model::{ObjectId, ObjectRef, SceneObject};
use crate::scene::Scene;

/// Default paste displacement on both axes.
pub const PASTE_OFFSET: f64 = 10.0;

/// Holds at most one copied object, by value.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    content: Option<SceneObject>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a deep copy of `object`, replacing any previous content.
    pub fn copy(&mut self, object: ObjectRef<'_>) {
        tracing::debug!("Copied {} to clipboard", object.id());
        self.content = Some(object.to_scene_object());
    }

    pub fn content(&self) -> Option<&SceneObject> {
        self.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub fn clear(&mut self) {
        self.content = None;
    }

    /// Inserts a fresh copy of the content into `scene`, displaced by
    /// `(offset, offset)`.
    ///
    /// Every id in the pasted object is new, so repeated pastes never alias
    /// each other or the source. The clipboard keeps its content.
    pub fn paste_into(&self, scene: &mut Scene, offset: f64) -> Result<ObjectId, SceneError> {
        let mut object = self.content.clone().ok_or(SceneError::EmptyClipboard)?;
        object.refresh_ids();
        object.translate(offset, offset);
        scene.insert_object(object)
    }
}
