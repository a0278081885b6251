//! Serialization and deserialization of drawings.
//!
//! A drawing is stored as a versioned JSON document holding every top-level
//! shape and group. Decoding validates the whole document before building a
//! [`Scene`], so a bad blob never yields a partially loaded drawing.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use sketchkit_core::PersistenceError;

use crate::model::{Geometry, Group, ObjectId, Point, Shape, ShapeKind};
use crate::scene::Scene;

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub shapes: Vec<ShapeData>,
    #[serde(default)]
    pub groups: Vec<GroupData>,
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Serialized shape data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeData {
    pub id: String,
    pub kind: String,
    pub color: String,
    pub points: Vec<Point>,
}

/// Serialized group data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupData {
    pub id: String,
    pub members: Vec<ShapeData>,
}

impl DesignFile {
    /// Create a new, empty design file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            shapes: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Capture a scene under the given design name
    pub fn from_scene(name: impl Into<String>, scene: &Scene) -> Self {
        let mut design = Self::new(name);
        design.shapes = scene.shapes().iter().map(Self::from_shape).collect();
        design.groups = scene
            .groups()
            .iter()
            .map(|g| GroupData {
                id: g.id.to_string(),
                members: g.members().iter().map(Self::from_shape).collect(),
            })
            .collect();
        design
    }

    /// Rebuild the scene this file describes.
    ///
    /// Fails on an unsupported version, an unknown kind, the wrong number
    /// of points for a kind, a group with fewer than two members, or a
    /// repeated id.
    pub fn into_scene(self) -> std::result::Result<Scene, PersistenceError> {
        if !is_supported_version(&self.version) {
            return Err(PersistenceError::malformed(format!(
                "unsupported format version '{}'",
                self.version
            )));
        }

        let shapes = self
            .shapes
            .into_iter()
            .map(Self::to_shape)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut groups = Vec::with_capacity(self.groups.len());
        for data in self.groups {
            if data.id.is_empty() {
                return Err(PersistenceError::malformed("group with an empty id"));
            }
            let members = data
                .members
                .into_iter()
                .map(Self::to_shape)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let group = Group::with_id(ObjectId::from(data.id.as_str()), members).ok_or_else(
                || {
                    PersistenceError::malformed(format!(
                        "group '{}' has fewer than two members",
                        data.id
                    ))
                },
            )?;
            groups.push(group);
        }

        Scene::from_parts(shapes, groups).map_err(|e| PersistenceError::malformed(e.to_string()))
    }

    /// JSON has no encoding for NaN or infinity, so such a point could not
    /// be read back.
    pub fn check_finite(&self) -> std::result::Result<(), PersistenceError> {
        let members = self.groups.iter().flat_map(|g| g.members.iter());
        for shape in self.shapes.iter().chain(members) {
            if let Some(p) = shape.points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(PersistenceError::encoding(format!(
                    "{} '{}' has a non-finite point ({}, {})",
                    shape.kind, shape.id, p.x, p.y
                )));
            }
        }
        Ok(())
    }

    /// Convert a shape to its serialized form
    pub fn from_shape(shape: &Shape) -> ShapeData {
        ShapeData {
            id: shape.id.to_string(),
            kind: shape.kind().to_string(),
            color: shape.color.clone(),
            points: shape.points(),
        }
    }

    /// Convert serialized data back to a shape
    pub fn to_shape(data: ShapeData) -> std::result::Result<Shape, PersistenceError> {
        if data.id.is_empty() {
            return Err(PersistenceError::malformed("shape with an empty id"));
        }
        let kind: ShapeKind = data.kind.parse().map_err(PersistenceError::malformed)?;
        let count = data.points.len();
        let geometry = Geometry::from_points(kind, data.points).ok_or_else(|| {
            PersistenceError::malformed(format!(
                "{} '{}' cannot have {} point(s)",
                kind, data.id, count
            ))
        })?;
        Ok(Shape::with_id(ObjectId::from(data.id), data.color, geometry))
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.check_finite()?;
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;

        let mut design: DesignFile =
            serde_json::from_str(&content).context("Failed to parse design file")?;

        design.metadata.modified = Utc::now();

        Ok(design)
    }
}

fn is_supported_version(version: &str) -> bool {
    version
        .split('.')
        .next()
        .is_some_and(|major| major == "1")
}

/// Encodes a scene as a design document.
pub fn serialize(scene: &Scene) -> std::result::Result<String, PersistenceError> {
    serialize_named("drawing", scene)
}

/// Encodes a scene under a design name.
pub fn serialize_named(
    name: &str,
    scene: &Scene,
) -> std::result::Result<String, PersistenceError> {
    let design = DesignFile::from_scene(name, scene);
    design.check_finite()?;
    serde_json::to_string(&design)
        .map_err(|e| PersistenceError::encoding(e.to_string()))
}

/// Decodes a design document into a scene.
///
/// Any structural problem is reported as
/// [`PersistenceError::MalformedData`]; nothing is returned on failure.
pub fn deserialize(text: &str) -> std::result::Result<Scene, PersistenceError> {
    let design: DesignFile =
        serde_json::from_str(text).map_err(|e| PersistenceError::malformed(e.to_string()))?;
    design.into_scene()
}
