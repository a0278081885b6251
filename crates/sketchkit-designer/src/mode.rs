//! Interaction modes delivered by the toolbar collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::ShapeKind;

/// Active interaction mode; decides how pointer events are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    #[default]
    Freehand,
    Line,
    Rectangle,
    Ellipse,
    Circle,
    Polygon,
    Move,
    Delete,
    Copy,
    Cut,
    Paste,
    Group,
    Ungroup,
}

impl DrawingMode {
    pub const ALL: [DrawingMode; 13] = [
        DrawingMode::Freehand,
        DrawingMode::Line,
        DrawingMode::Rectangle,
        DrawingMode::Ellipse,
        DrawingMode::Circle,
        DrawingMode::Polygon,
        DrawingMode::Move,
        DrawingMode::Delete,
        DrawingMode::Copy,
        DrawingMode::Cut,
        DrawingMode::Paste,
        DrawingMode::Group,
        DrawingMode::Ungroup,
    ];

    /// The shape kind this mode draws, if it is a drawing mode.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            DrawingMode::Freehand => Some(ShapeKind::Freehand),
            DrawingMode::Line => Some(ShapeKind::Line),
            DrawingMode::Rectangle => Some(ShapeKind::Rectangle),
            DrawingMode::Ellipse => Some(ShapeKind::Ellipse),
            DrawingMode::Circle => Some(ShapeKind::Circle),
            DrawingMode::Polygon => Some(ShapeKind::Polygon),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawingMode::Freehand => "freehand",
            DrawingMode::Line => "line",
            DrawingMode::Rectangle => "rectangle",
            DrawingMode::Ellipse => "ellipse",
            DrawingMode::Circle => "circle",
            DrawingMode::Polygon => "polygon",
            DrawingMode::Move => "move",
            DrawingMode::Delete => "delete",
            DrawingMode::Copy => "copy",
            DrawingMode::Cut => "cut",
            DrawingMode::Paste => "paste",
            DrawingMode::Group => "group",
            DrawingMode::Ungroup => "ungroup",
        }
    }
}

impl fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawingMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown drawing mode '{}'", s))
    }
}
