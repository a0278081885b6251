use lyon::path::Path;

use super::{DesignerShape, Point};
use crate::geometry::{self, Bounds};

/// An open polyline traced by the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignFreehand {
    points: Vec<Point>,
}

impl DesignFreehand {
    /// Returns `None` for an empty trace.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl DesignerShape for DesignFreehand {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.begin(self.points[0].to_lyon());
        for p in &self.points[1..] {
            builder.line_to(p.to_lyon());
        }
        builder.end(false);
        builder.build()
    }

    fn bounds(&self) -> Bounds {
        geometry::bounding_box(&self.points).unwrap_or((0.0, 0.0, 0.0, 0.0))
    }

    fn control_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn contains_point(&self, p: Point) -> bool {
        geometry::near_polyline(p, &self.points)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }
}
