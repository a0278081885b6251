use lyon::math::{vector, Angle};
use lyon::path::{Path, Winding};

use super::{DesignerShape, Point};
use crate::geometry::{self, Bounds};

/// Ellipse inscribed in the box spanned by two corners.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignEllipse {
    pub corner: Point,
    pub opposite: Point,
}

impl DesignEllipse {
    pub fn new(corner: Point, opposite: Point) -> Self {
        Self { corner, opposite }
    }

    pub fn center(&self) -> Point {
        geometry::ellipse_center_radii(self.corner, self.opposite).0
    }

    /// Returns `(rx, ry)`.
    pub fn radii(&self) -> (f64, f64) {
        let (_, rx, ry) = geometry::ellipse_center_radii(self.corner, self.opposite);
        (rx, ry)
    }
}

impl DesignerShape for DesignEllipse {
    fn render(&self) -> Path {
        let (center, rx, ry) = geometry::ellipse_center_radii(self.corner, self.opposite);
        let mut builder = Path::builder();
        builder.add_ellipse(
            center.to_lyon(),
            vector(rx as f32, ry as f32),
            Angle::radians(0.0),
            Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> Bounds {
        geometry::normalized_bounds(self.corner, self.opposite)
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.corner, self.opposite]
    }

    fn contains_point(&self, p: Point) -> bool {
        let (center, rx, ry) = geometry::ellipse_center_radii(self.corner, self.opposite);
        geometry::point_in_ellipse(p, center, rx, ry)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.corner = self.corner.translated(dx, dy);
        self.opposite = self.opposite.translated(dx, dy);
    }
}
