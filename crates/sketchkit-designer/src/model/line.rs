use lyon::path::Path;

use super::{DesignerShape, Point};
use crate::geometry::{self, Bounds};

#[derive(Debug, Clone, PartialEq)]
pub struct DesignLine {
    pub start: Point,
    pub end: Point,
}

impl DesignLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl DesignerShape for DesignLine {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.begin(self.start.to_lyon());
        builder.line_to(self.end.to_lyon());
        builder.end(false);
        builder.build()
    }

    fn bounds(&self) -> Bounds {
        geometry::normalized_bounds(self.start, self.end)
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }

    fn contains_point(&self, p: Point) -> bool {
        geometry::near_segment(p, self.start, self.end)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.start = self.start.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
    }
}
