use lyon::path::Path;

use super::{DesignerShape, Point};
use crate::geometry::{self, Bounds};

/// Closed polygon; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignPolygon {
    vertices: Vec<Point>,
}

impl DesignPolygon {
    /// Returns `None` for fewer than three vertices.
    pub fn new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        Some(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl DesignerShape for DesignPolygon {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.begin(self.vertices[0].to_lyon());
        for v in &self.vertices[1..] {
            builder.line_to(v.to_lyon());
        }
        builder.close();
        builder.build()
    }

    fn bounds(&self) -> Bounds {
        geometry::bounding_box(&self.vertices).unwrap_or((0.0, 0.0, 0.0, 0.0))
    }

    fn control_points(&self) -> Vec<Point> {
        self.vertices.clone()
    }

    fn contains_point(&self, p: Point) -> bool {
        geometry::point_in_polygon(p, &self.vertices)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            *v = v.translated(dx, dy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_containment() {
        let tri = DesignPolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(10.0, 20.0),
        ])
        .unwrap();
        assert!(tri.contains_point(Point::new(10.0, 5.0)));
        assert!(!tri.contains_point(Point::new(1.0, 15.0)));
        assert!(DesignPolygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).is_none());
    }
}
