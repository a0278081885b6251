use lyon::path::{Path, Winding};

use super::{DesignerShape, Point};
use crate::geometry::{self, Bounds};

/// Circle given by its center and a point on its edge.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignCircle {
    pub center: Point,
    pub edge: Point,
}

impl DesignCircle {
    pub fn new(center: Point, edge: Point) -> Self {
        Self { center, edge }
    }

    pub fn radius(&self) -> f64 {
        geometry::circle_radius(self.center, self.edge)
    }
}

impl DesignerShape for DesignCircle {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_circle(
            self.center.to_lyon(),
            self.radius() as f32,
            Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> Bounds {
        let r = self.radius();
        (
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn control_points(&self) -> Vec<Point> {
        vec![self.center, self.edge]
    }

    fn contains_point(&self, p: Point) -> bool {
        geometry::point_in_circle(p, self.center, self.radius())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center.translated(dx, dy);
        self.edge = self.edge.translated(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_euclidean_distance() {
        let circle = DesignCircle::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(circle.radius(), 5.0);
        assert_eq!(circle.bounds(), (-5.0, -5.0, 5.0, 5.0));
    }
}
