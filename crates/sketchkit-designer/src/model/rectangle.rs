use lyon::math::Box2D;
use lyon::path::{Path, Winding};

use super::{DesignerShape, Point};
use crate::geometry::{self, Bounds};

/// Rectangle spanned by two opposite corners.
///
/// The corners are kept as drawn, so width and height may be negative;
/// everything derived from them normalizes first.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRectangle {
    pub corner: Point,
    pub opposite: Point,
}

impl DesignRectangle {
    pub fn new(corner: Point, opposite: Point) -> Self {
        Self { corner, opposite }
    }

    /// Signed width as drawn.
    pub fn width(&self) -> f64 {
        self.opposite.x - self.corner.x
    }

    /// Signed height as drawn.
    pub fn height(&self) -> f64 {
        self.opposite.y - self.corner.y
    }
}

impl DesignerShape for DesignRectangle {
    fn render(&self) -> Path {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        let mut builder = Path::builder();
        builder.add_rectangle(
            &Box2D::new(
                Point::new(min_x, min_y).to_lyon(),
                Point::new(max_x, max_y).to_lyon(),
            ),
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
        geometry::point_in_bounds(p, self.bounds())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.corner = self.corner.translated(dx, dy);
        self.opposite = self.opposite.translated(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_drawn_backwards_is_normalized() {
        let rect = DesignRectangle::new(Point::new(20.0, 10.0), Point::new(0.0, 0.0));
        assert_eq!(rect.width(), -20.0);
        assert_eq!(rect.height(), -10.0);
        assert!(rect.contains_point(Point::new(5.0, 5.0)));
        assert!(rect.contains_point(Point::new(20.0, 10.0)));
        assert!(!rect.contains_point(Point::new(21.0, 10.0)));
    }
}
