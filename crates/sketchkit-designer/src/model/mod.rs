//! Scene data model: points, the six shape kinds, shapes, and groups.

use lyon::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::geometry::{self, Bounds};

mod circle;
mod ellipse;
mod freehand;
mod line;
mod polygon;
mod rectangle;

pub use circle::DesignCircle;
pub use ellipse::DesignEllipse;
pub use freehand::DesignFreehand;
pub use line::DesignLine;
pub use polygon::DesignPolygon;
pub use rectangle::DesignRectangle;
pub use sketchkit_core::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub(crate) fn to_lyon(self) -> lyon::math::Point {
        lyon::math::point(self.x as f32, self.y as f32)
    }
}

/// Behavior shared by every kind of drawable geometry.
pub trait DesignerShape {
    /// Builds the stroke outline for rendering collaborators.
    fn render(&self) -> Path;
    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    fn bounds(&self) -> Bounds;
    /// The control points, in their persisted order.
    fn control_points(&self) -> Vec<Point>;
    fn contains_point(&self, p: Point) -> bool;
    fn translate(&mut self, dx: f64, dy: f64);
}

/// The six primitive shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Freehand,
    Line,
    Rectangle,
    Ellipse,
    Circle,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Freehand,
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Circle,
        ShapeKind::Polygon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Freehand => "freehand",
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        }
    }

    /// True for kinds defined by exactly two control points.
    pub fn is_two_point(&self) -> bool {
        matches!(
            self,
            ShapeKind::Line | ShapeKind::Rectangle | ShapeKind::Ellipse | ShapeKind::Circle
        )
    }

    /// Whether a committed shape of this kind may have `count` points.
    pub fn accepts_point_count(&self, count: usize) -> bool {
        match self {
            ShapeKind::Freehand => count >= 1,
            ShapeKind::Polygon => count >= 3,
            _ => count == 2,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown shape kind '{}'", s))
    }
}

/// Kind-tagged geometry of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Freehand(DesignFreehand),
    Line(DesignLine),
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Circle(DesignCircle),
    Polygon(DesignPolygon),
}

impl Geometry {
    /// Builds geometry of `kind` from its control points.
    ///
    /// Returns `None` when the point count is wrong for the kind.
    pub fn from_points(kind: ShapeKind, points: Vec<Point>) -> Option<Self> {
        if !kind.accepts_point_count(points.len()) {
            return None;
        }
        let geometry = match kind {
            ShapeKind::Freehand => Geometry::Freehand(DesignFreehand::new(points)?),
            ShapeKind::Polygon => Geometry::Polygon(DesignPolygon::new(points)?),
            ShapeKind::Line => Geometry::Line(DesignLine::new(points[0], points[1])),
            ShapeKind::Rectangle => {
                Geometry::Rectangle(DesignRectangle::new(points[0], points[1]))
            }
            ShapeKind::Ellipse => Geometry::Ellipse(DesignEllipse::new(points[0], points[1])),
            ShapeKind::Circle => Geometry::Circle(DesignCircle::new(points[0], points[1])),
        };
        Some(geometry)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Freehand(_) => ShapeKind::Freehand,
            Geometry::Line(_) => ShapeKind::Line,
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::Ellipse(_) => ShapeKind::Ellipse,
            Geometry::Circle(_) => ShapeKind::Circle,
            Geometry::Polygon(_) => ShapeKind::Polygon,
        }
    }
}

impl DesignerShape for Geometry {
    fn render(&self) -> Path {
        match self {
            Geometry::Freehand(s) => s.render(),
            Geometry::Line(s) => s.render(),
            Geometry::Rectangle(s) => s.render(),
            Geometry::Ellipse(s) => s.render(),
            Geometry::Circle(s) => s.render(),
            Geometry::Polygon(s) => s.render(),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Geometry::Freehand(s) => s.bounds(),
            Geometry::Line(s) => s.bounds(),
            Geometry::Rectangle(s) => s.bounds(),
            Geometry::Ellipse(s) => s.bounds(),
            Geometry::Circle(s) => s.bounds(),
            Geometry::Polygon(s) => s.bounds(),
        }
    }

    fn control_points(&self) -> Vec<Point> {
        match self {
            Geometry::Freehand(s) => s.control_points(),
            Geometry::Line(s) => s.control_points(),
            Geometry::Rectangle(s) => s.control_points(),
            Geometry::Ellipse(s) => s.control_points(),
            Geometry::Circle(s) => s.control_points(),
            Geometry::Polygon(s) => s.control_points(),
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        match self {
            Geometry::Freehand(s) => s.contains_point(p),
            Geometry::Line(s) => s.contains_point(p),
            Geometry::Rectangle(s) => s.contains_point(p),
            Geometry::Ellipse(s) => s.contains_point(p),
            Geometry::Circle(s) => s.contains_point(p),
            Geometry::Polygon(s) => s.contains_point(p),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Geometry::Freehand(s) => s.translate(dx, dy),
            Geometry::Line(s) => s.translate(dx, dy),
            Geometry::Rectangle(s) => s.translate(dx, dy),
            Geometry::Ellipse(s) => s.translate(dx, dy),
            Geometry::Circle(s) => s.translate(dx, dy),
            Geometry::Polygon(s) => s.translate(dx, dy),
        }
    }
}

/// A committed drawing primitive.
///
/// Ids are fixed at construction; only the scene may reassign them.
///
/// ```compile_fail
/// use sketchkit_designer::{Geometry, Point, Shape, ShapeKind};
///
/// let line = Geometry::from_points(
///     ShapeKind::Line,
///     vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
/// )
/// .unwrap();
/// let mut shape = Shape::new("red", line);
/// shape.id = sketchkit_designer::ObjectId::new();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) id: ObjectId,
    pub color: String,
    pub(crate) geometry: Geometry,
}

impl Shape {
    /// Creates a shape with a fresh id.
    pub fn new(color: impl Into<String>, geometry: Geometry) -> Self {
        Self::with_id(ObjectId::new(), color, geometry)
    }

    pub fn with_id(id: ObjectId, color: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id,
            color: color.into(),
            geometry,
        }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn points(&self) -> Vec<Point> {
        self.geometry.control_points()
    }
}

impl DesignerShape for Shape {
    fn render(&self) -> Path {
        self.geometry.render()
    }

    fn bounds(&self) -> Bounds {
        self.geometry.bounds()
    }

    fn control_points(&self) -> Vec<Point> {
        self.geometry.control_points()
    }

    fn contains_point(&self, p: Point) -> bool {
        self.geometry.contains_point(p)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.geometry.translate(dx, dy);
    }
}

/// A flat container of at least two shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub(crate) id: ObjectId,
    members: Vec<Shape>,
}

impl Group {
    /// Creates a group with a fresh id; `None` if fewer than two members.
    pub fn new(members: Vec<Shape>) -> Option<Self> {
        Self::with_id(ObjectId::new(), members)
    }

    pub fn with_id(id: ObjectId, members: Vec<Shape>) -> Option<Self> {
        if members.len() < 2 {
            return None;
        }
        Some(Self { id, members })
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn members(&self) -> &[Shape] {
        &self.members
    }

    /// Mutable access to member data; membership itself cannot change here.
    pub(crate) fn members_mut(&mut self) -> &mut [Shape] {
        &mut self.members
    }

    pub fn into_members(self) -> Vec<Shape> {
        self.members
    }

    pub fn contains_member(&self, id: &ObjectId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    /// Removes a member. The caller must dissolve the group if it drops
    /// below two members.
    pub(crate) fn remove_member(&mut self, id: &ObjectId) -> Option<Shape> {
        let index = self.members.iter().position(|m| &m.id == id)?;
        Some(self.members.remove(index))
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for member in &mut self.members {
            member.translate(dx, dy);
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.members
            .iter()
            .map(|m| m.bounds())
            .reduce(geometry::union_bounds)
            .unwrap_or((0.0, 0.0, 0.0, 0.0))
    }
}

/// An owned top-level scene object.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    Shape(Shape),
    Group(Group),
}

impl SceneObject {
    pub fn id(&self) -> &ObjectId {
        match self {
            SceneObject::Shape(s) => &s.id,
            SceneObject::Group(g) => &g.id,
        }
    }

    pub fn borrowed(&self) -> ObjectRef<'_> {
        match self {
            SceneObject::Shape(s) => ObjectRef::Shape(s),
            SceneObject::Group(g) => ObjectRef::Group(g),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            SceneObject::Shape(s) => s.translate(dx, dy),
            SceneObject::Group(g) => g.translate(dx, dy),
        }
    }

    /// Replaces this object's id, and every member id of a group, with fresh ones.
    pub fn refresh_ids(&mut self) {
        match self {
            SceneObject::Shape(s) => s.id = ObjectId::new(),
            SceneObject::Group(g) => {
                g.id = ObjectId::new();
                for member in g.members_mut() {
                    member.id = ObjectId::new();
                }
            }
        }
    }
}

/// A borrowed view of a top-level scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectRef<'a> {
    Shape(&'a Shape),
    Group(&'a Group),
}

impl<'a> ObjectRef<'a> {
    pub fn id(&self) -> &'a ObjectId {
        match self {
            ObjectRef::Shape(s) => &s.id,
            ObjectRef::Group(g) => &g.id,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ObjectRef::Group(_))
    }

    /// The shapes this object paints, in order.
    pub fn shapes(&self) -> &'a [Shape] {
        match self {
            ObjectRef::Shape(s) => std::slice::from_ref(*s),
            ObjectRef::Group(g) => g.members(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            ObjectRef::Shape(s) => s.bounds(),
            ObjectRef::Group(g) => g.bounds(),
        }
    }

    pub fn to_scene_object(&self) -> SceneObject {
        match self {
            ObjectRef::Shape(s) => SceneObject::Shape((*s).clone()),
            ObjectRef::Group(g) => SceneObject::Group((*g).clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_getters_expose_identity_and_geometry() {
        let line = Geometry::from_points(ShapeKind::Line, pts(&[(0.0, 0.0), (4.0, 0.0)])).unwrap();
        let a = Shape::new("red", line.clone());
        let b = Shape::new("red", line.clone());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.geometry(), &line);

        let group = Group::new(vec![a.clone(), b]).unwrap();
        assert_ne!(group.id(), a.id());
        assert!(group.contains_member(a.id()));
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.as_str().parse::<ShapeKind>(), Ok(kind));
        }
        assert!("star".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_from_points_enforces_arity() {
        assert!(Geometry::from_points(ShapeKind::Line, pts(&[(0.0, 0.0)])).is_none());
        assert!(Geometry::from_points(
            ShapeKind::Circle,
            pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])
        )
        .is_none());
        assert!(Geometry::from_points(ShapeKind::Polygon, pts(&[(0.0, 0.0), (1.0, 1.0)])).is_none());
        assert!(Geometry::from_points(ShapeKind::Freehand, Vec::new()).is_none());

        let g = Geometry::from_points(ShapeKind::Freehand, pts(&[(4.0, 2.0)])).unwrap();
        assert_eq!(g.kind(), ShapeKind::Freehand);
    }

    #[test]
    fn test_control_points_preserve_order() {
        let points = pts(&[(20.0, 10.0), (0.0, 0.0)]);
        let g = Geometry::from_points(ShapeKind::Rectangle, points.clone()).unwrap();
        assert_eq!(g.control_points(), points);
    }

    #[test]
    fn test_group_requires_two_members() {
        let a = Shape::new(
            "#000000",
            Geometry::from_points(ShapeKind::Line, pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap(),
        );
        assert!(Group::new(vec![a.clone()]).is_none());
        let mut b = a.clone();
        b.id = ObjectId::new();
        let group = Group::new(vec![a, b]).unwrap();
        assert_eq!(group.members().len(), 2);
    }

    #[test]
    fn test_refresh_ids_touches_every_member() {
        let line = Geometry::from_points(ShapeKind::Line, pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
        let group = Group::new(vec![
            Shape::new("red", line.clone()),
            Shape::new("red", line),
        ])
        .unwrap();
        let mut object = SceneObject::Group(group.clone());
        object.refresh_ids();

        let SceneObject::Group(fresh) = object else {
            panic!("expected a group");
        };
        assert_ne!(fresh.id, group.id);
        for (new, old) in fresh.members().iter().zip(group.members()) {
            assert_ne!(new.id, old.id);
            assert_eq!(new.geometry, old.geometry);
        }
    }
}
