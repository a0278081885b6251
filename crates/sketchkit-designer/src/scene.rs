//! Scene store: the authoritative collection of top-level shapes and groups.
//!
//! Every structural edit validates before it mutates, so an operation that
//! returns an error has left the scene exactly as it found it.

use std::collections::HashSet;

use sketchkit_core::SceneError;

use crate::geometry::{self, Bounds};
use crate::model::{DesignerShape, Geometry, Group, ObjectId, ObjectRef, Point, SceneObject, Shape};

/// The full drawing at one instant: the unit of undo snapshots and persistence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    groups: Vec<Group>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a scene from parts, rejecting duplicate ids.
    pub fn from_parts(shapes: Vec<Shape>, groups: Vec<Group>) -> Result<Self, SceneError> {
        let mut seen = HashSet::new();
        let all_ids = shapes
            .iter()
            .map(|s| &s.id)
            .chain(groups.iter().flat_map(|g| {
                std::iter::once(&g.id).chain(g.members().iter().map(|m| &m.id))
            }));
        for id in all_ids {
            if !seen.insert(id) {
                return Err(SceneError::invalid(format!("duplicate object id '{}'", id)));
            }
        }
        Ok(Self { shapes, groups })
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.groups.is_empty()
    }

    /// Number of top-level objects (shapes plus groups).
    pub fn object_count(&self) -> usize {
        self.shapes.len() + self.groups.len()
    }

    /// Number of shapes reachable from the scene, grouped or not.
    pub fn shape_count(&self) -> usize {
        self.shapes.len() + self.groups.iter().map(|g| g.members().len()).sum::<usize>()
    }

    /// Top-level objects in paint order: shapes first, then groups.
    pub fn objects(&self) -> impl Iterator<Item = ObjectRef<'_>> {
        self.shapes
            .iter()
            .map(ObjectRef::Shape)
            .chain(self.groups.iter().map(ObjectRef::Group))
    }

    /// Looks up a top-level shape or group.
    pub fn get(&self, id: &ObjectId) -> Option<ObjectRef<'_>> {
        self.objects().find(|o| o.id() == id)
    }

    /// True if `id` is reachable anywhere in the scene, including group members.
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.get(id).is_some() || self.group_of(id).is_some()
    }

    /// Finds a shape by id, whether top-level or grouped.
    pub fn shape(&self, id: &ObjectId) -> Option<&Shape> {
        self.shapes
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.members().iter()))
            .find(|s| &s.id == id)
    }

    /// Id of the group holding member `id`, if any.
    pub fn group_of(&self, id: &ObjectId) -> Option<&ObjectId> {
        self.groups
            .iter()
            .find(|g| g.contains_member(id))
            .map(|g| &g.id)
    }

    /// The topmost top-level object under `point`.
    ///
    /// Shapes are searched last-drawn first, then groups last-created first.
    pub fn object_at(&self, point: Point) -> Option<ObjectRef<'_>> {
        if let Some(shape) = self
            .shapes
            .iter()
            .rev()
            .find(|s| geometry::hit_test(point, s))
        {
            return Some(ObjectRef::Shape(shape));
        }
        self.groups
            .iter()
            .rev()
            .find(|g| geometry::hit_test_group(point, g))
            .map(ObjectRef::Group)
    }

    /// Bounds of everything in the scene, or `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.objects().map(|o| o.bounds()).reduce(geometry::union_bounds)
    }

    /// Appends a new shape with a fresh id.
    pub fn add_shape(&mut self, color: impl Into<String>, geometry: Geometry) -> &Shape {
        let shape = Shape::new(color, geometry);
        tracing::debug!("Added {} {}", shape.kind(), shape.id);
        self.shapes.push(shape);
        &self.shapes[self.shapes.len() - 1]
    }

    /// Inserts a complete object at the top level.
    ///
    /// Fails if any id it carries already exists in the scene.
    pub fn insert_object(&mut self, object: SceneObject) -> Result<ObjectId, SceneError> {
        let ids: Vec<&ObjectId> = match &object {
            SceneObject::Shape(s) => vec![&s.id],
            SceneObject::Group(g) => std::iter::once(&g.id)
                .chain(g.members().iter().map(|m| &m.id))
                .collect(),
        };
        if let Some(dup) = ids.into_iter().find(|id| self.contains(id)) {
            return Err(SceneError::invalid(format!("object id '{}' already exists", dup)));
        }
        let id = object.id().clone();
        match object {
            SceneObject::Shape(s) => self.shapes.push(s),
            SceneObject::Group(g) => self.groups.push(g),
        }
        Ok(id)
    }

    /// Removes a top-level shape or group.
    ///
    /// A grouped shape can also be deleted by id; its group dissolves if fewer
    /// than two members remain.
    pub fn delete_object(&mut self, id: &ObjectId) -> Result<SceneObject, SceneError> {
        if let Some(index) = self.shapes.iter().position(|s| &s.id == id) {
            return Ok(SceneObject::Shape(self.shapes.remove(index)));
        }
        if let Some(index) = self.groups.iter().position(|g| &g.id == id) {
            return Ok(SceneObject::Group(self.groups.remove(index)));
        }
        let Some(index) = self.groups.iter().position(|g| g.contains_member(id)) else {
            return Err(SceneError::invalid(format!("no object with id '{}'", id)));
        };
        let removed = self.groups[index]
            .remove_member(id)
            .ok_or_else(|| SceneError::invalid(format!("no object with id '{}'", id)))?;
        if self.groups[index].members().len() < 2 {
            let group = self.groups.remove(index);
            tracing::debug!("Group {} dissolved after losing a member", group.id);
            self.shapes.extend(group.into_members());
        }
        Ok(SceneObject::Shape(removed))
    }

    /// Translates a shape (top-level or grouped) or every member of a group.
    pub fn move_object(&mut self, id: &ObjectId, dx: f64, dy: f64) -> Result<(), SceneError> {
        if let Some(shape) = self.shapes.iter_mut().find(|s| &s.id == id) {
            shape.translate(dx, dy);
            return Ok(());
        }
        for group in &mut self.groups {
            if &group.id == id {
                group.translate(dx, dy);
                return Ok(());
            }
            if let Some(member) = group.members_mut().iter_mut().find(|m| &m.id == id) {
                member.translate(dx, dy);
                return Ok(());
            }
        }
        Err(SceneError::invalid(format!("no object with id '{}'", id)))
    }

    /// Groups top-level shapes into a new group appended to `groups`.
    ///
    /// Members keep their relative order from `shapes`, not selection order.
    pub fn group(&mut self, ids: &[ObjectId]) -> Result<ObjectId, SceneError> {
        if ids.len() < 2 {
            return Err(SceneError::invalid("grouping needs at least two objects"));
        }
        let unique: HashSet<&ObjectId> = ids.iter().collect();
        if unique.len() != ids.len() {
            return Err(SceneError::invalid("grouping lists the same object twice"));
        }
        if let Some(missing) = ids
            .iter()
            .find(|id| !self.shapes.iter().any(|s| &s.id == *id))
        {
            return Err(SceneError::invalid(format!(
                "'{}' is not a top-level shape",
                missing
            )));
        }

        let (members, rest): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut self.shapes)
            .into_iter()
            .partition(|s| unique.contains(&s.id));
        self.shapes = rest;
        let group = Group::new(members)
            .ok_or_else(|| SceneError::invalid("grouping needs at least two objects"))?;
        let group_id = group.id.clone();
        tracing::debug!("Grouped {} shapes into {}", group.members().len(), group_id);
        self.groups.push(group);
        Ok(group_id)
    }

    /// Dissolves a group, appending its members to `shapes` in order.
    pub fn ungroup(&mut self, group_id: &ObjectId) -> Result<Vec<ObjectId>, SceneError> {
        let index = self
            .groups
            .iter()
            .position(|g| &g.id == group_id)
            .ok_or_else(|| SceneError::invalid(format!("'{}' is not a group", group_id)))?;
        let members = self.groups.remove(index).into_members();
        let ids = members.iter().map(|m| m.id.clone()).collect();
        self.shapes.extend(members);
        tracing::debug!("Ungrouped {}", group_id);
        Ok(ids)
    }

    /// Sets `color` on each named shape, or every member of a named group.
    ///
    /// Unknown ids are skipped. Returns how many shapes actually changed color.
    pub fn recolor(&mut self, ids: &[ObjectId], color: &str) -> usize {
        let mut changed = 0;
        let mut paint = |shape: &mut Shape| {
            if shape.color != color {
                shape.color = color.to_string();
                changed += 1;
            }
        };
        for id in ids {
            if let Some(shape) = self.shapes.iter_mut().find(|s| &s.id == id) {
                paint(shape);
                continue;
            }
            for group in &mut self.groups {
                if &group.id == id {
                    group.members_mut().iter_mut().for_each(&mut paint);
                } else if let Some(member) = group.members_mut().iter_mut().find(|m| &m.id == id) {
                    paint(member);
                }
            }
        }
        changed
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.groups.clear();
    }
}
