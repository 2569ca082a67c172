//! Spatial collection of shapes
//!
//! A [`Space`] owns every shape in a level, hands out stable handles, and
//! preserves insertion order for iteration and filtering. Scoping physics
//! interactions works by filtering into [`SubCollection`] views ("solid",
//! "ramp", "dangerous", ...) and resolving movement against each view in a
//! fixed per-frame order.
//!
//! Everything here is single threaded by design: the space and its shapes
//! are owned and mutated by the game-loop thread, and queries are pure
//! reads, so there is no locking discipline to uphold.

use crate::config::ResolveConfig;
use crate::foundation::collections::{Handle, HandleMap};
use crate::geometry;
use crate::resolve::{self, CollisionResult};
use crate::shapes::Shape;

/// Stable reference to a shape in a [`Space`]
pub type ShapeHandle = Handle;

/// The mutable, insertion-ordered collection of all shapes in a level
#[derive(Debug, Default)]
pub struct Space {
    shapes: HandleMap<Shape>,
    order: Vec<ShapeHandle>,
}

impl Space {
    /// Create an empty space
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape and return its handle
    pub fn add(&mut self, shape: Shape) -> ShapeHandle {
        let handle = self.shapes.insert(shape);
        self.order.push(handle);
        handle
    }

    /// Remove a shape; ownership passes back to the caller
    pub fn remove(&mut self, handle: ShapeHandle) -> Option<Shape> {
        let shape = self.shapes.remove(handle)?;
        self.order.retain(|&h| h != handle);
        Some(shape)
    }

    /// Remove every shape (scene teardown)
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the space is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the handle refers to a shape in this space
    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.shapes.contains_key(handle)
    }

    /// Borrow a shape
    pub fn get(&self, handle: ShapeHandle) -> Option<&Shape> {
        self.shapes.get(handle)
    }

    /// Mutably borrow a shape
    pub fn get_mut(&mut self, handle: ShapeHandle) -> Option<&mut Shape> {
        self.shapes.get_mut(handle)
    }

    /// Handle of the `i`th shape in insertion order
    pub fn handle_at(&self, index: usize) -> Option<ShapeHandle> {
        self.order.get(index).copied()
    }

    /// Shapes with their handles, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeHandle, &Shape)> {
        self.order
            .iter()
            .filter_map(move |&handle| self.shapes.get(handle).map(|shape| (handle, shape)))
    }

    /// View of the shapes matching `predicate`, preserving relative order
    ///
    /// Filtering never mutates the source; the view is independently
    /// filterable and resolvable.
    pub fn filter<F>(&self, predicate: F) -> SubCollection<'_>
    where
        F: Fn(&Shape) -> bool,
    {
        SubCollection {
            space: self,
            handles: self
                .iter()
                .filter(|(_, shape)| predicate(shape))
                .map(|(handle, _)| handle)
                .collect(),
        }
    }

    /// View of the shapes carrying every one of `tags`
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> SubCollection<'_> {
        self.filter(|shape| shape.has_tags(tags))
    }

    /// Whether any member collides with `shape`
    ///
    /// The space-level side of the collision dispatch: a shape tested
    /// against a whole space collides iff it collides with any member.
    /// `shape` itself is skipped if it lives in this space.
    pub fn is_colliding_any(&self, shape: &Shape) -> bool {
        self.iter().any(|(_, member)| {
            !std::ptr::eq(member, shape) && geometry::is_colliding(shape, member)
        })
    }
}

/// An ordered, filtered view over a [`Space`], itself resolvable
#[derive(Debug)]
pub struct SubCollection<'s> {
    space: &'s Space,
    handles: Vec<ShapeHandle>,
}

impl<'s> SubCollection<'s> {
    /// Number of shapes in the view
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Borrow the `i`th shape of the view
    pub fn get(&self, index: usize) -> Option<&'s Shape> {
        self.handles.get(index).and_then(|&h| self.space.get(h))
    }

    /// Handle of the `i`th shape of the view
    pub fn handle_at(&self, index: usize) -> Option<ShapeHandle> {
        self.handles.get(index).copied()
    }

    /// Shapes with their handles, in view order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeHandle, &'s Shape)> + '_ {
        let space = self.space;
        self.handles
            .iter()
            .filter_map(move |&handle| space.get(handle).map(|shape| (handle, shape)))
    }

    /// Narrow the view further with a predicate
    pub fn filter<F>(&self, predicate: F) -> SubCollection<'s>
    where
        F: Fn(&Shape) -> bool,
    {
        SubCollection {
            space: self.space,
            handles: self
                .iter()
                .filter(|(_, shape)| predicate(shape))
                .map(|(handle, _)| handle)
                .collect(),
        }
    }

    /// Narrow the view to shapes carrying every one of `tags`
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> SubCollection<'s> {
        self.filter(|shape| shape.has_tags(tags))
    }

    /// Resolve an attempted move of `moving` against this view with the
    /// default [`ResolveConfig`]
    pub fn resolve(&self, moving: &Shape, dx: i32, dy: i32) -> CollisionResult<'s> {
        self.resolve_with(moving, dx, dy, &ResolveConfig::default())
    }

    /// Resolve an attempted move of `moving` against this view
    ///
    /// `moving` may live in this space (it is skipped among the
    /// candidates) or be a free-standing shape. The mover is not mutated;
    /// the caller applies the resolved delta.
    pub fn resolve_with(
        &self,
        moving: &Shape,
        dx: i32,
        dy: i32,
        config: &ResolveConfig,
    ) -> CollisionResult<'s> {
        let members: Vec<(ShapeHandle, &'s Shape)> = self.iter().collect();
        let candidates: Vec<&Shape> = members.iter().map(|&(_, shape)| shape).collect();

        let resolution = resolve::resolve(moving, dx, dy, &candidates, config);
        CollisionResult::new(resolution, resolution.blocking_index.map(|i| members[i]))
    }
}
