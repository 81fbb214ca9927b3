//! Scene: the ordered collection of shapes on the canvas.
//!
//! Order is z-order. Index 0 paints first (bottom); the last shape paints
//! last (top) and wins hit-tests. There is no separate z-index field, so
//! raising a shape means moving it to the end of the list.
//!
//! Shapes are addressed by [`ShapeId`] handles assigned on insertion. A handle
//! stays valid until the shape is removed or the scene is cleared; lookups
//! with a stale handle return `None`.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use uuid::Uuid;

use crate::geom::Point;
use crate::shape::Shape;

/// Opaque handle to a shape in a [`Scene`].
pub type ShapeId = Uuid;

/// Shapes in paint order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<(ShapeId, Shape)>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape on top of everything else and return its handle.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = Uuid::new_v4();
        self.shapes.push((id, shape));
        id
    }

    /// Remove every shape. All outstanding handles become stale.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Remove a shape, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index).1)
    }

    /// The topmost shape containing `p`.
    #[must_use]
    pub fn shape_at(&self, p: Point) -> Option<ShapeId> {
        self.shapes.iter().rev().find(|(_, shape)| shape.contains(p)).map(|(id, _)| *id)
    }

    /// The topmost shape containing `p`, for in-place edits.
    pub fn shape_at_mut(&mut self, p: Point) -> Option<(ShapeId, &mut Shape)> {
        self.shapes.iter_mut().rev().find(|(_, shape)| shape.contains(p)).map(|(id, shape)| (*id, shape))
    }

    /// Move a shape to the top, keeping everything else in order.
    ///
    /// Returns `false` if the handle is stale.
    pub fn bring_to_front(&mut self, id: &ShapeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let entry = self.shapes.remove(index);
        self.shapes.push(entry);
        true
    }

    /// Position of a shape in paint order.
    #[must_use]
    pub fn index_of(&self, id: &ShapeId) -> Option<usize> {
        self.shapes.iter().position(|(sid, _)| sid == id)
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|(sid, _)| sid == id).map(|(_, shape)| shape)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|(sid, _)| sid == id).map(|(_, shape)| shape)
    }

    /// Shapes bottom to top, with their handles.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ShapeId, &Shape)> + '_ {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    /// Handles bottom to top.
    #[must_use]
    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(|(id, _)| *id).collect()
    }

    /// Number of shapes in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the scene contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
