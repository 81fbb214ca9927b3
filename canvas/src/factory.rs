//! Random shape construction for the "add shape" toolbar actions.
//!
//! Centers land inside the viewport minus [`SPAWN_MARGIN`] on each side; on a
//! viewport too small to leave room for both margins the shape is centered
//! on that axis. Sizes are drawn from fixed per-kind ranges, all positive.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use rand::Rng;

use crate::color::Color;
use crate::consts::{
    CIRCLE_RADIUS_MIN, CIRCLE_RADIUS_SPAN, RECT_EXTENT_MIN, RECT_EXTENT_SPAN, SPAWN_MARGIN, SQUARE_SIDE_MIN,
    SQUARE_SIDE_SPAN, TRIANGLE_SIZE_MIN, TRIANGLE_SIZE_SPAN,
};
use crate::geom::Point;
use crate::shape::{Geometry, Shape, ShapeKind};

/// Builds randomized shapes for a viewport of the given size.
#[derive(Debug, Clone, Copy)]
pub struct ShapeFactory {
    pub width: f64,
    pub height: f64,
}

impl ShapeFactory {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A new shape of `kind` with random position, size and color.
    pub fn random<R: Rng + ?Sized>(&self, kind: ShapeKind, rng: &mut R) -> Shape {
        let center = Point::new(spawn_coord(self.width, rng), spawn_coord(self.height, rng));
        let geometry = match kind {
            ShapeKind::Rectangle => Geometry::Rectangle {
                width: in_range(RECT_EXTENT_MIN, RECT_EXTENT_SPAN, rng),
                height: in_range(RECT_EXTENT_MIN, RECT_EXTENT_SPAN, rng),
            },
            ShapeKind::Circle => Geometry::Circle { radius: in_range(CIRCLE_RADIUS_MIN, CIRCLE_RADIUS_SPAN, rng) },
            ShapeKind::Triangle => Geometry::Triangle { size: in_range(TRIANGLE_SIZE_MIN, TRIANGLE_SIZE_SPAN, rng) },
            ShapeKind::Square => Geometry::Square { side: in_range(SQUARE_SIDE_MIN, SQUARE_SIDE_SPAN, rng) },
        };
        Shape::new(center, geometry, Color::random(rng))
    }
}

fn in_range<R: Rng + ?Sized>(min: f64, span: f64, rng: &mut R) -> f64 {
    min + rng.random::<f64>() * span
}

fn spawn_coord<R: Rng + ?Sized>(extent: f64, rng: &mut R) -> f64 {
    let span = extent - 2.0 * SPAWN_MARGIN;
    if span <= 0.0 {
        return extent.max(0.0) / 2.0;
    }
    in_range(SPAWN_MARGIN, span, rng)
}
