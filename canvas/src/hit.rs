//! Point-in-shape tests.
//!
//! Circles use exact distance; every other kind is tested against its
//! axis-aligned bounding box, triangles included. The renderer still draws
//! the true triangle, so a click just outside a triangle's slanted edge but
//! inside its box selects it.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::Point;
use crate::shape::{Geometry, Shape};

/// Inclusive disc test: `(px-x)² + (py-y)² ≤ r²`.
#[must_use]
pub fn circle_contains(center: Point, radius: f64, p: Point) -> bool {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Whether `p` lies on or inside `shape`.
#[must_use]
pub fn shape_contains(shape: &Shape, p: Point) -> bool {
    match shape.geometry() {
        Geometry::Circle { radius } => circle_contains(shape.center(), radius, p),
        Geometry::Rectangle { .. } | Geometry::Square { .. } | Geometry::Triangle { .. } => {
            shape.bounds().contains(p)
        }
    }
}
