#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::Serialize;

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// This point translated by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

/// Axis-aligned box described by its center and half extents.
///
/// Containment is inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Point,
    pub half_w: f64,
    pub half_h: f64,
}

impl Bounds {
    #[must_use]
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self { center, half_w: width / 2.0, half_h: height / 2.0 }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.center.x - self.half_w
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.center.x + self.half_w
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.center.y - self.half_h
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.center.y + self.half_h
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.half_w * 2.0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.half_h * 2.0
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}
