//! Shape model: geometric primitives, their colors, and render outlines.
//!
//! A [`Shape`] is a center point, a fill color, and a [`Geometry`] payload.
//! Geometry is a closed enum so every consumer (hit-testing, rendering, the
//! factory) handles each kind exhaustively. Extents are never negative: the
//! plain constructors assert it in debug builds and [`Shape::try_new`]
//! reports it for callers building shapes from untrusted input.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use std::fmt;

use serde::Serialize;

use crate::color::Color;
use crate::geom::{Bounds, Point};
use crate::hit;

/// The kind of a shape, without its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// Every kind, in the order the toolbar offers them.
    pub const ALL: [ShapeKind; 4] = [Self::Rectangle, Self::Circle, Self::Triangle, Self::Square];

    /// Lowercase name, as used in scripts and serialized output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Triangle => "triangle",
        }
    }

    /// Parse a lowercase kind name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind dimensions. All extents are in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    /// Isosceles triangle inscribed in a `size × size` box, apex up.
    Triangle { size: f64 },
}

impl Geometry {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Square { .. } => ShapeKind::Square,
            Self::Triangle { .. } => ShapeKind::Triangle,
        }
    }

    /// Full width and height of the axis-aligned box around the shape.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        match *self {
            Self::Circle { radius } => (radius * 2.0, radius * 2.0),
            Self::Rectangle { width, height } => (width, height),
            Self::Square { side } => (side, side),
            Self::Triangle { size } => (size, size),
        }
    }

    fn dimensions(&self) -> [f64; 2] {
        match *self {
            Self::Circle { radius } => [radius, 0.0],
            Self::Rectangle { width, height } => [width, height],
            Self::Square { side } => [side, 0.0],
            Self::Triangle { size } => [size, 0.0],
        }
    }

    /// Check that every extent is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending extent.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let kind = self.kind();
        for value in self.dimensions() {
            if !value.is_finite() {
                return Err(ShapeError::NonFiniteExtent { kind });
            }
            if value < 0.0 {
                return Err(ShapeError::NegativeExtent { kind, value });
            }
        }
        Ok(())
    }
}

/// Reasons a shape cannot be built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("{kind} extent must not be negative, got {value}")]
    NegativeExtent { kind: ShapeKind, value: f64 },
    #[error("{kind} extent must be finite")]
    NonFiniteExtent { kind: ShapeKind },
    #[error("shape position must be finite")]
    NonFinitePosition,
}

/// Render description of a shape: the exact outline to fill and stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outline", rename_all = "lowercase")]
pub enum Outline {
    Disc { center: Point, radius: f64 },
    /// Axis-aligned box with its top-left corner at `(x, y)`.
    Box { x: f64, y: f64, width: f64, height: f64 },
    /// Apex, base-left, base-right.
    Polygon { points: [Point; 3] },
}

/// A colored primitive positioned by its geometric center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    center: Point,
    color: Color,
    geometry: Geometry,
}

impl Shape {
    /// Build a shape. Extents must be non-negative.
    #[must_use]
    pub fn new(center: Point, geometry: Geometry, color: Color) -> Self {
        debug_assert!(geometry.validate().is_ok(), "invalid geometry: {geometry:?}");
        Self { center, color, geometry }
    }

    /// Build a shape from unchecked input.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the position is not finite or any extent is
    /// negative or not finite.
    pub fn try_new(center: Point, geometry: Geometry, color: Color) -> Result<Self, ShapeError> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(ShapeError::NonFinitePosition);
        }
        geometry.validate()?;
        Ok(Self { center, color, geometry })
    }

    #[must_use]
    pub fn circle(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self::new(Point::new(x, y), Geometry::Circle { radius }, color)
    }

    #[must_use]
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self::new(Point::new(x, y), Geometry::Rectangle { width, height }, color)
    }

    #[must_use]
    pub fn square(x: f64, y: f64, side: f64, color: Color) -> Self {
        Self::new(Point::new(x, y), Geometry::Square { side }, color)
    }

    #[must_use]
    pub fn triangle(x: f64, y: f64, size: f64, color: Color) -> Self {
        Self::new(Point::new(x, y), Geometry::Triangle { size }, color)
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Translate the center. Shapes may leave the visible surface.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.center = self.center.offset(dx, dy);
    }

    /// Axis-aligned box around the shape.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let (w, h) = self.geometry.extent();
        Bounds::centered(self.center, w, h)
    }

    /// Whether `p` hits this shape. See [`crate::hit`] for the rules.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        hit::shape_contains(self, p)
    }

    /// The outline the renderer fills with [`Shape::color`] and strokes black.
    #[must_use]
    pub fn outline(&self) -> Outline {
        let Point { x, y } = self.center;
        match self.geometry {
            Geometry::Circle { radius } => Outline::Disc { center: self.center, radius },
            Geometry::Rectangle { width, height } => {
                Outline::Box { x: x - width / 2.0, y: y - height / 2.0, width, height }
            }
            Geometry::Square { side } => Outline::Box { x: x - side / 2.0, y: y - side / 2.0, width: side, height: side },
            Geometry::Triangle { size } => {
                let half = size / 2.0;
                Outline::Polygon {
                    points: [Point::new(x, y - half), Point::new(x - half, y + half), Point::new(x + half, y + half)],
                }
            }
        }
    }
}
