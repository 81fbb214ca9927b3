//! Rendering: draws the grid and every shape onto a drawing surface.
//!
//! Drawing goes through the [`Surface`] trait, a small slice of a 2D canvas
//! context. [`CanvasSurface`] forwards it to a browser
//! `CanvasRenderingContext2d`; [`DrawList`] records the calls instead, for
//! tests and headless hosts. Rendering reads the scene and
//! mutates nothing, so calling [`draw`] twice paints the same picture.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::convert::Infallible;
use std::f64::consts::PI;

use serde::Serialize;
use tracing::debug;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Color;
use crate::consts::{GRID_LINE_WIDTH, MAX_GRID_LINES, OUTLINE_WIDTH};
use crate::geom::Point;
use crate::scene::Scene;
use crate::shape::{Outline, Shape};

/// The drawing operations the renderer needs.
pub trait Surface {
    type Error;

    /// Erase everything from the origin to `(width, height)`.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Stroke a straight line.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) -> Result<(), Self::Error>;

    /// Fill an outline.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn fill(&mut self, outline: &Outline, color: Color) -> Result<(), Self::Error>;

    /// Stroke an outline.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn stroke(&mut self, outline: &Outline, color: Color, width: f64) -> Result<(), Self::Error>;
}

/// Draw the full scene: clear, grid, then shapes bottom to top.
///
/// # Errors
///
/// Returns the first error the surface reports.
pub fn draw<S: Surface>(surface: &mut S, scene: &Scene, width: f64, height: f64, grid_spacing: f64) -> Result<(), S::Error> {
    // Layer 1: clear.
    surface.clear(width, height)?;

    // Layer 2: grid.
    draw_grid(surface, width, height, grid_spacing)?;

    // Layer 3: shapes in paint order.
    for (_, shape) in scene.iter() {
        draw_shape(surface, shape)?;
    }
    Ok(())
}

fn draw_grid<S: Surface>(surface: &mut S, width: f64, height: f64, spacing: f64) -> Result<(), S::Error> {
    if spacing <= 0.0 || !spacing.is_finite() {
        return Ok(());
    }
    let (Some(columns), Some(rows)) = (grid_line_count(width, spacing), grid_line_count(height, spacing)) else {
        debug!(width, height, spacing, "grid too dense; skipped");
        return Ok(());
    };

    for i in 0..columns {
        let x = (f64::from(i) * spacing).min(width);
        surface.line(Point::new(x, 0.0), Point::new(x, height), Color::LIGHT_GRAY, GRID_LINE_WIDTH)?;
    }
    for i in 0..rows {
        let y = (f64::from(i) * spacing).min(height);
        surface.line(Point::new(0.0, y), Point::new(width, y), Color::LIGHT_GRAY, GRID_LINE_WIDTH)?;
    }
    Ok(())
}

/// Lines at `0, s, 2s, ...` up to and including `extent`, or `None` past
/// [`MAX_GRID_LINES`]. A line within rounding error of the edge counts.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grid_line_count(extent: f64, spacing: f64) -> Option<u32> {
    if extent.is_nan() || extent < 0.0 {
        return Some(0);
    }
    let steps = (extent / spacing + 1e-9).floor();
    if steps >= f64::from(MAX_GRID_LINES) {
        return None;
    }
    Some(steps as u32 + 1)
}

fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape) -> Result<(), S::Error> {
    let outline = shape.outline();
    surface.fill(&outline, shape.color())?;
    surface.stroke(&outline, Color::BLACK, OUTLINE_WIDTH)
}

// =============================================================
// Recording surface
// =============================================================

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawCmd {
    Clear { width: f64, height: f64 },
    Line { from: Point, to: Point, color: Color, width: f64 },
    Fill { outline: Outline, color: Color },
    Stroke { outline: Outline, color: Color, width: f64 },
}

/// A [`Surface`] that records draw calls in order.
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    #[must_use]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }
}

impl Surface for DrawList {
    type Error = Infallible;

    /// Starts a new frame: earlier commands are dropped.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Infallible> {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear { width, height });
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::Line { from, to, color, width });
        Ok(())
    }

    fn fill(&mut self, outline: &Outline, color: Color) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::Fill { outline: *outline, color });
        Ok(())
    }

    fn stroke(&mut self, outline: &Outline, color: Color, width: f64) -> Result<(), Infallible> {
        self.cmds.push(DrawCmd::Stroke { outline: *outline, color, width });
        Ok(())
    }
}

// =============================================================
// Browser surface
// =============================================================

/// [`Surface`] backed by a browser 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Build the current path for a non-box outline.
    fn trace(&self, outline: &Outline) -> Result<(), JsValue> {
        self.ctx.begin_path();
        match *outline {
            Outline::Disc { center, radius } => self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?,
            Outline::Box { x, y, width, height } => self.ctx.rect(x, y, width, height),
            Outline::Polygon { points } => {
                let [first, rest @ ..] = points;
                self.ctx.move_to(first.x, first.y);
                for p in rest {
                    self.ctx.line_to(p.x, p.y);
                }
                self.ctx.close_path();
            }
        }
        Ok(())
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f64) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn fill(&mut self, outline: &Outline, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        if let Outline::Box { x, y, width, height } = *outline {
            self.ctx.fill_rect(x, y, width, height);
        } else {
            self.trace(outline)?;
            self.ctx.fill();
        }
        Ok(())
    }

    fn stroke(&mut self, outline: &Outline, color: Color, width: f64) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        if let Outline::Box { x, y, width, height } = *outline {
            self.ctx.stroke_rect(x, y, width, height);
        } else {
            self.trace(outline)?;
            self.ctx.stroke();
        }
        Ok(())
    }
}
