//! Shared numeric constants for the canvas crate.

// ── Grid ────────────────────────────────────────────────────────

/// Default spacing between background grid lines, in scene units.
pub const GRID_SPACING: f64 = 50.0;

/// Most grid lines drawn along one axis. Past this the grid is skipped.
pub const MAX_GRID_LINES: u32 = 10_000;

/// Stroke width of background grid lines.
pub const GRID_LINE_WIDTH: f64 = 0.5;

/// Stroke width of shape outlines.
pub const OUTLINE_WIDTH: f64 = 1.0;

// ── Shape factory ───────────────────────────────────────────────

/// Distance kept between a randomly placed shape center and the viewport edge.
pub const SPAWN_MARGIN: f64 = 50.0;

/// Rectangle width and height range: `[min, min + span)`.
pub const RECT_EXTENT_MIN: f64 = 50.0;
pub const RECT_EXTENT_SPAN: f64 = 100.0;

/// Circle radius range.
pub const CIRCLE_RADIUS_MIN: f64 = 25.0;
pub const CIRCLE_RADIUS_SPAN: f64 = 50.0;

/// Triangle size range.
pub const TRIANGLE_SIZE_MIN: f64 = 40.0;
pub const TRIANGLE_SIZE_SPAN: f64 = 80.0;

/// Square side range.
pub const SQUARE_SIDE_MIN: f64 = 40.0;
pub const SQUARE_SIDE_SPAN: f64 = 80.0;
