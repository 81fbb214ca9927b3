//! Shape model and pointer-interaction engine for the figure board.
//!
//! This crate owns everything between raw pointer events and pixels: the
//! shapes on the board, their stacking order, the drag/recolor state machine,
//! and the renderer. The host (a browser page or the headless driver) only
//! forwards pointer events, reacts to [`engine::Action::RenderNeeded`], and
//! decides when to add random shapes or clear the board.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Ordered shape collection; z-order is list order |
//! | [`shape`] | Shape kinds, geometry, and render outlines |
//! | [`hit`] | Point-in-shape tests |
//! | [`input`] | Pointer event types and the gesture state machine |
//! | [`factory`] | Randomized shapes for the "add shape" actions |
//! | [`render`] | Grid and shape drawing onto a [`render::Surface`] |
//! | [`color`] | RGBA colors and random color generation |
//! | [`geom`] | Points and axis-aligned bounds |
//! | [`consts`] | Shared numeric constants (grid spacing, spawn ranges) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod factory;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod scene;
pub mod shape;
