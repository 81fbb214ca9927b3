use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::consts::GRID_SPACING;
use crate::factory::ShapeFactory;
use crate::geom::Point;
use crate::input::{Button, InputState, PointerEvent};
use crate::render::{self, CanvasSurface, Surface};
use crate::scene::{Scene, ShapeId};
use crate::shape::{Shape, ShapeKind};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShapeAdded(ShapeId),
    ShapeRemoved(ShapeId),
    ShapeRaised(ShapeId),
    ShapeMoved { id: ShapeId, dx: f64, dy: f64 },
    ShapeRecolored { id: ShapeId, color: Color },
    SceneCleared,
    RenderNeeded,
}

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Distance between background grid lines.
    pub grid_spacing: f64,
    /// Seed for random colors and shapes. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { grid_spacing: GRID_SPACING, seed: None }
    }
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub scene: Scene,
    pub input: InputState,
    pub config: EngineConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    rng: StdRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            scene: Scene::new(),
            input: InputState::Idle,
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            rng,
        }
    }

    // --- Viewport ---

    /// Update the drawing surface size.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport_width = width;
        self.viewport_height = height;
        vec![Action::RenderNeeded]
    }

    // --- Scene edits ---

    /// Add a shape on top of the scene.
    pub fn add_shape(&mut self, shape: Shape) -> Vec<Action> {
        let kind = shape.kind();
        let id = self.scene.add(shape);
        debug!(%id, %kind, "shape added");
        vec![Action::ShapeAdded(id), Action::RenderNeeded]
    }

    /// Add a shape of `kind` with random position, size and color.
    pub fn add_random_shape(&mut self, kind: ShapeKind) -> Vec<Action> {
        let factory = ShapeFactory::new(self.viewport_width, self.viewport_height);
        let shape = factory.random(kind, &mut self.rng);
        self.add_shape(shape)
    }

    /// Remove a shape. Ends the drag if it was the dragged shape.
    pub fn remove_shape(&mut self, id: &ShapeId) -> Vec<Action> {
        if self.scene.remove(id).is_none() {
            return Vec::new();
        }
        if self.input.selected().as_ref() == Some(id) {
            self.input = InputState::Idle;
        }
        debug!(%id, "shape removed");
        vec![Action::ShapeRemoved(*id), Action::RenderNeeded]
    }

    /// Remove every shape and drop any drag in progress.
    pub fn clear(&mut self) -> Vec<Action> {
        self.scene.clear();
        self.input = InputState::Idle;
        debug!("scene cleared");
        vec![Action::SceneCleared, Action::RenderNeeded]
    }

    /// A fresh uniformly random opaque color.
    pub fn random_color(&mut self) -> Color {
        Color::random(&mut self.rng)
    }

    // --- Input events ---

    /// Dispatch a pointer event to the matching handler.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        match event {
            PointerEvent::Press { button, at } => self.on_pointer_down(at, button),
            PointerEvent::Move { held, at } => self.on_pointer_move(at, held),
            PointerEvent::Release { button, at } => self.on_pointer_up(at, button),
        }
    }

    pub fn on_pointer_down(&mut self, at: Point, button: Button) -> Vec<Action> {
        match button {
            Button::Primary => self.begin_drag(at),
            Button::Secondary => self.recolor_at(at),
            Button::Middle => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, at: Point, held: Option<Button>) -> Vec<Action> {
        if held != Some(Button::Primary) {
            return Vec::new();
        }
        let InputState::Dragging { id, last } = self.input else {
            return Vec::new();
        };

        let Some(shape) = self.scene.get_mut(&id) else {
            trace!(%id, "dragged shape is gone; ending drag");
            self.input = InputState::Idle;
            return Vec::new();
        };

        let (dx, dy) = at.delta_from(last);
        shape.move_by(dx, dy);
        self.input = InputState::Dragging { id, last: at };
        trace!(%id, dx, dy, "shape dragged");
        vec![Action::ShapeMoved { id, dx, dy }, Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, _at: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        if let InputState::Dragging { id, .. } = self.input {
            debug!(%id, "drag finished");
        }
        self.input = InputState::Idle;
        Vec::new()
    }

    fn begin_drag(&mut self, at: Point) -> Vec<Action> {
        let Some(id) = self.scene.shape_at(at) else {
            self.input = InputState::Idle;
            return Vec::new();
        };

        self.scene.bring_to_front(&id);
        self.input = InputState::Dragging { id, last: at };
        debug!(%id, x = at.x, y = at.y, "drag started");
        vec![Action::ShapeRaised(id), Action::RenderNeeded]
    }

    fn recolor_at(&mut self, at: Point) -> Vec<Action> {
        let Some((id, shape)) = self.scene.shape_at_mut(at) else {
            return Vec::new();
        };
        let color = Color::random(&mut self.rng);
        shape.set_color(color);
        debug!(%id, "shape recolored");
        vec![Action::ShapeRecolored { id, color }, Action::RenderNeeded]
    }

    // --- Render ---

    /// Paint the current scene onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns the first error the surface reports.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, &self.scene, self.viewport_width, self.viewport_height, self.config.grid_spacing)
    }

    // --- Queries ---

    /// The shape being dragged, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.input.selected()
    }

    /// Look up a shape by handle.
    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.scene.get(id)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: EngineConfig) -> Self {
        let mut core = EngineCore::with_config(config);
        core.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()));
        Self { canvas, core }
    }

    // --- Viewport ---

    /// Resize the canvas element and the engine viewport.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.canvas.set_width(width.max(0.0).round() as u32);
        self.canvas.set_height(height.max(0.0).round() as u32);
        self.core.set_viewport(width, height)
    }

    // --- Delegated edits and input ---

    pub fn add_random_shape(&mut self, kind: ShapeKind) -> Vec<Action> {
        self.core.add_random_shape(kind)
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        self.core.handle(event)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        self.core.render(&mut CanvasSurface::new(ctx))
    }

    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.core.selection()
    }
}
