//! Input model: mouse buttons, pointer events, and the gesture state machine.
//!
//! `PointerEvent` is what the host delivers, already in scene coordinates.
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. Only a primary-button drag is stateful; recoloring with the
//! secondary button is a one-shot action and never leaves `Idle`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::scene::ShapeId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Parse a lowercase button name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" | "left" => Some(Self::Primary),
            "middle" => Some(Self::Middle),
            "secondary" | "right" => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// A raw pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button went down.
    Press { button: Button, at: Point },
    /// The pointer moved. `held` is the button held during the move, if any.
    Move { held: Option<Button>, at: Point },
    /// A button went up.
    Release { button: Button, at: Point },
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a shape with the primary button held.
    Dragging {
        /// Handle of the shape being dragged.
        id: ShapeId,
        /// Pointer position at the previous event, used to compute deltas.
        last: Point,
    },
}

impl InputState {
    /// The shape being dragged, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ShapeId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } => Some(*id),
        }
    }
}
