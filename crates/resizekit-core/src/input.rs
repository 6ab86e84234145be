//! Input event model.
//!
//! The host's event loop translates its native keyboard and pointer events
//! into these types before forwarding them to the overlay controller.
//! Events are cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A key release observed while an image selection is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Backspace key.
    Backspace,
    /// Forward-delete key.
    Delete,
    /// Any other key, carrying the host's key code.
    Other(u32),
}

impl Key {
    /// Whether this key requests removal of the selected content.
    pub fn removes_content(&self) -> bool {
        matches!(self, Key::Backspace | Key::Delete)
    }
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Primary button pressed.
    Pressed,
    /// Pointer moved while pressed.
    Moved,
    /// Primary button released.
    Released,
}

/// A pointer event in container coordinates.
///
/// Positions are relative to the editing surface's parent element, the same
/// coordinate space the overlay frame is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    /// Creates a pointer event.
    pub fn new(phase: PointerPhase, position: Point) -> Self {
        Self { phase, position }
    }

    /// A press at the given position.
    pub fn pressed(position: Point) -> Self {
        Self::new(PointerPhase::Pressed, position)
    }

    /// A move to the given position.
    pub fn moved(position: Point) -> Self {
        Self::new(PointerPhase::Moved, position)
    }

    /// A release at the given position.
    pub fn released(position: Point) -> Self {
        Self::new(PointerPhase::Released, position)
    }
}
