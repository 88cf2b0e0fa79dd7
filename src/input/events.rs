//! Generic pointer event types for cross-backend compatibility.

use serde::{Deserialize, Serialize};

/// Pointer device events, totally ordered as received.
///
/// Backend implementations map their native input (mouse, touch, stylus)
/// to these generic events. The tool state machine assumes the usual
/// down -> zero-or-more moves -> up ordering and recovers from violations
/// rather than crashing the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Primary button pressed at (x, y).
    Down {
        /// Pointer X coordinate in canvas units
        x: f64,
        /// Pointer Y coordinate in canvas units
        y: f64,
    },
    /// Pointer moved to (x, y).
    Move {
        /// Pointer X coordinate in canvas units
        x: f64,
        /// Pointer Y coordinate in canvas units
        y: f64,
    },
    /// Primary button released at (x, y).
    Up {
        /// Pointer X coordinate in canvas units
        x: f64,
        /// Pointer Y coordinate in canvas units
        y: f64,
    },
}

impl PointerEvent {
    /// The position carried by the event.
    pub fn position(self) -> (f64, f64) {
        match self {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } | PointerEvent::Up { x, y } => {
                (x, y)
            }
        }
    }
}
