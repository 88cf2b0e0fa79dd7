//! Parametric shape primitives.

use serde::{Deserialize, Serialize};

/// A parametric drawn primitive, fully defined at creation time.
///
/// Shapes are placed atomically at pointer-down with the configured default
/// sizes; they are never drag-resized or otherwise mutated after being
/// appended to the drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned rectangle outline, anchored at its top-left corner.
    Rect {
        /// Top-left X coordinate (pointer-down position)
        x: f64,
        /// Top-left Y coordinate (pointer-down position)
        y: f64,
        /// Width in canvas units
        w: f64,
        /// Height in canvas units
        h: f64,
    },
    /// Circle outline, centered on the pointer-down position.
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Radius in canvas units
        r: f64,
    },
}

impl Shape {
    /// Short kind name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rect { .. } => "rect",
            Shape::Circle { .. } => "circle",
        }
    }
}
