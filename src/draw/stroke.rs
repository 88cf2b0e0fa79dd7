//! Free-form stroke primitive.

use crate::input::Tool;
use serde::{Deserialize, Serialize};

/// A free-form drawn primitive: the polyline traced by the pointer while a
/// freehand-class tool was held down.
///
/// Points are append-only while the stroke is being captured; a finished
/// stroke is never reordered or truncated. Erase semantics operate at
/// whole-stroke granularity, so individual points are never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Tool that produced this stroke. Fixed at creation: switching the
    /// selected tool mid-capture does not retag the in-flight stroke.
    pub tool: Tool,
    /// Ordered (x, y) pointer samples in capture order.
    pub points: Vec<(f64, f64)>,
}

impl Stroke {
    /// Creates a stroke seeded with its pointer-down sample.
    ///
    /// A stroke always has at least one point.
    pub fn new(tool: Tool, point: (f64, f64)) -> Self {
        Self {
            tool,
            points: vec![point],
        }
    }

    /// Appends a pointer sample to the end of the stroke.
    pub fn push(&mut self, point: (f64, f64)) {
        self.points.push(point);
    }
}
