//! Drawing tool selection.

use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The selected tool decides how a pointer-down is interpreted: freehand
/// tools open a stroke capture that follows the pointer, shape tools place
/// a parametric primitive atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    Pen,
    /// Straight-line drawing - captured point-by-point like a stroke
    Line,
    /// Rectangle outline placed at pointer-down with the default size
    Rect,
    /// Circle outline placed at pointer-down with the default radius
    Circle,
    /// Wide background-colored stroke; occludes earlier geometry instead
    /// of deleting it
    Eraser,
}

impl Tool {
    /// Whether pointer-down opens a stroke capture with this tool.
    ///
    /// Rectangle and circle placement is a single atomic event, so those
    /// tools never enter the capturing state.
    pub fn captures_stroke(self) -> bool {
        matches!(self, Tool::Pen | Tool::Line | Tool::Eraser)
    }
}
