//! Tool state machine and input state management.

use crate::draw::Drawing;
use crate::input::tool::Tool;
use log::debug;

/// Default size parameters applied when a shape tool places a primitive.
///
/// Shapes are not drag-resized in this design; the pointer-down position
/// and these defaults fully define the placed primitive.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDefaults {
    /// Width of a placed rectangle in canvas units
    pub rect_width: f64,
    /// Height of a placed rectangle in canvas units
    pub rect_height: f64,
    /// Radius of a placed circle in canvas units
    pub circle_radius: f64,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            rect_width: 100.0,
            rect_height: 60.0,
            circle_radius: 40.0,
        }
    }
}

/// Main input state for one editing session.
///
/// Holds the drawing, the currently selected tool, and shape placement
/// defaults. Pointer events arrive through the `on_pointer_*` handlers
/// (see the `pointer` module) and mutate the drawing; nothing here touches
/// a rendering surface.
///
/// The capture machine has two states: idle, and capturing while the
/// drawing has an active stroke. Shape tools never enter capturing.
pub struct InputState {
    /// All strokes and shapes drawn so far
    pub drawing: Drawing,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Currently selected tool
    current_tool: Tool,
    /// Size parameters for atomically placed shapes
    shape_defaults: ShapeDefaults,
}

impl InputState {
    /// Creates a new input state with an empty drawing.
    pub fn with_defaults(tool: Tool, shape_defaults: ShapeDefaults) -> Self {
        Self {
            drawing: Drawing::new(),
            needs_redraw: true,
            current_tool: tool,
            shape_defaults,
        }
    }

    /// The currently selected tool.
    pub fn current_tool(&self) -> Tool {
        self.current_tool
    }

    /// Selects a tool, out-of-band of the pointer event stream.
    ///
    /// Selection never interrupts an in-progress capture: the in-flight
    /// stroke keeps the tool it was started with, and subsequent moves
    /// continue to append to it until the pointer is released.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.current_tool != tool {
            debug!("tool selected: {tool:?}");
            self.current_tool = tool;
        }
    }

    /// Whether a stroke capture is currently open.
    pub fn is_capturing(&self) -> bool {
        self.drawing.is_capturing()
    }

    /// Shape placement defaults.
    pub fn shape_defaults(&self) -> ShapeDefaults {
        self.shape_defaults
    }

    /// Clears the drawing, resetting the session canvas.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.needs_redraw = true;
    }
}
