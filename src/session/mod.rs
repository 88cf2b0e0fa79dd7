//! Session controller.
//!
//! Thin external-facing layer over the tool state machine: owns the
//! current tool selection and the drawing for one editing session,
//! delegates pointer events, and produces dual-format exports on demand.
//! No persistence; the session lives and dies with the process.

pub mod script;


use log::debug;

use crate::config::Config;
use crate::draw::Drawing;
use crate::export::{
    self, ExportError, ExportResult, ExportStyle, RasterSurface, SnapshotOptions,
};
use crate::input::state::ShapeDefaults;
use crate::input::{InputState, PointerEvent, Tool};

/// One editing session: tool selection, the drawing, and export styling.
pub struct Session {
    input: InputState,
    style: ExportStyle,
    snapshot_options: SnapshotOptions,
}

impl Session {
    /// Creates a session from the loaded configuration, starting idle with
    /// the pen tool and an empty drawing.
    pub fn new(config: &Config) -> Self {
        let background = config.canvas.background.to_color();
        let style = ExportStyle {
            foreground: config.drawing.foreground.to_color(),
            background,
            stroke_width: config.drawing.stroke_width,
            eraser_width: config.drawing.eraser_width,
            canvas_width: config.canvas.width,
            canvas_height: config.canvas.height,
        };
        let defaults = ShapeDefaults {
            rect_width: config.drawing.rect_width,
            rect_height: config.drawing.rect_height,
            circle_radius: config.drawing.circle_radius,
        };
        Self {
            input: InputState::with_defaults(Tool::Pen, defaults),
            style,
            snapshot_options: SnapshotOptions {
                scale: config.export.scale,
                background,
            },
        }
    }

    /// Selects the active tool. Never interrupts an in-progress capture.
    pub fn select_tool(&mut self, tool: Tool) {
        self.input.set_tool(tool);
    }

    /// The currently selected tool.
    pub fn current_tool(&self) -> Tool {
        self.input.current_tool()
    }

    /// Routes a pointer event to the tool state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.input.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.input.on_pointer_motion(x, y),
            PointerEvent::Up { x, y } => self.input.on_pointer_release(x, y),
        }
    }

    /// The session's drawing.
    pub fn drawing(&self) -> &Drawing {
        &self.input.drawing
    }

    /// Whether a stroke capture is currently open.
    pub fn is_capturing(&self) -> bool {
        self.input.is_capturing()
    }

    /// Clears the drawing (explicit session reset).
    pub fn clear(&mut self) {
        debug!("session reset requested");
        self.input.clear();
    }

    /// Export styling derived from the configuration.
    pub fn export_style(&self) -> &ExportStyle {
        &self.style
    }

    /// Takes and clears the redraw flag; surfaces repaint when it was set.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.input.needs_redraw)
    }

    /// Exports the drawing as a raster + vector pair.
    ///
    /// All-or-nothing per the export contract; a failure (e.g. the surface
    /// is not mounted yet) leaves the drawing untouched and returns the
    /// error to the caller.
    pub fn export_drawing(
        &self,
        surface: &impl RasterSurface,
    ) -> Result<ExportResult, ExportError> {
        export::export_drawing(
            &self.input.drawing,
            surface,
            &self.style,
            &self.snapshot_options,
        )
    }
}
