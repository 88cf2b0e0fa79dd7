use crate::draw::Shape;
use crate::input::tool::Tool;
use log::warn;

use super::InputState;

impl InputState {
    /// Processes a pointer press event.
    ///
    /// # Behavior
    /// - Freehand tools (pen, line, eraser): begins a stroke capture at
    ///   (x, y); moves append to it until release.
    /// - Shape tools (rect, circle): places the primitive atomically at
    ///   (x, y) with the configured defaults and stays idle.
    ///
    /// A press while a capture is already open (missed release) implicitly
    /// ends the previous stroke before the new action; the model logs and
    /// recovers rather than treating it as fatal.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        match self.current_tool() {
            tool @ (Tool::Pen | Tool::Line | Tool::Eraser) => {
                self.drawing.begin_stroke(tool, (x, y));
            }
            Tool::Rect => {
                let defaults = self.shape_defaults();
                self.drawing.place_shape(Shape::Rect {
                    x,
                    y,
                    w: defaults.rect_width,
                    h: defaults.rect_height,
                });
            }
            Tool::Circle => {
                let defaults = self.shape_defaults();
                self.drawing.place_shape(Shape::Circle {
                    cx: x,
                    cy: y,
                    r: defaults.circle_radius,
                });
            }
        }
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// While capturing, the sample is appended to the active stroke - which
    /// keeps the tool it was started with, regardless of the current
    /// selection. Motion while idle is ignored (shapes are never affected).
    pub fn on_pointer_motion(&mut self, x: f64, y: f64) {
        if !self.drawing.is_capturing() {
            return;
        }
        match self.drawing.append_active_point((x, y)) {
            Ok(()) => self.needs_redraw = true,
            Err(err) => warn!("dropped pointer sample: {err}"),
        }
    }

    /// Processes pointer release: ends the capture if one is open.
    ///
    /// The finished stroke remains in the drawing permanently. Release
    /// while idle is ignored.
    pub fn on_pointer_release(&mut self, _x: f64, _y: f64) {
        if self.drawing.is_capturing() {
            self.drawing.end_stroke();
            self.needs_redraw = true;
        }
    }
}
