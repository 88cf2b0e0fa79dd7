//! Drawing container: the ordered collections of strokes and shapes for one
//! editing session.

use super::shape::Shape;
use super::stroke::Stroke;
use crate::input::Tool;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by geometry model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An operation that requires an active capture ran while idle.
    /// Programmer error in the caller's event sequencing.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

/// Container for everything drawn in the current session.
///
/// Strokes and shapes live in separate insertion-ordered sequences; the
/// relative order within each sequence is paint order and is reproduced
/// exactly by the vector export. Created empty at session start, mutated
/// only by the tool state machine, cleared only by an explicit reset.
///
/// The `active` slot holds the index of the stroke currently being captured.
/// It is a single-slot optional handle with exclusive-write semantics: only
/// the tool state machine drives the begin/append/end lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Drawing {
    /// All finished and in-flight strokes, in capture order.
    pub strokes: Vec<Stroke>,
    /// All placed shapes, in placement order.
    pub shapes: Vec<Shape>,
    /// Index of the stroke currently being captured, if any.
    #[serde(skip)]
    active: Option<usize>,
}

impl Drawing {
    /// Creates a new empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new stroke with one initial point and marks it active.
    ///
    /// If a capture is somehow still open (two consecutive pointer-downs
    /// with no intervening release), the previous stroke is implicitly
    /// ended first so the model stays recoverable.
    pub fn begin_stroke(&mut self, tool: Tool, point: (f64, f64)) {
        if self.active.is_some() {
            warn!("pointer down with a capture already open; ending previous stroke");
            self.end_stroke();
        }
        self.strokes.push(Stroke::new(tool, point));
        self.active = Some(self.strokes.len() - 1);
    }

    /// Appends a point to the stroke currently being captured.
    ///
    /// Fails with [`ModelError::InvalidState`] when no capture is active;
    /// the state machine guards against this in normal event ordering.
    pub fn append_active_point(&mut self, point: (f64, f64)) -> Result<(), ModelError> {
        let index = self
            .active
            .ok_or(ModelError::InvalidState("append without active stroke"))?;
        self.strokes[index].push(point);
        Ok(())
    }

    /// Deactivates the current stroke; it remains in the drawing permanently.
    ///
    /// No-op when no capture is active.
    pub fn end_stroke(&mut self) {
        self.active = None;
    }

    /// Appends a fully-formed shape. Shapes are atomic: there is no
    /// active/end lifecycle and no mutation after placement.
    pub fn place_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes all strokes and shapes, resetting the session canvas.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.shapes.clear();
        self.active = None;
    }

    /// Whether a stroke capture is currently open.
    pub fn is_capturing(&self) -> bool {
        self.active.is_some()
    }

    /// The stroke currently being captured, if any.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.map(|index| &self.strokes[index])
    }

    /// Whether the drawing contains no primitives at all.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_append_end_builds_one_stroke() {
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Tool::Pen, (10.0, 10.0));
        drawing.append_active_point((20.0, 10.0)).unwrap();
        drawing.append_active_point((20.0, 20.0)).unwrap();
        drawing.end_stroke();

        assert_eq!(drawing.strokes.len(), 1);
        assert_eq!(
            drawing.strokes[0].points,
            vec![(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)]
        );
        assert!(!drawing.is_capturing());
    }

    #[test]
    fn append_without_capture_is_invalid_state() {
        let mut drawing = Drawing::new();
        assert_eq!(
            drawing.append_active_point((1.0, 1.0)),
            Err(ModelError::InvalidState("append without active stroke"))
        );
        assert!(drawing.is_empty());
    }

    #[test]
    fn end_stroke_without_capture_is_noop() {
        let mut drawing = Drawing::new();
        drawing.end_stroke();
        assert!(drawing.is_empty());
        assert!(!drawing.is_capturing());
    }

    #[test]
    fn double_begin_recovers_by_ending_previous_stroke() {
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Tool::Pen, (0.0, 0.0));
        drawing.begin_stroke(Tool::Pen, (5.0, 5.0));

        assert_eq!(drawing.strokes.len(), 2);
        assert!(drawing.is_capturing());
        // Appends land on the second stroke only.
        drawing.append_active_point((6.0, 6.0)).unwrap();
        assert_eq!(drawing.strokes[0].points.len(), 1);
        assert_eq!(drawing.strokes[1].points.len(), 2);
    }

    #[test]
    fn shapes_keep_placement_order() {
        let mut drawing = Drawing::new();
        drawing.place_shape(Shape::Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        });
        drawing.place_shape(Shape::Circle {
            cx: 5.0,
            cy: 5.0,
            r: 2.0,
        });

        assert_eq!(drawing.shapes[0].kind(), "rect");
        assert_eq!(drawing.shapes[1].kind(), "circle");
        assert!(!drawing.is_capturing());
    }

    #[test]
    fn clear_resets_everything() {
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Tool::Eraser, (1.0, 1.0));
        drawing.place_shape(Shape::Circle {
            cx: 0.0,
            cy: 0.0,
            r: 1.0,
        });
        drawing.clear();

        assert!(drawing.is_empty());
        assert!(!drawing.is_capturing());
    }
}
