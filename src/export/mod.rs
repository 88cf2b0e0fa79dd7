//! Dual-format export of a drawing: raster snapshot + vector document.
//!
//! The raster half comes from the rendering surface, the vector half is a
//! pure function of the drawing model. Both halves are produced from the
//! same frozen snapshot so a concurrent mutation can never land in one
//! format but not the other, and export is all-or-nothing: a failed raster
//! step fails the whole call without returning a partial pair.

pub mod raster;
pub mod surface;
pub mod vector;

pub use raster::SoftwareSurface;
pub use surface::{RasterSurface, SnapshotOptions};

use crate::draw::{color, Color, Drawing};
use crate::input::Tool;
use log::debug;
use thiserror::Error;

/// Errors raised while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The rendering surface does not exist yet (e.g. not mounted).
    /// Recoverable: retry after the surface is available.
    #[error("rendering surface unavailable")]
    SurfaceUnavailable,

    /// The snapshot could not be rasterized.
    #[error("rasterization failed: {0}")]
    Raster(String),

    /// PNG encoding of the rasterized snapshot failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

/// Stroke and shape styling applied at encode time.
///
/// Colors and widths are derived from the tool that produced each
/// primitive: the eraser paints wide background-colored strokes over
/// earlier geometry (additive-over, never subtractive), everything else
/// uses the foreground pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportStyle {
    /// Stroke color for every non-eraser primitive
    pub foreground: Color,
    /// Canvas background; also the eraser stroke color
    pub background: Color,
    /// Stroke width for pen/line strokes and shape outlines
    pub stroke_width: f64,
    /// Stroke width for eraser strokes
    pub eraser_width: f64,
    /// Fixed canvas extent: width in canvas units
    pub canvas_width: u32,
    /// Fixed canvas extent: height in canvas units
    pub canvas_height: u32,
}

impl Default for ExportStyle {
    fn default() -> Self {
        Self {
            foreground: color::BLACK,
            background: color::WHITE,
            stroke_width: 2.0,
            eraser_width: 10.0,
            canvas_width: 800,
            canvas_height: 600,
        }
    }
}

impl ExportStyle {
    /// Stroke color for a primitive produced by `tool`.
    pub fn stroke_color(&self, tool: Tool) -> Color {
        match tool {
            Tool::Eraser => self.background,
            _ => self.foreground,
        }
    }

    /// Stroke width for a primitive produced by `tool`.
    pub fn width_for(&self, tool: Tool) -> f64 {
        match tool {
            Tool::Eraser => self.eraser_width,
            _ => self.stroke_width,
        }
    }
}

/// The exported raster + vector pair.
///
/// Immutable once produced; the core does not retain it, ownership passes
/// to the caller.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Encoded raster snapshot of the surface (PNG bytes).
    pub raster: Vec<u8>,
    /// Self-contained SVG document equivalent to the drawing.
    pub vector: String,
}

/// Exports the drawing as a raster + vector pair.
///
/// The drawing is frozen before the raster request so both formats describe
/// identical content. A failing surface fails the whole export; the drawing
/// itself is never mutated by export, successful or not.
pub fn export_drawing(
    drawing: &Drawing,
    surface: &impl RasterSurface,
    style: &ExportStyle,
    options: &SnapshotOptions,
) -> Result<ExportResult, ExportError> {
    let snapshot = drawing.clone();
    let raster = surface.to_raster_snapshot(options)?;
    let vector = vector::to_svg(&snapshot, style);
    debug!(
        "exported drawing: {} strokes, {} shapes, {} PNG bytes, {} SVG bytes",
        snapshot.strokes.len(),
        snapshot.shapes.len(),
        raster.len(),
        vector.len()
    );
    Ok(ExportResult { raster, vector })
}
