//! Rendering surface boundary.

use super::ExportError;
use crate::draw::{color, Color};

/// Options for a raster snapshot request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotOptions {
    /// Resolution multiplier applied to the canvas extent (2.0 = retina).
    pub scale: f64,
    /// Background color composited behind the drawing.
    pub background: Color,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: color::WHITE,
        }
    }
}

/// The rendering surface the drawing is displayed on.
///
/// The core asks a surface for exactly two things: the pointer position and
/// an encoded raster snapshot. Surface lifecycle (mounting, unmounting,
/// sizing) belongs to the embedding application, not the core.
pub trait RasterSurface {
    /// Current pointer position in canvas coordinates.
    ///
    /// Headless surfaces have no pointer and return `None`; interactive
    /// backends translate their native pointer state.
    fn pointer_position(&self) -> Option<(f64, f64)>;

    /// Produces a self-contained encoded raster snapshot (PNG bytes) of the
    /// current surface contents.
    ///
    /// Fails with [`ExportError::SurfaceUnavailable`] while the surface is
    /// not mounted; callers may retry after mount.
    fn to_raster_snapshot(&self, options: &SnapshotOptions) -> Result<Vec<u8>, ExportError>;
}
