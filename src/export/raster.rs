//! Headless software rendering surface built on tiny-skia.
//!
//! Keeps a copy of the drawing that is refreshed after each model mutation
//! (the headless stand-in for an on-screen canvas repainting itself) and
//! rasterizes it on demand into encoded PNG bytes.

use log::debug;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke as StrokeStyle, Transform};

use super::surface::{RasterSurface, SnapshotOptions};
use super::{ExportError, ExportStyle};
use crate::draw::{Color, Drawing, Shape, Stroke};

// Cubic bezier circle approximation constant: 4/3 * (sqrt(2) - 1).
const BEZIER_K: f32 = 0.552_284_8;

/// Software raster surface.
///
/// Unmounted until the first [`update`](Self::update); snapshot requests
/// before then fail with [`ExportError::SurfaceUnavailable`], matching a
/// live canvas that has not been attached to the document yet.
pub struct SoftwareSurface {
    style: ExportStyle,
    drawing: Option<Drawing>,
}

impl SoftwareSurface {
    /// Creates an unmounted surface with the given styling.
    pub fn new(style: ExportStyle) -> Self {
        Self {
            style,
            drawing: None,
        }
    }

    /// Mirrors the latest model state onto the surface.
    ///
    /// Call after each drawing mutation, the way an interactive canvas
    /// repaints after every pointer event. The first call mounts the
    /// surface.
    pub fn update(&mut self, drawing: &Drawing) {
        self.drawing = Some(drawing.clone());
    }

    /// Whether the surface has been mounted by a first `update`.
    pub fn is_mounted(&self) -> bool {
        self.drawing.is_some()
    }

    fn rasterize(
        &self,
        drawing: &Drawing,
        options: &SnapshotOptions,
    ) -> Result<Vec<u8>, ExportError> {
        let width = (f64::from(self.style.canvas_width) * options.scale).round() as u32;
        let height = (f64::from(self.style.canvas_height) * options.scale).round() as u32;
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            ExportError::Raster(format!("zero-sized pixmap ({width}x{height})"))
        })?;

        pixmap.fill(to_skia_color(options.background));
        let transform = Transform::from_scale(options.scale as f32, options.scale as f32);

        for stroke in &drawing.strokes {
            paint_stroke(&mut pixmap, stroke, &self.style, transform);
        }
        for shape in &drawing.shapes {
            paint_shape(&mut pixmap, shape, &self.style, transform);
        }

        debug!("rasterized {width}x{height} snapshot at scale {}", options.scale);
        pixmap
            .encode_png()
            .map_err(|err| ExportError::PngEncode(err.to_string()))
    }
}

impl RasterSurface for SoftwareSurface {
    fn pointer_position(&self) -> Option<(f64, f64)> {
        // Headless: there is no pointer hovering this surface.
        None
    }

    fn to_raster_snapshot(&self, options: &SnapshotOptions) -> Result<Vec<u8>, ExportError> {
        let drawing = self
            .drawing
            .as_ref()
            .ok_or(ExportError::SurfaceUnavailable)?;
        self.rasterize(drawing, options)
    }
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    let [r, g, b, a] = color.to_rgba8();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn stroke_style(width: f64) -> StrokeStyle {
    StrokeStyle {
        width: width as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

fn paint_stroke(pixmap: &mut Pixmap, stroke: &Stroke, style: &ExportStyle, transform: Transform) {
    let Some(path) = build_polyline_path(&stroke.points) else {
        return;
    };
    let paint = solid_paint(style.stroke_color(stroke.tool));
    pixmap.stroke_path(
        &path,
        &paint,
        &stroke_style(style.width_for(stroke.tool)),
        transform,
        None,
    );
}

fn paint_shape(pixmap: &mut Pixmap, shape: &Shape, style: &ExportStyle, transform: Transform) {
    let path = match *shape {
        Shape::Rect { x, y, w, h } => tiny_skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32)
            .map(PathBuilder::from_rect),
        Shape::Circle { cx, cy, r } => build_circle_path(cx as f32, cy as f32, r as f32),
    };
    let Some(path) = path else {
        // Degenerate extents (zero or negative size) have no drawable area.
        return;
    };
    let paint = solid_paint(style.foreground);
    pixmap.stroke_path(
        &path,
        &paint,
        &stroke_style(style.stroke_width),
        transform,
        None,
    );
}

/// Builds the polyline through the stroke's points.
///
/// A zero-length path does not rasterize, so a single-point stroke is
/// nudged into a minimal segment; with round caps this paints the dot the
/// user tapped.
fn build_polyline_path(points: &[(f64, f64)]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.0 as f32, first.1 as f32);
    if rest.is_empty() {
        pb.line_to(first.0 as f32 + 0.01, first.1 as f32);
    } else {
        for &(x, y) in rest {
            pb.line_to(x as f32, y as f32);
        }
    }
    pb.finish()
}

/// Builds a circle outline from four cubic bezier arcs.
fn build_circle_path(cx: f32, cy: f32, r: f32) -> Option<tiny_skia::Path> {
    if r <= 0.0 {
        return None;
    }
    let k = r * BEZIER_K;
    let mut pb = PathBuilder::new();

    pb.move_to(cx, cy - r);
    pb.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    pb.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    pb.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    pb.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        // IHDR is always the first chunk: width/height live at offsets 16/20.
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn snapshot_before_mount_fails_with_surface_unavailable() {
        let surface = SoftwareSurface::new(ExportStyle::default());
        assert!(!surface.is_mounted());
        let result = surface.to_raster_snapshot(&SnapshotOptions::default());
        assert!(matches!(result, Err(ExportError::SurfaceUnavailable)));
    }

    #[test]
    fn snapshot_after_update_is_valid_png_at_canvas_extent() {
        let mut surface = SoftwareSurface::new(ExportStyle::default());
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Tool::Pen, (10.0, 10.0));
        drawing.append_active_point((100.0, 100.0)).unwrap();
        drawing.end_stroke();
        surface.update(&drawing);

        let png = surface
            .to_raster_snapshot(&SnapshotOptions::default())
            .unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
        assert_eq!(png_dimensions(&png), (800, 600));
    }

    #[test]
    fn scale_multiplies_the_snapshot_resolution() {
        let mut surface = SoftwareSurface::new(ExportStyle::default());
        surface.update(&Drawing::new());

        let options = SnapshotOptions {
            scale: 2.0,
            ..SnapshotOptions::default()
        };
        let png = surface.to_raster_snapshot(&options).unwrap();
        assert_eq!(png_dimensions(&png), (1600, 1200));
    }

    #[test]
    fn single_point_strokes_still_rasterize() {
        let mut surface = SoftwareSurface::new(ExportStyle::default());
        let mut drawing = Drawing::new();
        drawing.begin_stroke(Tool::Pen, (50.0, 50.0));
        drawing.end_stroke();
        surface.update(&drawing);

        let png = surface
            .to_raster_snapshot(&SnapshotOptions::default())
            .unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn shapes_rasterize_without_panicking() {
        let mut surface = SoftwareSurface::new(ExportStyle::default());
        let mut drawing = Drawing::new();
        drawing.place_shape(Shape::Rect {
            x: 5.0,
            y: 5.0,
            w: 100.0,
            h: 60.0,
        });
        drawing.place_shape(Shape::Circle {
            cx: 200.0,
            cy: 200.0,
            r: 40.0,
        });
        // Degenerate shape is skipped, not fatal.
        drawing.place_shape(Shape::Circle {
            cx: 0.0,
            cy: 0.0,
            r: 0.0,
        });
        surface.update(&drawing);

        let png = surface
            .to_raster_snapshot(&SnapshotOptions::default())
            .unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }
}
