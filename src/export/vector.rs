//! Deterministic SVG serialization of a drawing.
//!
//! A pure function of the drawing model: no rendering context is consulted
//! and identical drawings yield byte-identical documents, which downstream
//! consumers (golden tests, the generation service) rely on.

use std::fmt::Write;

use super::ExportStyle;
use crate::draw::{Drawing, Shape, Stroke};
use crate::util::fmt_coord;

/// Serializes the drawing into a self-contained SVG document.
///
/// Paint order matches insertion order exactly: strokes in capture order
/// first, then shapes in placement order. Eraser strokes are emitted as
/// wide background-colored paths; they never remove earlier primitives.
pub fn to_svg(drawing: &Drawing, style: &ExportStyle) -> String {
    let mut svg = String::with_capacity(256 + 64 * (drawing.strokes.len() + drawing.shapes.len()));
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        style.canvas_width, style.canvas_height
    );
    for stroke in &drawing.strokes {
        write_stroke(&mut svg, stroke, style);
    }
    for shape in &drawing.shapes {
        write_shape(&mut svg, shape, style);
    }
    svg.push_str("</svg>");
    svg
}

fn write_stroke(svg: &mut String, stroke: &Stroke, style: &ExportStyle) {
    let _ = write!(svg, "<path d=\"{}\"", path_data(&stroke.points));
    let _ = write!(
        svg,
        " stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>",
        style.stroke_color(stroke.tool).to_hex_rgb(),
        fmt_coord(style.width_for(stroke.tool))
    );
}

fn write_shape(svg: &mut String, shape: &Shape, style: &ExportStyle) {
    let stroke = style.foreground.to_hex_rgb();
    let width = fmt_coord(style.stroke_width);
    match *shape {
        Shape::Rect { x, y, w, h } => {
            let _ = write!(
                svg,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" stroke=\"{stroke}\" stroke-width=\"{width}\" fill=\"none\"/>",
                fmt_coord(x),
                fmt_coord(y),
                fmt_coord(w),
                fmt_coord(h)
            );
        }
        Shape::Circle { cx, cy, r } => {
            let _ = write!(
                svg,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{stroke}\" stroke-width=\"{width}\" fill=\"none\"/>",
                fmt_coord(cx),
                fmt_coord(cy),
                fmt_coord(r)
            );
        }
    }
}

/// Builds the polyline path data: a move-to for the first point, line-to
/// commands for each subsequent point, in original capture order.
fn path_data(points: &[(f64, f64)]) -> String {
    let mut data = String::with_capacity(8 * points.len());
    for (index, &(x, y)) in points.iter().enumerate() {
        if index == 0 {
            let _ = write!(data, "M {},{}", fmt_coord(x), fmt_coord(y));
        } else {
            let _ = write!(data, " L {},{}", fmt_coord(x), fmt_coord(y));
        }
    }
    data
}
