//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Canvas extent and background.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in canvas units (valid range: 16 - 4096)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in canvas units (valid range: 16 - 4096)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color - a named color or an `[r, g, b]` array.
    /// Also the color eraser strokes are painted in.
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls how captured strokes and placed shapes are styled at export
/// time and the default sizes of atomically placed shapes.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke color for pen/line strokes and shape outlines
    #[serde(default = "default_foreground")]
    pub foreground: ColorSpec,

    /// Stroke width in canvas units (valid range: 0.5 - 32.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Eraser stroke width in canvas units (valid range: 1.0 - 64.0)
    #[serde(default = "default_eraser_width")]
    pub eraser_width: f64,

    /// Width of rectangles placed by the rect tool (valid range: 1.0 - 2048.0)
    #[serde(default = "default_rect_width")]
    pub rect_width: f64,

    /// Height of rectangles placed by the rect tool (valid range: 1.0 - 2048.0)
    #[serde(default = "default_rect_height")]
    pub rect_height: f64,

    /// Radius of circles placed by the circle tool (valid range: 1.0 - 2048.0)
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            stroke_width: default_stroke_width(),
            eraser_width: default_eraser_width(),
            rect_width: default_rect_width(),
            rect_height: default_rect_height(),
            circle_radius: default_circle_radius(),
        }
    }
}

/// Export settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Resolution multiplier for raster snapshots (valid range: 0.25 - 4.0)
    #[serde(default = "default_export_scale")]
    pub scale: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
        }
    }
}

/// Generation service settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the generation service
    #[serde(default = "default_generator_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (valid range: 1 - 300)
    #[serde(default = "default_generator_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: default_generator_base_url(),
            timeout_secs: default_generator_timeout(),
        }
    }
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_foreground() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_eraser_width() -> f64 {
    10.0
}

fn default_rect_width() -> f64 {
    100.0
}

fn default_rect_height() -> f64 {
    60.0
}

fn default_circle_radius() -> f64 {
    40.0
}

fn default_export_scale() -> f64 {
    1.0
}

fn default_generator_base_url() -> String {
    "http://localhost:4000/".to_string()
}

fn default_generator_timeout() -> u64 {
    30
}
