//! Configuration file support for websketch.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/websketch/config.toml`.
//! Settings include the canvas extent, drawing defaults, export scale,
//! and the generation service endpoint.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, GeneratorConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the
/// TOML file. All fields have sensible defaults and will use those if
/// not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
///
/// [drawing]
/// foreground = "black"
/// stroke_width = 2.0
/// eraser_width = 10.0
///
/// [export]
/// scale = 2.0
///
/// [generator]
/// base_url = "http://localhost:4000/"
/// timeout_secs = 30
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas extent and background color
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults (colors, widths, shape sizes)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Generation service endpoint settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged, so a bad config file degrades instead of failing startup.
    fn validate_and_clamp(&mut self) {
        if !(16..=4096).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 4096);
        }
        if !(16..=4096).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 4096);
        }

        if !(0.5..=32.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-32.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(0.5, 32.0);
        }
        if !(1.0..=64.0).contains(&self.drawing.eraser_width) {
            log::warn!(
                "Invalid eraser_width {:.1}, clamping to 1.0-64.0 range",
                self.drawing.eraser_width
            );
            self.drawing.eraser_width = self.drawing.eraser_width.clamp(1.0, 64.0);
        }

        for (name, value) in [
            ("rect_width", &mut self.drawing.rect_width),
            ("rect_height", &mut self.drawing.rect_height),
            ("circle_radius", &mut self.drawing.circle_radius),
        ] {
            if !(1.0..=2048.0).contains(&*value) {
                log::warn!("Invalid {name} {value:.1}, clamping to 1.0-2048.0 range");
                *value = value.clamp(1.0, 2048.0);
            }
        }

        if !(0.25..=4.0).contains(&self.export.scale) {
            log::warn!(
                "Invalid export scale {:.2}, clamping to 0.25-4.0 range",
                self.export.scale
            );
            self.export.scale = self.export.scale.clamp(0.25, 4.0);
        }

        if !(1..=300).contains(&self.generator.timeout_secs) {
            log::warn!(
                "Invalid generator timeout {}s, clamping to 1-300 range",
                self.generator.timeout_secs
            );
            self.generator.timeout_secs = self.generator.timeout_secs.clamp(1, 300);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// Uses the XDG config directory: `~/.config/websketch/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("websketch").join("config.toml"))
    }

    /// Loads configuration from the config file, or defaults if it
    /// doesn't exist.
    ///
    /// Values are validated and clamped after loading. A missing file is
    /// not an error; a present-but-invalid file is.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate_and_clamp();
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.drawing.stroke_width, 2.0);
        assert_eq!(config.drawing.eraser_width, 10.0);
        assert_eq!(config.export.scale, 1.0);
        assert_eq!(config.generator.base_url, "http://localhost:4000/");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            stroke_width = 4.0
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.stroke_width, 4.0);
        assert_eq!(config.drawing.eraser_width, 10.0);
        assert_eq!(config.canvas.width, 800);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [canvas]
            width = 2
            [drawing]
            stroke_width = 100.0
            [export]
            scale = 10.0
            [generator]
            timeout_secs = 0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.drawing.stroke_width, 32.0);
        assert_eq!(config.export.scale, 4.0);
        assert_eq!(config.generator.timeout_secs, 1);
    }

    #[test]
    fn colors_accept_names_and_rgb_arrays() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            background = [250, 250, 245]
            [drawing]
            foreground = "blue"
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.background.to_color().to_rgba8()[0], 250);
        assert_eq!(config.drawing.foreground.to_color(), crate::draw::BLUE);
    }
}
