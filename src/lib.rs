//! Drawing capture and dual-format export for sketch-to-webpage generation.
//!
//! A user sketches a layout on a canvas (or types a description); the
//! drawing is exported as a raster + vector pair and handed to an external
//! generation service that returns HTML/CSS, which is composed into a
//! sandboxed preview document. This crate owns the drawing model, the tool
//! state machine, the export encoder, and the generation transport; the
//! interactive canvas itself is an embedder concern behind the
//! [`export::RasterSurface`] boundary.

pub mod config;
pub mod draw;
pub mod export;
pub mod generate;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::Session;
