mod core;
mod pointer;

pub use core::{InputState, ShapeDefaults};
