//! Pointer-event replay scripts.
//!
//! A script is a JSON array of tagged events. Replaying one drives the
//! session exactly as live pointer input would, which makes scripts both
//! the CLI's input format and a convenient harness for exercising the
//! state machine end to end.
//!
//! ```json
//! [
//!   { "type": "tool", "tool": "pen" },
//!   { "type": "down", "x": 10, "y": 10 },
//!   { "type": "move", "x": 20, "y": 10 },
//!   { "type": "up", "x": 20, "y": 10 }
//! ]
//! ```

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::Session;
use crate::input::{PointerEvent, Tool};

/// One entry in a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Select a tool (out-of-band of the pointer stream)
    Tool {
        /// Tool to select
        tool: Tool,
    },
    /// Pointer press at (x, y)
    Down { x: f64, y: f64 },
    /// Pointer motion to (x, y)
    Move { x: f64, y: f64 },
    /// Pointer release at (x, y)
    Up { x: f64, y: f64 },
    /// Explicit session reset
    Clear,
}

/// Loads a replay script from a JSON file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read replay script {}", path.display()))?;
    let events: Vec<ScriptEvent> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse replay script {}", path.display()))?;
    Ok(events)
}

/// Replays a script against the session, in order.
pub fn replay(session: &mut Session, events: &[ScriptEvent]) {
    for event in events {
        match *event {
            ScriptEvent::Tool { tool } => session.select_tool(tool),
            ScriptEvent::Down { x, y } => session.handle_pointer(PointerEvent::Down { x, y }),
            ScriptEvent::Move { x, y } => session.handle_pointer(PointerEvent::Move { x, y }),
            ScriptEvent::Up { x, y } => session.handle_pointer(PointerEvent::Up { x, y }),
            ScriptEvent::Clear => session.clear(),
        }
    }
    debug!(
        "replayed {} events: {} strokes, {} shapes",
        events.len(),
        session.drawing().strokes.len(),
        session.drawing().shapes.len()
    );
}
