//! Session scripts.
//!
//! A script is a JSON array of commands, each tagged with a `command` field:
//!
//! ```json
//! [
//!   { "command": "add", "kind": "Client" },
//!   { "command": "add", "kind": "Router", "at": { "x": 200.0, "y": 50.0 } },
//!   { "command": "press", "at": { "x": 60.0, "y": 60.0 } },
//!   { "command": "release" },
//!   { "command": "secondary_press", "at": { "x": 210.0, "y": 60.0 }, "answer": "Core" }
//! ]
//! ```

use kurbo::Point;
use netdraw_core::{ElementKind, Gesture, PointerEvent};
use serde::{Deserialize, Serialize};

/// One step of a scripted session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ScriptCommand {
    /// Add an element, at the configured default position unless `at` is set.
    Add {
        kind: ElementKind,
        #[serde(default)]
        at: Option<Point>,
    },
    /// Primary button pressed.
    Press { at: Point },
    /// Pointer moved with the primary button held.
    Drag { at: Point },
    /// Primary button released.
    Release {
        #[serde(default)]
        at: Option<Point>,
    },
    /// Secondary button pressed.
    ///
    /// The rename prompt is answered with `answer`, or cancelled when `cancel`
    /// is set. With neither, the session's interactive prompt is asked.
    SecondaryPress {
        at: Point,
        #[serde(default)]
        answer: Option<String>,
        #[serde(default)]
        cancel: bool,
    },
    /// Pointer moved with no button held.
    Hover { at: Point },
    /// Build a link from the armed elements.
    DrawLink,
    /// A raw pointer event, routed through the input tracker.
    Pointer { event: PointerEvent },
}

impl ScriptCommand {
    /// The gesture this command stands for, if it is one.
    pub fn gesture(&self) -> Option<Gesture> {
        match self {
            ScriptCommand::Press { at } => Some(Gesture::PrimaryPress { position: *at }),
            ScriptCommand::Drag { at } => Some(Gesture::PrimaryDrag { position: *at }),
            ScriptCommand::Release { at } => Some(Gesture::PrimaryRelease {
                position: at.unwrap_or(Point::ZERO),
            }),
            ScriptCommand::Hover { at } => Some(Gesture::Hover { position: *at }),
            ScriptCommand::SecondaryPress { at, .. } => {
                Some(Gesture::SecondaryPress { position: *at })
            }
            ScriptCommand::Add { .. } | ScriptCommand::DrawLink | ScriptCommand::Pointer { .. } => {
                None
            }
        }
    }
}

/// Parse a script from JSON.
pub fn parse(json: &str) -> Result<Vec<ScriptCommand>, serde_json::Error> {
    serde_json::from_str(json)
}
