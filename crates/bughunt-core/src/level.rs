//! Level layouts — named, positioned placeholders on a 2D canvas.
//!
//! The host may load a layout from a JSON scene description, or use the
//! built-in one. World setup normalizes placeholder positions against the
//! canvas size, so layouts are resolution-independent.

use serde::{Deserialize, Serialize};

use crate::types::Point2;

/// A named placeholder node in the level canvas.
///
/// The name is classified against [`NodeType`](crate::enums::NodeType) at
/// spawn time; decorative nodes with other names are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placeholder {
    pub name: String,
    /// Position in canvas coordinates (origin at canvas center).
    pub position: Point2,
}

/// A level layout: a reference canvas size and the placeholders on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Reference canvas size used to normalize placeholder positions.
    pub size: Point2,
    pub placeholders: Vec<Placeholder>,
}

impl Level {
    /// Parse a layout from a JSON scene description.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in single level: five bugs and one firebug spread across
    /// a 480x320 canvas. The firebug's companion bugspray is spawned by
    /// world setup, not listed here.
    pub fn bug_hunt() -> Self {
        Self {
            size: Point2::new(480.0, 320.0),
            placeholders: vec![
                Placeholder {
                    name: "bug".to_string(),
                    position: Point2::new(-180.0, 90.0),
                },
                Placeholder {
                    name: "bug".to_string(),
                    position: Point2::new(-60.0, -110.0),
                },
                Placeholder {
                    name: "bug".to_string(),
                    position: Point2::new(40.0, 130.0),
                },
                Placeholder {
                    name: "bug".to_string(),
                    position: Point2::new(150.0, -40.0),
                },
                Placeholder {
                    name: "bug".to_string(),
                    position: Point2::new(210.0, 70.0),
                },
                Placeholder {
                    name: "firebug".to_string(),
                    position: Point2::new(-120.0, -30.0),
                },
            ],
        }
    }
}
