//! Enumeration types used throughout the game core.

use serde::{Deserialize, Serialize};

/// Kind of game object attached to an anchor.
///
/// Classified from a level placeholder's name at spawn time. Names that
/// match no variant are not game objects and produce no anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Ordinary target, always hittable.
    Bug,
    /// Armored target, only hittable while the bugspray power-up is held.
    Firebug,
    /// Power-up pickup, collected by reticle proximity.
    Bugspray,
}

impl NodeType {
    /// Classify a placeholder or node name. Unrecognized names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bug" => Some(Self::Bug),
            "firebug" => Some(Self::Firebug),
            "bugspray" => Some(Self::Bugspray),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Firebug => "firebug",
            Self::Bugspray => "bugspray",
        }
    }
}

/// Sound effects the host plays on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// Shot fired (hit or miss).
    Fire,
    /// Target destroyed, played after the feedback delay.
    Hit,
    /// Bugspray collected.
    BugsprayPickup,
}

/// Reticle overlay texture, driven by the power-up flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReticleTexture {
    #[default]
    Plain,
    PowerUp,
}
