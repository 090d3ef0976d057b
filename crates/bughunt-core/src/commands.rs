//! Host commands — the side effects the engine asks the host to perform.
//!
//! Each entry point returns a batch; the host applies it in order. The
//! engine never touches the session or scene graph itself.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::enums::{NodeType, ReticleTexture, Sound};
use crate::types::AnchorId;

/// All side effects the engine can request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Register a new anchor with the tracking session.
    AddAnchor {
        id: AnchorId,
        transform: Mat4,
        object_type: NodeType,
    },
    /// Drop an anchor from the tracking session. Removing an anchor that
    /// is already gone must be a no-op, never an error.
    RemoveAnchor { id: AnchorId },
    PlaySound { sound: Sound },
    /// Swap the reticle overlay texture.
    SetReticleTexture { texture: ReticleTexture },
    /// Apply the black lighting tint at `blend` to every target sprite in
    /// the displayed set (the reticle overlay is not in that set).
    /// 0.0 = full brightness, 1.0 = fully dark.
    ShadeTargets { blend: f32 },
}
