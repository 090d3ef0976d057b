//! Host inputs — the external state handed to the engine each callback.
//!
//! The engine never queries the AR session or the scene graph directly;
//! the host snapshots whatever the engine needs into these structs, so
//! every entry point is deterministic under test.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::enums::NodeType;
use crate::types::AnchorId;

/// Per-frame ambient light reading from the tracking session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LightEstimate {
    /// Ambient intensity in lumens-equivalent units (1000 = neutral).
    pub ambient_intensity: f32,
}

/// One tracked anchor as reported by the host for the current frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorState {
    pub id: AnchorId,
    /// World pose (4x4 transform).
    pub transform: Mat4,
    /// Game-object kind; `None` for untyped system anchors (planes etc.),
    /// which are ignored in all scans.
    pub object_type: Option<NodeType>,
    /// Whether the rendering bridge currently has a sprite bound.
    pub has_visual_node: bool,
}

/// Everything the engine needs from the host for one rendered frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameInput {
    /// Frame timestamp in seconds. Only consumed by the feedback scheduler.
    pub timestamp: f64,
    /// Camera pose, if tracking has one this frame.
    pub camera_pose: Option<Mat4>,
    pub light_estimate: Option<LightEstimate>,
    /// Active anchors in the session's enumeration order.
    pub anchors: Vec<AnchorState>,
}

/// One visual node under the reticle, as produced by the host's hit test
/// at the reticle's fixed screen position. Order is engine-defined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitNode {
    pub object_type: Option<NodeType>,
    /// Anchor the node is bound to, if any. Unbound nodes cannot be removed.
    pub anchor: Option<AnchorId>,
}
