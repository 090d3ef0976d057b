//! Fundamental geometric and identity types.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Identity of a tracked anchor.
///
/// The engine allocates ids for the anchors it creates; the host keys its
/// anchor table by this and reports system-created anchors (planes etc.)
/// under ids of its own from the same space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AnchorId(pub u32);

/// 2D point in level/screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Translation component of a pose.
pub fn pose_translation(pose: &Mat4) -> Vec3 {
    pose.w_axis.truncate()
}

/// Euclidean distance between the translation components of two poses.
pub fn pose_distance(a: &Mat4, b: &Mat4) -> f32 {
    pose_translation(a).distance(pose_translation(b))
}
