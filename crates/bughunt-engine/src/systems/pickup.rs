//! Pickup scan: collect a bugspray when the camera moves onto it.

use glam::Mat4;

use bughunt_core::constants::PICKUP_RANGE;
use bughunt_core::enums::NodeType;
use bughunt_core::input::AnchorState;
use bughunt_core::types::{pose_distance, AnchorId};

/// Find the first bugspray anchor within pickup range of the camera, in
/// the session's enumeration order. At most one pickup per frame.
///
/// Anchors without a bound visual node or without the bugspray type are
/// skipped, which also ignores untyped system anchors.
pub fn scan(anchors: &[AnchorState], camera: &Mat4) -> Option<AnchorId> {
    for anchor in anchors {
        if anchor.object_type != Some(NodeType::Bugspray) || !anchor.has_visual_node {
            continue;
        }
        if pose_distance(&anchor.transform, camera) < PICKUP_RANGE {
            return Some(anchor.id);
        }
    }
    None
}
