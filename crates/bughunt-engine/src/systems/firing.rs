//! Firing rules: which node under the reticle a shot actually hits.

use bughunt_core::enums::NodeType;
use bughunt_core::input::HitNode;
use bughunt_core::types::AnchorId;

/// Select the target of a shot from the host's hit-test list.
///
/// The first node the rules allow wins: a bug is always hittable, a
/// firebug only while the bugspray power-up is held. If that node has no
/// bound anchor the shot still counts as resolved and nothing is removed
/// (later nodes are not considered).
pub fn select_target(hits: &[HitNode], has_power_up: bool) -> Option<AnchorId> {
    for node in hits {
        let hittable = match node.object_type {
            Some(NodeType::Bug) => true,
            Some(NodeType::Firebug) => has_power_up,
            _ => false,
        };
        if hittable {
            return node.anchor;
        }
    }
    None
}
