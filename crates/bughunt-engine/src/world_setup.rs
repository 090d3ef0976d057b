//! Anchor placement for world setup.
//!
//! Converts 2D level placeholders into world anchors positioned relative
//! to the camera pose at initialization time, with vertical jitter for
//! visual variety. Spawning a firebug also spawns its companion bugspray.

use glam::{Mat4, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bughunt_core::commands::HostCommand;
use bughunt_core::constants::*;
use bughunt_core::enums::NodeType;
use bughunt_core::level::Level;
use bughunt_core::types::AnchorId;

/// Place every recognized placeholder of `level` relative to `camera`,
/// emitting one `AddAnchor` per game object. Unrecognized names are
/// skipped entirely.
pub fn place_level(
    level: &Level,
    camera: &Mat4,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    commands: &mut Vec<HostCommand>,
) {
    for placeholder in &level.placeholders {
        let Some(object_type) = NodeType::from_name(&placeholder.name) else {
            continue;
        };

        let norm_x = placeholder.position.x / level.size.x;
        let norm_y = placeholder.position.y / level.size.y;
        let offset = Vec3::new(
            norm_x * GAME_WIDTH,
            rng.gen_range(-PLACEMENT_JITTER_Y..PLACEMENT_JITTER_Y),
            -norm_y * GAME_HEIGHT,
        );

        commands.push(HostCommand::AddAnchor {
            id: alloc_id(next_id),
            transform: *camera * Mat4::from_translation(offset),
            object_type,
        });

        if object_type == NodeType::Firebug {
            spawn_bugspray(camera, rng, next_id, commands);
        }
    }
}

/// Spawn one bugspray pickup at a random offset around the camera.
fn spawn_bugspray(
    camera: &Mat4,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    commands: &mut Vec<HostCommand>,
) {
    let offset = Vec3::new(
        rng.gen_range(-BUGSPRAY_SPREAD_XZ..BUGSPRAY_SPREAD_XZ),
        rng.gen_range(-BUGSPRAY_SPREAD_Y..BUGSPRAY_SPREAD_Y),
        rng.gen_range(-BUGSPRAY_SPREAD_XZ..BUGSPRAY_SPREAD_XZ),
    );

    commands.push(HostCommand::AddAnchor {
        id: alloc_id(next_id),
        transform: *camera * Mat4::from_translation(offset),
        object_type: NodeType::Bugspray,
    });
}

fn alloc_id(next_id: &mut u32) -> AnchorId {
    let id = AnchorId(*next_id);
    *next_id += 1;
    id
}
