//! Per-session scene state.

use serde::{Deserialize, Serialize};

/// Mutable scene flags, one instance per play session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SceneState {
    /// Set true exactly once, after the first frame with a valid camera
    /// pose places all level objects. Gates re-entry into world setup.
    pub world_initialized: bool,
    /// True while a collected bugspray is held; consumed by the next shot.
    /// Every transition swaps the reticle texture.
    pub has_power_up: bool,
}
