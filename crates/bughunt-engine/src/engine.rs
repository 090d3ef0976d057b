//! Game engine — the interactive core of the session.
//!
//! `GameEngine` owns the scene state, the placement RNG, and the feedback
//! scheduler. The host calls `on_frame` once per rendered frame and
//! `on_touch` per tap; both return the side-effect commands to apply.
//! Completely headless (no AR session dependency), enabling deterministic
//! testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use bughunt_core::commands::HostCommand;
use bughunt_core::constants::HIT_FEEDBACK_DELAY_SECS;
use bughunt_core::enums::{ReticleTexture, Sound};
use bughunt_core::input::{FrameInput, HitNode};
use bughunt_core::level::Level;
use bughunt_core::state::SceneState;
use bughunt_core::types::AnchorId;

use crate::scheduler::PendingRemovals;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new session. Loadable from JSON by the
/// host; missing fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for placement jitter. Same seed = same placement.
    pub seed: u64,
    /// Level layout to populate the world with.
    pub level: Level,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            level: Level::bug_hunt(),
        }
    }
}

/// The game engine. Owns all mutable session state.
pub struct GameEngine {
    state: SceneState,
    level: Level,
    rng: ChaCha8Rng,
    next_anchor_id: u32,
    pending: PendingRemovals,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: SceneState::default(),
            level: config.level,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_anchor_id: 0,
            pending: PendingRemovals::default(),
        }
    }

    /// Per-frame entry point.
    ///
    /// Attempts one-time world setup (retried until a camera pose is
    /// available), drains due hit feedback, then runs the lighting pass
    /// and the pickup scan. Without a camera pose or a light estimate the
    /// shading and pickup logic is skipped for this frame; that is a
    /// transient condition, not an error.
    pub fn on_frame(&mut self, frame: &FrameInput) -> Vec<HostCommand> {
        let mut commands = Vec::new();

        if !self.state.world_initialized {
            self.set_up_world(frame, &mut commands);
        }

        self.pending.drain_due(frame.timestamp, &mut commands);

        let (Some(camera), Some(light)) = (frame.camera_pose, frame.light_estimate) else {
            return commands;
        };

        systems::lighting::run(&light, &mut commands);

        if let Some(id) = systems::pickup::scan(&frame.anchors, &camera) {
            commands.push(HostCommand::PlaySound {
                sound: Sound::BugsprayPickup,
            });
            commands.push(HostCommand::RemoveAnchor { id });
            self.set_power_up(true, &mut commands);
        }

        commands
    }

    /// Per-touch entry point. `hits` is the host's hit-test result at the
    /// reticle's fixed screen position; `now` is the host clock, in the
    /// same time base as frame timestamps.
    ///
    /// The fire sound always plays. A resolved hit schedules the delayed
    /// composite feedback (hit sound + anchor removal, emitted together by
    /// a later `on_frame`). Firing always consumes a held power-up.
    pub fn on_touch(&mut self, now: f64, hits: &[HitNode]) -> Vec<HostCommand> {
        let mut commands = vec![HostCommand::PlaySound { sound: Sound::Fire }];

        if let Some(anchor) = systems::firing::select_target(hits, self.state.has_power_up) {
            self.pending.schedule(anchor, now + HIT_FEEDBACK_DELAY_SECS);
        }

        self.set_power_up(false, &mut commands);
        commands
    }

    /// Cancel pending hit feedback for one anchor.
    pub fn cancel_pending(&mut self, anchor: AnchorId) {
        self.pending.cancel(anchor);
    }

    /// Cancel all pending hit feedback (scene-exit contract).
    pub fn cancel_all_pending(&mut self) {
        self.pending.cancel_all();
    }

    /// Current scene state.
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Run world setup if the preconditions hold this frame.
    fn set_up_world(&mut self, frame: &FrameInput, commands: &mut Vec<HostCommand>) {
        let Some(camera) = frame.camera_pose else {
            return;
        };
        world_setup::place_level(
            &self.level,
            &camera,
            &mut self.rng,
            &mut self.next_anchor_id,
            commands,
        );
        self.state.world_initialized = true;
    }

    /// Explicit power-up setter: every transition emits the reticle
    /// texture swap in the same batch.
    fn set_power_up(&mut self, value: bool, commands: &mut Vec<HostCommand>) {
        if self.state.has_power_up == value {
            return;
        }
        self.state.has_power_up = value;
        commands.push(HostCommand::SetReticleTexture {
            texture: if value {
                ReticleTexture::PowerUp
            } else {
                ReticleTexture::Plain
            },
        });
    }

    /// Number of scheduled feedback entries (for tests).
    #[cfg(test)]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Force the power-up flag without going through a pickup (for tests).
    #[cfg(test)]
    pub fn set_power_up_for_test(&mut self, value: bool) {
        self.state.has_power_up = value;
    }
}
