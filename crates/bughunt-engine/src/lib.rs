//! Headless game engine for the bughunt AR mini-game.
//!
//! Owns the scene state and the feedback scheduler, consumes host input
//! snapshots once per frame/touch, and produces batches of `HostCommand`s
//! for the host shell to apply.

pub mod engine;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use bughunt_core as core;
pub use engine::{EngineConfig, GameEngine};
