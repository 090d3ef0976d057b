//! Per-responsibility game systems invoked by the engine each callback.
//!
//! Systems are pure functions over host input snapshots; they either
//! append commands to the batch or return a selection for the engine to
//! act on. All mutable state lives in the engine.

pub mod firing;
pub mod lighting;
pub mod pickup;
