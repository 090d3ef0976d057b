//! Core types and definitions for the bughunt AR mini-game.
//!
//! This crate defines the vocabulary shared between the engine and the
//! host shell: node kinds, host inputs, host commands, level layouts,
//! scene state, shading math, and constants. It has no dependency on any
//! AR session or rendering framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod input;
pub mod level;
pub mod shading;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
