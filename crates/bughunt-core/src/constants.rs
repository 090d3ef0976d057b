//! Game constants and tuning parameters.

// --- Playfield ---

/// Playfield width the level canvas is mapped onto (meters).
pub const GAME_WIDTH: f32 = 2.0;

/// Playfield depth the level canvas is mapped onto (meters).
pub const GAME_HEIGHT: f32 = 2.0;

/// Vertical placement jitter half-range (meters). Placed objects get a
/// uniform y offset in (-this, this).
pub const PLACEMENT_JITTER_Y: f32 = 0.5;

/// Bugspray companion spawn half-range, horizontal and depth (meters).
pub const BUGSPRAY_SPREAD_XZ: f32 = 1.0;

/// Bugspray companion spawn half-range, vertical (meters).
pub const BUGSPRAY_SPREAD_Y: f32 = 0.5;

// --- Lighting ---

/// Neutral ambient intensity ceiling. At or above this, targets render at
/// full brightness.
pub const NEUTRAL_INTENSITY: f32 = 1000.0;

// --- Rules ---

/// Reticle-to-pickup collection distance (meters).
pub const PICKUP_RANGE: f32 = 0.1;

/// Delay between a successful shot and its hit feedback (seconds).
pub const HIT_FEEDBACK_DELAY_SECS: f64 = 0.3;
