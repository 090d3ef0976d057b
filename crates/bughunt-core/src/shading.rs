//! Ambient lighting math.

use crate::constants::NEUTRAL_INTENSITY;

/// Blend factor for the black target tint at a given ambient intensity.
///
/// Intensity is clamped to the neutral ceiling, so any reading at or above
/// 1000 units yields 0.0 (full brightness) and darkness approaches 1.0
/// (fully tinted). Monotonically non-increasing in intensity.
pub fn ambient_blend(ambient_intensity: f32) -> f32 {
    1.0 - ambient_intensity.clamp(0.0, NEUTRAL_INTENSITY) / NEUTRAL_INTENSITY
}
