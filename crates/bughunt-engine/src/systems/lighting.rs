//! Lighting pass: shade targets to match the real-world ambient light.

use bughunt_core::commands::HostCommand;
use bughunt_core::input::LightEstimate;
use bughunt_core::shading::ambient_blend;

/// Emit one shading command for the whole displayed target set.
pub fn run(light: &LightEstimate, commands: &mut Vec<HostCommand>) {
    commands.push(HostCommand::ShadeTargets {
        blend: ambient_blend(light.ambient_intensity),
    });
}
