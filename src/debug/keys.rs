use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

/// F3 toggles the Rapier collider wireframes; F4 logs once immediately.
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
    mut state: ResMut<super::stats::DebugState>,
) {
    if keys.just_pressed(KeyCode::F3) {
        if let Some(mut c) = ctx {
            c.enabled = !c.enabled;
            info!(target: "debug", "rapier wireframe {}", if c.enabled { "on" } else { "off" });
        }
    }
    if keys.just_pressed(KeyCode::F4) {
        state.time_accum = state.log_interval;
    }
}
