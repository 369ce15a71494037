use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::state::GameState;
use crate::physics::container::spawn_container;

/// Installs Rapier, applies configured gravity and spawns the container.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let ppm = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.physics.pixels_per_meter)
            .unwrap_or(50.0);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(ppm))
            .add_systems(Startup, spawn_container)
            .add_systems(Update, (configure_gravity, freeze_physics_on_game_over));
    }
}

/// The default Rapier context is created by the plugin; retry until it exists.
fn configure_gravity(
    mut q_cfg: Query<&mut RapierConfiguration>,
    game_cfg: Res<GameConfig>,
    mut done: Local<bool>,
) {
    if *done {
        return;
    }
    if let Ok(mut cfg) = q_cfg.single_mut() {
        // Config gravity is "downward positive"; world space is y-up.
        cfg.gravity = Vect::new(0.0, -game_cfg.physics.gravity);
        *done = true;
        info!(target: "physics", "Rapier gravity set to {:?}", cfg.gravity);
    }
}

/// Freeze the board while the game-over panel is up; resume on restart.
fn freeze_physics_on_game_over(state: Res<GameState>, mut q_cfg: Query<&mut RapierConfiguration>) {
    if !state.is_changed() {
        return;
    }
    for mut cfg in &mut q_cfg {
        let active = !state.game_over;
        if cfg.physics_pipeline_active != active {
            cfg.physics_pipeline_active = active;
            info!(target: "physics", "physics pipeline active={active}");
        }
    }
}
