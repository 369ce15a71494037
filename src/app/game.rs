use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::configure_game_sets;
use crate::debug::DebugPlugin;
use crate::gameplay::GameplayPlugin;
use crate::interaction::input::input_interaction::DropInputPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::fruits::fruit_visuals::FruitVisualsPlugin;
use crate::rendering::hud::hud::HudPlugin;

/// Outcome of the layered config load, logged once at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConfigLoadReport {
    pub fn new(cfg: &GameConfig, used: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            used,
            errors,
            warnings: cfg.validate(),
        }
    }
}

/// Full game: expects `GameConfig` to be inserted before it is added.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        configure_game_sets(app);
        app.init_resource::<ConfigLoadReport>()
            .add_systems(Startup, log_config_report)
            .add_plugins((
                CameraPlugin,
                PhysicsSetupPlugin,
                GameplayPlugin,
                DropInputPlugin,
                FruitVisualsPlugin,
                HudPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ));
    }
}

fn log_config_report(report: Res<ConfigLoadReport>, cfg: Res<GameConfig>) {
    if report.used.is_empty() {
        info!(target: "config", "No config layers found; using built-in defaults");
    } else {
        info!(target: "config", "Config layers applied: {:?}", report.used);
    }
    for e in &report.errors {
        warn!(target: "config", "Config load: {e}");
    }
    for w in &report.warnings {
        warn!(target: "config", "Config validation: {w}");
    }
    if let Some(seed) = cfg.seed {
        info!(target: "config", "Fixed fruit seed {seed}");
    }
}
