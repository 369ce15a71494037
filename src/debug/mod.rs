//! Debug module: session stats, event logging and the Rapier wireframe
//! toggle. Compiled only with the `debug` feature (on by default).

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::core::system::system_order::{configure_game_sets, PresentationSet};

#[cfg(feature = "debug")]
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DebugSet;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier2d::render::RapierDebugRenderPlugin;
        use keys::debug_key_input_system;
        use logging::{debug_event_log_system, debug_logging_system};
        use stats::{debug_stats_collect_system, DebugState, DebugStats};

        let wireframe = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.rapier_debug)
            .unwrap_or(false);
        configure_game_sets(app);
        app.add_plugins(RapierDebugRenderPlugin {
            enabled: wireframe,
            ..default()
        })
        .init_resource::<DebugState>()
        .init_resource::<DebugStats>()
        .configure_sets(Update, DebugSet.after(PresentationSet))
        .add_systems(
            Update,
            (
                debug_key_input_system,
                debug_stats_collect_system,
                debug_event_log_system,
                debug_logging_system,
            )
                .chain()
                .in_set(DebugSet),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
