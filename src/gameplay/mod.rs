//! Game rules: drop spawner, merge resolver, danger monitor and session state.
//!
//! Everything here runs headless; rendering and input live in their own
//! plugins and talk to these systems through events and the `GameState`
//! resource.

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::core::system::system_order::{configure_game_sets, DangerSet, DropSet, MergeSet, RestartSet};

pub mod danger;
pub mod events;
pub mod merge;
pub mod spawn;
pub mod state;

use danger::{poll_danger, DangerMonitor};
use events::{DropRequested, FruitDropped, FruitsMerged, GameOver, RestartRequested};
use merge::{complete_pending_merges, resolve_fruit_collisions, PendingMerges};
use spawn::spawn::{handle_drop_requests, tick_drop_cooldown};
use state::{apply_restart_requests, GameStatePlugin};

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        configure_game_sets(app);
        app.add_plugins(GameStatePlugin)
            // Registered by Rapier too; repeated registration is a no-op.
            .add_event::<CollisionEvent>()
            .add_event::<DropRequested>()
            .add_event::<RestartRequested>()
            .add_event::<FruitDropped>()
            .add_event::<FruitsMerged>()
            .add_event::<GameOver>()
            .init_resource::<PendingMerges>()
            .init_resource::<DangerMonitor>()
            .add_systems(Update, apply_restart_requests.in_set(RestartSet))
            .add_systems(
                Update,
                (tick_drop_cooldown, handle_drop_requests)
                    .chain()
                    .in_set(DropSet),
            )
            .add_systems(
                Update,
                (complete_pending_merges, resolve_fruit_collisions)
                    .chain()
                    .in_set(MergeSet),
            )
            .add_systems(Update, poll_danger.in_set(DangerSet));
    }
}
