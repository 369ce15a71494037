//! Central system ordering labels to make the update sequence explicit.
//! Stages (all in `Update`; Rapier steps afterwards in `PostUpdate`):
//! 1. Input (pointer / key / button → request events)
//! 2. Restart (session reset before anything else touches fruits)
//! 3. Drop (spawner + cooldown)
//! 4. Merge (collision events from the previous step, delayed merge completion)
//! 5. Danger (polling monitor, game-over transition)
//! 6. Presentation (HUD / panel sync, visuals for new fruits)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RestartSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DropSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MergeSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DangerSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet;

/// Register the chained ordering on `app`. Safe to call more than once.
pub fn configure_game_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            InputSet,
            RestartSet,
            DropSet,
            MergeSet,
            DangerSet,
            PresentationSet,
        )
            .chain(),
    );
}
