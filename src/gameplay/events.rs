use bevy::prelude::*;

use crate::core::fruits::Rank;

/// Player asked to drop the next fruit at logical x (unclamped).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DropRequested {
    pub x: f32,
}

/// Which control asked for a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartSource {
    HudButton,
    PanelButton,
    Keyboard,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartRequested {
    pub source: RestartSource,
}

/// A drop was accepted and a fruit body spawned.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FruitDropped {
    pub entity: Entity,
    pub rank: Rank,
    pub position: Vec2,
}

/// Two fruits were claimed by a merge. `rank` is the resulting rank and
/// `points` the score already credited for it.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FruitsMerged {
    pub consumed: [Entity; 2],
    pub rank: Rank,
    pub position: Vec2,
    pub points: u32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub final_score: u32,
}
