use std::time::Duration;

use bevy::prelude::*;

use crate::core::fruits::Rank;

/// A live fruit. The same entity carries the Rapier body and collider, so
/// despawning it removes the fruit from both the physics world and every
/// `With<Fruit>` query at once.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Fruit {
    pub rank: Rank,
    /// Set once the fruit has been claimed by a merge; never cleared.
    pub processed: bool,
    /// Elapsed app time when the fruit's top edge last crossed the danger line.
    pub danger_since: Option<Duration>,
}

impl Fruit {
    pub fn new(rank: Rank) -> Self {
        Self {
            rank,
            processed: false,
            danger_since: None,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.rank.radius()
    }
}

/// Tag for the disc mesh child drawn under a fruit glyph.
#[derive(Component)]
pub struct FruitDiscVisual;

/// Tag for the glyph text child of a fruit.
#[derive(Component)]
pub struct FruitGlyphVisual;

/// Static container boundary (left wall, right wall, floor).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerWall {
    Left,
    Right,
    Floor,
}
