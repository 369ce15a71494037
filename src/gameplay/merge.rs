//! Merge resolution for equal-rank fruit collisions.
//!
//! Detection runs on Rapier's `CollisionEvent::Started` stream. A qualifying
//! pair is claimed immediately (processed flags + score); the actual swap of
//! two bodies for one larger body happens after a short delay.

use std::time::Duration;

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::core::components::Fruit;
use crate::core::config::GameConfig;
use crate::core::fruits::Rank;
use crate::gameplay::events::FruitsMerged;
use crate::gameplay::spawn::{despawn_fruit, spawn_fruit};
use crate::gameplay::state::GameState;

/// Resulting rank if `a` and `b` may merge: same rank, neither already
/// claimed, and the rank has a successor.
pub fn merge_result(a: &Fruit, b: &Fruit) -> Option<Rank> {
    if a.rank != b.rank || a.processed || b.processed {
        return None;
    }
    a.rank.next()
}

/// A claimed pair waiting for its delayed removal/spawn.
#[derive(Debug, Clone)]
pub struct PendingMerge {
    pub consumed: [Entity; 2],
    pub rank: Rank,
    pub position: Vec2,
    timer: Timer,
}

impl PendingMerge {
    pub fn new(consumed: [Entity; 2], rank: Rank, position: Vec2, delay: Duration) -> Self {
        Self {
            consumed,
            rank,
            position,
            timer: Timer::new(delay, TimerMode::Once),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct PendingMerges(Vec<PendingMerge>);

impl PendingMerges {
    pub fn push(&mut self, merge: PendingMerge) {
        self.0.push(merge);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Advance every timer and hand back the merges that are due.
    pub fn tick(&mut self, delta: Duration) -> Vec<PendingMerge> {
        for merge in &mut self.0 {
            merge.timer.tick(delta);
        }
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.0)
            .into_iter()
            .partition(|m| m.timer.finished());
        self.0 = waiting;
        due
    }
}

pub fn resolve_fruit_collisions(
    mut collisions: EventReader<CollisionEvent>,
    mut fruits: Query<(&mut Fruit, &Transform)>,
    mut state: ResMut<GameState>,
    mut pending: ResMut<PendingMerges>,
    cfg: Res<GameConfig>,
    mut merged: EventWriter<FruitsMerged>,
) {
    if state.game_over {
        collisions.clear();
        return;
    }
    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        // Non-fruit bodies (walls) fail the lookup.
        let Ok([(mut a, ta), (mut b, tb)]) = fruits.get_many_mut([*e1, *e2]) else {
            continue;
        };
        let Some(rank) = merge_result(&a, &b) else {
            continue;
        };
        a.processed = true;
        b.processed = true;
        let position = (ta.translation.truncate() + tb.translation.truncate()) * 0.5;
        let points = rank.definition().score;
        state.add_score(points);
        pending.push(PendingMerge::new(
            [*e1, *e2],
            rank,
            position,
            cfg.timing.merge_delay(),
        ));
        debug!(target: "merge", "{:?} + {:?} -> {} (+{points})", e1, e2, rank);
        merged.write(FruitsMerged {
            consumed: [*e1, *e2],
            rank,
            position,
            points,
        });
    }
}

pub fn complete_pending_merges(
    mut commands: Commands,
    time: Res<Time>,
    mut pending: ResMut<PendingMerges>,
    cfg: Res<GameConfig>,
) {
    if pending.is_empty() {
        return;
    }
    for merge in pending.tick(time.delta()) {
        for entity in merge.consumed {
            despawn_fruit(&mut commands, entity);
        }
        spawn_fruit(&mut commands, &cfg.physics, merge.rank, merge.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit(rank: usize) -> Fruit {
        Fruit::new(Rank::new(rank).unwrap())
    }

    #[test]
    fn equal_ranks_merge_up() {
        assert_eq!(merge_result(&fruit(0), &fruit(0)), Rank::new(1));
        assert_eq!(merge_result(&fruit(6), &fruit(6)), Rank::new(7));
    }

    #[test]
    fn mismatched_processed_or_highest_never_merge() {
        assert_eq!(merge_result(&fruit(0), &fruit(1)), None);
        let mut claimed = fruit(2);
        claimed.processed = true;
        assert_eq!(merge_result(&claimed, &fruit(2)), None);
        assert_eq!(merge_result(&fruit(2), &claimed), None);
        assert_eq!(merge_result(&fruit(7), &fruit(7)), None);
    }

    #[test]
    fn pending_merges_release_after_delay() {
        let mut pending = PendingMerges::default();
        let e = [Entity::from_raw(1), Entity::from_raw(2)];
        pending.push(PendingMerge::new(
            e,
            Rank::new(1).unwrap(),
            Vec2::ZERO,
            Duration::from_millis(50),
        ));
        assert!(pending.tick(Duration::from_millis(30)).is_empty());
        assert_eq!(pending.len(), 1);
        let due = pending.tick(Duration::from_millis(30));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].consumed, e);
        assert!(pending.is_empty());
    }
}
