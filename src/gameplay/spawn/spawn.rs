use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::Fruit;
use crate::core::config::{GameConfig, PhysicsConfig};
use crate::core::fruits::Rank;
use crate::core::playfield::Playfield;
use crate::gameplay::events::{DropRequested, FruitDropped};
use crate::gameplay::state::{FruitRng, GameState};

/// Spawn a dynamic fruit body of `rank` centered at `position` (world space).
/// Visual children are attached separately by the presentation layer.
pub fn spawn_fruit(
    commands: &mut Commands,
    physics: &PhysicsConfig,
    rank: Rank,
    position: Vec2,
) -> Entity {
    let def = rank.definition();
    commands
        .spawn((
            Name::new(format!("Fruit:{}", def.name)),
            Fruit::new(rank),
            Transform::from_translation(position.extend(0.0)),
            GlobalTransform::default(),
            Visibility::Visible,
            RigidBody::Dynamic,
            Collider::ball(def.radius),
            Velocity::zero(),
            Restitution::coefficient(physics.restitution),
            Friction::coefficient(physics.friction),
            Damping {
                linear_damping: physics.linear_damping,
                angular_damping: physics.angular_damping,
            },
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}

/// The only removal path for fruits. Existence is checked when the command
/// applies, so removing an already-despawned fruit is a no-op.
pub fn despawn_fruit(commands: &mut Commands, entity: Entity) {
    commands.queue(move |world: &mut World| {
        if world.get::<Fruit>(entity).is_some() {
            world.despawn(entity);
        } else {
            debug!(target: "spawner", "despawn skipped, {:?} already gone", entity);
        }
    });
}

pub fn tick_drop_cooldown(time: Res<Time>, mut state: ResMut<GameState>) {
    state.tick_cooldown(time.delta());
}

pub fn handle_drop_requests(
    mut commands: Commands,
    mut requests: EventReader<DropRequested>,
    mut state: ResMut<GameState>,
    mut rng: ResMut<FruitRng>,
    cfg: Res<GameConfig>,
    mut dropped: EventWriter<FruitDropped>,
) {
    let playfield = Playfield::from(&cfg.playfield);
    for request in requests.read() {
        let Some(rank) = state.take_drop(cfg.timing.drop_cooldown(), &mut rng.0) else {
            debug!(
                target: "spawner",
                "drop at x={:.1} ignored (game_over={} cooldown={})",
                request.x,
                state.game_over,
                state.cooldown_active()
            );
            continue;
        };
        let position = playfield.drop_point(request.x);
        let entity = spawn_fruit(&mut commands, &cfg.physics, rank, position);
        info!(target: "spawner", "Dropped {} at {:?}, next={}", rank, position, state.next_rank);
        dropped.write(FruitDropped {
            entity,
            rank,
            position,
        });
    }
}
