use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::{CollisionEvent, CollisionEventFlags};
use fruit_merge::core::fruits::Rank;
use fruit_merge::gameplay::merge::PendingMerges;
use fruit_merge::{Fruit, GameConfig, GameState, GameplayPlugin};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(GameConfig {
            seed: Some(7),
            ..default()
        })
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .add_plugins(GameplayPlugin);
    app.update();
    app
}

fn spawn_at(app: &mut App, rank: usize, pos: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Fruit::new(Rank::new(rank).unwrap()),
            Transform::from_translation(pos.extend(0.0)),
        ))
        .id()
}

fn touch(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

fn fruits(app: &mut App) -> Vec<(Entity, Fruit, Vec2)> {
    let mut q = app.world_mut().query::<(Entity, &Fruit, &Transform)>();
    q.iter(app.world())
        .map(|(e, f, t)| (e, *f, t.translation.truncate()))
        .collect()
}

#[test]
fn two_cherries_become_a_strawberry_at_the_midpoint() {
    let mut app = test_app();
    let a = spawn_at(&mut app, 0, Vec2::new(-30.0, 0.0));
    let b = spawn_at(&mut app, 0, Vec2::new(30.0, -20.0));
    touch(&mut app, a, b);
    app.update();

    // Points are credited at detection; the bodies swap after the delay.
    assert_eq!(app.world().resource::<GameState>().score, 20);
    assert_eq!(app.world().resource::<PendingMerges>().len(), 1);
    assert!(app.world().get::<Fruit>(a).unwrap().processed);
    assert!(app.world().get::<Fruit>(b).unwrap().processed);

    app.update();
    let live = fruits(&mut app);
    assert_eq!(live.len(), 1);
    let (_, fruit, pos) = &live[0];
    assert_eq!(fruit.rank, Rank::new(1).unwrap());
    assert!(!fruit.processed);
    assert!(pos.distance(Vec2::new(0.0, -10.0)) < 1e-4);
    assert!(app.world().get_entity(a).is_err());
    assert!(app.world().get_entity(b).is_err());
}

#[test]
fn mismatched_ranks_and_walls_are_ignored() {
    let mut app = test_app();
    let a = spawn_at(&mut app, 0, Vec2::ZERO);
    let b = spawn_at(&mut app, 1, Vec2::new(60.0, 0.0));
    let wall = app.world_mut().spawn(Transform::default()).id();
    touch(&mut app, a, b);
    touch(&mut app, a, wall);
    app.update();
    app.update();
    assert_eq!(app.world().resource::<GameState>().score, 0);
    assert_eq!(fruits(&mut app).len(), 2);
}

#[test]
fn watermelons_never_merge() {
    let mut app = test_app();
    let a = spawn_at(&mut app, 7, Vec2::new(-100.0, -100.0));
    let b = spawn_at(&mut app, 7, Vec2::new(100.0, -100.0));
    touch(&mut app, a, b);
    app.update();
    app.update();
    assert_eq!(app.world().resource::<GameState>().score, 0);
    let live = fruits(&mut app);
    assert_eq!(live.len(), 2);
    assert!(live.iter().all(|(_, f, _)| !f.processed));
}

#[test]
fn a_fruit_touching_two_partners_merges_once() {
    let mut app = test_app();
    let a = spawn_at(&mut app, 2, Vec2::ZERO);
    let b = spawn_at(&mut app, 2, Vec2::new(-80.0, 0.0));
    let c = spawn_at(&mut app, 2, Vec2::new(80.0, 0.0));
    touch(&mut app, a, b);
    touch(&mut app, a, c);
    app.update();
    assert_eq!(app.world().resource::<GameState>().score, 80);

    app.update();
    let live = fruits(&mut app);
    assert_eq!(live.len(), 2);
    assert!(live.iter().any(|(e, f, _)| *e == c && f.rank.index() == 2));
    assert!(live.iter().any(|(_, f, _)| f.rank.index() == 3));
}

#[test]
fn merges_chain_through_the_spawned_fruit() {
    let mut app = test_app();
    let a = spawn_at(&mut app, 0, Vec2::new(-30.0, 0.0));
    let b = spawn_at(&mut app, 0, Vec2::new(30.0, 0.0));
    let waiting = spawn_at(&mut app, 1, Vec2::new(0.0, -80.0));
    touch(&mut app, a, b);
    app.update();
    app.update();

    let merged = fruits(&mut app)
        .into_iter()
        .find(|(e, f, _)| *e != waiting && f.rank.index() == 1)
        .map(|(e, _, _)| e)
        .unwrap();
    touch(&mut app, merged, waiting);
    app.update();
    app.update();
    assert_eq!(app.world().resource::<GameState>().score, 20 + 40);
    let live = fruits(&mut app);
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].1.rank.index(), 2);
}

#[test]
fn collisions_after_game_over_do_nothing() {
    let mut app = test_app();
    let a = spawn_at(&mut app, 0, Vec2::ZERO);
    let b = spawn_at(&mut app, 0, Vec2::new(60.0, 0.0));
    app.world_mut().resource_mut::<GameState>().end_game();
    touch(&mut app, a, b);
    app.update();
    app.update();
    assert_eq!(app.world().resource::<GameState>().score, 0);
    assert_eq!(fruits(&mut app).len(), 2);
    assert!(app.world().resource::<PendingMerges>().is_empty());
}

#[test]
fn pending_merge_tolerates_a_partner_that_is_already_gone() {
    let mut app = test_app();
    let a = spawn_at(&mut app, 1, Vec2::new(-40.0, 0.0));
    let b = spawn_at(&mut app, 1, Vec2::new(40.0, 0.0));
    touch(&mut app, a, b);
    app.update();
    assert_eq!(app.world().resource::<PendingMerges>().len(), 1);

    assert!(app.world_mut().despawn(b));
    app.update();

    let live = fruits(&mut app);
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].1.rank.index(), 2);
    assert!(app.world().get_entity(a).is_err());
    assert!(app.world().resource::<PendingMerges>().is_empty());
}
