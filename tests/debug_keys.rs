#![cfg(feature = "debug")]
use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;
use fruit_merge::debug::keys::debug_key_input_system;
use fruit_merge::debug::stats::DebugState;

#[test]
fn f3_toggles_rapier_wireframe() {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.init_resource::<DebugState>();
    app.insert_resource(DebugRenderContext {
        enabled: false,
        ..default()
    });
    app.add_systems(Update, debug_key_input_system);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::F3);
    app.update();
    assert!(app.world().resource::<DebugRenderContext>().enabled);

    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(KeyCode::F3);
        input.clear();
        input.press(KeyCode::F3);
    }
    app.update();
    assert!(!app.world().resource::<DebugRenderContext>().enabled);
}

#[test]
fn f4_forces_a_summary_on_the_next_frame() {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.init_resource::<DebugState>();
    app.add_systems(Update, debug_key_input_system);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::F4);
    app.update();
    let state = app.world().resource::<DebugState>();
    assert_eq!(state.time_accum, state.log_interval);
}
