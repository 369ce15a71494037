use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::config::GameConfig;
use crate::core::playfield::Playfield;
use crate::core::system::system_order::{configure_game_sets, InputSet};
use crate::gameplay::events::{DropRequested, RestartRequested, RestartSource};

/// Pointer release → drop request, `R` → restart request.
pub struct DropInputPlugin;

impl Plugin for DropInputPlugin {
    fn build(&self, app: &mut App) {
        configure_game_sets(app);
        app.add_systems(
            Update,
            (pointer_drop_input, keyboard_restart_input).in_set(InputSet),
        );
    }
}

fn cursor_world_pos(camera_q: &Query<(&Camera, &GlobalTransform)>, screen_pos: Vec2) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Screen position of a pointer released this frame (touch first, then left mouse).
fn released_pointer_screen_pos(
    window: &Window,
    buttons: &ButtonInput<MouseButton>,
    touches: &Touches,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter_just_released().next() {
        return Some(touch.position());
    }
    if buttons.just_released(MouseButton::Left) {
        return window.cursor_position();
    }
    None
}

/// Logical drop x for a world-space click, or `None` when the click landed
/// outside the container.
pub fn drop_x_for_world_pos(world: Vec2, playfield: &Playfield) -> Option<f32> {
    let logical = playfield.to_logical(world);
    if !playfield.contains_logical(logical) {
        return None;
    }
    Some(playfield.clamp_drop_x(logical.x))
}

fn pointer_drop_input(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    ui_buttons: Query<&Interaction, With<Button>>,
    cfg: Res<GameConfig>,
    mut drops: EventWriter<DropRequested>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(screen) = released_pointer_screen_pos(window, &buttons, &touches) else {
        return;
    };
    // Releases over a restart button belong to the button.
    if ui_buttons.iter().any(|i| *i != Interaction::None) {
        return;
    }
    let Some(world) = cursor_world_pos(&camera_q, screen) else {
        return;
    };
    let playfield = Playfield::from(&cfg.playfield);
    if let Some(x) = drop_x_for_world_pos(world, &playfield) {
        drops.write(DropRequested { x });
    }
}

fn keyboard_restart_input(keys: Res<ButtonInput<KeyCode>>, mut restarts: EventWriter<RestartRequested>) {
    if keys.just_pressed(KeyCode::KeyR) {
        restarts.write(RestartRequested {
            source: RestartSource::Keyboard,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PlayfieldConfig;

    #[test]
    fn clicks_map_into_clamped_logical_x() {
        let pf = Playfield::from(&PlayfieldConfig::default());
        // World x=-195 is logical x=5, clamped to the 30px margin.
        assert_eq!(drop_x_for_world_pos(Vec2::new(-195.0, 0.0), &pf), Some(30.0));
        assert_eq!(drop_x_for_world_pos(Vec2::new(0.0, 100.0), &pf), Some(200.0));
    }

    #[test]
    fn clicks_outside_container_are_ignored() {
        let pf = Playfield::from(&PlayfieldConfig::default());
        assert_eq!(drop_x_for_world_pos(Vec2::new(0.0, 330.0), &pf), None);
        assert_eq!(drop_x_for_world_pos(Vec2::new(260.0, 0.0), &pf), None);
    }

    #[test]
    fn r_key_requests_restart() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_event::<RestartRequested>()
            .add_systems(Update, keyboard_restart_input);
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        app.update();
        let events = app.world().resource::<Events<RestartRequested>>();
        let mut reader = events.get_cursor();
        let sent: Vec<_> = reader.read(events).copied().collect();
        assert_eq!(
            sent,
            vec![RestartRequested {
                source: RestartSource::Keyboard
            }]
        );
    }
}
