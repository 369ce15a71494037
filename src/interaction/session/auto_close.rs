use crate::core::components::Fruit;
use crate::core::config::GameConfig;
use crate::gameplay::state::GameState;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

/// Exits after `window.autoClose` seconds (disabled when <= 0). Used for
/// unattended smoke runs; logs a session summary before leaving.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "session", "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    state: Res<GameState>,
    fruits: Query<(), With<Fruit>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    if timer.tick(time.delta()).just_finished() {
        info!(
            target: "session",
            "AutoClose: exiting (score={} fruits={} game_over={})",
            state.score,
            fruits.iter().count(),
            state.game_over
        );
        ev_exit.write(AppExit::Success);
    }
}
