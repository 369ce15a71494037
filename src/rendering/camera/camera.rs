use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::config::GameConfig;

/// Room kept above the container for the HUD bar and below it for the floor.
const HUD_MARGIN: f32 = 60.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.99, 0.95, 0.87)))
            .add_systems(Startup, setup_camera);
    }
}

/// Smallest world-space area that must stay visible whatever the window size.
pub fn framed_area(cfg: &GameConfig) -> Vec2 {
    let pf = &cfg.playfield;
    Vec2::new(
        pf.width + pf.wall_thickness * 4.0,
        pf.height + (pf.wall_thickness + HUD_MARGIN) * 2.0,
    )
}

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    let area = framed_area(&cfg);
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: area.x,
                min_height: area.y,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framed_area_covers_walls_and_hud() {
        let area = framed_area(&GameConfig::default());
        assert_eq!(area, Vec2::new(440.0, 740.0));
    }
}
