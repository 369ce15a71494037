use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::ContainerWall;
use crate::core::config::GameConfig;

/// Static left wall, right wall and floor hugging the logical playfield.
pub fn spawn_container(mut commands: Commands, cfg: Res<GameConfig>) {
    let pf = &cfg.playfield;
    let half_w = pf.width * 0.5;
    let half_h = pf.height * 0.5;
    let t = pf.wall_thickness * 0.5;
    let wall_color = Color::srgb(1.0, 0.42, 0.42);

    let walls = [
        (
            ContainerWall::Left,
            Vec2::new(-half_w - t, 0.0),
            Vec2::new(t, half_h),
        ),
        (
            ContainerWall::Right,
            Vec2::new(half_w + t, 0.0),
            Vec2::new(t, half_h),
        ),
        (
            ContainerWall::Floor,
            Vec2::new(0.0, -half_h - t),
            Vec2::new(half_w + pf.wall_thickness * 2.0, t),
        ),
    ];

    for (wall, position, half_extents) in walls {
        commands
            .spawn((
                Name::new(format!("Wall{wall:?}")),
                wall,
                RigidBody::Fixed,
                Collider::cuboid(half_extents.x, half_extents.y),
                Transform::from_translation(position.extend(0.0)),
                GlobalTransform::default(),
                Visibility::Visible,
            ))
            .with_children(|parent| {
                parent.spawn((
                    Sprite {
                        color: wall_color,
                        custom_size: Some(half_extents * 2.0),
                        ..Default::default()
                    },
                    Transform::from_translation(Vec3::new(0.0, 0.0, -0.1)),
                ));
            });
    }
}
