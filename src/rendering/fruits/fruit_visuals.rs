//! Presentation of fruit bodies: a colored disc with the rank glyph on top.
//!
//! Both visuals are children of the physics entity, so they follow the
//! body's position and rotation without any per-frame sync.

use bevy::prelude::*;

use crate::core::components::{Fruit, FruitDiscVisual, FruitGlyphVisual};
use crate::core::config::GameConfig;
use crate::core::playfield::Playfield;
use crate::core::system::system_order::{configure_game_sets, PresentationSet};
use crate::rendering::materials::materials::{
    FruitDiscMesh, FruitDisplayMaterials, GlyphFont, MaterialsPlugin,
};

pub struct FruitVisualsPlugin;

impl Plugin for FruitVisualsPlugin {
    fn build(&self, app: &mut App) {
        configure_game_sets(app);
        app.add_plugins(MaterialsPlugin).add_systems(
            Update,
            (attach_fruit_visuals, draw_danger_line).in_set(PresentationSet),
        );
    }
}

fn attach_fruit_visuals(
    mut commands: Commands,
    new_fruits: Query<(Entity, &Fruit), Added<Fruit>>,
    disc: Res<FruitDiscMesh>,
    materials: Res<FruitDisplayMaterials>,
    font: Res<GlyphFont>,
    cfg: Res<GameConfig>,
) {
    for (entity, fruit) in &new_fruits {
        let def = fruit.rank.definition();
        let Some(material) = materials.0.get(def.index) else {
            warn!(target: "render", "no material for rank {}", def.index);
            continue;
        };
        let glyph_size = def.radius * cfg.presentation.glyph_scale;
        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Mesh2d(disc.0.clone()),
                MeshMaterial2d(material.clone()),
                Transform::from_scale(Vec3::splat(def.radius)),
                FruitDiscVisual,
            ));
            parent.spawn((
                Text2d::new(font.label(def)),
                TextFont {
                    font: font.handle.clone(),
                    font_size: glyph_size,
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_translation(Vec3::new(0.0, 0.0, 0.1)),
                FruitGlyphVisual,
            ));
        });
    }
}

fn draw_danger_line(mut gizmos: Gizmos, cfg: Res<GameConfig>) {
    if !cfg.presentation.draw_danger_line {
        return;
    }
    let playfield = Playfield::from(&cfg.playfield);
    let y = playfield.danger_line_world_y();
    let half_w = playfield.width * 0.5;
    gizmos.line_2d(
        Vec2::new(-half_w, y),
        Vec2::new(half_w, y),
        Color::srgba(0.86, 0.15, 0.15, 0.8),
    );
}
