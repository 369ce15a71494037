use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::fruits::{RankDefinition, FRUITS};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct FruitMaterialsInitSet;

/// One fill material per rank, indexed by `Rank::index()`.
#[derive(Resource)]
pub struct FruitDisplayMaterials(pub Vec<Handle<ColorMaterial>>);

/// Unit circle scaled per fruit by its radius.
#[derive(Resource)]
pub struct FruitDiscMesh(pub Handle<Mesh>);

/// Font used for fruit glyphs and the next-fruit preview. `emoji` is false
/// for bevy's built-in font, which has no emoji code points.
#[derive(Resource, Default)]
pub struct GlyphFont {
    pub handle: Handle<Font>,
    pub emoji: bool,
}

impl GlyphFont {
    /// Text drawn for a rank: the emoji when the font can render it,
    /// otherwise the rank name's initial.
    pub fn label(&self, def: &RankDefinition) -> &'static str {
        glyph_label(def, self.emoji)
    }
}

pub fn glyph_label(def: &RankDefinition, emoji: bool) -> &'static str {
    if emoji {
        def.glyph
    } else {
        def.name.get(..1).unwrap_or(def.name)
    }
}

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_fruit_materials.in_set(FruitMaterialsInitSet));
    }
}

fn setup_fruit_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
) {
    let display_handles = FRUITS.iter().map(|def| materials.add(def.color())).collect();
    commands.insert_resource(FruitDisplayMaterials(display_handles));
    commands.insert_resource(FruitDiscMesh(meshes.add(Circle::new(1.0))));

    let glyph_font = match &cfg.presentation.glyph_font {
        Some(path) => {
            info!(target: "render", "Loading glyph font {path}");
            GlyphFont {
                handle: asset_server.load(path.clone()),
                emoji: true,
            }
        }
        None => {
            info!(target: "render", "No glyph font configured; labelling fruits by initial");
            GlyphFont::default()
        }
    };
    commands.insert_resource(glyph_font);
}
