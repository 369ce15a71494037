use bevy::prelude::*;

use crate::core::system::system_order::{configure_game_sets, InputSet, PresentationSet};
use crate::gameplay::events::{RestartRequested, RestartSource};
use crate::gameplay::state::GameState;
use crate::core::fruits::RankDefinition;
use crate::rendering::materials::materials::{FruitMaterialsInitSet, GlyphFont};

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct NextFruitText;

/// Overlay shown while the session is over.
#[derive(Component)]
pub struct GameOverPanel;

#[derive(Component)]
pub struct FinalScoreText;

/// Either of the two restart controls.
#[derive(Component, Debug, Clone, Copy)]
pub struct RestartButton(pub RestartSource);

const BUTTON_IDLE: Color = Color::srgb(0.93, 0.42, 0.42);
const BUTTON_HOVER: Color = Color::srgb(0.97, 0.55, 0.55);
const TEXT_DARK: Color = Color::srgb(0.2, 0.2, 0.2);

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        configure_game_sets(app);
        app.add_systems(Startup, spawn_hud.after(FruitMaterialsInitSet))
            .add_systems(Update, restart_button_system.in_set(InputSet))
            .add_systems(
                Update,
                (update_score_text, update_next_fruit_text, sync_game_over_panel)
                    .in_set(PresentationSet),
            );
    }
}

fn restart_button(parent: &mut ChildSpawnerCommands, source: RestartSource, label: &str) {
    parent
        .spawn((
            Button,
            RestartButton(source),
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|b| {
            b.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn spawn_hud(mut commands: Commands, glyph_font: Option<Res<GlyphFont>>) {
    let glyph_font = glyph_font.map(|f| f.handle.clone()).unwrap_or_default();

    commands
        .spawn((
            Name::new("HudBar"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(56.0),
                padding: UiRect::horizontal(Val::Px(16.0)),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|bar| {
            bar.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(TEXT_DARK),
                ScoreText,
            ));
            bar.spawn((
                Text::new("Next:"),
                TextFont {
                    font: glyph_font,
                    font_size: 22.0,
                    ..default()
                },
                TextColor(TEXT_DARK),
                NextFruitText,
            ));
            restart_button(bar, RestartSource::HudButton, "Restart");
        });

    commands
        .spawn((
            Name::new("GameOverPanel"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Visibility::Hidden,
            GameOverPanel,
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("Game Over"),
                TextFont {
                    font_size: 42.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            panel.spawn((
                Text::new("Final score: 0"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                FinalScoreText,
            ));
            restart_button(panel, RestartSource::PanelButton, "Play again");
        });
}

pub fn restart_button_system(
    mut buttons: Query<(&Interaction, &RestartButton, &mut BackgroundColor), Changed<Interaction>>,
    mut restarts: EventWriter<RestartRequested>,
) {
    for (interaction, button, mut bg) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                restarts.write(RestartRequested { source: button.0 });
            }
            Interaction::Hovered => bg.0 = BUTTON_HOVER,
            Interaction::None => bg.0 = BUTTON_IDLE,
        }
    }
}

fn update_score_text(state: Res<GameState>, mut text_q: Query<&mut Text, With<ScoreText>>) {
    if !state.is_changed() {
        return;
    }
    for mut text in &mut text_q {
        **text = format!("Score: {}", state.score);
    }
}

pub fn update_next_fruit_text(
    state: Res<GameState>,
    glyph_font: Option<Res<GlyphFont>>,
    mut text_q: Query<&mut Text, With<NextFruitText>>,
) {
    if !state.is_changed() {
        return;
    }
    let def = state.next_rank.definition();
    let emoji = glyph_font.is_some_and(|f| f.emoji);
    let label = next_fruit_label(def, emoji);
    for mut text in &mut text_q {
        **text = label.clone();
    }
}

fn next_fruit_label(def: &RankDefinition, emoji: bool) -> String {
    if emoji {
        format!("Next: {} {}", def.glyph, def.name)
    } else {
        format!("Next: {}", def.name)
    }
}

pub fn sync_game_over_panel(
    state: Res<GameState>,
    mut panel_q: Query<&mut Visibility, With<GameOverPanel>>,
    mut final_q: Query<&mut Text, With<FinalScoreText>>,
) {
    if !state.is_changed() {
        return;
    }
    let target = if state.game_over {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut vis in &mut panel_q {
        vis.set_if_neq(target);
    }
    if state.game_over {
        for mut text in &mut final_q {
            **text = format!("Final score: {}", state.score);
        }
    }
}
