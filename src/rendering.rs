//! Scoreboard HUD: score, high score, level, and reserve-ship icons.
//!
//! | Readout     | Position                               |
//! |-------------|----------------------------------------|
//! | Score       | top-right                              |
//! | High score  | top-centre                             |
//! | Level       | right-aligned, under the score         |
//! | Ships       | row of ship icons, top-left            |
//!
//! The text is prepared by [`Scoreboard`]; these systems only copy it into UI
//! nodes, and only on frames where the scoreboard changed.

use crate::config::GameSettings;
use crate::constants::HUD_MARGIN;
use crate::graphics::SpriteAssets;
use crate::scoreboard::Scoreboard;
use crate::simulation::FrameSet;
use bevy::prelude::*;

#[derive(Component)]
pub struct HudScoreDisplay;

#[derive(Component)]
pub struct HudHighScoreDisplay;

#[derive(Component)]
pub struct HudLevelDisplay;

/// Container for the reserve-ship icons.
#[derive(Component)]
pub struct HudShipsRow;

#[derive(Component)]
pub struct ReserveShipIcon;

fn hud_text_color() -> Color {
    Color::srgb_u8(30, 30, 30)
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_hud).add_systems(
            Update,
            (hud_text_system, hud_ships_system).in_set(FrameSet::Present),
        );
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

pub fn setup_hud(mut commands: Commands, settings: Res<GameSettings>, board: Res<Scoreboard>) {
    let font = TextFont {
        font_size: settings.hud_font_size,
        ..default()
    };

    commands.spawn((
        Text::new(board.score.clone()),
        font.clone(),
        TextColor(hud_text_color()),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_MARGIN),
            top: Val::Px(HUD_MARGIN),
            ..default()
        },
        HudScoreDisplay,
    ));

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            top: Val::Px(HUD_MARGIN),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(board.high_score.clone()),
                font.clone(),
                TextColor(hud_text_color()),
                HudHighScoreDisplay,
            ));
        });

    commands.spawn((
        Text::new(board.level.clone()),
        font,
        TextColor(hud_text_color()),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_MARGIN),
            top: Val::Px(HUD_MARGIN + settings.hud_font_size + 10.0),
            ..default()
        },
        HudLevelDisplay,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Row,
            ..default()
        },
        HudShipsRow,
    ));
}

// ── Update ────────────────────────────────────────────────────────────────────

/// Copy the scoreboard strings into the three text readouts.
#[allow(clippy::type_complexity)]
pub fn hud_text_system(
    board: Res<Scoreboard>,
    mut q_score: Query<
        &mut Text,
        (
            With<HudScoreDisplay>,
            Without<HudHighScoreDisplay>,
            Without<HudLevelDisplay>,
        ),
    >,
    mut q_high: Query<&mut Text, (With<HudHighScoreDisplay>, Without<HudLevelDisplay>)>,
    mut q_level: Query<&mut Text, With<HudLevelDisplay>>,
) {
    if !board.is_changed() {
        return;
    }
    for mut text in q_score.iter_mut() {
        text.0.clone_from(&board.score);
    }
    for mut text in q_high.iter_mut() {
        text.0.clone_from(&board.high_score);
    }
    for mut text in q_level.iter_mut() {
        text.0.clone_from(&board.level);
    }
}

/// Rebuild the reserve-ship icon row when the count changes.
pub fn hud_ships_system(
    mut commands: Commands,
    board: Res<Scoreboard>,
    settings: Res<GameSettings>,
    sprites: Res<SpriteAssets>,
    q_row: Query<Entity, With<HudShipsRow>>,
    q_icons: Query<Entity, With<ReserveShipIcon>>,
) {
    if !board.is_changed() {
        return;
    }
    if q_icons.iter().count() == board.ships as usize {
        return;
    }
    let Ok(row) = q_row.single() else {
        return;
    };

    for icon in q_icons.iter() {
        commands.entity(icon).despawn();
    }
    commands.entity(row).with_children(|row| {
        for _ in 0..board.ships {
            row.spawn((
                ImageNode::new(sprites.ship.clone()),
                Node {
                    width: Val::Px(settings.ship_width as f32),
                    height: Val::Px(settings.ship_height as f32),
                    ..default()
                },
                ReserveShipIcon,
            ));
        }
    });
}
