//! Play button: hit-testing (core) and the on-screen overlay (presentation).
//!
//! ## Systems
//!
//! | System                       | Registered by       | Set       | Purpose                                   |
//! |------------------------------|---------------------|-----------|-------------------------------------------|
//! | `play_button_system`         | `SimulationPlugin`  | `Input`   | Start a new game on a click inside the button |
//! | `setup_play_button`          | `MenuPlugin`        | `Startup` | Spawn the button UI node                  |
//! | `play_button_visibility_system` | `MenuPlugin`     | `Present` | Show the button only while the game is inactive |
//! | `play_button_hover_system`   | `MenuPlugin`        | `Present` | Brighten the button under the cursor      |
//!
//! Clicks are hit-tested against [`PlayButton::rect`] rather than through UI
//! `Interaction`, so headless tests can start a game by writing a
//! [`PointerPressed`] message.

use crate::alien::Alien;
use crate::config::GameSettings;
use crate::fleet::FleetDirection;
use crate::geometry::ScreenRect;
use crate::scoreboard::Scoreboard;
use crate::ship::{Bullet, Ship};
use crate::simulation::{start_new_game, FrameSet, NewGame, PointerPressed, PointerState};
use crate::stats::GameStats;
use bevy::prelude::*;

/// Screen-space bounds of the Play button.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayButton {
    pub rect: ScreenRect,
}

impl PlayButton {
    /// A `play_button_width × play_button_height` button in the middle of the screen.
    pub fn centered(settings: &GameSettings) -> Self {
        let w = settings.play_button_width;
        let h = settings.play_button_height;
        Self {
            rect: ScreenRect::new(
                (settings.screen_width as i32 - w) / 2,
                (settings.screen_height as i32 - h) / 2,
                w,
                h,
            ),
        }
    }
}

/// Tags the Play button's UI node.
#[derive(Component)]
pub struct PlayButtonNode;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn button_bg() -> Color {
    Color::srgb_u8(0, 255, 0)
}
fn button_bg_hovered() -> Color {
    Color::srgb_u8(80, 255, 80)
}
fn button_text() -> Color {
    Color::WHITE
}

// ── Click handling ────────────────────────────────────────────────────────────

/// Start a new game when a press lands inside the Play button while the game
/// is inactive.  Presses elsewhere, or during play, do nothing.
#[allow(clippy::too_many_arguments)]
pub fn play_button_system(
    mut commands: Commands,
    mut presses: MessageReader<PointerPressed>,
    button: Res<PlayButton>,
    mut settings: ResMut<GameSettings>,
    mut stats: ResMut<GameStats>,
    mut board: ResMut<Scoreboard>,
    mut pointer: ResMut<PointerState>,
    mut direction: ResMut<FleetDirection>,
    mut q_ship: Query<&mut Ship>,
    q_aliens: Query<Entity, With<Alien>>,
    q_bullets: Query<Entity, With<Bullet>>,
) {
    let mut clicked = false;
    for press in presses.read() {
        clicked |= button.rect.contains_point(press.0);
    }
    if !clicked || stats.game_active {
        return;
    }

    let mut ship = q_ship.single_mut().ok();
    start_new_game(
        &mut commands,
        NewGame {
            settings: &mut *settings,
            stats: &mut *stats,
            board: &mut *board,
            pointer: &mut *pointer,
            direction: &mut *direction,
        },
        ship.as_deref_mut(),
        q_aliens.iter(),
        q_bullets.iter(),
    );
}

// ── Overlay ───────────────────────────────────────────────────────────────────

/// Spawns the Play button overlay and keeps it in step with the game state.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_play_button).add_systems(
            Update,
            (play_button_visibility_system, play_button_hover_system).in_set(FrameSet::Present),
        );
    }
}

fn setup_play_button(mut commands: Commands, button: Res<PlayButton>) {
    let rect = button.rect;
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(rect.x as f32),
                top: Val::Px(rect.y as f32),
                width: Val::Px(rect.width as f32),
                height: Val::Px(rect.height as f32),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(button_bg()),
            PlayButtonNode,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new("Play"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(button_text()),
            ));
        });
}

/// Visible exactly while the game is inactive.
pub fn play_button_visibility_system(
    stats: Res<GameStats>,
    mut q_button: Query<&mut Visibility, With<PlayButtonNode>>,
) {
    if !stats.is_changed() {
        return;
    }
    let target = if stats.game_active {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut visibility in q_button.iter_mut() {
        visibility.set_if_neq(target);
    }
}

#[allow(clippy::type_complexity)]
pub fn play_button_hover_system(
    mut q_button: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<PlayButtonNode>),
    >,
) {
    for (interaction, mut bg) in q_button.iter_mut() {
        *bg = match interaction {
            Interaction::Hovered | Interaction::Pressed => BackgroundColor(button_bg_hovered()),
            Interaction::None => BackgroundColor(button_bg()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_is_centred_on_screen() {
        let settings = GameSettings::default();
        let button = PlayButton::centered(&settings);
        assert_eq!(button.rect, ScreenRect::new(500, 375, 200, 50));
        assert!(button.rect.contains_point(Vec2::new(600.0, 400.0)));
        assert!(!button.rect.contains_point(Vec2::new(10.0, 10.0)));
    }
}
