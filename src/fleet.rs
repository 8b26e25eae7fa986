//! Fleet layout and fleet-wide movement.
//!
//! ## Layout
//!
//! Aliens fill a dense grid with one alien-width of spacing between columns
//! and one alien-height between rows.  The margins leave room for the ship
//! and a gap of clear space above it:
//!
//! ```text
//! columns = (screen_width  - 2·alien_width)                  / (2·alien_width)
//! rows    = (screen_height - 3·alien_height - ship_height)   / (2·alien_height)
//! ```
//!
//! ## Movement
//!
//! The fleet marches sideways in [`FleetDirection`].  When any alien touches
//! a side edge the whole fleet drops by `fleet_drop_speed` and the direction
//! flips, before that frame's horizontal step.

use crate::alien::Alien;
use crate::config::GameSettings;
use bevy::prelude::*;

/// Horizontal march direction of the fleet: `1.0` is right, `-1.0` is left.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FleetDirection(pub f32);

impl Default for FleetDirection {
    fn default() -> Self {
        Self(1.0)
    }
}

impl FleetDirection {
    pub fn flip(&mut self) {
        self.0 = -self.0;
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Number of aliens that fit in one row.
pub fn get_number_aliens_x(settings: &GameSettings, alien_width: i32) -> u32 {
    let available_space_x = settings.screen_width as i32 - 2 * alien_width;
    (available_space_x / (2 * alien_width)).max(0) as u32
}

/// Number of alien rows that fit above the ship.
pub fn get_number_rows(settings: &GameSettings, ship_height: i32, alien_height: i32) -> u32 {
    let available_space_y = settings.screen_height as i32 - 3 * alien_height - ship_height;
    (available_space_y / (2 * alien_height)).max(0) as u32
}

/// Top-left corners of every alien in a fresh fleet, row-major.
pub fn fleet_layout(settings: &GameSettings) -> Vec<IVec2> {
    let w = settings.alien_width;
    let h = settings.alien_height;
    let columns = get_number_aliens_x(settings, w) as i32;
    let rows = get_number_rows(settings, settings.ship_height, h) as i32;

    let mut corners = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for column in 0..columns {
            corners.push(IVec2::new(w + 2 * w * column, h + 2 * h * row));
        }
    }
    corners
}

/// Spawn one alien per layout slot.  Returns the number spawned.
pub fn create_fleet(commands: &mut Commands, settings: &GameSettings) -> usize {
    let corners = fleet_layout(settings);
    for corner in &corners {
        commands.spawn(Alien::at(settings, corner.x, corner.y));
    }
    corners.len()
}

/// Startup system: the initial fleet shown behind the Play button.
pub fn spawn_fleet_system(mut commands: Commands, settings: Res<GameSettings>) {
    let count = create_fleet(&mut commands, &settings);
    debug!("Spawned initial fleet of {} aliens", count);
}

// ── Movement ──────────────────────────────────────────────────────────────────

/// Drop the fleet and reverse its direction when any alien touches a side.
pub fn fleet_edge_system(
    settings: Res<GameSettings>,
    mut direction: ResMut<FleetDirection>,
    mut q_aliens: Query<&mut Alien>,
) {
    let screen_width = settings.screen_width as i32;
    if !q_aliens.iter().any(|alien| alien.check_edges(screen_width)) {
        return;
    }
    for mut alien in q_aliens.iter_mut() {
        alien.drop_by(settings.fleet_drop_speed);
    }
    direction.flip();
}

/// Step every alien sideways at the current dynamic alien speed.
pub fn update_aliens_system(
    settings: Res<GameSettings>,
    direction: Res<FleetDirection>,
    mut q_aliens: Query<&mut Alien>,
) {
    let speed = settings.dynamic.alien_speed;
    for mut alien in q_aliens.iter_mut() {
        alien.update(speed, direction.0);
    }
}
