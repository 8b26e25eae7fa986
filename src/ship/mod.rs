//! Ship module: the player's ship, keyboard handling, and bullets.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | The `Ship` component: position, movement flags, clamped horizontal motion |
//! | [`control`] | Keyboard systems: arrow-key movement flags, quit key, per-frame ship update |
//! | [`combat`] | The `Bullet` component, firing under the live-bullet cap, bullet travel and culling |
//!
//! All public items are re-exported at this level so the rest of the crate can
//! use flat `crate::ship::*` imports.

pub mod combat;
pub mod control;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use combat::{can_fire, fire_bullet_system, update_bullets_system, Bullet};
pub use control::{quit_key_system, ship_movement_keys_system, ship_update_system};
pub use state::Ship;

// ── Ship spawn ────────────────────────────────────────────────────────────────

use crate::config::GameSettings;
use bevy::prelude::*;

/// Spawn the single ship entity, centred on the bottom edge of the screen.
///
/// The sprite is attached later by [`crate::graphics`] so this system stays
/// usable in headless apps.
pub fn spawn_ship(mut commands: Commands, settings: Res<GameSettings>) {
    commands.spawn(Ship::new(&settings));
}
