//! Keyboard handling and per-frame ship movement.
//!
//! | Key | Effect |
//! |-----|--------|
//! | Right arrow | `moving_right` follows the key's held state |
//! | Left arrow  | `moving_left` follows the key's held state |
//! | Space       | fire; handled by [`super::combat::fire_bullet_system`] |
//! | Q           | quit |
//!
//! Flags are driven by press/release edges, so they keep their value across
//! the hit pause and the inactive state.

use super::state::Ship;
use crate::config::GameSettings;
use bevy::prelude::*;

/// Set or clear the ship's movement flags on arrow-key press and release.
pub fn ship_movement_keys_system(keys: Res<ButtonInput<KeyCode>>, mut q_ship: Query<&mut Ship>) {
    let Ok(mut ship) = q_ship.single_mut() else {
        return;
    };

    if keys.just_pressed(KeyCode::ArrowRight) {
        ship.moving_right = true;
    }
    if keys.just_released(KeyCode::ArrowRight) {
        ship.moving_right = false;
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        ship.moving_left = true;
    }
    if keys.just_released(KeyCode::ArrowLeft) {
        ship.moving_left = false;
    }
}

/// Q ends the process; works in every state.
pub fn quit_key_system(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::KeyQ) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}

/// Move the ship one step according to its flags.
pub fn ship_update_system(settings: Res<GameSettings>, mut q_ship: Query<&mut Ship>) {
    if let Ok(mut ship) = q_ship.single_mut() {
        ship.update(&settings);
    }
}
