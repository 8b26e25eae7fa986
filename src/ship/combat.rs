//! Bullets: firing, travel, and culling.

use super::state::Ship;
use crate::config::GameSettings;
use crate::geometry::{Body, ScreenRect};
use bevy::prelude::*;

/// A bullet travelling straight up from where it was fired.
///
/// Speed and colour are captured at fire time.
#[derive(Component, Debug, Clone)]
pub struct Bullet {
    pub rect: ScreenRect,
    y: f32,
    speed: f32,
    pub color: [u8; 3],
}

impl Bullet {
    /// A bullet horizontally centred on `ship_rect` with its top on the ship's top.
    pub fn new(settings: &GameSettings, ship_rect: ScreenRect) -> Self {
        let mut rect = ScreenRect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_center_x(ship_rect.center_x());
        rect.y = ship_rect.top();
        Self {
            rect,
            y: rect.y as f32,
            speed: settings.dynamic.bullet_speed,
            color: settings.bullet_color,
        }
    }

    /// Move up by `speed`; the integer rect follows the truncated position,
    /// the same rounding [`crate::alien::Alien`] uses.
    pub fn update(&mut self) {
        self.y -= self.speed;
        self.rect.y = self.y as i32;
    }

    /// `true` once the bullet is entirely above the top edge.
    pub fn is_expired(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Body for Bullet {
    fn rect(&self) -> ScreenRect {
        self.rect
    }
}

/// Whether another bullet may be fired with `live` bullets on screen.
#[inline]
pub fn can_fire(live: usize, settings: &GameSettings) -> bool {
    live < settings.bullets_allowed as usize
}

/// Space fires one bullet from the ship, subject to the live-bullet cap.
///
/// Runs inside the gameplay set, so presses during the hit pause or while
/// the game is inactive are ignored.
pub fn fire_bullet_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<GameSettings>,
    q_ship: Query<&Ship>,
    q_bullets: Query<(), With<Bullet>>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    let Ok(ship) = q_ship.single() else {
        return;
    };
    if can_fire(q_bullets.iter().count(), &settings) {
        commands.spawn(Bullet::new(&settings, ship.rect));
    }
}

/// Advance every bullet and despawn the ones that left the screen.
pub fn update_bullets_system(mut commands: Commands, mut q_bullets: Query<(Entity, &mut Bullet)>) {
    for (entity, mut bullet) in q_bullets.iter_mut() {
        bullet.update();
        if bullet.is_expired() {
            commands.entity(entity).despawn();
        }
    }
}
