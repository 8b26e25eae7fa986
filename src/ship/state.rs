//! The player's ship.

use crate::config::GameSettings;
use crate::geometry::{Body, ScreenRect};
use bevy::prelude::*;

/// The player's ship.
///
/// `center` is the fractional horizontal centre; the integer `rect` is
/// re-derived from it after every move so sub-pixel speeds accumulate.
#[derive(Component, Debug, Clone)]
pub struct Ship {
    pub rect: ScreenRect,
    center: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    /// A stationary ship centred on the bottom edge of the screen.
    pub fn new(settings: &GameSettings) -> Self {
        let mut ship = Self {
            rect: ScreenRect::new(0, 0, settings.ship_width, settings.ship_height),
            center: 0.0,
            moving_right: false,
            moving_left: false,
        };
        ship.center_ship(settings);
        ship
    }

    /// Fractional horizontal centre in screen pixels.
    pub fn center(&self) -> f32 {
        self.center
    }

    /// Move back to bottom-centre.  Movement flags are left untouched so a
    /// held arrow key keeps working after a respawn.
    pub fn center_ship(&mut self, settings: &GameSettings) {
        let cx = settings.screen_width as i32 / 2;
        self.center = cx as f32;
        self.rect.set_center_x(cx);
        self.rect.set_bottom(settings.screen_height as i32);
    }

    /// Apply one frame of movement at the current dynamic ship speed.
    ///
    /// Both flags may be set at once; the moves then cancel out.  The ship
    /// never leaves `[0, screen_width]`.
    pub fn update(&mut self, settings: &GameSettings) {
        let speed = settings.dynamic.ship_speed;
        let screen_width = settings.screen_width as i32;

        if self.moving_right && self.rect.right() < screen_width {
            self.center += speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.center -= speed;
        }

        let half = self.rect.width as f32 / 2.0;
        self.center = self.center.max(half).min(screen_width as f32 - half);
        self.rect.set_center_x(self.center as i32);
    }
}

impl Body for Ship {
    fn rect(&self) -> ScreenRect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GameSettings {
        let mut s = GameSettings {
            screen_width: 400,
            screen_height: 300,
            ship_width: 20,
            ship_height: 20,
            ship_speed: 1.5,
            ..Default::default()
        };
        s.initialize_dynamic_settings();
        s
    }

    #[test]
    fn new_ship_sits_on_bottom_centre() {
        let ship = Ship::new(&settings());
        assert_eq!(ship.rect.center_x(), 200);
        assert_eq!(ship.rect.bottom(), 300);
        assert!(!ship.moving_left && !ship.moving_right);
    }

    #[test]
    fn fractional_speed_accumulates() {
        let s = settings();
        let mut ship = Ship::new(&s);
        ship.moving_right = true;
        ship.update(&s);
        assert_eq!(ship.rect.center_x(), 201);
        ship.update(&s);
        assert_eq!(ship.rect.center_x(), 203);
        assert!((ship.center() - 203.0).abs() < 1e-5);
    }

    #[test]
    fn opposing_flags_cancel() {
        let s = settings();
        let mut ship = Ship::new(&s);
        ship.moving_left = true;
        ship.moving_right = true;
        for _ in 0..10 {
            ship.update(&s);
        }
        assert_eq!(ship.rect.center_x(), 200);
    }

    #[test]
    fn ship_stays_on_screen() {
        let s = settings();
        let mut ship = Ship::new(&s);
        ship.moving_right = true;
        for _ in 0..500 {
            ship.update(&s);
        }
        assert_eq!(ship.rect.right(), 400);

        ship.moving_right = false;
        ship.moving_left = true;
        for _ in 0..500 {
            ship.update(&s);
        }
        assert_eq!(ship.rect.left(), 0);
    }

    #[test]
    fn centering_keeps_movement_flags() {
        let s = settings();
        let mut ship = Ship::new(&s);
        ship.moving_left = true;
        for _ in 0..20 {
            ship.update(&s);
        }
        ship.center_ship(&s);
        assert_eq!(ship.rect.center_x(), 200);
        assert!(ship.moving_left);
    }
}
