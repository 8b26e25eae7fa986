//! A single alien in the fleet.
//!
//! Aliens carry no direction of their own; the fleet-wide
//! [`crate::fleet::FleetDirection`] is passed in on every update.

use crate::config::GameSettings;
use crate::geometry::{Body, ScreenRect};
use bevy::prelude::*;

#[derive(Component, Debug, Clone)]
pub struct Alien {
    pub rect: ScreenRect,
    /// Fractional horizontal position; `rect.x` is its truncation.
    x: f32,
}

impl Alien {
    /// An alien with its top-left corner at `(x, y)`.
    pub fn at(settings: &GameSettings, x: i32, y: i32) -> Self {
        Self {
            rect: ScreenRect::new(x, y, settings.alien_width, settings.alien_height),
            x: x as f32,
        }
    }

    /// `true` when the alien touches or passes either side of the screen.
    pub fn check_edges(&self, screen_width: i32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0
    }

    /// Step horizontally by `speed × direction`.
    pub fn update(&mut self, speed: f32, direction: f32) {
        self.x += speed * direction;
        self.rect.x = self.x as i32;
    }

    pub fn drop_by(&mut self, pixels: i32) {
        self.rect.y += pixels;
    }
}

impl Body for Alien {
    fn rect(&self) -> ScreenRect {
        self.rect
    }
}
