//! Runtime game configuration loaded from `assets/settings.toml`.
//!
//! [`GameSettings`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  Before the app is built, `main` calls
//! [`load_game_settings`] and inserts the result; any key missing from the
//! file falls back to the compile-time default, so a minimal TOML can
//! override just the values you care about.
//!
//! ## Two lifecycles
//!
//! | Part                | Set when                | Changed by                        |
//! |---------------------|-------------------------|-----------------------------------|
//! | static fields       | startup (file/defaults) | never                             |
//! | [`DynamicSettings`] | every new game          | [`GameSettings::increase_speed`]  |
//!
//! The fleet's travel direction is simulation state, not configuration; it
//! lives in [`crate::fleet::FleetDirection`].

use crate::constants::*;
use crate::error::{require_non_negative, require_positive, GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

/// Environment variable that overrides the settings file location.
pub const CONFIG_PATH_ENV: &str = "ALIEN_INVASION_CONFIG";

/// Default settings file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "assets/settings.toml";

/// Difficulty-scaled values, reset at the start of every game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
}

impl Default for DynamicSettings {
    fn default() -> Self {
        Self {
            ship_speed: SHIP_SPEED,
            bullet_speed: BULLET_SPEED,
            alien_speed: ALIEN_SPEED,
            alien_points: ALIEN_POINTS,
        }
    }
}

/// Runtime-tunable gameplay configuration.
///
/// All static fields default to the corresponding constant from
/// `src/constants.rs`.  The `*_speed` and `alien_points` fields here are the
/// level-1 *base* values; the live, scaled values are in [`Self::dynamic`].
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub screen_width: u32,
    pub screen_height: u32,
    pub bg_color: [u8; 3],

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,
    pub ship_speed: f32,
    pub ship_image: String,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: [u8; 3],
    pub bullets_allowed: u32,

    // ── Aliens ───────────────────────────────────────────────────────────────
    pub alien_width: i32,
    pub alien_height: i32,
    pub alien_speed: f32,
    pub alien_points: u32,
    pub fleet_drop_speed: i32,
    pub alien_image: String,

    // ── Difficulty scaling ───────────────────────────────────────────────────
    pub speedup_scale: f32,
    pub score_scale: f32,

    // ── Flow / HUD ───────────────────────────────────────────────────────────
    pub hit_pause_secs: f32,
    pub play_button_width: i32,
    pub play_button_height: i32,
    pub hud_font_size: f32,

    /// Live difficulty-scaled values; never read from the file.
    #[serde(skip)]
    pub dynamic: DynamicSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bg_color: BG_COLOR,
            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_limit: SHIP_LIMIT,
            ship_speed: SHIP_SPEED,
            ship_image: SHIP_IMAGE.to_string(),
            bullet_speed: BULLET_SPEED,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_color: BULLET_COLOR,
            bullets_allowed: BULLETS_ALLOWED,
            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            alien_speed: ALIEN_SPEED,
            alien_points: ALIEN_POINTS,
            fleet_drop_speed: FLEET_DROP_SPEED,
            alien_image: ALIEN_IMAGE.to_string(),
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
            hit_pause_secs: HIT_PAUSE_SECS,
            play_button_width: PLAY_BUTTON_WIDTH,
            play_button_height: PLAY_BUTTON_HEIGHT,
            hud_font_size: HUD_FONT_SIZE,
            dynamic: DynamicSettings::default(),
        }
    }
}

impl GameSettings {
    /// Reset ship/bullet/alien speed and alien points to their base values.
    pub fn initialize_dynamic_settings(&mut self) {
        self.dynamic = DynamicSettings {
            ship_speed: self.ship_speed,
            bullet_speed: self.bullet_speed,
            alien_speed: self.alien_speed,
            alien_points: self.alien_points,
        };
    }

    /// Level-up scaling: speeds grow by `speedup_scale`, points by `score_scale`.
    pub fn increase_speed(&mut self) {
        let d = &mut self.dynamic;
        d.ship_speed *= self.speedup_scale;
        d.bullet_speed *= self.speedup_scale;
        d.alien_speed *= self.speedup_scale;
        let scaled = d.alien_points as f32 * self.score_scale;
        d.alien_points = scaled.min(u32::MAX as f32) as u32;
    }

    /// Reject values the game cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        require_positive("screen_width", self.screen_width as f64)?;
        require_positive("screen_height", self.screen_height as f64)?;
        require_positive("ship_width", self.ship_width as f64)?;
        require_positive("ship_height", self.ship_height as f64)?;
        require_positive("bullet_width", self.bullet_width as f64)?;
        require_positive("bullet_height", self.bullet_height as f64)?;
        require_positive("bullets_allowed", self.bullets_allowed as f64)?;
        require_positive("alien_width", self.alien_width as f64)?;
        require_positive("alien_height", self.alien_height as f64)?;
        require_positive("speedup_scale", self.speedup_scale as f64)?;
        require_positive("score_scale", self.score_scale as f64)?;
        require_non_negative("ship_speed", self.ship_speed as f64)?;
        require_non_negative("bullet_speed", self.bullet_speed as f64)?;
        require_non_negative("alien_speed", self.alien_speed as f64)?;
        require_non_negative("fleet_drop_speed", self.fleet_drop_speed as f64)?;
        require_non_negative("hit_pause_secs", self.hit_pause_secs as f64)?;
        if crate::fleet::fleet_layout(self).is_empty() {
            return Err(GameError::InvalidSetting {
                name: "alien_width/alien_height",
                value: self.alien_width.max(self.alien_height) as f64,
                expected: "small enough for one alien to fit on screen",
            });
        }
        Ok(())
    }

    /// Parse settings from TOML text, validate them, and prime the dynamic values.
    pub fn from_toml_str(path: &str, contents: &str) -> GameResult<Self> {
        let mut settings =
            toml::from_str::<GameSettings>(contents).map_err(|e| GameError::ConfigParse {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        settings.validate()?;
        settings.initialize_dynamic_settings();
        Ok(settings)
    }
}

/// Resolve the settings path: `$ALIEN_INVASION_CONFIG` or `assets/settings.toml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Attempt to load settings from `path`.
///
/// `Ok(None)` means the file does not exist and the caller should use
/// [`GameSettings::default`].  Read, parse, and validation failures are
/// returned so the caller can report them.
pub fn load_game_settings(path: &Path) -> GameResult<Option<GameSettings>> {
    let display = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(contents) => GameSettings::from_toml_str(&display, &contents).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GameError::ConfigRead {
            path: display,
            message: e.to_string(),
        }),
    }
}
