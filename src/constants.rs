//! Centralised gameplay constants.
//!
//! Every tuneable value lives here so it can be found and changed in one
//! place.  [`crate::config::GameSettings::default`] is built from these, and
//! `assets/settings.toml` may override any of them at startup.
//!
//! All distances are screen pixels and all speeds are pixels per frame.

// ── Screen ────────────────────────────────────────────────────────────────────

/// Logical window width in pixels.
pub const SCREEN_WIDTH: u32 = 1200;

/// Logical window height in pixels.
pub const SCREEN_HEIGHT: u32 = 800;

/// Background fill colour (sRGB bytes).
pub const BG_COLOR: [u8; 3] = [230, 230, 230];

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Ship sprite width.  Must match the drawn footprint of `SHIP_IMAGE`.
pub const SHIP_WIDTH: i32 = 60;

/// Ship sprite height.  Also reserves vertical room below the fleet.
pub const SHIP_HEIGHT: i32 = 48;

/// Reserve ships granted at the start of each game.
///
/// The ship in play is not counted, so a value of 3 means the player can be
/// hit three times and keep playing; the fourth hit ends the game.
pub const SHIP_LIMIT: u32 = 3;

/// Horizontal ship speed at level 1.
pub const SHIP_SPEED: f32 = 1.5;

/// Asset-relative path of the ship image.
pub const SHIP_IMAGE: &str = "images/ship.png";

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Vertical bullet speed at level 1.
pub const BULLET_SPEED: f32 = 3.0;

pub const BULLET_WIDTH: i32 = 3;
pub const BULLET_HEIGHT: i32 = 15;
pub const BULLET_COLOR: [u8; 3] = [60, 60, 60];

/// Hard cap on simultaneously live bullets.  Firing at the cap is a no-op.
pub const BULLETS_ALLOWED: u32 = 3;

// ── Aliens ────────────────────────────────────────────────────────────────────

pub const ALIEN_WIDTH: i32 = 60;
pub const ALIEN_HEIGHT: i32 = 58;

/// Horizontal alien speed at level 1.
pub const ALIEN_SPEED: f32 = 1.0;

/// Pixels the whole fleet steps down each time it touches a screen edge.
pub const FLEET_DROP_SPEED: i32 = 10;

/// Points per alien destroyed at level 1.
pub const ALIEN_POINTS: u32 = 50;

/// Asset-relative path of the alien image.
pub const ALIEN_IMAGE: &str = "images/alien.png";

// ── Difficulty scaling ────────────────────────────────────────────────────────

/// Multiplier applied to ship, bullet, and alien speed on every level-up.
pub const SPEEDUP_SCALE: f32 = 1.1;

/// Multiplier applied to alien point value on every level-up.
pub const SCORE_SCALE: f32 = 1.5;

// ── Flow ──────────────────────────────────────────────────────────────────────

/// Seconds the simulation stays frozen after the ship is hit.
pub const HIT_PAUSE_SECS: f32 = 0.5;

// ── HUD / menu ────────────────────────────────────────────────────────────────

pub const PLAY_BUTTON_WIDTH: i32 = 200;
pub const PLAY_BUTTON_HEIGHT: i32 = 50;

/// Font size for the score, level, and high-score readouts.
pub const HUD_FONT_SIZE: f32 = 32.0;

/// Gap between the screen edge and the HUD readouts.
pub const HUD_MARGIN: f32 = 20.0;
