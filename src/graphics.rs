//! Camera, sprites, and the screen-space → world-space bridge.
//!
//! Gameplay positions are integer screen rectangles (top-left origin, y
//! down).  Every `Present` pass copies each rectangle's centre into the
//! entity's `Transform`, converting to Bevy's centred, y-up world space:
//!
//! ```text
//! world.x = screen.x - screen_width  / 2
//! world.y = screen_height / 2 - screen.y
//! ```
//!
//! Sprites use `custom_size` taken from the settings, so drawn size always
//! matches the collision rectangle regardless of the image's pixel size.

use crate::alien::Alien;
use crate::config::GameSettings;
use crate::error::{GameError, GameResult};
use crate::geometry::Body;
use crate::menu::play_button_system;
use crate::ship::{Bullet, Ship};
use crate::simulation::{FrameSet, PointerPressed, PointerState};
use bevy::prelude::*;
use bevy::window::{CursorOptions, PrimaryWindow};
use std::path::Path;

/// Directory Bevy's `AssetServer` resolves relative paths against.
pub const ASSETS_DIR: &str = "assets";

/// Bullets draw beneath ships and aliens.
const BULLET_Z: f32 = 0.0;
const SHIP_Z: f32 = 1.0;
const ALIEN_Z: f32 = 1.0;

/// Image handles for the two sprite kinds.
#[derive(Resource, Default)]
pub struct SpriteAssets {
    pub ship: Handle<Image>,
    pub alien: Handle<Image>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Windowed presentation of the simulation: camera, sprites, mouse input,
/// and cursor visibility.
pub struct GraphicsPlugin;

impl Plugin for GraphicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteAssets>()
            .add_systems(Startup, (setup_camera, load_sprite_assets))
            .add_systems(
                Update,
                mouse_press_system
                    .in_set(FrameSet::Input)
                    .before(play_button_system),
            )
            .add_systems(
                Update,
                (
                    attach_ship_sprite_system,
                    attach_alien_sprite_system,
                    attach_bullet_sprite_system,
                    sync_body_transform_system::<Ship>,
                    sync_body_transform_system::<Alien>,
                    sync_body_transform_system::<Bullet>,
                    sync_cursor_visibility_system,
                )
                    .chain()
                    .in_set(FrameSet::Present),
            );
    }
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Confirm every configured sprite image exists before the window opens.
///
/// Bevy loads images asynchronously and only logs a missing file, so the
/// check is done up front to fail fast.
pub fn verify_sprite_assets(settings: &GameSettings) -> GameResult<()> {
    for image in [&settings.ship_image, &settings.alien_image] {
        let path = Path::new(ASSETS_DIR).join(image);
        if !path.is_file() {
            return Err(GameError::MissingAsset {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}

/// Spawn the 2D camera and set the background fill.
pub fn setup_camera(mut commands: Commands, settings: Res<GameSettings>) {
    let [r, g, b] = settings.bg_color;
    commands.insert_resource(ClearColor(Color::srgb_u8(r, g, b)));
    commands.spawn(Camera2d);
    debug!("Camera spawned");
}

pub fn load_sprite_assets(
    mut sprites: ResMut<SpriteAssets>,
    asset_server: Res<AssetServer>,
    settings: Res<GameSettings>,
) {
    sprites.ship = asset_server.load(settings.ship_image.clone());
    sprites.alien = asset_server.load(settings.alien_image.clone());
}

// ── Coordinate conversion ─────────────────────────────────────────────────────

/// Convert a screen-space point to world space.
pub fn screen_to_world(point: Vec2, settings: &GameSettings) -> Vec2 {
    Vec2::new(
        point.x - settings.screen_width as f32 / 2.0,
        settings.screen_height as f32 / 2.0 - point.y,
    )
}

fn world_translation(body: &impl Body, settings: &GameSettings, z: f32) -> Transform {
    Transform::from_translation(screen_to_world(body.rect().center(), settings).extend(z))
}

// ── Sprite attachment ─────────────────────────────────────────────────────────

pub fn attach_ship_sprite_system(
    mut commands: Commands,
    q_ship: Query<(Entity, &Ship), Added<Ship>>,
    sprites: Res<SpriteAssets>,
    settings: Res<GameSettings>,
) {
    for (entity, ship) in q_ship.iter() {
        commands.entity(entity).insert((
            Sprite {
                image: sprites.ship.clone(),
                custom_size: Some(ship.rect.size()),
                ..default()
            },
            world_translation(ship, &settings, SHIP_Z),
        ));
    }
}

pub fn attach_alien_sprite_system(
    mut commands: Commands,
    q_aliens: Query<(Entity, &Alien), Added<Alien>>,
    sprites: Res<SpriteAssets>,
    settings: Res<GameSettings>,
) {
    for (entity, alien) in q_aliens.iter() {
        commands.entity(entity).insert((
            Sprite {
                image: sprites.alien.clone(),
                custom_size: Some(alien.rect.size()),
                ..default()
            },
            world_translation(alien, &settings, ALIEN_Z),
        ));
    }
}

/// Bullets are plain filled rectangles in their own colour.
pub fn attach_bullet_sprite_system(
    mut commands: Commands,
    q_bullets: Query<(Entity, &Bullet), Added<Bullet>>,
    settings: Res<GameSettings>,
) {
    for (entity, bullet) in q_bullets.iter() {
        let [r, g, b] = bullet.color;
        commands.entity(entity).insert((
            Sprite::from_color(Color::srgb_u8(r, g, b), bullet.rect.size()),
            world_translation(bullet, &settings, BULLET_Z),
        ));
    }
}

// ── Per-frame sync ────────────────────────────────────────────────────────────

/// Copy each body's screen rectangle into its `Transform`, keeping z.
pub fn sync_body_transform_system<T: Component + Body>(
    settings: Res<GameSettings>,
    mut q_bodies: Query<(&T, &mut Transform)>,
) {
    for (body, mut transform) in q_bodies.iter_mut() {
        let world = screen_to_world(body.rect().center(), &settings);
        if transform.translation.truncate() != world {
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
    }
}

/// Mirror [`PointerState`] onto the primary window's cursor.
pub fn sync_cursor_visibility_system(
    pointer: Res<PointerState>,
    mut q_cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if !pointer.is_changed() {
        return;
    }
    if let Ok(mut cursor) = q_cursor.single_mut() {
        cursor.visible = pointer.visible;
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Turn a left-button press into a [`PointerPressed`] at the cursor position.
///
/// `Window::cursor_position` already uses a top-left origin, so no
/// conversion is needed.
pub fn mouse_press_system(
    buttons: Res<ButtonInput<MouseButton>>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut presses: MessageWriter<PointerPressed>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = q_window.single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        presses.write(PointerPressed(cursor));
    }
}
