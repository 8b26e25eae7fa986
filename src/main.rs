use alien_invasion::config::{config_path, load_game_settings, GameSettings};
use alien_invasion::graphics::verify_sprite_assets;
use alien_invasion::GamePlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;
use std::process::ExitCode;

/// Load settings from disk, falling back to compiled defaults.
///
/// Runs before the app exists, so messages go straight to stdout/stderr.
fn resolve_settings() -> GameSettings {
    let path = config_path();
    match load_game_settings(Path::new(&path)) {
        Ok(Some(settings)) => {
            println!("✓ Loaded game settings from {path}");
            settings
        }
        Ok(None) => {
            println!("ℹ No {path} found; using compiled defaults");
            GameSettings::default()
        }
        Err(e) => {
            eprintln!("⚠ {e}; using defaults");
            GameSettings::default()
        }
    }
}

fn main() -> ExitCode {
    let settings = resolve_settings();

    if let Err(e) = verify_sprite_assets(&settings) {
        eprintln!("✗ {e}");
        return ExitCode::FAILURE;
    }

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Alien Invasion".into(),
            resolution: WindowResolution::new(settings.screen_width, settings.screen_height),
            resizable: false,
            ..Default::default()
        }),
        ..Default::default()
    }))
    // Inserted before GamePlugin so the simulation sizes its resources from it.
    .insert_resource(settings)
    .add_plugins(GamePlugin);

    match app.run() {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(_) => ExitCode::FAILURE,
    }
}
