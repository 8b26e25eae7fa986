//! Alien Invasion: a fleet-shooter arcade game built on Bevy.
//!
//! ## Plugins
//!
//! | Plugin | Module | Needs a window |
//! |--------|--------|----------------|
//! | [`simulation::SimulationPlugin`] | gameplay loop, stats, fleet, collisions | no |
//! | [`graphics::GraphicsPlugin`] | camera, sprites, mouse, cursor | yes |
//! | [`rendering::HudPlugin`] | score / level / ships readouts | yes |
//! | [`menu::MenuPlugin`] | Play button overlay | yes |
//!
//! [`GamePlugin`] bundles all four.  Headless tests add only
//! `SimulationPlugin` on top of `MinimalPlugins`.

pub mod alien;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod fleet;
pub mod geometry;
pub mod graphics;
pub mod menu;
pub mod rendering;
pub mod scoreboard;
pub mod ship;
pub mod simulation;
pub mod stats;

use bevy::prelude::*;

/// Full windowed game: simulation plus every presentation plugin.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            simulation::SimulationPlugin,
            graphics::GraphicsPlugin,
            rendering::HudPlugin,
            menu::MenuPlugin,
        ));
    }
}
